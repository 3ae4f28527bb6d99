//! Fast inverse square root
//!
//! The classic bit-hack: treat the IEEE 754 bit pattern of an `f32` as an
//! integer, which is roughly a scaled and biased `log2(x)`. Halving it and
//! subtracting from a magic constant yields about `log2(1/sqrt(x))` in the
//! same encoding. One Newton-Raphson step on `f(y) = 1/y^2 - x` then brings
//! the guess to within ~0.175% of the true value.
//!
//! ```text
//! i  = bits(x)
//! i' = 0x5F3759DF - (i >> 1)
//! y0 = float(i')
//! y1 = y0 * (1.5 - 0.5 * x * y0 * y0)
//! ```
//!
//! Inputs are expected to be positive, finite and normal. Anything else
//! returns a meaningless value rather than an error.

/// Magic constant for the initial guess.
pub const MAGIC: u32 = 0x5F37_59DF;

/// Worst-case relative error of [`approx_inv_sqrt`] over positive normal inputs.
pub const MAX_RELATIVE_ERROR: f32 = 0.002;

/// Approximate `1 / sqrt(x)` with the magic-constant guess and one Newton step.
///
/// ```rust
/// let y = fisr::approx_inv_sqrt(4.0);
/// assert!((y - 0.5).abs() / 0.5 < 0.002);
/// ```
#[inline]
pub fn approx_inv_sqrt(x: f32) -> f32 {
    newton_step(x, initial_guess(x))
}

/// Bit-level initial guess, before any refinement.
///
/// The subtraction wraps so that negative inputs (sign bit set) give
/// garbage instead of an overflow panic.
#[inline]
pub fn initial_guess(x: f32) -> f32 {
    let i = x.to_bits();
    f32::from_bits(MAGIC.wrapping_sub(i >> 1))
}

/// One Newton-Raphson iteration for `1/y^2 - x = 0`.
#[inline]
pub fn newton_step(x: f32, y: f32) -> f32 {
    y * (1.5 - 0.5 * x * y * y)
}

/// Standard library comparison method.
#[inline]
pub fn reference_inv_sqrt(x: f32) -> f32 {
    1.0 / x.sqrt()
}

/// Relative error of `approx` against `exact`.
pub fn relative_error(approx: f32, exact: f32) -> f32 {
    ((approx - exact) / exact).abs()
}

/// Method-call form of [`approx_inv_sqrt`].
pub trait FastInvSqrt {
    fn fast_inv_sqrt(self) -> Self;
}

impl FastInvSqrt for f32 {
    #[inline]
    fn fast_inv_sqrt(self) -> Self {
        approx_inv_sqrt(self)
    }
}
