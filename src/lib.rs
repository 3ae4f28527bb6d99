//! fisr - Fast Inverse Square Root
//!
//! The magic-constant approximation of `1/sqrt(x)` for `f32`, tools to look
//! at the IEEE 754 bit layout it relies on, and a harness that times it
//! against the standard library.
//!
//! # Example
//!
//! ```rust
//! use fisr::{approx_inv_sqrt, binary_string, FastInvSqrt};
//!
//! let y = approx_inv_sqrt(18.75);
//! assert!((y - 0.230_940).abs() < 0.001);
//! assert_eq!(18.75f32.fast_inv_sqrt(), y);
//!
//! assert_eq!(binary_string(18.75), "01000001100101100000000000000000");
//! ```
//!
//! # Modules
//!
//! ```text
//! rsqrt    bit-hack guess + Newton step, reference method
//! ieee754  binary string and sign/exponent/mantissa fields
//! bench    random inputs, timing, error statistics
//! format   console previews
//! config   fisr.toml
//! ```

#![warn(clippy::all)]

pub mod bench;
pub mod config;
pub mod format;
pub mod ieee754;
pub mod rsqrt;

// Re-export commonly used types
pub use bench::{BenchConfig, BenchError, BenchReport, BenchResult, ErrorStats};
pub use config::{ConfigError, ConfigResult, DemoConfig, FisrConfig};
pub use ieee754::{binary_string, describe, Ieee754Parts};
pub use rsqrt::{
    approx_inv_sqrt, initial_guess, newton_step, reference_inv_sqrt, relative_error, FastInvSqrt,
    MAGIC, MAX_RELATIVE_ERROR,
};
