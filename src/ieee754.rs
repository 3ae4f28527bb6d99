//! IEEE 754 single-precision layout
//!
//! Renders the bit pattern behind an `f32`, either as one 32-digit binary
//! string or split into sign, exponent and mantissa fields.

use std::fmt;

/// Width of the exponent field in bits
pub const EXPONENT_BITS: u32 = 8;

/// Width of the mantissa (fraction) field in bits
pub const MANTISSA_BITS: u32 = 23;

/// Exponent bias for single precision
pub const EXPONENT_BIAS: i32 = 127;

const EXPONENT_MASK: u32 = (1 << EXPONENT_BITS) - 1;
const MANTISSA_MASK: u32 = (1 << MANTISSA_BITS) - 1;

/// Bit pattern of `x` as 32 binary digits, most significant bit first.
pub fn binary_string(x: f32) -> String {
    format!("{:032b}", x.to_bits())
}

/// Full description line printed by the CLI.
pub fn describe(x: f32) -> String {
    format!(
        "The float number x = {}, the content stored in its memory address can be \
         interpreted as an integer, whose binary expression = {}",
        x,
        binary_string(x)
    )
}

/// The three packed fields of a single-precision float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ieee754Parts {
    /// Sign bit (0 or 1)
    pub sign: u8,
    /// Biased exponent
    pub exponent: u8,
    /// 23-bit fraction
    pub mantissa: u32,
}

impl Ieee754Parts {
    /// Split `x` into its fields.
    pub fn of(x: f32) -> Self {
        let bits = x.to_bits();
        Self {
            sign: (bits >> 31) as u8,
            exponent: ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as u8,
            mantissa: bits & MANTISSA_MASK,
        }
    }

    /// Reassemble the raw bit pattern.
    pub fn to_bits(self) -> u32 {
        ((self.sign as u32) << 31) | ((self.exponent as u32) << MANTISSA_BITS) | self.mantissa
    }

    /// Reassemble the float.
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.to_bits())
    }

    /// Exponent with the bias removed. `None` for zero/subnormal and inf/NaN
    /// encodings, where the stored exponent is not a power of two.
    pub fn unbiased_exponent(&self) -> Option<i32> {
        match self.exponent {
            0 | 0xFF => None,
            e => Some(e as i32 - EXPONENT_BIAS),
        }
    }

    /// `"s eeeeeeee mmmmmmmmmmmmmmmmmmmmmmm"`
    pub fn grouped(&self) -> String {
        format!(
            "{:01b} {:08b} {:023b}",
            self.sign, self.exponent, self.mantissa
        )
    }
}

impl fmt::Display for Ieee754Parts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sign={} exponent={} mantissa=0x{:06x}",
            self.sign, self.exponent, self.mantissa
        )?;
        if let Some(e) = self.unbiased_exponent() {
            write!(f, " (2^{})", e)?;
        }
        Ok(())
    }
}
