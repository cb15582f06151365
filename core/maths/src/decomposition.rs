use serde::{Deserialize, Serialize};

/// The integral and fractional parts of an `f64`.
///
/// Both parts carry the sign of the decomposed value, and
/// `integral + fractional` reconstructs it exactly for finite inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modf {
    pub integral: f64,
    pub fractional: f64,
}

impl From<Modf> for (f64, f64) {
    fn from(modf: Modf) -> Self {
        (modf.integral, modf.fractional)
    }
}

/// A binary mantissa-exponent decomposition `value == mantissa * 2^exponent`.
///
/// For finite non-zero values `0.5 <= |mantissa| < 1.0`, and the mantissa
/// carries the sign of the value. Zero, infinities and NaN are returned as
/// the mantissa with a zero exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frexp {
    pub mantissa: f64,
    pub exponent: i32,
}

impl From<Frexp> for (f64, i32) {
    fn from(frexp: Frexp) -> Self {
        (frexp.mantissa, frexp.exponent)
    }
}
