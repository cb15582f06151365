#![deny(clippy::pedantic)]
#![no_std]

//! Elementary real functions computed from power series and Newton's
//! method, without relying on a platform maths library.
//!
//! The free functions in this crate evaluate with [`SeriesMathsCore`].
//! Functions that are undefined on part of the real line ([`log`],
//! [`log10`], [`sqrt`] and [`pow`]) report a [`MathError`] instead of
//! returning NaN. Generic code can instead be written against
//! [`MathsCore`] and its domain-typed arguments.

pub use elementa_core_bond::{NonNegativeF64, NonNegativeF64Error, PositiveF64, PositiveF64Error};
pub use elementa_core_maths::{
    series::{
        INTEGER_TOLERANCE, REDUCTION_THRESHOLD, SERIES_DEGREE, SQRT_MAX_ITERATIONS,
        SQRT_TOLERANCE, TANH_SATURATION,
    },
    Frexp, MathsCore, Modf, NegativeBasePowError, SeriesMathsCore,
};

#[cfg(feature = "libm")]
pub use elementa_core_maths::ReproducibleMathsCore;

mod error;

pub use error::MathError;

type M = SeriesMathsCore;

#[must_use]
pub fn sin(x: f64) -> f64 {
    M::sin(x)
}

#[must_use]
pub fn cos(x: f64) -> f64 {
    M::cos(x)
}

/// Near the poles `tan` returns very large magnitudes or infinities.
#[must_use]
pub fn tan(x: f64) -> f64 {
    M::tan(x)
}

/// Arc sine in `[-pi/2, pi/2]`, clamping `x` into `[-1, 1]` first.
#[must_use]
pub fn asin(x: f64) -> f64 {
    M::asin(x)
}

/// Arc cosine in `[0, pi]`, clamping `x` into `[-1, 1]` first.
#[must_use]
pub fn acos(x: f64) -> f64 {
    M::acos(x)
}

#[must_use]
pub fn atan(x: f64) -> f64 {
    M::atan(x)
}

/// Angle of the point `(x, y)`, in `[-pi, pi]`.
///
/// On the vertical axis the result is `+-pi/2` by the sign of `y`, and
/// `atan2(0, 0)` is `0`.
#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    M::atan2(y, x)
}

#[must_use]
pub fn sinh(x: f64) -> f64 {
    M::sinh(x)
}

#[must_use]
pub fn cosh(x: f64) -> f64 {
    M::cosh(x)
}

#[must_use]
pub fn tanh(x: f64) -> f64 {
    M::tanh(x)
}

#[must_use]
pub fn exp(x: f64) -> f64 {
    M::exp(x)
}

/// Natural logarithm.
///
/// # Errors
///
/// Returns `MathError::NonPositiveLogarithm` if `x <= 0.0` or `x` is NaN.
pub fn log(x: f64) -> Result<f64, MathError> {
    let x = PositiveF64::new(x).map_err(rejected)?;

    Ok(M::ln(x))
}

/// Base-10 logarithm.
///
/// # Errors
///
/// Returns `MathError::NonPositiveLogarithm` if `x <= 0.0` or `x` is NaN.
pub fn log10(x: f64) -> Result<f64, MathError> {
    let x = PositiveF64::new(x).map_err(rejected)?;

    Ok(M::log10(x))
}

/// Computes `base^exponent`.
///
/// A negative base is only accepted with an exponent within
/// [`INTEGER_TOLERANCE`] of an integer, whose parity then decides the sign.
///
/// # Errors
///
/// Returns `MathError::FractionalPowerOfNegative` if `base < 0.0` and
/// `exponent` is not an integer.
pub fn pow(base: f64, exponent: f64) -> Result<f64, MathError> {
    M::pow(base, exponent).map_err(rejected)
}

/// Square root by Newton's method.
///
/// # Errors
///
/// Returns `MathError::NegativeSquareRoot` if `x < 0.0` or `x` is NaN.
pub fn sqrt(x: f64) -> Result<f64, MathError> {
    let x = NonNegativeF64::new(x).map_err(rejected)?;

    Ok(M::sqrt(x))
}

#[must_use]
pub fn floor(x: f64) -> f64 {
    M::floor(x)
}

#[must_use]
pub fn ceil(x: f64) -> f64 {
    M::ceil(x)
}

#[must_use]
pub fn trunc(x: f64) -> f64 {
    M::trunc(x)
}

/// Rounds to the nearest integer, half-way cases away from zero.
#[must_use]
pub fn round(x: f64) -> f64 {
    M::round(x)
}

#[must_use]
pub fn abs(x: f64) -> f64 {
    M::abs(x)
}

/// Remainder of `x / y` carrying the sign of `x`.
///
/// The remainder is computed exactly. `fmod(x, 0)` and `fmod(inf, y)` are
/// NaN, and `fmod(x, inf)` is `x`.
#[must_use]
pub fn fmod(x: f64, y: f64) -> f64 {
    M::fmod(x, y)
}

/// Splits `x` into integral and fractional parts, both carrying the sign of
/// `x`.
#[must_use]
pub fn modf(x: f64) -> Modf {
    M::modf(x)
}

/// Splits `x` into `mantissa * 2^exponent` with `0.5 <= |mantissa| < 1`.
///
/// Zero, infinities and NaN are returned unchanged with exponent `0`.
#[must_use]
pub fn frexp(x: f64) -> Frexp {
    M::frexp(x)
}

/// Computes `x * 2^exp`, saturating to zero or infinity.
#[must_use]
pub fn ldexp(x: f64, exp: i32) -> f64 {
    M::ldexp(x, exp)
}

fn rejected<E: Into<MathError>>(error: E) -> MathError {
    let error = error.into();

    log::debug!("{}", error);

    error
}
