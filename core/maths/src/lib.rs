#![deny(clippy::pedantic)]
#![no_std]

//! Elementary real functions behind a swappable backend trait.
//!
//! [`MathsCore`] is implemented by uninhabited marker types, so code can be
//! written once against `M: MathsCore` and then instantiated with the
//! self-contained [`SeriesMathsCore`] or, with the `libm` feature, the
//! [`ReproducibleMathsCore`] reference backend.

#[macro_use]
extern crate contracts;

use elementa_core_bond::{NonNegativeF64, PositiveF64};

mod decomposition;
mod pow;
pub mod series;

#[cfg(feature = "libm")]
mod reproducible;

pub use decomposition::{Frexp, Modf};
pub use pow::NegativeBasePowError;
pub use series::SeriesMathsCore;

#[cfg(feature = "libm")]
pub use reproducible::ReproducibleMathsCore;

pub trait MathsCore: 'static + Clone + core::fmt::Debug {
    /// Rounds towards zero.
    #[must_use]
    fn trunc(x: f64) -> f64;
    #[must_use]
    fn floor(x: f64) -> f64;
    #[must_use]
    fn ceil(x: f64) -> f64;
    /// Rounds half-way cases away from zero.
    #[must_use]
    fn round(x: f64) -> f64;
    #[must_use]
    fn abs(x: f64) -> f64;
    /// Remainder of `x / y` with the sign of `x`, NaN if `y == 0`.
    #[must_use]
    fn fmod(x: f64, y: f64) -> f64;
    #[must_use]
    fn modf(x: f64) -> Modf;
    #[must_use]
    fn frexp(x: f64) -> Frexp;
    /// Computes `x * 2^exp`.
    #[must_use]
    fn ldexp(x: f64, exp: i32) -> f64;

    #[must_use]
    fn exp(x: f64) -> f64;
    #[must_use]
    fn ln(x: PositiveF64) -> f64;
    #[must_use]
    fn log10(x: PositiveF64) -> f64;
    /// Computes `base^exponent`.
    ///
    /// # Errors
    ///
    /// Returns `NegativeBasePowError` if `base < 0.0` and `exponent` is not
    /// an integer.
    fn pow(base: f64, exponent: f64) -> Result<f64, NegativeBasePowError>;
    #[must_use]
    fn sqrt(x: NonNegativeF64) -> f64;

    #[must_use]
    fn sin(x: f64) -> f64;
    #[must_use]
    fn cos(x: f64) -> f64;
    #[must_use]
    fn tan(x: f64) -> f64;
    /// Out-of-range inputs are clamped into `[-1.0, 1.0]`.
    #[must_use]
    fn asin(x: f64) -> f64;
    /// Out-of-range inputs are clamped into `[-1.0, 1.0]`.
    #[must_use]
    fn acos(x: f64) -> f64;
    #[must_use]
    fn atan(x: f64) -> f64;
    /// Four-quadrant arc tangent of `y / x`, with `atan2(0, 0) == 0`.
    #[must_use]
    fn atan2(y: f64, x: f64) -> f64;

    #[must_use]
    fn sinh(x: f64) -> f64;
    #[must_use]
    fn cosh(x: f64) -> f64;
    #[must_use]
    fn tanh(x: f64) -> f64;
}
