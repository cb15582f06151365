use elementa_core_bond::{NonNegativeF64, PositiveF64};

use crate::{Frexp, MathsCore, Modf, NegativeBasePowError};

/// Reference backend delegating to the pure-Rust `libm` port of musl.
#[derive(Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ReproducibleMathsCore {}

impl MathsCore for ReproducibleMathsCore {
    #[inline]
    fn trunc(x: f64) -> f64 {
        libm::trunc(x)
    }

    #[inline]
    fn floor(x: f64) -> f64 {
        libm::floor(x)
    }

    #[inline]
    fn ceil(x: f64) -> f64 {
        libm::ceil(x)
    }

    #[inline]
    fn round(x: f64) -> f64 {
        libm::round(x)
    }

    #[inline]
    fn abs(x: f64) -> f64 {
        libm::fabs(x)
    }

    #[inline]
    fn fmod(x: f64, y: f64) -> f64 {
        libm::fmod(x, y)
    }

    #[inline]
    fn modf(x: f64) -> Modf {
        let (fractional, integral) = libm::modf(x);

        Modf {
            integral,
            fractional,
        }
    }

    #[inline]
    fn frexp(x: f64) -> Frexp {
        let (mantissa, exponent) = libm::frexp(x);

        Frexp { mantissa, exponent }
    }

    #[inline]
    fn ldexp(x: f64, exp: i32) -> f64 {
        libm::ldexp(x, exp)
    }

    #[inline]
    fn exp(x: f64) -> f64 {
        libm::exp(x)
    }

    #[inline]
    fn ln(x: PositiveF64) -> f64 {
        libm::log(x.get())
    }

    #[inline]
    fn log10(x: PositiveF64) -> f64 {
        libm::log10(x.get())
    }

    #[inline]
    fn pow(base: f64, exponent: f64) -> Result<f64, NegativeBasePowError> {
        NegativeBasePowError::check::<Self>(base, exponent)?;

        // libm rejects exponents that are integral only within tolerance
        let exponent = if base < 0.0 {
            libm::round(exponent)
        } else {
            exponent
        };

        Ok(libm::pow(base, exponent))
    }

    #[inline]
    fn sqrt(x: NonNegativeF64) -> f64 {
        libm::sqrt(x.get())
    }

    #[inline]
    fn sin(x: f64) -> f64 {
        libm::sin(x)
    }

    #[inline]
    fn cos(x: f64) -> f64 {
        libm::cos(x)
    }

    #[inline]
    fn tan(x: f64) -> f64 {
        libm::tan(x)
    }

    #[inline]
    fn asin(x: f64) -> f64 {
        libm::asin(x.clamp(-1.0_f64, 1.0_f64))
    }

    #[inline]
    fn acos(x: f64) -> f64 {
        libm::acos(x.clamp(-1.0_f64, 1.0_f64))
    }

    #[inline]
    fn atan(x: f64) -> f64 {
        libm::atan(x)
    }

    #[inline]
    fn atan2(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }

    #[inline]
    fn sinh(x: f64) -> f64 {
        libm::sinh(x)
    }

    #[inline]
    fn cosh(x: f64) -> f64 {
        libm::cosh(x)
    }

    #[inline]
    fn tanh(x: f64) -> f64 {
        libm::tanh(x)
    }
}
