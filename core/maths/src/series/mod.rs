//! Self-contained backend built from power series and Newton's method.
//!
//! Every series sums its leading term plus [`SERIES_DEGREE`] further terms.
//! Inputs are range-reduced first so that the series argument stays small:
//!
//! | function | series argument | worst-case error (finite input) |
//! |---|---|---|
//! | `sin`, `cos` | `[-pi/2, pi/2]` | `~1e-15` absolute, plus `|x| * 2.5e-16` from reducing by `2pi` |
//! | `exp` | `[0, 0.5]` | `~2^k * 2.2e-16` relative after `k` argument halvings, plus half a subnormal ulp below `2^-1022` |
//! | `ln`, `log10` | `(m - 1) / (m + 1)` for a mantissa `m` in `[1/sqrt(2), sqrt(2))` | `~4e-16` absolute |
//! | `sqrt` | n/a | `~2.2e-16` relative (Newton, relative tolerance `1e-8`) |
//! | `pow` | n/a | inherits `exp(y * ln(x))`, `~|y ln x| * 2.2e-16` relative |
//! | `asin`, `acos` | `[-0.5, 0.5]` | `~5e-16` absolute |
//! | `atan`, `atan2` | `[-tan(pi/16), tan(pi/16)]` | `~5e-16` absolute |
//! | `sinh`, `cosh`, `tanh` | `[-0.5, 0.5]` | `~2^k * 2.2e-16` relative after `k` argument halvings |
//!
//! The rounding and decomposition functions are exact.

use elementa_core_bond::{NonNegativeF64, PositiveF64};

use crate::{pow::NegativeBasePowError, Frexp, MathsCore, Modf};

mod exponential;
mod hyperbolic;
mod kernel;
mod power;
mod rounding;
mod trigonometric;


/// Number of terms summed after the leading term of every series.
pub const SERIES_DEGREE: u32 = 20;

/// Relative difference between successive Newton iterates at which the
/// square root is considered converged.
pub const SQRT_TOLERANCE: f64 = 1e-8;

/// Upper bound on the Newton iterations of the square root.
///
/// Starting from `x / 2`, the iterates roughly halve per step until they
/// reach `sqrt(x)`, which takes at most ~540 steps across the `f64` range.
pub const SQRT_MAX_ITERATIONS: u32 = 2048;

/// Distance from an integer within which `pow` treats an exponent as
/// integral.
pub const INTEGER_TOLERANCE: f64 = 1e-9;

/// `exp`, `sinh` and `cosh` halve their argument until its magnitude is at
/// most this value.
pub const REDUCTION_THRESHOLD: f64 = 0.5;

/// `tanh` returns `+-1.0` beyond this magnitude, where `1 - |tanh(x)|` is
/// below half an ulp of `1.0`.
pub const TANH_SATURATION: f64 = 20.0;

#[derive(Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum SeriesMathsCore {}

impl MathsCore for SeriesMathsCore {
    #[inline]
    fn trunc(x: f64) -> f64 {
        rounding::trunc(x)
    }

    #[inline]
    fn floor(x: f64) -> f64 {
        rounding::floor(x)
    }

    #[inline]
    fn ceil(x: f64) -> f64 {
        rounding::ceil(x)
    }

    #[inline]
    fn round(x: f64) -> f64 {
        rounding::round(x)
    }

    #[inline]
    fn abs(x: f64) -> f64 {
        rounding::abs(x)
    }

    #[inline]
    fn fmod(x: f64, y: f64) -> f64 {
        rounding::fmod(x, y)
    }

    #[inline]
    fn modf(x: f64) -> Modf {
        rounding::modf(x)
    }

    #[inline]
    fn frexp(x: f64) -> Frexp {
        rounding::frexp(x)
    }

    #[inline]
    fn ldexp(x: f64, exp: i32) -> f64 {
        rounding::ldexp(x, exp)
    }

    #[inline]
    fn exp(x: f64) -> f64 {
        exponential::exp(x)
    }

    #[inline]
    fn ln(x: PositiveF64) -> f64 {
        exponential::ln(x)
    }

    #[inline]
    fn log10(x: PositiveF64) -> f64 {
        exponential::log10(x)
    }

    #[inline]
    fn pow(base: f64, exponent: f64) -> Result<f64, NegativeBasePowError> {
        power::pow(base, exponent)
    }

    #[inline]
    fn sqrt(x: NonNegativeF64) -> f64 {
        power::sqrt(x)
    }

    #[inline]
    fn sin(x: f64) -> f64 {
        trigonometric::sin(x)
    }

    #[inline]
    fn cos(x: f64) -> f64 {
        trigonometric::cos(x)
    }

    #[inline]
    fn tan(x: f64) -> f64 {
        trigonometric::tan(x)
    }

    #[inline]
    fn asin(x: f64) -> f64 {
        trigonometric::asin(x)
    }

    #[inline]
    fn acos(x: f64) -> f64 {
        trigonometric::acos(x)
    }

    #[inline]
    fn atan(x: f64) -> f64 {
        trigonometric::atan(x)
    }

    #[inline]
    fn atan2(y: f64, x: f64) -> f64 {
        trigonometric::atan2(y, x)
    }

    #[inline]
    fn sinh(x: f64) -> f64 {
        hyperbolic::sinh(x)
    }

    #[inline]
    fn cosh(x: f64) -> f64 {
        hyperbolic::cosh(x)
    }

    #[inline]
    fn tanh(x: f64) -> f64 {
        hyperbolic::tanh(x)
    }
}
