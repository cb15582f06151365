#![allow(clippy::float_cmp)]

use core::f64::consts::{FRAC_1_SQRT_2, LN_10, LN_2};

use elementa_core_bond::PositiveF64;

use super::{rounding, REDUCTION_THRESHOLD, SERIES_DEGREE};

/// `ln(f64::MAX)`, beyond which `exp` overflows.
const LN_MAX: f64 = 709.782_712_893_384_f64;

/// Maclaurin series `sum_{n=0}^{N} x^n / n!`.
fn maclaurin(x: f64) -> f64 {
    let mut power = 1.0_f64;
    let mut factorial = 1.0_f64;
    let mut result = 1.0_f64;

    for n in 1..=SERIES_DEGREE {
        power *= x;
        factorial *= f64::from(n);

        result += power / factorial;
    }

    result
}

#[must_use]
#[debug_ensures(x.is_nan() || ret >= 0.0_f64, "exp is non-negative")]
pub(super) fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    // exp(x) is below half the smallest subnormal
    if x < -2.0_f64 * LN_MAX {
        return 0.0_f64;
    }

    // 1 / exp(-x) would overflow before exp(x) leaves the subnormal range
    if x < -LN_MAX {
        let half = exp(x * 0.5_f64);

        return half * half;
    }

    // Avoids the cancellation of the alternating series
    if x < 0.0 {
        return 1.0_f64 / exp(-x);
    }

    if x > LN_MAX {
        return f64::INFINITY;
    }

    let mut reduced = x;
    let mut halvings = 0_u32;

    while reduced > REDUCTION_THRESHOLD {
        reduced *= 0.5_f64;
        halvings += 1;
    }

    if halvings > 0 {
        log::trace!("exp({}) evaluated as exp({})^(2^{})", x, reduced, halvings);
    }

    let mut result = maclaurin(reduced);

    for _ in 0..halvings {
        result *= result;
    }

    result
}

/// `ln(x) = 2 atanh((x - 1) / (x + 1))`, summing the odd powers of
/// `t = (x - 1) / (x + 1)`.
fn atanh_series(x: f64) -> f64 {
    let t = (x - 1.0_f64) / (x + 1.0_f64);
    let t2 = t * t;

    let mut power = t;
    let mut result = t;

    for k in 1..=SERIES_DEGREE {
        power *= t2;

        result += power / f64::from(2 * k + 1);
    }

    2.0_f64 * result
}

#[must_use]
pub(super) fn ln(x: PositiveF64) -> f64 {
    let x = x.get();

    if x == 1.0_f64 {
        return 0.0_f64;
    }

    if x.is_infinite() {
        return x;
    }

    let parts = rounding::frexp(x);

    // x = m * 2^e with m in [1/sqrt(2), sqrt(2)), so |t| < 0.172 in the series
    let (mantissa, exponent) = if parts.mantissa < FRAC_1_SQRT_2 {
        (parts.mantissa * 2.0_f64, parts.exponent - 1)
    } else {
        (parts.mantissa, parts.exponent)
    };

    f64::from(exponent) * LN_2 + atanh_series(mantissa)
}

#[must_use]
pub(super) fn log10(x: PositiveF64) -> f64 {
    ln(x) / LN_10
}
