#![allow(clippy::float_cmp)]

use elementa_core_bond::{NonNegativeF64, PositiveF64};

use crate::pow::{is_odd, NegativeBasePowError};

use super::{exponential, rounding, SeriesMathsCore, SQRT_MAX_ITERATIONS, SQRT_TOLERANCE};

/// Babylonian square root, starting from `x / 2`.
#[must_use]
#[debug_ensures(ret >= 0.0_f64 || ret.is_nan(), "square roots are non-negative")]
pub(super) fn sqrt(x: NonNegativeF64) -> f64 {
    let x = x.get();

    if x == 0.0 || x.is_infinite() {
        return x;
    }

    // x / 2 underflows to zero for the smallest subnormals
    let mut guess = if x * 0.5_f64 > 0.0 { x * 0.5_f64 } else { x };

    for _ in 0..SQRT_MAX_ITERATIONS {
        let next = ((x / guess) + guess) * 0.5_f64;

        if rounding::abs(next - guess) <= SQRT_TOLERANCE * next {
            return next;
        }

        guess = next;
    }

    log::warn!(
        "sqrt({}) did not converge within {} iterations, returning {}",
        x,
        SQRT_MAX_ITERATIONS,
        guess
    );

    guess
}

/// `base^exponent` for `base > 0`.
fn exp_ln(base: f64, exponent: f64) -> f64 {
    // Safety: only called with a positive base
    let base = unsafe { PositiveF64::new_unchecked(base) };

    exponential::exp(exponent * exponential::ln(base))
}

pub(super) fn pow(base: f64, exponent: f64) -> Result<f64, NegativeBasePowError> {
    NegativeBasePowError::check::<SeriesMathsCore>(base, exponent)?;

    if exponent == 0.0 || base == 1.0 {
        return Ok(1.0_f64);
    }

    if base.is_nan() || exponent.is_nan() {
        return Ok(f64::NAN);
    }

    // |base| == 1 with an infinite exponent would evaluate 0 * inf
    if base == -1.0 && exponent.is_infinite() {
        return Ok(1.0_f64);
    }

    if base == 0.0 {
        return Ok(if exponent > 0.0 { 0.0_f64 } else { f64::INFINITY });
    }

    if base < 0.0 {
        // the exponent is integral, so the sign follows its parity
        let magnitude = exp_ln(rounding::abs(base), exponent);

        return Ok(if is_odd::<SeriesMathsCore>(exponent) {
            -magnitude
        } else {
            magnitude
        });
    }

    Ok(exp_ln(base, exponent))
}
