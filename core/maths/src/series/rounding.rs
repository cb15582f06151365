#![allow(clippy::float_cmp)]

use crate::{Frexp, Modf};

const SIGN_MASK: u64 = 1_u64 << 63;

/// `2^52`, from which on every `f64` is an integer.
const TWO_POW_52: f64 = 4_503_599_627_370_496.0_f64;

const EXPONENT_BIAS: i32 = 1023;
const MAX_EXPONENT: i32 = 1023;
const MIN_EXPONENT: i32 = -1022;

#[must_use]
pub(super) fn abs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN_MASK)
}

/// Returns the magnitude of `magnitude` with the sign of `sign`.
#[must_use]
pub(super) fn copysign(magnitude: f64, sign: f64) -> f64 {
    f64::from_bits((magnitude.to_bits() & !SIGN_MASK) | (sign.to_bits() & SIGN_MASK))
}

#[must_use]
pub(super) fn trunc(x: f64) -> f64 {
    if x.is_nan() || abs(x) >= TWO_POW_52 {
        return x;
    }

    // |x| < 2^52 fits into an i64 without saturation
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let truncated = (x as i64) as f64;

    // keeps -0.0 for x in (-1.0, -0.0]
    copysign(truncated, x)
}

#[must_use]
#[debug_ensures(ret.is_nan() || ret <= x, "never rounds up")]
#[debug_ensures(ret.is_nan() || ret == x || x - ret <= 1.0_f64, "rounds by at most one")]
pub(super) fn floor(x: f64) -> f64 {
    let truncated = trunc(x);

    if truncated == x {
        x
    } else if x < 0.0 {
        truncated - 1.0_f64
    } else {
        truncated
    }
}

#[must_use]
#[debug_ensures(ret.is_nan() || ret >= x, "never rounds down")]
#[debug_ensures(ret.is_nan() || ret == x || ret - x <= 1.0_f64, "rounds by at most one")]
pub(super) fn ceil(x: f64) -> f64 {
    let truncated = trunc(x);

    if truncated == x {
        x
    } else if x > 0.0 {
        truncated + 1.0_f64
    } else {
        truncated
    }
}

#[must_use]
pub(super) fn round(x: f64) -> f64 {
    let truncated = trunc(x);

    // exact since |x| < 2^52 whenever x is not already integral
    if abs(x - truncated) >= 0.5_f64 {
        truncated + copysign(1.0_f64, x)
    } else {
        truncated
    }
}

/// Exact remainder by binary long division with shifted copies of `|y|`.
///
/// Every subtraction `r - d` happens with `d <= r < 2d` and is therefore
/// exact.
#[must_use]
pub(super) fn fmod(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() || x.is_infinite() || y == 0.0 {
        return f64::NAN;
    }

    if y.is_infinite() {
        return x;
    }

    let divisor = abs(y);
    let mut remainder = abs(x);

    if remainder < divisor {
        return x;
    }

    let mut shifted = divisor;

    while shifted <= (remainder - shifted) {
        shifted *= 2.0_f64;
    }

    loop {
        if remainder >= shifted {
            remainder -= shifted;
        }

        if shifted <= divisor {
            break;
        }

        shifted *= 0.5_f64;
    }

    copysign(remainder, x)
}

#[must_use]
#[debug_ensures(
    ret.integral.is_nan() || ret.integral == trunc(x),
    "integral part is the truncation"
)]
pub(super) fn modf(x: f64) -> Modf {
    let integral = trunc(x);

    let fractional = if x.is_infinite() {
        copysign(0.0_f64, x)
    } else {
        copysign(x - integral, x)
    };

    Modf {
        integral,
        fractional,
    }
}

#[must_use]
#[debug_ensures(
    ret.mantissa == 0.0 || !ret.mantissa.is_finite()
        || (0.5_f64..1.0_f64).contains(&abs(ret.mantissa)),
    "mantissa is normalised into [0.5, 1.0)"
)]
pub(super) fn frexp(x: f64) -> Frexp {
    if x == 0.0 || !x.is_finite() {
        return Frexp {
            mantissa: x,
            exponent: 0,
        };
    }

    let mut mantissa = abs(x);
    let mut exponent = 0_i32;

    // Scaling by two is exact, halving never reaches the subnormal range here
    while mantissa >= 1.0_f64 {
        mantissa *= 0.5_f64;
        exponent += 1;
    }

    while mantissa < 0.5_f64 {
        mantissa *= 2.0_f64;
        exponent -= 1;
    }

    Frexp {
        mantissa: copysign(mantissa, x),
        exponent,
    }
}

/// Builds `2^exponent` from its bit pattern.
fn power_of_two(exponent: i32) -> f64 {
    debug_assert!((MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent));

    // exponent + bias is in [1, 2046]
    #[allow(clippy::cast_sign_loss)]
    let biased = (exponent + EXPONENT_BIAS) as u64;

    f64::from_bits(biased << 52)
}

#[must_use]
pub(super) fn ldexp(x: f64, exp: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }

    let Frexp { mantissa, exponent } = frexp(x);

    // x * 2^exp == significand * 2^scale with 1 <= |significand| < 2
    let significand = mantissa * 2.0_f64;
    let scale = exponent.saturating_add(exp).saturating_sub(1);

    if scale > MAX_EXPONENT {
        return copysign(f64::INFINITY, x);
    }

    if scale >= MIN_EXPONENT {
        return significand * power_of_two(scale);
    }

    // |result| < 2^-1075 rounds to zero
    if scale < MIN_EXPONENT - 53 {
        return copysign(0.0_f64, x);
    }

    // the first product is exact and normal, only the second one rounds
    significand * power_of_two(scale - MIN_EXPONENT) * power_of_two(MIN_EXPONENT)
}
