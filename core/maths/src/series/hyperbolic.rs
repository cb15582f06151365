use super::{
    kernel::{power_series, Parity},
    rounding, REDUCTION_THRESHOLD, TANH_SATURATION,
};

/// `asinh(f64::MAX)`, beyond which `sinh` and `cosh` overflow.
const OVERFLOW_THRESHOLD: f64 = 710.475_860_073_943_9_f64;

/// Evaluates `(sinh(x), cosh(x))` for finite `|x| <= OVERFLOW_THRESHOLD`.
///
/// The argument is halved into `[-0.5, 0.5]` before the non-alternating
/// series, then doubled back with `sinh(2a) = 2 sinh(a) cosh(a)` and
/// `cosh(2a) = 2 cosh(a)^2 - 1`.
fn sinh_cosh(x: f64) -> (f64, f64) {
    let mut reduced = x;
    let mut halvings = 0_u32;

    while rounding::abs(reduced) > REDUCTION_THRESHOLD {
        reduced *= 0.5_f64;
        halvings += 1;
    }

    if halvings > 0 {
        log::trace!("sinh/cosh({}) doubled back from {} {} times", x, reduced, halvings);
    }

    let mut sinh = power_series(reduced, Parity::Odd, false);
    let mut cosh = power_series(reduced, Parity::Even, false);

    for _ in 0..halvings {
        (sinh, cosh) = (
            2.0_f64 * sinh * cosh,
            2.0_f64 * cosh * cosh - 1.0_f64,
        );
    }

    (sinh, cosh)
}

#[must_use]
pub(super) fn sinh(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    if rounding::abs(x) > OVERFLOW_THRESHOLD {
        return rounding::copysign(f64::INFINITY, x);
    }

    sinh_cosh(x).0
}

#[must_use]
#[debug_ensures(ret.is_nan() || ret >= 1.0_f64, "cosh is at least one")]
pub(super) fn cosh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    if rounding::abs(x) > OVERFLOW_THRESHOLD {
        return f64::INFINITY;
    }

    sinh_cosh(x).1
}

#[must_use]
pub(super) fn tanh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    if rounding::abs(x) > TANH_SATURATION {
        return rounding::copysign(1.0_f64, x);
    }

    let (sinh, cosh) = sinh_cosh(x);

    // rounding may push the ratio a hair past one close to saturation
    (sinh / cosh).clamp(-1.0_f64, 1.0_f64)
}
