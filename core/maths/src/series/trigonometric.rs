use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use elementa_core_bond::NonNegativeF64;

use super::{
    kernel::{power_series, Parity},
    power, rounding, SERIES_DEGREE,
};

/// Number of half-angle steps `atan` applies after mapping into `[-1, 1]`.
const ATAN_HALVINGS: u32 = 2;

/// Reduces modulo `2pi` and folds the result into `[-pi, pi]`.
fn reduce_angle(x: f64) -> f64 {
    let angle = rounding::fmod(x, TAU);

    if angle > PI {
        angle - TAU
    } else if angle < -PI {
        angle + TAU
    } else {
        angle
    }
}

/// Folds a reduced angle into `[-pi/2, pi/2]` using `sin(pi - a) = sin(a)`
/// and `cos(pi - a) = -cos(a)`. Returns the folded angle and the sign
/// picked up by `cos`.
fn fold_quadrant(angle: f64) -> (f64, f64) {
    // pi - a is exact for a in [pi/2, pi]
    if angle > FRAC_PI_2 {
        (PI - angle, -1.0_f64)
    } else if angle < -FRAC_PI_2 {
        (-PI - angle, -1.0_f64)
    } else {
        (angle, 1.0_f64)
    }
}

#[must_use]
pub(super) fn sin(x: f64) -> f64 {
    let (angle, _) = fold_quadrant(reduce_angle(x));

    power_series(angle, Parity::Odd, true)
}

#[must_use]
pub(super) fn cos(x: f64) -> f64 {
    let (angle, sign) = fold_quadrant(reduce_angle(x));

    sign * power_series(angle, Parity::Even, true)
}

/// Unguarded ratio, the poles of `tan` come out as large finite values or
/// infinities through plain division.
#[must_use]
pub(super) fn tan(x: f64) -> f64 {
    sin(x) / cos(x)
}

/// `sqrt` of a value that is non-negative by construction.
fn sqrt_non_negative(x: f64) -> f64 {
    debug_assert!(x >= 0.0, "{} must be non-negative", x);

    // Safety: callers only pass sums and quotients of squares
    power::sqrt(unsafe { NonNegativeF64::new_unchecked(x) })
}

/// `sum_{n=0}^{N} (2n)! / (4^n (n!)^2 (2n+1)) x^(2n+1)`
fn asin_series(x: f64) -> f64 {
    let x2 = x * x;

    let mut power = x;
    let mut coefficient = 1.0_f64;
    let mut result = x;

    for n in 1..=SERIES_DEGREE {
        power *= x2;
        coefficient *= f64::from(2 * n - 1) / f64::from(2 * n);

        result += coefficient * power / f64::from(2 * n + 1);
    }

    result
}

/// Clamps `x` into `[-1, 1]` instead of rejecting it.
#[must_use]
#[debug_ensures(
    ret.is_nan() || (-FRAC_PI_2..=FRAC_PI_2).contains(&ret),
    "asin is in [-pi/2, pi/2]"
)]
pub(super) fn asin(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    let x = x.clamp(-1.0_f64, 1.0_f64);
    let magnitude = rounding::abs(x);

    if magnitude <= 0.5_f64 {
        return asin_series(x);
    }

    // asin(x) = pi/2 - 2 asin(sqrt((1 - x) / 2)), with the series argument in [0, 0.5)
    let half_angle = sqrt_non_negative((1.0_f64 - magnitude) * 0.5_f64);

    rounding::copysign(FRAC_PI_2 - 2.0_f64 * asin_series(half_angle), x)
}

#[must_use]
pub(super) fn acos(x: f64) -> f64 {
    FRAC_PI_2 - asin(x)
}

/// `sum_{i=0}^{N} (-1)^i x^(2i+1) / (2i+1)`
fn atan_series(x: f64) -> f64 {
    let x2 = x * x;

    let mut power = x;
    let mut result = x;

    for i in 1..=SERIES_DEGREE {
        power *= x2;

        let term = power / f64::from(2 * i + 1);

        if i % 2 == 1 {
            result -= term;
        } else {
            result += term;
        }
    }

    result
}

#[must_use]
pub(super) fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    // atan(x) = +-pi/2 - atan(1/x)
    if rounding::abs(x) > 1.0_f64 {
        return rounding::copysign(FRAC_PI_2, x) - atan(1.0_f64 / x);
    }

    // atan(x) = 2 atan(x / (1 + sqrt(1 + x^2))), leaving |x| <= tan(pi/16)
    let mut reduced = x;

    for _ in 0..ATAN_HALVINGS {
        reduced /= 1.0_f64 + sqrt_non_negative(1.0_f64 + reduced * reduced);
    }

    f64::from(1_u32 << ATAN_HALVINGS) * atan_series(reduced)
}

#[must_use]
#[allow(clippy::float_cmp)]
pub(super) fn atan2(y: f64, x: f64) -> f64 {
    if y.is_nan() || x.is_nan() {
        return f64::NAN;
    }

    if x == 0.0 {
        return if y > 0.0 {
            FRAC_PI_2
        } else if y < 0.0 {
            -FRAC_PI_2
        } else {
            // undefined, by convention
            0.0_f64
        };
    }

    // y / x is NaN when both are infinite
    if y.is_infinite() && x.is_infinite() {
        let angle = if x > 0.0 { FRAC_PI_4 } else { 3.0_f64 * FRAC_PI_4 };

        return rounding::copysign(angle, y);
    }

    let angle = atan(y / x);

    if x > 0.0 {
        angle
    } else if y >= 0.0 {
        angle + PI
    } else {
        angle - PI
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::{
        acos, asin, asin_series, atan, atan2, atan_series, cos, fold_quadrant, reduce_angle, sin,
        tan,
    };

    fn assert_close(value: f64, reference: f64, tolerance: f64) {
        assert!(
            libm::fabs(value - reference) <= tolerance,
            "{} != {} (+- {})",
            value,
            reference,
            tolerance
        );
    }

    #[test]
    fn test_reduce_angle() {
        assert_close(reduce_angle(3.0 * PI / 2.0), -PI / 2.0, 1e-15);
        assert_close(reduce_angle(-3.0 * PI / 2.0), PI / 2.0, 1e-15);
        assert_eq!(reduce_angle(1.0), 1.0);
        assert!(reduce_angle(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_fold_quadrant() {
        assert_eq!(fold_quadrant(PI), (0.0, -1.0));
        assert_eq!(fold_quadrant(-PI), (0.0, -1.0));
        assert_eq!(fold_quadrant(1.0), (1.0, 1.0));
        assert_eq!(fold_quadrant(FRAC_PI_2), (FRAC_PI_2, 1.0));
    }

    #[test]
    fn test_sin_cos_known_values() {
        assert_eq!(sin(0.0), 0.0);
        assert_eq!(cos(0.0), 1.0);
        assert_close(sin(FRAC_PI_2), 1.0, 1e-15);
        assert_close(cos(FRAC_PI_2), 0.0, 1e-15);
        assert_close(sin(PI), 0.0, 1e-15);
        assert_close(cos(PI), -1.0, 1e-15);
        assert_close(sin(-FRAC_PI_2), -1.0, 1e-15);
        assert!(sin(f64::NAN).is_nan());
        assert!(cos(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_sin_cos_match_reference() {
        for i in -2000..=2000 {
            let x = f64::from(i) * 0.0517;

            assert_close(sin(x), libm::sin(x), 1e-13);
            assert_close(cos(x), libm::cos(x), 1e-13);
        }
    }

    #[test]
    fn test_tan() {
        assert_close(tan(FRAC_PI_4), 1.0, 1e-15);
        assert_close(tan(-FRAC_PI_4), -1.0, 1e-15);
        assert_close(tan(1.2), libm::tan(1.2), 1e-13);
        assert!(libm::fabs(tan(FRAC_PI_2)) > 1e15);
    }

    #[test]
    fn test_asin_acos() {
        assert_eq!(asin(0.0), 0.0);
        assert_eq!(asin(1.0), FRAC_PI_2);
        assert_eq!(asin(-1.0), -FRAC_PI_2);
        assert_close(asin(0.5), PI / 6.0, 2e-15);
        assert_close(acos(0.5), PI / 3.0, 2e-15);
        assert_close(acos(-1.0), PI, 1e-15);
        assert_close(acos(1.0), 0.0, 1e-15);

        for i in -100..=100 {
            let x = f64::from(i) * 0.01;

            assert_close(asin(x), libm::asin(x), 2e-15);
            assert_close(acos(x), libm::acos(x), 3e-15);
        }
    }

    #[test]
    fn test_asin_clamps() {
        assert_eq!(asin(2.0), FRAC_PI_2);
        assert_eq!(asin(-7.5), -FRAC_PI_2);
        assert_eq!(asin(f64::INFINITY), FRAC_PI_2);
        assert_eq!(acos(3.0), 0.0);
        assert!(asin(f64::NAN).is_nan());
    }

    #[test]
    fn test_atan() {
        assert_eq!(atan(0.0), 0.0);
        assert_close(atan(1.0), FRAC_PI_4, 2e-15);
        assert_close(atan(-1.0), -FRAC_PI_4, 2e-15);
        assert_eq!(atan(f64::INFINITY), FRAC_PI_2);
        assert_eq!(atan(f64::NEG_INFINITY), -FRAC_PI_2);

        for i in -500..=500 {
            let x = f64::from(i) * 0.047;

            assert_close(atan(x), libm::atan(x), 2e-15);
        }

        for x in [1e3, -1e6, 1e100, -1e300] {
            assert_close(atan(x), libm::atan(x), 2e-15);
        }
    }

    #[test]
    fn test_series_kernels_on_reduced_range() {
        for i in -50..=50 {
            let x = f64::from(i) * 0.01;

            assert_close(asin_series(x), libm::asin(x), 2e-15);
            assert_close(atan_series(x * 0.4), libm::atan(x * 0.4), 1e-15);
        }
    }

    #[test]
    fn test_atan2_axes() {
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert_eq!(atan2(1.0, 0.0), FRAC_PI_2);
        assert_eq!(atan2(-3.0, 0.0), -FRAC_PI_2);
        assert_eq!(atan2(0.0, 2.0), 0.0);
        assert_close(atan2(0.0, -2.0), PI, 1e-15);
        assert!(atan2(f64::NAN, 1.0).is_nan());
        assert!(atan2(0.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_atan2_infinities() {
        assert_eq!(atan2(f64::INFINITY, f64::INFINITY), FRAC_PI_4);
        assert_eq!(atan2(f64::NEG_INFINITY, f64::INFINITY), -FRAC_PI_4);
        assert_eq!(atan2(f64::INFINITY, f64::NEG_INFINITY), 3.0 * FRAC_PI_4);
        assert_eq!(atan2(f64::NEG_INFINITY, f64::NEG_INFINITY), -3.0 * FRAC_PI_4);

        assert_eq!(atan2(f64::INFINITY, 1.0), FRAC_PI_2);
        assert_eq!(atan2(1.0, f64::INFINITY), 0.0);
        assert_close(atan2(1.0, f64::NEG_INFINITY), PI, 1e-15);
        assert_close(atan2(-1.0, f64::NEG_INFINITY), -PI, 1e-15);
    }

    #[test]
    fn test_atan2_quadrants() {
        assert_close(atan2(1.0, 1.0), FRAC_PI_4, 2e-15);
        assert_close(atan2(1.0, -1.0), 3.0 * FRAC_PI_4, 2e-15);
        assert_close(atan2(-1.0, -1.0), -3.0 * FRAC_PI_4, 2e-15);
        assert_close(atan2(-1.0, 1.0), -FRAC_PI_4, 2e-15);

        for i in -20..=20 {
            for j in -20..=20 {
                if j == 0 {
                    continue;
                }

                let (y, x) = (f64::from(i) * 0.37, f64::from(j) * 0.29);

                assert_close(atan2(y, x), libm::atan2(y, x), 1e-14);
            }
        }
    }
}
