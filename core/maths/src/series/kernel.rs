use super::SERIES_DEGREE;

#[derive(Clone, Copy, Debug)]
pub(super) enum Parity {
    /// `1 + x^2/2! + x^4/4! + ...`
    Even,
    /// `x + x^3/3! + x^5/5! + ...`
    Odd,
}

/// Sums the even or odd half of the exponential series,
/// `sum_{i=0}^{N} s^i x^(2i+p) / (2i+p)!`, where `s` is `-1` if
/// `alternating` and `+1` otherwise.
///
/// This is the Taylor series of `cos`/`sin` when alternating and of
/// `cosh`/`sinh` when not.
pub(super) fn power_series(x: f64, parity: Parity, alternating: bool) -> f64 {
    let offset = match parity {
        Parity::Even => 0_u32,
        Parity::Odd => 1_u32,
    };

    let x2 = x * x;

    let mut power = if offset == 0 { 1.0_f64 } else { x };
    let mut factorial = 1.0_f64;
    let mut result = power;

    for i in 1..=SERIES_DEGREE {
        power *= x2;
        factorial *= f64::from((2 * i + offset - 1) * (2 * i + offset));

        let term = power / factorial;

        if alternating && (i % 2 == 1) {
            result -= term;
        } else {
            result += term;
        }
    }

    result
}
