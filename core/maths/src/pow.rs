use core::fmt;

use crate::{series::INTEGER_TOLERANCE, MathsCore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBasePowError {
    base: f64,
    exponent: f64,
}

impl NegativeBasePowError {
    /// # Errors
    ///
    /// Returns `NegativeBasePowError` if `base < 0.0` and `exponent` is not
    /// within [`INTEGER_TOLERANCE`] of an integer.
    pub fn check<M: MathsCore>(base: f64, exponent: f64) -> Result<(), Self> {
        if base < 0.0 && !is_integral::<M>(exponent) {
            Err(Self { base, exponent })
        } else {
            Ok(())
        }
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl fmt::Display for NegativeBasePowError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{}^{} has no real value: the base is negative and the exponent is not an integer.",
            self.base, self.exponent
        )
    }
}

impl core::error::Error for NegativeBasePowError {}

/// Tolerant integer test: `|value mod 1|` is within [`INTEGER_TOLERANCE`]
/// of either `0` or `1`. Infinities count as integers.
#[must_use]
pub(crate) fn is_integral<M: MathsCore>(value: f64) -> bool {
    if value.is_infinite() {
        return true;
    }

    let fractional = M::abs(M::fmod(value, 1.0_f64));

    fractional < INTEGER_TOLERANCE || (1.0_f64 - fractional) < INTEGER_TOLERANCE
}

/// Whether the integer nearest to `value` is odd.
#[must_use]
#[allow(clippy::float_cmp)]
pub(crate) fn is_odd<M: MathsCore>(value: f64) -> bool {
    M::abs(M::fmod(M::round(value), 2.0_f64)) == 1.0_f64
}

#[cfg(test)]
mod tests {
    use crate::SeriesMathsCore;

    use super::{is_integral, is_odd, NegativeBasePowError};

    #[test]
    fn test_integral_tolerance() {
        for value in [0.0, 1.0, -3.0, 2.0 + 1e-12, 7.0 - 1e-12, 1e20, f64::INFINITY] {
            assert!(is_integral::<SeriesMathsCore>(value), "{}", value);
        }

        for value in [0.5, -2.5, 1.0 + 1e-6, 0.1, f64::NAN] {
            assert!(!is_integral::<SeriesMathsCore>(value), "{}", value);
        }
    }

    #[test]
    fn test_parity() {
        assert!(is_odd::<SeriesMathsCore>(3.0));
        assert!(is_odd::<SeriesMathsCore>(-1.0));
        assert!(is_odd::<SeriesMathsCore>(5.0 - 1e-12));
        assert!(!is_odd::<SeriesMathsCore>(2.0));
        assert!(!is_odd::<SeriesMathsCore>(-4.0));
        assert!(!is_odd::<SeriesMathsCore>(0.0));
        assert!(!is_odd::<SeriesMathsCore>(9_007_199_254_740_994.0));
    }

    #[test]
    fn test_domain_check() {
        assert!(NegativeBasePowError::check::<SeriesMathsCore>(-2.0, 3.0).is_ok());
        assert!(NegativeBasePowError::check::<SeriesMathsCore>(2.0, 0.5).is_ok());

        let error = NegativeBasePowError::check::<SeriesMathsCore>(-2.0, 0.5).unwrap_err();
        assert_eq!(error.base(), -2.0);
        assert_eq!(error.exponent(), 0.5);
    }
}
