use core::{convert::TryFrom, fmt};

use serde::{Deserialize, Serialize};

use crate::NonNegativeF64;

#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub struct PositiveF64Error(f64);

impl PositiveF64Error {
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for PositiveF64Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} is not positive.", self.0)
    }
}

impl core::error::Error for PositiveF64Error {}

/// An `f64` in `(0.0, +inf]`, the domain of the logarithms.
#[derive(Copy, Clone, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "f64", into = "f64")]
pub struct PositiveF64(f64);

impl TryFrom<f64> for PositiveF64 {
    type Error = PositiveF64Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PositiveF64> for f64 {
    fn from(value: PositiveF64) -> Self {
        value.0
    }
}

impl fmt::Debug for PositiveF64 {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        struct PositiveF64Range(f64);

        impl fmt::Debug for PositiveF64Range {
            fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
                write!(fmt, "0.0 < {}", self.0)
            }
        }

        fmt.debug_tuple("PositiveF64")
            .field(&PositiveF64Range(self.0))
            .finish()
    }
}

impl PositiveF64 {
    /// # Errors
    ///
    /// Returns `PositiveF64Error` if not `0.0 < value`, which includes NaN
    pub fn new(value: f64) -> Result<Self, PositiveF64Error> {
        if value > 0.0 {
            Ok(Self(value))
        } else {
            Err(PositiveF64Error(value))
        }
    }

    /// # Safety
    ///
    /// Only safe iff `0.0 < value`
    #[must_use]
    pub unsafe fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn infinity() -> Self {
        Self(f64::INFINITY)
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for PositiveF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl PartialEq<NonNegativeF64> for PositiveF64 {
    fn eq(&self, other: &NonNegativeF64) -> bool {
        self.0.eq(&other.get())
    }
}

impl PartialEq<f64> for PositiveF64 {
    fn eq(&self, other: &f64) -> bool {
        self.0.eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::{PositiveF64, PositiveF64Error};

    #[test]
    fn test_accepts_positive_values() {
        for value in [f64::MIN_POSITIVE, 1e-300, 0.5, 1.0, 10.0, 1e300, f64::INFINITY] {
            assert_eq!(PositiveF64::new(value).unwrap().get(), value);
        }
    }

    #[test]
    fn test_rejects_non_positive_values() {
        for value in [0.0, -0.0, -f64::MIN_POSITIVE, -1.0, f64::NEG_INFINITY] {
            let error = PositiveF64::new(value).unwrap_err();
            assert_eq!(error, PositiveF64Error(value));
        }

        assert!(PositiveF64::new(f64::NAN).is_err());
    }

    #[test]
    fn test_deserialisation_revalidates() {
        let value: PositiveF64 = serde_json::from_str("2.5").unwrap();
        assert_eq!(value, 2.5_f64);
        assert_eq!(serde_json::to_string(&value).unwrap(), "2.5");

        assert!(serde_json::from_str::<PositiveF64>("0.0").is_err());
        assert!(serde_json::from_str::<PositiveF64>("-3.0").is_err());
    }

    #[test]
    fn test_error_display() {
        extern crate alloc;

        let error = PositiveF64::new(-2.0).unwrap_err();
        assert_eq!(alloc::format!("{error}"), "-2 is not positive.");
        assert_eq!(error.value(), -2.0);
    }
}
