use elementa_core_bond::{NonNegativeF64Error, PositiveF64Error};
use elementa_core_maths::NegativeBasePowError;

/// Domain errors of the partial elementary functions.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[allow(clippy::module_name_repetitions)]
pub enum MathError {
    #[error("The logarithm is only defined for positive arguments: {0}")]
    NonPositiveLogarithm(#[from] PositiveF64Error),
    #[error("The square root is only defined for non-negative arguments: {0}")]
    NegativeSquareRoot(#[from] NonNegativeF64Error),
    #[error(transparent)]
    FractionalPowerOfNegative(#[from] NegativeBasePowError),
}
