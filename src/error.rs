use num_bigint::BigInt;
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractionError>;

pub const SAME_CLASS_ONLY: &str = "Only same class allowed";
pub const INVALID_PARAMETER: &str = "invalid parameter";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("denominator must not be zero: {0}")]
    ZeroDenominator(BigInt),

    #[error("denominator must not be negative: {0}")]
    NegativeDenominator(BigInt),

    /// Operand of the wrong kind, only reachable from the Python side
    #[error("{0}")]
    InvalidArgument(String),
}

create_exception!(rust_fraction, ZeroDenominatorError, PyValueError);
create_exception!(rust_fraction, NegativeDenominatorError, PyValueError);
create_exception!(rust_fraction, InvalidArgumentError, PyValueError);

impl From<FractionError> for PyErr {
    fn from(error: FractionError) -> PyErr {
        let message = error.to_string();
        match error {
            FractionError::ZeroDenominator(_) => ZeroDenominatorError::new_err(message),
            FractionError::NegativeDenominator(_) => NegativeDenominatorError::new_err(message),
            FractionError::InvalidArgument(_) => InvalidArgumentError::new_err(message),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_value() {
        let zero = FractionError::ZeroDenominator(BigInt::from(0));
        assert!(zero.to_string().ends_with("0"));

        let negative = FractionError::NegativeDenominator(BigInt::from(-12));
        assert!(negative.to_string().contains("-12"));

        let invalid = FractionError::InvalidArgument(SAME_CLASS_ONLY.to_string());
        assert_eq!(invalid.to_string(), "Only same class allowed");
    }
}
