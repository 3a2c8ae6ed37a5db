// ============================================================================
// Money Errors
// Error types for construction, guards and arithmetic of monetary values
// ============================================================================

use crate::domain::CurrencyCode;
use thiserror::Error;

/// Coarse classification of a [`MoneyError`].
///
/// Callers that only care about which guard fired should match on the kind
/// rather than on the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operand of the wrong kind for construction or an operator
    TypeCheck,
    /// Currency code is not three uppercase ASCII letters
    MalformedCurrencyCode,
    /// Add/subtract/compare across two different currencies
    IncompatibleCurrency,
    /// Divisor is zero
    DivisionByZero,
    /// Result does not fit in the decimal representation
    Overflow,
    /// Amount could not be converted to an exact decimal
    InvalidAmount,
    /// Quantization step is out of range or unparsable
    InvalidPrecision,
}

/// Errors that can occur while building or operating on [`Money`](crate::domain::Money).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// Right-hand operand is not accepted by the operator
    #[error("cannot {operation} '{lhs}' and '{rhs}'")]
    TypeMismatch {
        operation: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// Amount operand has a kind that cannot become a decimal
    #[error("amount should be an integer, float, string or Decimal, not '{found}'")]
    UnsupportedAmount { found: &'static str },

    /// Currency operand is not a string
    #[error("currency code should be a string, not '{found}'")]
    NonTextCurrency { found: &'static str },

    #[error("currency code should consist of three uppercase letters, not '{0}'")]
    MalformedCurrencyCode(String),

    #[error("cannot {operation} values of two different currencies ('{lhs}' and '{rhs}')")]
    IncompatibleCurrency {
        operation: &'static str,
        lhs: CurrencyCode,
        rhs: CurrencyCode,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,

    #[error("invalid amount: could not convert '{0}' to a decimal")]
    InvalidAmount(String),

    #[error("precision must be between 0 and 28 fractional digits, not {0}")]
    InvalidPrecision(u32),

    #[error("malformed quantization step '{0}'")]
    MalformedPrecision(String),
}

impl MoneyError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoneyError::TypeMismatch { .. }
            | MoneyError::UnsupportedAmount { .. }
            | MoneyError::NonTextCurrency { .. } => ErrorKind::TypeCheck,
            MoneyError::MalformedCurrencyCode(_) => ErrorKind::MalformedCurrencyCode,
            MoneyError::IncompatibleCurrency { .. } => ErrorKind::IncompatibleCurrency,
            MoneyError::DivisionByZero => ErrorKind::DivisionByZero,
            MoneyError::Overflow => ErrorKind::Overflow,
            MoneyError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            MoneyError::InvalidPrecision(_) | MoneyError::MalformedPrecision(_) => {
                ErrorKind::InvalidPrecision
            },
        }
    }

    /// True for every error raised by a type guard.
    #[inline]
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::TypeCheck
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
