// ============================================================================
// Money Guard Library
// Immutable, currency-safe fixed-point money with guarded arithmetic
// ============================================================================

//! # Money Guard
//!
//! An immutable monetary value: a decimal amount quantized to a fixed number
//! of fractional digits, tagged with a three-letter currency code.
//!
//! ## Features
//!
//! - **Quantized amounts**: round half-up to a per-value precision (default
//!   four digits) on construction and after every operation
//! - **Currency guards**: adding, subtracting or comparing two currencies is
//!   an error, never a silently wrong number
//! - **Type guards**: money only adds to money and only scales by integers or
//!   exact decimals; money × money is rejected
//! - **No panics**: every fallible operation returns a [`MoneyResult`](numeric::MoneyResult)
//!
//! ## Example
//!
//! ```rust
//! use money_guard::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let rent = Money::new("1250.5", "EUR")?;
//! let deposit = (rent * 3)?;
//! assert_eq!(deposit.to_string(), "3751.5000 EUR");
//!
//! // Split three ways, rounded half-up to the value's precision
//! let share = (Money::new(10, "EUR")? / Decimal::from(6))?;
//! assert_eq!(share.to_string(), "1.6667 EUR");
//!
//! // Cross-currency arithmetic is refused
//! let err = rent.checked_sub(Money::new(5, "USD")?).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IncompatibleCurrency);
//!
//! // So is treating a bare number as money
//! assert!(rent.checked_add(5).unwrap_err().is_type_error());
//! # Ok::<(), MoneyError>(())
//! ```

pub mod domain;
pub mod guards;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CurrencyCode, Money};
    pub use crate::guards::Operation;
    pub use crate::numeric::{ErrorKind, MoneyError, MoneyResult, Operand, Precision};
}
