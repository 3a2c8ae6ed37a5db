// ============================================================================
// Operand
// Closed set of values accepted at the dynamic boundary of Money
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use crate::domain::Money;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Anything a caller may hand to a [`Money`] constructor or operator.
///
/// Each operator accepts only a subset of these kinds and rejects the rest
/// with a type-check error before any arithmetic happens.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Money(Money),
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl Operand {
    /// Type name reported in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Operand::Money(_) => "Money",
            Operand::Integer(_) => "i64",
            Operand::Decimal(_) => "Decimal",
            Operand::Float(_) => "f64",
            Operand::Text(_) => "String",
            Operand::Boolean(_) => "bool",
        }
    }

    /// Integer or exact decimal.
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Operand::Integer(_) | Operand::Decimal(_))
    }

    /// The operand as an exact decimal, if it is a scalar.
    pub fn as_scalar(&self) -> Option<Decimal> {
        match self {
            Operand::Integer(value) => Some(Decimal::from(*value)),
            Operand::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    /// Convert an amount operand to an exact, not yet quantized, decimal.
    ///
    /// Floats go through their exact binary value; text accepts plain and
    /// scientific notation.
    ///
    /// # Errors
    /// - `UnsupportedAmount` for money and booleans
    /// - `InvalidAmount` for NaN, infinite or unparsable values
    pub fn to_amount(&self) -> MoneyResult<Decimal> {
        match self {
            Operand::Integer(value) => Ok(Decimal::from(*value)),
            Operand::Decimal(value) => Ok(*value),
            Operand::Float(value) => Decimal::from_f64_retain(*value)
                .ok_or_else(|| MoneyError::InvalidAmount(value.to_string())),
            Operand::Text(text) => parse_amount(text),
            Operand::Money(_) | Operand::Boolean(_) => Err(MoneyError::UnsupportedAmount {
                found: self.type_name(),
            }),
        }
    }
}

fn parse_amount(text: &str) -> MoneyResult<Decimal> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MoneyError::InvalidAmount(text.to_string()))
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Money> for Operand {
    fn from(value: Money) -> Self {
        Operand::Money(value)
    }
}

impl From<&Money> for Operand {
    fn from(value: &Money) -> Self {
        Operand::Money(*value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Operand::Decimal(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Boolean(value)
    }
}
