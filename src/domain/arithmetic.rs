// ============================================================================
// Money Arithmetic
// Guarded binary operators; every result is re-quantized
// ============================================================================

use super::money::Money;
use crate::guards::{guard_money, guard_scalar, Operation};
use crate::numeric::{MoneyError, MoneyResult, Operand};
use rust_decimal::Decimal;
use std::ops::{Add, Div, Mul, Sub};

impl Money {
    /// Sum of two values of the same currency.
    ///
    /// # Errors
    /// - `TypeMismatch` if `rhs` is not money
    /// - `IncompatibleCurrency` if the currencies differ
    /// - `Overflow` if the sum does not fit at this value's precision
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> MoneyResult<Money> {
        let rhs = guard_money(Operation::Add, self, rhs.into())?;
        self.amount()
            .checked_add(rhs.amount())
            .ok_or(MoneyError::Overflow)
            .and_then(|sum| self.with_amount(sum))
    }

    /// Difference of two values of the same currency, computed as
    /// `self + (-rhs)`.
    ///
    /// # Errors
    /// Same as [`Money::checked_add`].
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> MoneyResult<Money> {
        let rhs = guard_money(Operation::Subtract, self, rhs.into())?;
        self.checked_add(rhs.negate())
    }

    /// Scale by an integer or decimal factor.
    ///
    /// # Errors
    /// - `TypeMismatch` unless `factor` is an integer or [`Decimal`]
    /// - `Overflow` if the product does not fit
    pub fn checked_mul(&self, factor: impl Into<Operand>) -> MoneyResult<Money> {
        let factor = guard_scalar(Operation::Multiply, self, factor.into())?;
        self.amount()
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)
            .and_then(|product| self.with_amount(product))
    }

    /// `self / divisor`.
    ///
    /// # Errors
    /// - `TypeMismatch` unless `divisor` is an integer or [`Decimal`]
    /// - `DivisionByZero` if `divisor` is zero
    pub fn checked_div(&self, divisor: impl Into<Operand>) -> MoneyResult<Money> {
        let divisor = guard_scalar(Operation::Divide, self, divisor.into())?;
        divide(self.amount(), divisor).and_then(|quotient| self.with_amount(quotient))
    }

    /// `dividend / self`, the scalar divided by this value.
    ///
    /// # Errors
    /// - `TypeMismatch` unless `dividend` is an integer or [`Decimal`]
    /// - `DivisionByZero` if this value is zero
    pub fn checked_rdiv(&self, dividend: impl Into<Operand>) -> MoneyResult<Money> {
        let dividend = guard_scalar(Operation::Divide, self, dividend.into())?;
        divide(dividend, self.amount()).and_then(|quotient| self.with_amount(quotient))
    }

    /// `floor(self / divisor)`.
    ///
    /// The quotient is floored toward negative infinity, not truncated:
    /// `-10` divided by `3` gives `-4`.
    ///
    /// # Errors
    /// Same as [`Money::checked_div`].
    pub fn checked_div_floor(&self, divisor: impl Into<Operand>) -> MoneyResult<Money> {
        let divisor = guard_scalar(Operation::FloorDivide, self, divisor.into())?;
        divide(self.amount(), divisor).and_then(|quotient| self.with_amount(quotient.floor()))
    }

    /// `floor(dividend / self)`, floored toward negative infinity like
    /// [`Money::checked_div_floor`].
    ///
    /// # Errors
    /// Same as [`Money::checked_rdiv`].
    pub fn checked_rdiv_floor(&self, dividend: impl Into<Operand>) -> MoneyResult<Money> {
        let dividend = guard_scalar(Operation::FloorDivide, self, dividend.into())?;
        divide(dividend, self.amount()).and_then(|quotient| self.with_amount(quotient.floor()))
    }
}

fn divide(dividend: Decimal, divisor: Decimal) -> MoneyResult<Decimal> {
    if divisor.is_zero() {
        return Err(MoneyError::DivisionByZero);
    }
    dividend.checked_div(divisor).ok_or(MoneyError::Overflow)
}

// ============================================================================
// Operator Traits
// ============================================================================
//
// Money with money only adds and subtracts; money with a scalar only
// multiplies and divides. Anything else does not compile. All operators keep
// the guards and return a Result.

impl Add for Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn add(self, rhs: Money) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn sub(self, rhs: Money) -> Self::Output {
        self.checked_sub(rhs)
    }
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {
        $(
            impl Mul<$scalar> for Money {
                type Output = MoneyResult<Money>;

                #[inline]
                fn mul(self, rhs: $scalar) -> Self::Output {
                    self.checked_mul(rhs)
                }
            }

            impl Mul<Money> for $scalar {
                type Output = MoneyResult<Money>;

                #[inline]
                fn mul(self, rhs: Money) -> Self::Output {
                    rhs.checked_mul(self)
                }
            }

            impl Div<$scalar> for Money {
                type Output = MoneyResult<Money>;

                #[inline]
                fn div(self, rhs: $scalar) -> Self::Output {
                    self.checked_div(rhs)
                }
            }

            impl Div<Money> for $scalar {
                type Output = MoneyResult<Money>;

                #[inline]
                fn div(self, rhs: Money) -> Self::Output {
                    rhs.checked_rdiv(self)
                }
            }
        )*
    };
}

impl_scalar_ops!(Decimal, i64);

// ============================================================================
// Tests
// ============================================================================
