// ============================================================================
// Guard Checks
// Type and currency checks run at the top of every binary operator
// ============================================================================

use super::operation::Operation;
use crate::domain::Money;
use crate::numeric::{MoneyError, MoneyResult, Operand};
use rust_decimal::Decimal;

/// Type guard: reject `rhs` unless `operation` accepts its kind.
pub fn check_operand(operation: Operation, lhs: &Money, rhs: &Operand) -> MoneyResult<()> {
    if operation.accepts(rhs) {
        return Ok(());
    }
    tracing::debug!(
        "rejected {} operand: '{}' and '{}'",
        operation,
        lhs,
        rhs.type_name()
    );
    Err(type_mismatch(operation, rhs))
}

fn type_mismatch(operation: Operation, rhs: &Operand) -> MoneyError {
    MoneyError::TypeMismatch {
        operation: operation.name(),
        lhs: "Money",
        rhs: rhs.type_name(),
    }
}

/// Currency guard: both sides must carry the same code.
pub fn check_same_currency(operation: Operation, lhs: &Money, rhs: &Money) -> MoneyResult<()> {
    if lhs.currency() == rhs.currency() {
        return Ok(());
    }
    tracing::debug!(
        "rejected {} across currencies: {} and {}",
        operation,
        lhs.currency(),
        rhs.currency()
    );
    Err(MoneyError::IncompatibleCurrency {
        operation: operation.name(),
        lhs: lhs.currency(),
        rhs: rhs.currency(),
    })
}

/// Run the full guard chain for a money-with-money operation and hand back
/// the right-hand money.
///
/// The type guard always runs first, so a non-money operand is reported as
/// a type error even when a currency check could never pass either.
pub fn guard_money(operation: Operation, lhs: &Money, rhs: Operand) -> MoneyResult<Money> {
    check_operand(operation, lhs, &rhs)?;
    match rhs {
        Operand::Money(rhs) => {
            if operation.requires_same_currency() {
                check_same_currency(operation, lhs, &rhs)?;
            }
            Ok(rhs)
        },
        other => Err(type_mismatch(operation, &other)),
    }
}

/// Run the type guard for a scalar operation and hand back the scalar.
pub fn guard_scalar(operation: Operation, lhs: &Money, rhs: Operand) -> MoneyResult<Decimal> {
    check_operand(operation, lhs, &rhs)?;
    rhs.as_scalar()
        .ok_or_else(|| type_mismatch(operation, &rhs))
}
