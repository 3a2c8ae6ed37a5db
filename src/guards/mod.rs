// ============================================================================
// Guards Module
// Validation run before the core computation of every binary operator
// ============================================================================
//
// Guard order is fixed: the type guard runs first, the currency guard second.
// Callers rely on which error surfaces when both would fail.

mod checks;
mod operation;

pub use checks::{check_operand, check_same_currency, guard_money, guard_scalar};
pub use operation::Operation;
