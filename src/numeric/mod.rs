// ============================================================================
// Numeric Module
// Quantized decimal arithmetic support for monetary values
// ============================================================================
//
// This module provides:
// - Precision: the per-value quantization step and its rounding rule
// - Operand: closed sum type of values accepted by constructors and operators
// - MoneyError: error taxonomy for construction, guards and arithmetic
//
// Design principles:
// - No floating-point arithmetic; floats are only accepted as input
// - All fallible operations return Result (no panics)
// - Round half-up (midpoint away from zero) everywhere

mod errors;
mod operand;
mod precision;

pub use errors::{ErrorKind, MoneyError, MoneyResult};
pub use operand::Operand;
pub use precision::Precision;
