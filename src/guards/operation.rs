// ============================================================================
// Guarded Operations
// ============================================================================

use crate::numeric::Operand;
use std::fmt;

/// Binary operation a guard is protecting.
///
/// Knows its name for error messages, which operand kinds it accepts on the
/// right-hand side and whether both sides must share a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Compare,
}

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::FloorDivide => "floor-divide",
            Operation::Compare => "compare",
        }
    }

    /// Money-with-money operations; everything else takes a scalar.
    #[inline]
    pub const fn takes_money(self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Compare
        )
    }

    /// Whether `operand` is in this operation's accepted set.
    pub fn accepts(self, operand: &Operand) -> bool {
        if self.takes_money() {
            matches!(operand, Operand::Money(_))
        } else {
            operand.is_scalar()
        }
    }

    /// Both sides must carry the same currency.
    #[inline]
    pub const fn requires_same_currency(self) -> bool {
        self.takes_money()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
