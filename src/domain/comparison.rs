// ============================================================================
// Money Comparison
// Guarded comparisons within a single currency
// ============================================================================

use super::money::Money;
use crate::guards::{guard_money, Operation};
use crate::numeric::{MoneyResult, Operand};
use std::cmp::Ordering;

impl Money {
    /// Order two values of the same currency by amount.
    ///
    /// Comparing across currencies never yields an ordering; it fails.
    ///
    /// # Errors
    /// - `TypeMismatch` if `rhs` is not money
    /// - `IncompatibleCurrency` if the currencies differ
    pub fn checked_cmp(&self, rhs: impl Into<Operand>) -> MoneyResult<Ordering> {
        let rhs = guard_money(Operation::Compare, self, rhs.into())?;
        Ok(self.amount().cmp(&rhs.amount()))
    }

    pub fn try_eq(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        self.checked_cmp(rhs).map(Ordering::is_eq)
    }

    pub fn try_ne(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        self.checked_cmp(rhs).map(Ordering::is_ne)
    }

    pub fn try_lt(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        self.checked_cmp(rhs).map(Ordering::is_lt)
    }

    pub fn try_le(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        self.checked_cmp(rhs).map(Ordering::is_le)
    }

    pub fn try_gt(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        self.checked_cmp(rhs).map(Ordering::is_gt)
    }

    pub fn try_ge(&self, rhs: impl Into<Operand>) -> MoneyResult<bool> {
        self.checked_cmp(rhs).map(Ordering::is_ge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{ErrorKind, Precision};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    type Comparison = fn(&Money, Operand) -> MoneyResult<bool>;

    fn comparisons() -> [(&'static str, Comparison); 6] {
        [
            ("eq", |a, b| a.try_eq(b)),
            ("ne", |a, b| a.try_ne(b)),
            ("lt", |a, b| a.try_lt(b)),
            ("le", |a, b| a.try_le(b)),
            ("gt", |a, b| a.try_gt(b)),
            ("ge", |a, b| a.try_ge(b)),
        ]
    }

    fn money(amount: Decimal, currency: &str, step: &str) -> Money {
        Money::with_precision(amount, currency, step.parse::<Precision>().unwrap()).unwrap()
    }

    fn chf(amount: Decimal) -> Money {
        Money::new(amount, "CHF").unwrap()
    }

    #[test]
    fn test_same_currency_never_fails() {
        let a = Money::new(1, "EUR").unwrap();
        let b = Money::new(1, "EUR").unwrap();
        for (name, compare) in comparisons() {
            assert!(compare(&a, b.into()).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_different_currencies_always_fail() {
        let a = Money::new(1, "EUR").unwrap();
        let b = Money::new(1, "USD").unwrap();
        for (name, compare) in comparisons() {
            let err = compare(&a, b.into()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IncompatibleCurrency, "{name}");
            assert_eq!(
                err.to_string(),
                "cannot compare values of two different currencies ('EUR' and 'USD')"
            );
        }
    }

    #[test]
    fn test_other_types_fail() {
        let a = Money::new("10", "USD").unwrap();
        let others = [
            Operand::from(10),
            Operand::from(10.0),
            Operand::from("10"),
            Operand::from(dec!(10)),
            Operand::from(false),
        ];
        for (name, compare) in comparisons() {
            for other in others.clone() {
                let err = compare(&a, other).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::TypeCheck, "{name}");
                assert!(err.to_string().starts_with("cannot compare 'Money'"));
            }
        }
    }

    #[test]
    fn test_eq() {
        for amount in [
            dec!(0),
            dec!(1),
            dec!(10.1),
            dec!(10.0001),
            dec!(6543.9999),
            dec!(-5464.2223),
        ] {
            assert!(chf(amount).try_eq(chf(amount)).unwrap());
            assert_eq!(chf(amount), chf(amount));
        }
    }

    #[test]
    fn test_ne() {
        let cases = [
            (dec!(1), dec!(2), ".00"),
            (dec!(2), dec!(1), ".00"),
            (dec!(1), dec!(-1), ".00"),
            (dec!(-1), dec!(1), ".00"),
            (dec!(0), dec!(0.1), ".00"),
            (dec!(10.0000), dec!(10.0001), ".0000"),
            (dec!(10.0000), dec!(9.9999), ".0000"),
            (dec!(-501.0000), dec!(-500.9999), ".0000"),
            (dec!(-501.0000), dec!(-501.0001), ".0000"),
        ];
        for (a, b, step) in cases {
            assert!(money(a, "CHF", step).try_ne(money(b, "CHF", step)).unwrap());
        }
    }

    #[test]
    fn test_lt() {
        let cases = [
            (dec!(1), dec!(2), ".00"),
            (dec!(-1), dec!(1), ".00"),
            (dec!(-0.0001), dec!(0), ".0000"),
            (dec!(0), dec!(0.0001), ".0000"),
            (dec!(10.0000), dec!(10.0001), ".0000"),
            (dec!(-501.0000), dec!(-500.9999), ".0000"),
        ];
        for (a, b, step) in cases {
            let (a, b) = (money(a, "CHF", step), money(b, "CHF", step));
            assert!(a.try_lt(b).unwrap());
            assert!(!a.try_ge(b).unwrap());
            assert!(a < b);
        }
    }

    #[test]
    fn test_le() {
        let cases = [
            (dec!(1), dec!(2)),
            (dec!(1), dec!(1)),
            (dec!(-1), dec!(1)),
            (dec!(-1), dec!(-1)),
            (dec!(-0.0001), dec!(0)),
            (dec!(-0.0001), dec!(-0.0001)),
        ];
        for (a, b) in cases {
            assert!(chf(a).try_le(chf(b)).unwrap());
            assert!(!chf(a).try_gt(chf(b)).unwrap());
        }
    }

    #[test]
    fn test_gt() {
        let cases = [
            (dec!(7000), dec!(6999), ".00"),
            (dec!(70000), dec!(0), ".00"),
            (dec!(0), dec!(-0.0001), ".0000"),
            (dec!(0.0001), dec!(0), ".0000"),
            (dec!(10.0001), dec!(10.0000), ".0000"),
            (dec!(-420000), dec!(-420000.0001), ".0000"),
        ];
        for (a, b, step) in cases {
            let (a, b) = (money(a, "DKK", step), money(b, "DKK", step));
            assert!(a.try_gt(b).unwrap());
            assert!(!a.try_le(b).unwrap());
            assert!(a > b);
        }
    }

    #[test]
    fn test_ge() {
        let cases = [
            (dec!(7000), dec!(6999)),
            (dec!(7000), dec!(7000)),
            (dec!(70000), dec!(0)),
            (dec!(70000), dec!(70000)),
            (dec!(0), dec!(-0.0001)),
            (dec!(0), dec!(0)),
            (dec!(0.0001), dec!(0)),
            (dec!(-420000), dec!(-420000.0001)),
            (dec!(-420000), dec!(-420000)),
        ];
        for (a, b) in cases {
            let (a, b) = (Money::new(a, "DKK").unwrap(), Money::new(b, "DKK").unwrap());
            assert!(a.try_ge(b).unwrap());
            assert!(!a.try_lt(b).unwrap());
        }
    }

    #[test]
    fn test_values_that_quantize_together_compare_equal() {
        let a = money(dec!(1.004), "EUR", ".00");
        let b = money(dec!(0.996), "EUR", ".00");
        assert_eq!(a.checked_cmp(b).unwrap(), Ordering::Equal);
    }
}
