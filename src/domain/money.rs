// ============================================================================
// Money
// Immutable amount of a single currency, quantized to a fixed step
// ============================================================================

use super::currency::CurrencyCode;
use crate::numeric::{MoneyError, MoneyResult, Operand, Precision};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// A decimal amount tagged with a currency code.
///
/// The amount is quantized half-up to the value's [`Precision`] when the
/// value is built and again after every arithmetic result, always using the
/// precision of the money operand. Values never change once built.
///
/// # Example
/// ```
/// use money_guard::prelude::*;
///
/// let price = Money::new("100.1", "EUR")?;
/// assert_eq!(price.to_string(), "100.1000 EUR");
/// assert_eq!(format!("{price:?}"), "Money(amount='100.1000', currency='EUR')");
///
/// let total = (price + Money::new(5, "EUR")?)?;
/// assert_eq!(total.to_string(), "105.1000 EUR");
///
/// // Mixing currencies is an error, not a silent unit bug
/// let err = price.checked_add(Money::new(5, "USD")?).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::IncompatibleCurrency);
/// # Ok::<(), MoneyError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
    precision: Precision,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a value quantized to [`Precision::DEFAULT`] (four digits).
    ///
    /// `amount` may be an integer, a float, a decimal string or a
    /// [`Decimal`]; `currency` must be a string of three uppercase letters.
    ///
    /// # Errors
    /// - `UnsupportedAmount` / `InvalidAmount` if the amount is unusable
    /// - `NonTextCurrency` if `currency` is not a string
    /// - `MalformedCurrencyCode` if the code is not three uppercase letters
    pub fn new(amount: impl Into<Operand>, currency: impl Into<Operand>) -> MoneyResult<Self> {
        Self::with_precision(amount, currency, Precision::DEFAULT)
    }

    /// Build a value quantized to `precision`.
    ///
    /// # Errors
    /// Same as [`Money::new`].
    pub fn with_precision(
        amount: impl Into<Operand>,
        currency: impl Into<Operand>,
        precision: Precision,
    ) -> MoneyResult<Self> {
        Self::build(amount.into(), currency.into(), precision).inspect_err(|err| {
            tracing::debug!("rejected money construction: {}", err);
        })
    }

    fn build(amount: Operand, currency: Operand, precision: Precision) -> MoneyResult<Self> {
        let amount = amount.to_amount()?;
        let currency = match currency {
            Operand::Text(code) => CurrencyCode::new(&code)?,
            other => {
                return Err(MoneyError::NonTextCurrency {
                    found: other.type_name(),
                })
            },
        };
        Self::from_decimal(amount, currency, precision)
    }

    /// Build from already validated parts.
    ///
    /// # Errors
    /// Returns `Overflow` if `amount` is too large to carry `precision`
    /// fractional digits.
    pub fn from_decimal(
        amount: Decimal,
        currency: CurrencyCode,
        precision: Precision,
    ) -> MoneyResult<Self> {
        Ok(Self {
            amount: precision.quantize(amount)?,
            currency,
            precision,
        })
    }

    /// Zero in `currency` at the default precision.
    pub fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(0, Precision::DEFAULT.digits()),
            currency,
            precision: Precision::DEFAULT,
        }
    }

    /// New value in the same currency and precision, re-quantized.
    #[inline]
    pub(crate) fn with_amount(&self, amount: Decimal) -> MoneyResult<Self> {
        Self::from_decimal(amount, self.currency, self.precision)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[inline]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Falsy test: true iff the quantized amount is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    /// Unary plus.
    #[inline]
    pub const fn identity(self) -> Self {
        self
    }

    /// Same currency and precision, amount negated.
    ///
    /// The amount is already quantized, so only the sign changes.
    #[inline]
    pub fn negate(self) -> Self {
        let mut amount = -self.amount;
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        Self { amount, ..self }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// Structural equality never errors: values of different currencies are
// simply unequal. Use `try_eq` for the guarded comparison.
impl PartialEq for Money {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for Money {}

// No ordering exists across currencies.
impl PartialOrd for Money {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.amount.cmp(&other.amount))
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money(amount='{}', currency='{}')",
            self.amount, self.currency
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
