// ============================================================================
// Precision
// Quantization step shared by every amount of a monetary value
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits an amount is quantized to.
///
/// Every amount is rounded half-up (midpoint away from zero) to this many
/// digits on construction and after every arithmetic result, and is stored
/// with exactly this scale so trailing zeros survive formatting.
///
/// # Example
/// ```
/// use money_guard::numeric::Precision;
/// use rust_decimal::Decimal;
///
/// let cents = Precision::new(2)?;
/// let amount: Decimal = "10.005".parse().unwrap();
/// assert_eq!(cents.quantize(amount)?.to_string(), "10.01");
///
/// let step: Precision = ".0001".parse()?;
/// assert_eq!(step, Precision::DEFAULT);
/// # Ok::<(), money_guard::numeric::MoneyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(u32);

impl Precision {
    /// Largest scale `rust_decimal` can carry
    pub const MAX_DIGITS: u32 = 28;

    /// Four fractional digits (`.0001`)
    pub const DEFAULT: Self = Self(4);

    /// Whole units only
    pub const ZERO: Self = Self(0);

    /// Create a precision of `digits` fractional digits.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `digits` exceeds [`Self::MAX_DIGITS`].
    #[inline]
    pub fn new(digits: u32) -> MoneyResult<Self> {
        if digits > Self::MAX_DIGITS {
            return Err(MoneyError::InvalidPrecision(digits));
        }
        Ok(Self(digits))
    }

    #[inline]
    pub const fn digits(self) -> u32 {
        self.0
    }

    /// The smallest representable increment, e.g. `0.0001`.
    pub fn step(self) -> Decimal {
        Decimal::new(1, self.0)
    }

    /// Round `value` half-up to this precision and pin its scale.
    ///
    /// A zero result is always returned with a positive sign.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part of `value` leaves no room in
    /// the 96-bit mantissa for this many fractional digits.
    pub fn quantize(self, value: Decimal) -> MoneyResult<Decimal> {
        let mut quantized =
            value.round_dp_with_strategy(self.0, RoundingStrategy::MidpointAwayFromZero);
        // rescale stops short of the requested scale when the mantissa is full
        quantized.rescale(self.0);
        if quantized.scale() != self.0 {
            return Err(MoneyError::Overflow);
        }
        if quantized.is_zero() {
            quantized.set_sign_positive(true);
        }
        Ok(quantized)
    }
}

impl Default for Precision {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Precision {
    /// Renders the quantization step, e.g. `.0001` or `1` for whole units.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            write!(f, "1")
        } else {
            write!(f, ".{:0>width$}", 1, width = self.0 as usize)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Precision {
    type Err = MoneyError;

    /// Parse a quantization step.
    ///
    /// # Examples
    /// - ".0001" -> 4 digits
    /// - "0.01" -> 2 digits
    /// - ".00" -> 2 digits
    /// - "1" -> 0 digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || MoneyError::MalformedPrecision(s.to_string());

        let (int_str, frac_str) = match s.find('.') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(malformed());
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let digits = u32::try_from(frac_str.len()).map_err(|_| malformed())?;
        Self::new(digits)
    }
}

impl TryFrom<u32> for Precision {
    type Error = MoneyError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}
