// ============================================================================
// Currency Code
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use std::fmt;
use std::str::FromStr;

/// Three-letter uppercase currency code such as `USD`.
///
/// Only ever holds ASCII uppercase letters, so it is stored inline and is
/// `Copy`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Validate and create a currency code.
    ///
    /// # Errors
    /// Returns `MalformedCurrencyCode` unless `code` is exactly three
    /// uppercase ASCII letters.
    pub fn new(code: &str) -> MoneyResult<Self> {
        match code.as_bytes() {
            &[a, b, c] if [a, b, c].iter().all(u8::is_ascii_uppercase) => Ok(Self([a, b, c])),
            _ => Err(MoneyError::MalformedCurrencyCode(code.to_string())),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}
