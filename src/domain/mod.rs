// ============================================================================
// Domain Models Module
// The monetary value type and the currency code it is tagged with
// ============================================================================

mod arithmetic;
mod comparison;
pub mod currency;
pub mod money;

pub use currency::CurrencyCode;
pub use money::Money;
