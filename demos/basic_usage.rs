// ============================================================================
// Basic Usage Example
// ============================================================================

use money_guard::prelude::*;
use rust_decimal::Decimal;

fn main() -> MoneyResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Money Guard Example ===\n");

    // Construction quantizes to four fractional digits by default
    let price = Money::new("19.99999", "EUR")?;
    let quantity = 3;
    println!("Unit price:  {}", price);
    println!("Debug form:  {:?}", price);

    // Scalars scale money
    let subtotal = (price * quantity)?;
    println!("Subtotal:    {}", subtotal);

    let discount = (subtotal * Decimal::new(15, 2))?;
    let total = (subtotal - discount)?;
    println!("Discount:    {}", discount);
    println!("Total:       {}\n", total);

    // Per-value precision: cents
    let cents = Precision::new(2)?;
    let bill = Money::with_precision("100", "EUR", cents)?;
    let share = (bill / 3)?;
    let whole_shares = bill.checked_div_floor(Decimal::new(3333, 2))?;
    println!("Bill split three ways:  {}", share);
    println!("Whole 33.33 shares:     {}\n", whole_shares);

    // Guards
    println!("Guarded operations:");
    let dollars = Money::new(10, "USD")?;
    let attempts = [
        ("EUR + USD", total.checked_add(dollars)),
        ("EUR + 5", total.checked_add(5)),
        ("EUR * EUR", total.checked_mul(price)),
        ("EUR / 0", total.checked_div(0)),
    ];
    for (label, result) in attempts {
        match result {
            Ok(value) => println!("  {label:<10} -> {value}"),
            Err(err) => println!("  {label:<10} -> {:?}: {err}", err.kind()),
        }
    }

    match total.checked_cmp(dollars) {
        Ok(ordering) => println!("  compare    -> {ordering:?}"),
        Err(err) => println!("  compare    -> {:?}: {err}", err.kind()),
    }

    for code in ["usd", "US1", ""] {
        if let Err(err) = Money::new(1, code) {
            println!("  construct  -> {err}");
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
