// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;

#[cfg(feature = "logging")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() -> MoneyResult<()> {
    init_logging();

    println!("=== Exact Money Example ===\n");

    // Floats are read through their shortest decimal representation
    let change = Money::usd(36, None, None)?.minus(Money::usd(35.99, None, None)?)?;
    println!("36.00 - 35.99 = {}", change);

    // Amounts default to the currency's minor-unit scale
    for code in [CurrencyCode::USD, CurrencyCode::JPY, CurrencyCode::KWD] {
        let money = Money::create(1, code, None, None)?;
        println!("{} has scale {} -> {}", code, money.scale(), money);
    }

    // Inexact results need an explicit rounding mode
    let bill = Money::eur("100.00", None, None)?;
    match bill.divide(3, None) {
        Ok(share) => println!("\nShare: {}", share),
        Err(err) => println!("\nDivide without rounding: {}", err),
    }
    for mode in [RoundingMode::Floor, RoundingMode::Ceiling, RoundingMode::HalfEven] {
        println!("  {:<10} {}", mode, bill.divide(3, Some(mode))?);
    }

    // Allocation never loses a cent
    println!("\nSplitting {} three ways:", bill);
    for part in bill.split(3)? {
        println!("  {}", part);
    }

    // Currencies never mix
    if let Err(err) = bill.plus(Money::usd(1, None, None)?) {
        println!("\nEUR + USD: {}", err);
    }

    // Custom currencies from configuration
    let registry = CurrencyRegistry::from_config(&RegistryConfig::crypto())?;
    let sats = Money::of("0.00050000", registry.resolve("BTC")?, None, None)?;
    println!("\nWallet: {} ({} satoshi)", sats, sats.minor_amount()?);

    // Interchange record
    let record = bill.to_record();
    println!("\nRecord: {:?}", record);
    let decoded = Money::from_record(&record)?;
    println!("Decoded equals original: {}", decoded.equals(&bill));

    println!("\n=== Example Complete ===");
    Ok(())
}
