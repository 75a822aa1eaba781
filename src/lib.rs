// ============================================================================
// Exact Money Library
// Currency-scoped decimal money with explicit rounding
// ============================================================================

//! # Exact Money
//!
//! Monetary values as exact, currency-scoped decimal quantities.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic**: `36 - 35.99` is `0.01`, not a float artifact
//! - **Currency-aware scale**: amounts default to the currency's minor-unit scale
//! - **Explicit rounding**: precision is only dropped under a [`RoundingMode`]
//!   you pass; otherwise the operation fails with `RoundingNecessary`
//! - **Currency safety**: mixing currencies is an error, never a conversion
//! - **Interchange record**: `{"amount": "11.50", "currency": "USD"}`
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! let price = Money::create(11.50, CurrencyCode::USD, None, None)?;
//! let total = price.multiply(3, None)?.plus(Money::usd(2.5, None, None)?)?;
//! assert_eq!(total.to_string(), "USD 37.00");
//!
//! // dividing needs a rounding mode when the quotient does not terminate
//! assert!(total.divide(3, None).is_err());
//! let third = total.divide(3, Some(RoundingMode::HalfEven))?;
//! assert_eq!(third.amount().to_string(), "12.33");
//!
//! // currencies never mix
//! assert!(price.plus(Money::eur(1, None, None)?).is_err());
//! # Ok::<(), MoneyError>(())
//! ```

pub mod domain;
pub mod numeric;

pub use domain::{Currency, CurrencyCode, CurrencyRegistry, Money};
pub use numeric::{DecimalAmount, MoneyError, MoneyResult, RoundingMode};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Currency, CurrencyCode, CurrencyRegistry, CustomCurrency, Money, MoneyOperand,
        MoneyRecord, Numeric, RecordAmount, RegistryConfig,
    };
    pub use crate::numeric::{DecimalAmount, MoneyError, MoneyResult, RoundingMode};
}
