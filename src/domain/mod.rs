// ============================================================================
// Domain Models Module
// Currencies, the currency registry and the Money value type
// ============================================================================

mod allocation;
pub mod config;
pub mod currency;
mod iso4217;
pub mod money;
pub mod operand;
pub mod record;
pub mod registry;

pub use config::{CustomCurrency, RegistryConfig};
pub use currency::Currency;
pub use iso4217::CurrencyCode;
pub use money::Money;
pub use operand::{MoneyOperand, Numeric};
pub use record::{MoneyRecord, RecordAmount};
pub use registry::CurrencyRegistry;
