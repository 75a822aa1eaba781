// ============================================================================
// Currency Registry
// Resolves currency codes to Currency values
// ============================================================================

use super::config::RegistryConfig;
use super::currency::{Currency, CODE_CAPACITY};
use super::iso4217::ISO_CURRENCIES;
use crate::numeric::{MoneyError, MoneyResult};
use arrayvec::ArrayString;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Read-only lookup table from currency code to [`Currency`].
///
/// The built-in ISO 4217 registry is process-wide static data; custom
/// registries are built from a [`RegistryConfig`] and owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: HashMap<ArrayString<CODE_CAPACITY>, Currency>,
}

static ISO_REGISTRY: OnceLock<CurrencyRegistry> = OnceLock::new();

impl CurrencyRegistry {
    /// The built-in ISO 4217 registry.
    pub fn iso() -> &'static CurrencyRegistry {
        ISO_REGISTRY.get_or_init(|| {
            let mut registry = CurrencyRegistry::default();
            if let Err(err) = registry.extend_iso() {
                tracing::error!(%err, "invalid ISO 4217 table row");
            }
            registry
        })
    }

    /// Build a registry from configuration.
    ///
    /// Custom entries replace ISO entries with the same code.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn from_config(config: &RegistryConfig) -> MoneyResult<Self> {
        config.validate()?;

        let mut registry = CurrencyRegistry::default();
        if config.include_iso {
            registry.extend_iso()?;
        }
        let iso_count = registry.len();

        for custom in &config.custom {
            let currency = Currency::new(&custom.code, 0, &custom.name, custom.default_scale)?;
            registry.insert(currency);
        }

        tracing::debug!(
            iso = iso_count,
            custom = config.custom.len(),
            total = registry.len(),
            "built currency registry"
        );
        Ok(registry)
    }

    fn extend_iso(&mut self) -> MoneyResult<()> {
        for entry in ISO_CURRENCIES {
            let currency =
                Currency::new(entry.code, entry.numeric_code, entry.name, entry.default_scale)?;
            self.insert(currency);
        }
        Ok(())
    }

    fn insert(&mut self, currency: Currency) {
        self.currencies.insert(currency.key(), currency);
    }

    /// Look up a currency by code (case-sensitive).
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not registered.
    pub fn resolve(&self, code: &str) -> MoneyResult<Currency> {
        self.currencies
            .get(code)
            .copied()
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    /// Default scale of a registered currency.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not registered.
    pub fn default_scale(&self, code: &str) -> MoneyResult<u32> {
        self.resolve(code).map(|currency| currency.default_scale())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    /// All registered currencies, in no particular order.
    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.values()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
