// ============================================================================
// Registry Configuration
// Custom currencies layered on top of (or instead of) the ISO table
// ============================================================================

use super::currency::Currency;
use crate::numeric::{MoneyError, MoneyResult};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Custom Currency
// ============================================================================

/// A currency that is not part of ISO 4217 (tokens, points, crypto assets)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomCurrency {
    /// Code used to look the currency up, e.g. "BTC"
    pub code: String,

    /// Human readable name
    pub name: String,

    /// Canonical number of minor-unit digits
    pub default_scale: u32,
}

// ============================================================================
// Registry Configuration
// ============================================================================

/// Configuration for building a [`CurrencyRegistry`](super::CurrencyRegistry)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegistryConfig {
    /// Start from the built-in ISO 4217 table
    #[cfg_attr(feature = "serde", serde(default = "default_include_iso"))]
    pub include_iso: bool,

    /// Additional currencies; these win over ISO entries with the same code
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom: Vec<CustomCurrency>,
}

#[cfg(feature = "serde")]
fn default_include_iso() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryConfig {
    /// ISO table only, no custom currencies
    pub fn new() -> Self {
        Self {
            include_iso: true,
            custom: Vec::new(),
        }
    }

    /// Builder method: Add a custom currency
    pub fn with_currency(mut self, code: &str, name: &str, default_scale: u32) -> Self {
        self.custom.push(CustomCurrency {
            code: code.to_string(),
            name: name.to_string(),
            default_scale,
        });
        self
    }

    /// Builder method: Leave the ISO table out
    pub fn without_iso(mut self) -> Self {
        self.include_iso = false;
        self
    }

    /// Validate the configuration
    ///
    /// Each custom currency must pass [`Currency::new`]; codes must be unique.
    pub fn validate(&self) -> MoneyResult<()> {
        let mut seen = HashSet::new();

        for currency in &self.custom {
            Currency::new(&currency.code, 0, &currency.name, currency.default_scale)?;
            if !seen.insert(currency.code.as_str()) {
                return Err(MoneyError::InvalidConfig(format!(
                    "currency {} is configured twice",
                    currency.code
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RegistryConfig {
    /// ISO table plus common crypto assets
    /// - BTC: 8 decimals (satoshi)
    /// - ETH: 18 decimals (wei)
    /// - USDT: 6 decimals
    pub fn crypto() -> Self {
        Self::new()
            .with_currency("BTC", "Bitcoin", 8)
            .with_currency("ETH", "Ether", 18)
            .with_currency("USDT", "Tether USD", 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = RegistryConfig::new();
        assert!(config.include_iso);
        assert!(config.custom.is_empty());
        assert!(config.validate().is_ok());
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RegistryConfig::new()
            .without_iso()
            .with_currency("PTS", "Points", 0);

        assert!(!config.include_iso);
        assert_eq!(config.custom.len(), 1);
        assert_eq!(config.custom[0].default_scale, 0);
    }

    #[test]
    fn test_validation() {
        let cases = [
            RegistryConfig::new().with_currency("", "Empty", 2),
            RegistryConfig::new().with_currency("VERYLONGCODE1", "Long", 2),
            RegistryConfig::new().with_currency("bt c", "Spaces", 2),
            RegistryConfig::new().with_currency("ABC", &"n".repeat(65), 2),
            RegistryConfig::new().with_currency("ABC", "Precise", 29),
            RegistryConfig::new()
                .with_currency("ABC", "One", 2)
                .with_currency("ABC", "Two", 2),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(MoneyError::InvalidConfig(_))),
                "{:?}",
                config
            );
        }
    }

    #[test]
    fn test_validation_matches_currency_rules() {
        let rows = [
            ("USD2", "Fine", 2),
            ("X", "", 28),
            ("lower", "Lowercase", 2),
            ("ABC", "Too precise", 30),
            ("TWELVECHARS1", "Longest code", 0),
        ];
        for (code, name, scale) in rows {
            let config = RegistryConfig::new().with_currency(code, name, scale);
            assert_eq!(
                config.validate().is_ok(),
                Currency::new(code, 0, name, scale).is_ok(),
                "{}",
                code
            );
        }
    }

    #[test]
    fn test_preset_configs() {
        let crypto = RegistryConfig::crypto();
        assert!(crypto.include_iso);
        assert_eq!(crypto.custom.len(), 3);
        assert!(crypto.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let json = r#"{"custom":[{"code":"BTC","name":"Bitcoin","default_scale":8}]}"#;
        let config: RegistryConfig = serde_json::from_str(json).unwrap();
        assert!(config.include_iso);
        assert_eq!(config.custom[0].code, "BTC");
        assert!(config.validate().is_ok());
    }
}
