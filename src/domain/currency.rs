// ============================================================================
// Currency
// Monetary unit identified by a stable code, carrying its default scale
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult, MAX_SCALE};
use arrayvec::ArrayString;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum length of a currency code
pub const CODE_CAPACITY: usize = 12;

/// Maximum length (in bytes) of a currency name
pub const NAME_CAPACITY: usize = 64;

/// A monetary unit: code, ISO numeric code, name and default scale.
///
/// Two currencies are the same currency iff their codes match; the other
/// fields are descriptive.
#[derive(Clone, Copy)]
pub struct Currency {
    code: ArrayString<CODE_CAPACITY>,
    numeric_code: u16,
    name: ArrayString<NAME_CAPACITY>,
    default_scale: u32,
}

impl Currency {
    /// Create a currency after validating its fields.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the code is empty, too long or not
    /// uppercase ASCII alphanumeric, if the name is too long, or if the
    /// scale is above 28.
    pub fn new(code: &str, numeric_code: u16, name: &str, default_scale: u32) -> MoneyResult<Self> {
        if code.is_empty()
            || !code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(MoneyError::InvalidConfig(format!(
                "currency code {:?} must be uppercase ASCII alphanumeric",
                code
            )));
        }
        let code = ArrayString::from(code).map_err(|_| {
            MoneyError::InvalidConfig(format!(
                "currency code {:?} is longer than {} characters",
                code, CODE_CAPACITY
            ))
        })?;
        let name = ArrayString::from(name).map_err(|_| {
            MoneyError::InvalidConfig(format!(
                "currency name for {} is longer than {} bytes",
                code, NAME_CAPACITY
            ))
        })?;
        if default_scale > MAX_SCALE {
            return Err(MoneyError::InvalidConfig(format!(
                "default scale {} for {} exceeds {}",
                default_scale, code, MAX_SCALE
            )));
        }

        Ok(Self {
            code,
            numeric_code,
            name,
            default_scale,
        })
    }

    /// Resolve an ISO 4217 code through the built-in registry.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not an ISO currency.
    pub fn of(code: &str) -> MoneyResult<Self> {
        super::CurrencyRegistry::iso().resolve(code)
    }

    /// Code as a fixed-capacity registry key
    #[inline]
    pub(crate) fn key(&self) -> ArrayString<CODE_CAPACITY> {
        self.code
    }

    /// Currency code, e.g. "USD"
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// ISO numeric code (0 for custom currencies)
    #[inline]
    pub fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical number of minor-unit digits
    #[inline]
    pub fn default_scale(&self) -> u32 {
        self.default_scale
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({}, scale={})", self.code, self.default_scale)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
