// ============================================================================
// Interchange Record
// `{ "amount": number|string, "currency": string }` wire form of Money
// ============================================================================

use super::money::Money;
use super::operand::Numeric;
use super::registry::CurrencyRegistry;
use crate::numeric::{DecimalAmount, MoneyError, MoneyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Amount field of a [`MoneyRecord`]: a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RecordAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Serialized form of a Money value crossing a process or storage boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyRecord {
    pub amount: RecordAmount,
    pub currency: String,
}

impl Money {
    /// Encode as a record; the amount is written as a decimal string at the
    /// money's own scale ("11.50", not 11.5).
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord {
            amount: RecordAmount::Text(self.amount().to_string()),
            currency: self.currency().code().to_string(),
        }
    }

    /// Decode a record in an ISO currency.
    ///
    /// Numbers are read at the currency's default scale. Strings keep their
    /// literal scale when it is above the default, so money written at a
    /// finer scale comes back at that scale.
    ///
    /// # Errors
    /// Same as [`Money::create`]; a number with more digits than the
    /// default scale fails with `RoundingNecessary`.
    pub fn from_record(record: &MoneyRecord) -> MoneyResult<Money> {
        Self::from_record_in(record, CurrencyRegistry::iso())
    }

    /// Decode a record, resolving its currency through `registry`.
    ///
    /// # Errors
    /// Same as [`Money::from_record`]; `UnknownCurrency` if `registry` does
    /// not know the code.
    pub fn from_record_in(record: &MoneyRecord, registry: &CurrencyRegistry) -> MoneyResult<Money> {
        let currency = registry.resolve(&record.currency)?;
        match &record.amount {
            RecordAmount::Integer(value) => Money::of(*value, currency, None, None),
            RecordAmount::Float(value) => Money::of(*value, currency, None, None),
            RecordAmount::Text(value) => {
                let amount: DecimalAmount = value.parse()?;
                let scale = amount.scale().max(currency.default_scale());
                Money::of(Numeric::Decimal(amount), currency, Some(scale), None)
            }
        }
    }
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        money.to_record()
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Money::from_record(&record)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = MoneyRecord::deserialize(deserializer)?;
        Money::from_record(&record).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Money {
    /// Encode as a JSON interchange record.
    pub fn to_json(&self) -> MoneyResult<String> {
        serde_json::to_string(&self.to_record())
            .map_err(|e| MoneyError::InvalidRecord(e.to_string()))
    }

    /// Decode a JSON interchange record in an ISO currency.
    pub fn from_json(json: &str) -> MoneyResult<Money> {
        Self::from_json_in(json, CurrencyRegistry::iso())
    }

    /// Decode a JSON interchange record, resolving its currency through
    /// `registry`.
    pub fn from_json_in(json: &str, registry: &CurrencyRegistry) -> MoneyResult<Money> {
        let record: MoneyRecord =
            serde_json::from_str(json).map_err(|e| MoneyError::InvalidRecord(e.to_string()))?;
        Money::from_record_in(&record, registry)
    }
}
