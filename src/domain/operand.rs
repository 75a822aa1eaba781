// ============================================================================
// Operands
// Bare numbers and money accepted by Money constructors and operations
// ============================================================================

use super::money::Money;
use crate::numeric::{DecimalAmount, MoneyResult, RoundingMode};
use rust_decimal::Decimal;

/// A bare number: integer, float, decimal string or exact amount.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Int(i64),
    /// Read through its shortest round-trip representation
    Float(f64),
    /// Parsed exactly; the literal's fractional digits are its scale
    Text(String),
    Decimal(DecimalAmount),
}

impl Numeric {
    /// The exact amount this number denotes, at its natural scale.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for unparseable strings or non-finite floats.
    pub fn to_amount(&self) -> MoneyResult<DecimalAmount> {
        match self {
            Numeric::Int(value) => Ok(DecimalAmount::from_i64(*value)),
            Numeric::Float(value) => DecimalAmount::from_f64(*value),
            Numeric::Text(value) => value.parse(),
            Numeric::Decimal(value) => Ok(*value),
        }
    }

    /// The amount at `scale`, rounded under `rounding` when the number has
    /// more digits. Literals finer than the decimal engine holds are rounded
    /// from their full text rather than rejected.
    ///
    /// # Errors
    /// - `InvalidAmount` for unparseable strings or non-finite floats
    /// - `RoundingNecessary` if digits would be lost without a mode
    pub fn to_amount_at(
        &self,
        scale: u32,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<DecimalAmount> {
        match self {
            Numeric::Float(value) => DecimalAmount::from_f64_at(*value, scale, rounding),
            Numeric::Text(value) => DecimalAmount::parse_at(value, scale, rounding),
            Numeric::Int(_) | Numeric::Decimal(_) => self.to_amount()?.rescale(scale, rounding),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Numeric::Text(value)
    }
}

impl From<DecimalAmount> for Numeric {
    fn from(value: DecimalAmount) -> Self {
        Numeric::Decimal(value)
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Numeric::Decimal(value.into())
    }
}

/// Right-hand side of a binary Money operation: either money or a bare
/// number that the operation interprets in the receiver's currency.
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyOperand {
    Money(Money),
    Numeric(Numeric),
}

impl From<Money> for MoneyOperand {
    fn from(value: Money) -> Self {
        MoneyOperand::Money(value)
    }
}

impl From<&Money> for MoneyOperand {
    fn from(value: &Money) -> Self {
        MoneyOperand::Money(*value)
    }
}

impl From<Numeric> for MoneyOperand {
    fn from(value: Numeric) -> Self {
        MoneyOperand::Numeric(value)
    }
}

macro_rules! numeric_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MoneyOperand {
                fn from(value: $ty) -> Self {
                    MoneyOperand::Numeric(value.into())
                }
            }
        )*
    };
}

numeric_operand!(i64, i32, u32, f64, &str, String, DecimalAmount, Decimal);
