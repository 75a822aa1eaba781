// ============================================================================
// Money
// Immutable (amount, currency) pair with exact, currency-checked arithmetic
// ============================================================================

use super::currency::Currency;
use super::operand::{MoneyOperand, Numeric};
use crate::numeric::{DecimalAmount, MoneyError, MoneyResult, RoundingMode};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// An exact amount of a specific currency.
///
/// Money is immutable: every operation returns a new value. Amounts are
/// decimal, never binary floating point, and digits are only ever dropped
/// under an explicit [`RoundingMode`]; without one, an inexact result is a
/// [`MoneyError::RoundingNecessary`].
///
/// # Example
/// ```
/// use exact_money::prelude::*;
///
/// let total = Money::usd(36, None, None)?.minus(Money::usd(35.99, None, None)?)?;
/// assert_eq!(total.amount().to_string(), "0.01");
///
/// let share = Money::rub(6146.68, None, None)?.divide(20, Some(RoundingMode::Floor))?;
/// assert_eq!(share.amount().to_string(), "307.33");
/// # Ok::<(), MoneyError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Money {
    amount: DecimalAmount,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create money in an ISO currency.
    ///
    /// The scale is `scale` if given, else the currency's default scale. If
    /// `amount` has more fractional digits than that scale holds, `rounding`
    /// decides; with `None` the call fails rather than truncating.
    ///
    /// # Errors
    /// - `UnknownCurrency` if `currency` is not an ISO code
    /// - `RoundingNecessary` if `amount` does not fit the scale exactly and
    ///   no rounding mode was given
    /// - `InvalidAmount` / `InvalidScale` / `Overflow` for unusable input
    pub fn create(
        amount: impl Into<Numeric>,
        currency: &str,
        scale: Option<u32>,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        let currency = Currency::of(currency)?;
        Self::of(amount, currency, scale, rounding)
    }

    /// Same as [`Money::create`] for an already resolved currency, e.g. one
    /// taken from a custom [`CurrencyRegistry`](super::CurrencyRegistry).
    pub fn of(
        amount: impl Into<Numeric>,
        currency: Currency,
        scale: Option<u32>,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        let scale = scale.unwrap_or(currency.default_scale());
        let amount = amount.into().to_amount_at(scale, rounding)?;
        Ok(Self { amount, currency })
    }

    /// Parameterized per-currency factory; `Money::usd(x, scale, rounding)` and
    /// friends delegate here.
    pub fn for_currency(
        code: &str,
        amount: impl Into<Numeric>,
        scale: Option<u32>,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        Self::create(amount, code, scale, rounding)
    }

    /// Zero in `currency` at its default scale.
    pub fn zero(currency: &str) -> MoneyResult<Self> {
        Self::create(0, currency, None, None)
    }

    /// Create from a count of minor units at the default scale
    /// (1150 USD cents is 11.50 USD).
    pub fn of_minor(minor: i64, currency: &str) -> MoneyResult<Self> {
        let currency = Currency::of(currency)?;
        let amount = DecimalAmount::from_parts(minor, currency.default_scale())?;
        Ok(Self { amount, currency })
    }

    /// Sum of a non-empty sequence of same-currency values.
    ///
    /// # Errors
    /// - `InvalidAmount` if the sequence is empty
    /// - `CurrencyMismatch` if the currencies differ
    pub fn total<I>(values: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        let mut values = values.into_iter();
        let first = values
            .next()
            .ok_or_else(|| MoneyError::InvalidAmount("cannot total an empty sequence".to_string()))?;
        values.try_fold(first, |sum, value| sum.plus(value))
    }

    #[inline]
    fn with_amount(&self, amount: DecimalAmount) -> Self {
        Self {
            amount,
            currency: self.currency,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn amount(&self) -> &DecimalAmount {
        &self.amount
    }

    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Digits after the decimal point of the amount.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.amount.scale()
    }

    /// Amount as a count of minor units at the current scale.
    ///
    /// # Errors
    /// Returns `Overflow` if the count does not fit in `i64`.
    pub fn minor_amount(&self) -> MoneyResult<i64> {
        i64::try_from(self.amount.mantissa()).map_err(|_| MoneyError::Overflow)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    // ========================================================================
    // Operand Resolution
    // ========================================================================

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency != other.currency {
            return Err(MoneyError::mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }
        Ok(())
    }

    /// Money operands must share our currency; bare numbers become money
    /// in our currency at our scale, without rounding.
    fn resolve_money(&self, operand: MoneyOperand) -> MoneyResult<Money> {
        match operand {
            MoneyOperand::Money(other) => {
                self.ensure_same_currency(&other)?;
                Ok(other)
            }
            MoneyOperand::Numeric(number) => {
                Self::of(number, self.currency, Some(self.scale()), None)
            }
        }
    }

    /// Money operands must share our currency; bare numbers are taken as
    /// exact dimensionless scalars.
    fn resolve_scalar(&self, operand: MoneyOperand) -> MoneyResult<DecimalAmount> {
        match operand {
            MoneyOperand::Money(other) => {
                self.ensure_same_currency(&other)?;
                Ok(other.amount)
            }
            MoneyOperand::Numeric(number) => number.to_amount(),
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact sum; the result scale is the larger of the two scales.
    ///
    /// # Errors
    /// - `CurrencyMismatch` for money in another currency
    /// - `RoundingNecessary` for a bare number with more digits than our scale
    pub fn plus(&self, other: impl Into<MoneyOperand>) -> MoneyResult<Money> {
        let other = self.resolve_money(other.into())?;
        let scale = self.scale().max(other.scale());
        let amount = self.amount.checked_add(other.amount)?.rescale(scale, None)?;
        Ok(self.with_amount(amount))
    }

    /// Exact difference; the result scale is the larger of the two scales.
    ///
    /// # Errors
    /// Same as [`Money::plus`].
    pub fn minus(&self, other: impl Into<MoneyOperand>) -> MoneyResult<Money> {
        let other = self.resolve_money(other.into())?;
        let scale = self.scale().max(other.scale());
        let amount = self.amount.checked_sub(other.amount)?.rescale(scale, None)?;
        Ok(self.with_amount(amount))
    }

    /// Multiply by a scalar, or by money of the same currency (a scaling,
    /// not a dimensional product). The exact product is brought back to our
    /// scale under `rounding`.
    ///
    /// # Errors
    /// - `CurrencyMismatch` for money in another currency
    /// - `RoundingNecessary` if the product needs more digits than our scale
    ///   and no rounding mode was given
    pub fn multiply(
        &self,
        factor: impl Into<MoneyOperand>,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Money> {
        let factor = self.resolve_scalar(factor.into())?;
        let amount = self.amount.multiply(factor, self.scale(), rounding)?;
        Ok(self.with_amount(amount))
    }

    /// Divide by a scalar, or by money of the same currency. The quotient is
    /// computed exactly at our scale and rounded only under `rounding`.
    ///
    /// # Errors
    /// - `CurrencyMismatch` for money in another currency
    /// - `DivisionByZero` for a zero divisor
    /// - `RoundingNecessary` if the quotient does not terminate at our scale
    ///   and no rounding mode was given
    pub fn divide(
        &self,
        divisor: impl Into<MoneyOperand>,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Money> {
        let divisor = self.resolve_scalar(divisor.into())?;
        let amount = self.amount.divide(divisor, self.scale(), rounding)?;
        Ok(self.with_amount(amount))
    }

    /// Same amount converted to `scale`.
    ///
    /// # Errors
    /// `RoundingNecessary` if digits would be lost and no mode was given.
    pub fn to_scale(&self, scale: u32, rounding: Option<RoundingMode>) -> MoneyResult<Money> {
        let amount = self.amount.rescale(scale, rounding)?;
        Ok(self.with_amount(amount))
    }

    /// Magnitude, sign cleared
    pub fn abs(&self) -> Money {
        self.with_amount(self.amount.abs())
    }

    /// Sign flipped
    pub fn negate(&self) -> Money {
        self.with_amount(-self.amount)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Same currency code and numerically equal amounts, regardless of scale.
    pub fn equals(&self, other: &Money) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }

    /// Order two values of the same currency.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn compare_to(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.amount.hash(state);
    }
}

impl PartialOrd for Money {
    /// `None` across currencies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}

// ============================================================================
// Tests
// ============================================================================
