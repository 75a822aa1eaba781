// ============================================================================
// Decimal Amount
// Exact base-10 amount with a tracked scale, backed by rust_decimal
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::rounding::RoundingMode;
use super::MAX_SCALE;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Exact decimal amount: `mantissa × 10^(−scale)`.
///
/// The stored scale is observable (`1.50` keeps scale 2), but equality,
/// ordering and hashing are numeric, so `1.5 == 1.50`.
///
/// Unlike the raw `rust_decimal` operators, every operation here is exact:
/// a result that cannot be represented within the 96-bit mantissa and
/// 28-digit scale fails with [`MoneyError::Overflow`] instead of being
/// rounded behind the caller's back.
///
/// # Example
/// ```
/// use exact_money::numeric::{DecimalAmount, RoundingMode};
///
/// let x: DecimalAmount = "10.005".parse()?;
/// let y = x.rescale(2, Some(RoundingMode::HalfEven))?;
/// assert_eq!(y.to_string(), "10.00");
/// # Ok::<(), exact_money::numeric::MoneyError>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DecimalAmount(Decimal);

/// Compute 10^exp, failing once it leaves i128.
fn pow10(exp: u32) -> MoneyResult<i128> {
    10i128.checked_pow(exp).ok_or(MoneyError::Overflow)
}

/// Build a decimal at exactly `scale`.
fn exact(mantissa: i128, scale: u32) -> MoneyResult<Decimal> {
    if scale > MAX_SCALE {
        return Err(MoneyError::InvalidScale(scale));
    }
    Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| MoneyError::Overflow)
}

/// Build a decimal at `scale`, dropping trailing zeros only when the value
/// would not otherwise fit. The numeric value never changes.
fn fit(mut mantissa: i128, mut scale: u32) -> MoneyResult<Decimal> {
    loop {
        if scale <= MAX_SCALE {
            if let Ok(d) = Decimal::try_from_i128_with_scale(mantissa, scale) {
                return Ok(d);
            }
        }
        if scale == 0 || mantissa % 10 != 0 {
            return Err(MoneyError::Overflow);
        }
        mantissa /= 10;
        scale -= 1;
    }
}

/// Divide `num / den` and round the quotient to an integer mantissa at `scale`.
fn round_quotient(
    num: i128,
    den: i128,
    scale: u32,
    rounding: Option<RoundingMode>,
) -> MoneyResult<Decimal> {
    if den == 0 {
        return Err(MoneyError::DivisionByZero);
    }

    let quotient = num / den;
    let remainder = num % den;
    if remainder == 0 {
        return exact(quotient, scale);
    }

    let mode = rounding.unwrap_or(RoundingMode::Unnecessary);
    let positive = (num < 0) == (den < 0);
    let rem_abs = remainder.unsigned_abs();
    let den_abs = den.unsigned_abs();
    // 2·|r| vs |d| without overflowing
    let half = rem_abs.cmp(&(den_abs - rem_abs));
    let odd = quotient % 2 != 0;

    let bump = match mode.increments(positive, half, odd) {
        Some(bump) => bump,
        None => {
            tracing::trace!(scale, "inexact result with no rounding mode");
            return Err(MoneyError::RoundingNecessary);
        }
    };

    let rounded = match (bump, positive) {
        (false, _) => quotient,
        (true, true) => quotient + 1,
        (true, false) => quotient - 1,
    };
    let result = exact(rounded, scale)?;
    tracing::debug!(%mode, scale, %result, "rounded inexact result");
    Ok(result)
}

/// Parse a decimal literal of any length straight to `scale`.
///
/// Used when the literal is beyond what `Decimal` parses exactly (more than
/// 28 fractional digits or a 96-bit mantissa). Only the digits that survive
/// at `scale` are accumulated; the dropped tail collapses to its first digit
/// plus a sticky non-zero flag, which is all the rounding decision needs.
fn parse_at_scale(s: &str, scale: u32, rounding: Option<RoundingMode>) -> MoneyResult<Decimal> {
    let invalid = || MoneyError::InvalidAmount(s.to_string());

    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (coefficient, exponent) = match body.find(['e', 'E']) {
        Some(at) => {
            let exponent: i64 = body[at + 1..].parse().map_err(|_| invalid())?;
            (&body[..at], exponent)
        }
        None => (body, 0),
    };
    let (int_part, frac_part) = coefficient.split_once('.').unwrap_or((coefficient, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    let digits = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| if b.is_ascii_digit() { Ok(b - b'0') } else { Err(invalid()) })
        .collect::<MoneyResult<Vec<u8>>>()?;

    let accumulate = |digits: &[u8]| {
        digits.iter().try_fold(0i128, |acc, &d| {
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add(i128::from(d)))
                .ok_or(MoneyError::Overflow)
        })
    };
    let signed = |value: i128| if negative { -value } else { value };

    // value = digits × 10^(exponent − frac_len); at `scale` the mantissa is
    // digits × 10^shift
    let shift = i64::from(scale)
        .saturating_add(exponent)
        .saturating_sub(frac_part.len() as i64);
    if shift >= 0 {
        let shift = u32::try_from(shift).map_err(|_| MoneyError::Overflow)?;
        let mantissa = accumulate(&digits)?
            .checked_mul(pow10(shift)?)
            .ok_or(MoneyError::Overflow)?;
        return exact(signed(mantissa), scale);
    }

    let dropped = usize::try_from(shift.unsigned_abs()).map_err(|_| MoneyError::Overflow)?;
    let kept_len = digits.len().saturating_sub(dropped);
    let (kept, tail) = digits.split_at(kept_len);
    // leading zeros of the tail that lie above the first written digit
    let (first, rest) = if dropped > digits.len() {
        (0, tail)
    } else {
        (tail[0], &tail[1..])
    };
    let sticky = i128::from(rest.iter().any(|&d| d != 0));

    let num = accumulate(kept)?
        .checked_mul(100)
        .and_then(|n| n.checked_add(i128::from(first) * 10 + sticky))
        .ok_or(MoneyError::Overflow)?;
    round_quotient(signed(num), 100, scale, rounding)
}

impl DecimalAmount {
    /// Zero at scale 0
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One at scale 0
    pub const ONE: Self = Self(Decimal::ONE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a `rust_decimal::Decimal`, keeping its scale.
    #[inline]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from an integer at scale 0.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from an unscaled mantissa and a scale.
    ///
    /// # Errors
    /// Returns `InvalidScale` when `scale` is above 28.
    pub fn from_parts(mantissa: i64, scale: u32) -> MoneyResult<Self> {
        Self::from_mantissa(mantissa.into(), scale)
    }

    /// Create from a wide unscaled mantissa and a scale.
    ///
    /// # Errors
    /// Returns `Overflow` when the mantissa exceeds 96 bits, `InvalidScale`
    /// when `scale` is above 28.
    pub fn from_mantissa(mantissa: i128, scale: u32) -> MoneyResult<Self> {
        exact(mantissa, scale).map(Self)
    }

    /// Create from a float through its shortest round-trip representation,
    /// so `35.99_f64` becomes exactly `35.99` rather than the nearest binary
    /// fraction.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for NaN and infinities, `Overflow` when the
    /// value needs more digits than the engine holds.
    pub fn from_f64(value: f64) -> MoneyResult<Self> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidAmount(value.to_string()));
        }
        if value == 0.0 {
            return Ok(Self::ZERO);
        }
        Decimal::from_str_exact(&value.to_string())
            .map(Self)
            .map_err(|_| MoneyError::Overflow)
    }

    /// Parse `s` and bring it to `scale` under `rounding`.
    ///
    /// Unlike `parse` followed by [`rescale`](Self::rescale), literals with
    /// more digits than the engine holds are accepted as long as the result
    /// at `scale` fits: `"0.000000000000000000000000000000001"` floors to
    /// `0.00`.
    ///
    /// # Errors
    /// - `InvalidAmount` if `s` is not a decimal literal
    /// - `RoundingNecessary` if digits would be lost without a mode
    /// - `InvalidScale` / `Overflow` if the result does not fit
    pub fn parse_at(s: &str, scale: u32, rounding: Option<RoundingMode>) -> MoneyResult<Self> {
        if scale > MAX_SCALE {
            return Err(MoneyError::InvalidScale(scale));
        }
        match s.parse::<Self>() {
            Ok(amount) => amount.rescale(scale, rounding),
            Err(_) => parse_at_scale(s.trim(), scale, rounding).map(Self),
        }
    }

    /// Float counterpart of [`parse_at`](Self::parse_at), reading the
    /// float's shortest round-trip representation.
    ///
    /// # Errors
    /// Same as [`parse_at`](Self::parse_at); NaN and infinities are
    /// `InvalidAmount`.
    pub fn from_f64_at(
        value: f64,
        scale: u32,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidAmount(value.to_string()));
        }
        if value == 0.0 {
            return Self::ZERO.rescale(scale, None);
        }
        Self::parse_at(&value.to_string(), scale, rounding)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of digits after the decimal point.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Unscaled integer magnitude.
    #[inline]
    pub fn mantissa(&self) -> i128 {
        self.0.mantissa()
    }

    /// Underlying `rust_decimal` value.
    #[inline]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// Absolute value, scale unchanged.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    // ========================================================================
    // Scale Conversion
    // ========================================================================

    /// Convert to `scale`.
    ///
    /// Scaling up is always exact. Scaling down discards digits only under
    /// an explicit rounding mode; with `None` (or `Unnecessary`) any
    /// non-zero discarded digit is an error.
    ///
    /// # Errors
    /// - `RoundingNecessary` if digits would be lost without a mode
    /// - `InvalidScale` if `scale` is above 28
    /// - `Overflow` if the rescaled mantissa does not fit
    pub fn rescale(self, scale: u32, rounding: Option<RoundingMode>) -> MoneyResult<Self> {
        if scale > MAX_SCALE {
            return Err(MoneyError::InvalidScale(scale));
        }
        let current = self.scale();
        let mantissa = self.mantissa();
        match scale.cmp(&current) {
            Ordering::Equal => Ok(self),
            Ordering::Greater => {
                let widened = mantissa
                    .checked_mul(pow10(scale - current)?)
                    .ok_or(MoneyError::Overflow)?;
                exact(widened, scale).map(Self)
            }
            Ordering::Less => {
                round_quotient(mantissa, pow10(current - scale)?, scale, rounding).map(Self)
            }
        }
    }

    /// Bring both operands to their common (larger) scale.
    fn aligned(self, rhs: Self) -> MoneyResult<(i128, i128, u32)> {
        let scale = self.scale().max(rhs.scale());
        let lhs = self.rescale(scale, None)?;
        let rhs = rhs.rescale(scale, None)?;
        Ok((lhs.mantissa(), rhs.mantissa(), scale))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition; the result carries the larger of the two scales.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum is out of range.
    pub fn checked_add(self, rhs: Self) -> MoneyResult<Self> {
        let (a, b, scale) = self.aligned(rhs)?;
        let sum = a.checked_add(b).ok_or(MoneyError::Overflow)?;
        fit(sum, scale).map(Self)
    }

    /// Exact subtraction; the result carries the larger of the two scales.
    ///
    /// # Errors
    /// Returns `Overflow` if the difference is out of range.
    pub fn checked_sub(self, rhs: Self) -> MoneyResult<Self> {
        let (a, b, scale) = self.aligned(rhs)?;
        let diff = a.checked_sub(b).ok_or(MoneyError::Overflow)?;
        fit(diff, scale).map(Self)
    }

    /// Exact multiplication; the result scale is the sum of both scales
    /// (reduced only by trailing zeros if it would not fit otherwise).
    ///
    /// # Errors
    /// Returns `Overflow` if the exact product does not fit.
    pub fn checked_mul(self, rhs: Self) -> MoneyResult<Self> {
        let lhs = self.0.normalize();
        let rhs = rhs.0.normalize();
        let product = lhs
            .mantissa()
            .checked_mul(rhs.mantissa())
            .ok_or(MoneyError::Overflow)?;
        fit(product, lhs.scale() + rhs.scale()).map(Self)
    }

    /// Multiply and bring the exact product to `scale`.
    ///
    /// The product is rounded straight from its full-precision mantissa, so
    /// a product finer than 28 digits still rounds under a mode instead of
    /// overflowing.
    ///
    /// # Errors
    /// - `RoundingNecessary` if the product needs more digits than `scale`
    ///   and no mode was given
    /// - `InvalidScale` if `scale` is above 28
    /// - `Overflow` if the mantissa product leaves i128 or the result does
    ///   not fit
    pub fn multiply(
        self,
        rhs: Self,
        scale: u32,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        if scale > MAX_SCALE {
            return Err(MoneyError::InvalidScale(scale));
        }
        let lhs = self.0.normalize();
        let rhs = rhs.0.normalize();
        let product = lhs
            .mantissa()
            .checked_mul(rhs.mantissa())
            .ok_or(MoneyError::Overflow)?;
        let natural = lhs.scale() + rhs.scale();

        if natural <= scale {
            let widened = product
                .checked_mul(pow10(scale - natural)?)
                .ok_or(MoneyError::Overflow)?;
            return exact(widened, scale).map(Self);
        }
        round_quotient(product, pow10(natural - scale)?, scale, rounding).map(Self)
    }

    /// Divide and round the quotient to `scale`.
    ///
    /// The quotient is computed exactly; it is rounded only if it does not
    /// terminate at `scale`, and only under an explicit rounding mode.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is zero
    /// - `RoundingNecessary` if the quotient is inexact without a mode
    /// - `Overflow` if intermediate values leave the engine's range
    pub fn divide(
        self,
        divisor: Self,
        scale: u32,
        rounding: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        if scale > MAX_SCALE {
            return Err(MoneyError::InvalidScale(scale));
        }

        // q·10^scale = a·10^(scale + s_b − s_a) / b
        let exponent = scale as i64 + divisor.scale() as i64 - self.scale() as i64;
        let (num, den) = if exponent >= 0 {
            let num = self
                .mantissa()
                .checked_mul(pow10(exponent as u32)?)
                .ok_or(MoneyError::Overflow)?;
            (num, divisor.mantissa())
        } else {
            let den = divisor
                .mantissa()
                .checked_mul(pow10(exponent.unsigned_abs() as u32)?)
                .ok_or(MoneyError::Overflow)?;
            (self.mantissa(), den)
        };

        round_quotient(num, den, scale, rounding).map(Self)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Nearest `f64`, for display and interop only.
    ///
    /// # Errors
    /// Returns `Overflow` if the value has no `f64` representation.
    pub fn to_f64(&self) -> MoneyResult<f64> {
        self.0.to_f64().ok_or(MoneyError::Overflow)
    }

    /// Integer value.
    ///
    /// # Errors
    /// - `RoundingNecessary` if there is a non-zero fractional part
    /// - `Overflow` if the value is outside `i64`
    pub fn to_i64(&self) -> MoneyResult<i64> {
        if !self.0.fract().is_zero() {
            return Err(MoneyError::RoundingNecessary);
        }
        self.0.trunc().to_i64().ok_or(MoneyError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for DecimalAmount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<Decimal> for DecimalAmount {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<DecimalAmount> for Decimal {
    fn from(value: DecimalAmount) -> Self {
        value.0
    }
}

impl From<i64> for DecimalAmount {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl fmt::Debug for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalAmount({}, scale={})", self.0, self.scale())
    }
}

impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for DecimalAmount {
    type Err = MoneyError;

    /// Parse a decimal string exactly; the literal's digits after the point
    /// become the scale ("11.50" has scale 2).
    ///
    /// Scientific notation ("1.5e3") is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::InvalidAmount(s.to_string()));
        }
        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str_exact(s)
        };
        parsed
            .map(Self)
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> DecimalAmount {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_keeps_scale() {
        let x = amt("11.50");
        assert_eq!(x.scale(), 2);
        assert_eq!(x.mantissa(), 1150);
        assert_eq!(x.to_string(), "11.50");

        assert_eq!(amt("42").scale(), 0);
        assert_eq!(amt("1.5e2"), amt("150"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "not_a_number".parse::<DecimalAmount>(),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!("".parse::<DecimalAmount>(), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_from_f64_is_shortest_repr() {
        assert_eq!(DecimalAmount::from_f64(35.99).unwrap(), amt("35.99"));
        assert_eq!(DecimalAmount::from_f64(35.99).unwrap().scale(), 2);
        assert_eq!(DecimalAmount::from_f64(0.1).unwrap().to_string(), "0.1");
        assert_eq!(DecimalAmount::from_f64(-0.0).unwrap(), DecimalAmount::ZERO);
        assert!(matches!(
            DecimalAmount::from_f64(f64::NAN),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(DecimalAmount::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_numeric_equality_ignores_scale() {
        assert_eq!(amt("1.5"), amt("1.50"));
        assert_eq!(amt("1.5").cmp(&amt("1.500")), Ordering::Equal);
        assert!(amt("1.51") > amt("1.5"));
    }

    #[test]
    fn test_rescale_up_is_exact() {
        let x = amt("1.5").rescale(4, None).unwrap();
        assert_eq!(x.scale(), 4);
        assert_eq!(x.to_string(), "1.5000");
    }

    #[test]
    fn test_rescale_down_requires_mode() {
        assert_eq!(amt("1.234").rescale(2, None), Err(MoneyError::RoundingNecessary));
        assert_eq!(
            amt("1.234").rescale(2, Some(RoundingMode::Unnecessary)),
            Err(MoneyError::RoundingNecessary)
        );
        // trailing zeros drop without a mode
        assert_eq!(amt("1.230").rescale(2, None).unwrap().to_string(), "1.23");
    }

    #[test]
    fn test_rescale_modes() {
        let cases = [
            ("2.5", RoundingMode::Up, "3"),
            ("2.5", RoundingMode::Down, "2"),
            ("2.5", RoundingMode::HalfUp, "3"),
            ("2.5", RoundingMode::HalfDown, "2"),
            ("2.5", RoundingMode::HalfEven, "2"),
            ("3.5", RoundingMode::HalfEven, "4"),
            ("-2.5", RoundingMode::HalfUp, "-3"),
            ("-2.5", RoundingMode::HalfCeiling, "-2"),
            ("-2.5", RoundingMode::HalfFloor, "-3"),
            ("-2.1", RoundingMode::Ceiling, "-2"),
            ("-2.1", RoundingMode::Floor, "-3"),
            ("2.1", RoundingMode::Ceiling, "3"),
            ("2.9", RoundingMode::Floor, "2"),
            ("2.6", RoundingMode::HalfDown, "3"),
            ("-2.6", RoundingMode::Down, "-2"),
        ];
        for (input, mode, expected) in cases {
            let got = amt(input).rescale(0, Some(mode)).unwrap();
            assert_eq!(got.to_string(), expected, "{} {}", input, mode);
        }
    }

    #[test]
    fn test_rescale_invalid_scale() {
        assert_eq!(amt("1").rescale(29, None), Err(MoneyError::InvalidScale(29)));
    }

    #[test]
    fn test_add_sub_take_larger_scale() {
        let sum = amt("11.50").checked_add(amt("2.5")).unwrap();
        assert_eq!(sum.to_string(), "14.00");

        let diff = amt("36").checked_sub(amt("35.99")).unwrap();
        assert_eq!(diff.to_string(), "0.01");
        assert_eq!(diff, amt("0.01"));
    }

    #[test]
    fn test_mul_is_exact() {
        let p = amt("11.50").checked_mul(amt("2.2")).unwrap();
        assert_eq!(p, amt("25.3"));

        let big = amt("79228162514264337593543950335");
        assert_eq!(big.checked_mul(amt("2")), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_multiply_to_scale() {
        let p = amt("11.50").multiply(amt("2.2"), 2, None).unwrap();
        assert_eq!(p.to_string(), "25.30");

        assert_eq!(
            amt("10.01").multiply(amt("0.5"), 2, None),
            Err(MoneyError::RoundingNecessary)
        );
        let p = amt("10.01")
            .multiply(amt("0.5"), 2, Some(RoundingMode::HalfEven))
            .unwrap();
        assert_eq!(p.to_string(), "5.00");
    }

    #[test]
    fn test_multiply_rounds_products_finer_than_engine() {
        // 1.01 × 3e-28 is exactly 3.03e-28, one digit past the engine
        let tiny = amt("0.0000000000000000000000000003");
        assert_eq!(amt("1.01").checked_mul(tiny), Err(MoneyError::Overflow));

        let p = amt("1.01").multiply(tiny, 2, Some(RoundingMode::Floor)).unwrap();
        assert_eq!(p.to_string(), "0.00");
        let p = amt("1.01").multiply(tiny, 2, Some(RoundingMode::Ceiling)).unwrap();
        assert_eq!(p.to_string(), "0.01");
        let p = amt("1.01").multiply(tiny, 28, Some(RoundingMode::HalfUp)).unwrap();
        assert_eq!(p.to_string(), "0.0000000000000000000000000003");
        assert_eq!(
            amt("1.01").multiply(tiny, 2, None),
            Err(MoneyError::RoundingNecessary)
        );
    }

    #[test]
    fn test_parse_at_rounds_long_literals() {
        let long = "0.00000000000000000000000000000001";
        assert!(matches!(long.parse::<DecimalAmount>(), Err(MoneyError::InvalidAmount(_))));

        let x = DecimalAmount::parse_at(long, 2, Some(RoundingMode::Floor)).unwrap();
        assert_eq!(x.to_string(), "0.00");
        let x = DecimalAmount::parse_at(long, 2, Some(RoundingMode::Up)).unwrap();
        assert_eq!(x.to_string(), "0.01");
        let negative = "-0.000000000000000000000000000000015";
        let x = DecimalAmount::parse_at(negative, 2, Some(RoundingMode::Floor)).unwrap();
        assert_eq!(x.to_string(), "-0.01");
        assert_eq!(
            DecimalAmount::parse_at(long, 2, None),
            Err(MoneyError::RoundingNecessary)
        );

        // ties are decided on the whole tail
        let half_even = Some(RoundingMode::HalfEven);
        let tie = "1.005000000000000000000000000000000";
        let x = DecimalAmount::parse_at(tie, 2, half_even).unwrap();
        assert_eq!(x.to_string(), "1.00");
        let above = "1.005000000000000000000000000000001";
        let x = DecimalAmount::parse_at(above, 2, half_even).unwrap();
        assert_eq!(x.to_string(), "1.01");

        let x = DecimalAmount::parse_at("1.5e-40", 0, Some(RoundingMode::Ceiling)).unwrap();
        assert_eq!(x.to_string(), "1");
        assert!(matches!(
            DecimalAmount::parse_at("1.2.3", 2, Some(RoundingMode::Floor)),
            Err(MoneyError::InvalidAmount(_))
        ));
        assert!(matches!(
            DecimalAmount::parse_at("", 2, Some(RoundingMode::Floor)),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_at_long_exact_literals() {
        // trailing zeros past the engine limit drop without a mode
        let x = DecimalAmount::parse_at("2.500000000000000000000000000000000", 2, None).unwrap();
        assert_eq!(x.to_string(), "2.50");
        assert_eq!(
            DecimalAmount::parse_at("123456789012345678901234567890123456789", 0, None),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_from_f64_at() {
        let x = DecimalAmount::from_f64_at(1e-30, 2, Some(RoundingMode::Floor)).unwrap();
        assert_eq!(x.to_string(), "0.00");
        let x = DecimalAmount::from_f64_at(1.005, 2, Some(RoundingMode::HalfUp)).unwrap();
        assert_eq!(x.to_string(), "1.01");
        assert_eq!(
            DecimalAmount::from_f64_at(1e-30, 2, None),
            Err(MoneyError::RoundingNecessary)
        );
        assert_eq!(DecimalAmount::from_f64_at(-0.0, 2, None).unwrap().to_string(), "0.00");
        assert!(DecimalAmount::from_f64_at(f64::NAN, 2, Some(RoundingMode::Floor)).is_err());
    }

    #[test]
    fn test_divide_exact_and_rounded() {
        let q = amt("10.00").divide(amt("2.00"), 2, None).unwrap();
        assert_eq!(q.to_string(), "5.00");

        assert_eq!(
            amt("6146.68").divide(amt("20"), 2, None),
            Err(MoneyError::RoundingNecessary)
        );
        let q = amt("6146.68")
            .divide(amt("20"), 2, Some(RoundingMode::Floor))
            .unwrap();
        assert_eq!(q.to_string(), "307.33");

        let q = amt("-1").divide(amt("3"), 2, Some(RoundingMode::Floor)).unwrap();
        assert_eq!(q.to_string(), "-0.34");
        let q = amt("1").divide(amt("-3"), 2, Some(RoundingMode::HalfUp)).unwrap();
        assert_eq!(q.to_string(), "-0.33");
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            amt("1").divide(DecimalAmount::ZERO, 2, Some(RoundingMode::HalfUp)),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_tie_is_detected_exactly() {
        // 0.125 at scale 2 is an exact tie
        let q = amt("1").divide(amt("8"), 2, Some(RoundingMode::HalfEven)).unwrap();
        assert_eq!(q.to_string(), "0.12");
        let q = amt("1").divide(amt("8"), 2, Some(RoundingMode::HalfUp)).unwrap();
        assert_eq!(q.to_string(), "0.13");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(amt("11.50").to_f64().unwrap(), 11.5);
        assert_eq!(amt("26.00").to_i64().unwrap(), 26);
        assert_eq!(amt("26.01").to_i64(), Err(MoneyError::RoundingNecessary));
        assert_eq!(DecimalAmount::from_parts(1150, 2).unwrap(), amt("11.5"));
    }

    #[test]
    fn test_negation_and_abs() {
        let x = amt("-100.00");
        assert!(x.is_negative());
        assert_eq!(x.abs().to_string(), "100.00");
        assert_eq!((-x).to_string(), "100.00");
        assert!(!DecimalAmount::ZERO.is_negative());
        assert!(!DecimalAmount::ZERO.is_positive());
    }
}
