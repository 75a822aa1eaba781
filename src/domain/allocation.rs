// ============================================================================
// Allocation
// Splitting money into parts without losing a minor unit
// ============================================================================

use super::money::Money;
use crate::numeric::{DecimalAmount, MoneyError, MoneyResult};

impl Money {
    /// Split into parts proportional to `ratios`, at the current scale.
    ///
    /// Each part gets its truncated share; the minor units left over go
    /// one at a time to the leading parts with a non-zero ratio, so the
    /// parts always sum to `self`.
    ///
    /// ```
    /// use exact_money::prelude::*;
    ///
    /// let parts = Money::usd(100, None, None)?.allocate(&[1, 1, 1])?;
    /// let amounts: Vec<String> = parts.iter().map(|p| p.amount().to_string()).collect();
    /// assert_eq!(amounts, ["33.34", "33.33", "33.33"]);
    /// # Ok::<(), MoneyError>(())
    /// ```
    ///
    /// # Errors
    /// - `InvalidAllocation` if `ratios` is empty or all zero
    /// - `Overflow` if a share does not fit the decimal engine
    pub fn allocate(&self, ratios: &[u32]) -> MoneyResult<Vec<Money>> {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidAllocation(
                "at least one ratio is required".to_string(),
            ));
        }
        let total: i128 = ratios.iter().map(|&r| i128::from(r)).sum();
        if total == 0 {
            return Err(MoneyError::InvalidAllocation(
                "ratios must not all be zero".to_string(),
            ));
        }

        let scale = self.scale();
        let minor = self.amount().mantissa();

        let mut shares = ratios
            .iter()
            .map(|&ratio| {
                minor
                    .checked_mul(i128::from(ratio))
                    .map(|weighted| weighted / total)
                    .ok_or(MoneyError::Overflow)
            })
            .collect::<MoneyResult<Vec<i128>>>()?;

        // truncation is toward zero, so the remainder has the sign of `minor`
        let mut remainder = minor - shares.iter().sum::<i128>();
        let unit = remainder.signum();
        for (share, &ratio) in shares.iter_mut().zip(ratios) {
            if remainder == 0 {
                break;
            }
            if ratio > 0 {
                *share += unit;
                remainder -= unit;
            }
        }

        shares
            .into_iter()
            .map(|share| {
                let amount = DecimalAmount::from_mantissa(share, scale)?;
                Money::of(amount, *self.currency(), Some(scale), None)
            })
            .collect()
    }

    /// Split into `parts` equal parts (see [`Money::allocate`]).
    ///
    /// # Errors
    /// Returns `InvalidAllocation` if `parts` is zero.
    pub fn split(&self, parts: usize) -> MoneyResult<Vec<Money>> {
        if parts == 0 {
            return Err(MoneyError::InvalidAllocation(
                "cannot split into zero parts".to_string(),
            ));
        }
        self.allocate(&vec![1; parts])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(parts: &[Money]) -> Vec<String> {
        parts.iter().map(|p| p.amount().to_string()).collect()
    }

    #[test]
    fn test_allocate_by_ratio() {
        let money = Money::usd(100, None, None).unwrap();
        let parts = money.allocate(&[70, 20, 10]).unwrap();
        assert_eq!(amounts(&parts), ["70.00", "20.00", "10.00"]);
    }

    #[test]
    fn test_allocate_distributes_remainder() {
        let money = Money::usd(0.05, None, None).unwrap();
        let parts = money.allocate(&[3, 7]).unwrap();
        // 1.5 and 3.5 cents, one leftover cent to the first part
        assert_eq!(amounts(&parts), ["0.02", "0.03"]);
        assert_eq!(Money::total(parts).unwrap(), money);
    }

    #[test]
    fn test_allocate_negative() {
        let money = Money::usd(-100, None, None).unwrap();
        let parts = money.allocate(&[1, 1, 1]).unwrap();
        assert_eq!(amounts(&parts), ["-33.34", "-33.33", "-33.33"]);
        assert_eq!(Money::total(parts).unwrap(), money);
    }

    #[test]
    fn test_allocate_skips_zero_ratio() {
        let money = Money::usd(1, None, None).unwrap();
        let parts = money.allocate(&[0, 1, 1, 1]).unwrap();
        assert_eq!(amounts(&parts), ["0.00", "0.34", "0.33", "0.33"]);
    }

    #[test]
    fn test_allocate_invalid() {
        let money = Money::usd(1, None, None).unwrap();
        assert!(matches!(
            money.allocate(&[]),
            Err(MoneyError::InvalidAllocation(_))
        ));
        assert!(matches!(
            money.allocate(&[0, 0]),
            Err(MoneyError::InvalidAllocation(_))
        ));
    }

    #[test]
    fn test_split() {
        let money = Money::jpy(1000, None, None).unwrap();
        let parts = money.split(3).unwrap();
        assert_eq!(amounts(&parts), ["334", "333", "333"]);
        assert!(parts.iter().all(|p| p.currency().code() == "JPY"));
        assert!(money.split(0).is_err());
    }

    #[test]
    fn test_allocate_keeps_non_default_scale() {
        let money = Money::create("10", "USD", Some(4), None).unwrap();
        let parts = money.split(3).unwrap();
        assert_eq!(amounts(&parts), ["3.3334", "3.3333", "3.3333"]);
    }

    // ========================================================================
    // Property-based testing
    // ========================================================================

    use proptest::prelude::*;

    fn money_strategy() -> impl Strategy<Value = Money> {
        (
            -1_000_000_000i64..1_000_000_000i64,
            prop_oneof![Just("USD"), Just("JPY"), Just("KWD")],
        )
            .prop_map(|(minor, code)| Money::of_minor(minor, code).unwrap())
    }

    proptest! {
        #[test]
        fn prop_allocate_sums_to_whole(
            money in money_strategy(),
            ratios in proptest::collection::vec(0u32..100, 1..8),
        ) {
            prop_assume!(ratios.iter().any(|&ratio| ratio > 0));
            let parts = money.allocate(&ratios).unwrap();

            prop_assert_eq!(parts.len(), ratios.len());
            prop_assert_eq!(Money::total(parts.iter().copied()).unwrap(), money);
            for (part, &ratio) in parts.iter().zip(&ratios) {
                prop_assert_eq!(part.scale(), money.scale());
                if ratio == 0 {
                    prop_assert!(part.is_zero());
                }
            }
        }

        #[test]
        fn prop_split_is_even(money in money_strategy(), count in 1usize..20) {
            let parts = money.split(count).unwrap();
            let minors: Vec<i64> = parts.iter().map(|p| p.minor_amount().unwrap()).collect();
            let max = minors.iter().copied().max().unwrap();
            let min = minors.iter().copied().min().unwrap();

            prop_assert_eq!(Money::total(parts).unwrap(), money);
            prop_assert!(max - min <= 1);
        }
    }
}
