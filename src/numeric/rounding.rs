// ============================================================================
// Rounding Modes
// Policies for fitting an exact result into a target scale
// ============================================================================

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding policy applied when an exact result does not fit the target scale.
///
/// Operations take an `Option<RoundingMode>`; `None` behaves like
/// [`RoundingMode::Unnecessary`] and fails instead of discarding digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Towards zero (truncation)
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    HalfUp,
    /// Nearest neighbour, ties towards zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Nearest neighbour, ties towards positive infinity
    HalfCeiling,
    /// Nearest neighbour, ties towards negative infinity
    HalfFloor,
    /// Exact results only; any discarded digit is an error
    Unnecessary,
}

impl RoundingMode {
    /// All modes, in declaration order.
    pub const ALL: [RoundingMode; 10] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfCeiling,
        RoundingMode::HalfFloor,
        RoundingMode::Unnecessary,
    ];

    /// Decide whether a truncated quotient must be bumped one unit away from zero.
    ///
    /// # Arguments
    /// - `positive`: sign of the exact (unrounded) result
    /// - `half`: how the discarded fraction compares to one half of a unit
    /// - `odd`: whether the truncated quotient is odd
    ///
    /// Only called when the discarded fraction is non-zero; returns `None`
    /// for [`RoundingMode::Unnecessary`].
    pub(crate) fn increments(self, positive: bool, half: Ordering, odd: bool) -> Option<bool> {
        let above_half = half == Ordering::Greater;
        let at_half = half == Ordering::Equal;

        let bump = match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => positive,
            RoundingMode::Floor => !positive,
            RoundingMode::HalfUp => above_half || at_half,
            RoundingMode::HalfDown => above_half,
            RoundingMode::HalfEven => above_half || (at_half && odd),
            RoundingMode::HalfCeiling => above_half || (at_half && positive),
            RoundingMode::HalfFloor => above_half || (at_half && !positive),
            RoundingMode::Unnecessary => return None,
        };
        Some(bump)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::HalfCeiling => "HALF_CEILING",
            RoundingMode::HalfFloor => "HALF_FLOOR",
            RoundingMode::Unnecessary => "UNNECESSARY",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_modes() {
        use Ordering::*;
        assert_eq!(RoundingMode::Up.increments(false, Less, false), Some(true));
        assert_eq!(RoundingMode::Down.increments(true, Greater, true), Some(false));
        assert_eq!(RoundingMode::Ceiling.increments(true, Less, false), Some(true));
        assert_eq!(RoundingMode::Ceiling.increments(false, Greater, false), Some(false));
        assert_eq!(RoundingMode::Floor.increments(false, Less, false), Some(true));
        assert_eq!(RoundingMode::Floor.increments(true, Greater, false), Some(false));
    }

    #[test]
    fn test_half_modes_on_tie() {
        let tie = Ordering::Equal;
        assert_eq!(RoundingMode::HalfUp.increments(true, tie, false), Some(true));
        assert_eq!(RoundingMode::HalfDown.increments(true, tie, false), Some(false));
        assert_eq!(RoundingMode::HalfEven.increments(true, tie, false), Some(false));
        assert_eq!(RoundingMode::HalfEven.increments(true, tie, true), Some(true));
        assert_eq!(RoundingMode::HalfCeiling.increments(false, tie, false), Some(false));
        assert_eq!(RoundingMode::HalfFloor.increments(false, tie, false), Some(true));
    }

    #[test]
    fn test_unnecessary_refuses() {
        for half in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            assert_eq!(RoundingMode::Unnecessary.increments(true, half, true), None);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RoundingMode::HalfEven.to_string(), "HALF_EVEN");
        assert_eq!(RoundingMode::Floor.to_string(), "FLOOR");
    }
}
