//! Card orientations and the rule that picks a round's winning orientation.

use serde::{Deserialize, Serialize};

/// How a committed card is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Higher power is better.
    Attack,
    /// Lower power is better.
    Defense,
}

impl Orientation {
    /// Both orientations, attack first.
    pub const ALL: [Orientation; 2] = [Orientation::Attack, Orientation::Defense];

    /// Whether power `a` strictly beats power `b` under this orientation.
    ///
    /// Equal powers never beat each other; the pole distance decides those.
    ///
    /// ```
    /// use joerg::round::Orientation;
    ///
    /// assert!(Orientation::Attack.beats(5, 3));
    /// assert!(Orientation::Defense.beats(3, 5));
    /// assert!(!Orientation::Attack.beats(4, 4));
    /// ```
    #[must_use]
    pub fn beats(self, a: i64, b: i64) -> bool {
        match self {
            Orientation::Attack => a > b,
            Orientation::Defense => a < b,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Attack => f.write_str("Attack"),
            Orientation::Defense => f.write_str("Defense"),
        }
    }
}

/// Decides which orientation wins a round when both were committed.
///
/// Only cards of the winning orientation contend for the round; among them
/// the best power wins and ties go to the card closest to the pole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrientationRule {
    /// The orientation with more committed cards wins. On equal counts the
    /// pole card's orientation wins.
    #[default]
    Majority,
    /// The pole card's orientation always wins.
    PoleCard,
}

impl OrientationRule {
    /// Pick the winning orientation from the committed counts.
    #[must_use]
    pub fn decide(self, attackers: usize, defenders: usize, pole: Orientation) -> Orientation {
        match self {
            OrientationRule::Majority if attackers > defenders => Orientation::Attack,
            OrientationRule::Majority if defenders > attackers => Orientation::Defense,
            OrientationRule::Majority | OrientationRule::PoleCard => pole,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_is_strict() {
        for o in Orientation::ALL {
            assert!(!o.beats(3, 3));
        }
        assert!(Orientation::Attack.beats(6, 5));
        assert!(!Orientation::Attack.beats(5, 6));
        assert!(Orientation::Defense.beats(1, 2));
        assert!(!Orientation::Defense.beats(2, 1));
    }

    #[test]
    fn test_majority_rule() {
        let rule = OrientationRule::Majority;
        assert_eq!(rule.decide(3, 1, Orientation::Defense), Orientation::Attack);
        assert_eq!(rule.decide(1, 3, Orientation::Attack), Orientation::Defense);
        assert_eq!(rule.decide(2, 2, Orientation::Attack), Orientation::Attack);
        assert_eq!(rule.decide(2, 2, Orientation::Defense), Orientation::Defense);
        assert_eq!(rule.decide(4, 0, Orientation::Attack), Orientation::Attack);
    }

    #[test]
    fn test_pole_card_rule() {
        let rule = OrientationRule::PoleCard;
        assert_eq!(rule.decide(3, 1, Orientation::Defense), Orientation::Defense);
        assert_eq!(rule.decide(1, 3, Orientation::Attack), Orientation::Attack);
    }

    #[test]
    fn test_display() {
        assert_eq!(Orientation::Attack.to_string(), "Attack");
        assert_eq!(Orientation::Defense.to_string(), "Defense");
    }
}
