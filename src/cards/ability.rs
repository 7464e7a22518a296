//! Card abilities and the lifecycle hooks that trigger them.
//!
//! Abilities are a closed set: each variant is one card behavior, and
//! `Ability::apply` dispatches on `(variant, hook)` with a plain `match`.
//! Hook sequencing is owned by the game loop, which calls hooks in the
//! round's resolution order, so an ability only ever touches its own card.

use serde::{Deserialize, Serialize};

use super::instance::{Card, LASTING_BONUS, ROUND_BONUS};

/// Points in a card's lifecycle where an ability may trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hook {
    /// The card entered a player's hand (deal, returned loser, cycle draw).
    HandEnter,
    /// The card was revealed at the start of resolution.
    Reveal,
    /// Last pass before power is compared.
    BeforePower,
    /// The card won the round.
    Win,
    /// The card lost the round.
    Lose,
    /// The card was cycled out of its owner's hand.
    Cycle,
}

impl Hook {
    /// Label used in rulings and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Hook::HandEnter => "On Hand Enter",
            Hook::Reveal => "On Reveal",
            Hook::BeforePower => "Before Power",
            Hook::Win => "On Win",
            Hook::Lose => "On Lose",
            Hook::Cycle => "On Cycle",
        }
    }
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card's ability.
///
/// Library files tag the variant with `kind`:
///
/// ```
/// use joerg::cards::Ability;
///
/// let ability: Ability = serde_json::from_str(r#"{"kind": "rally", "amount": 2}"#).unwrap();
/// assert_eq!(ability, Ability::Rally { amount: 2 });
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ability {
    /// No ability.
    #[default]
    Vanilla,
    /// On reveal: +amount power for this round.
    Rally { amount: i64 },
    /// Before power: -amount power for this round.
    Wither { amount: i64 },
    /// On win: +amount power from now on.
    Veteran { amount: i64 },
    /// On lose: +amount power from now on.
    Grudge { amount: i64 },
    /// On cycle: +amount power from now on.
    Renewal { amount: i64 },
}

impl Ability {
    /// The hook this ability reacts to, if any.
    #[must_use]
    pub const fn trigger(self) -> Option<Hook> {
        match self {
            Ability::Vanilla => None,
            Ability::Rally { .. } => Some(Hook::Reveal),
            Ability::Wither { .. } => Some(Hook::BeforePower),
            Ability::Veteran { .. } => Some(Hook::Win),
            Ability::Grudge { .. } => Some(Hook::Lose),
            Ability::Renewal { .. } => Some(Hook::Cycle),
        }
    }

    /// Whether firing `hook` does anything for this ability.
    #[must_use]
    pub fn responds_to(self, hook: Hook) -> bool {
        self.trigger() == Some(hook)
    }

    /// Human-readable ruling, e.g. `On Win: +1 power.`
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Ability::Vanilla => String::new(),
            Ability::Rally { amount } => format!("On Reveal: +{amount} power this round."),
            Ability::Wither { amount } => format!("Before Power: -{amount} power this round."),
            Ability::Veteran { amount } => format!("On Win: +{amount} power."),
            Ability::Grudge { amount } => format!("On Lose: +{amount} power."),
            Ability::Renewal { amount } => format!("On Cycle: +{amount} power."),
        }
    }

    /// Apply this ability's effect for `hook` to `card`.
    ///
    /// Hooks the ability does not react to are no-ops.
    pub(crate) fn apply(self, hook: Hook, card: &mut Card) {
        match (self, hook) {
            (Ability::Rally { amount }, Hook::Reveal) => card.modify_state(ROUND_BONUS, amount),
            (Ability::Wither { amount }, Hook::BeforePower) => {
                card.modify_state(ROUND_BONUS, -amount)
            }
            (Ability::Veteran { amount }, Hook::Win)
            | (Ability::Grudge { amount }, Hook::Lose)
            | (Ability::Renewal { amount }, Hook::Cycle) => card.modify_state(LASTING_BONUS, amount),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_ability_has_one_trigger() {
        let abilities = [
            Ability::Rally { amount: 1 },
            Ability::Wither { amount: 1 },
            Ability::Veteran { amount: 1 },
            Ability::Grudge { amount: 1 },
            Ability::Renewal { amount: 1 },
        ];
        let hooks = [
            Hook::HandEnter,
            Hook::Reveal,
            Hook::BeforePower,
            Hook::Win,
            Hook::Lose,
            Hook::Cycle,
        ];

        for ability in abilities {
            let count = hooks.iter().filter(|&&h| ability.responds_to(h)).count();
            assert_eq!(count, 1, "{ability:?}");
        }
        assert!(hooks.iter().all(|&h| !Ability::Vanilla.responds_to(h)));
    }

    #[test]
    fn test_describe_names_the_hook() {
        let ability = Ability::Veteran { amount: 2 };
        assert_eq!(ability.describe(), "On Win: +2 power.");
        assert!(ability.describe().starts_with(Hook::Win.label()));
        assert_eq!(Ability::Vanilla.describe(), "");
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&Ability::Grudge { amount: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"grudge","amount":3}"#);

        let vanilla: Ability = serde_json::from_str(r#"{"kind":"vanilla"}"#).unwrap();
        assert_eq!(vanilla, Ability::Vanilla);

        assert!(serde_json::from_str::<Ability>(r#"{"kind":"teleport"}"#).is_err());
    }
}
