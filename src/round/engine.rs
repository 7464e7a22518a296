//! The round-resolution engine.
//!
//! Tracks the round's placements, one slot per seat, and derives everything
//! else (reveal order, winner, losers) from the seating order and the pole.
//!
//! ## Call pattern
//!
//! Each round is driven in exactly this order:
//!
//! 1. `begin_round`
//! 2. `set_pole`
//! 3. `commit_card` once per seated player
//! 4. `resolve_cards_mut` (reveal pass), `resolve_cards_mut` (before-power pass)
//! 5. `resolve_power`
//! 6. `resolve_cards_mut` (win/lose pass)
//! 7. `finish_round`
//!
//! Deviations are caller bugs and surface as `RoundError` immediately.

use std::cell::Cell;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::orientation::{Orientation, OrientationRule};
use super::placement::{Placement, ResolvingCard, ResolvingCardMut, RoundOutcome};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::RoundError;

/// Round state for one table.
///
/// ## Example
///
/// ```
/// use joerg::cards::{Card, CardDefinition, CardId};
/// use joerg::core::PlayerId;
/// use joerg::round::{Orientation, RoundEngine};
///
/// let mut engine = RoundEngine::new(3);
/// engine.begin_round();
/// engine.set_pole(PlayerId::new(1)).unwrap();
///
/// for (seat, power) in [(0u8, 2), (1, 4), (2, 4)] {
///     let player = PlayerId::new(seat);
///     let mut card = Card::new(CardId::new(seat as u32), CardDefinition::new("c", power));
///     card.owner = Some(player);
///     engine.commit_card(player, card, Orientation::Attack).unwrap();
/// }
///
/// // P1 and P2 tie on power; P1 is the pole.
/// let winner = engine.resolve_power().unwrap();
/// assert_eq!(winner.player(), PlayerId::new(1));
/// assert_eq!(winner.distance, 0);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine {
    /// Fixed circular seating order.
    seating: Vec<PlayerId>,
    /// Player -> seat index.
    seats: FxHashMap<PlayerId, usize>,
    /// One slot per seat, cleared at round start.
    slots: Vec<Option<Placement>>,
    /// Seat index of the pole.
    pole: Option<usize>,
    /// Winner of the current round, fixed by the first `resolve_power`.
    winner: Cell<Option<PlayerId>>,
    rule: OrientationRule,
}

impl RoundEngine {
    /// Seat `player_count` players in id order.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let seating: Vec<_> = PlayerId::all(player_count).collect();
        let seats = seating.iter().enumerate().map(|(i, &p)| (p, i)).collect();
        Self {
            slots: vec![None; player_count],
            seating,
            seats,
            pole: None,
            winner: Cell::new(None),
            rule: OrientationRule::default(),
        }
    }

    /// Seat players in an explicit circular order.
    pub fn with_seating(seating: Vec<PlayerId>) -> Result<Self, RoundError> {
        if seating.is_empty() {
            return Err(RoundError::EmptySeating);
        }

        let mut seats = FxHashMap::default();
        for (i, &player) in seating.iter().enumerate() {
            if seats.insert(player, i).is_some() {
                return Err(RoundError::DuplicateSeat(player));
            }
        }

        Ok(Self {
            slots: vec![None; seating.len()],
            seating,
            seats,
            pole: None,
            winner: Cell::new(None),
            rule: OrientationRule::default(),
        })
    }

    /// Set the cross-orientation rule (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: OrientationRule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub fn rule(&self) -> OrientationRule {
        self.rule
    }

    #[must_use]
    pub fn seating(&self) -> &[PlayerId] {
        &self.seating
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seating.len()
    }

    /// The current pole, if assigned.
    #[must_use]
    pub fn pole(&self) -> Option<PlayerId> {
        self.pole.map(|seat| self.seating[seat])
    }

    fn seat_of(&self, player: PlayerId) -> Result<usize, RoundError> {
        self.seats
            .get(&player)
            .copied()
            .ok_or(RoundError::UnknownPlayer(player))
    }

    /// Clear every placement for a fresh round.
    pub fn begin_round(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.winner.set(None);
    }

    /// Make `player` the starting point of this round's ordering.
    pub fn set_pole(&mut self, player: PlayerId) -> Result<(), RoundError> {
        self.pole = Some(self.seat_of(player)?);
        self.winner.set(None);
        Ok(())
    }

    /// Register `player`'s placement for the round.
    ///
    /// The card must already be detached from the player's hand and owned by
    /// them. A rejected commit leaves any earlier commit untouched.
    pub fn commit_card(
        &mut self,
        player: PlayerId,
        card: Card,
        orientation: Orientation,
    ) -> Result<(), RoundError> {
        let seat = self.seat_of(player)?;
        if self.slots[seat].is_some() {
            return Err(RoundError::AlreadyCommitted { player });
        }
        if card.owner != Some(player) {
            return Err(RoundError::CardNotOwned {
                player,
                card: card.id,
            });
        }

        log::debug!("{} commits {} as {}", player, card, orientation);
        self.slots[seat] = Some(Placement {
            player,
            card,
            orientation,
        });
        Ok(())
    }

    /// Number of placements committed so far.
    #[must_use]
    pub fn committed(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// A player's placement, if committed.
    #[must_use]
    pub fn placement(&self, player: PlayerId) -> Option<&Placement> {
        let seat = self.seats.get(&player)?;
        self.slots[*seat].as_ref()
    }

    /// Seat index of the pole, once every seat has committed.
    fn ready(&self) -> Result<usize, RoundError> {
        let committed = self.committed();
        if committed == 0 {
            return Err(RoundError::NoPlacements);
        }
        if committed < self.slots.len() {
            return Err(RoundError::IncompleteRound {
                committed,
                seated: self.slots.len(),
            });
        }
        self.pole.ok_or(RoundError::PoleNotSet)
    }

    /// Placements in reveal/resolution order.
    ///
    /// Starts at the pole and walks the seating order once. The iterator is
    /// lazy and can be cloned to restart it; every call in a round yields the
    /// same order.
    pub fn resolve_cards(
        &self,
    ) -> Result<impl Iterator<Item = ResolvingCard<'_>> + Clone + '_, RoundError> {
        let pole = self.ready()?;
        let (before, from_pole) = self.slots.split_at(pole);
        Ok(from_pole
            .iter()
            .chain(before)
            .flatten()
            .enumerate()
            .map(|(distance, placement)| ResolvingCard {
                placement,
                distance,
            }))
    }

    /// Same order as [`RoundEngine::resolve_cards`], with mutable access to
    /// the cards for hook passes.
    pub fn resolve_cards_mut(
        &mut self,
    ) -> Result<impl Iterator<Item = ResolvingCardMut<'_>> + '_, RoundError> {
        let pole = self.ready()?;
        let (before, from_pole) = self.slots.split_at_mut(pole);
        Ok(from_pole
            .iter_mut()
            .chain(before.iter_mut())
            .flatten()
            .enumerate()
            .map(|(distance, placement)| ResolvingCardMut {
                placement,
                distance,
            }))
    }

    /// The orientation that wins this round under the configured rule.
    pub fn winning_orientation(&self) -> Result<Orientation, RoundError> {
        let mut order = self.resolve_cards()?;
        let pole = order.next().ok_or(RoundError::NoPlacements)?;

        let (mut attackers, mut defenders) = (0, 0);
        for rc in std::iter::once(pole).chain(order) {
            match rc.orientation() {
                Orientation::Attack => attackers += 1,
                Orientation::Defense => defenders += 1,
            }
        }

        Ok(self.rule.decide(attackers, defenders, pole.orientation()))
    }

    /// The round's winning card.
    ///
    /// Among cards of the winning orientation, the best power wins
    /// (highest for attack, lowest for defense). Ties go to the card
    /// closest to the pole.
    ///
    /// The winner is decided by the first call in a round and stays fixed
    /// until `begin_round` or `set_pole`, so win/lose hooks that change
    /// power afterwards cannot move the win to another card.
    pub fn resolve_power(&self) -> Result<ResolvingCard<'_>, RoundError> {
        let winner = match self.winner.get() {
            Some(winner) => winner,
            None => {
                let winner = self.best_card()?.player();
                self.winner.set(Some(winner));
                winner
            }
        };

        self.resolve_cards()?
            .find(|rc| rc.player() == winner)
            .ok_or(RoundError::NoPlacements)
    }

    fn best_card(&self) -> Result<ResolvingCard<'_>, RoundError> {
        let orientation = self.winning_orientation()?;

        let mut best: Option<ResolvingCard<'_>> = None;
        for rc in self.resolve_cards()?.filter(|rc| rc.orientation() == orientation) {
            match best {
                Some(current) if !orientation.beats(rc.power(), current.power()) => {}
                _ => best = Some(rc),
            }
        }

        best.ok_or(RoundError::NoPlacements)
    }

    /// Every placement except the winner, in resolution order.
    pub fn losing_cards(
        &self,
    ) -> Result<impl Iterator<Item = ResolvingCard<'_>> + Clone + '_, RoundError> {
        let winner = self.resolve_power()?.player();
        Ok(self.resolve_cards()?.filter(move |rc| rc.player() != winner))
    }

    /// Drain the round into winning and losing placements.
    ///
    /// Leaves the engine with no placements.
    pub fn finish_round(&mut self) -> Result<RoundOutcome, RoundError> {
        let winner_player = self.resolve_power()?.player();
        self.winner.set(None);
        let pole = self.ready()?;
        let seats = self.slots.len();

        let mut winner = None;
        let mut losers = SmallVec::new();
        for distance in 0..seats {
            if let Some(placement) = self.slots[(pole + distance) % seats].take() {
                if placement.player == winner_player {
                    winner = Some(placement);
                } else {
                    losers.push(placement);
                }
            }
        }

        let winner = winner.ok_or(RoundError::NoPlacements)?;
        Ok(RoundOutcome { winner, losers })
    }

    /// The player seated after `player`, wrapping around the table.
    pub fn get_next_player(&self, player: PlayerId) -> Result<PlayerId, RoundError> {
        let seat = self.seat_of(player)?;
        Ok(self.seating[(seat + 1) % self.seating.len()])
    }

    /// Seats between the pole and `player`, walking in seating order.
    pub fn distance_from_pole(&self, player: PlayerId) -> Result<usize, RoundError> {
        let pole = self.pole.ok_or(RoundError::PoleNotSet)?;
        let seat = self.seat_of(player)?;
        let seats = self.seating.len();
        Ok((seat + seats - pole) % seats)
    }
}
