//! Placements and their resolution-time views.

use smallvec::SmallVec;

use super::orientation::Orientation;
use crate::cards::Card;
use crate::core::PlayerId;

/// One player's committed card for the current round.
#[derive(Clone, Debug)]
pub struct Placement {
    pub player: PlayerId,
    pub card: Card,
    pub orientation: Orientation,
}

/// A placement seen during resolution, with its distance from the pole.
///
/// The pole's own placement has distance 0; distance grows by one per seat
/// in seating order and never wraps.
#[derive(Clone, Copy, Debug)]
pub struct ResolvingCard<'a> {
    pub placement: &'a Placement,
    pub distance: usize,
}

impl<'a> ResolvingCard<'a> {
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.placement.player
    }

    #[must_use]
    pub fn card(&self) -> &'a Card {
        &self.placement.card
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.placement.orientation
    }

    #[must_use]
    pub fn power(&self) -> i64 {
        self.placement.card.power()
    }
}

impl std::fmt::Display for ResolvingCard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} as {} (distance {})",
            self.player(),
            self.card(),
            self.orientation(),
            self.distance
        )
    }
}

/// Mutable resolution view, used by the hook passes.
#[derive(Debug)]
pub struct ResolvingCardMut<'a> {
    pub placement: &'a mut Placement,
    pub distance: usize,
}

impl ResolvingCardMut<'_> {
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.placement.player
    }

    pub fn card_mut(&mut self) -> &mut Card {
        &mut self.placement.card
    }
}

/// What a resolved round hands back to the game loop.
///
/// Losers are in resolution order.
#[derive(Clone, Debug)]
pub struct RoundOutcome {
    pub winner: Placement,
    pub losers: SmallVec<[Placement; 6]>,
}
