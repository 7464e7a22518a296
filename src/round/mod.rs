//! Round resolution: placements, ordering, and the winning card.
//!
//! ## Key Types
//!
//! - [`Orientation`]: Attack (higher power wins) or Defense (lower power wins)
//! - [`OrientationRule`]: Which orientation wins a round when both are played
//! - [`Placement`]: A committed `(player, card, orientation)` triple
//! - [`ResolvingCard`]: A placement plus its distance from the pole
//! - [`RoundEngine`]: Owns the round's placements and resolves them
//!
//! ## Ordering
//!
//! Everything in a round happens in one order: start at the pole, walk the
//! seating order once. Reveal hooks, before-power hooks, win/lose hooks and
//! power tie-breaks all use it, so a fixed set of placements always resolves
//! the same way regardless of commit order.

mod engine;
mod orientation;
mod placement;

pub use engine::RoundEngine;
pub use orientation::{Orientation, OrientationRule};
pub use placement::{Placement, ResolvingCard, ResolvingCardMut, RoundOutcome};
