//! The full game: setup, the round loop, and cycling.
//!
//! ## Key Types
//!
//! - [`GameBuilder`]: Validates a configuration and deals the opening hands
//! - [`Game`]: Owns players, the deck and the round engine, and plays rounds
//! - [`CommitStrategy`]: Decides which card each player commits
//! - [`RoundReport`]: What happened in one round, hook by hook
//!
//! ## Round Flow
//!
//! 1. Every player commits one card through the strategy
//! 2. Reveal and before-power hooks fire in resolution order
//! 3. The best card of the winning orientation wins and is spent
//! 4. Win/lose hooks fire, losing cards go back to their owners' hands
//! 5. The pole moves on
//! 6. A player reaching the cycle threshold makes everyone else cycle a card

mod game;
mod report;
mod strategy;

pub use game::{Game, GameBuilder};
pub use report::{GameResult, HookFiring, RoundReport};
pub use strategy::{CommitChoice, CommitStrategy, RandomStrategy, ScriptedStrategy};
