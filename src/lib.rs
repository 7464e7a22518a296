//! # joerg
//!
//! A round-based card game engine for three to six players.
//!
//! Each round every player commits one card face down in Attack or Defense
//! orientation. Cards are revealed starting at the pole player and walking
//! the table in seating order; that same order drives every hook and breaks
//! every power tie. The best card of the winning orientation takes the round.
//! First player to the win target takes the game.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration
//! - `cards`: Card definitions, abilities, runtime cards, JSON library
//! - `zones`: Hands and the shared deck
//! - `round`: The round engine and its resolution order
//! - `game`: Setup, the round loop, cycling, commit strategies
//! - `error`: Error types for every layer

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod round;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Ability, Card, CardDefinition, CardId, CardLibrary, Hook};
pub use crate::core::{GameConfig, GameRng, Player, PlayerId, PlayerMap, PoleRotation};
pub use crate::error::{ConfigError, GameError, HandError, LibraryError, RoundError};
pub use crate::game::{
    CommitChoice, CommitStrategy, Game, GameBuilder, GameResult, HookFiring, RandomStrategy,
    RoundReport, ScriptedStrategy,
};
pub use crate::round::{Orientation, OrientationRule, Placement, RoundEngine};
pub use crate::zones::{Deck, Hand};
