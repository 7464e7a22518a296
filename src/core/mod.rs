//! Core types: players, RNG, configuration.
//!
//! These are the building blocks the round engine and the game loop share.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, PoleRotation, DEFAULT_PLAYERS, DEFAULT_WINS_NEEDED, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
