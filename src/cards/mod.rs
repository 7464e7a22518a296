//! Card system: definitions, abilities, instances, and the library loader.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of one card in the supply
//! - `CardDefinition`: Static card data (name, power, ruling, ability)
//! - `Ability` / `Hook`: The closed set of card behaviors and their triggers
//! - `Card`: Runtime card with owner and ability state
//! - `CardLibrary`: JSON library loading and uniqueness checks

pub mod ability;
pub mod definition;
pub mod instance;
pub mod library;

pub use ability::{Ability, Hook};
pub use definition::{CardDefinition, CardId};
pub use instance::{Card, LASTING_BONUS, ROUND_BONUS};
pub use library::CardLibrary;
