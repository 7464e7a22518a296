//! Card containers.
//!
//! ## Key Types
//!
//! - `Hand`: A player's ordered hand with index-addressed insertion
//! - `Deck`: The shared draw pile

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
