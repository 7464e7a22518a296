//! Error types.
//!
//! Every failure in this crate is a caller bug or bad input data. Nothing is
//! retried: errors propagate with `?` up to the game loop, which aborts the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::CardId;
use crate::core::PlayerId;

/// Misuse of the round-resolution protocol.
///
/// `AlreadyCommitted`, `CardNotOwned` and `UnknownPlayer` are the
/// invalid-commit family; `NoPlacements` is raised by resolving an empty round.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("{player} already committed a card this round")]
    AlreadyCommitted { player: PlayerId },
    #[error("{card} does not belong to {player}")]
    CardNotOwned { player: PlayerId, card: CardId },
    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),
    #[error("no cards have been committed this round")]
    NoPlacements,
    #[error("only {committed} of {seated} players have committed")]
    IncompleteRound { committed: usize, seated: usize },
    #[error("the pole has not been assigned this round")]
    PoleNotSet,
    #[error("seating order lists {0} more than once")]
    DuplicateSeat(PlayerId),
    #[error("seating order is empty")]
    EmptySeating,
}

impl RoundError {
    /// True for the errors `commit_card` raises.
    #[must_use]
    pub fn is_invalid_commit(&self) -> bool {
        matches!(
            self,
            RoundError::AlreadyCommitted { .. }
                | RoundError::CardNotOwned { .. }
                | RoundError::UnknownPlayer(_)
        )
    }
}

/// Hand manipulation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },
    #[error("{0} has no cards in hand")]
    EmptyHand(PlayerId),
}

/// Card library loading failures.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("unable to read 'cards' field from library")]
    MissingCards,
    #[error("name collision in library: two cards named {0:?}")]
    DuplicateName(String),
    #[error("{0} appears more than once in the card supply")]
    DuplicateCard(CardId),
    #[error("malformed library: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to open library {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("illegal number of players {count}, expected {min}..={max}")]
    PlayerCount { count: usize, min: usize, max: usize },
    #[error("illegal wins needed {wins_needed} for starting hand size {hand_size}")]
    WinsNeeded { wins_needed: u32, hand_size: usize },
    #[error("library of {library} cards cannot deal {hand_size} cards to {players} players")]
    LibraryTooSmall {
        library: usize,
        hand_size: usize,
        players: usize,
    },
}

/// Anything that aborts a game run.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("the deck is empty, no card to draw")]
    DeckExhausted,
    #[error("the game is already over")]
    GameOver,
}
