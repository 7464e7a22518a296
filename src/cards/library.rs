//! Card library loading.
//!
//! A library file is a JSON object with a `cards` array:
//!
//! ```json
//! {
//!   "cards": [
//!     { "name": "Peasant", "power": 1 },
//!     { "name": "Knight", "power": 5, "ability": { "kind": "veteran", "amount": 1 } }
//!   ]
//! }
//! ```
//!
//! Names must be unique. Loading happens once, before any round is played.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::definition::{CardDefinition, CardId};
use super::instance::Card;
use crate::error::LibraryError;

#[derive(Deserialize)]
struct LibraryFile {
    #[serde(default)]
    cards: Option<Vec<CardDefinition>>,
}

/// Validated set of card definitions.
///
/// ## Example
///
/// ```
/// use joerg::cards::CardLibrary;
///
/// let library = CardLibrary::from_json(r#"{"cards": [
///     {"name": "Peasant", "power": 1},
///     {"name": "Knight", "power": 5}
/// ]}"#).unwrap();
///
/// let cards = library.instantiate();
/// assert_eq!(cards.len(), 2);
/// assert_eq!(cards[1].name(), "Knight");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    definitions: Vec<CardDefinition>,
}

impl CardLibrary {
    /// Build a library from definitions, rejecting empty input and name collisions.
    pub fn from_definitions(definitions: Vec<CardDefinition>) -> Result<Self, LibraryError> {
        if definitions.is_empty() {
            return Err(LibraryError::MissingCards);
        }

        let mut seen = FxHashSet::default();
        for def in &definitions {
            if !seen.insert(def.name.as_str()) {
                return Err(LibraryError::DuplicateName(def.name.clone()));
            }
        }

        Ok(Self { definitions })
    }

    /// Parse a library from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LibraryError> {
        let file: LibraryFile = serde_json::from_str(json)?;
        Self::from_definitions(file.cards.ok_or(LibraryError::MissingCards)?)
    }

    /// Read and parse a library file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let library = Self::from_json(&json)?;
        log::info!("loaded {} cards from {}", library.len(), path.display());
        Ok(library)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definition for a card id handed out by [`CardLibrary::instantiate`].
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.definitions.get(id.raw() as usize)
    }

    /// Iterate over all definitions in file order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.definitions.iter()
    }

    /// Create one card per definition. Card ids follow file order from 0.
    #[must_use]
    pub fn instantiate(&self) -> Vec<Card> {
        self.definitions
            .iter()
            .enumerate()
            .map(|(i, def)| Card::new(CardId::new(i as u32), def.clone()))
            .collect()
    }

    /// Check that no card identity appears twice in a supply.
    pub fn assert_unique<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<(), LibraryError> {
        let mut seen = FxHashSet::default();
        for card in cards {
            if !seen.insert(card.id) {
                return Err(LibraryError::DuplicateCard(card.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Ability;

    #[test]
    fn test_parse_library() {
        let library = CardLibrary::from_json(
            r#"{"cards": [
                {"name": "Peasant", "power": 1},
                {"name": "Knight", "power": 5, "ruling": "On Win: grows.", "ability": {"kind": "veteran", "amount": 1}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(library.len(), 2);
        let knight = library.get(CardId::new(1)).unwrap();
        assert_eq!(knight.name, "Knight");
        assert_eq!(knight.ability, Ability::Veteran { amount: 1 });
        assert_eq!(knight.ruling(), "On Win: grows.");
        assert!(library.get(CardId::new(2)).is_none());
    }

    #[test]
    fn test_missing_cards_field() {
        assert!(matches!(
            CardLibrary::from_json(r#"{"deck": []}"#),
            Err(LibraryError::MissingCards)
        ));
        assert!(matches!(
            CardLibrary::from_json(r#"{"cards": []}"#),
            Err(LibraryError::MissingCards)
        ));
    }

    #[test]
    fn test_name_collision() {
        let result = CardLibrary::from_json(
            r#"{"cards": [{"name": "Twin", "power": 1}, {"name": "Twin", "power": 2}]}"#,
        );
        match result {
            Err(LibraryError::DuplicateName(name)) => assert_eq!(name, "Twin"),
            other => panic!("expected duplicate name, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CardLibrary::from_json("{ not json"),
            Err(LibraryError::Json(_))
        ));
        assert!(matches!(
            CardLibrary::from_json(r#"{"cards": [{"name": "NoPower"}]}"#),
            Err(LibraryError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CardLibrary::from_path("/nonexistent/cards.json").unwrap_err();
        assert!(matches!(err, LibraryError::Io { .. }));
    }

    #[test]
    fn test_instantiate_assigns_unique_ids() {
        let library = CardLibrary::from_definitions(vec![
            CardDefinition::new("A", 1),
            CardDefinition::new("B", 2),
            CardDefinition::new("C", 3),
        ])
        .unwrap();

        let cards = library.instantiate();
        let ids: Vec<_> = cards.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(cards.iter().all(|c| c.owner.is_none()));
        assert!(CardLibrary::assert_unique(&cards).is_ok());
    }

    #[test]
    fn test_assert_unique_detects_duplicates() {
        let library = CardLibrary::from_definitions(vec![CardDefinition::new("A", 1)]).unwrap();
        let mut cards = library.instantiate();
        cards.push(cards[0].clone());

        assert!(matches!(
            CardLibrary::assert_unique(&cards),
            Err(LibraryError::DuplicateCard(id)) if id == CardId::new(0)
        ));
    }
}
