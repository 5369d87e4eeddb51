//! Deck state: generated section contents keyed by [`Section`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::section::Section;

/// A generated pitch deck.
///
/// Decks may be partial; document assembly skips missing sections.
/// Regeneration is a plain [`insert`](Deck::insert), replacing the value at
/// one key and leaving the others untouched. The deck is a caller-owned
/// value, not a server-side session. Serializes as a flat JSON object keyed
/// by section wire names, and iterates in canonical deck order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    sections: BTreeMap<Section, String>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store content for a section, returning the replaced value if any.
    pub fn insert(&mut self, section: Section, content: impl Into<String>) -> Option<String> {
        self.sections.insert(section, content.into())
    }

    /// Content for a section, if present.
    pub fn get(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    /// Remove a section's content, returning it if it was present.
    pub fn remove(&mut self, section: Section) -> Option<String> {
        self.sections.remove(&section)
    }

    /// True when the deck holds content for the section.
    pub fn contains(&self, section: Section) -> bool {
        self.sections.contains_key(&section)
    }

    /// Number of sections with content.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no section has content.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate `(section, content)` pairs in canonical deck order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        self.sections.iter().map(|(s, c)| (*s, c.as_str()))
    }
}

/// Outcome of a full-deck generation run.
///
/// The deck always carries all ten sections; the ones listed in `failed`
/// hold the failure placeholder rather than genuine content, so callers can
/// tell the two apart without string matching.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The generated deck, placeholders included.
    pub deck: Deck,
    /// Sections whose generation failed, in canonical order.
    pub failed: Vec<Section>,
}

impl GenerationReport {
    /// True when every section generated successfully.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
