//! Note (or rest): an ordered run of syllables inside a phrase

use super::context::ContextFields;
use super::syllable::Syllable;
use crate::grammar::fields::{NEIGHBOR_NOTE_FIELDS, NOTE_FIELDS, NOTE_POSITION};
use serde::{Deserialize, Serialize};

/// A note or rest (D/E/F blocks)
///
/// The current note carries all 60 fields (E); the previous and next notes
/// show only their leading 9 (D and F).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    /// Syllables in order
    pub syllables: Vec<Syllable>,

    /// e1..e60
    pub contexts: ContextFields,
}

impl Default for Note {
    fn default() -> Self {
        Self {
            syllables: Vec::new(),
            contexts: ContextFields::undefined(NOTE_FIELDS),
        }
    }
}

impl Note {
    pub fn new() -> Self {
        Self::default()
    }

    /// e18: recorded 1-based position in the phrase
    pub fn position(&self) -> Option<usize> {
        self.contexts.number(NOTE_POSITION)
    }

    pub fn set_position(&mut self, position: Option<usize>) {
        self.contexts.set_number(NOTE_POSITION, position);
    }

    /// The fields shown when this note is a neighbor (d1..d9 / f1..f9)
    pub fn neighbor_fields(&self) -> Vec<String> {
        self.contexts.prefix(NEIGHBOR_NOTE_FIELDS)
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn push(&mut self, syllable: Syllable) {
        self.syllables.push(syllable);
    }
}
