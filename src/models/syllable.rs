//! Syllable: an ordered run of phonemes inside a note

use super::context::ContextFields;
use super::phoneme::Phoneme;
use crate::grammar::fields::{SYLLABLE_FIELDS, SYLLABLE_PHONEME_COUNT, SYLLABLE_POSITION};
use serde::{Deserialize, Serialize};

/// A syllable (A/B/C blocks)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Syllable {
    /// Phonemes in order
    pub phonemes: Vec<Phoneme>,

    /// a1..a5 / b1..b5 / c1..c5
    pub contexts: ContextFields,
}

impl Default for Syllable {
    fn default() -> Self {
        Self {
            phonemes: Vec::new(),
            contexts: ContextFields::undefined(SYLLABLE_FIELDS),
        }
    }
}

impl Syllable {
    pub fn new() -> Self {
        Self::default()
    }

    /// b1: recorded number of phonemes
    pub fn number_of_phonemes(&self) -> Option<usize> {
        self.contexts.number(SYLLABLE_PHONEME_COUNT)
    }

    pub fn set_number_of_phonemes(&mut self, count: Option<usize>) {
        self.contexts.set_number(SYLLABLE_PHONEME_COUNT, count);
    }

    /// b2: recorded 1-based position in the note
    pub fn position(&self) -> Option<usize> {
        self.contexts.number(SYLLABLE_POSITION)
    }

    pub fn set_position(&mut self, position: Option<usize>) {
        self.contexts.set_number(SYLLABLE_POSITION, position);
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    pub fn push(&mut self, phoneme: Phoneme) {
        self.phonemes.push(phoneme);
    }
}
