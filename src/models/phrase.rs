//! Phrase: an ordered run of notes inside a song

use super::context::ContextFields;
use super::note::Note;
use super::syllable::Syllable;
use crate::grammar::fields::{PHRASE_FIELDS, PHRASE_PHONEME_COUNT, PHRASE_SYLLABLE_COUNT};
use serde::{Deserialize, Serialize};

/// A phrase (G/H/I blocks)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Phrase {
    /// Notes in order
    pub notes: Vec<Note>,

    /// h1..h2
    pub contexts: ContextFields,
}

impl Default for Phrase {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            contexts: ContextFields::undefined(PHRASE_FIELDS),
        }
    }
}

impl Phrase {
    pub fn new() -> Self {
        Self::default()
    }

    /// h1: recorded number of syllables
    pub fn number_of_syllables(&self) -> Option<usize> {
        self.contexts.number(PHRASE_SYLLABLE_COUNT)
    }

    pub fn set_number_of_syllables(&mut self, count: Option<usize>) {
        self.contexts.set_number(PHRASE_SYLLABLE_COUNT, count);
    }

    /// h2: recorded number of phonemes
    pub fn number_of_phonemes(&self) -> Option<usize> {
        self.contexts.number(PHRASE_PHONEME_COUNT)
    }

    pub fn set_number_of_phonemes(&mut self, count: Option<usize>) {
        self.contexts.set_number(PHRASE_PHONEME_COUNT, count);
    }

    /// A rest phrase: no recorded counts and no note positions
    ///
    /// Silences and pauses carry `xx` throughout and do not count towards
    /// the song's recorded number of phrases.
    pub fn is_rest(&self) -> bool {
        self.number_of_syllables().is_none()
            && self.number_of_phonemes().is_none()
            && self.notes.iter().all(|note| note.position().is_none())
    }

    /// Every syllable of every note, in order
    pub fn syllables(&self) -> impl Iterator<Item = &Syllable> {
        self.notes.iter().flat_map(|note| note.syllables.iter())
    }

    /// Actual number of phonemes below this phrase
    pub fn phoneme_count(&self) -> usize {
        self.syllables().map(Syllable::len).sum()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }
}
