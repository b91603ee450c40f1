//! Index paths into a song tree
//!
//! Line records refer to tree entities by path rather than by pointer, so a
//! song can be edited and its line links recomputed without any shared
//! ownership between lines and tree.

use super::{Note, Phoneme, Phrase, Song, Syllable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a phrase in its song
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhraseId {
    pub phrase: usize,
}

/// Path to a note
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId {
    pub phrase: usize,
    pub note: usize,
}

/// Path to a syllable
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyllableId {
    pub phrase: usize,
    pub note: usize,
    pub syllable: usize,
}

/// Path to a phoneme
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhonemeId {
    pub phrase: usize,
    pub note: usize,
    pub syllable: usize,
    pub phoneme: usize,
}

impl NoteId {
    pub fn phrase_id(&self) -> PhraseId {
        PhraseId { phrase: self.phrase }
    }
}

impl SyllableId {
    pub fn note_id(&self) -> NoteId {
        NoteId {
            phrase: self.phrase,
            note: self.note,
        }
    }
}

impl PhonemeId {
    pub fn syllable_id(&self) -> SyllableId {
        SyllableId {
            phrase: self.phrase,
            note: self.note,
            syllable: self.syllable,
        }
    }
}

// Paths display 1-based, matching the positions written in label files.

impl fmt::Display for PhraseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phrase {}", self.phrase + 1)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} note {}", self.phrase_id(), self.note + 1)
    }
}

impl fmt::Display for SyllableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} syllable {}", self.note_id(), self.syllable + 1)
    }
}

impl fmt::Display for PhonemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} phoneme {}", self.syllable_id(), self.phoneme + 1)
    }
}

impl Song {
    pub fn phrase_at(&self, id: PhraseId) -> Option<&Phrase> {
        self.phrases.get(id.phrase)
    }

    pub fn note_at(&self, id: NoteId) -> Option<&Note> {
        self.phrase_at(id.phrase_id())?.notes.get(id.note)
    }

    pub fn syllable_at(&self, id: SyllableId) -> Option<&Syllable> {
        self.note_at(id.note_id())?.syllables.get(id.syllable)
    }

    pub fn phoneme_at(&self, id: PhonemeId) -> Option<&Phoneme> {
        self.syllable_at(id.syllable_id())?.phonemes.get(id.phoneme)
    }

    pub fn phrase_at_mut(&mut self, id: PhraseId) -> Option<&mut Phrase> {
        self.phrases.get_mut(id.phrase)
    }

    pub fn note_at_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.phrase_at_mut(id.phrase_id())?.notes.get_mut(id.note)
    }

    pub fn syllable_at_mut(&mut self, id: SyllableId) -> Option<&mut Syllable> {
        self.note_at_mut(id.note_id())?.syllables.get_mut(id.syllable)
    }

    pub fn phoneme_at_mut(&mut self, id: PhonemeId) -> Option<&mut Phoneme> {
        self.syllable_at_mut(id.syllable_id())?.phonemes.get_mut(id.phoneme)
    }
}
