//! Label lines bound to a song tree

use super::{LineContext, LineContextMut, Neighbor, PhonemeSlot};
use crate::models::{
    ContextFields, Note, NoteId, Phoneme, PhonemeId, Phrase, PhraseId, Song, Syllable, SyllableId,
};
use crate::settings::SeparatorStyle;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

// Stand-ins for neighbors past either end of the song.
static EMPTY_PHONEME: Lazy<Phoneme> = Lazy::new(Phoneme::default);
static EMPTY_SYLLABLE: Lazy<Syllable> = Lazy::new(Syllable::default);
static EMPTY_NOTE: Lazy<Note> = Lazy::new(Note::default);
static EMPTY_PHRASE: Lazy<Phrase> = Lazy::new(Phrase::default);

/// Where each slot of one label line lives in the song tree
///
/// `None` means the slot falls outside the song and reads as an empty entity.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineLinks {
    /// Before-previous, previous, current, next, after-next
    pub phonemes: [Option<PhonemeId>; 5],

    /// Previous, current, next
    pub syllables: [Option<SyllableId>; 3],

    /// Previous, current, next
    pub notes: [Option<NoteId>; 3],

    /// Previous, current, next
    pub phrases: [Option<PhraseId>; 3],
}

impl LineLinks {
    /// Path of the phoneme this line describes
    pub fn current(&self) -> Option<PhonemeId> {
        self.phonemes[PhonemeSlot::Current.index()]
    }
}

/// Read-only label line over a song tree
#[derive(Clone, Copy, Debug)]
pub struct LineView<'a> {
    song: &'a Song,
    links: &'a LineLinks,
}

impl<'a> LineView<'a> {
    pub fn new(song: &'a Song, links: &'a LineLinks) -> Self {
        Self { song, links }
    }

    pub fn links(&self) -> &'a LineLinks {
        self.links
    }
}

fn resolve_phoneme<'a>(song: &'a Song, links: &LineLinks, slot: PhonemeSlot) -> &'a Phoneme {
    links.phonemes[slot.index()]
        .and_then(|id| song.phoneme_at(id))
        .unwrap_or(&*EMPTY_PHONEME)
}

fn resolve_syllable<'a>(song: &'a Song, links: &LineLinks, slot: Neighbor) -> &'a Syllable {
    links.syllables[slot.index()]
        .and_then(|id| song.syllable_at(id))
        .unwrap_or(&*EMPTY_SYLLABLE)
}

fn resolve_note<'a>(song: &'a Song, links: &LineLinks, slot: Neighbor) -> &'a Note {
    links.notes[slot.index()]
        .and_then(|id| song.note_at(id))
        .unwrap_or(&*EMPTY_NOTE)
}

fn resolve_phrase<'a>(song: &'a Song, links: &LineLinks, slot: Neighbor) -> &'a Phrase {
    links.phrases[slot.index()]
        .and_then(|id| song.phrase_at(id))
        .unwrap_or(&*EMPTY_PHRASE)
}

impl LineContext for LineView<'_> {
    fn phoneme(&self, slot: PhonemeSlot) -> &Phoneme {
        resolve_phoneme(self.song, self.links, slot)
    }

    fn syllable(&self, slot: Neighbor) -> &Syllable {
        resolve_syllable(self.song, self.links, slot)
    }

    fn note(&self, slot: Neighbor) -> &Note {
        resolve_note(self.song, self.links, slot)
    }

    fn phrase(&self, slot: Neighbor) -> &Phrase {
        resolve_phrase(self.song, self.links, slot)
    }

    fn song_contexts(&self) -> &ContextFields {
        &self.song.contexts
    }
}

impl fmt::Display for LineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SeparatorStyle::default()))
    }
}

/// Mutable label line over a song tree
///
/// Setting a block writes into the tree entities the line links to, so the
/// change shows up in every other line that shares them.
#[derive(Debug)]
pub struct LineViewMut<'a> {
    song: &'a mut Song,
    links: &'a LineLinks,
}

impl<'a> LineViewMut<'a> {
    pub fn new(song: &'a mut Song, links: &'a LineLinks) -> Self {
        Self { song, links }
    }
}

impl LineContext for LineViewMut<'_> {
    fn phoneme(&self, slot: PhonemeSlot) -> &Phoneme {
        resolve_phoneme(self.song, self.links, slot)
    }

    fn syllable(&self, slot: Neighbor) -> &Syllable {
        resolve_syllable(self.song, self.links, slot)
    }

    fn note(&self, slot: Neighbor) -> &Note {
        resolve_note(self.song, self.links, slot)
    }

    fn phrase(&self, slot: Neighbor) -> &Phrase {
        resolve_phrase(self.song, self.links, slot)
    }

    fn song_contexts(&self) -> &ContextFields {
        &self.song.contexts
    }
}

impl LineContextMut for LineViewMut<'_> {
    fn phoneme_mut(&mut self, slot: PhonemeSlot) -> Option<&mut Phoneme> {
        let id = self.links.phonemes[slot.index()]?;
        self.song.phoneme_at_mut(id)
    }

    fn syllable_mut(&mut self, slot: Neighbor) -> Option<&mut Syllable> {
        let id = self.links.syllables[slot.index()]?;
        self.song.syllable_at_mut(id)
    }

    fn note_mut(&mut self, slot: Neighbor) -> Option<&mut Note> {
        let id = self.links.notes[slot.index()]?;
        self.song.note_at_mut(id)
    }

    fn phrase_mut(&mut self, slot: Neighbor) -> Option<&mut Phrase> {
        let id = self.links.phrases[slot.index()]?;
        self.song.phrase_at_mut(id)
    }

    fn song_contexts_mut(&mut self) -> &mut ContextFields {
        &mut self.song.contexts
    }
}
