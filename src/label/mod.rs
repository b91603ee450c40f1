//! Label line records
//!
//! A label line shows one phoneme together with its neighborhood: five
//! phonemes, three syllables, three notes, three phrases and the song. The
//! [`LineContext`] trait maps that neighborhood onto the eleven field blocks
//! of the text format, and [`LineContextMut`] maps field blocks back onto it.
//!
//! Two record types implement the traits:
//!
//! - [`LabelLine`] owns its entities. The parser produces these; each one is
//!   self-contained and only its current slots carry real data.
//! - [`LineView`] / [`LineViewMut`] resolve [`LineLinks`] against a song
//!   tree, so every line of a [`FullLabel`] reads from (and writes to) the
//!   shared tree.

pub mod line;
pub mod view;
pub mod full;

pub use line::LabelLine;
pub use view::{LineLinks, LineView, LineViewMut};
pub use full::{FullLabel, LabelSource};

use crate::grammar::fields::{self, NOTE_FIELDS, PHRASE_FIELDS, SONG_FIELDS, SYLLABLE_FIELDS};
use crate::grammar::{join_block, Block};
use crate::models::{ContextFields, Note, Phoneme, Phrase, Syllable, UNDEFINED};
use crate::settings::SeparatorStyle;

/// The five phoneme positions of a line, in P-block order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhonemeSlot {
    BeforePrevious,
    Previous,
    Current,
    Next,
    AfterNext,
}

impl PhonemeSlot {
    pub const ALL: [PhonemeSlot; 5] = [
        PhonemeSlot::BeforePrevious,
        PhonemeSlot::Previous,
        PhonemeSlot::Current,
        PhonemeSlot::Next,
        PhonemeSlot::AfterNext,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Previous / current / next at the syllable, note and phrase levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    Previous,
    Current,
    Next,
}

impl Neighbor {
    pub const ALL: [Neighbor; 3] = [Neighbor::Previous, Neighbor::Current, Neighbor::Next];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Read access to a line's neighborhood and its field blocks
pub trait LineContext {
    fn phoneme(&self, slot: PhonemeSlot) -> &Phoneme;
    fn syllable(&self, slot: Neighbor) -> &Syllable;
    fn note(&self, slot: Neighbor) -> &Note;
    fn phrase(&self, slot: Neighbor) -> &Phrase;
    fn song_contexts(&self) -> &ContextFields;

    /// Start time of the current phoneme
    fn start(&self) -> i64 {
        self.phoneme(PhonemeSlot::Current).start
    }

    /// End time of the current phoneme
    fn end(&self) -> i64 {
        self.phoneme(PhonemeSlot::Current).end
    }

    /// p1..p16, drawn from all five phoneme slots
    fn p(&self) -> Vec<String> {
        let current = self.phoneme(PhonemeSlot::Current);
        let mut p = vec![UNDEFINED.to_string(); fields::PHONEME_FIELDS];
        p[fields::phoneme::LANGUAGE_INDEPENDENT_IDENTITY] =
            current.language_independent_identity.clone();
        for (slot, (identity, flag)) in PhonemeSlot::ALL
            .iter()
            .zip(fields::phoneme::IDENTITIES.zip(fields::phoneme::FLAGS))
        {
            let phoneme = self.phoneme(*slot);
            p[identity] = phoneme.identity.clone();
            p[flag] = phoneme.flag.clone();
        }
        p[fields::phoneme::POSITION] = current.position.clone();
        p[fields::phoneme::POSITION_BACKWARD] = current.position_backward.clone();
        p[fields::phoneme::DISTANCE_FROM_PREVIOUS_VOWEL] =
            current.distance_from_previous_vowel.clone();
        p[fields::phoneme::DISTANCE_TO_NEXT_VOWEL] = current.distance_to_next_vowel.clone();
        p[fields::phoneme::UNDEFINED] = current.undefined_context.clone();
        p
    }

    fn a(&self) -> Vec<String> {
        self.syllable(Neighbor::Previous).contexts.prefix(SYLLABLE_FIELDS)
    }

    fn b(&self) -> Vec<String> {
        self.syllable(Neighbor::Current).contexts.prefix(SYLLABLE_FIELDS)
    }

    fn c(&self) -> Vec<String> {
        self.syllable(Neighbor::Next).contexts.prefix(SYLLABLE_FIELDS)
    }

    fn d(&self) -> Vec<String> {
        self.note(Neighbor::Previous).neighbor_fields()
    }

    fn e(&self) -> Vec<String> {
        self.note(Neighbor::Current).contexts.prefix(NOTE_FIELDS)
    }

    fn f(&self) -> Vec<String> {
        self.note(Neighbor::Next).neighbor_fields()
    }

    fn g(&self) -> Vec<String> {
        self.phrase(Neighbor::Previous).contexts.prefix(PHRASE_FIELDS)
    }

    fn h(&self) -> Vec<String> {
        self.phrase(Neighbor::Current).contexts.prefix(PHRASE_FIELDS)
    }

    fn i(&self) -> Vec<String> {
        self.phrase(Neighbor::Next).contexts.prefix(PHRASE_FIELDS)
    }

    fn j(&self) -> Vec<String> {
        self.song_contexts().prefix(SONG_FIELDS)
    }

    /// Fields of one block
    fn block(&self, block: Block) -> Vec<String> {
        match block {
            Block::P => self.p(),
            Block::A => self.a(),
            Block::B => self.b(),
            Block::C => self.c(),
            Block::D => self.d(),
            Block::E => self.e(),
            Block::F => self.f(),
            Block::G => self.g(),
            Block::H => self.h(),
            Block::I => self.i(),
            Block::J => self.j(),
        }
    }

    /// The full label line: `start end P/A:…/J:…`
    fn render(&self, style: SeparatorStyle) -> String {
        let mut out = format!("{} {} ", self.start(), self.end());
        for block in Block::ALL {
            out.push_str(&join_block(block, &self.block(block), style));
        }
        out
    }
}

/// Write access: field blocks are scattered back onto the neighborhood
///
/// Slots that do not resolve to an entity (past either end of a song) are
/// skipped.
pub trait LineContextMut: LineContext {
    fn phoneme_mut(&mut self, slot: PhonemeSlot) -> Option<&mut Phoneme>;
    fn syllable_mut(&mut self, slot: Neighbor) -> Option<&mut Syllable>;
    fn note_mut(&mut self, slot: Neighbor) -> Option<&mut Note>;
    fn phrase_mut(&mut self, slot: Neighbor) -> Option<&mut Phrase>;
    fn song_contexts_mut(&mut self) -> &mut ContextFields;

    fn set_start(&mut self, start: i64) {
        if let Some(phoneme) = self.phoneme_mut(PhonemeSlot::Current) {
            phoneme.start = start;
        }
    }

    fn set_end(&mut self, end: i64) {
        if let Some(phoneme) = self.phoneme_mut(PhonemeSlot::Current) {
            phoneme.end = end;
        }
    }

    fn set_p<S: AsRef<str>>(&mut self, p: &[S]) {
        let field = |i: usize| p.get(i).map_or(UNDEFINED, |s| s.as_ref()).to_string();
        for (slot, (identity, flag)) in PhonemeSlot::ALL
            .iter()
            .zip(fields::phoneme::IDENTITIES.zip(fields::phoneme::FLAGS))
        {
            if let Some(phoneme) = self.phoneme_mut(*slot) {
                phoneme.identity = field(identity);
                phoneme.flag = field(flag);
            }
        }
        if let Some(current) = self.phoneme_mut(PhonemeSlot::Current) {
            current.language_independent_identity =
                field(fields::phoneme::LANGUAGE_INDEPENDENT_IDENTITY);
            current.position = field(fields::phoneme::POSITION);
            current.position_backward = field(fields::phoneme::POSITION_BACKWARD);
            current.distance_from_previous_vowel =
                field(fields::phoneme::DISTANCE_FROM_PREVIOUS_VOWEL);
            current.distance_to_next_vowel = field(fields::phoneme::DISTANCE_TO_NEXT_VOWEL);
            current.undefined_context = field(fields::phoneme::UNDEFINED);
        }
    }

    fn set_syllable_fields<S: AsRef<str>>(&mut self, slot: Neighbor, fields: &[S]) {
        if let Some(syllable) = self.syllable_mut(slot) {
            syllable.contexts.assign(fields);
        }
    }

    fn set_note_fields<S: AsRef<str>>(&mut self, slot: Neighbor, fields: &[S]) {
        if let Some(note) = self.note_mut(slot) {
            note.contexts.assign(fields);
        }
    }

    fn set_phrase_fields<S: AsRef<str>>(&mut self, slot: Neighbor, fields: &[S]) {
        if let Some(phrase) = self.phrase_mut(slot) {
            phrase.contexts.assign(fields);
        }
    }

    fn set_j<S: AsRef<str>>(&mut self, j: &[S]) {
        self.song_contexts_mut().assign(j);
    }

    /// Write the fields of one block
    fn set_block<S: AsRef<str>>(&mut self, block: Block, fields: &[S]) {
        match block {
            Block::P => self.set_p(fields),
            Block::A => self.set_syllable_fields(Neighbor::Previous, fields),
            Block::B => self.set_syllable_fields(Neighbor::Current, fields),
            Block::C => self.set_syllable_fields(Neighbor::Next, fields),
            Block::D => self.set_note_fields(Neighbor::Previous, fields),
            Block::E => self.set_note_fields(Neighbor::Current, fields),
            Block::F => self.set_note_fields(Neighbor::Next, fields),
            Block::G => self.set_phrase_fields(Neighbor::Previous, fields),
            Block::H => self.set_phrase_fields(Neighbor::Current, fields),
            Block::I => self.set_phrase_fields(Neighbor::Next, fields),
            Block::J => self.set_j(fields),
        }
    }
}
