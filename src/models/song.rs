//! Song: the root of the hierarchy, one per label file

use super::context::ContextFields;
use super::note::Note;
use super::phoneme::Phoneme;
use super::phrase::Phrase;
use super::syllable::Syllable;
use crate::errors::ValidationError;
use crate::grammar::fields::{SONG_FIELDS, SONG_PHRASE_COUNT};
use serde::{Deserialize, Serialize};

/// A song (J block)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Song {
    /// Phrases in order
    pub phrases: Vec<Phrase>,

    /// j1..j3
    pub contexts: ContextFields,
}

impl Default for Song {
    fn default() -> Self {
        Self {
            phrases: Vec::new(),
            contexts: ContextFields::undefined(SONG_FIELDS),
        }
    }
}

impl Song {
    pub fn new() -> Self {
        Self::default()
    }

    /// j3: recorded number of phrases
    pub fn number_of_phrases(&self) -> Option<usize> {
        self.contexts.number(SONG_PHRASE_COUNT)
    }

    pub fn set_number_of_phrases(&mut self, count: Option<usize>) {
        self.contexts.set_number(SONG_PHRASE_COUNT, count);
    }

    pub fn all_phrases(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }

    pub fn all_notes(&self) -> impl Iterator<Item = &Note> {
        self.phrases.iter().flat_map(|phrase| phrase.notes.iter())
    }

    pub fn all_syllables(&self) -> impl Iterator<Item = &Syllable> {
        self.all_notes().flat_map(|note| note.syllables.iter())
    }

    pub fn all_phonemes(&self) -> impl Iterator<Item = &Phoneme> {
        self.all_syllables().flat_map(|syllable| syllable.phonemes.iter())
    }

    pub fn phoneme_count(&self) -> usize {
        self.all_syllables().map(Syllable::len).sum()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn push(&mut self, phrase: Phrase) {
        self.phrases.push(phrase);
    }

    /// Rewrite every recorded position and count from the actual tree
    ///
    /// Fills p12/p13, b1/b2, e18, h1/h2 and j3. Used when a tree was built
    /// directly rather than parsed, before rendering it as label text.
    pub fn renumber(&mut self) {
        let phrase_count = self.phrases.len();
        self.set_number_of_phrases(Some(phrase_count));

        for phrase in &mut self.phrases {
            let syllable_count = phrase.syllables().count();
            let phoneme_count = phrase.phoneme_count();
            phrase.set_number_of_syllables(Some(syllable_count));
            phrase.set_number_of_phonemes(Some(phoneme_count));

            for (note_index, note) in phrase.notes.iter_mut().enumerate() {
                note.set_position(Some(note_index + 1));
                for (syllable_index, syllable) in note.syllables.iter_mut().enumerate() {
                    let length = syllable.len();
                    syllable.set_position(Some(syllable_index + 1));
                    syllable.set_number_of_phonemes(Some(length));
                    for (index, phoneme) in syllable.phonemes.iter_mut().enumerate() {
                        phoneme.set_position_number(Some(index + 1));
                        phoneme.set_position_backward_number(Some(length - index));
                    }
                }
            }
        }
    }

    /// Check recorded counts and positions against the tree
    pub fn check(&self) -> Result<(), ValidationError> {
        crate::diagnostics::check(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_phrase_song() -> Song {
        let mut song = Song::new();
        for phonemes_per_syllable in [[1usize, 2], [3, 1]] {
            let mut phrase = Phrase::new();
            let mut note = Note::new();
            for count in phonemes_per_syllable {
                let mut syllable = Syllable::new();
                for i in 0..count {
                    syllable.push(Phoneme::new(format!("ph{}", i)));
                }
                note.push(syllable);
            }
            phrase.push(note);
            song.push(phrase);
        }
        song
    }

    #[test]
    fn test_flattening_iterators() {
        let song = two_phrase_song();
        assert_eq!(song.all_phrases().count(), 2);
        assert_eq!(song.all_notes().count(), 2);
        assert_eq!(song.all_syllables().count(), 4);
        assert_eq!(song.all_phonemes().count(), 7);
        assert_eq!(song.phoneme_count(), 7);
    }

    #[test]
    fn test_renumber_makes_tree_consistent() {
        let mut song = two_phrase_song();
        assert_eq!(song.number_of_phrases(), None);
        song.renumber();
        assert_eq!(song.number_of_phrases(), Some(2));
        assert_eq!(song.phrases[1].number_of_syllables(), Some(2));
        assert_eq!(song.phrases[1].number_of_phonemes(), Some(4));
        let first = &song.phrases[1].notes[0].syllables[0];
        assert_eq!(first.number_of_phonemes(), Some(3));
        assert_eq!(first.phonemes[2].position_number(), Some(3));
        assert_eq!(first.phonemes[2].position_backward_number(), Some(1));
        assert!(song.check().is_ok());
    }
}
