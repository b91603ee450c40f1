//! Self-contained label line, as produced by the parser

use super::{LineContext, LineContextMut, Neighbor, PhonemeSlot};
use crate::grammar::fields::SONG_FIELDS;
use crate::models::{ContextFields, Note, Phoneme, Phrase, Syllable};
use crate::settings::SeparatorStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One label line that owns its whole neighborhood
///
/// Fresh from the parser, only the current slots describe entities of this
/// line; the neighbor slots hold whatever identities and context fields the
/// text recorded for them, on otherwise default entities. None of the
/// entities have children.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LabelLine {
    /// Before-previous, previous, current, next, after-next
    pub phonemes: [Phoneme; 5],

    /// Previous, current, next
    pub syllables: [Syllable; 3],

    /// Previous, current, next
    pub notes: [Note; 3],

    /// Previous, current, next
    pub phrases: [Phrase; 3],

    /// j1..j3
    pub song: ContextFields,
}

impl Default for LabelLine {
    fn default() -> Self {
        Self {
            phonemes: Default::default(),
            syllables: Default::default(),
            notes: Default::default(),
            phrases: Default::default(),
            song: ContextFields::undefined(SONG_FIELDS),
        }
    }
}

impl LabelLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the current phoneme, syllable, note and phrase out of the line
    pub fn into_current(self) -> (Phoneme, Syllable, Note, Phrase) {
        let [_, _, phoneme, _, _] = self.phonemes;
        let [_, syllable, _] = self.syllables;
        let [_, note, _] = self.notes;
        let [_, phrase, _] = self.phrases;
        (phoneme, syllable, note, phrase)
    }
}

impl LineContext for LabelLine {
    fn phoneme(&self, slot: PhonemeSlot) -> &Phoneme {
        &self.phonemes[slot.index()]
    }

    fn syllable(&self, slot: Neighbor) -> &Syllable {
        &self.syllables[slot.index()]
    }

    fn note(&self, slot: Neighbor) -> &Note {
        &self.notes[slot.index()]
    }

    fn phrase(&self, slot: Neighbor) -> &Phrase {
        &self.phrases[slot.index()]
    }

    fn song_contexts(&self) -> &ContextFields {
        &self.song
    }
}

impl LineContextMut for LabelLine {
    fn phoneme_mut(&mut self, slot: PhonemeSlot) -> Option<&mut Phoneme> {
        self.phonemes.get_mut(slot.index())
    }

    fn syllable_mut(&mut self, slot: Neighbor) -> Option<&mut Syllable> {
        self.syllables.get_mut(slot.index())
    }

    fn note_mut(&mut self, slot: Neighbor) -> Option<&mut Note> {
        self.notes.get_mut(slot.index())
    }

    fn phrase_mut(&mut self, slot: Neighbor) -> Option<&mut Phrase> {
        self.phrases.get_mut(slot.index())
    }

    fn song_contexts_mut(&mut self) -> &mut ContextFields {
        &mut self.song
    }
}

impl fmt::Display for LabelLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SeparatorStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Block;

    #[test]
    fn test_p_fields_land_on_their_slots() {
        let mut line = LabelLine::new();
        let p: Vec<String> = (1..=16).map(|i| format!("p{}", i)).collect();
        line.set_p(&p);

        assert_eq!(line.phonemes[0].identity, "p2");
        assert_eq!(line.phonemes[0].flag, "p7");
        assert_eq!(line.phonemes[1].identity, "p3");
        assert_eq!(line.phonemes[2].identity, "p4");
        assert_eq!(line.phonemes[2].language_independent_identity, "p1");
        assert_eq!(line.phonemes[2].flag, "p9");
        assert_eq!(line.phonemes[2].position, "p12");
        assert_eq!(line.phonemes[2].undefined_context, "p16");
        assert_eq!(line.phonemes[4].identity, "p6");
        assert_eq!(line.phonemes[4].flag, "p11");
        // neighbors keep defaults for columns that are not theirs
        assert_eq!(line.phonemes[0].position, "xx");

        assert_eq!(line.p(), p);
    }

    #[test]
    fn test_neighbor_note_blocks_use_leading_fields() {
        let mut line = LabelLine::new();
        let d: Vec<String> = (1..=9).map(|i| format!("d{}", i)).collect();
        line.set_block(Block::D, &d);
        assert_eq!(line.notes[0].contexts.get(8), "d9");
        assert_eq!(line.notes[0].contexts.len(), 60);
        assert_eq!(line.d(), d);
    }

    #[test]
    fn test_default_line_renders_all_undefined() {
        let mut line = LabelLine::new();
        line.set_start(0);
        line.set_end(50000);
        let text = line.to_string();
        assert!(text.starts_with("0 50000 xx@xxˆxx-xx+xx=xx_xx%xxˆxx_xx∼xx-xx!xx[xx$xx]xx/A:xx-xx-xx@xx~xx"));
        assert!(text.ends_with("/G:xx_xx/H:xx_xx/I:xx_xx/J:xx~xx@xx"));
    }
}
