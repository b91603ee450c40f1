//! Song tree reconstruction from label lines
//!
//! One left-to-right pass. Each line's current phoneme goes into the open
//! syllable; position markers decide when a new syllable, note or phrase is
//! opened first:
//!
//! - new syllable when the phoneme position (p12) is `1` or `xx`
//! - new note when a new syllable starts and its position (b2) is `1` or `xx`
//! - new phrase when a new note starts and its position (e18) is `1` or `xx`
//!
//! Boundaries cascade downwards only: every line of the first note of a
//! phrase records e18 = 1, so e18 alone cannot mark the phrase start. Rests
//! carry `xx` at every level and become a phrase of their own. A level with
//! nothing open yet (start of input) opens a container regardless of markers.

use crate::label::LabelLine;
use crate::models::Song;

/// `None` (`xx`) or `Some(1)`: the marker of a first element
fn starts_group(position: Option<usize>) -> bool {
    matches!(position, None | Some(1))
}

/// Push a new element when asked to (or when there is none) and return the last one
fn open_last<T>(items: &mut Vec<T>, open: bool, make: impl FnOnce() -> T) -> &mut T {
    if open || items.is_empty() {
        items.push(make());
    }
    let last = items.len() - 1;
    &mut items[last]
}

/// Rebuild the song tree from parsed lines
///
/// The song context comes from the first line's J block: a label file
/// describes exactly one song. An empty input yields an empty song.
pub fn build_song<I>(lines: I) -> Song
where
    I: IntoIterator<Item = LabelLine>,
{
    let mut song = Song::new();
    let mut line_count = 0usize;

    for line in lines {
        if line_count == 0 {
            song.contexts = line.song.clone();
        }
        line_count += 1;

        let (phoneme, mut syllable, mut note, mut phrase) = line.into_current();
        syllable.phonemes.clear();
        note.syllables.clear();
        phrase.notes.clear();

        let new_syllable = starts_group(phoneme.position_number());
        let new_note = new_syllable && starts_group(syllable.position());
        let new_phrase = new_note && starts_group(note.position());

        if new_phrase {
            log::trace!("line {}: phrase {} opens", line_count, song.phrases.len() + 1);
        }
        let current_phrase = open_last(&mut song.phrases, new_phrase, || phrase);
        let current_note = open_last(&mut current_phrase.notes, new_note, || note);
        let current_syllable = open_last(&mut current_note.syllables, new_syllable, || syllable);
        current_syllable.push(phoneme);
    }

    log::debug!(
        "rebuilt song from {} lines: {} phrases, {} notes, {} syllables",
        line_count,
        song.phrases.len(),
        song.all_notes().count(),
        song.all_syllables().count()
    );
    song
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{LineContextMut, Neighbor, PhonemeSlot};

    /// Line with the given p12 / b2 / e18 markers
    fn line(identity: &str, phoneme_pos: &str, syllable_pos: &str, note_pos: &str) -> LabelLine {
        let mut line = LabelLine::new();
        if let Some(phoneme) = line.phoneme_mut(PhonemeSlot::Current) {
            phoneme.identity = identity.to_string();
            phoneme.position = phoneme_pos.to_string();
        }
        line.syllables[Neighbor::Current.index()].contexts.set(1, syllable_pos);
        line.notes[Neighbor::Current.index()].contexts.set(17, note_pos);
        line
    }

    #[test]
    fn test_first_note_with_two_phonemes_stays_one_phrase() {
        let song = build_song(vec![
            line("k", "1", "1", "1"),
            line("a", "2", "1", "1"),
            line("s", "1", "1", "2"),
            line("a", "2", "1", "2"),
        ]);
        assert_eq!(song.phrases.len(), 1);
        assert_eq!(song.phrases[0].notes.len(), 2);
        assert_eq!(song.phrases[0].notes[0].syllables[0].len(), 2);
        assert_eq!(song.phrases[0].notes[1].syllables[0].phonemes[0].identity, "s");
    }

    #[test]
    fn test_rests_become_their_own_phrase() {
        let song = build_song(vec![
            line("pau", "xx", "xx", "xx"),
            line("a", "1", "1", "1"),
            line("i", "1", "1", "2"),
            line("pau", "xx", "xx", "xx"),
        ]);
        assert_eq!(song.phrases.len(), 3);
        assert_eq!(song.phrases[1].notes.len(), 2);
        assert_eq!(song.phrases[2].notes[0].syllables[0].phonemes[0].identity, "pau");
    }

    #[test]
    fn test_second_syllable_of_a_note() {
        let song = build_song(vec![
            line("a", "1", "1", "1"),
            line("i", "1", "2", "1"),
        ]);
        assert_eq!(song.phrases.len(), 1);
        assert_eq!(song.phrases[0].notes.len(), 1);
        assert_eq!(song.phrases[0].notes[0].syllables.len(), 2);
    }

    #[test]
    fn test_input_starting_mid_syllable_still_opens_containers() {
        let song = build_song(vec![line("a", "2", "2", "3")]);
        assert_eq!(song.phoneme_count(), 1);
        assert_eq!(song.phrases.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let song = build_song(Vec::new());
        assert!(song.is_empty());
    }
}
