//! Neighbor links for every label line of a song tree
//!
//! Each level (phrase, note, syllable, phoneme) is flattened song-wide and a
//! window slides over it: ±1 for phrases, notes and syllables, ±2 for
//! phonemes. Windows that reach past either end of the song get `None`,
//! which lines read as an empty entity. The result depends only on the tree
//! shape, so recomputing it is idempotent.

use crate::label::LineLinks;
use crate::models::{NoteId, PhonemeId, PhraseId, Song, SyllableId};

/// The `N` items centred on `center`, `None` outside the slice
fn window<T: Copy, const N: usize>(items: &[T], center: usize) -> [Option<T>; N] {
    let half = N / 2;
    std::array::from_fn(|k| {
        (center + k)
            .checked_sub(half)
            .and_then(|index| items.get(index).copied())
    })
}

/// Per-phoneme indices into the flattened level lists
struct PhonemeEntry {
    id: PhonemeId,
    syllable: usize,
    note: usize,
    phrase: usize,
}

/// One `LineLinks` per phoneme, in song order
pub fn fill_links(song: &Song) -> Vec<LineLinks> {
    let mut phrases = Vec::new();
    let mut notes = Vec::new();
    let mut syllables = Vec::new();
    let mut entries = Vec::new();

    for (phrase_index, phrase) in song.phrases.iter().enumerate() {
        phrases.push(PhraseId { phrase: phrase_index });
        for (note_index, note) in phrase.notes.iter().enumerate() {
            notes.push(NoteId {
                phrase: phrase_index,
                note: note_index,
            });
            for (syllable_index, syllable) in note.syllables.iter().enumerate() {
                syllables.push(SyllableId {
                    phrase: phrase_index,
                    note: note_index,
                    syllable: syllable_index,
                });
                for phoneme_index in 0..syllable.phonemes.len() {
                    entries.push(PhonemeEntry {
                        id: PhonemeId {
                            phrase: phrase_index,
                            note: note_index,
                            syllable: syllable_index,
                            phoneme: phoneme_index,
                        },
                        syllable: syllables.len() - 1,
                        note: notes.len() - 1,
                        phrase: phrases.len() - 1,
                    });
                }
            }
        }
    }

    let phonemes: Vec<PhonemeId> = entries.iter().map(|entry| entry.id).collect();
    let links: Vec<LineLinks> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| LineLinks {
            phonemes: window(&phonemes, index),
            syllables: window(&syllables, entry.syllable),
            notes: window(&notes, entry.note),
            phrases: window(&phrases, entry.phrase),
        })
        .collect();

    log::debug!("linked {} label lines", links.len());
    links
}
