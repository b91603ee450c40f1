//! Phoneme: the leaf of the song hierarchy, one per label line

use super::context::{format_number, parse_number, UNDEFINED};
use serde::{Deserialize, Serialize};

/// A single phoneme with its own attributes from the P block
///
/// Unlike the other levels a phoneme keeps named attributes instead of an
/// indexed array: the P block interleaves identities and flags of five
/// neighboring phonemes, so only some of its columns belong to this one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Phoneme {
    /// Start time in ticks
    pub start: i64,

    /// End time in ticks
    pub end: i64,

    /// p1: language-independent class (e.g. "c", "v", "p")
    pub language_independent_identity: String,

    /// p4: phoneme symbol
    pub identity: String,

    /// p9: flag
    pub flag: String,

    /// p12: 1-based position in the syllable, from the start
    pub position: String,

    /// p13: 1-based position in the syllable, from the end
    pub position_backward: String,

    /// p14: distance from the previous vowel, consonants only
    pub distance_from_previous_vowel: String,

    /// p15: distance to the next vowel, consonants only
    pub distance_to_next_vowel: String,

    /// p16: reserved
    pub undefined_context: String,
}

impl Default for Phoneme {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            language_independent_identity: UNDEFINED.to_string(),
            identity: UNDEFINED.to_string(),
            flag: UNDEFINED.to_string(),
            position: UNDEFINED.to_string(),
            position_backward: UNDEFINED.to_string(),
            distance_from_previous_vowel: UNDEFINED.to_string(),
            distance_to_next_vowel: UNDEFINED.to_string(),
            undefined_context: UNDEFINED.to_string(),
        }
    }
}

impl Phoneme {
    /// Empty phoneme with the given symbol
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            ..Self::default()
        }
    }

    /// Whether this is the placeholder used past either end of a song
    pub fn is_undefined(&self) -> bool {
        self.identity == UNDEFINED
    }

    pub fn position_number(&self) -> Option<usize> {
        parse_number(&self.position)
    }

    pub fn set_position_number(&mut self, position: Option<usize>) {
        self.position = format_number(position);
    }

    pub fn position_backward_number(&self) -> Option<usize> {
        parse_number(&self.position_backward)
    }

    pub fn set_position_backward_number(&mut self, position: Option<usize>) {
        self.position_backward = format_number(position);
    }
}

impl std::fmt::Display for Phoneme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.start, self.end, self.identity)
    }
}
