//! Field index table
//!
//! Zero-based indices into each entity's context array, named after the
//! 1-based field labels of the format (`e18` is `NOTE_POSITION == 17`).
//! Every typed accessor in `models` goes through these constants.

/// Length of a syllable context array (a1..a5 / b1..b5 / c1..c5)
pub const SYLLABLE_FIELDS: usize = 5;

/// Length of a note context array (e1..e60)
pub const NOTE_FIELDS: usize = 60;

/// Number of leading note fields shown for the previous/next note (d1..d9, f1..f9)
pub const NEIGHBOR_NOTE_FIELDS: usize = 9;

/// Length of a phrase context array (g/h/i 1..2)
pub const PHRASE_FIELDS: usize = 2;

/// Length of a song context array (j1..j3)
pub const SONG_FIELDS: usize = 3;

/// Number of fields in the phoneme block (p1..p16)
pub const PHONEME_FIELDS: usize = 16;

/// b1: number of phonemes in the syllable
pub const SYLLABLE_PHONEME_COUNT: usize = 0;

/// b2: 1-based position of the syllable in its note
pub const SYLLABLE_POSITION: usize = 1;

/// e18: 1-based position of the note in its phrase
pub const NOTE_POSITION: usize = 17;

/// h1: number of syllables in the phrase
pub const PHRASE_SYLLABLE_COUNT: usize = 0;

/// h2: number of phonemes in the phrase
pub const PHRASE_PHONEME_COUNT: usize = 1;

/// j3: number of phrases in the song
pub const SONG_PHRASE_COUNT: usize = 2;

/// Phoneme block layout: which phoneme slot and attribute each of p1..p16 maps to.
pub mod phoneme {
    /// p1: language-independent class of the current phoneme
    pub const LANGUAGE_INDEPENDENT_IDENTITY: usize = 0;
    /// p2..p6: identities of before-previous, previous, current, next, after-next
    pub const IDENTITIES: std::ops::Range<usize> = 1..6;
    /// p7..p11: flags of the same five phonemes
    pub const FLAGS: std::ops::Range<usize> = 6..11;
    /// p12: position in syllable, counted from the start
    pub const POSITION: usize = 11;
    /// p13: position in syllable, counted from the end
    pub const POSITION_BACKWARD: usize = 12;
    /// p14: distance from the previous vowel (consonants only)
    pub const DISTANCE_FROM_PREVIOUS_VOWEL: usize = 13;
    /// p15: distance to the next vowel (consonants only)
    pub const DISTANCE_TO_NEXT_VOWEL: usize = 14;
    /// p16: reserved
    pub const UNDEFINED: usize = 15;
}
