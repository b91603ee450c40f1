//! Song hierarchy models
//!
//! Song ⊃ Phrase ⊃ Note ⊃ Syllable ⊃ Phoneme. Each container owns its
//! children in order and carries the context array of its label block.

pub mod context;
pub mod phoneme;
pub mod syllable;
pub mod note;
pub mod phrase;
pub mod song;
pub mod path;

// Re-export commonly used types
pub use context::{format_number, parse_number, ContextFields, UNDEFINED};
pub use phoneme::Phoneme;
pub use syllable::Syllable;
pub use note::Note;
pub use phrase::Phrase;
pub use song::Song;
pub use path::{NoteId, PhonemeId, PhraseId, SyllableId};
