//! HTS full-context label WASM Module
//!
//! Parses singing-voice labels into a Song ⊃ Phrase ⊃ Note ⊃ Syllable ⊃
//! Phoneme tree, validates the tree against the counts and positions the
//! label recorded, and renders it back into label text.

pub mod errors;
pub mod settings;
pub mod grammar;
pub mod models;
pub mod label;
pub mod parse;
pub mod io;
pub mod structure;
pub mod diagnostics;
pub mod api;

// Re-export commonly used types
pub use errors::{LabelError, LabelResult, ValidationError};
pub use label::{FullLabel, LabelLine, LabelSource, LineContext, LineContextMut, Neighbor, PhonemeSlot};
pub use models::{Note, Phoneme, Phrase, Song, Syllable};
pub use settings::{LabelSettings, SeparatorStyle, TextEncoding, WriteMode};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A logger may already be installed by the host page
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).ok();

    log::info!("HTS label WASM module initialized");
}
