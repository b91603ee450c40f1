//! WASM API for loading, exporting and validating labels
//!
//! One label is held in WASM memory at a time; JavaScript loads it once and
//! then asks for exports and validation reports.

use super::helpers::{deserialize, js_error, serialize, settings_from_js};
use crate::diagnostics::Diagnostics;
use crate::errors::LabelError;
use crate::label::{FullLabel, LabelSource};
use crate::settings::LabelSettings;
use crate::{wasm_info, wasm_log};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

// WASM-owned label storage
static STORE: Lazy<LabelStore> = Lazy::new(LabelStore::new);

/// Sizes of a freshly loaded label
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    pub lines: usize,
    pub phrases: usize,
    pub notes: usize,
    pub syllables: usize,
}

impl LoadSummary {
    fn of(label: &FullLabel) -> Self {
        let song = label.song();
        Self {
            lines: label.len(),
            phrases: song.len(),
            notes: song.all_notes().count(),
            syllables: song.all_syllables().count(),
        }
    }
}

/// The currently loaded label, if any
#[derive(Debug, Default)]
pub struct LabelStore {
    label: Mutex<Option<FullLabel>>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<FullLabel>>, String> {
        self.label
            .lock()
            .map_err(|e| format!("Failed to lock label store: {}", e))
    }

    /// Load from a source, replacing the stored label only on success
    pub fn load(&self, source: LabelSource, settings: &LabelSettings) -> Result<LoadSummary, String> {
        let label = FullLabel::load(source, settings).map_err(|e: LabelError| e.to_string())?;
        let summary = LoadSummary::of(&label);
        *self.lock()? = Some(label);
        Ok(summary)
    }

    /// Load from a JSON source as handed over by JavaScript
    ///
    /// A bare string would name a file, and the WASM build has no file
    /// system, so only lines, `{text}` and song trees are accepted here.
    pub fn load_json(&self, value: serde_json::Value, settings: &LabelSettings) -> Result<LoadSummary, String> {
        let source = LabelSource::try_from(value).map_err(|e| e.to_string())?;
        if let LabelSource::Path(path) = &source {
            let err = LabelError::InvalidArgument(format!(
                "file paths cannot be loaded from JavaScript ({}); pass the label text instead",
                path.display()
            ));
            return Err(err.to_string());
        }
        self.load(source, settings)
    }

    fn with_label<T>(&self, f: impl FnOnce(&FullLabel) -> T) -> Result<T, String> {
        let guard = self.lock()?;
        let label = guard.as_ref().ok_or_else(|| "No label loaded".to_string())?;
        Ok(f(label))
    }

    pub fn export(&self, settings: &LabelSettings) -> Result<String, String> {
        self.with_label(|label| label.to_label_string(settings.separator_style))
    }

    pub fn diagnose(&self) -> Result<Diagnostics, String> {
        self.with_label(FullLabel::diagnose)
    }

    pub fn song_json(&self) -> Result<String, String> {
        self.with_label(|label| serde_json::to_string_pretty(label.song()))?
            .map_err(|e| format!("Failed to serialize song: {}", e))
    }
}

/// Load label text and keep it in WASM memory
///
/// # Parameters
/// - `text`: label text, one phoneme per line
/// - `settings_js`: optional `LabelSettings` object
///
/// # Returns
/// `LoadSummary` with line, phrase, note and syllable counts
#[wasm_bindgen(js_name = loadLabel)]
pub fn load_label(text: &str, settings_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("loadLabel called: {} bytes", text.len());
    let settings = settings_from_js(settings_js)?;
    let summary = STORE
        .load(LabelSource::Text(text.to_string()), &settings)
        .map_err(js_error)?;
    wasm_log!("  loaded {} lines", summary.lines);
    serialize(&summary, "Failed to serialize load summary")
}

/// Load from an array of lines, `{text}` or a song tree object
///
/// Strings are rejected: there is no file system to read a path from.
#[wasm_bindgen(js_name = loadLabelSource)]
pub fn load_label_source(source_js: JsValue, settings_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("loadLabelSource called");
    let settings = settings_from_js(settings_js)?;
    let value: serde_json::Value = deserialize(source_js, "Invalid label source")?;
    let summary = STORE.load_json(value, &settings).map_err(js_error)?;
    serialize(&summary, "Failed to serialize load summary")
}

/// Render the loaded label as text
#[wasm_bindgen(js_name = exportLabel)]
pub fn export_label(settings_js: JsValue) -> Result<String, JsValue> {
    wasm_info!("exportLabel called");
    let settings = settings_from_js(settings_js)?;
    let text = STORE.export(&settings).map_err(js_error)?;
    wasm_log!("  exported {} bytes", text.len());
    Ok(text)
}

/// Structural diagnostics for the loaded label
#[wasm_bindgen(js_name = validateLabel)]
pub fn validate_label() -> Result<JsValue, JsValue> {
    wasm_info!("validateLabel called");
    let diagnostics = STORE.diagnose().map_err(js_error)?;
    wasm_log!("  {} diagnostic marks", diagnostics.len());
    serialize(&diagnostics, "Failed to serialize diagnostics")
}

/// The loaded song tree as pretty-printed JSON
#[wasm_bindgen(js_name = getSongJson)]
pub fn get_song_json() -> Result<String, JsValue> {
    STORE.song_json().map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Note, Phoneme, Phrase, Song, Syllable};
    use crate::settings::SeparatorStyle;

    fn one_phoneme_song() -> Song {
        let mut syllable = Syllable::new();
        syllable.push(Phoneme::new("a"));
        let mut note = Note::new();
        note.push(syllable);
        let mut phrase = Phrase::new();
        phrase.push(note);
        let mut song = Song::new();
        song.push(phrase);
        song.renumber();
        song
    }

    #[test]
    fn test_empty_store_reports_no_label() {
        let store = LabelStore::new();
        assert_eq!(store.export(&LabelSettings::default()).unwrap_err(), "No label loaded");
        assert!(store.diagnose().is_err());
    }

    #[test]
    fn test_load_then_export_and_validate() {
        let store = LabelStore::new();
        let summary = store
            .load(LabelSource::Song(one_phoneme_song()), &LabelSettings::default())
            .unwrap();
        assert_eq!(
            summary,
            LoadSummary { lines: 1, phrases: 1, notes: 1, syllables: 1 }
        );

        let settings = LabelSettings {
            separator_style: SeparatorStyle::Ascii,
            ..LabelSettings::default()
        };
        let text = store.export(&settings).unwrap();
        assert!(text.starts_with("0 0 xx@xx^xx-a+xx=xx_"), "{}", text);
        assert!(text.ends_with("/J:xx~xx@1"), "{}", text);
        assert!(store.diagnose().unwrap().is_empty());
        assert!(store.song_json().unwrap().contains("\"phrases\""));
    }

    #[test]
    fn test_json_sources_exclude_paths() {
        let store = LabelStore::new();
        let err = store
            .load_json(serde_json::json!("song.lab"), &LabelSettings::default())
            .unwrap_err();
        assert!(err.starts_with("invalid label source"), "{}", err);
        assert!(store.export(&LabelSettings::default()).is_err());

        let song = serde_json::to_value(one_phoneme_song()).unwrap();
        let summary = store.load_json(song, &LabelSettings::default()).unwrap();
        assert_eq!(summary.lines, 1);

        let err = store
            .load_json(serde_json::json!(7), &LabelSettings::default())
            .unwrap_err();
        assert!(err.starts_with("invalid label source"), "{}", err);
    }

    #[test]
    fn test_failed_load_keeps_previous_label() {
        let store = LabelStore::new();
        store
            .load(LabelSource::Song(one_phoneme_song()), &LabelSettings::default())
            .unwrap();
        let err = store
            .load(LabelSource::Text("0 1".to_string()), &LabelSettings::default())
            .unwrap_err();
        assert!(err.contains("line 1"), "{}", err);
        assert!(store.export(&LabelSettings::default()).is_ok());
    }
}
