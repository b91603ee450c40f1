//! A whole label file: song tree plus one linked line per phoneme

use super::view::{LineLinks, LineView, LineViewMut};
use crate::diagnostics::{self, Diagnostics};
use crate::errors::{LabelError, LabelResult, ValidationError};
use crate::io;
use crate::models::Song;
use crate::parse;
use crate::settings::{LabelSettings, SeparatorStyle};
use crate::structure::{build_song, fill_links};
use crate::label::LabelLine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// What a label can be loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum LabelSource {
    /// A label file on disk
    Path(PathBuf),
    /// Label text already in memory
    Text(String),
    /// Label text split into lines
    Lines(Vec<String>),
    /// A song tree built elsewhere
    Song(Song),
}

impl From<PathBuf> for LabelSource {
    fn from(path: PathBuf) -> Self {
        LabelSource::Path(path)
    }
}

impl From<&Path> for LabelSource {
    fn from(path: &Path) -> Self {
        LabelSource::Path(path.to_path_buf())
    }
}

impl From<Vec<String>> for LabelSource {
    fn from(lines: Vec<String>) -> Self {
        LabelSource::Lines(lines)
    }
}

impl From<Song> for LabelSource {
    fn from(song: Song) -> Self {
        LabelSource::Song(song)
    }
}

/// JSON shapes accepted as a source
///
/// - string: a file path
/// - array of strings: label lines
/// - `{"text": "..."}`: label text
/// - `{"phrases": [...], "contexts": [...]}`: a serialized song tree
impl TryFrom<Value> for LabelSource {
    type Error = LabelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(path) => Ok(LabelSource::Path(PathBuf::from(path))),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(line) => Ok(line),
                    other => Err(LabelError::InvalidArgument(format!(
                        "label lines must be strings, got {}",
                        other
                    ))),
                })
                .collect::<LabelResult<Vec<_>>>()
                .map(LabelSource::Lines),
            Value::Object(map) => {
                if let Some(text) = map.get("text") {
                    return match text {
                        Value::String(text) => Ok(LabelSource::Text(text.clone())),
                        other => Err(LabelError::InvalidArgument(format!(
                            "label text must be a string, got {}",
                            other
                        ))),
                    };
                }
                if !map.contains_key("phrases") {
                    return Err(LabelError::InvalidArgument(
                        "object is neither {\"text\": ...} nor a song tree".to_string(),
                    ));
                }
                serde_json::from_value(Value::Object(map))
                    .map(LabelSource::Song)
                    .map_err(|e| LabelError::InvalidArgument(format!("not a song tree: {}", e)))
            }
            other => Err(LabelError::InvalidArgument(format!(
                "expected a path, label lines or a song tree, got {}",
                other
            ))),
        }
    }
}

/// A full-context label: the song tree and the links of each label line
///
/// Lines do not own data. Each one resolves its neighborhood from the tree,
/// so an edit made through one line is seen by every line sharing the
/// edited entity.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FullLabel {
    song: Song,
    links: Vec<LineLinks>,
}

impl FullLabel {
    /// Empty label (no lines)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from any source; every failure aborts the whole load
    pub fn load(source: impl Into<LabelSource>, settings: &LabelSettings) -> LabelResult<Self> {
        match source.into() {
            LabelSource::Path(path) => {
                let bytes = io::read_label_bytes(&path)?;
                Ok(Self::from_lines(parse::parse_bytes(&bytes, settings)?))
            }
            LabelSource::Text(text) => Ok(Self::from_lines(parse::parse_text(&text, settings)?)),
            LabelSource::Lines(lines) => Ok(Self::from_lines(parse::parse_lines(&lines, settings)?)),
            LabelSource::Song(song) => Ok(Self::from_song(song)),
        }
    }

    /// Rebuild the tree from parsed lines and link every line to it
    pub fn from_lines(lines: Vec<LabelLine>) -> Self {
        Self::from_song(build_song(lines))
    }

    /// Link every phoneme of an existing tree
    ///
    /// The tree must already carry its positions and counts (see
    /// [`Song::renumber`]); they are rendered as they are.
    pub fn from_song(song: Song) -> Self {
        let links = fill_links(&song);
        Self { song, links }
    }

    pub fn song(&self) -> &Song {
        &self.song
    }

    /// Mutable tree access; call [`FullLabel::refill`] after changing its shape
    pub fn song_mut(&mut self) -> &mut Song {
        &mut self.song
    }

    pub fn links(&self) -> &[LineLinks] {
        &self.links
    }

    /// Recompute line links from the current tree shape
    pub fn refill(&mut self) {
        self.links = fill_links(&self.song);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = LineView<'_>> + '_ {
        self.links.iter().map(move |links| LineView::new(&self.song, links))
    }

    pub fn line(&self, index: usize) -> Option<LineView<'_>> {
        self.links.get(index).map(|links| LineView::new(&self.song, links))
    }

    pub fn line_mut(&mut self, index: usize) -> Option<LineViewMut<'_>> {
        let links = self.links.get(index)?;
        Some(LineViewMut::new(&mut self.song, links))
    }

    pub fn check(&self) -> Result<(), ValidationError> {
        self.song.check()
    }

    pub fn diagnose(&self) -> Diagnostics {
        diagnostics::diagnose(&self.song)
    }

    pub fn to_label_string(&self, style: SeparatorStyle) -> String {
        let lines: Vec<LineView<'_>> = self.lines().collect();
        parse::serialize(&lines, style)
    }

    /// Render and write to `path` with the given settings; returns the text written
    pub fn write(&self, path: impl AsRef<Path>, settings: &LabelSettings) -> LabelResult<String> {
        let text = self.to_label_string(settings.separator_style);
        io::write_label_file(path, &text, settings.write_mode, settings.encoding)
    }
}

impl fmt::Display for FullLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label_string(SeparatorStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{LineContext, LineContextMut, Neighbor, PhonemeSlot};
    use crate::models::{Note, Phoneme, Phrase, Syllable};

    /// Two phrases: [[k a] [s a]] and [[t o]]
    fn sample_song() -> Song {
        let mut song = Song::new();
        for notes in [vec![vec!["k", "a"], vec!["s", "a"]], vec![vec!["t", "o"]]] {
            let mut phrase = Phrase::new();
            for phonemes in notes {
                let mut syllable = Syllable::new();
                for identity in phonemes {
                    syllable.push(Phoneme::new(identity));
                }
                let mut note = Note::new();
                note.push(syllable);
                phrase.push(note);
            }
            song.push(phrase);
        }
        song.renumber();
        song
    }

    #[test]
    fn test_text_round_trip_rebuilds_the_same_tree() {
        let label = FullLabel::from_song(sample_song());
        assert_eq!(label.len(), 6);
        let text = label.to_label_string(SeparatorStyle::Typographic);

        let reloaded = FullLabel::load(LabelSource::Text(text.clone()), &LabelSettings::default()).unwrap();
        assert_eq!(reloaded.song(), label.song());
        assert_eq!(reloaded.to_label_string(SeparatorStyle::Typographic), text);
        assert_eq!(reloaded.check(), Ok(()));
    }

    #[test]
    fn test_edge_neighbors_are_empty() {
        let label = FullLabel::from_song(sample_song());
        let first = label.line(0).unwrap();
        assert!(first.phoneme(PhonemeSlot::BeforePrevious).is_undefined());
        assert!(first.phoneme(PhonemeSlot::Previous).is_undefined());
        assert_eq!(first.g(), vec!["xx", "xx"]);

        let last = label.line(label.len() - 1).unwrap();
        assert_eq!(last.phoneme(PhonemeSlot::Current).identity, "o");
        assert!(last.phoneme(PhonemeSlot::AfterNext).is_undefined());
        assert_eq!(last.c(), vec!["xx"; 5]);
    }

    #[test]
    fn test_edit_through_one_line_is_seen_by_neighbors() {
        let mut label = FullLabel::from_song(sample_song());
        {
            let mut line = label.line_mut(0).unwrap();
            line.set_note_fields(Neighbor::Current, &["C5"]);
        }
        assert_eq!(label.line(1).unwrap().e()[0], "C5");
        // lines of the second note show the edited note as their previous one
        assert_eq!(label.line(2).unwrap().d()[0], "C5");
        assert_eq!(label.song().phrases[0].notes[0].contexts.get(0), "C5");
    }

    #[test]
    fn test_refill_after_shape_change() {
        let mut label = FullLabel::from_song(sample_song());
        label.song_mut().phrases.pop();
        label.refill();
        assert_eq!(label.len(), 4);
    }

    #[test]
    fn test_song_source_and_json_sources() {
        let song = sample_song();
        let json = serde_json::to_value(&song).unwrap();
        match LabelSource::try_from(json).unwrap() {
            LabelSource::Song(parsed) => assert_eq!(parsed, song),
            other => panic!("expected a song source, got {:?}", other),
        }

        let lines = serde_json::json!(["a", "b"]);
        assert_eq!(
            LabelSource::try_from(lines).unwrap(),
            LabelSource::Lines(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            LabelSource::try_from(serde_json::json!("song.lab")).unwrap(),
            LabelSource::Path(PathBuf::from("song.lab"))
        );
    }

    #[test]
    fn test_other_json_shapes_are_invalid_arguments() {
        for value in [
            serde_json::json!(42),
            serde_json::json!(null),
            serde_json::json!([1, 2]),
            serde_json::json!({"name": "x"}),
            serde_json::json!({"text": 3}),
        ] {
            assert!(matches!(
                LabelSource::try_from(value),
                Err(LabelError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_empty_text_loads_empty_label() {
        let label = FullLabel::load(LabelSource::Text(String::new()), &LabelSettings::default()).unwrap();
        assert!(label.is_empty());
        assert!(label.song().is_empty());
        assert_eq!(label.to_string(), "");
    }
}
