//! Structural validation of song trees
//!
//! Compares what the label recorded (counts in b1/h1/h2/j3, positions in
//! p12/b2/e18) with the tree actually built. j3 counts sung phrases only;
//! rest phrases are left out. [`check`] stops at the first
//! mismatch; [`diagnose`] reports all of them. Recorded `xx` means "not
//! applicable" and is never a mismatch. Nothing here mutates the tree.

use crate::errors::ValidationError;
use crate::models::{NoteId, PhonemeId, PhraseId, Song, SyllableId};
use serde::{Deserialize, Serialize};

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// One finding about one aggregate of the tree
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMark {
    /// Aggregate the finding is about (e.g. "phrase 2 note 1")
    pub path: String,
    pub severity: DiagnosticSeverity,
    /// Kind identifier ("count_mismatch", "position_mismatch", "empty_container")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    pub fn new(
        path: impl Into<String>,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl From<&ValidationError> for DiagnosticMark {
    fn from(error: &ValidationError) -> Self {
        let (path, kind) = match error {
            ValidationError::CountMismatch { aggregate, .. } => (aggregate, "count_mismatch"),
            ValidationError::PositionMismatch { aggregate, .. } => (aggregate, "position_mismatch"),
        };
        DiagnosticMark::new(path.clone(), DiagnosticSeverity::Error, kind, error.to_string())
    }
}

/// All findings for one song
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|mark| mark.severity == DiagnosticSeverity::Error)
    }
}

fn count(
    errors: &mut Vec<ValidationError>,
    aggregate: &dyn std::fmt::Display,
    field: &'static str,
    recorded: Option<usize>,
    actual: usize,
) {
    if let Some(recorded) = recorded {
        if recorded != actual {
            errors.push(ValidationError::CountMismatch {
                aggregate: aggregate.to_string(),
                field,
                recorded,
                actual,
            });
        }
    }
}

fn position(
    errors: &mut Vec<ValidationError>,
    aggregate: &dyn std::fmt::Display,
    recorded: Option<usize>,
    index: usize,
) {
    if let Some(recorded) = recorded {
        if recorded != index + 1 {
            errors.push(ValidationError::PositionMismatch {
                aggregate: aggregate.to_string(),
                recorded,
                expected: index + 1,
            });
        }
    }
}

/// Every count and position mismatch, counts first
fn validation_errors(song: &Song) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let sung_phrases = song.phrases.iter().filter(|phrase| !phrase.is_rest()).count();
    count(&mut errors, &"song", "number of phrases", song.number_of_phrases(), sung_phrases);
    for (p, phrase) in song.phrases.iter().enumerate() {
        let id = PhraseId { phrase: p };
        count(
            &mut errors,
            &id,
            "number of syllables",
            phrase.number_of_syllables(),
            phrase.syllables().count(),
        );
        count(
            &mut errors,
            &id,
            "number of phonemes",
            phrase.number_of_phonemes(),
            phrase.phoneme_count(),
        );
    }
    for (p, phrase) in song.phrases.iter().enumerate() {
        for (n, note) in phrase.notes.iter().enumerate() {
            for (s, syllable) in note.syllables.iter().enumerate() {
                let id = SyllableId { phrase: p, note: n, syllable: s };
                count(
                    &mut errors,
                    &id,
                    "number of phonemes",
                    syllable.number_of_phonemes(),
                    syllable.len(),
                );
            }
        }
    }

    for (p, phrase) in song.phrases.iter().enumerate() {
        for (n, note) in phrase.notes.iter().enumerate() {
            for (s, syllable) in note.syllables.iter().enumerate() {
                for (i, phoneme) in syllable.phonemes.iter().enumerate() {
                    let id = PhonemeId { phrase: p, note: n, syllable: s, phoneme: i };
                    position(&mut errors, &id, phoneme.position_number(), i);
                }
            }
        }
    }
    for (p, phrase) in song.phrases.iter().enumerate() {
        for (n, note) in phrase.notes.iter().enumerate() {
            for (s, syllable) in note.syllables.iter().enumerate() {
                let id = SyllableId { phrase: p, note: n, syllable: s };
                position(&mut errors, &id, syllable.position(), s);
            }
        }
    }
    for (p, phrase) in song.phrases.iter().enumerate() {
        for (n, note) in phrase.notes.iter().enumerate() {
            let id = NoteId { phrase: p, note: n };
            position(&mut errors, &id, note.position(), n);
        }
    }

    errors
}

/// Fail on the first count or position mismatch
pub fn check(song: &Song) -> Result<(), ValidationError> {
    match validation_errors(song).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Collect every mismatch, plus warnings for containers without children
pub fn diagnose(song: &Song) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    for error in &validation_errors(song) {
        diagnostics.add(DiagnosticMark::from(error));
    }

    for (p, phrase) in song.phrases.iter().enumerate() {
        if phrase.is_empty() {
            diagnostics.add(empty(PhraseId { phrase: p }, "phrase has no notes"));
        }
        for (n, note) in phrase.notes.iter().enumerate() {
            if note.is_empty() {
                diagnostics.add(empty(NoteId { phrase: p, note: n }, "note has no syllables"));
            }
            for (s, syllable) in note.syllables.iter().enumerate() {
                if syllable.is_empty() {
                    let id = SyllableId { phrase: p, note: n, syllable: s };
                    diagnostics.add(empty(id, "syllable has no phonemes"));
                }
            }
        }
    }

    if !diagnostics.is_empty() {
        log::debug!("structural diagnostics: {} marks", diagnostics.len());
    }
    diagnostics
}

fn empty(path: impl std::fmt::Display, message: &str) -> DiagnosticMark {
    DiagnosticMark::new(
        path.to_string(),
        DiagnosticSeverity::Warning,
        "empty_container",
        message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Note, Phoneme, Phrase, Syllable};

    fn consistent_song() -> Song {
        let mut syllable = Syllable::new();
        syllable.push(Phoneme::new("k"));
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
    fn test_consistent_song_passes() {
        let song = consistent_song();
        assert_eq!(check(&song), Ok(()));
        assert!(diagnose(&song).is_empty());
    }

    #[test]
    fn test_undefined_counts_are_skipped() {
        let mut song = consistent_song();
        song.set_number_of_phrases(None);
        song.phrases[0].set_number_of_phonemes(None);
        assert_eq!(check(&song), Ok(()));
    }

    #[test]
    fn test_phrase_phoneme_count_mismatch_names_aggregate() {
        let mut song = consistent_song();
        song.phrases[0].set_number_of_phonemes(Some(5));
        assert_eq!(
            check(&song),
            Err(ValidationError::CountMismatch {
                aggregate: "phrase 1".to_string(),
                field: "number of phonemes",
                recorded: 5,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_position_mismatch_reports_expected() {
        let mut song = consistent_song();
        song.phrases[0].notes[0].syllables[0].phonemes[1].set_position_number(Some(3));
        let err = check(&song).unwrap_err();
        assert_eq!(
            err,
            ValidationError::PositionMismatch {
                aggregate: "phrase 1 note 1 syllable 1 phoneme 2".to_string(),
                recorded: 3,
                expected: 2,
            }
        );
    }

    #[test]
    fn test_diagnose_collects_everything() {
        let mut song = consistent_song();
        song.set_number_of_phrases(Some(4));
        song.phrases[0].notes[0].set_position(Some(2));
        song.phrases[0].push(Note::new());
        let diagnostics = diagnose(&song);
        assert!(diagnostics.has_errors());
        let kinds: Vec<&str> = diagnostics.marks.iter().map(|m| m.kind.as_str()).collect();
        assert_eq!(kinds, vec!["count_mismatch", "position_mismatch", "empty_container"]);
    }

    #[test]
    fn test_rest_phrases_do_not_count_towards_song_phrases() {
        let mut song = consistent_song();
        let mut rest = Syllable::new();
        rest.push(Phoneme::new("pau"));
        let mut note = Note::new();
        note.push(rest);
        let mut phrase = Phrase::new();
        phrase.push(note);
        song.phrases.insert(0, phrase.clone());
        song.push(phrase);
        assert!(song.phrases[0].is_rest());
        assert_eq!(check(&song), Ok(()));

        song.set_number_of_phrases(Some(3));
        assert!(matches!(
            check(&song),
            Err(ValidationError::CountMismatch { recorded: 3, actual: 1, .. })
        ));
    }

    #[test]
    fn test_check_does_not_mutate() {
        let mut song = consistent_song();
        song.phrases[0].set_number_of_syllables(Some(9));
        let before = song.clone();
        let _ = check(&song);
        let _ = diagnose(&song);
        assert_eq!(song, before);
    }
}
