// Test reading and writing label files, including the Shift_JIS fallback

use hts_label::errors::LabelError;
use hts_label::parse::encode_label_text;
use hts_label::{
    FullLabel, LabelSettings, LabelSource, Note, Phoneme, Phrase, SeparatorStyle, Song, Syllable,
    TextEncoding, WriteMode,
};
use std::fs;

/// One phrase, one note: the syllables "か" (k a) and "ん" (N)
fn japanese_song() -> Song {
    let mut note = Note::new();
    for phonemes in [vec!["k", "a"], vec!["N"]] {
        let mut syllable = Syllable::new();
        for identity in phonemes {
            syllable.push(Phoneme::new(identity));
        }
        note.push(syllable);
    }
    note.contexts.set(0, "C4");
    note.contexts.set(59, "かん");
    let mut phrase = Phrase::new();
    phrase.push(note);
    let mut song = Song::new();
    song.push(phrase);
    song.renumber();
    song
}

#[test]
fn test_shift_jis_file_loads_through_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("song.lab");

    let text = FullLabel::from_song(japanese_song()).to_label_string(SeparatorStyle::Ascii);
    let bytes = encode_label_text(&text, TextEncoding::ShiftJis).unwrap();
    assert!(std::str::from_utf8(&bytes).is_err(), "fixture must not be valid UTF-8");
    fs::write(&path, bytes).unwrap();

    let label = FullLabel::load(path.as_path(), &LabelSettings::default())
        .expect("Shift_JIS label should load via fallback decoding");
    assert_eq!(label.song(), &japanese_song());
    assert_eq!(label.song().phrases[0].notes[0].contexts.get(59), "かん");
}

#[test]
fn test_write_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.lab");
    let label = FullLabel::from_song(japanese_song());

    for encoding in [TextEncoding::Utf8, TextEncoding::ShiftJis] {
        // Shift_JIS files use the ASCII separators
        let settings = LabelSettings {
            encoding,
            separator_style: SeparatorStyle::Ascii,
            ..LabelSettings::default()
        };
        let written = label.write(&path, &settings).unwrap();
        assert_eq!(written, label.to_label_string(SeparatorStyle::Ascii));

        let reloaded = FullLabel::load(path.clone(), &settings).unwrap();
        assert_eq!(reloaded, label);
    }
}

#[test]
fn test_quoted_path_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quoted.lab");
    FullLabel::from_song(japanese_song())
        .write(&path, &LabelSettings::default())
        .unwrap();

    let quoted = format!("\"{}\"", path.display());
    let label = FullLabel::load(LabelSource::Path(quoted.into()), &LabelSettings::default()).unwrap();
    assert_eq!(label.len(), 3);
}

#[test]
fn test_create_new_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("once.lab");
    let settings = LabelSettings {
        write_mode: WriteMode::CreateNew,
        ..LabelSettings::default()
    };
    let label = FullLabel::from_song(japanese_song());
    label.write(&path, &settings).unwrap();
    assert!(matches!(label.write(&path, &settings), Err(LabelError::Io { .. })));
}

#[test]
fn test_unmappable_characters_fail_shift_jis_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoji.lab");
    let mut song = japanese_song();
    song.phrases[0].notes[0].contexts.set(59, "🎵");
    let settings = LabelSettings {
        encoding: TextEncoding::ShiftJis,
        separator_style: SeparatorStyle::Ascii,
        ..LabelSettings::default()
    };
    let err = FullLabel::from_song(song).write(&path, &settings).unwrap_err();
    assert!(matches!(err, LabelError::Encode { encoding: "Shift_JIS" }));
    assert!(!path.exists());
}
