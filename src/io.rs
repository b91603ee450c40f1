//! Label files on disk

use crate::errors::{LabelError, LabelResult};
use crate::parse::{decode_label_bytes, encode_label_text};
use crate::settings::{TextEncoding, WriteMode};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Paths pasted from a file manager often arrive quoted
fn unquote(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) => PathBuf::from(text.trim_matches('"')),
        None => path.to_path_buf(),
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> LabelError + '_ {
    move |source| LabelError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Raw bytes of a label file
pub fn read_label_bytes(path: impl AsRef<Path>) -> LabelResult<Vec<u8>> {
    let path = unquote(path.as_ref());
    let bytes = std::fs::read(&path).map_err(io_error(&path))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Read and decode a label file (UTF-8, falling back to Shift_JIS)
pub fn read_label_file(path: impl AsRef<Path>) -> LabelResult<String> {
    decode_label_bytes(&read_label_bytes(path)?)
}

/// Encode and write label text, returning the text written
pub fn write_label_file(
    path: impl AsRef<Path>,
    text: &str,
    mode: WriteMode,
    encoding: TextEncoding,
) -> LabelResult<String> {
    let path = unquote(path.as_ref());
    let bytes = encode_label_text(text, encoding)?;

    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Truncate => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
        WriteMode::CreateNew => options.write(true).create_new(true),
    };
    let mut file = options.open(&path).map_err(io_error(&path))?;
    file.write_all(&bytes).map_err(io_error(&path))?;

    log::debug!(
        "wrote {} bytes ({}) to {}",
        bytes.len(),
        encoding.name(),
        path.display()
    );
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_path_is_unquoted() {
        assert_eq!(unquote(Path::new("\"a/b.lab\"")), PathBuf::from("a/b.lab"));
        assert_eq!(unquote(Path::new("a/b.lab")), PathBuf::from("a/b.lab"));
    }

    #[test]
    fn test_write_modes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.lab");

        write_label_file(&path, "one", WriteMode::Truncate, TextEncoding::Utf8).unwrap();
        write_label_file(&path, "\ntwo", WriteMode::Append, TextEncoding::Utf8).unwrap();
        assert_eq!(read_label_file(&path).unwrap(), "one\ntwo");

        let err = write_label_file(&path, "x", WriteMode::CreateNew, TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, LabelError::Io { .. }));

        write_label_file(&path, "three", WriteMode::Truncate, TextEncoding::Utf8).unwrap();
        assert_eq!(read_label_file(&path).unwrap(), "three");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_label_file(dir.path().join("absent.lab")).unwrap_err();
        assert!(matches!(err, LabelError::Io { .. }));
    }
}
