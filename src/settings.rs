//! Settings for reading and writing label files

use serde::{Deserialize, Serialize};

/// Which glyphs to emit for the two separators that have typographic twins
///
/// The format reference writes `ˆ` (U+02C6) and `∼` (U+223C); most tools in
/// the wild write ASCII `^` and `~`. Both are always accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    /// `ˆ` and `∼`, as in the format reference
    #[default]
    Typographic,
    /// `^` and `~`
    Ascii,
}

/// Text encoding for written label files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    #[default]
    Utf8,
    ShiftJis,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::ShiftJis => "Shift_JIS",
        }
    }
}

/// How an existing file at the output path is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Create the file or replace its contents
    #[default]
    Truncate,
    /// Append to the end of the file, creating it if needed
    Append,
    /// Fail if the file already exists
    CreateNew,
}

/// Settings for a label load/write cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Separator glyphs used when rendering
    pub separator_style: SeparatorStyle,

    /// Fall back to the generic delimiter class when a block does not match
    /// its positional template
    pub lenient_separators: bool,

    /// Output file handling
    pub write_mode: WriteMode,

    /// Output file encoding
    pub encoding: TextEncoding,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            separator_style: SeparatorStyle::Typographic,
            lenient_separators: true,
            write_mode: WriteMode::Truncate,
            encoding: TextEncoding::Utf8,
        }
    }
}
