//! Field grammar for HTS full-context label lines
//!
//! A label line is `start end P/A:…/B:…/C:…/D:…/E:…/F:…/G:…/H:…/I:…/J:…`.
//! Each block has a fixed template: an ordered list of one-character
//! separators, with field `i + 1` following separator `i`. Splitting walks the
//! template left to right, so a separator glyph only ends the field it belongs
//! to; joining fills the same template back in.
//!
//! # Block layout
//!
//! ```text
//! P  16 fields  p1@p2ˆp3-p4+p5=p6_p7%p8ˆp9_p10∼p11-p12!p13[p14$p15]p16
//! A   5 fields  /A:a1-a2-a3@a4~a5          previous syllable
//! B   5 fields  /B:b1_b2_b3@b4|b5          current syllable
//! C   5 fields  /C:c1+c2+c3@c4&c5          next syllable
//! D   9 fields  /D:d1!d2#d3$d4%d5|d6&d7;d8-d9        previous note
//! E  60 fields  /E:e1]e2ˆe3=e4∼e5!…                  current note
//! F   9 fields  /F:f1#f2#f3-f4$f5$f6+f7%f8;f9        next note
//! G/H/I 2 each  /G:g1_g2                   previous/current/next phrase
//! J   3 fields  /J:j1~j2@j3                song
//! ```

pub mod fields;

use crate::models::UNDEFINED;
use crate::settings::SeparatorStyle;
use once_cell::sync::Lazy;
use regex::Regex;

/// Block prefix such as `/A:`
static BLOCK_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([A-Z]):").expect("block prefix pattern is valid"));

/// Every delimiter the format uses, regardless of block
static GENERIC_DELIMITER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[=+\-~∼!@#$%^ˆ&;_|\[\]]").expect("generic delimiter class is valid")
});

const P_SEPARATORS: &[char] = &[
    '@', 'ˆ', '-', '+', '=', '_', '%', 'ˆ', '_', '∼', '-', '!', '[', '$', ']',
];
const A_SEPARATORS: &[char] = &['-', '-', '@', '~'];
const B_SEPARATORS: &[char] = &['_', '_', '@', '|'];
const C_SEPARATORS: &[char] = &['+', '+', '@', '&'];
const D_SEPARATORS: &[char] = &['!', '#', '$', '%', '|', '&', ';', '-'];
const E_SEPARATORS: &[char] = &[
    ']', 'ˆ', '=', '∼', '!', '@', '#', '+', ']', '$', // e1..e10
    '|', '[', '&', ']', '=', 'ˆ', '∼', '#', '_', ';', // e11..e20
    '$', '&', '%', '[', '|', ']', '-', 'ˆ', '+', '∼', // e21..e30
    '=', '@', '$', '!', '%', '#', '|', '|', '-', '&', // e31..e40
    '&', '+', '[', ';', ']', ';', '∼', '∼', 'ˆ', 'ˆ', // e41..e50
    '@', '[', '#', '=', '!', '∼', '+', '!', 'ˆ', // e51..e59
];
const F_SEPARATORS: &[char] = &['#', '#', '-', '$', '$', '+', '%', ';'];
const PHRASE_SEPARATORS: &[char] = &['_'];
const J_SEPARATORS: &[char] = &['~', '@'];

/// One context block of a label line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    P,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
}

impl Block {
    /// All blocks in line order
    pub const ALL: [Block; 11] = [
        Block::P,
        Block::A,
        Block::B,
        Block::C,
        Block::D,
        Block::E,
        Block::F,
        Block::G,
        Block::H,
        Block::I,
        Block::J,
    ];

    /// Prefix letter, `None` for the unprefixed phoneme block
    pub fn tag(&self) -> Option<char> {
        match self {
            Block::P => None,
            Block::A => Some('A'),
            Block::B => Some('B'),
            Block::C => Some('C'),
            Block::D => Some('D'),
            Block::E => Some('E'),
            Block::F => Some('F'),
            Block::G => Some('G'),
            Block::H => Some('H'),
            Block::I => Some('I'),
            Block::J => Some('J'),
        }
    }

    /// Separator template of this block
    pub fn separators(&self) -> &'static [char] {
        match self {
            Block::P => P_SEPARATORS,
            Block::A => A_SEPARATORS,
            Block::B => B_SEPARATORS,
            Block::C => C_SEPARATORS,
            Block::D => D_SEPARATORS,
            Block::E => E_SEPARATORS,
            Block::F => F_SEPARATORS,
            Block::G | Block::H | Block::I => PHRASE_SEPARATORS,
            Block::J => J_SEPARATORS,
        }
    }

    /// Number of fields the template holds
    pub fn field_count(&self) -> usize {
        self.separators().len() + 1
    }
}

/// Fold the typographic twins onto their ASCII forms for comparison
fn fold(c: char) -> char {
    match c {
        'ˆ' => '^',
        '∼' => '~',
        other => other,
    }
}

fn styled(c: char, style: SeparatorStyle) -> char {
    match style {
        SeparatorStyle::Typographic => c,
        SeparatorStyle::Ascii => fold(c),
    }
}

/// Split the text after the timestamps into the P block and the ten prefixed blocks
pub fn split_blocks(contexts: &str) -> Result<Vec<&str>, String> {
    let prefixes: Vec<_> = BLOCK_PREFIX.captures_iter(contexts).collect();
    let expected = &Block::ALL[1..];
    if prefixes.len() != expected.len() {
        return Err(format!(
            "expected {} block prefixes /A: to /J:, found {}",
            expected.len(),
            prefixes.len()
        ));
    }

    let mut blocks = Vec::with_capacity(Block::ALL.len());
    let mut cursor = 0;
    for (caps, block) in prefixes.iter().zip(expected) {
        let whole = caps.get(0).ok_or("empty block prefix match")?;
        let tag = caps[1].chars().next();
        if tag != block.tag() {
            return Err(format!(
                "expected block /{}: but found /{}:",
                block.tag().unwrap_or('?'),
                &caps[1]
            ));
        }
        blocks.push(&contexts[cursor..whole.start()]);
        cursor = whole.end();
    }
    blocks.push(&contexts[cursor..]);
    Ok(blocks)
}

/// Split one block body into its fields following the block template
///
/// With `lenient` set, a body that does not follow the template positionally
/// is retried with the generic delimiter class and accepted when that yields
/// exactly the template's field count.
pub fn split_block(block: Block, text: &str, lenient: bool) -> Result<Vec<String>, String> {
    match split_positional(block, text) {
        Ok(fields) => Ok(fields),
        Err(reason) if lenient => {
            let fields: Vec<String> = GENERIC_DELIMITER.split(text).map(str::to_string).collect();
            if fields.len() == block.field_count() {
                log::debug!("block {:?} accepted by generic delimiter split: {}", block, text);
                Ok(fields)
            } else {
                Err(reason)
            }
        }
        Err(reason) => Err(reason),
    }
}

fn split_positional(block: Block, text: &str) -> Result<Vec<String>, String> {
    let separators = block.separators();
    let mut fields = Vec::with_capacity(separators.len() + 1);
    let mut rest = text;
    for (index, &separator) in separators.iter().enumerate() {
        let wanted = fold(separator);
        let (at, found) = rest
            .char_indices()
            .find(|&(_, c)| fold(c) == wanted)
            .ok_or_else(|| {
                format!(
                    "block {:?} has {} of {} fields: missing '{}' after field {}",
                    block,
                    index + 1,
                    block.field_count(),
                    separator,
                    index + 1
                )
            })?;
        fields.push(rest[..at].to_string());
        rest = &rest[at + found.len_utf8()..];
    }
    fields.push(rest.to_string());
    Ok(fields)
}

/// Render a block body (with its prefix) from a field list
///
/// Missing trailing fields render as `xx`; extra fields are ignored.
pub fn join_block<S: AsRef<str>>(block: Block, fields: &[S], style: SeparatorStyle) -> String {
    let mut out = String::new();
    if let Some(tag) = block.tag() {
        out.push('/');
        out.push(tag);
        out.push(':');
    }
    let separators = block.separators();
    for i in 0..block.field_count() {
        if i > 0 {
            out.push(styled(separators[i - 1], style));
        }
        out.push_str(fields.get(i).map_or(UNDEFINED, |f| f.as_ref()));
    }
    out
}
