//! Parsing module for HTS full-context labels
//!
//! This module turns label bytes and text into detached label line records,
//! and renders records back into label text.

pub mod decode;
pub mod label;

// Re-export commonly used functions
pub use decode::{decode_label_bytes, encode_label_text};
pub use label::{parse_bytes, parse_line, parse_lines, parse_text, serialize};
