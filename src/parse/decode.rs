//! Text encodings of label files
//!
//! Label files are UTF-8 or, from older Japanese tools, Shift_JIS. Reading
//! tries UTF-8 first and falls back to Shift_JIS; writing uses whichever the
//! caller picks.

use crate::errors::{LabelError, LabelResult};
use crate::settings::TextEncoding;
use encoding_rs::SHIFT_JIS;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode label bytes, UTF-8 first, Shift_JIS as fallback
pub fn decode_label_bytes(bytes: &[u8]) -> LabelResult<String> {
    let without_bom = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(without_bom) {
        return Ok(text.to_string());
    }

    log::warn!("label text is not valid UTF-8, decoding as Shift_JIS");
    SHIFT_JIS
        .decode_without_bom_handling_and_without_replacement(without_bom)
        .map(|text| text.into_owned())
        .ok_or(LabelError::Decode)
}

/// Encode label text for writing
pub fn encode_label_text(text: &str, encoding: TextEncoding) -> LabelResult<Vec<u8>> {
    match encoding {
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::ShiftJis => {
            let (bytes, _, had_unmappable) = SHIFT_JIS.encode(text);
            if had_unmappable {
                return Err(LabelError::Encode {
                    encoding: encoding.name(),
                });
            }
            Ok(bytes.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_is_preferred() {
        let text = "0 10 あ";
        assert_eq!(decode_label_bytes(text.as_bytes()).unwrap(), text);
    }

    #[test]
    fn test_bom_is_dropped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"0 10 a");
        assert_eq!(decode_label_bytes(&bytes).unwrap(), "0 10 a");
    }

    #[test]
    fn test_shift_jis_fallback() {
        // "あ" in Shift_JIS is 0x82 0xA0, which is not valid UTF-8
        let bytes = [b'0', b' ', 0x82, 0xA0];
        assert_eq!(decode_label_bytes(&bytes).unwrap(), "0 あ");
    }

    #[test]
    fn test_shift_jis_fallback_after_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(&[b'0', b' ', b'1', b'0', b' ', 0x82, 0xA0]);
        assert_eq!(decode_label_bytes(&bytes).unwrap(), "0 10 あ");
    }

    #[test]
    fn test_undecodable_bytes_fail() {
        // 0xFF is neither a UTF-8 byte nor a Shift_JIS lead byte
        let bytes = [b'0', b' ', 0xFF, 0xFF];
        assert!(matches!(decode_label_bytes(&bytes), Err(LabelError::Decode)));
    }

    #[test]
    fn test_shift_jis_round_trip() {
        let bytes = encode_label_text("あ", TextEncoding::ShiftJis).unwrap();
        assert_eq!(bytes, vec![0x82, 0xA0]);
        assert!(encode_label_text("😀", TextEncoding::ShiftJis).is_err());
    }
}
