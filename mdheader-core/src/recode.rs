//! Shift-JIS to UTF-8 conversion for the domestic/overseas title fields.

use encoding_rs::{DecoderResult, SHIFT_JIS};
use thiserror::Error;

/// Placeholder reported for a title field whose conversion failed.
pub const CONVERSION_FAILURE: &str = "conversion failure";

/// The Shift-JIS bytes could not be converted to UTF-8.
///
/// Recovered per field: the decoder substitutes [`CONVERSION_FAILURE`] and
/// keeps going.
#[derive(Debug, Error)]
#[error("Shift-JIS conversion failed")]
pub struct RecodeError;

/// Convert a fixed Shift-JIS window to UTF-8.
///
/// The full window is fed through a stateful streaming decoder; any
/// malformed or incomplete multi-byte sequence fails the whole field.
/// Like the ASCII fields, an embedded NUL ends the printable content and
/// padding is otherwise preserved.
pub fn recode_shift_jis(raw: &[u8]) -> Result<String, RecodeError> {
    let mut decoder = SHIFT_JIS.new_decoder_without_bom_handling();
    // Worst case a 2-byte pair expands to 3 UTF-8 bytes; 128 covers a
    // 48-byte field with room to spare, and the loop grows on demand.
    let mut out = String::with_capacity(128);
    let mut fed = 0;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&raw[fed..], &mut out, true);
        fed += read;
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => out.reserve(128),
            DecoderResult::Malformed(_, _) => return Err(RecodeError),
        }
    }
    if let Some(nul) = out.find('\0') {
        out.truncate(nul);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let raw = b"SONIC THE HEDGEHOG              ";
        assert_eq!(recode_shift_jis(raw).unwrap(), "SONIC THE HEDGEHOG              ");
    }

    #[test]
    fn test_two_byte_sequence() {
        // 0x82 0xA2 is a single hiragana character, 3 bytes in UTF-8.
        let converted = recode_shift_jis(&[0x82, 0xA2]).unwrap();
        assert_eq!(converted, "\u{3044}");
        assert_eq!(converted.len(), 3);
    }

    #[test]
    fn test_lone_lead_byte_is_recoverable_error() {
        // A lead byte with no continuation must fail cleanly, not panic.
        assert!(recode_shift_jis(&[b'A', 0x82]).is_err());
    }

    #[test]
    fn test_invalid_sequence_is_error() {
        assert!(recode_shift_jis(&[0x82, 0x00, b'A']).is_err());
    }

    #[test]
    fn test_nul_padding_dropped() {
        let mut raw = [0u8; 48];
        raw[..4].copy_from_slice(b"TEST");
        assert_eq!(recode_shift_jis(&raw).unwrap(), "TEST");
    }
}
