//! Fixed-width text field extraction.

use crate::layout::Span;

/// Decode a fixed-width text field from the header block.
///
/// The field is copied at its exact declared width: no terminator search
/// and no padding trim. Header fields are space- or NUL-padded, and Sega's
/// own tools treated the padding as part of the field, so trailing spaces
/// are preserved. An embedded NUL ends the printable content (the returned
/// string never contains NUL); every other byte passes through as a
/// single-byte character.
pub fn decode_fixed_text(block: &[u8], span: Span) -> String {
    span.slice(block)
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_width_no_trim() {
        let mut block = [b' '; 32];
        block[..5].copy_from_slice(b"SONIC");
        let s = decode_fixed_text(&block, Span::new(0, 16));
        assert_eq!(s, "SONIC           ");
        assert_eq!(s.len(), 16);
    }

    #[test]
    fn test_raw_slice_round_trip() {
        let block = *b"(C)SEGA 1991.APR";
        let span = Span::new(0, 16);
        let decoded = decode_fixed_text(&block, span);
        let rebuilt: Vec<u8> = decoded.chars().map(|c| c as u8).collect();
        assert_eq!(rebuilt, &block[..span.len]);
    }

    #[test]
    fn test_nul_ends_content() {
        let block = *b"GM 00004049\0JUNK";
        let s = decode_fixed_text(&block, Span::new(0, 16));
        assert_eq!(s, "GM 00004049");
        assert!(!s.contains('\0'));
    }

    #[test]
    fn test_embedded_spaces_kept() {
        let block = *b"GM 00001009-00  ";
        let s = decode_fixed_text(&block, Span::new(0, 14));
        assert_eq!(s, "GM 00001009-00");
    }
}
