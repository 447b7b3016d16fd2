//! Additive 16-bit body checksum.
//!
//! The Mega Drive checksum covers everything after the interrupt vectors and
//! header (0x200 to end of image) as a sum of big-endian 16-bit words with
//! wrapping arithmetic. The console's boot routine computes the same sum, so
//! a mismatch usually means a bad dump.

use std::io::SeekFrom;

use crate::ReadSeek;
use crate::error::HeaderError;
use crate::layout::CHECKSUM_BODY_OFFSET;

const CHUNK_SIZE: usize = 8192;

/// Stored and computed checksum for one image.
///
/// The engine only reports both values; whether a mismatch is treated as
/// corruption is the reporting layer's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumResult {
    /// Checksum word from the header, if the layout revision defines one.
    pub stored: Option<u16>,
    /// Sum computed over the ROM body.
    pub computed: u16,
}

impl ChecksumResult {
    /// Whether stored and computed agree; `None` when there is no stored
    /// value to compare against.
    pub fn matches(&self) -> Option<bool> {
        self.stored.map(|s| s == self.computed)
    }
}

/// Sum the ROM body as big-endian 16-bit words with wraparound.
///
/// Seeks to the body start and reads to end of stream in chunks; words may
/// straddle chunk boundaries. A trailing odd byte does not form a word and
/// is ignored. An empty body sums to 0.
pub fn compute_checksum(reader: &mut dyn ReadSeek) -> Result<u16, HeaderError> {
    reader
        .seek(SeekFrom::Start(CHECKSUM_BODY_OFFSET))
        .map_err(|e| HeaderError::seek_failure(CHECKSUM_BODY_OFFSET, e))?;

    let mut sum: u16 = 0;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut pending: Option<u8> = None;
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        let mut bytes = &buf[..n];
        if let Some(hi) = pending.take() {
            sum = sum.wrapping_add(u16::from_be_bytes([hi, bytes[0]]));
            bytes = &bytes[1..];
        }
        let mut words = bytes.chunks_exact(2);
        for word in &mut words {
            sum = sum.wrapping_add(u16::from_be_bytes([word[0], word[1]]));
        }
        pending = words.remainder().first().copied();
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn body(words: &[u8]) -> Cursor<Vec<u8>> {
        let mut rom = vec![0u8; CHECKSUM_BODY_OFFSET as usize];
        rom.extend_from_slice(words);
        Cursor::new(rom)
    }

    #[test]
    fn test_empty_body_sums_to_zero() {
        assert_eq!(compute_checksum(&mut body(&[])).unwrap(), 0);
    }

    #[test]
    fn test_simple_word_sum() {
        let mut rom = body(&[0x00, 0x01, 0x00, 0x02, 0x00, 0x03]);
        assert_eq!(compute_checksum(&mut rom).unwrap(), 0x0006);
    }

    #[test]
    fn test_sum_wraps_at_16_bits() {
        let mut rom = body(&[0xFF, 0xFF, 0x00, 0x02]);
        assert_eq!(compute_checksum(&mut rom).unwrap(), 0x0001);
    }

    #[test]
    fn test_trailing_odd_byte_ignored() {
        let mut rom = body(&[0x00, 0x05, 0xFF]);
        assert_eq!(compute_checksum(&mut rom).unwrap(), 0x0005);
    }

    #[test]
    fn test_words_straddling_chunk_boundary() {
        // Body one byte longer than the read chunk, so the last word is
        // split across two reads.
        let mut words = vec![0u8; CHUNK_SIZE - 1];
        words.extend_from_slice(&[0x01, 0x02]);
        let expected = u16::from_be_bytes([words[CHUNK_SIZE - 2], words[CHUNK_SIZE - 1]]);
        let mut rom = body(&words);
        assert_eq!(compute_checksum(&mut rom).unwrap(), expected);
    }

    #[test]
    fn test_match_classification() {
        let result = ChecksumResult {
            stored: Some(0x1234),
            computed: 0x1234,
        };
        assert_eq!(result.matches(), Some(true));
        let result = ChecksumResult {
            stored: None,
            computed: 0x1234,
        };
        assert_eq!(result.matches(), None);
    }
}
