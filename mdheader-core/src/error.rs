use thiserror::Error;

/// Errors that abort decoding of a single ROM image.
///
/// Per-field problems (Shift-JIS conversion failure, unrecognized device or
/// region codes) are deliberately not represented here: they are recovered
/// inside the decoder and surface as placeholder values in the decoded
/// header instead.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// I/O error while reading the ROM
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before the full header block could be read
    #[error("truncated input: expected at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: u64, actual: u64 },

    /// The stream could not be positioned at a required offset
    #[error("seek to offset {offset:#06x} failed: {source}")]
    SeekFailure {
        offset: u64,
        source: std::io::Error,
    },
}

impl HeaderError {
    pub fn truncated(expected: u64, actual: u64) -> Self {
        Self::TruncatedInput { expected, actual }
    }

    pub fn seek_failure(offset: u64, source: std::io::Error) -> Self {
        Self::SeekFailure { offset, source }
    }
}
