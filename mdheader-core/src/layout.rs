//! Fixed byte layout of the Mega Drive header block.
//!
//! All offsets are relative to the start of the 256-byte block (absolute
//! offset 0x100 in the ROM image). The layout is constant data: every field
//! span below is checked against [`HEADER_SIZE`] at compile time via the
//! slicing in the decoder, and an out-of-range span would be a bug in this
//! table, not a property of any input.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Absolute offset of the header block in the ROM image.
pub const HEADER_OFFSET: u64 = 0x100;

/// Size of the header block in bytes.
pub const HEADER_SIZE: usize = 0x100;

/// Absolute offset where the checksummed ROM body begins.
pub const CHECKSUM_BODY_OFFSET: u64 = 0x200;

/// A fixed field window within the header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Slice this field's window out of a header block.
    pub fn slice<'a>(&self, block: &'a [u8]) -> &'a [u8] {
        &block[self.offset..self.offset + self.len]
    }
}

pub const COMMON_TITLE: Span = Span::new(0x00, 16);
pub const COPYRIGHT: Span = Span::new(0x10, 8);
pub const DATE: Span = Span::new(0x18, 8);
pub const DOMESTIC_TITLE: Span = Span::new(0x20, 48);
pub const OVERSEAS_TITLE: Span = Span::new(0x50, 48);
pub const GAME_TYPE: Span = Span::new(0x80, 2);
pub const DEVICE_CODES: Span = Span::new(0x90, 16);
pub const ROM_START: Span = Span::new(0xA0, 4);
pub const ROM_END: Span = Span::new(0xA4, 4);
pub const RAM_START: Span = Span::new(0xA8, 4);
pub const RAM_END: Span = Span::new(0xAC, 4);
// 0xB0..0xBC holds the external-memory descriptor, which the decoder
// does not interpret.
pub const MODEM: Span = Span::new(0xBC, 12);
pub const MEMO: Span = Span::new(0xC8, 40);
pub const REGION_CODES: Span = Span::new(0xF0, 16);

/// Header layout revision.
///
/// Dumps in the wild disagree on the bytes following the game type at 0x80:
/// the standard Sega layout stores a 12-byte product code followed by the
/// 16-bit checksum, while some dumping tools treat the whole 14 bytes as
/// product code and define no checksum field. The two readings cannot be
/// told apart from the bytes alone, so the revision is selected explicitly
/// rather than guessed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutRevision {
    /// 12-byte product code at 0x82, stored checksum at 0x8E.
    #[default]
    Standard,
    /// 14-byte product code at 0x82, no stored checksum field.
    Extended,
}

impl LayoutRevision {
    pub fn product_code(&self) -> Span {
        match self {
            Self::Standard => Span::new(0x82, 12),
            Self::Extended => Span::new(0x82, 14),
        }
    }

    /// Location of the stored checksum word, if this revision defines one.
    pub fn stored_checksum(&self) -> Option<Span> {
        match self {
            Self::Standard => Some(Span::new(0x8E, 2)),
            Self::Extended => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for LayoutRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing a layout revision name fails.
#[derive(Debug, Error)]
#[error("unknown layout revision '{0}' (expected 'standard' or 'extended')")]
pub struct LayoutParseError(String);

impl FromStr for LayoutRevision {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            _ => Err(LayoutParseError(s.to_string())),
        }
    }
}
