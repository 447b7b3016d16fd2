//! Header block acquisition and full-record decoding.

use std::io::SeekFrom;

use crate::ReadSeek;
use crate::checksum::{ChecksumResult, compute_checksum};
use crate::codes::{decode_device_codes, decode_region_codes};
use crate::error::HeaderError;
use crate::fields::decode_fixed_text;
use crate::layout::{self, HEADER_OFFSET, HEADER_SIZE, LayoutRevision, Span};
use crate::recode::{CONVERSION_FAILURE, recode_shift_jis};

/// Options controlling how a header is decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Which layout revision to read the product-code area with.
    pub layout: LayoutRevision,

    /// Skip the body checksum scan. Useful on slow storage; the header
    /// block itself is still fully decoded.
    pub skip_checksum: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: LayoutRevision) -> Self {
        self.layout = layout;
        self
    }

    pub fn skip_checksum(mut self, skip: bool) -> Self {
        self.skip_checksum = skip;
        self
    }
}

/// The fully decoded header of one ROM image.
///
/// Text fields keep their exact declared width (padding included); the
/// Shift-JIS titles are [`CONVERSION_FAILURE`] when their bytes do not
/// convert. Device and region sequences are expanded to labels with blank
/// entries dropped.
#[derive(Debug, Clone)]
pub struct MegaDriveHeader {
    /// Layout revision the product-code area was read with.
    pub layout: LayoutRevision,
    /// Console name, e.g. "SEGA MEGA DRIVE ".
    pub common_title: String,
    pub copyright: String,
    pub date: String,
    /// Domestic (Japanese) title, converted from Shift-JIS.
    pub domestic_title: String,
    /// Overseas title, converted from Shift-JIS.
    pub overseas_title: String,
    /// Software type code, e.g. "GM" for game or "AL" for education.
    pub game_type: String,
    pub product_code: String,
    /// Supported I/O devices, decoded to labels.
    pub devices: Vec<String>,
    pub rom_start: u32,
    pub rom_end: u32,
    pub ram_start: u32,
    pub ram_end: u32,
    pub modem: String,
    pub memo: String,
    /// Release regions, decoded to labels.
    pub regions: Vec<String>,
    /// Stored vs computed body checksum; `None` when the scan was skipped.
    pub checksum: Option<ChecksumResult>,
}

/// Read the 256-byte header block at offset 0x100.
///
/// A stream that cannot seek there or ends before the block is complete
/// fails hard; no partial block is ever handed to the decoder.
pub fn read_header_block(reader: &mut dyn ReadSeek) -> Result<[u8; HEADER_SIZE], HeaderError> {
    let needed = HEADER_OFFSET + HEADER_SIZE as u64;
    let stream_size = reader
        .seek(SeekFrom::End(0))
        .map_err(|e| HeaderError::seek_failure(HEADER_OFFSET, e))?;
    if stream_size < needed {
        return Err(HeaderError::truncated(needed, stream_size));
    }

    reader
        .seek(SeekFrom::Start(HEADER_OFFSET))
        .map_err(|e| HeaderError::seek_failure(HEADER_OFFSET, e))?;

    let mut block = [0u8; HEADER_SIZE];
    reader.read_exact(&mut block).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            HeaderError::truncated(needed, stream_size)
        } else {
            HeaderError::Io(e)
        }
    })?;
    Ok(block)
}

fn be_u32(block: &[u8], span: Span) -> u32 {
    let bytes = span.slice(block);
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn shift_jis_field(block: &[u8], span: Span) -> String {
    recode_shift_jis(span.slice(block)).unwrap_or_else(|_| CONVERSION_FAILURE.to_string())
}

/// Decode an already-acquired header block.
///
/// Field decoding never fails: Shift-JIS conversion problems become the
/// placeholder string and unrecognized codes become fallback labels.
pub fn decode_header_block(block: &[u8; HEADER_SIZE], layout: LayoutRevision) -> MegaDriveHeader {
    MegaDriveHeader {
        layout,
        common_title: decode_fixed_text(block, layout::COMMON_TITLE),
        copyright: decode_fixed_text(block, layout::COPYRIGHT),
        date: decode_fixed_text(block, layout::DATE),
        domestic_title: shift_jis_field(block, layout::DOMESTIC_TITLE),
        overseas_title: shift_jis_field(block, layout::OVERSEAS_TITLE),
        game_type: decode_fixed_text(block, layout::GAME_TYPE),
        product_code: decode_fixed_text(block, layout.product_code()),
        devices: decode_device_codes(layout::DEVICE_CODES.slice(block)),
        rom_start: be_u32(block, layout::ROM_START),
        rom_end: be_u32(block, layout::ROM_END),
        ram_start: be_u32(block, layout::RAM_START),
        ram_end: be_u32(block, layout::RAM_END),
        modem: decode_fixed_text(block, layout::MODEM),
        memo: decode_fixed_text(block, layout::MEMO),
        regions: decode_region_codes(layout::REGION_CODES.slice(block)),
        checksum: None,
    }
}

/// Decode a full ROM image: acquire the header block, decode every field,
/// and (unless skipped) scan the body for the checksum.
pub fn decode_header(
    reader: &mut dyn ReadSeek,
    options: &DecodeOptions,
) -> Result<MegaDriveHeader, HeaderError> {
    let block = read_header_block(reader)?;
    let mut header = decode_header_block(&block, options.layout);

    if !options.skip_checksum {
        let stored = options
            .layout
            .stored_checksum()
            .map(|span| span.slice(&block))
            .map(|bytes| u16::from_be_bytes([bytes[0], bytes[1]]));
        let computed = compute_checksum(reader)?;
        header.checksum = Some(ChecksumResult { stored, computed });
    }

    Ok(header)
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
