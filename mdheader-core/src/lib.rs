//! Sega Mega Drive / Genesis ROM header decoder.
//!
//! Every licensed Mega Drive cartridge carries a 256-byte metadata block at
//! offset 0x100: console name, copyright, release date, domestic and overseas
//! titles (Shift-JIS), product code, supported I/O devices, ROM/RAM address
//! ranges and region codes, plus a 16-bit additive checksum over the ROM body.
//!
//! This crate reads that block from any `Read + Seek` source and decodes it
//! into a [`MegaDriveHeader`]. Field-level problems (a Shift-JIS title that
//! fails to convert, an unrecognized device code) never abort the decode;
//! only failing to read the block itself does.

use std::io::{Read, Seek};

pub mod checksum;
pub mod codes;
pub mod error;
pub mod fields;
pub mod header;
pub mod layout;
pub mod recode;

pub use checksum::{ChecksumResult, compute_checksum};
pub use error::HeaderError;
pub use header::{
    DecodeOptions, MegaDriveHeader, decode_header, decode_header_block, read_header_block,
};
pub use layout::LayoutRevision;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}
