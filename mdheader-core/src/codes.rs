//! Single-byte enumeration code tables.
//!
//! The header stores supported I/O devices and release regions as fixed
//! 16-byte sequences of single ASCII codes, space-padded. Each non-space
//! byte decodes independently; a space means "no entry" and is skipped
//! rather than reported as unknown.
//!
//! Source: Sega's software manual device chart.

/// Look up the fixed label for an I/O device support code.
pub(crate) fn device_name(code: u8) -> Option<&'static str> {
    match code {
        b'0' => Some("Master System Joypad"),
        b'J' => Some("Joystick"),
        b'K' => Some("Keyboard"),
        b'R' => Some("Serial RS232C"),
        b'P' => Some("Printer"),
        b'T' => Some("Tablet"),
        b'B' => Some("Control Ball"),
        b'V' => Some("Paddle Controller"),
        b'F' => Some("Floppy Disk Drive"),
        b'C' => Some("CD-ROM"),
        _ => None,
    }
}

/// Look up the fixed label for a region code.
pub(crate) fn region_name(code: u8) -> Option<&'static str> {
    match code {
        b'J' => Some("Japan"),
        b'U' => Some("USA"),
        b'E' => Some("Europe"),
        _ => None,
    }
}

fn decode_codes(
    codes: &[u8],
    lookup: fn(u8) -> Option<&'static str>,
    unknown: &str,
) -> Vec<String> {
    codes
        .iter()
        .filter(|&&b| b != b' ')
        .map(|&b| match lookup(b) {
            Some(name) => name.to_string(),
            None => format!("Unknown {unknown} '{}'", b as char),
        })
        .collect()
}

/// Decode an I/O device support sequence into labels, in position order.
pub fn decode_device_codes(codes: &[u8]) -> Vec<String> {
    decode_codes(codes, device_name, "Control")
}

/// Decode a region code sequence into labels, in position order.
pub fn decode_region_codes(codes: &[u8]) -> Vec<String> {
    decode_codes(codes, region_name, "Region")
}
