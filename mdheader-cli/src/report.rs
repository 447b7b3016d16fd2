//! Plain-text report rendering for a decoded header.
//!
//! One labeled section per field in layout order, matching the header's own
//! field order. Code-sequence fields get one line per decoded label.

use std::fmt::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mdheader_core::MegaDriveHeader;

fn label(out: &mut String, text: &str) {
    let _ = writeln!(
        out,
        "{}",
        format!("{text}:").if_supports_color(Stdout, |t| t.cyan())
    );
}

fn section(out: &mut String, name: &str, value: &str) {
    label(out, name);
    let _ = writeln!(out, "{value}");
}

fn code_section(out: &mut String, name: &str, labels: &[String]) {
    label(out, name);
    for entry in labels {
        let _ = writeln!(out, "{entry}");
    }
}

/// Render the full per-field report for one file.
pub fn render_report(file_name: &str, header: &MegaDriveHeader) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        file_name.if_supports_color(Stdout, |t| t.bold())
    );

    section(&mut out, "Common title", &header.common_title);
    section(&mut out, "Copyright", &header.copyright);
    section(&mut out, "Date", &header.date);
    section(&mut out, "Game name (domestic)", &header.domestic_title);
    section(&mut out, "Game name (overseas)", &header.overseas_title);
    section(&mut out, "Type", &header.game_type);
    section(&mut out, "Product", &header.product_code);
    code_section(&mut out, "Controls", &header.devices);

    label(&mut out, "ROM range");
    let _ = writeln!(out, "{:08X}-{:08X}", header.rom_start, header.rom_end);
    label(&mut out, "RAM range");
    let _ = writeln!(out, "{:08X}-{:08X}", header.ram_start, header.ram_end);

    section(&mut out, "Modem", &header.modem);
    section(&mut out, "Memo", &header.memo);
    code_section(&mut out, "Regions", &header.regions);

    if let Some(checksum) = header.checksum {
        label(&mut out, "Checksum");
        match checksum.stored {
            Some(stored) => {
                let verdict = if checksum.matches() == Some(true) {
                    "OK".if_supports_color(Stdout, |t| t.green()).to_string()
                } else {
                    "MISMATCH"
                        .if_supports_color(Stdout, |t| t.bright_red())
                        .to_string()
                };
                let _ = writeln!(
                    out,
                    "stored {stored:04X}, computed {:04X} [{verdict}]",
                    checksum.computed
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "computed {:04X} (no stored value in {} layout)",
                    checksum.computed, header.layout
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdheader_core::{ChecksumResult, LayoutRevision};

    fn sample_header() -> MegaDriveHeader {
        MegaDriveHeader {
            layout: LayoutRevision::Standard,
            common_title: "SEGA MEGA DRIVE ".into(),
            copyright: "(C)SEGA ".into(),
            date: "1991.JUN".into(),
            domestic_title: format!("{:<48}", "SONIC THE HEDGEHOG"),
            overseas_title: format!("{:<48}", "SONIC THE HEDGEHOG"),
            game_type: "GM".into(),
            product_code: "00001009-00 ".into(),
            devices: vec!["Joystick".into()],
            rom_start: 0,
            rom_end: 0x0003_FFFF,
            ram_start: 0x00FF_0000,
            ram_end: 0x00FF_FFFF,
            modem: "            ".into(),
            memo: " ".repeat(40),
            regions: vec!["Japan".into(), "USA".into(), "Europe".into()],
            checksum: Some(ChecksumResult {
                stored: Some(0x1234),
                computed: 0x1234,
            }),
        }
    }

    #[test]
    fn test_report_lists_every_section() {
        let report = render_report("sonic.md", &sample_header());
        for needle in [
            "Common title:",
            "Game name (domestic):",
            "Product:",
            "Controls:",
            "Joystick",
            "ROM range:",
            "00000000-0003FFFF",
            "Regions:",
            "Japan",
            "USA",
            "Europe",
            "Checksum:",
            "stored 1234, computed 1234",
        ] {
            assert!(report.contains(needle), "missing {needle:?} in:\n{report}");
        }
    }

    #[test]
    fn test_checksum_section_without_stored_value() {
        let mut header = sample_header();
        header.layout = LayoutRevision::Extended;
        header.checksum = Some(ChecksumResult {
            stored: None,
            computed: 0xBEEF,
        });
        let report = render_report("sonic.md", &header);
        assert!(report.contains("computed BEEF (no stored value in extended layout)"));
    }

    #[test]
    fn test_no_checksum_section_when_skipped() {
        let mut header = sample_header();
        header.checksum = None;
        assert!(!render_report("sonic.md", &header).contains("Checksum:"));
    }
}
