//! mdheader CLI
//!
//! Decodes the 256-byte metadata header of Sega Mega Drive / Genesis ROM
//! images and prints a per-field report.

mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use thiserror::Error;

use mdheader_core::{DecodeOptions, HeaderError, LayoutRevision, decode_header};

use crate::report::render_report;

#[derive(Parser)]
#[command(name = "mdheader")]
#[command(about = "Decode Sega Mega Drive / Genesis ROM headers", long_about = None)]
struct Cli {
    /// ROM image files to decode
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Header layout revision: 'standard' (12-byte product code plus stored
    /// checksum) or 'extended' (14-byte product code, no checksum field)
    #[arg(short, long, default_value = "standard")]
    layout: LayoutRevision,

    /// Skip the body checksum scan (useful on network shares)
    #[arg(long)]
    skip_checksum: bool,
}

/// Errors that fail decoding of one input file.
#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Header(#[from] HeaderError),
}

fn decode_one(path: &Path, options: &DecodeOptions) -> Result<String, CliError> {
    let mut file = fs::File::open(path)?;
    let header = decode_header(&mut file, options)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("?");
    Ok(render_report(file_name, &header))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let options = DecodeOptions::new()
        .layout(cli.layout)
        .skip_checksum(cli.skip_checksum);

    // One file failing never stops the rest.
    let mut failures = 0usize;
    for path in &cli.files {
        match decode_one(path, &options) {
            Ok(report) => {
                print!("{report}");
                println!();
            }
            Err(e) => {
                log::error!("failed to decode {}: {e}", path.display());
                eprintln!(
                    "{} {}: {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    path.display(),
                    e,
                );
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
