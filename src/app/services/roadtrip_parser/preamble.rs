//! Road Trip preamble parsing
//!
//! The block before the first section looks like:
//!
//! ```text
//! ROAD TRIP CSV ",."
//! Version,Language
//! 1500,en
//! ```
//!
//! Every part of it is optional; a missing or malformed line leaves the
//! corresponding field unset.

use tracing::{debug, warn};

use crate::app::models::Preamble;
use crate::constants::{PREAMBLE_MARKER, VERSION_BLOCK_HEADER};

/// Extract preamble metadata from the bytes preceding the first section
pub fn parse_preamble(block: &[u8]) -> Preamble {
    let text = String::from_utf8_lossy(block);
    let mut preamble = Preamble::default();

    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix(PREAMBLE_MARKER) {
            preamble.delimiters = parse_delimiters(rest);
        } else if line == VERSION_BLOCK_HEADER {
            if let Some(values) = lines.next() {
                parse_version_line(values, &mut preamble);
            }
        }
    }

    debug!(
        delimiters = ?preamble.delimiters,
        version = ?preamble.version,
        language = ?preamble.language,
        "Parsed preamble"
    );

    preamble
}

/// Delimiters are the quoted text after the marker, e.g. `",."`
fn parse_delimiters(rest: &str) -> Option<String> {
    let rest = rest.trim();
    let inner = rest.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.to_string())
}

fn parse_version_line(line: &str, preamble: &mut Preamble) {
    let mut parts = line.splitn(2, ',').map(str::trim);

    if let Some(version) = parts.next() {
        match version.parse::<i64>() {
            Ok(version) => preamble.version = Some(version),
            Err(_) => warn!("Could not parse Road Trip version: {}", version),
        }
    }

    if let Some(language) = parts.next().filter(|l| !l.is_empty()) {
        preamble.language = Some(language.to_string());
    }
}
