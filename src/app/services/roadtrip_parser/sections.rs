//! Section location within a Road Trip document
//!
//! A Road Trip file records no offsets or lengths for its CSV blocks. Each
//! block starts at a line holding one of the six section header strings and
//! runs until the nearest following header line, whichever section that
//! belongs to, or to the end of the document. Sections may appear in any
//! order and any of them may be absent.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::app::models::SectionName;
use crate::constants::ERRONEOUS_VEHICLE_HEADERS;
use crate::{Error, Result};

/// Exclusive byte range of one section's content
///
/// The range starts after the section's header line, so it never includes
/// the header itself, and ends where the next section's header line begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionRange {
    pub section: SectionName,
    /// Offset of the header line introducing the section
    pub header_offset: usize,
    /// First byte of the section's CSV content
    pub start: usize,
    /// One past the last byte of the section's CSV content
    pub end: usize,
}

impl SectionRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow this range's bytes from the document it was computed against
    pub fn slice<'a>(&self, document: &'a [u8]) -> &'a [u8] {
        &document[self.start..self.end]
    }
}

/// Header line offsets found in a document
///
/// Sections whose header line does not appear are simply absent; absence is
/// reported explicitly by [`SectionOffsets::extract`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOffsets {
    found: BTreeMap<SectionName, usize>,
    document_len: usize,
}

impl SectionOffsets {
    /// Scan a document for the first header line of every known section
    pub fn locate(document: &[u8]) -> Self {
        let mut found = BTreeMap::new();

        for section in SectionName::ALL {
            match find_header_line(document, section.header()) {
                Some(offset) => {
                    debug!(section = %section, offset, "Section start detected");
                    found.insert(section, offset);
                }
                None => debug!(section = %section, "Section header not found"),
            }
        }

        Self {
            found,
            document_len: document.len(),
        }
    }

    /// Offset of a section's header line, if present
    pub fn get(&self, section: SectionName) -> Option<usize> {
        self.found.get(&section).copied()
    }

    /// Whether a section's header line was found
    pub fn contains(&self, section: SectionName) -> bool {
        self.found.contains_key(&section)
    }

    /// Sections whose header line is absent
    pub fn missing(&self) -> Vec<SectionName> {
        SectionName::ALL
            .into_iter()
            .filter(|section| !self.contains(*section))
            .collect()
    }

    /// Compute the content range of one section
    ///
    /// `document` must be the document these offsets were located in.
    pub fn extract(&self, document: &[u8], section: SectionName) -> Result<SectionRange> {
        debug_assert_eq!(document.len(), self.document_len);

        let header_offset = self
            .get(section)
            .ok_or_else(|| Error::section_missing(section))?;

        let end = self
            .found
            .values()
            .copied()
            .filter(|&offset| offset > header_offset)
            .min()
            .unwrap_or(document.len());

        let start = line_end(document, header_offset).min(end);

        let range = SectionRange {
            section,
            header_offset,
            start,
            end,
        };

        debug!(
            section = %section,
            start = range.start,
            end = range.end,
            section_bytes = range.len(),
            "Section range calculated"
        );

        Ok(range)
    }

    /// Ranges of every present section, ordered by position in the document
    pub fn ranges(&self, document: &[u8]) -> Vec<SectionRange> {
        let mut ranges: Vec<SectionRange> = self
            .found
            .keys()
            .filter_map(|section| self.extract(document, *section).ok())
            .collect();
        ranges.sort_by_key(|range| range.start);
        ranges
    }
}

/// Locate one section and return its content bytes
///
/// Header offsets are recomputed on every call; documents are small.
pub fn extract_section(document: &[u8], section: SectionName) -> Result<&[u8]> {
    let range = SectionOffsets::locate(document).extract(document, section)?;
    Ok(range.slice(document))
}

/// Remove the erroneous `Tank 1 Type,Tank 2 Type,Tank 2 Units` columns some
/// app releases write into the VEHICLE header row
///
/// Only the first occurrence is removed, so a stripped document is left
/// unchanged by a second call. Must run before section offsets are located.
/// Returns whether anything was removed.
pub fn strip_erroneous_headers(document: &mut Vec<u8>) -> bool {
    let needle = ERRONEOUS_VEHICLE_HEADERS.as_bytes();

    match find_bytes(document, needle) {
        Some(position) => {
            document.drain(position..position + needle.len());
            debug!(position, "Stripped erroneous VEHICLE header columns");
            true
        }
        None => false,
    }
}

/// Offset of the first line whose content is exactly `header`
///
/// Trailing whitespace, including a carriage return, is ignored so CRLF
/// files locate the same way as LF files.
fn find_header_line(document: &[u8], header: &str) -> Option<usize> {
    let mut offset = 0;

    for line in document.split_inclusive(|&b| b == b'\n') {
        if line.trim_ascii_end() == header.as_bytes() {
            return Some(offset);
        }
        offset += line.len();
    }

    None
}

/// Offset just past the line terminator of the line starting at `offset`
fn line_end(document: &[u8], offset: usize) -> usize {
    document[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|newline| offset + newline + 1)
        .unwrap_or(document.len())
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
