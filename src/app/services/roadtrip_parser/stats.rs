//! Load statistics for Road Trip documents
//!
//! Records where each section was found and how many rows it decoded to,
//! for diagnostics and the `sections` report.

use serde::Serialize;

use super::sections::SectionRange;
use crate::app::models::SectionName;

/// Statistics for one section of a load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionStats {
    pub section: SectionName,

    /// Content range, `None` when the section header was absent
    pub range: Option<SectionRange>,

    /// Number of records decoded
    pub rows: usize,
}

/// Statistics for a whole load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Document size after the erroneous-header strip
    pub bytes: usize,

    /// Whether the erroneous VEHICLE header columns were removed
    pub erroneous_headers_stripped: bool,

    /// Per-section statistics, in decode order
    pub sections: Vec<SectionStats>,
}

impl LoadStats {
    pub fn new(bytes: usize, erroneous_headers_stripped: bool) -> Self {
        Self {
            bytes,
            erroneous_headers_stripped,
            sections: Vec::with_capacity(SectionName::ALL.len()),
        }
    }

    pub fn record_section(&mut self, section: SectionName, range: Option<SectionRange>, rows: usize) {
        self.sections.push(SectionStats {
            section,
            range,
            rows,
        });
    }

    pub fn section(&self, section: SectionName) -> Option<&SectionStats> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Total records decoded across all sections
    pub fn total_rows(&self) -> usize {
        self.sections.iter().map(|s| s.rows).sum()
    }

    /// Sections whose header line was absent
    pub fn missing_sections(&self) -> Vec<SectionName> {
        self.sections
            .iter()
            .filter(|s| s.range.is_none())
            .map(|s| s.section)
            .collect()
    }
}
