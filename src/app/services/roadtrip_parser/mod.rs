//! Road Trip backup file parser
//!
//! A Road Trip backup is a short preamble followed by six independent CSV
//! blocks, each introduced by an all-caps section header line, in any order.
//! Nothing in the file records where a block ends; the parser discovers
//! boundaries by scanning for the next known header.
//!
//! ## Architecture
//!
//! - [`sections`] - Section location and the erroneous-header strip
//! - [`shapes`] - Static column tables, one per section
//! - [`column_mapping`] - Header-row binding of shape fields to column indices
//! - [`field_parsers`] - Cell coercion to text, integer and float
//! - [`record_decoder`] - Per-section CSV decoding into typed records
//! - [`dates`] - Two-layout date parsing
//! - [`preamble`] - Version and language block
//! - [`parser`] - Load orchestration
//! - [`stats`] - Per-section load statistics
//!
//! ## Usage
//!
//! ```no_run
//! use roadtrip::{LoadOptions, ParserConfig, load_vehicle_with};
//!
//! # fn example() -> roadtrip::Result<()> {
//! let options = LoadOptions::default()
//!     .with_config(ParserConfig::default().with_missing_sections_allowed());
//! let vehicle = load_vehicle_with("Ranger.csv", &options)?;
//!
//! let spent: f64 = vehicle.fuel_records.iter().map(|f| f.total_price).sum();
//! println!("{} spent {:.2} on fuel", vehicle.name(), spent);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod dates;
pub mod field_parsers;
pub mod parser;
pub mod preamble;
pub mod record_decoder;
pub mod sections;
pub mod shapes;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use dates::{parse_date, parse_date_strict};
pub use parser::{LoadOptions, RoadTripParser, load_vehicle, load_vehicle_with};
pub use sections::{SectionOffsets, SectionRange, extract_section, strip_erroneous_headers};
pub use shapes::{FieldKind, FieldSpec, RecordShape, SectionRecord};
pub use stats::{LoadStats, SectionStats};
