//! Road Trip Backup Reader
//!
//! A Rust library for reading the CSV backup files written by the Road Trip
//! MPG mobile application into typed vehicle, fuel, maintenance, trip, tire
//! and valuation records.
//!
//! A Road Trip "CSV" file is really several independent CSV blocks glued
//! together, each introduced by an all-caps section header line and with no
//! offsets or lengths recorded anywhere. This library provides tools for:
//! - Locating each named section's byte range within the raw file
//! - Decoding each section's rows into typed records through static column tables
//! - Parsing the app's two date layouts (with and without time of day)
//! - Summarising fuel spend and economy for reporting
//!
//! ```no_run
//! use roadtrip::load_vehicle;
//!
//! # fn example() -> roadtrip::Result<()> {
//! let vehicle = load_vehicle("Ranger.csv")?;
//! println!("{} has {} fuel records", vehicle.name(), vehicle.fuel_records.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod fuel_summary;
        pub mod roadtrip_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    FuelRecord, MaintenanceRecord, SectionName, TireRecord, TripRecord, ValuationRecord,
    Vehicle, VehicleRecord,
};
pub use app::services::fuel_summary::FuelSummary;
pub use app::services::roadtrip_parser::{
    LoadOptions, RoadTripParser, load_vehicle, load_vehicle_with, parse_date,
};
pub use config::ParserConfig;

/// Result type alias for Road Trip parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading and decoding Road Trip backup files
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source file missing or unreadable
    #[error("Cannot read Road Trip file '{path}': {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A section header string does not appear in the document
    #[error("Section '{section}' not found in document")]
    SectionMissing { section: SectionName },

    /// The section's header row lacks a column a required field maps to
    #[error("Section '{section}' is missing required column '{column}'")]
    MissingColumn {
        section: SectionName,
        column: String,
    },

    /// A data row's value does not coerce to the declared field type
    #[error("Section '{section}' row {row}: column '{column}' value '{value}' {message}")]
    RowDecode {
        section: SectionName,
        row: usize,
        column: String,
        value: String,
        message: String,
    },

    /// CSV framing error (unbalanced quotes, invalid UTF-8)
    #[error("CSV parsing error in section '{section}': {source}")]
    Csv {
        section: SectionName,
        #[source]
        source: csv::Error,
    },

    /// Neither accepted date layout matched
    #[error("Unparseable Road Trip date '{value}'")]
    DateUnparseable { value: String },

    /// The file declares a language other than English
    #[error("Unsupported Road Trip language '{language}' (only 'en' is supported)")]
    UnsupportedLanguage { language: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a file-unreadable error for the given path
    pub fn file_unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a section-missing error
    pub fn section_missing(section: SectionName) -> Self {
        Self::SectionMissing { section }
    }

    /// Create a missing-column error
    pub fn missing_column(section: SectionName, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            section,
            column: column.into(),
        }
    }

    /// Create a row decode error
    pub fn row_decode(
        section: SectionName,
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::RowDecode {
            section,
            row,
            column: column.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a CSV framing error scoped to a section
    pub fn csv(section: SectionName, source: csv::Error) -> Self {
        Self::Csv { section, source }
    }

    /// Create a date parsing error
    pub fn date_unparseable(value: impl Into<String>) -> Self {
        Self::DateUnparseable {
            value: value.into(),
        }
    }

    /// Create an unsupported language error
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The section this error is attributed to, if any
    pub fn section(&self) -> Option<SectionName> {
        match self {
            Self::SectionMissing { section }
            | Self::MissingColumn { section, .. }
            | Self::RowDecode { section, .. }
            | Self::Csv { section, .. } => Some(*section),
            _ => None,
        }
    }
}
