//! Configuration management and validation.
//!
//! Provides the parser configuration structure controlling the vendor quirk
//! workaround, tolerance for absent sections and field trimming.

use crate::constants::SUPPORTED_VERSION;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for loading Road Trip backup files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Strip the erroneous `Tank 1 Type,Tank 2 Type,Tank 2 Units` VEHICLE
    /// header columns before locating sections
    pub strip_erroneous_headers: bool,

    /// Decode an absent non-VEHICLE section as an empty collection instead of
    /// failing with `SectionMissing`
    pub allow_missing_sections: bool,

    /// Data file version expected in the preamble (mismatch only warns)
    pub supported_version: i64,

    /// Trim surrounding whitespace from cells before type coercion
    pub trim_fields: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strip_erroneous_headers: true,
            allow_missing_sections: false,
            supported_version: SUPPORTED_VERSION,
            trim_fields: true,
        }
    }
}

impl ParserConfig {
    /// Keep the erroneous VEHICLE header columns in place
    pub fn without_header_strip(mut self) -> Self {
        self.strip_erroneous_headers = false;
        self
    }

    /// Tolerate absent sections other than VEHICLE
    pub fn with_missing_sections_allowed(mut self) -> Self {
        self.allow_missing_sections = true;
        self
    }

    /// Set the expected data file version
    pub fn with_supported_version(mut self, version: i64) -> Self {
        self.supported_version = version;
        self
    }

    /// Pass cell text through to coercion untrimmed
    pub fn without_field_trimming(mut self) -> Self {
        self.trim_fields = false;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.supported_version <= 0 {
            return Err(Error::configuration(format!(
                "supported_version must be positive, got {}",
                self.supported_version
            )));
        }

        debug!("Parser configuration validated: {:?}", self);
        Ok(())
    }
}
