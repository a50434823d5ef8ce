//! Road Trip document loading
//!
//! This module orchestrates a load: read the file once, strip the erroneous
//! VEHICLE header columns, locate every section, decode each section into its
//! record collection and assemble the [`Vehicle`]. Any section failure aborts
//! the whole load; there is no partial result.

use std::path::Path;
use tracing::{debug, info, warn};

use super::preamble::parse_preamble;
use super::record_decoder::decode;
use super::sections::{SectionOffsets, extract_section, strip_erroneous_headers};
use super::shapes::SectionRecord;
use super::stats::LoadStats;
use crate::app::models::{SectionName, Vehicle};
use crate::config::ParserConfig;
use crate::constants::SUPPORTED_LANGUAGE;
use crate::{Error, Result};

/// Options for a single load
///
/// `dispatch` is the logging collaborator. When set, every event emitted
/// during the load goes to it; when unset, events go to the caller's current
/// subscriber, which discards them if none is installed.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub config: ParserConfig,
    pub dispatch: Option<tracing::Dispatch>,
}

impl LoadOptions {
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_dispatch(mut self, dispatch: tracing::Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }
}

/// Parser for Road Trip backup files
///
/// The parser logs to the caller's current `tracing` subscriber and never
/// installs one. To route a load's events to a specific collaborator, either
/// go through [`load_vehicle_with`] with [`LoadOptions::with_dispatch`] or
/// wrap the call in `tracing::dispatcher::with_default`.
#[derive(Debug, Clone, Default)]
pub struct RoadTripParser {
    config: ParserConfig,
}

impl RoadTripParser {
    /// Create a new parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Read and parse a Road Trip backup file
    pub fn load_file(&self, file_path: &Path) -> Result<Vehicle> {
        info!("Loading Road Trip file: {}", file_path.display());

        let data = std::fs::read(file_path)
            .map_err(|e| Error::file_unreadable(file_path.display().to_string(), e))?;

        let mut vehicle = self.parse_bytes(data)?;
        vehicle.filename = Some(file_path.to_path_buf());
        Ok(vehicle)
    }

    /// Parse a Road Trip document already held in memory
    pub fn parse_bytes(&self, mut data: Vec<u8>) -> Result<Vehicle> {
        self.config.validate()?;

        // Must happen before any offsets are computed
        let stripped = self.config.strip_erroneous_headers && strip_erroneous_headers(&mut data);

        let offsets = SectionOffsets::locate(&data);
        let mut stats = LoadStats::new(data.len(), stripped);

        let preamble_end = SectionName::ALL
            .into_iter()
            .filter_map(|section| offsets.get(section))
            .min()
            .unwrap_or(data.len());
        let preamble = parse_preamble(&data[..preamble_end]);

        if let Some(language) = &preamble.language {
            if language != SUPPORTED_LANGUAGE {
                return Err(Error::unsupported_language(language));
            }
        }
        if let Some(version) = preamble.version {
            if version != self.config.supported_version {
                warn!(
                    "Road Trip data file version {} differs from supported version {}",
                    version, self.config.supported_version
                );
            }
        }

        let vehicles = self.decode_section(&data, &offsets, &mut stats)?;
        let fuel_records = self.decode_section(&data, &offsets, &mut stats)?;
        let maintenance_records = self.decode_section(&data, &offsets, &mut stats)?;
        let trips = self.decode_section(&data, &offsets, &mut stats)?;
        let tires = self.decode_section(&data, &offsets, &mut stats)?;
        let valuations = self.decode_section(&data, &offsets, &mut stats)?;

        let vehicle = Vehicle {
            filename: None,
            preamble,
            vehicles,
            fuel_records,
            maintenance_records,
            trips,
            tires,
            valuations,
            stats,
            raw: data,
        };

        if vehicle.vehicles.len() != 1 {
            warn!(
                "Expected exactly one VEHICLE row, found {}",
                vehicle.vehicles.len()
            );
        }

        info!(
            name = vehicle.name(),
            bytes = vehicle.raw.len(),
            vehicle_records = vehicle.vehicles.len(),
            fuel_records = vehicle.fuel_records.len(),
            maintenance_records = vehicle.maintenance_records.len(),
            trips = vehicle.trips.len(),
            tire_logs = vehicle.tires.len(),
            valuations = vehicle.valuations.len(),
            "Loaded Road Trip CSV"
        );

        Ok(vehicle)
    }

    /// Locate and decode one section into its record type
    fn decode_section<R: SectionRecord>(
        &self,
        data: &[u8],
        offsets: &SectionOffsets,
        stats: &mut LoadStats,
    ) -> Result<Vec<R>> {
        let section = R::SECTION;

        let range = match offsets.extract(data, section) {
            Ok(range) => range,
            Err(Error::SectionMissing { .. })
                if self.config.allow_missing_sections && section != SectionName::Vehicle =>
            {
                debug!(section = %section, "Section absent, decoding as empty");
                stats.record_section(section, None, 0);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let records = decode::<R>(range.slice(data), self.config.trim_fields)?;
        debug!(section = %section, rows = records.len(), "Section decoded");

        stats.record_section(section, Some(range), records.len());
        Ok(records)
    }
}

impl Vehicle {
    /// Re-extract one section's raw CSV bytes from the retained document
    pub fn section(&self, section: SectionName) -> Result<&[u8]> {
        debug!(section = %section, "Fetching section from raw document");
        extract_section(&self.raw, section)
    }
}

/// Load a Road Trip file with default configuration and no logging collaborator
pub fn load_vehicle(path: impl AsRef<Path>) -> Result<Vehicle> {
    load_vehicle_with(path, &LoadOptions::default())
}

/// Load a Road Trip file with explicit options
pub fn load_vehicle_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Vehicle> {
    let parser = RoadTripParser::new(options.config.clone());
    let path = path.as_ref();

    match &options.dispatch {
        Some(dispatch) => {
            tracing::dispatcher::with_default(dispatch, || parser.load_file(path))
        }
        None => parser.load_file(path),
    }
}
