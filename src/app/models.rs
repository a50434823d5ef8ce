//! Data models for Road Trip backup files
//!
//! This module contains the section vocabulary, one record structure per
//! section and the aggregate [`Vehicle`] produced by a load. Column names and
//! optionality for each record live in the parser's shape tables.

use crate::app::services::roadtrip_parser::dates::parse_date;
use crate::app::services::roadtrip_parser::stats::LoadStats;
use crate::constants::{self, PRIMARY_KEY_WIDTH};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// =============================================================================
// Section Names
// =============================================================================

/// One of the six CSV blocks in a Road Trip backup file
///
/// This closed set is the single source of truth both for locating sections
/// and for choosing the record shape a section decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SectionName {
    Vehicle,
    FuelRecords,
    MaintenanceRecords,
    RoadTrips,
    TireLog,
    Valuations,
}

impl SectionName {
    /// All sections, in decode order
    pub const ALL: [SectionName; 6] = [
        SectionName::Vehicle,
        SectionName::FuelRecords,
        SectionName::MaintenanceRecords,
        SectionName::RoadTrips,
        SectionName::TireLog,
        SectionName::Valuations,
    ];

    /// The all-caps header line introducing this section
    pub fn header(&self) -> &'static str {
        match self {
            SectionName::Vehicle => constants::VEHICLE_HEADER,
            SectionName::FuelRecords => constants::FUEL_RECORDS_HEADER,
            SectionName::MaintenanceRecords => constants::MAINTENANCE_RECORDS_HEADER,
            SectionName::RoadTrips => constants::ROAD_TRIPS_HEADER,
            SectionName::TireLog => constants::TIRE_LOG_HEADER,
            SectionName::Valuations => constants::VALUATIONS_HEADER,
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for SectionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SectionName::ALL
            .into_iter()
            .find(|section| section.header() == s.trim())
            .ok_or_else(|| Error::configuration(format!("Unknown section name '{}'", s)))
    }
}

impl TryFrom<String> for SectionName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SectionName> for String {
    fn from(section: SectionName) -> Self {
        section.header().to_string()
    }
}

/// Ordered list of every section header string
pub fn section_header_list() -> Vec<&'static str> {
    SectionName::ALL.iter().map(SectionName::header).collect()
}

// =============================================================================
// Records
// =============================================================================

/// The vehicle identity row of the VEHICLE section
///
/// A file is expected to contain exactly one of these; the loader warns but
/// does not fail when it finds zero or several.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub name: String,
    pub odometer: String,
    pub units: String,
    pub notes: String,
    pub tank_capacity: f64,
    pub tank_units: String,
    pub home_currency: String,
    pub flags: String,
    pub icon_id: String,
    pub fuel_units: String,
    pub trip_comp_units: String,
    pub trip_comp_speed: String,
    pub trip_comp_temperature: String,
    pub trip_comp_time_enabled: String,
    pub odometer_shift: String,
    pub tank1_type: String,
    pub tank2_type: String,
    pub tank2_units: String,
}

/// A single fuel fill-up from the FUEL RECORDS section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    pub odometer: f64,
    pub trip_distance: f64,
    pub date: String,
    pub fill_amount: f64,
    pub fill_units: String,
    pub price_per_unit: f64,
    pub total_price: f64,
    pub partial_fill: String,
    pub mpg: f64,
    pub note: String,
    pub octane: String,
    pub location: String,
    pub payment: String,
    pub conditions: String,
    pub reset: String,
    pub categories: String,
    pub flags: String,
    pub currency_code: i64,
    pub currency_rate: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub id: i64,
    pub fuel_economy: String,
    pub avg_speed: String,
    pub temperature: f64,
    pub drive_time: String,
    pub tank_number: i64,
}

impl FuelRecord {
    /// Odometer reading zero-padded to seven digits
    ///
    /// Two fuel records with the same primary key describe the same fill-up;
    /// no other field is used to tell records apart.
    pub fn primary_key(&self) -> String {
        format!("{:0width$}", self.odometer as i64, width = PRIMARY_KEY_WIDTH)
    }

    /// Fill-up timestamp, if the date column parses
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }

    /// Whether the app flagged this fill-up as a partial tank
    pub fn is_partial(&self) -> bool {
        !self.partial_fill.trim().is_empty()
    }
}

impl fmt::Display for FuelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "odometer={} date={} location={:?} total_price={:.2}",
            self.odometer, self.date, self.location, self.total_price
        )
    }
}

/// A maintenance activity from the MAINTENANCE RECORDS section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub description: String,
    pub date: String,
    pub odometer: f64,
    pub cost: f64,
    pub note: String,
    pub location: String,
    pub service_type: String,
    pub subtype: String,
    pub payment: String,
    pub categories: String,
    pub reminder_interval: String,
    pub reminder_distance: String,
    pub flags: String,
    pub currency_code: i64,
    pub currency_rate: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub id: i64,
    pub notification_interval: String,
    pub notification_distance: String,
}

impl MaintenanceRecord {
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }
}

/// A road trip from the ROAD TRIPS section, bounded by start and end dates
/// and odometer readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub name: String,
    pub start_date: String,
    pub start_odometer: f64,
    pub end_date: String,
    pub end_odometer: f64,
    pub note: String,
    pub distance: f64,
    pub id: i64,
    pub trip_type: String,
    pub categories: String,
    pub flags: String,
}

impl TripRecord {
    pub fn start_date_time(&self) -> Option<NaiveDateTime> {
        parse_date(&self.start_date)
    }

    pub fn end_date_time(&self) -> Option<NaiveDateTime> {
        parse_date(&self.end_date)
    }
}

/// A set of tires from the TIRE LOG section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TireRecord {
    pub name: String,
    pub start_date: String,
    pub start_odometer: i64,
    pub size: String,
    pub size_correction: String,
    pub distance: i64,
    pub age: String,
    pub note: String,
    pub flags: String,
    pub id: i64,
    pub parent_id: i64,
}

impl TireRecord {
    pub fn start_date_time(&self) -> Option<NaiveDateTime> {
        parse_date(&self.start_date)
    }
}

/// A market valuation from the VALUATIONS section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationRecord {
    pub valuation_type: String,
    pub date: String,
    pub odometer: i64,
    pub price: String,
    pub notes: String,
    pub flags: String,
}

impl ValuationRecord {
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }
}

// =============================================================================
// Load Result
// =============================================================================

/// Metadata from the block preceding the first section
///
/// Every field is `None` when the file has no preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preamble {
    /// Field and record delimiters declared on the `ROAD TRIP CSV` line
    pub delimiters: Option<String>,

    /// Data file version number
    pub version: Option<i64>,

    /// Section vocabulary language code
    pub language: Option<String>,
}

/// Everything decoded from one Road Trip backup file
///
/// Built one section at a time by the parser and immutable afterwards. The
/// raw document (after the erroneous-header strip) is retained so sections
/// can be re-extracted for diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vehicle {
    /// Source path, when loaded from disk
    pub filename: Option<PathBuf>,

    pub preamble: Preamble,

    /// VEHICLE rows; callers expect exactly one
    pub vehicles: Vec<VehicleRecord>,
    pub fuel_records: Vec<FuelRecord>,
    pub maintenance_records: Vec<MaintenanceRecord>,
    pub trips: Vec<TripRecord>,
    pub tires: Vec<TireRecord>,
    pub valuations: Vec<ValuationRecord>,

    /// Per-section byte ranges and row counts
    pub stats: LoadStats,

    pub(crate) raw: Vec<u8>,
}

impl Vehicle {
    /// The document bytes sections were located in
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Name of the first VEHICLE row, or an empty string when there is none
    pub fn name(&self) -> &str {
        self.vehicles.first().map(|v| v.name.as_str()).unwrap_or_default()
    }

    /// Number of decoded records in a section
    pub fn record_count(&self, section: SectionName) -> usize {
        match section {
            SectionName::Vehicle => self.vehicles.len(),
            SectionName::FuelRecords => self.fuel_records.len(),
            SectionName::MaintenanceRecords => self.maintenance_records.len(),
            SectionName::RoadTrips => self.trips.len(),
            SectionName::TireLog => self.tires.len(),
            SectionName::Valuations => self.valuations.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_name_round_trip() {
        for section in SectionName::ALL {
            let parsed: SectionName = section.header().parse().unwrap();
            assert_eq!(parsed, section);
        }

        assert!("FUEL".parse::<SectionName>().is_err());
    }

    #[test]
    fn test_section_header_list_order() {
        assert_eq!(
            section_header_list(),
            vec![
                "VEHICLE",
                "FUEL RECORDS",
                "MAINTENANCE RECORDS",
                "ROAD TRIPS",
                "TIRE LOG",
                "VALUATIONS"
            ]
        );
    }

    #[test]
    fn test_section_name_serde() {
        let json = serde_json::to_string(&SectionName::TireLog).unwrap();
        assert_eq!(json, "\"TIRE LOG\"");

        let section: SectionName = serde_json::from_str("\"ROAD TRIPS\"").unwrap();
        assert_eq!(section, SectionName::RoadTrips);
    }

    #[test]
    fn test_fuel_primary_key() {
        let record = FuelRecord {
            odometer: 48213.7,
            ..Default::default()
        };

        assert_eq!(record.primary_key(), "0048213");
    }

    #[test]
    fn test_fuel_display_and_partial() {
        let record = FuelRecord {
            odometer: 1200.0,
            date: "2024-12-09 15:04".to_string(),
            location: "Austin".to_string(),
            total_price: 40.0,
            partial_fill: "Partial".to_string(),
            ..Default::default()
        };

        assert_eq!(
            record.to_string(),
            "odometer=1200 date=2024-12-09 15:04 location=\"Austin\" total_price=40.00"
        );
        assert!(record.is_partial());
        assert!(!FuelRecord::default().is_partial());
    }

    #[test]
    fn test_record_date_accessors() {
        let tire = TireRecord {
            start_date: "2023-4-1".to_string(),
            ..Default::default()
        };
        let stamp = tire.start_date_time().unwrap();
        assert_eq!(stamp.to_string(), "2023-04-01 00:00:00");

        let trip = TripRecord {
            start_date: "garbage".to_string(),
            ..Default::default()
        };
        assert!(trip.start_date_time().is_none());
    }

    #[test]
    fn test_vehicle_name_and_counts() {
        let mut vehicle = Vehicle::default();
        assert_eq!(vehicle.name(), "");

        vehicle.vehicles.push(VehicleRecord {
            name: "Ranger".to_string(),
            ..Default::default()
        });
        vehicle.fuel_records.push(FuelRecord::default());

        assert_eq!(vehicle.name(), "Ranger");
        assert_eq!(vehicle.record_count(SectionName::Vehicle), 1);
        assert_eq!(vehicle.record_count(SectionName::FuelRecords), 1);
        assert_eq!(vehicle.record_count(SectionName::TireLog), 0);
    }
}
