//! Application constants for the Road Trip reader
//!
//! This module contains the section vocabulary, file format markers and
//! default values used throughout the library.

// =============================================================================
// Section Headers
// =============================================================================

/// Section header line for the vehicle identity block
pub const VEHICLE_HEADER: &str = "VEHICLE";

/// Section header line for fuel fill-ups
pub const FUEL_RECORDS_HEADER: &str = "FUEL RECORDS";

/// Section header line for maintenance activities
pub const MAINTENANCE_RECORDS_HEADER: &str = "MAINTENANCE RECORDS";

/// Section header line for road trips
pub const ROAD_TRIPS_HEADER: &str = "ROAD TRIPS";

/// Section header line for tire sets
pub const TIRE_LOG_HEADER: &str = "TIRE LOG";

/// Section header line for market valuations
pub const VALUATIONS_HEADER: &str = "VALUATIONS";

// =============================================================================
// File Format
// =============================================================================

/// First token of the preamble line (`ROAD TRIP CSV ",."`)
pub const PREAMBLE_MARKER: &str = "ROAD TRIP CSV";

/// Header row of the version block that follows the preamble line
pub const VERSION_BLOCK_HEADER: &str = "Version,Language";

/// Road Trip data file version this library was written against
pub const SUPPORTED_VERSION: i64 = 1500;

/// Only supported section-header vocabulary
pub const SUPPORTED_LANGUAGE: &str = "en";

/// Column names some app releases write into the VEHICLE header row without
/// writing matching values, shifting every later column
pub const ERRONEOUS_VEHICLE_HEADERS: &str = ",Tank 1 Type,Tank 2 Type,Tank 2 Units";

// =============================================================================
// Dates
// =============================================================================

/// Date layout with time of day (fuel, maintenance)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date layout without time of day (tires, valuations)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Record Keys
// =============================================================================

/// Width of the zero-padded odometer used as a fuel record's primary key
pub const PRIMARY_KEY_WIDTH: usize = 7;
