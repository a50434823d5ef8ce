//! Test fixtures for Road Trip parser testing
//!
//! This module provides builders for synthetic Road Trip documents and
//! helper functions used across the component test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::SectionName;
use crate::constants::ERRONEOUS_VEHICLE_HEADERS;


pub const PREAMBLE: &str = "ROAD TRIP CSV \",.\"\nVersion,Language\n1500,en\n";

pub const VEHICLE_COLUMNS: &str = "Name,Odometer,Units,Notes,Tank Capacity,Tank Units,Home Currency,Flags,IconID,FuelUnits,TripComp Units,TripComp Speed,TripComp Temperature,TripComp Time Enabled,Odometer Shift";

pub const FUEL_COLUMNS: &str = "Odometer (mi),Trip Distance,Date,Fill Amount,Fill Units,Price per Unit,Total Price,Partial Fill,MPG,Note,Octane,Location,Payment,Conditions,Reset,Categories,Flags,Currency Code,Currency Rate,Latitude,Longitude,ID,Trip Comp Fuel Economy,Trip Comp Avg. Speed,Trip Comp Temperature,Trip Comp Drive Time,Tank Number";

pub const MAINTENANCE_COLUMNS: &str = "Description,Date,Odometer (mi.),Cost,Note,Location,Type,Subtype,Payment,Categories,Reminder Interval,Reminder Distance,Flags,Currency Code,Currency Rate,Latitude,Longitude,ID,Notification Interval,Notification Distance";

pub const TRIP_COLUMNS: &str = "Name,Start Date,Start Odometer (mi.),End Date,End Odometer,Note,Distance,ID,Type,Categories,Flags";

pub const TIRE_COLUMNS: &str = "Name,Start Date,Start Odometer (mi.),Size,Size Correction,Distance,Age,Note,Flags,ID,ParentID";

pub const VALUATION_COLUMNS: &str = "Type,Date,Odometer,Price,Notes,Flags";

/// CSV header row written by the app for a section
pub fn columns(section: SectionName) -> &'static str {
    match section {
        SectionName::Vehicle => VEHICLE_COLUMNS,
        SectionName::FuelRecords => FUEL_COLUMNS,
        SectionName::MaintenanceRecords => MAINTENANCE_COLUMNS,
        SectionName::RoadTrips => TRIP_COLUMNS,
        SectionName::TireLog => TIRE_COLUMNS,
        SectionName::Valuations => VALUATION_COLUMNS,
    }
}

pub fn vehicle_row(name: &str, odometer: &str) -> String {
    format!("{name},{odometer},mi,,19.0,gal,USD,,3,0,0,0,0,0,0")
}

pub fn fuel_row(odometer: &str, date: &str, total_price: &str, mpg: &str) -> String {
    format!(
        "{odometer},300.5,{date},10.0,gal,4.00,{total_price},,{mpg},,87,Austin,Visa,,,,,0,1,30.26,-97.74,1,,,,,0"
    )
}

pub fn maintenance_row() -> String {
    "Oil Change,2024-3-2 10:30,48000,65.25,,Jiffy,Service,Oil,Visa,,6 months,5000,,0,1,0,0,7,,"
        .to_string()
}

pub fn trip_row() -> String {
    "Big Bend,2024-5-1 08:00,48500,2024-5-4 18:00,49400,,900,3,Vacation,,".to_string()
}

pub fn tire_row() -> String {
    "All Terrain,2023-4-1,40000,265/70R17,1.0,10000,1 year,,,5,0".to_string()
}

pub fn valuation_row() -> String {
    "Trade-in,2024-6-1,49500,$18000,,".to_string()
}

/// One section block: header line, CSV header row, data rows
pub fn section_block(section: SectionName, rows: &[String]) -> String {
    section_block_with_columns(section, columns(section), rows)
}

pub fn section_block_with_columns(section: SectionName, columns: &str, rows: &[String]) -> String {
    let mut block = format!("{}\n{}\n", section.header(), columns);
    for row in rows {
        block.push_str(row);
        block.push('\n');
    }
    block
}

/// Join blocks with the blank line the app writes between sections
pub fn build_document(preamble: bool, blocks: &[String]) -> String {
    let mut document = String::new();
    if preamble {
        document.push_str(PREAMBLE);
        document.push('\n');
    }
    document.push_str(&blocks.join("\n"));
    document
}

/// Every section with one or two rows, as the app writes them
pub fn full_blocks() -> Vec<String> {
    let vehicle_columns = format!("{VEHICLE_COLUMNS}{ERRONEOUS_VEHICLE_HEADERS}");

    vec![
        section_block_with_columns(
            SectionName::Vehicle,
            &vehicle_columns,
            &[vehicle_row("Ranger", "50000")],
        ),
        section_block(
            SectionName::FuelRecords,
            &[
                fuel_row("49000", "2024-12-01 08:15", "40.00", ""),
                fuel_row("49300", "2024-12-09 15:04", "35.50", "24.5"),
            ],
        ),
        section_block(SectionName::MaintenanceRecords, &[maintenance_row()]),
        section_block(SectionName::RoadTrips, &[trip_row()]),
        section_block(SectionName::TireLog, &[tire_row()]),
        section_block(SectionName::Valuations, &[valuation_row()]),
    ]
}

pub fn full_document() -> String {
    build_document(true, &full_blocks())
}

/// A VEHICLE row plus five sections with header rows but no data
pub fn minimal_document() -> String {
    let mut blocks = vec![section_block(
        SectionName::Vehicle,
        &[vehicle_row("Ranger", "50000")],
    )];
    for section in &SectionName::ALL[1..] {
        blocks.push(section_block(*section, &[]));
    }
    build_document(true, &blocks)
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Log sink shared between a test and the subscriber writing into it
#[derive(Clone, Default)]
pub struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// A debug-level subscriber writing plain text into this sink
    pub fn dispatch(&self) -> tracing::Dispatch {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::Dispatch::new(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
