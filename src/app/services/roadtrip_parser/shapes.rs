//! Record shapes: the static column tables for each section
//!
//! Every section decodes through an ordered list of [`FieldSpec`]s naming the
//! source column, its semantic type, whether the column may be absent and
//! whether a numeric cell may be blank.
//! Columns are matched by name, never by position. A record type pairs its
//! table with a constructor reading the decoded values back out by column.

use crate::app::models::{
    FuelRecord, MaintenanceRecord, SectionName, TireRecord, TripRecord, ValuationRecord,
    VehicleRecord,
};

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    /// Kept as text; see [`super::dates::parse_date`]
    Date,
}

/// One column of a record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column name in the section's CSV header row
    pub column: &'static str,
    pub kind: FieldKind,
    /// The header row may lack this column; the field then takes its zero value
    pub optional: bool,
    /// A blank numeric cell yields zero instead of a decode error
    pub allow_blank: bool,
}

impl FieldSpec {
    /// Column must be present and numeric cells must hold a value
    pub const fn required(column: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            kind,
            optional: false,
            allow_blank: false,
        }
    }

    /// Column must be present but its cells may be blank
    pub const fn omitempty(column: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            kind,
            optional: false,
            allow_blank: true,
        }
    }

    /// Column may be missing from the header row altogether
    pub const fn optional(column: &'static str, kind: FieldKind) -> Self {
        Self {
            column,
            kind,
            optional: true,
            allow_blank: true,
        }
    }
}

/// A section paired with its ordered column table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordShape {
    pub section: SectionName,
    pub fields: &'static [FieldSpec],
}

impl RecordShape {
    /// Columns the section's header row must contain
    pub fn required_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| !field.optional)
            .map(|field| field.column)
    }
}

impl SectionName {
    /// Record shape this section decodes into
    pub fn shape(&self) -> RecordShape {
        match self {
            SectionName::Vehicle => VehicleRecord::shape(),
            SectionName::FuelRecords => FuelRecord::shape(),
            SectionName::MaintenanceRecords => MaintenanceRecord::shape(),
            SectionName::RoadTrips => TripRecord::shape(),
            SectionName::TireLog => TireRecord::shape(),
            SectionName::Valuations => ValuationRecord::shape(),
        }
    }
}

/// A decoded cell
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    /// Zero value for a kind, used for absent columns and blank cells
    pub fn zero(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::Date => FieldValue::Text(String::new()),
            FieldKind::Integer => FieldValue::Integer(0),
            FieldKind::Float => FieldValue::Float(0.0),
        }
    }
}

/// One data row decoded against a shape, values in shape order
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRow {
    fields: &'static [FieldSpec],
    values: Vec<FieldValue>,
}

impl DecodedRow {
    pub(crate) fn new(fields: &'static [FieldSpec], values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(fields.len(), values.len());
        Self { fields, values }
    }

    fn value(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .position(|field| field.column == column)
            .and_then(|index| self.values.get(index))
    }

    /// Text or date value of a column; empty when the column is not text
    pub fn text(&self, column: &str) -> String {
        match self.value(column) {
            Some(FieldValue::Text(value)) => value.clone(),
            _ => String::new(),
        }
    }

    pub fn integer(&self, column: &str) -> i64 {
        match self.value(column) {
            Some(FieldValue::Integer(value)) => *value,
            _ => 0,
        }
    }

    pub fn float(&self, column: &str) -> f64 {
        match self.value(column) {
            Some(FieldValue::Float(value)) => *value,
            _ => 0.0,
        }
    }
}

/// A record type decodable from one section
pub trait SectionRecord: Sized {
    const SECTION: SectionName;
    const FIELDS: &'static [FieldSpec];

    fn from_row(row: &DecodedRow) -> Self;

    fn shape() -> RecordShape {
        RecordShape {
            section: Self::SECTION,
            fields: Self::FIELDS,
        }
    }
}

use FieldKind::{Date, Float, Integer, Text};

impl SectionRecord for VehicleRecord {
    const SECTION: SectionName = SectionName::Vehicle;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("Name", Text),
        FieldSpec::required("Odometer", Text),
        FieldSpec::required("Units", Text),
        FieldSpec::required("Notes", Text),
        FieldSpec::omitempty("Tank Capacity", Float),
        FieldSpec::required("Tank Units", Text),
        FieldSpec::required("Home Currency", Text),
        FieldSpec::required("Flags", Text),
        FieldSpec::required("IconID", Text),
        FieldSpec::required("FuelUnits", Text),
        FieldSpec::required("TripComp Units", Text),
        FieldSpec::required("TripComp Speed", Text),
        FieldSpec::required("TripComp Temperature", Text),
        FieldSpec::required("TripComp Time Enabled", Text),
        FieldSpec::required("Odometer Shift", Text),
        FieldSpec::optional("Tank 1 Type", Text),
        FieldSpec::optional("Tank 2 Type", Text),
        FieldSpec::optional("Tank 2 Units", Text),
    ];

    fn from_row(row: &DecodedRow) -> Self {
        Self {
            name: row.text("Name"),
            odometer: row.text("Odometer"),
            units: row.text("Units"),
            notes: row.text("Notes"),
            tank_capacity: row.float("Tank Capacity"),
            tank_units: row.text("Tank Units"),
            home_currency: row.text("Home Currency"),
            flags: row.text("Flags"),
            icon_id: row.text("IconID"),
            fuel_units: row.text("FuelUnits"),
            trip_comp_units: row.text("TripComp Units"),
            trip_comp_speed: row.text("TripComp Speed"),
            trip_comp_temperature: row.text("TripComp Temperature"),
            trip_comp_time_enabled: row.text("TripComp Time Enabled"),
            odometer_shift: row.text("Odometer Shift"),
            tank1_type: row.text("Tank 1 Type"),
            tank2_type: row.text("Tank 2 Type"),
            tank2_units: row.text("Tank 2 Units"),
        }
    }
}

impl SectionRecord for FuelRecord {
    const SECTION: SectionName = SectionName::FuelRecords;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("Odometer (mi)", Float),
        FieldSpec::omitempty("Trip Distance", Float),
        FieldSpec::required("Date", Date),
        FieldSpec::omitempty("Fill Amount", Float),
        FieldSpec::required("Fill Units", Text),
        FieldSpec::omitempty("Price per Unit", Float),
        FieldSpec::omitempty("Total Price", Float),
        FieldSpec::omitempty("Partial Fill", Text),
        FieldSpec::omitempty("MPG", Float),
        FieldSpec::required("Note", Text),
        FieldSpec::required("Octane", Text),
        FieldSpec::required("Location", Text),
        FieldSpec::required("Payment", Text),
        FieldSpec::required("Conditions", Text),
        FieldSpec::required("Reset", Text),
        FieldSpec::required("Categories", Text),
        FieldSpec::required("Flags", Text),
        FieldSpec::omitempty("Currency Code", Integer),
        FieldSpec::omitempty("Currency Rate", Integer),
        FieldSpec::omitempty("Latitude", Float),
        FieldSpec::omitempty("Longitude", Float),
        FieldSpec::omitempty("ID", Integer),
        FieldSpec::required("Trip Comp Fuel Economy", Text),
        FieldSpec::required("Trip Comp Avg. Speed", Text),
        FieldSpec::omitempty("Trip Comp Temperature", Float),
        FieldSpec::required("Trip Comp Drive Time", Text),
        FieldSpec::omitempty("Tank Number", Integer),
    ];

    fn from_row(row: &DecodedRow) -> Self {
        Self {
            odometer: row.float("Odometer (mi)"),
            trip_distance: row.float("Trip Distance"),
            date: row.text("Date"),
            fill_amount: row.float("Fill Amount"),
            fill_units: row.text("Fill Units"),
            price_per_unit: row.float("Price per Unit"),
            total_price: row.float("Total Price"),
            partial_fill: row.text("Partial Fill"),
            mpg: row.float("MPG"),
            note: row.text("Note"),
            octane: row.text("Octane"),
            location: row.text("Location"),
            payment: row.text("Payment"),
            conditions: row.text("Conditions"),
            reset: row.text("Reset"),
            categories: row.text("Categories"),
            flags: row.text("Flags"),
            currency_code: row.integer("Currency Code"),
            currency_rate: row.integer("Currency Rate"),
            latitude: row.float("Latitude"),
            longitude: row.float("Longitude"),
            id: row.integer("ID"),
            fuel_economy: row.text("Trip Comp Fuel Economy"),
            avg_speed: row.text("Trip Comp Avg. Speed"),
            temperature: row.float("Trip Comp Temperature"),
            drive_time: row.text("Trip Comp Drive Time"),
            tank_number: row.integer("Tank Number"),
        }
    }
}

impl SectionRecord for MaintenanceRecord {
    const SECTION: SectionName = SectionName::MaintenanceRecords;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("Description", Text),
        FieldSpec::required("Date", Date),
        FieldSpec::omitempty("Odometer (mi.)", Float),
        FieldSpec::omitempty("Cost", Float),
        FieldSpec::required("Note", Text),
        FieldSpec::required("Location", Text),
        FieldSpec::required("Type", Text),
        FieldSpec::required("Subtype", Text),
        FieldSpec::required("Payment", Text),
        FieldSpec::required("Categories", Text),
        FieldSpec::required("Reminder Interval", Text),
        FieldSpec::required("Reminder Distance", Text),
        FieldSpec::required("Flags", Text),
        FieldSpec::omitempty("Currency Code", Integer),
        FieldSpec::omitempty("Currency Rate", Integer),
        FieldSpec::omitempty("Latitude", Float),
        FieldSpec::omitempty("Longitude", Float),
        FieldSpec::omitempty("ID", Integer),
        FieldSpec::required("Notification Interval", Text),
        FieldSpec::required("Notification Distance", Text),
    ];

    fn from_row(row: &DecodedRow) -> Self {
        Self {
            description: row.text("Description"),
            date: row.text("Date"),
            odometer: row.float("Odometer (mi.)"),
            cost: row.float("Cost"),
            note: row.text("Note"),
            location: row.text("Location"),
            service_type: row.text("Type"),
            subtype: row.text("Subtype"),
            payment: row.text("Payment"),
            categories: row.text("Categories"),
            reminder_interval: row.text("Reminder Interval"),
            reminder_distance: row.text("Reminder Distance"),
            flags: row.text("Flags"),
            currency_code: row.integer("Currency Code"),
            currency_rate: row.integer("Currency Rate"),
            latitude: row.float("Latitude"),
            longitude: row.float("Longitude"),
            id: row.integer("ID"),
            notification_interval: row.text("Notification Interval"),
            notification_distance: row.text("Notification Distance"),
        }
    }
}

impl SectionRecord for TripRecord {
    const SECTION: SectionName = SectionName::RoadTrips;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("Name", Text),
        FieldSpec::required("Start Date", Date),
        FieldSpec::omitempty("Start Odometer (mi.)", Float),
        FieldSpec::required("End Date", Date),
        FieldSpec::omitempty("End Odometer", Float),
        FieldSpec::required("Note", Text),
        FieldSpec::omitempty("Distance", Float),
        FieldSpec::omitempty("ID", Integer),
        FieldSpec::required("Type", Text),
        FieldSpec::required("Categories", Text),
        FieldSpec::required("Flags", Text),
    ];

    fn from_row(row: &DecodedRow) -> Self {
        Self {
            name: row.text("Name"),
            start_date: row.text("Start Date"),
            start_odometer: row.float("Start Odometer (mi.)"),
            end_date: row.text("End Date"),
            end_odometer: row.float("End Odometer"),
            note: row.text("Note"),
            distance: row.float("Distance"),
            id: row.integer("ID"),
            trip_type: row.text("Type"),
            categories: row.text("Categories"),
            flags: row.text("Flags"),
        }
    }
}

impl SectionRecord for TireRecord {
    const SECTION: SectionName = SectionName::TireLog;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("Name", Text),
        FieldSpec::required("Start Date", Date),
        FieldSpec::omitempty("Start Odometer (mi.)", Integer),
        FieldSpec::required("Size", Text),
        FieldSpec::required("Size Correction", Text),
        FieldSpec::omitempty("Distance", Integer),
        FieldSpec::required("Age", Text),
        FieldSpec::required("Note", Text),
        FieldSpec::required("Flags", Text),
        FieldSpec::omitempty("ID", Integer),
        FieldSpec::omitempty("ParentID", Integer),
    ];

    fn from_row(row: &DecodedRow) -> Self {
        Self {
            name: row.text("Name"),
            start_date: row.text("Start Date"),
            start_odometer: row.integer("Start Odometer (mi.)"),
            size: row.text("Size"),
            size_correction: row.text("Size Correction"),
            distance: row.integer("Distance"),
            age: row.text("Age"),
            note: row.text("Note"),
            flags: row.text("Flags"),
            id: row.integer("ID"),
            parent_id: row.integer("ParentID"),
        }
    }
}

impl SectionRecord for ValuationRecord {
    const SECTION: SectionName = SectionName::Valuations;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("Type", Text),
        FieldSpec::required("Date", Date),
        FieldSpec::omitempty("Odometer", Integer),
        FieldSpec::required("Price", Text),
        FieldSpec::required("Notes", Text),
        FieldSpec::required("Flags", Text),
    ];

    fn from_row(row: &DecodedRow) -> Self {
        Self {
            valuation_type: row.text("Type"),
            date: row.text("Date"),
            odometer: row.integer("Odometer"),
            price: row.text("Price"),
            notes: row.text("Notes"),
            flags: row.text("Flags"),
        }
    }
}
