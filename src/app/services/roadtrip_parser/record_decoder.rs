//! Record decoding for a single section
//!
//! Treats a section's bytes as a standalone CSV document (its own header row
//! followed by zero or more data rows) and decodes each data row into a
//! typed record, preserving row order.

use csv::StringRecord;
use tracing::debug;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{CellContext, get_cell, parse_field};
use super::shapes::{DecodedRow, RecordShape, SectionRecord};
use crate::{Error, Result};

/// Decode a section's bytes into field values according to a shape
///
/// A section with no data rows decodes to an empty sequence without its
/// header row being checked. Otherwise every required column must be
/// present, and the first cell that fails coercion aborts the decode.
pub fn decode_rows(section_bytes: &[u8], shape: &RecordShape, trim: bool) -> Result<Vec<DecodedRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(section_bytes);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv(shape.section, e))?
        .clone();

    let records = csv_reader
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()
        .map_err(|e| Error::csv(shape.section, e))?;

    if records.is_empty() {
        debug!(section = %shape.section, "Section has no data rows");
        return Ok(Vec::new());
    }

    let mapping = ColumnMapping::analyze(&headers, shape)?;
    let (total_columns, bound_fields) = mapping.stats();
    debug!(
        section = %shape.section,
        total_columns,
        bound_fields,
        shape_fields = shape.fields.len(),
        "Column mapping built"
    );

    records
        .iter()
        .enumerate()
        .map(|(index, record)| decode_row(record, &mapping, shape, index + 1, trim))
        .collect()
}

/// Decode a section's bytes into typed records
pub fn decode<R: SectionRecord>(section_bytes: &[u8], trim: bool) -> Result<Vec<R>> {
    let rows = decode_rows(section_bytes, &R::shape(), trim)?;
    Ok(rows.iter().map(R::from_row).collect())
}

fn decode_row(
    record: &StringRecord,
    mapping: &ColumnMapping,
    shape: &RecordShape,
    row: usize,
    trim: bool,
) -> Result<DecodedRow> {
    let context = CellContext {
        section: shape.section,
        row,
    };

    let values = shape
        .fields
        .iter()
        .zip(&mapping.field_indices)
        .map(|(field, index)| parse_field(get_cell(record, *index), field, context, trim))
        .collect::<Result<Vec<_>>>()?;

    Ok(DecodedRow::new(shape.fields, values))
}
