//! Field parsing utilities for section records
//!
//! Coerces raw CSV cells into the semantic types declared by a record shape.

use csv::StringRecord;

use super::shapes::{FieldKind, FieldSpec, FieldValue};
use crate::app::models::SectionName;
use crate::{Error, Result};

/// Location of the cell being coerced, for error reporting
#[derive(Debug, Clone, Copy)]
pub struct CellContext {
    pub section: SectionName,
    /// 1-based data row index within the section
    pub row: usize,
}

/// Coerce one cell according to its field spec
///
/// A missing cell yields the kind's zero value, as does a blank cell in a
/// text, date or blank-allowed numeric field. A blank cell in any other
/// numeric field, or a numeric cell that does not parse, is a row decode
/// error.
pub fn parse_field(
    raw: Option<&str>,
    field: &FieldSpec,
    context: CellContext,
    trim: bool,
) -> Result<FieldValue> {
    let value = match raw {
        Some(value) if trim => value.trim(),
        Some(value) => value,
        None => return Ok(FieldValue::zero(field.kind)),
    };

    match field.kind {
        FieldKind::Text | FieldKind::Date => Ok(FieldValue::Text(value.to_string())),
        FieldKind::Integer => {
            parse_number(value, field, context, |s| s.parse::<i64>().map_err(|e| e.to_string()))
                .map(|n| n.map_or(FieldValue::zero(field.kind), FieldValue::Integer))
        }
        FieldKind::Float => {
            parse_number(value, field, context, |s| s.parse::<f64>().map_err(|e| e.to_string()))
                .map(|n| n.map_or(FieldValue::zero(field.kind), FieldValue::Float))
        }
    }
}

fn parse_number<T>(
    value: &str,
    field: &FieldSpec,
    context: CellContext,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<Option<T>> {
    if value.trim().is_empty() {
        if field.allow_blank {
            return Ok(None);
        }
        return Err(Error::row_decode(
            context.section,
            context.row,
            field.column,
            value,
            "is empty",
        ));
    }

    parse(value).map(Some).map_err(|e| {
        Error::row_decode(
            context.section,
            context.row,
            field.column,
            value,
            format!("is not a valid {:?} ({})", field.kind, e),
        )
    })
}

/// Get a cell by column index, `None` when the index is absent or the row is short
pub fn get_cell(record: &StringRecord, index: Option<usize>) -> Option<&str> {
    index.and_then(|i| record.get(i))
}
