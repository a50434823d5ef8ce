//! Column mapping for a section's CSV header row
//!
//! Binds each field of a record shape to the index of its column in the
//! header row actually present in the file. Extra columns are ignored.
//! Only columns flagged optional may be absent; they map to nothing and
//! decode to zero values.

use csv::StringRecord;
use std::collections::HashMap;

use super::shapes::RecordShape;
use crate::{Error, Result};

/// Column name to index mapping for one section
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Index of each shape field's column, in shape order
    pub field_indices: Vec<Option<usize>>,
}

impl ColumnMapping {
    /// Bind a header row to a record shape
    ///
    /// Fails on the first required field whose column is absent.
    pub fn analyze(headers: &StringRecord, shape: &RecordShape) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated names
            name_to_index
                .entry(header.trim().to_string())
                .or_insert(index);
        }

        let mut field_indices = Vec::with_capacity(shape.fields.len());
        for field in shape.fields {
            let index = name_to_index.get(field.column).copied();
            if index.is_none() && !field.optional {
                return Err(Error::missing_column(shape.section, field.column));
            }
            field_indices.push(index);
        }

        Ok(ColumnMapping {
            name_to_index,
            field_indices,
        })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of header columns and number of shape fields bound to one
    pub fn stats(&self) -> (usize, usize) {
        (
            self.name_to_index.len(),
            self.field_indices.iter().filter(|i| i.is_some()).count(),
        )
    }
}
