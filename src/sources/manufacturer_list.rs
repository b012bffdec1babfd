//! Manufacturer list parsing: `item_id,manufacturer,item_type[,damaged]`.
//!
//! This list defines which items exist; the other two only enrich them.

use log::info;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

use super::field_parsers::{parse_damaged_flag, required};
use super::{open_source, read_keyed, KeyedRecords};

/// Manufacturer-list columns for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerFields {
    pub manufacturer: String,
    pub item_type: String,
    pub damaged: bool,
}

/// Parses manufacturer-list rows from any reader.
///
/// # Arguments
/// * `reader` - Source of comma-separated lines
/// * `source_name` - Name used in error messages (usually the file name)
pub fn parse_manufacturer_list<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<KeyedRecords<ManufacturerFields>> {
    read_keyed(reader, source_name, |columns| {
        Ok(ManufacturerFields {
            manufacturer: required(columns, 0, "manufacturer")?.to_string(),
            item_type: required(columns, 1, "item type")?.to_string(),
            damaged: parse_damaged_flag(columns.get(2).copied()),
        })
    })
}

/// Reads and parses a manufacturer list file
pub fn read_manufacturer_list<P: AsRef<Path>>(
    path: P,
) -> Result<KeyedRecords<ManufacturerFields>> {
    let path = path.as_ref();
    let records = parse_manufacturer_list(open_source(path)?, &path.display().to_string())?;
    info!("Loaded {} items from {}", records.len(), path.display());
    Ok(records)
}
