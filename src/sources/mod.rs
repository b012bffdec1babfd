//! Parsing of the three flat item lists.
//!
//! Every list is comma separated, has no header row and is keyed by the
//! item id in its first column.
//!
//! # Module Structure
//!
//! - [`field_parsers`] - Pure parsing functions for prices, dates and the damage flag
//! - [`manufacturer_list`] - `item_id,manufacturer,item_type[,damaged]`
//! - [`price_list`] - `item_id,price`
//! - [`service_dates`] - `item_id,MM/DD/YYYY`
//!
//! Lines are split on every comma; double quotes have no special meaning.
//!
//! Parsers are independent: none of them looks at another list. A repeated
//! id within one list overwrites the earlier fields but keeps its original
//! position.

pub mod field_parsers;
pub mod manufacturer_list;
pub mod price_list;
pub mod service_dates;

pub use manufacturer_list::{parse_manufacturer_list, read_manufacturer_list, ManufacturerFields};
pub use price_list::{parse_price_list, read_price_list};
pub use service_dates::{parse_service_dates, read_service_dates};

use log::{debug, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{FieldError, InventoryError, Result};

/// Per-source fields keyed by item id, in first-seen order
#[derive(Debug, Clone)]
pub struct KeyedRecords<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for KeyedRecords<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> KeyedRecords<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites. Returns true if the id was already present.
    pub fn insert(&mut self, item_id: String, fields: T) -> bool {
        match self.index.get(&item_id) {
            Some(&pos) => {
                self.entries[pos].1 = fields;
                true
            }
            None => {
                self.index.insert(item_id.clone(), self.entries.len());
                self.entries.push((item_id, fields));
                false
            }
        }
    }

    pub fn get(&self, item_id: &str) -> Option<&T> {
        self.index.get(item_id).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.index.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(id, fields)| (id.as_str(), fields))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}

/// Opens a source file, mapping any open failure to `SourceUnavailable`
pub(crate) fn open_source(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| InventoryError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads every row of a list and keys the parsed fields by the first column.
///
/// `parse_row` receives the trimmed columns after the id. The first row that
/// fails aborts the whole read.
pub(crate) fn read_keyed<R, T, F>(
    reader: R,
    source_name: &str,
    mut parse_row: F,
) -> Result<KeyedRecords<T>>
where
    R: Read,
    F: FnMut(&[&str]) -> std::result::Result<T, FieldError>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = KeyedRecords::new();

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let columns: Vec<&str> = record.iter().collect();
        if columns.iter().all(|c| c.is_empty()) {
            debug!("{source_name} line {line}: skipping blank line");
            continue;
        }

        let malformed = |reason: FieldError| {
            warn!("{source_name} line {line}: {reason}");
            InventoryError::MalformedRecord {
                source_name: source_name.to_string(),
                line,
                reason,
            }
        };

        let (item_id, rest) = match columns.split_first() {
            Some((id, rest)) if !id.is_empty() => (*id, rest),
            _ => return Err(malformed(FieldError::MissingField("item id"))),
        };

        let fields = parse_row(rest).map_err(malformed)?;
        if records.insert(item_id.to_string(), fields) {
            debug!("{source_name} line {line}: {item_id} overrides an earlier row");
        }
    }

    Ok(records)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
