//! Service date list parsing: `item_id,MM/DD/YYYY`.

use chrono::NaiveDate;
use log::info;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

use super::field_parsers::{parse_service_date, required};
use super::{open_source, read_keyed, KeyedRecords};

pub fn parse_service_dates<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<KeyedRecords<NaiveDate>> {
    read_keyed(reader, source_name, |columns| {
        parse_service_date(required(columns, 0, "service date")?)
    })
}

/// Reads and parses a service date list file
pub fn read_service_dates<P: AsRef<Path>>(path: P) -> Result<KeyedRecords<NaiveDate>> {
    let path = path.as_ref();
    let dates = parse_service_dates(open_source(path)?, &path.display().to_string())?;
    info!("Loaded {} service dates from {}", dates.len(), path.display());
    Ok(dates)
}
