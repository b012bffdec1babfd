//! Price list parsing: `item_id,price`.

use log::info;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

use super::field_parsers::{parse_price, required};
use super::{open_source, read_keyed, KeyedRecords};

/// Parses price-list rows from any reader. Columns past the price are ignored.
pub fn parse_price_list<R: Read>(reader: R, source_name: &str) -> Result<KeyedRecords<f64>> {
    read_keyed(reader, source_name, |columns| {
        parse_price(required(columns, 0, "price")?)
    })
}

/// Reads and parses a price list file
pub fn read_price_list<P: AsRef<Path>>(path: P) -> Result<KeyedRecords<f64>> {
    let path = path.as_ref();
    let prices = parse_price_list(open_source(path)?, &path.display().to_string())?;
    info!("Loaded {} prices from {}", prices.len(), path.display());
    Ok(prices)
}
