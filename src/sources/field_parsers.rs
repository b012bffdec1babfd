//! Field parsing utilities for the item lists.
//!
//! Pure functions over single, already trimmed columns.

use chrono::NaiveDate;
use log::debug;

use crate::error::FieldError;
use crate::models::{DATE_FORMAT, DAMAGED_FLAG};

/// Parses a price column as f64.
///
/// Integer prices (`450`) and decimal prices (`450.00`) both parse; the
/// result is always a float.
pub fn parse_price(price_str: &str) -> Result<f64, FieldError> {
    let price = price_str
        .parse::<f64>()
        .map_err(|_| FieldError::InvalidPrice(price_str.to_string()))?;
    if !price.is_finite() {
        return Err(FieldError::InvalidPrice(price_str.to_string()));
    }
    debug!("Parsed price {price_str} as {price}");
    Ok(price)
}

/// Parses a service date in the fixed MM/DD/YYYY format
pub fn parse_service_date(date_str: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|_| FieldError::InvalidDate(date_str.to_string()))
}

/// Interprets the optional fourth manufacturer-list column.
///
/// Only the word `damaged` (any case) marks an item as damaged; an absent
/// or different value means undamaged.
pub fn parse_damaged_flag(flag: Option<&str>) -> bool {
    flag.is_some_and(|f| f.to_lowercase() == DAMAGED_FLAG)
}

/// Returns the column at `index` or a `MissingField` error naming it
pub fn required<'a>(
    columns: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, FieldError> {
    columns
        .get(index)
        .copied()
        .ok_or(FieldError::MissingField(name))
}

#[cfg(test)]
#[path = "field_parsers_tests.rs"]
mod tests;
