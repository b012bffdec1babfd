//! Joins the three parsed lists into complete inventory items.

use chrono::NaiveDate;
use log::debug;

use crate::models::InventoryItem;
use crate::sources::{KeyedRecords, ManufacturerFields};

/// Price applied to items missing from the price list
pub const DEFAULT_PRICE: f64 = 0.0;

/// Builds one item per manufacturer-list id, in manufacturer-list order.
///
/// Missing prices default to [`DEFAULT_PRICE`] and missing service dates to
/// `today`. Ids that only appear in the price or service date lists are
/// dropped: the manufacturer list defines which items exist.
pub fn join_records(
    manufacturers: &KeyedRecords<ManufacturerFields>,
    prices: &KeyedRecords<f64>,
    service_dates: &KeyedRecords<NaiveDate>,
    today: NaiveDate,
) -> Vec<InventoryItem> {
    let items: Vec<InventoryItem> = manufacturers
        .iter()
        .map(|(item_id, fields)| {
            let price = prices.get(item_id).copied().unwrap_or_else(|| {
                debug!("{item_id} has no price, using {DEFAULT_PRICE}");
                DEFAULT_PRICE
            });
            let service_date = service_dates.get(item_id).copied().unwrap_or_else(|| {
                debug!("{item_id} has no service date, using {today}");
                today
            });

            InventoryItem {
                item_id: item_id.to_string(),
                manufacturer: fields.manufacturer.clone(),
                item_type: fields.item_type.clone(),
                price,
                service_date,
                damaged: fields.damaged,
            }
        })
        .collect();

    let orphans = prices
        .ids()
        .chain(service_dates.ids())
        .filter(|id| !manufacturers.contains(id))
        .count();
    if orphans > 0 {
        debug!("Dropped {orphans} price/date rows with no manufacturer entry");
    }

    items
}
