//! The joined inventory and its filter query.

use chrono::NaiveDate;
use log::info;
use std::path::PathBuf;

use crate::error::Result;
use crate::join::join_records;
use crate::models::InventoryItem;
use crate::sources::{read_manufacturer_list, read_price_list, read_service_dates};

pub const DEFAULT_MANUFACTURER_LIST: &str = "ManufacturerList.txt";
pub const DEFAULT_PRICE_LIST: &str = "PriceList.txt";
pub const DEFAULT_SERVICE_DATES_LIST: &str = "ServiceDatesList.txt";

/// Locations of the three input lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub manufacturers: PathBuf,
    pub prices: PathBuf,
    pub service_dates: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self {
            manufacturers: PathBuf::from(DEFAULT_MANUFACTURER_LIST),
            prices: PathBuf::from(DEFAULT_PRICE_LIST),
            service_dates: PathBuf::from(DEFAULT_SERVICE_DATES_LIST),
        }
    }
}

/// Owns every joined item for the lifetime of a run.
///
/// Built once and never mutated; query and export code borrow it.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    /// Reads the three lists in turn and joins them.
    ///
    /// Fails on the first list that cannot be opened or contains a
    /// malformed row.
    pub fn load(paths: &SourcePaths, today: NaiveDate) -> Result<Self> {
        let manufacturers = read_manufacturer_list(&paths.manufacturers)?;
        let prices = read_price_list(&paths.prices)?;
        let service_dates = read_service_dates(&paths.service_dates)?;

        let items = join_records(&manufacturers, &prices, &service_dates, today);
        info!("Joined {} inventory items", items.len());
        Ok(Self { items })
    }

    /// All items in join order
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching the given type and/or manufacturer, ignoring case.
    ///
    /// A `None` filter accepts everything, so `filter(None, None)` returns
    /// every item in join order.
    pub fn filter(
        &self,
        item_type: Option<&str>,
        manufacturer: Option<&str>,
    ) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| item_type.map_or(true, |t| item.is_type(t)))
            .filter(|item| manufacturer.map_or(true, |m| item.is_from(m)))
            .collect()
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
