//! Writes the joined inventory back to flat files.
//!
//! The full inventory is sorted by manufacturer. The supplementary reports
//! split the same data by item type, by overdue service date and by damage.

use chrono::NaiveDate;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::inventory::Inventory;
use crate::models::{format_price, InventoryItem};

pub const FULL_INVENTORY_FILE: &str = "FullInventory.txt";
pub const PAST_SERVICE_DATE_FILE: &str = "PastServiceDateInventory.txt";
pub const DAMAGED_FILE: &str = "DamagedInventory.txt";

/// Items sorted by manufacturer ignoring case, ties in join order
pub fn sorted_by_manufacturer(inventory: &Inventory) -> Vec<&InventoryItem> {
    let mut items: Vec<&InventoryItem> = inventory.items().iter().collect();
    items.sort_by_cached_key(|item| item.manufacturer.to_lowercase());
    items
}

/// Writes every item as an export line, sorted by manufacturer
pub fn write_full_inventory<W: Write>(inventory: &Inventory, writer: W) -> Result<usize> {
    write_lines(writer, sorted_by_manufacturer(inventory), InventoryItem::export_line)
}

/// Creates (or truncates) `path` and writes the full inventory into it
pub fn export_full_inventory<P: AsRef<Path>>(inventory: &Inventory, path: P) -> Result<usize> {
    let path = path.as_ref();
    let count = write_full_inventory(inventory, File::create(path)?)?;
    info!("Wrote {count} items to {}", path.display());
    Ok(count)
}

/// File name of the per-type report, e.g. `laptop` -> `LaptopInventory.txt`
pub fn item_type_file_name(item_type: &str) -> String {
    let mut chars = item_type.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{capitalized}Inventory.txt")
}

/// Items grouped per type (types in first-seen order, case-insensitive),
/// each group sorted by item id
pub fn group_by_item_type(inventory: &Inventory) -> Vec<(String, Vec<&InventoryItem>)> {
    let mut groups: Vec<(String, Vec<&InventoryItem>)> = Vec::new();
    for item in inventory.items() {
        match groups.iter().position(|(item_type, _)| item.is_type(item_type)) {
            Some(pos) => groups[pos].1.push(item),
            None => groups.push((item.item_type.clone(), vec![item])),
        }
    }
    for (_, members) in &mut groups {
        members.sort_by(|a, b| a.item_id.cmp(&b.item_id));
    }
    groups
}

/// `id,manufacturer,price,date,flag`; the type is implied by the file name
pub fn item_type_line(item: &InventoryItem) -> String {
    format!(
        "{},{},{},{},{}",
        item.item_id,
        item.manufacturer,
        format_price(item.price),
        item.service_date_str(),
        item.damaged_flag()
    )
}

/// Items serviced before `today`, oldest service date first
pub fn past_service_date(inventory: &Inventory, today: NaiveDate) -> Vec<&InventoryItem> {
    let mut items: Vec<&InventoryItem> = inventory
        .items()
        .iter()
        .filter(|item| item.service_date < today)
        .collect();
    items.sort_by_key(|item| item.service_date);
    items
}

/// Damaged items, most expensive first
pub fn damaged(inventory: &Inventory) -> Vec<&InventoryItem> {
    let mut items: Vec<&InventoryItem> = inventory
        .items()
        .iter()
        .filter(|item| item.damaged)
        .collect();
    items.sort_by(|a, b| b.price.total_cmp(&a.price));
    items
}

/// `id,manufacturer,item_type,price,date`; every item in this report is damaged
pub fn damaged_line(item: &InventoryItem) -> String {
    format!(
        "{},{},{},{},{}",
        item.item_id,
        item.manufacturer,
        item.item_type,
        format_price(item.price),
        item.service_date_str()
    )
}

/// Writes the per-type, past-service-date and damaged reports into `dir`.
///
/// Returns the paths written, in the order they were created.
pub fn export_reports<P: AsRef<Path>>(
    inventory: &Inventory,
    dir: P,
    today: NaiveDate,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::new();

    for (item_type, members) in group_by_item_type(inventory) {
        let path = dir.join(item_type_file_name(&item_type));
        let count = write_lines(File::create(&path)?, members, item_type_line)?;
        info!("Wrote {count} {item_type} items to {}", path.display());
        written.push(path);
    }

    let path = dir.join(PAST_SERVICE_DATE_FILE);
    let count = write_lines(
        File::create(&path)?,
        past_service_date(inventory, today),
        InventoryItem::export_line,
    )?;
    info!("Wrote {count} items past their service date to {}", path.display());
    written.push(path);

    let path = dir.join(DAMAGED_FILE);
    let count = write_lines(File::create(&path)?, damaged(inventory), damaged_line)?;
    info!("Wrote {count} damaged items to {}", path.display());
    written.push(path);

    Ok(written)
}

fn write_lines<W, F>(writer: W, items: Vec<&InventoryItem>, render: F) -> Result<usize>
where
    W: Write,
    F: Fn(&InventoryItem) -> String,
{
    let mut writer = BufWriter::new(writer);
    for &item in &items {
        writeln!(writer, "{}", render(item))?;
    }
    writer.flush()?;
    Ok(items.len())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
