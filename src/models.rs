use chrono::NaiveDate;

/// Date format shared by the service-date source and every export
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Flag token marking a damaged item in the manufacturer list and exports
pub const DAMAGED_FLAG: &str = "damaged";

/// One inventory unit, joined from the manufacturer, price and service-date lists
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub item_id: String,
    pub manufacturer: String,
    pub item_type: String,
    pub price: f64,
    pub service_date: NaiveDate,
    pub damaged: bool,
}

impl InventoryItem {
    /// Returns true if the manufacturer matches, ignoring case
    pub fn is_from(&self, manufacturer: &str) -> bool {
        eq_ignore_case(&self.manufacturer, manufacturer)
    }

    /// Returns true if the item type matches, ignoring case
    pub fn is_type(&self, item_type: &str) -> bool {
        eq_ignore_case(&self.item_type, item_type)
    }

    /// Service date rendered as MM/DD/YYYY
    pub fn service_date_str(&self) -> String {
        self.service_date.format(DATE_FORMAT).to_string()
    }

    /// The damage flag column: `damaged` or empty
    pub fn damaged_flag(&self) -> &'static str {
        if self.damaged {
            DAMAGED_FLAG
        } else {
            ""
        }
    }

    /// `id,manufacturer,item_type,price` as shown in query answers
    pub fn summary_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.item_id,
            self.manufacturer,
            self.item_type,
            format_price(self.price)
        )
    }

    /// `id,manufacturer,item_type,price,MM/DD/YYYY,flag` as written to the full inventory
    pub fn export_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.item_id,
            self.manufacturer,
            self.item_type,
            format_price(self.price),
            self.service_date_str(),
            self.damaged_flag()
        )
    }
}

/// Renders a price the way the store's files always have: `450.0`, `99.99`.
///
/// `Debug` for `f64` gives the shortest round-trip form and keeps the
/// trailing `.0` on integral values, which `Display` drops.
pub fn format_price(price: f64) -> String {
    format!("{price:?}")
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
