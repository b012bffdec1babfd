//! Store Inventory - electronics store stock from flat files
//!
//! Joins the manufacturer, price and service date lists into one set of
//! inventory items, then either exports them sorted by manufacturer or
//! answers interactive "manufacturer and type" queries against them.

pub mod error;
pub mod export;
pub mod inventory;
pub mod join;
pub mod models;
pub mod query;
pub mod sources;

pub use error::{FieldError, InventoryError, Result};
pub use export::{export_full_inventory, export_reports, write_full_inventory};
pub use inventory::{Inventory, SourcePaths};
pub use join::join_records;
pub use models::InventoryItem;
pub use query::{QueryMatcher, QueryOutcome};
