//! Free-text inventory queries and the interactive query session.
//!
//! A query line is split into words. Each word is resolved against the
//! known manufacturers and item types by case-insensitive substring
//! containment, the matching items are ranked by price, and the most
//! expensive one is suggested together with the closest-priced item of the
//! same type from another manufacturer.

use log::{debug, info};
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::inventory::Inventory;
use crate::models::{eq_ignore_case, InventoryItem};

pub const WELCOME: &str = "Welcome to the Interactive Inventory Query System!";
pub const PROMPT: &str = "Enter item manufacturer and type (or 'q' to quit): ";
pub const NO_MATCH: &str = "No such item in inventory";
pub const FAREWELL: &str = "Goodbye!";
pub const QUIT_TOKEN: &str = "q";

/// Manufacturer and item type values resolved from a query line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    pub manufacturer: Option<String>,
    pub item_type: Option<String>,
}

/// Resolves each word of `query` to a known manufacturer and/or item type.
///
/// A word resolves to the value of the first item (in inventory order)
/// whose manufacturer or type contains it, ignoring case. Every word is
/// checked against both categories and the last word that resolves in a
/// category wins. Manufacturer and type are resolved independently, so a
/// short word may pick a manufacturer that has no item of the resolved type.
pub fn resolve_candidates(inventory: &Inventory, query: &str) -> Candidates {
    let mut candidates = Candidates::default();

    for token in query.split_whitespace() {
        let needle = token.to_lowercase();

        if let Some(item) = inventory
            .items()
            .iter()
            .find(|item| item.manufacturer.to_lowercase().contains(&needle))
        {
            debug!("'{token}' resolves to manufacturer {}", item.manufacturer);
            candidates.manufacturer = Some(item.manufacturer.clone());
        }

        if let Some(item) = inventory
            .items()
            .iter()
            .find(|item| item.item_type.to_lowercase().contains(&needle))
        {
            debug!("'{token}' resolves to item type {}", item.item_type);
            candidates.item_type = Some(item.item_type.clone());
        }
    }

    candidates
}

/// Sorts by price, most expensive first. Equal prices keep their order.
pub fn rank_by_price(mut items: Vec<&InventoryItem>) -> Vec<&InventoryItem> {
    items.sort_by(|a, b| b.price.total_cmp(&a.price));
    items
}

/// Finds the item of the same type from a different manufacturer whose
/// price is closest to `best`. Ties go to the first such item in inventory
/// order.
pub fn closest_alternative<'a>(
    inventory: &'a Inventory,
    best: &InventoryItem,
) -> Option<&'a InventoryItem> {
    inventory
        .items()
        .iter()
        .filter(|item| item.is_type(&best.item_type) && !item.is_from(&best.manufacturer))
        .min_by(|a, b| {
            let diff_a = (a.price - best.price).abs();
            let diff_b = (b.price - best.price).abs();
            diff_a.total_cmp(&diff_b)
        })
}

/// Answer to one query line
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<'a> {
    NoMatch,
    Found {
        best: &'a InventoryItem,
        alternative: Option<&'a InventoryItem>,
    },
}

impl QueryOutcome<'_> {
    /// Console lines for this answer
    pub fn lines(&self) -> Vec<String> {
        match self {
            QueryOutcome::NoMatch => vec![NO_MATCH.to_string()],
            QueryOutcome::Found { best, alternative } => {
                let mut lines = vec![format!("Your item is: {}", best.summary_line())];
                if let Some(alt) = alternative {
                    lines.push(format!("You may also consider: {}", alt.summary_line()));
                }
                lines
            }
        }
    }
}

/// Where the interactive session is after handling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Done,
}

/// Answers free-text queries against a loaded inventory
pub struct QueryMatcher<'a> {
    inventory: &'a Inventory,
}

impl<'a> QueryMatcher<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }

    /// Answers a single query line
    pub fn answer(&self, query: &str) -> QueryOutcome<'a> {
        let candidates = resolve_candidates(self.inventory, query);
        let (Some(item_type), Some(manufacturer)) = (
            candidates.item_type.as_deref(),
            candidates.manufacturer.as_deref(),
        ) else {
            debug!("'{query}' did not resolve to both a manufacturer and a type: {candidates:?}");
            return QueryOutcome::NoMatch;
        };

        let matches = self.inventory.filter(Some(item_type), Some(manufacturer));
        let Some(&best) = rank_by_price(matches).first() else {
            return QueryOutcome::NoMatch;
        };

        QueryOutcome::Found {
            best,
            alternative: closest_alternative(self.inventory, best),
        }
    }

    /// Handles one raw input line, writing any answer to `output`
    pub fn handle_line<W: Write>(&self, line: &str, output: &mut W) -> Result<SessionState> {
        let query = line.trim();
        if eq_ignore_case(query, QUIT_TOKEN) {
            writeln!(output, "{FAREWELL}")?;
            return Ok(SessionState::Done);
        }

        for answer in self.answer(query).lines() {
            writeln!(output, "{answer}")?;
        }
        Ok(SessionState::AwaitingInput)
    }

    /// Runs the prompt loop until the quit token or end of input
    pub fn run_session<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        info!("Starting query session over {} items", self.inventory.len());
        writeln!(output, "{WELCOME}")?;

        let mut state = SessionState::AwaitingInput;
        let mut line = String::new();
        while state == SessionState::AwaitingInput {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("Input closed, ending query session");
                writeln!(output)?;
                break;
            }
            state = self.handle_line(&line, &mut output)?;
        }

        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
