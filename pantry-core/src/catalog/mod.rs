//! Pantry Catalog - the in-memory item store
//!
//! Holds an ordered sequence of items for the lifetime of the process.
//! Items are appended by `create`, fetched positionally by `get`, and
//! never mutated or removed. The catalog is an owned value handed to
//! request handling by mutable reference; there is no module-level
//! state, and no concurrency protection because a catalog is only ever
//! driven by a single synchronous session.

mod error;
mod item;
pub mod seed;
pub mod validate;

pub use error::{CatalogError, ValidationIssue};
pub use item::Item;


use serde_json::Value;
use tracing::debug;

/// The ordered, process-lifetime collection of submitted items.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate a raw submission and append it to the sequence.
    ///
    /// On success the stored item is returned. On failure the sequence
    /// is exactly as it was before the call.
    pub fn create(&mut self, submission: &Value) -> Result<&Item, CatalogError> {
        let item = validate::validate_submission(submission)
            .map_err(|issues| CatalogError::Validation { issues })?;

        debug!(name = %item.name, price = item.price, "storing item");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Positional fetch.
    ///
    /// The index is signed so that negative values from the wire are an
    /// ordinary miss rather than a conversion panic or wraparound.
    pub fn get(&self, index: i64) -> Option<&Item> {
        let index = usize::try_from(index).ok()?;
        self.items.get(index)
    }
}
