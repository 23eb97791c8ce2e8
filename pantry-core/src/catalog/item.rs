//! The catalog record type.

use serde::{Deserialize, Serialize};

/// A stored catalog record.
///
/// Items are immutable once stored. A missing description serializes as
/// `null` so the wire shape of a stored item is always the same three
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, always non-empty.
    pub name: String,

    /// Free-text description, if the submission carried one.
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price.
    pub price: f64,
}
