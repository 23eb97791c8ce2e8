//! Wire requests.

use serde::Deserialize;
use serde_json::Value;

/// One catalog request, tagged by `op`.
///
/// The item in a `create_item` request stays a raw [`Value`] here;
/// typing it is the validator's job, so that a malformed submission is
/// answered with field issues rather than rejected as an unparseable
/// request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Fetch the full ordered sequence of items.
    ListItems,

    /// Submit one item for storage.
    CreateItem { item: Value },

    /// Fetch one item by position.
    GetItem { index: i64 },
}
