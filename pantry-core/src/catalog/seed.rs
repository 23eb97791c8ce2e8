//! Seed-file loading.
//!
//! A seed file is a JSON array of item submissions applied to a fresh
//! catalog at startup. Entries pass through the same validation as a
//! `create_item` request. Seeding is initial input, not persistence:
//! the file is read once and nothing is ever written back.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::info;

use super::Catalog;

/// Load every submission from `path` into the catalog, in file order.
///
/// Any invalid entry aborts with an error naming its position; the
/// caller is expected to treat that as a startup failure.
pub fn load_into(catalog: &mut Catalog, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;

    let entries: Vec<Value> = serde_json::from_str(&content)
        .with_context(|| format!("seed file {} is not a JSON array", path.display()))?;

    for (position, entry) in entries.iter().enumerate() {
        if let Err(err) = catalog.create(entry) {
            bail!("seed entry {position} in {}: {err}", path.display());
        }
    }

    info!(loaded = entries.len(), path = %path.display(), "seeded catalog");
    Ok(entries.len())
}
