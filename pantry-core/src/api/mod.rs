//! JSON request/response surface for the catalog.
//!
//! A pure translator layer: it parses `op`-tagged request objects,
//! drives the catalog, and shapes the result into a status-plus-body
//! envelope. It owns no state of its own; the catalog is borrowed from
//! the caller for each dispatch.

pub mod request;
pub mod response;
pub mod session;

pub use request::Request;
pub use response::Response;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::debug;

use crate::catalog::{Catalog, CatalogError};

/// Parse one raw request.
pub fn parse_request(input: &str) -> Result<Request> {
    serde_json::from_str(input).context("failed to parse request")
}

/// Dispatch a request against the catalog.
pub fn handle(catalog: &mut Catalog, request: Request) -> Response {
    match request {
        Request::ListItems => {
            debug!(count = catalog.len(), "listing items");
            Response::ok(json!(catalog.list()))
        }
        Request::CreateItem { item } => match catalog.create(&item) {
            Ok(stored) => Response::created(json!(stored)),
            Err(CatalogError::Validation { issues }) => {
                debug!(issues = issues.len(), "rejecting submission");
                Response::unprocessable(&issues)
            }
        },
        Request::GetItem { index } => match catalog.get(index) {
            Some(item) => Response::ok(json!(item)),
            None => {
                debug!(index, len = catalog.len(), "index out of range");
                Response::not_found()
            }
        },
    }
}
