//! Newline-delimited request sessions.
//!
//! One catalog instance serves a whole session, so state accumulates
//! across requests and disappears when the session ends. Each non-blank
//! input line is one request and produces exactly one response line, in
//! order. Malformed requests are answered with a 400 response; only
//! transport failures abort the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::Catalog;

use super::{handle, parse_request, Response};

/// Drive a request/response session until the reader is exhausted.
///
/// Returns the number of requests served.
pub fn run<R: BufRead, W: Write>(catalog: &mut Catalog, reader: R, mut writer: W) -> Result<usize> {
    let mut served = 0usize;

    for line in reader.lines() {
        let line = line.context("failed to read request line")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = evaluate(catalog, &line);
        let encoded = serde_json::to_string(&response).context("failed to encode response")?;
        writeln!(writer, "{encoded}").context("failed to write response")?;
        served += 1;
    }

    info!(served, items = catalog.len(), "session finished");
    Ok(served)
}

/// Handle a single raw request string.
pub fn evaluate(catalog: &mut Catalog, input: &str) -> Response {
    match parse_request(input.trim()) {
        Ok(request) => handle(catalog, request),
        Err(err) => {
            debug!(error = %err, "rejecting malformed request");
            Response::bad_request(format!("{err:#}"))
        }
    }
}
