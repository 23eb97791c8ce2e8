//! Wire responses.
//!
//! Every request gets a response envelope carrying an HTTP-style status
//! code and a JSON body. Misses and rejected submissions are ordinary
//! responses, never transport errors, so a session survives them.

use serde::Serialize;
use serde_json::{json, Value};

use crate::catalog::ValidationIssue;

/// Response envelope: status code plus body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    /// 200 with the given body.
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// 201 for a stored submission.
    pub fn created(body: Value) -> Self {
        Self { status: 201, body }
    }

    /// 400 for a request line that could not be understood.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: 400,
            body: json!({"error": message.into()}),
        }
    }

    /// 404 for an out-of-range index. The body is always this exact
    /// payload.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: json!({"error": "Item not found"}),
        }
    }

    /// 422 for a submission that failed field validation.
    pub fn unprocessable(issues: &[ValidationIssue]) -> Self {
        Self {
            status: 422,
            body: json!({"error": "validation failed", "issues": issues}),
        }
    }
}
