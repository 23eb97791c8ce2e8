//! Catalog error types

use serde::Serialize;
use thiserror::Error;

/// A single field-level problem with a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Submission field the issue applies to.
    pub field: &'static str,

    /// Human-readable description of what is wrong.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors produced by catalog operations.
///
/// Out-of-range lookups are deliberately not represented here: `get`
/// signals a miss with `None` so callers can answer with a payload
/// instead of failing the request.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The submission was rejected. The stored sequence is unchanged.
    #[error("item validation failed: {}", summarize(.issues))]
    Validation { issues: Vec<ValidationIssue> },
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}
