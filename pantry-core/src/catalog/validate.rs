//! Field validation for item submissions.
//!
//! Submissions are inspected as raw JSON rather than deserialized
//! through derive, so a wrong-typed field becomes a structured issue
//! instead of a parse fault, and every problem with a submission is
//! reported in a single pass.

use serde_json::Value;

use super::{Item, ValidationIssue};

/// Validate a raw submission and build the item to store.
///
/// Rules: `name` must be a non-empty string, `price` must be a JSON
/// number (integers are accepted and widened to f64), `description` may
/// be absent, `null`, or a string. Unknown fields are ignored.
pub fn validate_submission(submission: &Value) -> Result<Item, Vec<ValidationIssue>> {
    let Some(fields) = submission.as_object() else {
        return Err(vec![ValidationIssue::new(
            "item",
            "submission must be a JSON object",
        )]);
    };

    let mut issues = Vec::new();

    let name = match fields.get("name") {
        Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
        Some(Value::String(_)) => {
            issues.push(ValidationIssue::new("name", "must not be empty"));
            None
        }
        Some(_) => {
            issues.push(ValidationIssue::new("name", "must be a string"));
            None
        }
        None => {
            issues.push(ValidationIssue::new("name", "is required"));
            None
        }
    };

    let price = match fields.get("price") {
        Some(value) if value.is_number() => value.as_f64(),
        Some(_) => {
            issues.push(ValidationIssue::new("price", "must be a number"));
            None
        }
        None => {
            issues.push(ValidationIssue::new("price", "is required"));
            None
        }
    };

    let description = match fields.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(description)) => Some(description.clone()),
        Some(_) => {
            issues.push(ValidationIssue::new(
                "description",
                "must be a string when present",
            ));
            None
        }
    };

    match (name, price) {
        (Some(name), Some(price)) if issues.is_empty() => Ok(Item {
            name,
            description,
            price,
        }),
        _ => Err(issues),
    }
}
