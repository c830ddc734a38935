use serde::Serialize;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation failure on a single field.
    pub fn invalid_field(field: &str, code: &str, message: impl Into<String>) -> Self {
        CoreError::Validation(vec![ValidationIssue::new(field, code, message)])
    }
}

/// One field-level validation failure, serialized into the `error` array of
/// a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Path from the payload root to the offending field.
    pub path: Vec<String>,
    /// Machine-readable rule name (`length`, `range`, `email`, ...).
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(issues_from(&errors))
    }
}

/// Flatten derive-validator output into issues, ordered by field path so
/// responses are deterministic.
pub fn issues_from(errors: &validator::ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = camel_case(&field);
            field_errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for '{field}'"));
                ValidationIssue {
                    path: vec![field.clone()],
                    code: err.code.to_string(),
                    message,
                }
            })
        })
        .collect();

    issues.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.code.cmp(&b.code)));
    issues
}

/// Payload fields travel in camelCase; validator reports Rust field names.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
