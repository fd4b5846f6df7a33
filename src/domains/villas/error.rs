//! Villa-specific error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name mapped to the validation messages raised for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors that can occur during villa operations.
#[derive(Debug, Error)]
pub enum VillaError {
    /// The request was malformed, missing, or conflicts with the path.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The record failed field-level validation.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(FieldErrors),

    /// A villa with the same name (ignoring case) already exists.
    #[error("Villa with name {0} already exists")]
    DuplicateName(String),

    /// No villa has the requested id.
    #[error("Villa not found: {0}")]
    NotFound(i64),

    /// The caller supplied an id on create; ids are assigned by the store.
    #[error("Villa id must not be supplied on create (got {0})")]
    IdSupplied(i64),

    /// The patch document could not be applied.
    #[error("Patch failed: {0}")]
    Patch(String),
}

impl VillaError {
    /// Create a new "bad request" error.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create a validation error carrying a single field message.
    pub fn field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![msg.into()]);
        Self::Validation(errors)
    }

    /// Create a new "patch failed" error.
    pub fn patch(msg: impl Into<String>) -> Self {
        Self::Patch(msg.into())
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) | Self::DuplicateName(_) | Self::Patch(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::IdSupplied(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors.clone()),
            Self::DuplicateName(_) => {
                let mut errors = FieldErrors::new();
                errors.insert("name".to_string(), vec![self.to_string()]);
                Some(errors)
            }
            _ => None,
        }
    }
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// JSON body returned with every error status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl IntoResponse for VillaError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            status: status.as_u16(),
            error: self.to_string(),
            errors: self.field_errors(),
        };
        (status, Json(body)).into_response()
    }
}
