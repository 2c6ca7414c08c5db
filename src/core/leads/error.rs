//! Server-side error types for lead submission

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::submission::{ApiErrorBody, DUPLICATE_ENTRY_CODE, FormKind, VALIDATION_FAILED_CODE};
use super::validation::FieldErrors;

/// Postgres `unique_violation`, as reported by PostgREST
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// Errors from a datastore insert
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate entry in {table}: {detail}")]
    Duplicate { table: &'static str, detail: String },

    #[error("Store rejected insert ({status}): {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected store response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Lead store not configured: {0}")]
    NotConfigured(String),
}

/// Errors returned by the lead API handlers
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("{}", .0.duplicate_message())]
    Duplicate(FormKind),

    #[error("Store rejected the {0}")]
    StoreRejected(FormKind),

    #[error("Store unavailable while saving the {0}")]
    StoreUnavailable(FormKind),
}

impl LeadError {
    /// Classify a store failure for the given form
    pub fn from_store(kind: FormKind, err: &StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => LeadError::Duplicate(kind),
            StoreError::Rejected { .. } | StoreError::Serialization(_) => {
                LeadError::StoreRejected(kind)
            }
            StoreError::Http(_) | StoreError::InvalidResponse(_) | StoreError::NotConfigured(_) => {
                LeadError::StoreUnavailable(kind)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            LeadError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LeadError::Duplicate(_) => StatusCode::CONFLICT,
            LeadError::StoreRejected(_) | LeadError::StoreUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LeadError::Validation(_) => VALIDATION_FAILED_CODE,
            LeadError::Duplicate(_) => DUPLICATE_ENTRY_CODE,
            LeadError::StoreRejected(_) => "STORE_REJECTED",
            LeadError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }
}

/// Convert LeadError to API response
impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = ApiErrorBody::new(self.to_string(), self.code());
        if let LeadError::Validation(fields) = self {
            body = body.with_fields(fields);
        }

        (status, Json(body)).into_response()
    }
}
