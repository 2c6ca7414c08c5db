//! Lead API endpoints
//!
//! Provides REST API endpoints for the landing page forms:
//! - POST /api/leads/waitlist - Join the waitlist
//! - POST /api/leads/assessment - Request a website assessment
//! - POST /api/leads/contact - Send a contact message
//!
//! Each endpoint re-runs the form's validation before a single insert.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::Value;
use std::sync::Arc;

use super::error::{LeadError, StoreError};
use super::store::LeadStore;
use super::validation::{AssessmentForm, ContactForm, LeadForm, WaitlistForm};

/// Lead API state containing the record store
pub struct LeadsApiState {
    pub store: LeadStore,
}

impl LeadsApiState {
    pub fn new(store: LeadStore) -> Self {
        Self { store }
    }
}

/// Create the lead API router
pub fn leads_api_router(state: Arc<LeadsApiState>) -> Router {
    Router::new()
        .route(
            WaitlistForm::KIND.api_path(),
            post(submit_handler::<WaitlistForm>),
        )
        .route(
            AssessmentForm::KIND.api_path(),
            post(submit_handler::<AssessmentForm>),
        )
        .route(
            ContactForm::KIND.api_path(),
            post(submit_handler::<ContactForm>),
        )
        .with_state(state)
}

/// Validate, insert once, return the stored record
async fn submit_handler<F: LeadForm>(
    State(state): State<Arc<LeadsApiState>>,
    Json(form): Json<F>,
) -> Result<(StatusCode, Json<Value>), LeadError> {
    let kind = F::KIND;

    let payload = form.validate().map_err(|fields| {
        tracing::info!(
            "Rejected {}: invalid fields [{}]",
            kind,
            fields.fields().collect::<Vec<_>>().join(", ")
        );
        LeadError::Validation(fields)
    })?;

    let record = state.store.insert(kind, &payload).await.map_err(|err| {
        match &err {
            StoreError::Duplicate { detail, .. } => {
                tracing::info!("Duplicate {}: {}", kind, detail)
            }
            _ => tracing::error!("Failed to store {}: {}", kind, err),
        }
        LeadError::from_store(kind, &err)
    })?;

    tracing::info!("Stored {} ({})", kind, state.store.backend_name());

    Ok((StatusCode::CREATED, Json(record)))
}
