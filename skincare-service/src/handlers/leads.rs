use crate::services::{record_lead_created, record_lead_failed};
use crate::startup::AppState;
use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use serde_json::{Map, Value};
use service_core::error::AppError;

#[derive(Debug, Serialize)]
pub struct LeadCreatedResponse {
    pub status: &'static str,
    pub id: String,
}

/// Stores one consultation request. The body is checked against the
/// configured lead schema before the store is touched.
#[tracing::instrument(skip_all)]
pub async fn create_lead(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<Map<String, Value>>, AppError>,
) -> Result<Json<LeadCreatedResponse>, AppError> {
    let lead = state.config.lead.schema.validate_payload(&payload)?;

    let store = state.store.store().map_err(|e| {
        tracing::error!(error = %e, "Lead rejected: document store not available");
        record_lead_failed("store_unavailable");
        e
    })?;

    let id = store
        .create_document(&state.config.lead.collection, lead.into_document()?)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to store lead");
            record_lead_failed("write_failed");
            e
        })?;

    record_lead_created();
    tracing::info!(lead_id = %id, "Lead stored");

    Ok(Json(LeadCreatedResponse { status: "ok", id }))
}
