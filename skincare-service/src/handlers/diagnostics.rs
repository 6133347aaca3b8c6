//! Manual inspection endpoint for store reachability. Always answers 200;
//! every store problem is rendered into the report instead.

use crate::config::DatabaseConfig;
use crate::services::StoreStatus;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

const MAX_ERROR_CHARS: usize = 50;
const MAX_COLLECTIONS: usize = 10;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(inspect(&state.store, &state.config.database).await)
}

pub async fn inspect(store: &StoreStatus, database: &DatabaseConfig) -> DiagnosticReport {
    let mut connection_status = "Not Connected";
    let mut collections = Vec::new();

    let status = match store {
        StoreStatus::Unconfigured => {
            "❌ Not configured (set DATABASE_URL and DATABASE_NAME)".to_string()
        }
        StoreStatus::Unavailable(reason) => format!("❌ Error: {}", truncate(reason)),
        StoreStatus::Ready(store) => {
            connection_status = "Connected";
            match store.list_collection_names().await {
                Ok(names) => {
                    collections = names.into_iter().take(MAX_COLLECTIONS).collect();
                    "✅ Connected & Working".to_string()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Listing collections failed");
                    format!("⚠️  Connected but Error: {}", truncate(&e.to_string()))
                }
            }
        }
    };

    DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: status,
        database_url: set_marker(database.url.is_some()),
        database_name: set_marker(database.name.is_some()),
        connection_status: connection_status.to_string(),
        collections,
    }
}

fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
