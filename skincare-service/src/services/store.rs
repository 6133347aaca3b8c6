use crate::config::DatabaseConfig;
use crate::services::MongoStore;
use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;
use std::sync::Arc;

/// The document store collaborator. Implementations assign the identifier
/// and stamp `created_at` / `updated_at` on insert.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database.
    fn name(&self) -> &str;

    async fn create_document(&self, collection: &str, document: Document)
        -> Result<String, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;
}

/// Outcome of the one-time store capability check done at startup.
#[derive(Clone)]
pub enum StoreStatus {
    /// `DATABASE_URL` or `DATABASE_NAME` is not set.
    Unconfigured,
    /// Configured, but the client could not be created.
    Unavailable(String),
    Ready(Arc<dyn DocumentStore>),
}

impl StoreStatus {
    pub async fn resolve(config: &DatabaseConfig) -> Self {
        let (Some(url), Some(name)) = (config.url.as_deref(), config.name.as_deref()) else {
            tracing::warn!("DATABASE_URL / DATABASE_NAME not set; lead capture is disabled");
            return StoreStatus::Unconfigured;
        };

        match MongoStore::connect(url, name).await {
            Ok(store) => StoreStatus::Ready(Arc::new(store)),
            Err(e) => {
                tracing::error!(error = %e, "Document store unavailable; lead capture is disabled");
                StoreStatus::Unavailable(e.to_string())
            }
        }
    }

    pub fn ready(store: impl DocumentStore + 'static) -> Self {
        StoreStatus::Ready(Arc::new(store))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, StoreStatus::Ready(_))
    }

    /// The store handle, or the error a write path should report.
    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        match self {
            StoreStatus::Ready(store) => Ok(store),
            StoreStatus::Unconfigured => Err(AppError::StoreUnavailable(
                "DATABASE_URL and DATABASE_NAME are not configured".to_string(),
            )),
            StoreStatus::Unavailable(reason) => Err(AppError::StoreUnavailable(reason.clone())),
        }
    }
}

impl std::fmt::Debug for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreStatus::Unconfigured => write!(f, "Unconfigured"),
            StoreStatus::Unavailable(reason) => f.debug_tuple("Unavailable").field(reason).finish(),
            StoreStatus::Ready(store) => f.debug_tuple("Ready").field(&store.name()).finish(),
        }
    }
}
