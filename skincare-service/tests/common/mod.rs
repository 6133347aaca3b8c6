#![allow(dead_code)]

use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use skincare_service::config::{DatabaseConfig, LeadConfig, SkincareConfig};
use skincare_service::services::{DocumentStore, MemoryStore, StoreStatus};
use skincare_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

pub fn test_config() -> SkincareConfig {
    SkincareConfig {
        common: CoreConfig { port: 0 },
        database: DatabaseConfig {
            url: Some("mongodb://localhost:27017".to_string()),
            name: Some("skincare_test".to_string()),
        },
        lead: LeadConfig::default(),
        otlp_endpoint: None,
    }
}

impl TestApp {
    pub async fn spawn_with_store(store: StoreStatus) -> Self {
        Self::spawn(test_config(), store).await
    }

    pub async fn spawn(config: SkincareConfig, store: StoreStatus) -> Self {
        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to answer its health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_lead(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/leads", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn memory_store() -> (MemoryStore, StoreStatus) {
    let store = MemoryStore::new("skincare_test");
    let status = StoreStatus::ready(store.clone());
    (store, status)
}

/// Store whose every operation fails, standing in for a dead database.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn create_document(
        &self,
        _collection: &str,
        _document: Document,
    ) -> Result<String, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "server selection timeout: no available servers"
        )))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "server selection timeout: no available servers"
        )))
    }
}
