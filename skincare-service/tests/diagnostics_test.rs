mod common;

use common::{memory_store, test_config, FailingStore, TestApp};
use serde_json::json;
use skincare_service::config::DatabaseConfig;
use skincare_service::services::StoreStatus;

async fn diagnostic(app: &TestApp) -> serde_json::Value {
    let response = app.get("/test").await;
    assert_eq!(response.status().as_u16(), 200);
    response.json().await.expect("Failed to parse JSON")
}

#[tokio::test]
async fn reports_working_store_with_collections() {
    let (_store, status) = memory_store();
    let app = TestApp::spawn_with_store(status).await;
    app.post_lead(&json!({ "name": "Giulia", "email": "g@example.com" }))
        .await;

    let body = diagnostic(&app).await;

    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
    assert_eq!(body["collections"], json!(["lead"]));
}

#[tokio::test]
async fn reports_store_errors_without_failing() {
    let app = TestApp::spawn_with_store(StoreStatus::ready(FailingStore)).await;

    let body = diagnostic(&app).await;

    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️  Connected but Error: "));
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn reports_unavailable_store() {
    let app = TestApp::spawn_with_store(StoreStatus::Unavailable(
        "invalid connection string".to_string(),
    ))
    .await;

    let body = diagnostic(&app).await;

    assert_eq!(body["database"], "❌ Error: invalid connection string");
    assert_eq!(body["connection_status"], "Not Connected");
}

#[tokio::test]
async fn reports_misconfigured_store() {
    let mut config = test_config();
    config.database = DatabaseConfig {
        url: None,
        name: Some("skincare".to_string()),
    };
    let store = StoreStatus::resolve(&config.database).await;
    let app = TestApp::spawn(config, store).await;

    let body = diagnostic(&app).await;

    assert!(body["database"]
        .as_str()
        .unwrap()
        .starts_with("❌ Not configured"));
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "✅ Set");
}
