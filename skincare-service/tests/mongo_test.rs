mod common;

use common::TestApp;
use mongodb::bson::{doc, oid::ObjectId};
use serde_json::json;
use skincare_service::config::DatabaseConfig;
use skincare_service::services::{DocumentStore, MongoStore, StoreStatus};

fn mongo_uri() -> String {
    std::env::var("TEST_MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

#[tokio::test]
#[ignore = "Requires MongoDB (TEST_MONGODB_URI, default mongodb://localhost:27017)"]
async fn lead_round_trip_through_mongodb() {
    let db_name = format!("skincare_test_{}", uuid::Uuid::new_v4().simple());
    let database = DatabaseConfig {
        url: Some(mongo_uri()),
        name: Some(db_name.clone()),
    };
    let status = StoreStatus::resolve(&database).await;
    assert!(status.is_available());

    let mut config = common::test_config();
    config.database = database;
    let app = TestApp::spawn(config, status).await;

    let body: serde_json::Value = app
        .post_lead(&json!({
            "name": "Giulia",
            "email": "g@example.com",
            "message": "interested"
        }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    let id = ObjectId::parse_str(body["id"].as_str().unwrap()).unwrap();

    let store = MongoStore::connect(&mongo_uri(), &db_name).await.unwrap();
    let stored = store
        .database()
        .collection::<mongodb::bson::Document>("lead")
        .find_one(doc! { "_id": id }, None)
        .await
        .unwrap()
        .expect("lead must be stored");
    assert_eq!(stored.get_str("email").unwrap(), "g@example.com");
    assert!(stored.get_datetime("updated_at").is_ok());

    let diagnostic: serde_json::Value = app.get("/test").await.json().await.unwrap();
    assert_eq!(diagnostic["database"], "✅ Connected & Working");
    assert!(store.list_collection_names().await.unwrap().contains(&"lead".to_string()));

    store.database().drop(None).await.ok();
}
