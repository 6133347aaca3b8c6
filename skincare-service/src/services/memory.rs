use crate::services::DocumentStore;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime, Document};
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process store with the same insert contract as [`MongoStore`].
///
/// [`MongoStore`]: crate::services::MongoStore
#[derive(Clone, Default)]
pub struct MemoryStore {
    name: String,
    collections: Arc<RwLock<BTreeMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Arc::default(),
        }
    }

    pub async fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        let id = ObjectId::new();
        let now = BsonDateTime::now();
        document.insert("_id", id);
        document.insert("created_at", now);
        document.insert("updated_at", now);

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id.to_hex())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn assigns_unique_ids_and_timestamps() {
        let store = MemoryStore::new("test");

        let first = store
            .create_document("lead", doc! { "name": "Giulia" })
            .await
            .unwrap();
        let second = store
            .create_document("lead", doc! { "name": "Sara" })
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count("lead").await, 2);

        let docs = store.documents("lead").await;
        assert_eq!(docs[0].get_object_id("_id").unwrap().to_hex(), first);
        assert!(docs[0].get_datetime("created_at").is_ok());
        assert_eq!(
            docs[0].get_datetime("created_at").unwrap(),
            docs[0].get_datetime("updated_at").unwrap()
        );
    }

    #[tokio::test]
    async fn lists_collections_with_documents() {
        let store = MemoryStore::new("test");
        assert!(store.list_collection_names().await.unwrap().is_empty());

        store.create_document("lead", doc! {}).await.unwrap();
        store.create_document("audit", doc! {}).await.unwrap();

        assert_eq!(store.list_collection_names().await.unwrap(), ["audit", "lead"]);
    }
}
