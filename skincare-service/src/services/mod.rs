pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoStore;
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics, record_lead_created, record_lead_failed};
pub use store::{DocumentStore, StoreStatus};
