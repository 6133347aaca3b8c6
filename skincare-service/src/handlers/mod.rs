pub mod content;
pub mod diagnostics;
pub mod health;
pub mod leads;
pub mod metrics;

pub use content::{get_before_after, get_testimonials};
pub use diagnostics::test_database;
pub use health::{health_check, hello, root};
pub use leads::create_lead;
pub use metrics::metrics_endpoint;
