pub mod content;
pub mod lead;

pub use content::{BeforeAfter, Testimonial, BEFORE_AFTER, TESTIMONIALS};
pub use lead::{FieldKind, FieldSpec, Lead, LeadSchema, SchemaError, DEFAULT_LEAD_FIELDS};
