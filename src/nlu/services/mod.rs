//! Interpretation services built on the language ports.

mod classifier;
mod extractor;
mod relation;
mod temporal;

pub use classifier::IntentClassifier;
pub use extractor::{ExtractionError, TaskDescriptorExtractor};
pub use relation::RelationResolver;
pub use temporal::TemporalResolver;
