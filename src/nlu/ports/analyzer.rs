//! Language analysis port.

use crate::nlu::domain::Analysis;

/// Produces tokens with dependency roles and labelled entities.
///
/// Implementations must be deterministic: the same text always yields the
/// same analysis.
pub trait LanguageAnalyzer: Send + Sync {
    /// Analyses a message.
    fn analyze(&self, text: &str) -> Analysis;
}
