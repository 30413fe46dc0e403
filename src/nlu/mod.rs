//! Natural-language understanding for task conversations.
//!
//! Classifies messages into intents, resolves deadline phrases to absolute
//! timestamps, extracts task descriptors from creation requests and turns
//! queries into deadline filters. The NLP capability and the generic
//! calendar parser sit behind the [`ports`]; [`adapters`] ships
//! deterministic rule-based implementations of both.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
#[cfg(test)]
mod tests;
