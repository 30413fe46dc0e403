//! Conversation context: events in, replies out.
//!
//! [`services::ConversationService`] classifies each inbound message,
//! resolves it into task store operations and phrases the outcome. A
//! conversation that was asked "which task did you mean" stays in that state
//! until it answers, starts a new question or the question expires.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
