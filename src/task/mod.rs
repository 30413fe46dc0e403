//! Task records for conversational task management.
//!
//! A task is created from an extracted descriptor, listed through deadline
//! filters, and completed or deleted by explicit commands. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
