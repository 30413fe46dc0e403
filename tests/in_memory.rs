//! In-memory integration tests for the conversation service.
//!
//! Tests are organized into modules by functionality:
//! - `helpers`: Fixed clock, service wiring and seeding helpers
//! - `conversation_flow_tests`: Multi-turn creation, listing, completion and
//!   disambiguation

mod in_memory {
    pub mod helpers;

    mod conversation_flow_tests;
}
