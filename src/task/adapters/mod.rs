//! Adapter implementations for the task record store.
//!
//! The row model mirrors the fixed field names of the external task table;
//! the in-memory adapter keeps rows in that shape.

pub mod memory;
pub mod models;
