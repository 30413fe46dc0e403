//! In-memory task store adapter.

mod task;

pub use task::InMemoryTaskRepository;
