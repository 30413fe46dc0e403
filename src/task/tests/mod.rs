//! Unit tests for the task bounded context.

mod domain_tests;
mod memory_tests;
mod row_tests;
