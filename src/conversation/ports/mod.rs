//! Port definitions for the conversation context.

mod front_end;

pub use front_end::{FrontEnd, FrontEndError, FrontEndResult};
