//! Front-end adapters.

mod console;
mod recording;

pub use console::ConsoleFrontEnd;
pub use recording::{Delivery, RecordingFrontEnd};
