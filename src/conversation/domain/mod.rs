//! Domain model for conversations with the front end.
//!
//! Inbound events, outbound replies and the per-conversation record of an
//! unanswered "which task" question.

mod event;
mod ids;
mod pending;
mod reply;

pub use event::{InboundEvent, ParseCallbackError, SelectionAction};
pub use ids::{ConversationId, MessageRef};
pub use pending::{InvalidChoice, PendingDisambiguation};
pub use reply::{Reply, SelectableOption};
