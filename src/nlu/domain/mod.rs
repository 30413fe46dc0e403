//! Domain model for message interpretation.
//!
//! Holds the intent and relation vocabularies, the ordered phrase tables,
//! linguistic analysis results and the deterministic relative-date
//! arithmetic shared by every resolution path.

mod analysis;
mod intent;
pub mod lexicon;
pub(crate) mod patterns;
mod relation;
pub mod relative;

pub use analysis::{Analysis, DependencyRole, Entity, EntityLabel, Token};
pub use intent::{Intent, ParsedIntent};
pub use relation::{Relation, RelationQuery};
pub use relative::RelativePattern;
