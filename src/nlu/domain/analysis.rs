//! Linguistic analysis of a message: tokens, dependency roles and entities.

use std::ops::RangeInclusive;

/// Grammatical role of a token relative to its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyRole {
    /// Main verb of the clause.
    Root,
    /// Subject of the main verb.
    Subject,
    /// Auxiliary, modal or infinitive marker.
    Auxiliary,
    /// Direct object of the main verb.
    DirectObject,
    /// Preposition.
    Preposition,
    /// Object governed by a preposition.
    PrepositionalObject,
    /// Determiner, adjective or compound part of a phrase.
    Modifier,
    /// Punctuation mark.
    Punctuation,
    /// Any other attachment.
    Other,
}

/// A token of the analysed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text as written.
    pub text: String,
    /// Lower-cased text with typographic apostrophes normalised.
    pub lower: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Dependency role.
    pub role: DependencyRole,
    /// Index of the governing token; `None` for roots and punctuation.
    pub head: Option<usize>,
}

/// Entity categories recognised in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// A calendar date, possibly with an attached time of day.
    Date,
    /// A time of day with no date.
    Time,
}

/// A labelled span of the analysed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity category.
    pub label: EntityLabel,
    /// Text as written.
    pub text: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// Result of analysing a message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analysis {
    text: String,
    tokens: Vec<Token>,
    entities: Vec<Entity>,
}

impl Analysis {
    /// Creates an analysis over `text`.
    #[must_use]
    pub fn new(text: impl Into<String>, tokens: Vec<Token>, entities: Vec<Entity>) -> Self {
        Self {
            text: text.into(),
            tokens,
            entities,
        }
    }

    /// Returns the analysed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the tokens in text order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the recognised entities in text order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the first entity with the given label.
    #[must_use]
    pub fn first_entity(&self, label: EntityLabel) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.label == label)
    }

    /// Returns the indices of the tokens governed directly by `index`.
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(_, token)| token.head == Some(index))
            .map(|(child, _)| child)
    }

    /// Returns the token range covered by the subtree rooted at `index`.
    #[must_use]
    pub fn subtree_span(&self, index: usize) -> Option<RangeInclusive<usize>> {
        self.tokens.get(index)?;
        let mut low = index;
        let mut high = index;
        let mut pending = vec![index];
        while let Some(current) = pending.pop() {
            for child in self.children(current) {
                low = low.min(child);
                high = high.max(child);
                pending.push(child);
            }
        }
        Some(low..=high)
    }

    /// Returns the text covered by the subtree rooted at `index`.
    #[must_use]
    pub fn subtree_text(&self, index: usize) -> Option<&str> {
        let span = self.subtree_span(index)?;
        let first = self.tokens.get(*span.start())?;
        let last = self.tokens.get(*span.end())?;
        self.text.get(first.start..last.end)
    }
}
