//! Deterministic rule-based language analyzer.
//!
//! Tokens get a coarse word class from closed word lists, then a single
//! left-to-right pass assigns dependency roles:
//!
//! - the root is the first word after an infinitive `to`, else the first
//!   known verb or word following a pronoun or auxiliary, else the first word;
//! - a maximal run of determiners, words and numbers forms a nominal phrase
//!   headed by its last token;
//! - the first nominal phrase after the root is its direct object;
//! - a nominal phrase directly after a preposition is that preposition's
//!   object;
//! - `of` and `at` attach to a directly preceding noun, other prepositions to
//!   the root;
//! - punctuation closes any open attachment.
//!
//! Entities are found by pattern. A DATE entity is a calendar expression the
//! pattern calendar parser can resolve: `today`, `tonight`, `tomorrow`, `the
//! day after tomorrow`, `this`/`next` `week`/`weekend`/`month`, `weekend`,
//! `end of the week`/`month`, weekday names optionally prefixed by
//! `this`/`next`, `in N days`/`weeks`/`months`, month-name dates in either
//! order, ISO dates and `m/d[/y]` dates. A DATE entity absorbs a time of day
//! written directly before it or introduced by `at` after it. A TIME entity
//! is a time of day (`5pm`, `17:30`, `noon`, `midnight`) outside any DATE
//! entity.

use crate::nlu::{
    domain::{Analysis, DependencyRole, Entity, EntityLabel, Token, patterns::compile},
    ports::LanguageAnalyzer,
};
use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\d+(?:[-/:]\d+)+|\w+(?:['’]\w+)*|[^\w\s]"));

static DATE_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)(?:\b\d{1,2}(?::\d{2})?\s*(?:am|pm)\s+(?:on\s+)?)?",
        r"\b(?:",
        r"(?:the\s+)?day\s+after\s+tomorrow",
        r"|today|tonight|tomorrow",
        r"|(?:this|next)\s+(?:weekend|week|month)",
        r"|(?:the\s+)?weekend",
        r"|(?:the\s+)?end\s+of\s+(?:the\s+|this\s+)?(?:next\s+)?(?:week|month)",
        r"|(?:(?:this|next)\s+)?(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
        r"|in\s+(?:\d+|a|an|one|two|three|four|five|six|seven|eight|nine|ten)\s+(?:day|week|month)s?",
        r"|(?:january|february|march|april|may|june|july|august|september|october|november|december",
        r"|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s+\d{4})?",
        r"|\d{1,2}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:january|february|march|april|may|june|july|august",
        r"|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)",
        r"(?:,?\s+\d{4})?",
        r"|\d{4}-\d{1,2}-\d{1,2}",
        r"|\d{1,2}/\d{1,2}(?:/\d{2,4})?",
        r")\b",
        r"(?:\s+at\s+\d{1,2}(?::\d{2}(?:\s*(?:am|pm))?|\s*(?:am|pm))\b|\s+(?:at\s+)?(?:noon|midnight)\b)?",
    ))
});

static TIME_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:\d{1,2}:\d{2}(?:\s*(?:am|pm))?|\d{1,2}\s*(?:am|pm)|noon|midnight)\b")
});

const PREPOSITIONS: &[&str] = &[
    "about", "after", "around", "at", "before", "between", "by", "due", "during", "for", "from",
    "in", "into", "of", "on", "since", "through", "till", "to", "until", "with", "within",
    "without",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "my", "your", "his", "her", "its", "our", "their", "this", "that", "these",
    "those", "next", "last", "every", "some", "any", "each",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "we", "us", "he", "him", "she", "it", "they", "them", "i'm", "i've", "i'll",
    "i'd", "we'll", "we're",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "need", "needs",
    "gotta", "wanna", "gonna", "ought", "going", "want", "like",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "then", "so"];

const ADVERBS: &[&str] = &[
    "also", "even", "too", "please", "really", "just", "still", "already", "additionally",
    "furthermore", "moreover", "besides",
];

/// Words treated as verbs wherever they appear before any other root
/// candidate.
const VERB_LEXICON: &[&str] = &[
    "add", "buy", "call", "clean", "complete", "create", "do", "email", "finish", "fix", "get",
    "make", "pay", "prepare", "read", "remind", "review", "schedule", "send", "start", "study",
    "submit", "take", "visit", "write",
];

/// Words after which `to` introduces an infinitive.
const INFINITIVE_TAKERS: &[&str] = &[
    "going", "want", "like", "plan", "intend", "try", "remember", "have", "need", "ought", "me",
    "able", "forget",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordClass {
    Punct,
    Prep,
    Det,
    Pron,
    Aux,
    Conj,
    Particle,
    Adverb,
    Number,
    Word,
}

impl WordClass {
    const fn is_nominal(self) -> bool {
        matches!(self, Self::Det | Self::Number | Self::Word)
    }
}

/// Rule-based analyzer with a closed vocabulary and pattern entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    /// Creates the analyzer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LanguageAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Analysis {
        let mut tokens = tokenize(text);
        let classes = classify_words(&tokens);
        assign_roles(&mut tokens, &classes);
        Analysis::new(text, tokens, find_entities(text))
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    TOKEN
        .find_iter(text)
        .map(|found| Token {
            text: found.as_str().to_owned(),
            lower: found.as_str().to_lowercase().replace('’', "'"),
            start: found.start(),
            end: found.end(),
            role: DependencyRole::Other,
            head: None,
        })
        .collect()
}

fn classify_words(tokens: &[Token]) -> Vec<WordClass> {
    let mut classes: Vec<WordClass> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let word = token.lower.as_str();
        let previous = classes.last().copied();
        let previous_word = classes
            .len()
            .checked_sub(1)
            .and_then(|index| tokens.get(index))
            .map(|prior| prior.lower.as_str());
        let class = if !word.chars().any(char::is_alphanumeric) {
            WordClass::Punct
        } else if word == "to"
            && (previous == Some(WordClass::Aux)
                || previous_word.is_some_and(|prior| INFINITIVE_TAKERS.contains(&prior)))
        {
            WordClass::Particle
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            WordClass::Number
        } else if PRONOUNS.contains(&word) {
            WordClass::Pron
        } else if AUXILIARIES.contains(&word) {
            WordClass::Aux
        } else if PREPOSITIONS.contains(&word) {
            WordClass::Prep
        } else if DETERMINERS.contains(&word) {
            WordClass::Det
        } else if CONJUNCTIONS.contains(&word) {
            WordClass::Conj
        } else if ADVERBS.contains(&word) {
            WordClass::Adverb
        } else {
            WordClass::Word
        };
        classes.push(class);
    }
    classes
}

fn find_root(tokens: &[Token], classes: &[WordClass]) -> Option<usize> {
    let is_word = |index: &usize| classes.get(*index) == Some(&WordClass::Word);

    let after_particle = classes
        .iter()
        .position(|class| *class == WordClass::Particle)
        .and_then(|particle| (particle + 1..classes.len()).find(is_word));
    if after_particle.is_some() {
        return after_particle;
    }

    let lexical = (0..tokens.len()).find(|index| {
        is_word(index)
            && tokens
                .get(*index)
                .is_some_and(|token| VERB_LEXICON.contains(&token.lower.as_str()))
    });
    if lexical.is_some() {
        return lexical;
    }

    let after_subject = (1..tokens.len()).find(|index| {
        is_word(index)
            && classes
                .get(index - 1)
                .is_some_and(|class| matches!(class, WordClass::Pron | WordClass::Aux))
    });
    after_subject.or_else(|| (0..tokens.len()).find(is_word))
}

fn assign_roles(tokens: &mut [Token], classes: &[WordClass]) {
    let root = find_root(tokens, classes);
    let mut open_preposition: Option<usize> = None;
    let mut last_noun: Option<usize> = None;
    let mut has_object = false;
    let mut index = 0;

    while let Some(class) = classes.get(index).copied() {
        if Some(index) == root {
            set_role(tokens, index, DependencyRole::Root, None);
            last_noun = None;
            index += 1;
            continue;
        }
        match class {
            WordClass::Punct => {
                set_role(tokens, index, DependencyRole::Punctuation, None);
                open_preposition = None;
                last_noun = None;
            }
            WordClass::Pron => {
                let role = if root.is_some_and(|verb| index < verb) {
                    DependencyRole::Subject
                } else {
                    DependencyRole::Other
                };
                set_role(tokens, index, role, root);
                last_noun = None;
            }
            WordClass::Aux | WordClass::Particle => {
                set_role(tokens, index, DependencyRole::Auxiliary, root);
                last_noun = None;
            }
            WordClass::Adverb => {
                set_role(tokens, index, DependencyRole::Modifier, root);
            }
            WordClass::Conj => {
                set_role(tokens, index, DependencyRole::Other, root);
                open_preposition = None;
                last_noun = None;
            }
            WordClass::Prep => {
                let attaches_to_noun = tokens
                    .get(index)
                    .is_some_and(|token| matches!(token.lower.as_str(), "of" | "at"));
                let head = last_noun.filter(|_| attaches_to_noun).or(root);
                set_role(tokens, index, DependencyRole::Preposition, head);
                open_preposition = Some(index);
                last_noun = None;
            }
            WordClass::Det | WordClass::Number | WordClass::Word => {
                let end = nominal_run_end(classes, index, root);
                let head_role = if open_preposition.is_some() {
                    DependencyRole::PrepositionalObject
                } else if !has_object && root.is_some_and(|verb| index > verb) {
                    has_object = true;
                    DependencyRole::DirectObject
                } else {
                    DependencyRole::Other
                };
                set_role(tokens, end, head_role, open_preposition.or(root));
                for modifier in index..end {
                    set_role(tokens, modifier, DependencyRole::Modifier, Some(end));
                }
                open_preposition = None;
                last_noun = Some(end);
                index = end;
            }
        }
        index += 1;
    }
}

/// Index of the last token of the nominal run starting at `start`.
fn nominal_run_end(classes: &[WordClass], start: usize, root: Option<usize>) -> usize {
    let mut end = start;
    while classes
        .get(end + 1)
        .is_some_and(|class| class.is_nominal() && Some(end + 1) != root)
    {
        end += 1;
    }
    end
}

fn set_role(tokens: &mut [Token], index: usize, role: DependencyRole, head: Option<usize>) {
    if let Some(token) = tokens.get_mut(index) {
        token.role = role;
        token.head = head.filter(|governor| *governor != index);
    }
}

fn find_entities(text: &str) -> Vec<Entity> {
    let mut entities: Vec<Entity> = DATE_ENTITY
        .find_iter(text)
        .map(|found| entity(EntityLabel::Date, &found))
        .collect();
    let times: Vec<Entity> = TIME_ENTITY
        .find_iter(text)
        .filter(|found| {
            !entities
                .iter()
                .any(|date| found.start() < date.end && date.start < found.end())
        })
        .map(|found| entity(EntityLabel::Time, &found))
        .collect();
    entities.extend(times);
    entities.sort_by_key(|found| found.start);
    entities
}

fn entity(label: EntityLabel, found: &regex::Match<'_>) -> Entity {
    Entity {
        label,
        text: found.as_str().to_owned(),
        start: found.start(),
        end: found.end(),
    }
}
