//! Ordered phrase tables driving classification and extraction.
//!
//! Table order is significant wherever a lookup stops at the first hit.

use super::Relation;

/// Greetings, matched exactly or as a word-bounded prefix.
pub const GREETING_PHRASES: &[&str] = &[
    "good morning",
    "good afternoon",
    "good evening",
    "hello there",
    "hey there",
    "hi there",
    "how are you",
    "how are u",
    "how r you",
    "how r u",
    "how's it going",
    "hows it going",
    "how you doing",
    "what's up",
    "whats up",
    "what up",
    "wassup",
    "greetings",
    "hello",
    "howdy",
    "heya",
    "hiya",
    "heyo",
    "heyy",
    "hey",
    "hihi",
    "hii",
    "hi",
    "hola",
    "yo yo",
    "yo",
    "sup",
    "aloha",
    "bonjour",
    "ciao",
    "morning",
    "afternoon",
    "evening",
];

/// Explicit task-query phrases, matched as substrings.
pub const TASK_QUERY_PHRASES: &[&str] = &[
    "what tasks",
    "show tasks",
    "show my tasks",
    "show all",
    "list tasks",
    "list my tasks",
    "pending tasks",
    "due tasks",
    "tasks due",
    "what is due",
    "what's due",
    "whats due",
    "my tasks",
];

/// Farewells and acknowledgments accepted only as the whole message.
pub const FAREWELL_PHRASES: &[&str] = &[
    "bye",
    "goodbye",
    "see you",
    "cool",
    "ok",
    "okay",
    "cya",
    "later",
    "take care",
    "ttyl",
    "gtg",
    "got to go",
    "have to go",
    "catch you later",
    "peace out",
    "alright",
    "aight",
    "good to go",
    "let's go",
    "lets go",
    "lesgo",
    "lessgo",
    "sounds good",
    "perfect",
    "great",
    "awesome",
    "nice",
    "got it",
    "understood",
    "roger that",
    "will do",
    "noted",
    "right on",
    "yeah",
    "yep",
    "yup",
    "yes",
    "sure",
    "k",
    "kk",
    "mhm",
    "uh huh",
    "right",
    "yea",
    "thanks",
    "thank you",
];

/// Farewell words recognised anywhere in a message.
pub const FAREWELL_TOKENS: &[&str] = &["bye", "goodbye", "cya", "ttyl", "gtg", "byee", "goodnight"];

/// Multi-word farewells recognised anywhere in a message.
pub const FAREWELL_TOKEN_PHRASES: &[&str] = &[
    "see you later",
    "see you",
    "see ya",
    "take care",
    "catch you later",
    "peace out",
    "talk to you later",
    "got to go",
    "good night",
];

/// Completion phrasings, as regular expressions over lower-cased text.
pub const COMPLETION_PATTERNS: &[&str] = &[
    r"i have completed\s+",
    r"i've completed\s+",
    r"i have done\s+",
    r"i've done\s+",
    r"i have finished\s+",
    r"i finished\s+",
    r"i've finished\s+",
    r"i completed\s+",
    r"i've accomplished\s+",
    r"i accomplished\s+",
    r"i got it done\s+",
    r"i've got it done\s+",
    r"i managed to\s+",
    r"i've managed to\s+",
    r"i did\s+",
    r"i've handled\s+",
    r"i handled\s+",
    r"i wrapped up\s+",
    r"i've wrapped up\s+",
    r"is done$",
    r"is completed$",
    r"is finished$",
    r"done$",
    r"completed$",
];

/// Task-intention indicators, most specific first.
///
/// Shorter indicators are substrings of longer ones ("need to" inside
/// "i need to"), so the longer phrase must be tried first.
pub const TASK_INDICATORS: &[&str] = &[
    "i'm going to",
    "i am going to",
    "i'd like to",
    "i would like to",
    "remind me to",
    "i have to",
    "i need to",
    "i ought to",
    "i plan to",
    "i intend to",
    "i gotta",
    "i must",
    "i should",
    "i wanna",
    "i will",
    "i'll",
    "to complete",
    "need to",
    "have to",
    "ought to",
    "plan to",
    "intend to",
    "to do",
    "will do",
    "gotta",
    "shoulda",
    "should",
    "must",
    "wanna",
    "gonna",
    "needa",
    "haveta",
    "oughta",
    "will",
];

/// Message prefixes that explicitly request task creation.
pub const CREATION_PREFIXES: &[&str] = &["add a task to", "add task", "add"];

/// Message prefixes that explicitly request deletion.
pub const DELETION_PREFIXES: &[&str] = &["delete", "remove"];

/// Keywords separating the task text from its deadline clause.
pub const DEADLINE_KEYWORDS: &[&str] = &["by", "due", "until", "before"];

/// Prepositions whose object is a deadline in the dependency parse.
pub const DEADLINE_PREPOSITIONS: &[&str] = &["by", "due", "until"];

/// Leading filler words stripped from a task name.
pub const FILLER_WORDS: &[&str] = &[
    "additionally",
    "furthermore",
    "moreover",
    "as well",
    "besides",
    "also",
    "even",
    "too",
];

/// Words signalling an easy task.
pub const EASY_KEYWORDS: &[&str] = &["simple", "easy", "quick", "basic"];

/// Words signalling a hard task.
pub const HARD_KEYWORDS: &[&str] = &["difficult", "hard", "complex", "challenging"];

/// Words signalling a medium task.
pub const MEDIUM_KEYWORDS: &[&str] = &["moderate", "medium"];

/// Relation phrases per category, in category precedence order.
pub const RELATION_PHRASES: &[(Relation, &[&str])] = &[
    (
        Relation::Before,
        &[
            "before the end of",
            "before the deadline",
            "before the specified date",
            "not later than",
            "no later than",
            "earlier than",
            "prior to",
            "up until",
            "before",
            "until",
            "till",
            "by",
        ],
    ),
    (Relation::Inclusive, &["including", "on"]),
    (
        Relation::After,
        &[
            "after the deadline",
            "starting from",
            "subsequent to",
            "later than",
            "following",
            "onwards",
            "onward",
            "beyond",
            "after",
            "from",
            "post",
        ],
    ),
    (
        Relation::Flexible,
        &[
            "in the near future",
            "within the month",
            "within the week",
            "at the earliest",
            "approximately",
            "as soon as",
            "sometime",
            "whenever",
            "between",
            "roughly",
            "around",
            "about",
        ],
    ),
];

/// Words dropped from a completion or deletion description before matching.
pub const MATCH_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "my", "our", "this", "that", "these", "those", "task", "tasks", "it", "i",
    "me", "of", "for", "to", "and", "on", "in", "with", "is", "was", "just", "all", "now",
    "already", "finally", "today", "yet",
];
