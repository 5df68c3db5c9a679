//! Keyword tables used for classification and content scoring.
//!
//! These are plain data. The classifiers walk them in order and stop at
//! the first hit where order matters (type, difficulty).

use crate::model::{Difficulty, QuestionType};

/// Type triggers, checked in order. No hit means grammar.
pub const TYPE_TRIGGERS: &[(QuestionType, &[&str])] = &[
    (QuestionType::Grammar, &["fill in", "complete", "correct form"]),
    (QuestionType::Vocabulary, &["choose", "select", "vocabulary"]),
    (QuestionType::Reading, &["read", "passage", "comprehension"]),
    (QuestionType::Writing, &["write", "essay", "opinion"]),
];

/// Difficulty triggers, checked in order. No hit means beginner.
pub const DIFFICULTY_TRIGGERS: &[(Difficulty, &[&str])] = &[
    (
        Difficulty::Advanced,
        &[
            "conditional",
            "subjunctive",
            "argumentative",
            "critical",
            "analysis",
        ],
    ),
    (
        Difficulty::Intermediate,
        &[
            "present perfect",
            "past perfect",
            "phrasal verb",
            "passive voice",
            "opinion",
        ],
    ),
];

/// Concept name to trigger keywords. Every matching concept is tagged.
pub const CONCEPTS: &[(&str, &[&str])] = &[
    (
        "Present Simple",
        &["present simple", "simple present", "every day", "always", "usually"],
    ),
    (
        "Present Perfect",
        &["present perfect", "have been", "has been", "already", "since"],
    ),
    (
        "Past Simple",
        &["past simple", "simple past", "yesterday", "last week", "ago"],
    ),
    ("Conditional", &["conditional", "if i", "would", "unless"]),
    (
        "Passive Voice",
        &["passive voice", "passive", "was built", "is made", "were written"],
    ),
    (
        "Phrasal Verb",
        &["phrasal verb", "look up", "give up", "turn on", "put off"],
    ),
    (
        "Vocabulary",
        &["vocabulary", "synonym", "antonym", "meaning", "word"],
    ),
    (
        "Reading Comprehension",
        &["read", "passage", "comprehension", "text"],
    ),
    ("Writing", &["write", "essay", "paragraph", "opinion"]),
    ("Grammar", &["grammar", "verb", "tense", "correct form", "fill in"]),
];

/// Tag used when no concept matches.
pub const DEFAULT_CONCEPT: &str = "General English";

/// Keywords that make a self-introduction writing answer relevant.
pub const CONTENT_KEYWORDS: &[&str] = &["name", "age", "hobby", "favorite", "introduce", "myself"];

/// Returns the label of the first row whose keywords appear in `text`.
///
/// `text` must already be lowercased.
pub fn first_match<T: Copy>(table: &[(T, &[&str])], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(label, _)| *label)
}

/// Returns every label whose keywords appear in `text`, in table order.
///
/// `text` must already be lowercased.
pub fn all_matches<'a>(table: &[(&'a str, &[&str])], text: &str) -> Vec<&'a str> {
    table
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(label, _)| *label)
        .collect()
}
