//! Free-writing grading.
//!
//! Writing items have no single reference answer. The score is the sum of
//! five components measured on the answer text itself:
//!
//! | Component  | Max | Full credit when                                   |
//! |------------|-----|----------------------------------------------------|
//! | Length     | 10  | at least 30 words                                  |
//! | Structure  | 20  | at least 3 sentences                               |
//! | Grammar    | 30  | 10 each: uppercase letter, terminal punctuation,   |
//! |            |     | no doubled whitespace                              |
//! | Vocabulary | 20  | unique-word ratio x 40, capped                     |
//! | Content    | 20  | topic keywords found in answer or prompt, 3 = full |

use serde::{Deserialize, Serialize};

use crate::lexicon::CONTENT_KEYWORDS;
use crate::model::{GradingResult, Question};

use super::{with_rubric, Grader};

const MIN_WORDS: usize = 30;
const MIN_SENTENCES: usize = 3;
const LENGTH_POINTS: u32 = 10;
const STRUCTURE_POINTS: u32 = 20;
const GRAMMAR_CHECK_POINTS: u32 = 10;
const VOCABULARY_MAX: u32 = 20;
const CONTENT_MAX: u32 = 20;
const PASS_SCORE: u32 = 70;

/// Component measurements for one writing answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub length_points: u32,
    pub structure_points: u32,
    pub grammar_points: u32,
    pub vocabulary_points: u32,
    pub content_points: u32,
}

impl WritingMetrics {
    /// Measure `answer`, using `prompt` for the content-relevance check.
    pub fn measure(prompt: &str, answer: &str) -> Self {
        let text = answer.trim();
        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();
        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();

        let length_points = if word_count >= MIN_WORDS { LENGTH_POINTS } else { 0 };
        let structure_points = if sentence_count >= MIN_SENTENCES {
            STRUCTURE_POINTS
        } else {
            0
        };

        let checks = [
            text.chars().any(char::is_uppercase),
            text.contains(['.', '!', '?']),
            !has_whitespace_run(text),
        ];
        let grammar_points =
            checks.iter().filter(|ok| **ok).count() as u32 * GRAMMAR_CHECK_POINTS;

        let vocabulary_points = if word_count == 0 {
            0
        } else {
            let unique: std::collections::HashSet<String> =
                words.iter().map(|w| w.to_lowercase()).collect();
            let ratio = unique.len() as f64 / word_count as f64;
            ((ratio * 40.0).round() as u32).min(VOCABULARY_MAX)
        };

        let answer_lower = text.to_lowercase();
        let prompt_lower = prompt.to_lowercase();
        let matched = CONTENT_KEYWORDS
            .iter()
            .filter(|k| answer_lower.contains(*k) || prompt_lower.contains(*k))
            .count();
        let content_points = ((matched as f64 / 3.0 * 20.0).round() as u32).min(CONTENT_MAX);

        Self {
            word_count,
            sentence_count,
            length_points,
            structure_points,
            grammar_points,
            vocabulary_points,
            content_points,
        }
    }

    /// Sum of all component points.
    pub fn total(&self) -> u32 {
        self.length_points
            + self.structure_points
            + self.grammar_points
            + self.vocabulary_points
            + self.content_points
    }
}

fn has_whitespace_run(text: &str) -> bool {
    let mut previous_space = false;
    for c in text.chars() {
        let space = c.is_whitespace();
        if space && previous_space {
            return true;
        }
        previous_space = space;
    }
    false
}

/// Feedback tier for a writing score; boundaries belong to the higher tier.
fn feedback_for(score: u32) -> &'static str {
    match score {
        90.. => "Excellent writing! Your response is clear, well organized, and on topic.",
        70..=89 => "Good work! Your writing meets the requirements with some room to polish.",
        50..=69 => "Fair attempt. Focus on the weaknesses listed below to improve.",
        _ => "Your writing needs more practice. Review the suggestions below.",
    }
}

/// Scores free writing on length, structure, grammar, vocabulary, and content.
#[derive(Debug, Default, Clone, Copy)]
pub struct WritingGrader;

impl Grader for WritingGrader {
    fn grade(&self, question: &Question, answer: &str) -> GradingResult {
        let m = WritingMetrics::measure(&question.question_text, answer);
        let score = m.total();

        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        let mut suggestions = Vec::new();

        if m.length_points == LENGTH_POINTS {
            strengths.push("appropriate length".to_string());
        } else {
            weaknesses.push("response too short".to_string());
            suggestions.push(format!("Write at least {MIN_WORDS} words"));
        }

        if m.structure_points == STRUCTURE_POINTS {
            strengths.push("good sentence structure".to_string());
        } else {
            weaknesses.push("limited sentence variety".to_string());
            suggestions.push(format!("Use at least {MIN_SENTENCES} complete sentences"));
        }

        if m.grammar_points >= 2 * GRAMMAR_CHECK_POINTS {
            strengths.push("good basic grammar".to_string());
        } else {
            weaknesses.push("grammar needs improvement".to_string());
            suggestions.push(
                "Start sentences with a capital letter and end them with punctuation".to_string(),
            );
        }

        if m.vocabulary_points >= 15 {
            strengths.push("good vocabulary variety".to_string());
        } else {
            weaknesses.push("limited vocabulary".to_string());
            suggestions.push("Use a wider range of words instead of repeating the same ones".to_string());
        }

        if m.content_points >= 15 {
            strengths.push("relevant content".to_string());
        } else {
            weaknesses.push("content could be more relevant".to_string());
            suggestions.push("Include details such as your name, age, and hobbies".to_string());
        }

        let analysis = format!(
            "Word count: {}\nSentence count: {}\nLength: {}/{LENGTH_POINTS}\nStructure: {}/{STRUCTURE_POINTS}\nGrammar: {}/30\nVocabulary: {}/{VOCABULARY_MAX}\nContent: {}/{CONTENT_MAX}",
            m.word_count,
            m.sentence_count,
            m.length_points,
            m.structure_points,
            m.grammar_points,
            m.vocabulary_points,
            m.content_points,
        );

        GradingResult {
            score,
            is_correct: score >= PASS_SCORE,
            feedback: feedback_for(score).to_string(),
            strengths,
            weaknesses,
            suggestions,
            detailed_analysis: with_rubric(analysis, question),
        }
    }
}
