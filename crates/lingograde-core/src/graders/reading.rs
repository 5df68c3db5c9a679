//! Reading comprehension grading.
//!
//! Takes the better of whole-string similarity and keyword overlap, so a
//! paraphrase that hits the key words scores as well as a verbatim answer.

use crate::model::{GradingResult, Question};
use crate::similarity::similarity;

use super::{ratio_to_score, with_rubric, Grader};

const CORRECT_THRESHOLD: f64 = 0.7;
const PARTIAL_THRESHOLD: f64 = 0.4;

/// Scores reading items against the reference answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadingGrader;

/// Fraction of the reference's words found inside some answer word.
pub fn keyword_overlap(answer: &str, correct: &str) -> f64 {
    let correct = correct.trim().to_lowercase();
    let keywords: Vec<&str> = correct.split(' ').filter(|k| !k.is_empty()).collect();
    if keywords.is_empty() {
        return 0.0;
    }

    let answer = answer.trim().to_lowercase();
    let tokens: Vec<&str> = answer.split_whitespace().collect();
    let matched = keywords
        .iter()
        .filter(|k| tokens.iter().any(|t| t.contains(*k)))
        .count();

    matched as f64 / keywords.len() as f64
}

impl Grader for ReadingGrader {
    fn grade(&self, question: &Question, answer: &str) -> GradingResult {
        let correct = question.correct_answer.as_deref().unwrap_or_default();
        let sim = similarity(answer, correct);
        let overlap = keyword_overlap(answer, correct);
        let final_score = sim.max(overlap);
        let score = ratio_to_score(final_score);
        let is_correct = final_score > CORRECT_THRESHOLD;

        let (feedback, strengths, weaknesses, suggestions) = if is_correct {
            (
                "Great job! You understood the passage well.",
                vec![
                    "good reading comprehension".to_string(),
                    "identified the key information".to_string(),
                ],
                vec![],
                vec![],
            )
        } else if final_score > PARTIAL_THRESHOLD {
            (
                "You understood part of the passage.",
                vec!["partial understanding of the passage".to_string()],
                vec!["missing some key details".to_string()],
                vec![
                    format!("A complete answer would be \"{correct}\""),
                    "Re-read the passage and look for the key details".to_string(),
                ],
            )
        } else {
            (
                "Your answer does not match the passage.",
                vec![],
                vec!["misunderstood the passage".to_string()],
                vec![
                    format!("The correct answer is \"{correct}\""),
                    "Read the passage slowly and underline the main ideas".to_string(),
                    "Practice with shorter texts first".to_string(),
                ],
            )
        };

        let analysis = format!(
            "Your answer: \"{}\"\nExpected answer: \"{correct}\"\nSimilarity: {}%\nKeyword match: {}%",
            answer.trim(),
            ratio_to_score(sim),
            ratio_to_score(overlap)
        );

        GradingResult {
            score,
            is_correct,
            feedback: feedback.to_string(),
            strengths,
            weaknesses,
            suggestions,
            detailed_analysis: with_rubric(analysis, question),
        }
    }
}
