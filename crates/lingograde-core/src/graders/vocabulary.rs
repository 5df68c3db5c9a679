//! Vocabulary grading: exact match or nothing.

use crate::model::{GradingResult, Question};

use super::{with_rubric, Grader};

/// Scores vocabulary items by case- and whitespace-insensitive equality.
#[derive(Debug, Default, Clone, Copy)]
pub struct VocabularyGrader;

impl Grader for VocabularyGrader {
    fn grade(&self, question: &Question, answer: &str) -> GradingResult {
        let correct = question.correct_answer.as_deref().unwrap_or_default();
        let is_correct = answer.trim().to_lowercase() == correct.trim().to_lowercase();
        let score = if is_correct { 100 } else { 0 };

        let (feedback, strengths, weaknesses, suggestions) = if is_correct {
            (
                "Correct! You chose the right word.",
                vec!["accurate word choice".to_string()],
                vec![],
                vec![],
            )
        } else {
            (
                "That is not the right word.",
                vec![],
                vec!["incorrect word choice".to_string()],
                vec![
                    format!("The correct answer is \"{correct}\""),
                    "Study this word in context with example sentences".to_string(),
                ],
            )
        };

        let analysis = format!(
            "Your answer: \"{}\"\nCorrect answer: \"{correct}\"",
            answer.trim()
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
