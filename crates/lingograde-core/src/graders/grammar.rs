//! Grammar grading by positional similarity to the reference answer.

use crate::model::{GradingResult, Question};
use crate::similarity::similarity;

use super::{concept_list, ratio_to_score, with_rubric, Grader};

const CORRECT_THRESHOLD: f64 = 0.8;
const NEAR_MISS_THRESHOLD: f64 = 0.5;

/// Scores grammar items by closeness to `correct_answer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GrammarGrader;

impl Grader for GrammarGrader {
    fn grade(&self, question: &Question, answer: &str) -> GradingResult {
        let correct = question.correct_answer.as_deref().unwrap_or_default();
        let sim = similarity(answer, correct);
        let score = ratio_to_score(sim);
        let is_correct = sim > CORRECT_THRESHOLD;
        let concepts = concept_list(question);

        let (feedback, strengths, weaknesses, suggestions) = if is_correct {
            (
                "Excellent! Your answer uses the correct grammar.",
                vec![
                    "correct grammar structure".to_string(),
                    "proper verb form usage".to_string(),
                ],
                vec![],
                vec![],
            )
        } else if sim > NEAR_MISS_THRESHOLD {
            (
                "Almost there. Your answer has a small grammar mistake.",
                vec![],
                vec!["minor grammar error".to_string()],
                vec![
                    format!("The correct answer is \"{correct}\""),
                    format!("Review: {concepts}"),
                ],
            )
        } else {
            (
                "Your answer is not grammatically correct yet.",
                vec![],
                vec!["incorrect grammar structure".to_string()],
                vec![
                    format!("The correct answer is \"{correct}\""),
                    format!("Review: {concepts}"),
                    "Practice more exercises of this type".to_string(),
                ],
            )
        };

        let analysis = format!(
            "Your answer: \"{}\"\nCorrect answer: \"{correct}\"\nSimilarity: {score}%",
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
