//! Per-type grading strategies.
//!
//! Each grader assumes a non-blank answer; the orchestrator in
//! [`crate::engine`] filters blank answers before dispatching here.

mod grammar;
mod reading;
mod vocabulary;
mod writing;

pub use grammar::GrammarGrader;
pub use reading::ReadingGrader;
pub use vocabulary::VocabularyGrader;
pub use writing::{WritingGrader, WritingMetrics};

use crate::model::{GradingResult, Question};

/// A scoring strategy for one question type.
pub trait Grader: Send + Sync {
    /// Grade a non-blank answer against a question.
    fn grade(&self, question: &Question, answer: &str) -> GradingResult;
}

/// Convert a `[0, 1]` ratio into a whole-number score.
pub(crate) fn ratio_to_score(ratio: f64) -> u32 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// The question's concept tags as a readable list.
pub(crate) fn concept_list(question: &Question) -> String {
    if question.concept_tags.is_empty() {
        "the related concepts".to_string()
    } else {
        question.concept_tags.join(", ")
    }
}

/// Append the rubric, when present, to an analysis block.
pub(crate) fn with_rubric(mut analysis: String, question: &Question) -> String {
    if let Some(rubric) = question.rubric.as_deref().filter(|r| !r.trim().is_empty()) {
        analysis.push_str("\nRubric: ");
        analysis.push_str(rubric);
    }
    analysis
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{Difficulty, Question, QuestionType};

    pub fn question(question_type: QuestionType, correct: Option<&str>) -> Question {
        Question {
            id: "q1".into(),
            question_type,
            difficulty: Difficulty::Beginner,
            title: "Test question".into(),
            question_text: "Answer the question.".into(),
            options: None,
            correct_answer: correct.map(str::to_string),
            rubric: Some("Check the verb form".into()),
            concept_tags: vec!["Present Simple".into()],
            estimated_time: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::question;
    use super::*;
    use crate::model::QuestionType;

    #[test]
    fn ratio_to_score_rounds_and_clamps() {
        assert_eq!(ratio_to_score(0.0), 0);
        assert_eq!(ratio_to_score(0.666), 67);
        assert_eq!(ratio_to_score(1.0), 100);
        assert_eq!(ratio_to_score(1.5), 100);
    }

    #[test]
    fn rubric_appended_only_when_present() {
        let mut q = question(QuestionType::Grammar, Some("goes"));
        assert!(with_rubric("base".into(), &q).ends_with("Rubric: Check the verb form"));
        q.rubric = None;
        assert_eq!(with_rubric("base".into(), &q), "base");
    }

    #[test]
    fn concept_list_fallback() {
        let mut q = question(QuestionType::Grammar, Some("goes"));
        assert_eq!(concept_list(&q), "Present Simple");
        q.concept_tags.clear();
        assert_eq!(concept_list(&q), "the related concepts");
    }
}
