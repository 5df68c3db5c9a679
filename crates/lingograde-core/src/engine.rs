//! Grading orchestrator.
//!
//! Routes each (question, answer) pair to the grader registered for the
//! question's type. Blank answers and unregistered types never reach a
//! grader; both produce a zero-score result.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graders::{Grader, GrammarGrader, ReadingGrader, VocabularyGrader, WritingGrader};
use crate::model::{GradingResult, Question, QuestionType};

/// Dispatches answers to per-type graders.
#[derive(Clone)]
pub struct GradingEngine {
    graders: HashMap<QuestionType, Arc<dyn Grader>>,
}

impl Default for GradingEngine {
    fn default() -> Self {
        let mut graders: HashMap<QuestionType, Arc<dyn Grader>> = HashMap::new();
        graders.insert(QuestionType::Grammar, Arc::new(GrammarGrader));
        graders.insert(QuestionType::Vocabulary, Arc::new(VocabularyGrader));
        graders.insert(QuestionType::Reading, Arc::new(ReadingGrader));
        graders.insert(QuestionType::Writing, Arc::new(WritingGrader));
        Self { graders }
    }
}

impl GradingEngine {
    /// Engine with the built-in grader for every known type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the grader used for `question_type`.
    pub fn with_grader(mut self, question_type: QuestionType, grader: Arc<dyn Grader>) -> Self {
        self.graders.insert(question_type, grader);
        self
    }

    /// Grade one answer.
    pub fn grade_answer(&self, question: &Question, answer: &str) -> GradingResult {
        if answer.trim().is_empty() {
            tracing::debug!(question_id = %question.id, "blank answer");
            return no_answer_result();
        }

        match self.graders.get(&question.question_type) {
            Some(grader) => {
                let result = grader.grade(question, answer);
                tracing::debug!(
                    question_id = %question.id,
                    question_type = %question.question_type,
                    score = result.score,
                    "graded"
                );
                result
            }
            None => {
                tracing::warn!(
                    question_id = %question.id,
                    question_type = %question.question_type,
                    "no grader for question type"
                );
                unknown_type_result()
            }
        }
    }

    /// Grade every question, looking up its answer by id.
    ///
    /// Questions without an answer are graded as blank. The result has one
    /// entry per question id.
    pub fn grade_multiple_answers(
        &self,
        questions: &[Question],
        answers: &HashMap<String, String>,
    ) -> HashMap<String, GradingResult> {
        questions
            .iter()
            .map(|q| {
                let answer = answers.get(&q.id).map(String::as_str).unwrap_or("");
                (q.id.clone(), self.grade_answer(q, answer))
            })
            .collect()
    }
}

fn no_answer_result() -> GradingResult {
    GradingResult {
        score: 0,
        is_correct: false,
        feedback: "No answer submitted.".to_string(),
        strengths: vec![],
        weaknesses: vec!["no answer provided".to_string()],
        suggestions: vec!["Please provide an answer".to_string()],
        detailed_analysis: "The student did not submit an answer for this question.".to_string(),
    }
}

fn unknown_type_result() -> GradingResult {
    GradingResult {
        score: 0,
        is_correct: false,
        feedback: "Unknown question type; this answer could not be graded.".to_string(),
        strengths: vec![],
        weaknesses: vec![],
        suggestions: vec![],
        detailed_analysis: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn q(id: &str, question_type: QuestionType, correct: Option<&str>) -> Question {
        Question {
            id: id.into(),
            question_type,
            difficulty: Difficulty::Beginner,
            title: id.into(),
            question_text: "Fill in the blank: She ___ to school.".into(),
            options: None,
            correct_answer: correct.map(str::to_string),
            rubric: None,
            concept_tags: vec!["Present Simple".into()],
            estimated_time: 2,
        }
    }

    #[test]
    fn blank_answer_short_circuits_every_type() {
        let engine = GradingEngine::new();
        for t in [
            QuestionType::Grammar,
            QuestionType::Vocabulary,
            QuestionType::Reading,
            QuestionType::Writing,
            QuestionType::Unknown,
        ] {
            for answer in ["", "   ", "\n\t"] {
                let r = engine.grade_answer(&q("q", t, Some("goes")), answer);
                assert_eq!(r.score, 0);
                assert!(!r.is_correct);
                assert_eq!(r.weaknesses, vec!["no answer provided"]);
                assert_eq!(r.suggestions, vec!["Please provide an answer"]);
                assert!(r.strengths.is_empty());
                assert!(r.detailed_analysis.contains("did not submit"));
            }
        }
    }

    #[test]
    fn unknown_type_gets_zero() {
        let engine = GradingEngine::new();
        let r = engine.grade_answer(&q("q", QuestionType::Unknown, Some("x")), "x");
        assert_eq!(r.score, 0);
        assert!(!r.is_correct);
        assert!(r.feedback.to_lowercase().contains("unknown question type"));
        assert!(r.strengths.is_empty() && r.weaknesses.is_empty() && r.suggestions.is_empty());
    }

    #[test]
    fn dispatches_by_type() {
        let engine = GradingEngine::new();
        let grammar = engine.grade_answer(&q("g", QuestionType::Grammar, Some("goes")), "goes");
        assert_eq!(grammar.score, 100);
        let vocab = engine.grade_answer(&q("v", QuestionType::Vocabulary, Some("look up")), "Look Up");
        assert_eq!(vocab.score, 100);
        let vocab_miss = engine.grade_answer(&q("v", QuestionType::Vocabulary, Some("look up")), "look");
        assert_eq!(vocab_miss.score, 0);
    }

    #[test]
    fn custom_grader_overrides_builtin() {
        struct Always(u32);
        impl Grader for Always {
            fn grade(&self, _: &Question, _: &str) -> GradingResult {
                GradingResult {
                    score: self.0,
                    is_correct: true,
                    feedback: "ok".into(),
                    strengths: vec![],
                    weaknesses: vec![],
                    suggestions: vec![],
                    detailed_analysis: String::new(),
                }
            }
        }

        let engine = GradingEngine::new().with_grader(QuestionType::Unknown, Arc::new(Always(42)));
        let r = engine.grade_answer(&q("q", QuestionType::Unknown, None), "anything");
        assert_eq!(r.score, 42);
    }

    #[test]
    fn multiple_answers_one_entry_per_question() {
        let engine = GradingEngine::new();
        let questions = vec![
            q("q1", QuestionType::Grammar, Some("goes")),
            q("q2", QuestionType::Vocabulary, Some("look up")),
            q("q3", QuestionType::Grammar, Some("went")),
        ];
        let mut answers = HashMap::new();
        answers.insert("q1".to_string(), "goes".to_string());
        answers.insert("q2".to_string(), "give up".to_string());
        answers.insert("unrelated".to_string(), "ignored".to_string());

        let results = engine.grade_multiple_answers(&questions, &answers);
        assert_eq!(results.len(), 3);
        assert_eq!(results["q1"].score, 100);
        assert_eq!(results["q2"].score, 0);
        assert_eq!(results["q3"].weaknesses, vec!["no answer provided"]);
        assert!(!results.contains_key("unrelated"));
    }

    #[test]
    fn scores_always_in_range() {
        let engine = GradingEngine::new();
        let answers = ["a", "goes", "GOES!!!", "x y z", "The quick brown fox jumps."];
        for t in [
            QuestionType::Grammar,
            QuestionType::Vocabulary,
            QuestionType::Reading,
            QuestionType::Writing,
        ] {
            for correct in [None, Some(""), Some("goes"), Some("a much longer reference answer")] {
                for a in answers {
                    let r = engine.grade_answer(&q("q", t, correct), a);
                    assert!(r.score <= 100, "{t} {a:?} scored {}", r.score);
                }
            }
        }
    }
}
