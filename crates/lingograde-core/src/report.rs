//! Grading report types with JSON persistence.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::GradingEngine;
use crate::model::{GradingResult, QuestionBank};
use crate::statistics::{calculate_total_score, count_correct, generate_overall_feedback};

/// The graded outcome of one submission against one question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the question bank.
    pub bank: BankSummary,
    /// Per-question results keyed by question id.
    pub results: HashMap<String, GradingResult>,
    /// Rounded mean of all question scores.
    pub total_score: u32,
    /// Number of questions graded correct.
    pub correct_count: usize,
    /// Tiered summary sentence.
    pub overall_feedback: String,
}

/// Summary of a question bank (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl GradingReport {
    /// Grade every question in `bank` and summarize the submission.
    pub fn build(
        engine: &GradingEngine,
        bank: &QuestionBank,
        answers: &HashMap<String, String>,
    ) -> Self {
        let results = engine.grade_multiple_answers(&bank.questions, answers);
        let total_score = calculate_total_score(results.values());
        let overall_feedback = generate_overall_feedback(results.values(), total_score);

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: bank.id.clone(),
                name: bank.name.clone(),
                question_count: bank.questions.len(),
            },
            correct_count: count_correct(results.values()),
            results,
            total_score,
            overall_feedback,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradingReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Results sorted by question id, for stable display.
    pub fn sorted_results(&self) -> Vec<(&String, &GradingResult)> {
        let mut rows: Vec<_> = self.results.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.bank.name));
        md.push_str(&format!(
            "**Score:** {} ({} of {} correct)\n\n",
            self.total_score,
            self.correct_count,
            self.results.len()
        ));
        md.push_str(&format!("{}\n\n", self.overall_feedback));

        md.push_str("| Question | Score | Correct | Feedback |\n");
        md.push_str("|----------|-------|---------|----------|\n");
        for (id, r) in self.sorted_results() {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                id,
                r.score,
                if r.is_correct { "yes" } else { "no" },
                r.feedback
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Question, QuestionType};

    fn bank() -> QuestionBank {
        let q = |id: &str, t, correct: &str| Question {
            id: id.into(),
            question_type: t,
            difficulty: Difficulty::Beginner,
            title: id.into(),
            question_text: "Answer.".into(),
            options: None,
            correct_answer: Some(correct.into()),
            rubric: None,
            concept_tags: vec!["Grammar".into()],
            estimated_time: 1,
        };
        QuestionBank {
            id: "b".into(),
            name: "Bank".into(),
            description: String::new(),
            questions: vec![
                q("q1", QuestionType::Grammar, "goes"),
                q("q2", QuestionType::Vocabulary, "look up"),
            ],
        }
    }

    #[test]
    fn build_grades_and_aggregates() {
        let mut answers = HashMap::new();
        answers.insert("q1".to_string(), "goes".to_string());
        answers.insert("q2".to_string(), "give up".to_string());

        let report = GradingReport::build(&GradingEngine::new(), &bank(), &answers);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.total_score, 50);
        assert_eq!(report.correct_count, 1);
        assert!(report.overall_feedback.contains("1 of 2"));
        assert_eq!(report.bank.question_count, 2);
    }

    #[test]
    fn json_roundtrip() {
        let report = GradingReport::build(&GradingEngine::new(), &bank(), &HashMap::new());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = GradingReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.total_score, 0);
        assert_eq!(loaded.results["q1"].weaknesses, vec!["no answer provided"]);
    }

    #[test]
    fn markdown_output() {
        let report = GradingReport::build(&GradingEngine::new(), &bank(), &HashMap::new());
        let md = report.to_markdown();
        assert!(md.contains("## Bank"));
        assert!(md.contains("| q1 | 0 | no |"));
    }
}
