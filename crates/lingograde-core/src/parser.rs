//! Question bank and answer sheet loading.
//!
//! Question banks are TOML files with a `[bank]` header and a
//! `[[questions]]` array. Answer sheets map question ids to learner
//! answers and may be TOML or JSON.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionBank, QuestionType};

/// Intermediate TOML structure for parsing question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct AnswerSheet {
    #[serde(default)]
    answers: HashMap<String, String>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_question_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank`.
pub fn parse_question_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions: parsed.questions,
    })
}

/// Recursively load all `.toml` question banks from a directory.
///
/// Files that fail to parse (answer sheets, for instance) are skipped with
/// a warning.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// Load an answer sheet. `.json` files are read as JSON, anything else as TOML.
pub fn parse_answer_sheet(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;

    parse_answer_sheet_str(&content, path)
}

/// Parse answer sheet text; the format is chosen by `source_path`'s extension.
pub fn parse_answer_sheet_str(content: &str, source_path: &Path) -> Result<HashMap<String, String>> {
    let sheet: AnswerSheet = if source_path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?
    } else {
        toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?
    };
    Ok(sheet.answers)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_question(id: &str, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a question bank for common authoring mistakes.
pub fn validate_question_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "question bank has no questions".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for q in &bank.questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning::for_question(
                &q.id,
                format!("duplicate question ID: {}", q.id),
            ));
        }

        if q.question_text.trim().is_empty() {
            warnings.push(ValidationWarning::for_question(&q.id, "question text is empty"));
        }

        if q.question_type == QuestionType::Unknown {
            warnings.push(ValidationWarning::for_question(
                &q.id,
                "unknown question type; answers will score 0",
            ));
        }

        let needs_reference = matches!(
            q.question_type,
            QuestionType::Grammar | QuestionType::Vocabulary | QuestionType::Reading
        );
        let has_reference = q
            .correct_answer
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty());
        if needs_reference && !has_reference {
            warnings.push(ValidationWarning::for_question(
                &q.id,
                format!("{} question has no correct_answer", q.question_type),
            ));
        }

        if let (Some(options), Some(correct)) = (&q.options, &q.correct_answer) {
            let listed = options
                .iter()
                .any(|o| o.trim().eq_ignore_ascii_case(correct.trim()));
            if !listed {
                warnings.push(ValidationWarning::for_question(
                    &q.id,
                    "correct_answer is not one of the options",
                ));
            }
        }

        if q.concept_tags.is_empty() {
            warnings.push(ValidationWarning::for_question(&q.id, "no concept tags"));
        }
    }

    warnings
}
