//! Core data model types for lingograde.
//!
//! These are the fundamental types the grading engine, the document
//! analyzer, and the question synthesizer exchange with the surrounding
//! application.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The kind of exercise a question is, which selects its grader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Grammar,
    Vocabulary,
    Reading,
    Writing,
    /// Anything the question bank declares that we don't grade.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Grammar => write!(f, "grammar"),
            QuestionType::Vocabulary => write!(f, "vocabulary"),
            QuestionType::Reading => write!(f, "reading"),
            QuestionType::Writing => write!(f, "writing"),
            QuestionType::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grammar" => Ok(QuestionType::Grammar),
            "vocabulary" | "vocab" => Ok(QuestionType::Vocabulary),
            "reading" => Ok(QuestionType::Reading),
            "writing" => Ok(QuestionType::Writing),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// How hard a question is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All difficulties in enumeration order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A single assessment item, authored outside the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    pub id: String,
    /// Exercise kind.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub title: String,
    /// The prompt shown to the learner. May span several lines.
    pub question_text: String,
    /// Choices for multiple-choice items.
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// Reference answer. Absent for free writing items.
    #[serde(default)]
    pub correct_answer: Option<String>,
    /// Grading guidance, surfaced verbatim in detailed analysis.
    #[serde(default)]
    pub rubric: Option<String>,
    #[serde(default)]
    pub concept_tags: Vec<String>,
    /// Expected time to answer, in minutes.
    #[serde(default)]
    pub estimated_time: u32,
}

/// Outcome of grading one answer against one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    /// Score in `0..=100`.
    pub score: u32,
    pub is_correct: bool,
    pub feedback: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub detailed_analysis: String,
}

/// Classification of one chunk of an analyzed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedQuestion {
    /// The chunk text, truncated to 200 characters plus an ellipsis.
    pub original_text: String,
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub concept_tags: Vec<String>,
    /// Human-readable summary such as "grammar question focusing on Past Simple".
    pub extracted_pattern: String,
}

/// Broad kind of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
}

impl FileKind {
    /// Classify by declared media type: anything mentioning "pdf" is a PDF.
    pub fn from_media_type(media_type: &str) -> Self {
        if media_type.to_lowercase().contains("pdf") {
            FileKind::Pdf
        } else {
            FileKind::Image
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Pdf => write!(f, "pdf"),
            FileKind::Image => write!(f, "image"),
        }
    }
}

/// An uploaded reference document.
///
/// The core only looks at `name` and `media_type`; `data` is handed to the
/// text extractor untouched.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data,
        }
    }
}

/// Result of one document analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysisResult {
    pub file_id: Uuid,
    pub file_name: String,
    pub file_kind: FileKind,
    pub questions: Vec<AnalyzedQuestion>,
    /// Most frequent chunk difficulty.
    pub suggested_difficulty: Difficulty,
    /// Union of all chunk concept tags, in order of first appearance.
    pub detected_concepts: Vec<String>,
    pub processing_time_ms: u64,
}

/// A named collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_display_and_parse() {
        assert_eq!(QuestionType::Grammar.to_string(), "grammar");
        assert_eq!(QuestionType::Writing.to_string(), "writing");
        assert_eq!(
            "Vocabulary".parse::<QuestionType>().unwrap(),
            QuestionType::Vocabulary
        );
        assert_eq!("vocab".parse::<QuestionType>().unwrap(), QuestionType::Vocabulary);
        assert!("listening".parse::<QuestionType>().is_err());
    }

    #[test]
    fn unknown_question_type_deserializes() {
        let json = r#"{
            "id": "q1",
            "type": "listening",
            "difficulty": "beginner",
            "title": "Listen",
            "question_text": "Listen and answer"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.question_type, QuestionType::Unknown);
        assert!(q.concept_tags.is_empty());
        assert_eq!(q.estimated_time, 0);
    }

    #[test]
    fn difficulty_parse() {
        assert_eq!("ADVANCED".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::ALL[0], Difficulty::Beginner);
    }

    #[test]
    fn file_kind_from_media_type() {
        assert_eq!(FileKind::from_media_type("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_media_type("image/png"), FileKind::Image);
        assert_eq!(FileKind::from_media_type(""), FileKind::Image);
    }

    #[test]
    fn grading_result_serde_roundtrip() {
        let result = GradingResult {
            score: 85,
            is_correct: true,
            feedback: "Good".into(),
            strengths: vec!["relevant content".into()],
            weaknesses: vec![],
            suggestions: vec![],
            detailed_analysis: String::new(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: GradingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
