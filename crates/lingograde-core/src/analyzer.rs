//! Document analysis: extract text, split it into question chunks, and
//! classify each chunk's type, difficulty, and concepts.

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use regex::Regex;
use uuid::Uuid;

use crate::error::ExtractionError;
use crate::lexicon::{
    all_matches, first_match, CONCEPTS, DEFAULT_CONCEPT, DIFFICULTY_TRIGGERS, TYPE_TRIGGERS,
};
use crate::model::{
    AnalyzedQuestion, Difficulty, FileAnalysisResult, FileKind, QuestionType, UploadedFile,
};
use crate::traits::TextExtractor;

/// Chunks shorter than this (after trimming) are dropped.
const MIN_CHUNK_CHARS: usize = 10;
/// Longest `original_text` kept before the ellipsis.
const MAX_ORIGINAL_CHARS: usize = 200;
const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

fn chunk_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| {
        Regex::new(r"(?im)question\s*\d+\s*:|^\s*\d+\.").expect("chunk separator regex is valid")
    })
}

/// Split document text on "Question N:" markers and numbered lines.
pub fn segment_text(text: &str) -> Vec<String> {
    chunk_separator()
        .split(text)
        .map(str::trim)
        .filter(|chunk| chunk.chars().count() >= MIN_CHUNK_CHARS)
        .map(str::to_string)
        .collect()
}

/// Infer the exercise type of a chunk. Defaults to grammar.
pub fn classify_type(chunk: &str) -> QuestionType {
    first_match(TYPE_TRIGGERS, &chunk.to_lowercase()).unwrap_or(QuestionType::Grammar)
}

/// Infer the difficulty of a chunk. Defaults to beginner.
pub fn classify_difficulty(chunk: &str) -> Difficulty {
    first_match(DIFFICULTY_TRIGGERS, &chunk.to_lowercase()).unwrap_or(Difficulty::Beginner)
}

/// Concepts a chunk exercises, or "General English" when none match.
pub fn detect_concepts(chunk: &str) -> Vec<String> {
    let tags = all_matches(CONCEPTS, &chunk.to_lowercase());
    if tags.is_empty() {
        vec![DEFAULT_CONCEPT.to_string()]
    } else {
        tags.into_iter().map(str::to_string).collect()
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_ORIGINAL_CHARS {
        let head: String = text.chars().take(MAX_ORIGINAL_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn describe(question_type: QuestionType, concept_tags: &[String]) -> String {
    format!(
        "{question_type} question focusing on {}",
        concept_tags.join(", ")
    )
}

/// Classify one chunk.
pub fn analyze_chunk(chunk: &str) -> AnalyzedQuestion {
    let question_type = classify_type(chunk);
    let concept_tags = detect_concepts(chunk);
    AnalyzedQuestion {
        original_text: truncate(chunk),
        question_type,
        difficulty: classify_difficulty(chunk),
        extracted_pattern: describe(question_type, &concept_tags),
        concept_tags,
    }
}

/// Segment and classify a whole document.
///
/// Always returns at least one entry: text with no usable chunks yields a
/// single intermediate grammar question covering its opening.
pub fn analyze_text(text: &str) -> Vec<AnalyzedQuestion> {
    let analyzed: Vec<AnalyzedQuestion> = segment_text(text)
        .iter()
        .map(|chunk| analyze_chunk(chunk))
        .collect();

    if !analyzed.is_empty() {
        return analyzed;
    }

    let concept_tags = vec![DEFAULT_CONCEPT.to_string()];
    vec![AnalyzedQuestion {
        original_text: truncate(text.trim()),
        question_type: QuestionType::Grammar,
        difficulty: Difficulty::Intermediate,
        extracted_pattern: describe(QuestionType::Grammar, &concept_tags),
        concept_tags,
    }]
}

/// Most common difficulty; ties go to the earlier of beginner, intermediate, advanced.
pub fn suggested_difficulty(questions: &[AnalyzedQuestion]) -> Difficulty {
    let mut best = Difficulty::ALL[0];
    let mut best_count = 0;
    for difficulty in Difficulty::ALL {
        let count = questions.iter().filter(|q| q.difficulty == difficulty).count();
        if count > best_count {
            best = difficulty;
            best_count = count;
        }
    }
    best
}

/// Union of concept tags in order of first appearance.
pub fn detected_concepts(questions: &[AnalyzedQuestion]) -> Vec<String> {
    let mut concepts: Vec<String> = Vec::new();
    for tag in questions.iter().flat_map(|q| &q.concept_tags) {
        if !concepts.contains(tag) {
            concepts.push(tag.clone());
        }
    }
    concepts
}

/// Runs extraction and classification for uploaded documents.
pub struct DocumentAnalyzer {
    extractor: Arc<dyn TextExtractor>,
    timeout: Duration,
}

impl DocumentAnalyzer {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            extractor,
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    /// Upper bound on a single extraction call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout in whole seconds, rounded up so sub-second limits never read as 0.
    fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs_f64().ceil() as u64
    }

    /// Extract and analyze one file.
    ///
    /// Extraction failures, including timeouts, are returned as errors and
    /// never turned into an empty analysis.
    pub async fn analyze_file(
        &self,
        file: &UploadedFile,
    ) -> Result<FileAnalysisResult, ExtractionError> {
        let start = Instant::now();
        let file_kind = FileKind::from_media_type(&file.media_type);

        let text = tokio::time::timeout(self.timeout, self.extractor.extract(file))
            .await
            .map_err(|_| ExtractionError::Timeout(self.timeout_secs()))??;

        let questions = analyze_text(&text);
        let result = FileAnalysisResult {
            file_id: Uuid::new_v4(),
            file_name: file.name.clone(),
            file_kind,
            suggested_difficulty: suggested_difficulty(&questions),
            detected_concepts: detected_concepts(&questions),
            questions,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            file = %file.name,
            kind = %file_kind,
            extractor = self.extractor.name(),
            questions = result.questions.len(),
            "analyzed document"
        );

        Ok(result)
    }
}
