//! lingograde-core — Grading engine, document analysis, and question synthesis.
//!
//! This crate holds the data model, the per-type graders and their
//! orchestrator, submission-level aggregation, and the pipeline that turns
//! an uploaded worksheet into new practice questions. Text extraction is
//! delegated to a [`traits::TextExtractor`] supplied by the caller.

pub mod analyzer;
pub mod engine;
pub mod error;
pub mod graders;
pub mod lexicon;
pub mod model;
pub mod parser;
pub mod report;
pub mod similarity;
pub mod statistics;
pub mod synthesizer;
pub mod traits;

pub use analyzer::DocumentAnalyzer;
pub use engine::GradingEngine;
pub use error::ExtractionError;
pub use model::{
    AnalyzedQuestion, Difficulty, FileAnalysisResult, FileKind, GradingResult, Question,
    QuestionBank, QuestionType, UploadedFile,
};
pub use synthesizer::QuestionSynthesizer;
