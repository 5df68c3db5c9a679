//! The `lingograde analyze` command.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

use lingograde_core::analyzer::DocumentAnalyzer;
use lingograde_core::model::{FileAnalysisResult, Question, UploadedFile};
use lingograde_core::synthesizer::QuestionSynthesizer;
use lingograde_core::traits::TextExtractor;
use lingograde_extractors::config::load_config_from;
use lingograde_extractors::{create_extractor, StaticExtractor};

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    analysis: &'a FileAnalysisResult,
    generated_questions: &'a [Question],
}

pub async fn execute(
    file_path: PathBuf,
    media_type: Option<String>,
    text_file: Option<PathBuf>,
    generate: Option<Option<usize>>,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    tracing::debug!(?config, "loaded config");

    let media_type = match media_type {
        Some(m) => m,
        None => guess_media_type(&file_path)?,
    };
    let data = std::fs::read(&file_path)
        .with_context(|| format!("failed to read document: {}", file_path.display()))?;
    let name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string());
    let file = UploadedFile::new(name, media_type, data);

    let timeout = Duration::from_secs(config.extraction_timeout_secs);
    let extractor: Arc<dyn TextExtractor> = match &text_file {
        Some(path) => Arc::new(StaticExtractor::from_file(path)?),
        None => create_extractor(&config.extractor, timeout),
    };

    let analyzer = DocumentAnalyzer::new(extractor).with_timeout(timeout);
    let analysis = analyzer
        .analyze_file(&file)
        .await
        .with_context(|| format!("failed to analyze {}", file_path.display()))?;

    let generated = match generate {
        Some(count) => {
            let count = count.unwrap_or(config.default_question_count);
            QuestionSynthesizer::new().generate_similar_questions(&analysis.questions, count)
        }
        None => Vec::new(),
    };

    print_analysis(&analysis);
    if generate.is_some() {
        print_generated(&generated);
    }

    if let Some(path) = &output {
        let json = serde_json::to_string_pretty(&AnalyzeOutput {
            analysis: &analysis,
            generated_questions: &generated,
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write analysis to {}", path.display()))?;
        eprintln!("Analysis written to {}", path.display());
    }

    Ok(())
}

fn guess_media_type(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let media_type = match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        _ => anyhow::bail!(
            "cannot determine media type of {}; pass --media-type",
            path.display()
        ),
    };
    Ok(media_type.to_string())
}

fn print_analysis(analysis: &FileAnalysisResult) {
    use comfy_table::{Cell, Table};

    println!(
        "{} ({}): {} question(s) in {}ms",
        analysis.file_name,
        analysis.file_kind,
        analysis.questions.len(),
        analysis.processing_time_ms
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Type", "Difficulty", "Concepts", "Text"]);
    for (i, q) in analysis.questions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(q.question_type),
            Cell::new(q.difficulty),
            Cell::new(q.concept_tags.join(", ")),
            Cell::new(&q.original_text),
        ]);
    }
    println!("{table}");

    println!("\nSuggested difficulty: {}", analysis.suggested_difficulty);
    println!("Detected concepts: {}", analysis.detected_concepts.join(", "));
}

fn print_generated(questions: &[Question]) {
    println!("\nGenerated {} question(s):", questions.len());
    for (i, q) in questions.iter().enumerate() {
        println!("\n{}. {} [{} min]", i + 1, q.title, q.estimated_time);
        println!("   {}", q.question_text);
        if let Some(options) = &q.options {
            println!("   Options: {}", options.join(" | "));
        }
    }
}
