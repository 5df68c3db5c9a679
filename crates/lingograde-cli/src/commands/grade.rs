//! The `lingograde grade` command.

use std::path::PathBuf;

use anyhow::Result;

use lingograde_core::engine::GradingEngine;
use lingograde_core::model::QuestionBank;
use lingograde_core::parser;
use lingograde_core::report::GradingReport;

pub fn execute(
    questions_path: PathBuf,
    answers_path: PathBuf,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let bank = parser::parse_question_bank(&questions_path)?;
    let answers = parser::parse_answer_sheet(&answers_path)?;

    let unknown: Vec<&String> = answers
        .keys()
        .filter(|id| !bank.questions.iter().any(|q| &q.id == *id))
        .collect();
    if !unknown.is_empty() {
        tracing::warn!(count = unknown.len(), "answers for unknown question ids ignored");
    }

    let report = GradingReport::build(&GradingEngine::new(), &bank, &answers);

    if let Some(path) = &output {
        report.save_json(path)?;
        eprintln!("Report written to {}", path.display());
    }

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => print_summary(&bank, &report),
        other => anyhow::bail!("unknown format: {other} (expected text, json or markdown)"),
    }

    Ok(())
}

fn print_summary(bank: &QuestionBank, report: &GradingReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Question", "Type", "Score", "Correct", "Feedback"]);

    for question in &bank.questions {
        let Some(result) = report.results.get(&question.id) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(&question.id),
            Cell::new(question.question_type),
            Cell::new(result.score),
            Cell::new(if result.is_correct { "yes" } else { "no" }),
            Cell::new(&result.feedback),
        ]);
    }

    println!("{} ({} questions)\n", bank.name, bank.questions.len());
    println!("{table}");
    println!("\nTotal score: {}", report.total_score);
    println!("{}", report.overall_feedback);
}
