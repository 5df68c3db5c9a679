//! The `lingograde validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let banks = if questions_path.is_dir() {
        lingograde_core::parser::load_bank_directory(&questions_path)?
    } else {
        vec![lingograde_core::parser::parse_question_bank(&questions_path)?]
    };

    let mut total_warnings = 0;

    for bank in &banks {
        println!("Question bank: {} ({} questions)", bank.name, bank.questions.len());

        let warnings = lingograde_core::parser::validate_question_bank(bank);
        for w in &warnings {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
