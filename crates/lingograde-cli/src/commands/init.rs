//! The `lingograde init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("lingograde.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("banks")?;
    write_if_missing(Path::new("banks/example.toml"), EXAMPLE_BANK)?;
    write_if_missing(Path::new("banks/example-answers.toml"), EXAMPLE_ANSWERS)?;

    println!("\nNext steps:");
    println!("  1. Edit lingograde.toml to point at your extraction service");
    println!("  2. Run: lingograde validate --questions banks/example.toml");
    println!(
        "  3. Run: lingograde grade --questions banks/example.toml --answers banks/example-answers.toml"
    );

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lingograde configuration

extraction_timeout_secs = 30
default_question_count = 5

# Simulated OCR for demos. Replace with an HTTP service for real documents:
#
# [extractor]
# type = "http"
# base_url = "http://localhost:8090"
# api_key = "${LINGOGRADE_EXTRACTOR_KEY}"
[extractor]
type = "simulated"
delay_ms = 2000
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
name = "Example Question Bank"
description = "A small bank covering each question type"

[[questions]]
id = "grammar-1"
type = "grammar"
difficulty = "beginner"
title = "Past simple"
question_text = """
Complete the sentence with the past simple tense:
Yesterday I ___ (visit) my grandmother.
"""
correct_answer = "visited"
rubric = "Regular verbs add -ed in the past simple"
concept_tags = ["Past Simple"]
estimated_time = 2

[[questions]]
id = "vocabulary-1"
type = "vocabulary"
difficulty = "beginner"
title = "Synonyms"
question_text = "Choose the word that means the same as \"happy\"."
options = ["sad", "glad", "angry", "tired"]
correct_answer = "glad"
concept_tags = ["Vocabulary"]
estimated_time = 2

[[questions]]
id = "reading-1"
type = "reading"
difficulty = "intermediate"
title = "At the market"
question_text = """
Read the passage: "Anna buys fresh bread at the market every morning before work."
Question: What does Anna buy at the market?
"""
correct_answer = "fresh bread"
concept_tags = ["Reading Comprehension"]
estimated_time = 5

[[questions]]
id = "writing-1"
type = "writing"
difficulty = "beginner"
title = "Introduce yourself"
question_text = "Write a short paragraph introducing yourself: your name, age, and favorite hobby."
rubric = "At least 30 words in three or more sentences"
concept_tags = ["Writing"]
estimated_time = 10
"#;

const EXAMPLE_ANSWERS: &str = r#"[answers]
grammar-1 = "visited"
vocabulary-1 = "glad"
reading-1 = "She buys fresh bread"
writing-1 = """
My name is Anna and I am twenty years old. I live in a small town near the sea. \
My favorite hobby is painting because it helps me relax. I also enjoy reading books in the evening.
"""
"#;
