//! lingograde CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "lingograde",
    version,
    about = "Automated grading for language-learning exercises"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade an answer sheet against a question bank
    Grade {
        /// Path to the .toml question bank
        #[arg(long)]
        questions: PathBuf,

        /// Path to the answer sheet (.toml or .json)
        #[arg(long)]
        answers: PathBuf,

        /// Write the full report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Analyze a worksheet and optionally generate practice questions
    Analyze {
        /// Document to analyze (PDF or image)
        #[arg(long)]
        file: PathBuf,

        /// Media type of the document (guessed from the extension if omitted)
        #[arg(long)]
        media_type: Option<String>,

        /// Use the contents of this text file instead of running extraction
        #[arg(long)]
        text_file: Option<PathBuf>,

        /// Generate similar questions (count defaults to the configured value)
        #[arg(long)]
        generate: Option<Option<usize>>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the analysis (and generated questions) as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a question bank file or directory
        #[arg(long)]
        questions: PathBuf,
    },

    /// Create starter config and example question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lingograde=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            questions,
            answers,
            output,
            format,
        } => commands::grade::execute(questions, answers, output, format),
        Commands::Analyze {
            file,
            media_type,
            text_file,
            generate,
            config,
            output,
        } => {
            commands::analyze::execute(file, media_type, text_file, generate, config, output).await
        }
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
