//! Triage CLI - GitHub issue difficulty classification from the command line.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::process;
use tracing_subscriber::EnvFilter;
use triage::{ClassificationRequest, ClassifierConfig, IssueClassifier};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Classify GitHub issue difficulty (easy / medium / difficult)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single issue
    ///
    /// Reads provider credentials from MOSAIA_API_KEY, MOSAIA_AGENT_ID and
    /// OPENROUTER_API_KEY.
    Classify {
        /// Issue title
        #[arg(long)]
        title: String,

        /// Issue body text
        #[arg(long, default_value = "")]
        description: String,

        /// Primary repository language
        #[arg(long, default_value = "")]
        language: String,

        /// Issue label (repeat for multiple labels)
        #[arg(long = "label", value_name = "LABEL")]
        labels: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            title,
            description,
            language,
            labels,
            format,
        } => {
            let config = ClassifierConfig::from_env();
            let classifier = IssueClassifier::new(config).context(
                "provider credentials missing; set MOSAIA_API_KEY, MOSAIA_AGENT_ID and OPENROUTER_API_KEY",
            )?;

            let request =
                ClassificationRequest::new(title, description, language).with_labels(labels);

            match classifier.classify(&request).await {
                Some(result) => match format {
                    OutputFormat::Human => println!("difficulty: {}", result.difficulty),
                    OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
                },
                None => {
                    eprintln!("classification unavailable: all providers failed");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}
