use anyhow::{Context, Result};
use capdoc::article::{self, DEFAULT_ARTICLE_PATH};
use capdoc::{CapabilityStatement, StatementContent};
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "capdoc",
    about = "Generate the capability statement PDF and security design article",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the capability statement PDF
    Statement {
        /// Output file path
        #[arg(short, long, default_value = "capability-statement.pdf")]
        output: PathBuf,

        /// JSON file with branding, intro and sections (defaults to the bundled copy)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Date printed in the footer, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Write the token and key security design article
    Article {
        /// Output markdown file path
        #[arg(short, long, default_value = DEFAULT_ARTICLE_PATH)]
        output: PathBuf,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "capdoc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Statement {
            output,
            content,
            date,
        } => {
            let content = match content {
                Some(path) => StatementContent::from_json_file(&path)
                    .with_context(|| format!("reading content from {}", path.display()))?,
                None => StatementContent::waterapps(),
            };
            let updated = date.unwrap_or_else(|| Local::now().date_naive());
            tracing::debug!(
                output = %output.display(),
                %updated,
                "generating capability statement"
            );

            let report = CapabilityStatement::new(content, updated)
                .save(&output)
                .with_context(|| format!("writing {}", output.display()))?;

            println!(
                "Wrote {} ({} pages)",
                report.path.display(),
                report.page_count
            );
        }

        Commands::Article { output } => {
            article::write_article(&output, Utc::now())
                .with_context(|| format!("writing {}", output.display()))?;

            println!("Wrote article: {}", output.display());
        }
    }

    Ok(())
}
