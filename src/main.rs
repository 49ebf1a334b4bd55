use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use spyglass::analysis;
use spyglass::config::AnalysisConfig;
use spyglass::content::provider::{ContentProvider, JsonFileProvider};
use spyglass::content::Document;
use spyglass::output::terminal;
use spyglass::text::Tokenizer;
use spyglass::themes::cluster;
use spyglass::themes::extract::PhraseExtractor;
use spyglass::themes::score::score_themes;

/// Spyglass: competitive messaging intelligence.
///
/// Extracts recurring messaging themes from your content and your
/// competitors', then reports overlap, white space, content gaps, and a
/// differentiation score.
#[derive(Parser)]
#[command(name = "spyglass", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full competitive analysis and print the report
    Analyze {
        /// JSON file with your documents
        #[arg(long)]
        yours: PathBuf,

        /// JSON file with competitor documents
        #[arg(long)]
        competitors: PathBuf,

        /// Number of competitors under analysis (default: distinct source
        /// ids in the competitor file)
        #[arg(long)]
        competitor_count: Option<usize>,

        /// Minimum corpus-wide phrase frequency to keep a theme
        #[arg(long)]
        min_frequency: Option<u32>,

        /// Maximum themes to extract per corpus
        #[arg(long)]
        max_themes: Option<usize>,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Extract and display themes for a single document set
    Themes {
        /// JSON file with documents
        input: PathBuf,

        /// Minimum corpus-wide phrase frequency to keep a theme
        #[arg(long)]
        min_frequency: Option<u32>,

        /// Maximum themes to extract
        #[arg(long)]
        max_themes: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spyglass=info")),
        )
        .init();

    let cli = Cli::parse();
    let provider = JsonFileProvider;

    match cli.command {
        Commands::Analyze {
            yours,
            competitors,
            competitor_count,
            min_frequency,
            max_themes,
            json,
        } => {
            let your_documents = provider.fetch(&yours.to_string_lossy()).await?;
            let competitor_documents = provider.fetch(&competitors.to_string_lossy()).await?;

            let competitor_count =
                competitor_count.unwrap_or_else(|| distinct_sources(&competitor_documents));
            info!(
                your_documents = your_documents.len(),
                competitor_documents = competitor_documents.len(),
                competitor_count,
                "Running analysis"
            );

            let config = build_config(min_frequency, max_themes);
            let report = analysis::analyze(
                &your_documents,
                &competitor_documents,
                competitor_count,
                &config,
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Themes {
            input,
            min_frequency,
            max_themes,
        } => {
            let documents = provider.fetch(&input.to_string_lossy()).await?;
            let config = build_config(min_frequency, max_themes);
            config.validate()?;

            let tokenizer = Tokenizer::new();
            let extractor = PhraseExtractor {
                min_frequency: config.min_theme_frequency,
                max_themes: config.max_themes,
            };
            let stats = extractor.extract(&tokenizer, &documents);
            let themes = score_themes(stats, &tokenizer, &documents);
            let clusters = cluster::cluster(&themes, distinct_sources(&documents));

            terminal::display_themes(&themes, &clusters);
        }
    }

    Ok(())
}

/// Env-derived defaults, overridden by CLI flags.
fn build_config(min_frequency: Option<u32>, max_themes: Option<usize>) -> AnalysisConfig {
    let mut config = AnalysisConfig::from_env();
    if let Some(min_frequency) = min_frequency {
        config.min_theme_frequency = min_frequency;
    }
    if let Some(max_themes) = max_themes {
        config.max_themes = max_themes;
    }
    config
}

fn distinct_sources(documents: &[Document]) -> usize {
    documents
        .iter()
        .map(|d| d.source_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}
