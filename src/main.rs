use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use papercheck::config::Config;
use papercheck::document;
use papercheck::output::{self, terminal};
use papercheck::pipeline::batch::{self, CachedReference};

/// papercheck: flag documents whose wording follows an original.
///
/// Segments Chinese text into words, counts term frequencies and compares the
/// two documents by cosine similarity (0.00 = nothing shared, 1.00 = same
/// word distribution).
#[derive(Parser)]
#[command(name = "papercheck", version, about)]
struct Cli {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Tokenizer options. Each overrides the matching PAPERCHECK_* variable.
#[derive(Args)]
struct TokenizerArgs {
    /// Stop word file (one word per line)
    #[arg(long, global = true, value_name = "FILE")]
    stopwords: Option<PathBuf>,

    /// Also drop the built-in Chinese stop words
    #[arg(long, global = true)]
    builtin_stopwords: bool,

    /// jieba-format user dictionary to merge into the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    user_dict: Option<PathBuf>,

    /// Use the HMM to join words missing from the dictionary
    #[arg(long, global = true)]
    hmm: bool,

    /// Compare full-width and half-width characters as written
    #[arg(long, global = true)]
    no_normalize: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a suspect against an original and write the score to a file
    Check {
        /// The original document
        original: PathBuf,
        /// The document suspected of copying it
        suspect: PathBuf,
        /// Where to write the score
        output: PathBuf,
        /// Decimal places in the written score (default: 2)
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Rank several suspects against one original
    Batch {
        /// The original document
        original: PathBuf,
        /// Documents to compare against it
        #[arg(required = true)]
        suspects: Vec<PathBuf>,
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how a document is segmented and counted
    Segment {
        /// The document to segment
        file: PathBuf,
        /// How many of the most frequent terms to list (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
        /// Print tokens and counts as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so scores on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("papercheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = apply_overrides(Config::load()?, &cli.tokenizer);

    match cli.command {
        Commands::Check {
            original,
            suspect,
            output: output_path,
            precision,
        } => {
            let original_text = document::load(&original)?;
            let suspect_text = document::load(&suspect)?;

            let pipeline = config.build_pipeline()?;
            let score = pipeline.score(&original_text, &suspect_text);

            let precision = precision.unwrap_or(config.precision);
            output::write_score(&output_path, score, precision)?;

            terminal::display_check(
                &original.display().to_string(),
                &suspect.display().to_string(),
                score,
                precision,
            );
            println!(
                "\n{}",
                format!("Result written to {}", output_path.display()).dimmed()
            );
        }

        Commands::Batch {
            original,
            suspects,
            json,
        } => {
            let original_text = document::load(&original)?;
            let suspect_texts = suspects
                .iter()
                .map(|path| document::load(path))
                .collect::<Result<Vec<String>, _>>()?;

            let pipeline = config.build_pipeline()?;
            let reference = CachedReference::new(&pipeline, &original_text);

            let pb = if json {
                ProgressBar::hidden()
            } else {
                ProgressBar::new(suspect_texts.len() as u64)
            };
            pb.set_style(
                ProgressStyle::default_bar().template("  Scoring [{bar:30}] {pos}/{len} ({eta})")?,
            );
            let scores = reference.score_many_with(&suspect_texts, || pb.inc(1));
            pb.finish_and_clear();

            let labels: Vec<String> = suspects.iter().map(|p| p.display().to_string()).collect();
            let results = batch::rank(labels, &scores);
            info!(suspects = results.len(), "Batch scored");

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                terminal::display_ranking(&original.display().to_string(), &results);
            }
        }

        Commands::Segment { file, top, json } => {
            let text = document::load(&file)?;
            let pipeline = config.build_pipeline()?;

            let tokens = pipeline.tokenizer().tokenize(&text);
            let vector: papercheck::FrequencyVector = tokens.iter().collect();

            if json {
                let body = serde_json::json!({
                    "tokens": tokens,
                    "counts": vector,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                terminal::display_segmentation(&file.display().to_string(), &tokens, &vector, top);
            }
        }
    }

    Ok(())
}

/// Layer command-line flags over the environment configuration.
fn apply_overrides(mut config: Config, args: &TokenizerArgs) -> Config {
    if let Some(path) = &args.stopwords {
        config.stopwords_file = Some(path.clone());
    }
    if let Some(path) = &args.user_dict {
        config.user_dict = Some(path.clone());
    }
    config.builtin_stopwords |= args.builtin_stopwords;
    config.hmm |= args.hmm;
    if args.no_normalize {
        config.normalize = false;
    }
    config
}
