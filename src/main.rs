use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use stylematch::config::Config;
use stylematch::input::{self, InputFormat};
use stylematch::output::csv_sink::CsvSink;
use stylematch::output::terminal;

/// stylematch: pairwise Language Style Matching.
///
/// Scores how closely every pair of speakers in a conversation match in
/// their use of function words (pronouns, articles, prepositions, ...).
#[derive(Parser)]
#[command(name = "stylematch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every speaker pair in one or more transcript/JSON files
    Analyze {
        /// Input files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// LIWC-style .dic dictionary (default: bundled LSM dictionary)
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// CSV output path (default: LSM_OUTPUT or ./lsm_results.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Input format
        #[arg(long, value_enum, default_value = "auto")]
        format: InputFormat,

        /// Score segments one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Don't print the per-file pair tables
        #[arg(long, short)]
        quiet: bool,
    },

    /// Compare two texts and show the per-category breakdown
    Compare {
        text_a: String,
        text_b: String,

        /// Treat the two arguments as file paths
        #[arg(long)]
        files: bool,

        /// LIWC-style .dic dictionary (default: bundled LSM dictionary)
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },

    /// List the dictionary's categories and entry counts
    Categories {
        /// LIWC-style .dic dictionary (default: bundled LSM dictionary)
        #[arg(long)]
        dictionary: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stylematch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            inputs,
            dictionary,
            output,
            format,
            sequential,
            quiet,
        } => {
            let config = Config::load()?.with_dictionary(dictionary);
            config.init_thread_pool()?;
            let analyzer = config.analyzer()?;
            let output_path = output.unwrap_or_else(|| config.output_path.clone());

            let mut sink = CsvSink::create(&output_path)?;

            let pb = if quiet && inputs.len() > 1 {
                let pb = ProgressBar::new(inputs.len() as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("  [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
                        .expect("valid template")
                        .progress_chars("=> "),
                );
                Some(pb)
            } else {
                None
            };

            let mut failed = 0usize;
            for path in &inputs {
                let document = match input::load_document(path, format) {
                    Ok(document) => document,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Skipping input");
                        eprintln!("  {} {:#}", "Skipped:".yellow(), e);
                        failed += 1;
                        if let Some(pb) = &pb {
                            pb.inc(1);
                        }
                        continue;
                    }
                };

                let rows = analyzer.process_document(&document, !sequential);
                sink.write_rows(&document.file_id, &rows)?;

                if !quiet {
                    terminal::display_rows(&document.file_id, &rows);
                }
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }

            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            let rows_written = sink.rows_written();
            sink.finish()?;
            info!(
                files = inputs.len() - failed,
                rows = rows_written,
                "Analysis complete"
            );

            println!("\n{}", "Analysis complete.".bold());
            println!("  Files analyzed: {}", inputs.len() - failed);
            println!("  Pairs written:  {rows_written}");
            println!("  Output:         {}", output_path.display());
            if failed > 0 {
                println!("  {} {} file(s) could not be read", "!".red(), failed);
            }
        }

        Commands::Compare {
            text_a,
            text_b,
            files,
            dictionary,
        } => {
            let config = Config::load()?.with_dictionary(dictionary);
            let analyzer = config.analyzer()?;

            let (text_a, text_b) = if files {
                (read_text(&text_a)?, read_text(&text_b)?)
            } else {
                (text_a, text_b)
            };

            let (a, b, breakdown) = analyzer.compare(&text_a, &text_b);
            terminal::display_comparison(&a, &b, breakdown.as_ref(), analyzer.dictionary());
        }

        Commands::Categories { dictionary } => {
            let config = Config::load()?.with_dictionary(dictionary);
            let analyzer = config.analyzer()?;
            terminal::display_dictionary(analyzer.dictionary());
        }
    }

    Ok(())
}

fn read_text(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
}
