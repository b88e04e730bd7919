use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analyzer::LsmAnalyzer;

/// Default CSV path when neither `--output` nor `LSM_OUTPUT` is given.
pub const DEFAULT_OUTPUT: &str = "./lsm_results.csv";

/// Configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, before this runs.
/// Command-line flags override anything set here.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `.dic` dictionary to load instead of the bundled one (LSM_DICTIONARY)
    pub dictionary_path: Option<PathBuf>,
    /// CSV output path (LSM_OUTPUT)
    pub output_path: PathBuf,
    /// Worker threads for parallel segment scoring (LSM_THREADS).
    /// `None` leaves the choice to rayon.
    pub threads: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default, so this only fails on a malformed value.
    pub fn load() -> Result<Self> {
        let threads = match env::var("LSM_THREADS") {
            Ok(raw) if !raw.trim().is_empty() => {
                let n: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("LSM_THREADS must be a number, got `{raw}`"))?;
                if n == 0 {
                    anyhow::bail!("LSM_THREADS must be at least 1");
                }
                Some(n)
            }
            _ => None,
        };

        Ok(Self {
            dictionary_path: env::var("LSM_DICTIONARY")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            output_path: env::var("LSM_OUTPUT")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            threads,
        })
    }

    /// Apply a `--dictionary` override.
    pub fn with_dictionary(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.dictionary_path = path;
        }
        self
    }

    /// Build the analyzer from the configured dictionary, or the bundled one.
    pub fn analyzer(&self) -> Result<LsmAnalyzer> {
        match &self.dictionary_path {
            Some(path) => {
                let source = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read dictionary {}", path.display())
                })?;
                LsmAnalyzer::initialize(&source)
                    .with_context(|| format!("Invalid dictionary {}", path.display()))
            }
            None => LsmAnalyzer::bundled(),
        }
    }

    /// Size the global rayon pool, if a thread count was configured.
    pub fn init_thread_pool(&self) -> Result<()> {
        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to configure the worker thread pool")?;
        }
        Ok(())
    }
}
