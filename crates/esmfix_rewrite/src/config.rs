use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use esmfix_core::{DEFAULT_TARGET_DIR, find_git_root};

#[derive(Debug, Clone, Parser)]
#[command(name = "fix")]
#[command(about = "Rewrite relative import/export specifiers for strict ESM resolution")]
pub struct Config {
    /// Directory of generated bindings to rewrite (defaults to <git root>/typechain-types)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Only rewrite files with these extensions, comma separated (e.g. ts,js)
    #[arg(long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Number of worker threads (0 uses one per CPU)
    #[arg(long, default_value = "0")]
    pub threads: usize,
}

impl Config {
    /// Initialize the config by resolving the target directory and normalizing extensions
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r
        } else {
            debug!("No root provided, using {} under the git root", DEFAULT_TARGET_DIR);
            find_git_root()?.join(DEFAULT_TARGET_DIR)
        };

        if !root.is_dir() {
            return Err(anyhow!("{} does not exist or is not a directory", root.display()));
        }
        let root = root.canonicalize().unwrap_or(root);
        info!("Using root directory: {}", root.display());

        self.extensions = self
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        debug!("Extension filter: {:?}", self.extensions);

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}
