use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::PathBuf;

use crate::constants::TEMP_FILE_SUFFIX;

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Extensions to keep, without the leading dot. Empty keeps every file.
    pub extensions: Vec<String>,
}

/// Collects every regular file under `root`, sorted by path.
///
/// Symlinks count when they resolve to a regular file; the link path is returned.
pub fn collect_files(cfg: &CollectorConfig) -> Result<Vec<PathBuf>> {
    debug!("Collecting files to rewrite");
    let mut files: Vec<PathBuf> = Vec::new();
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    // Generated bindings are usually gitignored, so ignore files must not apply.
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if dent.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        // Follows symlinks, dangling ones are not files.
        if !p.is_file() {
            trace!("Skipping non-file entry: {}", p.display());
            continue;
        }

        let name = p.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if name.ends_with(TEMP_FILE_SUFFIX) {
            debug!("Skipping leftover temporary file: {}", p.display());
            continue;
        }

        if !cfg.extensions.is_empty() {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or_default();
            if !cfg.extensions.iter().any(|e| e == ext) {
                trace!("Skipping file with unselected extension: {}", p.display());
                continue;
            }
        }

        trace!("Found file: {}", p.display());
        files.push(p.to_path_buf());
    }

    files.sort();
    debug!("Collected {} files", files.len());
    Ok(files)
}
