use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{
    collections::HashSet,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    thread,
};

use esmfix_core::{CollectorConfig, collect_files, rewrite_specifiers};

use crate::{
    config::Config,
    types::{FileReport, FixResult},
    writer::write_content,
};

pub fn run_esm_fix(mut cfg: Config) -> Result<FixResult> {
    info!("Starting ESM specifier fix");

    cfg.initialize()?;
    let root = cfg.root()?.clone();

    debug!("Collecting files with extension filter: {:?}", cfg.extensions);
    let collector_cfg =
        CollectorConfig { root: root.clone(), extensions: cfg.extensions.clone() };
    let files = dedupe_targets(collect_files(&collector_cfg)?);
    if files.is_empty() {
        warn!("No files found under {}", root.display());
    }
    info!("Found {} files", files.len());

    let dry_run = cfg.dry_run;
    if dry_run {
        info!("Dry run, no files will be written");
    }

    let (reports, threads) = if cfg.threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(cfg.threads).build()?;
        let reports = pool.install(|| fix_all(&files, dry_run))?;
        (reports, pool.current_num_threads())
    } else {
        (fix_all(&files, dry_run)?, rayon::current_num_threads())
    };

    let reports: Vec<FileReport> = reports.into_iter().filter(FileReport::changed).collect();
    info!("ESM specifier fix complete. {} of {} files changed", reports.len(), files.len());

    Ok(FixResult { root, reports, files_scanned: files.len(), dry_run, threads })
}

/// Keeps the first path for each resolved file so symlinks sharing a target
/// are rewritten once.
fn dedupe_targets(files: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    files
        .into_iter()
        .filter(|file| {
            let target = fs::canonicalize(file).unwrap_or_else(|_| file.clone());
            if seen.insert(target) {
                true
            } else {
                debug!("Skipping {}, its target is already queued", file.display());
                false
            }
        })
        .collect()
}

fn fix_all(files: &[PathBuf], dry_run: bool) -> Result<Vec<FileReport>> {
    info!("Processing {} files in parallel", files.len());
    // Every path resolves to a distinct file, so no two workers touch the same one.
    files.par_iter().map(|file| fix_file(file, dry_run)).collect()
}

/// Rewrites one file in place, or only reports what would change when `dry_run` is set.
///
/// Files that are not valid UTF-8 cannot hold specifier clauses and are skipped.
/// Files with nothing to rewrite are never written.
pub fn fix_file(path: &Path, dry_run: bool) -> Result<FileReport> {
    let thread_id = thread::current().id();
    debug!("Thread {:?} processing: {}", thread_id, path.display());

    let unchanged =
        || FileReport { path: path.to_path_buf(), namespace_rewrites: 0, named_rewrites: 0 };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            warn!("Skipping non UTF-8 file: {}", path.display());
            return Ok(unchanged());
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    let rewrite = rewrite_specifiers(&content)
        .with_context(|| format!("Failed to rewrite specifiers in {}", path.display()))?;

    if !rewrite.changed() {
        trace!("Nothing to rewrite in {}", path.display());
        return Ok(unchanged());
    }

    debug!(
        "{}: {} namespace and {} named specifiers",
        path.display(),
        rewrite.namespace_rewrites,
        rewrite.named_rewrites
    );
    if !dry_run {
        write_content(path, &rewrite.content)?;
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        namespace_rewrites: rewrite.namespace_rewrites,
        named_rewrites: rewrite.named_rewrites,
    })
}
