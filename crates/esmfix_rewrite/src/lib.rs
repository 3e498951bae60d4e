//! Strict ESM specifier fixing for trees of generated bindings.
//!
//! This crate walks a directory of generated modules, rewrites each file with
//! [`esmfix_core::rewrite_specifiers`] in parallel and writes back only the
//! files that changed.
//!
//! # Examples
//!
//! ```no_run
//! use esmfix_rewrite::{Config, run_esm_fix};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/typechain-types")),
//!     extensions: vec!["ts".to_string()],
//!     dry_run: true,
//!     threads: 0,
//! };
//!
//! let result = run_esm_fix(cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! if result.reports.is_empty() {
//!     esmfix_rewrite::print_no_changes_message(&mut stdout, result.files_scanned)?;
//! } else {
//!     esmfix_rewrite::print_fix_report(&mut stdout, &result)?;
//! }
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod fixer;
mod reporter;
mod types;
mod writer;

// Re-export public API
pub use config::Config;
pub use fixer::{fix_file, run_esm_fix};
pub use reporter::{print_fix_report, print_no_changes_message};
pub use types::{FileReport, FixResult};
pub use writer::write_content;
