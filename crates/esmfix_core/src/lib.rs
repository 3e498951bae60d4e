//! Specifier rewriting for generated ECMAScript module bindings.
//!
//! Strict ESM resolution wants relative specifiers spelled out in full:
//! directory imports need an explicit `index.js` and file imports need their
//! `.js` extension. This crate provides:
//! - Two textual rewrite passes over file content (namespace and named
//!   clauses), plus a combined entry point
//! - Collecting the files of a generated bindings tree
//! - Git root discovery for the default target directory
//!
//! The rewrite is pattern based and never parses the source.
//!
//! ```
//! use esmfix_core::rewrite_specifiers;
//!
//! # fn main() -> Result<(), esmfix_core::RewriteError> {
//! let rewrite = rewrite_specifiers("export * as types from \"./generated\";")?;
//! assert_eq!(rewrite.content, "export * as types from \"./generated/index.js\";");
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod constants;
mod error;
mod rewriter;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_files};
pub use config::{DEFAULT_TARGET_DIR, find_git_root, find_git_root_from};
pub use constants::{INDEX_SUFFIX, JS_SUFFIX, TEMP_FILE_SUFFIX};
pub use error::RewriteError;
pub use rewriter::{
    named_specifiers, namespace_specifiers, rewrite_named_imports, rewrite_namespace_imports,
    rewrite_specifiers,
};
pub use types::{Pass, Rewrite, SpecifierMatch};
