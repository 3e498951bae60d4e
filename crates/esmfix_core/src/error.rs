use thiserror::Error;

use crate::types::Pass;

#[derive(Error, Debug)]
pub enum RewriteError {
    /// The outer clause pattern matched text the inner path pattern rejects.
    #[error("{pass} clause pattern matched but no path could be extracted from: {clause}")]
    PatternMismatch { pass: Pass, clause: String },
}
