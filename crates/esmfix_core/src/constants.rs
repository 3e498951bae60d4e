//! Clause patterns and suffixes for the two rewrite passes.
//!
//! Each pass has an outer pattern that finds whole clauses in file content
//! and an inner pattern, anchored to a single clause, whose first capture
//! group is the module path. The two must always agree: every string the
//! outer pattern matches has to be matched in full by the inner one.
//!
//! ## Namespace clauses
//!
//! `* as IDENT from "PATH";` points at a directory barrel, so the path gets
//! [`INDEX_SUFFIX`] appended.
//!
//! ## Named clauses
//!
//! `} from "RELPATH";` where `RELPATH` starts with `.` or `..` points at a
//! sibling or child module, so the path gets [`JS_SUFFIX`] appended.
//!
//! Paths never contain a double quote or a line break, which keeps every
//! clause on one line and stops a match from running into the next clause.

/// Appended to namespace clause paths
pub const INDEX_SUFFIX: &str = "/index.js";

/// Appended to relative named clause paths
pub const JS_SUFFIX: &str = ".js";

/// Suffix of the sibling file content is staged in before it replaces a target
pub const TEMP_FILE_SUFFIX: &str = ".esmfix.tmp";

pub const NAMESPACE_CLAUSE: &str = r#"\* as [\w$]+ from "[^"\r\n]*";"#;
pub const NAMESPACE_PATH: &str = r#"^\* as [\w$]+ from "([^"\r\n]*)";$"#;

pub const NAMED_CLAUSE: &str = r#"\} from "\.{1,2}[^"\r\n]*";"#;
pub const NAMED_PATH: &str = r#"^\} from "(\.{1,2}[^"\r\n]*)";$"#;
