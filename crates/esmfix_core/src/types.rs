use std::{fmt, ops::Range};

/// The two rewrite passes, applied in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Namespace,
    Named,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Namespace => write!(f, "namespace"),
            Pass::Named => write!(f, "named"),
        }
    }
}

/// A specifier clause found in file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierMatch<'a> {
    /// Byte offset of the clause in the content it was found in
    pub offset: usize,
    /// Full clause text, from `*`/`}` through the terminating `;`
    pub clause: &'a str,
    /// Byte range of the module path within `clause`
    pub(crate) path: Range<usize>,
}

impl<'a> SpecifierMatch<'a> {
    pub fn path(&self) -> &'a str {
        &self.clause[self.path.clone()]
    }

    /// Byte offset just past the clause
    pub fn end(&self) -> usize {
        self.offset + self.clause.len()
    }

    /// Clause text with `suffix` inserted right after the path.
    pub fn rewritten(&self, suffix: &str) -> String {
        let mut out = String::with_capacity(self.clause.len() + suffix.len());
        out.push_str(&self.clause[..self.path.end]);
        out.push_str(suffix);
        out.push_str(&self.clause[self.path.end..]);
        out
    }
}

/// Output of both passes over one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub namespace_rewrites: usize,
    pub named_rewrites: usize,
}

impl Rewrite {
    pub fn total(&self) -> usize {
        self.namespace_rewrites + self.named_rewrites
    }

    pub fn changed(&self) -> bool {
        self.total() > 0
    }
}
