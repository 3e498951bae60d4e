use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

use crate::{
    constants::{
        INDEX_SUFFIX, JS_SUFFIX, NAMED_CLAUSE, NAMED_PATH, NAMESPACE_CLAUSE, NAMESPACE_PATH,
    },
    error::RewriteError,
    types::{Pass, Rewrite, SpecifierMatch},
};

static NAMESPACE: LazyLock<ClausePatterns> = LazyLock::new(|| {
    ClausePatterns::new(Pass::Namespace, NAMESPACE_CLAUSE, NAMESPACE_PATH, INDEX_SUFFIX)
});

static NAMED: LazyLock<ClausePatterns> =
    LazyLock::new(|| ClausePatterns::new(Pass::Named, NAMED_CLAUSE, NAMED_PATH, JS_SUFFIX));

/// Outer/inner pattern pair for one pass plus the suffix it appends.
struct ClausePatterns {
    pass: Pass,
    outer: Regex,
    inner: Regex,
    suffix: &'static str,
}

impl ClausePatterns {
    fn new(pass: Pass, outer: &str, inner: &str, suffix: &'static str) -> Self {
        // Constant patterns, checked in constants::tests.
        Self {
            pass,
            outer: Regex::new(outer).expect("outer clause pattern is valid"),
            inner: Regex::new(inner).expect("inner path pattern is valid"),
            suffix,
        }
    }

    fn find<'a>(&self, content: &'a str) -> Result<Vec<SpecifierMatch<'a>>, RewriteError> {
        self.outer
            .find_iter(content)
            .map(|m| {
                let clause = m.as_str();
                let path = self
                    .inner
                    .captures(clause)
                    .and_then(|caps| caps.get(1))
                    .ok_or_else(|| RewriteError::PatternMismatch {
                        pass: self.pass,
                        clause: clause.to_string(),
                    })?;
                trace!("Found {} clause at byte {}: '{}'", self.pass, m.start(), clause);
                Ok(SpecifierMatch { offset: m.start(), clause, path: path.range() })
            })
            .collect()
    }

    /// Splits `content` around every clause, rewrites each clause on its own
    /// and joins the pieces back in their original order.
    fn rewrite(&self, content: &str) -> Result<(String, usize), RewriteError> {
        let found = self.find(content)?;
        if found.is_empty() {
            return Ok((content.to_string(), 0));
        }

        let mut out = String::with_capacity(content.len() + found.len() * self.suffix.len());
        let mut last = 0;
        for m in &found {
            out.push_str(&content[last..m.offset]);
            out.push_str(&m.rewritten(self.suffix));
            last = m.end();
        }
        out.push_str(&content[last..]);

        debug!("Rewrote {} {} clauses", found.len(), self.pass);
        Ok((out, found.len()))
    }
}

fn patterns(pass: Pass) -> &'static ClausePatterns {
    match pass {
        Pass::Namespace => &*NAMESPACE,
        Pass::Named => &*NAMED,
    }
}

/// Appends `/index.js` to the path of every `* as X from "PATH";` clause.
///
/// Paths already ending in `/index.js` are not special-cased, so running this
/// twice appends the suffix twice.
pub fn rewrite_namespace_imports(content: &str) -> Result<String, RewriteError> {
    patterns(Pass::Namespace).rewrite(content).map(|(out, _)| out)
}

/// Appends `.js` to the path of every `} from "./PATH";` clause whose path
/// starts with `.` or `..`. Bare package specifiers are left alone.
///
/// Like [`rewrite_namespace_imports`] this is not idempotent: `"./foo.js"`
/// becomes `"./foo.js.js"`.
pub fn rewrite_named_imports(content: &str) -> Result<String, RewriteError> {
    patterns(Pass::Named).rewrite(content).map(|(out, _)| out)
}

/// Runs the namespace pass, then the named pass over its output.
pub fn rewrite_specifiers(content: &str) -> Result<Rewrite, RewriteError> {
    let (content, namespace_rewrites) = patterns(Pass::Namespace).rewrite(content)?;
    let (content, named_rewrites) = patterns(Pass::Named).rewrite(&content)?;
    Ok(Rewrite { content, namespace_rewrites, named_rewrites })
}

/// Clauses the namespace pass would rewrite, in file order.
pub fn namespace_specifiers(content: &str) -> Result<Vec<SpecifierMatch<'_>>, RewriteError> {
    patterns(Pass::Namespace).find(content)
}

/// Clauses the named pass would rewrite, in file order.
pub fn named_specifiers(content: &str) -> Result<Vec<SpecifierMatch<'_>>, RewriteError> {
    patterns(Pass::Named).find(content)
}
