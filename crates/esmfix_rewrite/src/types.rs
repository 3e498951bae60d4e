use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub namespace_rewrites: usize,
    pub named_rewrites: usize,
}

impl FileReport {
    pub fn changed(&self) -> bool {
        self.namespace_rewrites + self.named_rewrites > 0
    }
}

#[derive(Debug, Clone)]
pub struct FixResult {
    pub root: PathBuf,
    /// Files with at least one rewritten clause, sorted by path
    pub reports: Vec<FileReport>,
    pub files_scanned: usize,
    pub dry_run: bool,
    pub threads: usize,
}

impl FixResult {
    pub fn files_changed(&self) -> usize {
        self.reports.len()
    }

    pub fn namespace_rewrites(&self) -> usize {
        self.reports.iter().map(|r| r.namespace_rewrites).sum()
    }

    pub fn named_rewrites(&self) -> usize {
        self.reports.iter().map(|r| r.named_rewrites).sum()
    }
}
