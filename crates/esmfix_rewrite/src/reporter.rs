use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::{debug, trace};

use crate::types::{FileReport, FixResult};

/// Path of a report relative to the rewritten root, with `/` separators.
fn display_path(root: &Path, report: &FileReport) -> String {
    report.path.strip_prefix(root).unwrap_or(&report.path).to_string_lossy().replace('\\', "/")
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 { format!("{} {}", count, word) } else { format!("{} {}s", count, word) }
}

pub fn print_no_changes_message<W: Write>(writer: &mut W, files_scanned: usize) -> io::Result<()> {
    debug!("No specifiers needed rewriting");
    writeln!(
        writer,
        "{} No specifiers needed rewriting. Scanned {}",
        "✓".green().bold(),
        plural(files_scanned, "file")
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_fix_report<W: Write>(writer: &mut W, result: &FixResult) -> io::Result<()> {
    debug!("Printing fix report for {} files", result.files_changed());

    if result.dry_run {
        writeln!(
            writer,
            "{} Dry run: {} would be rewritten\n",
            "⚠".yellow().bold(),
            plural(result.files_changed(), "file").yellow()
        )?;
    } else {
        writeln!(
            writer,
            "{} Rewrote specifiers in {}\n",
            "✎".bright_blue().bold(),
            plural(result.files_changed(), "file").cyan()
        )?;
    }

    let mut reports: Vec<&FileReport> = result.reports.iter().collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    for (idx, report) in reports.iter().enumerate() {
        trace!("Reporting file: {}", report.path.display());
        let is_last = idx == reports.len() - 1;
        let prefix = if is_last { "└──" } else { "├──" };

        let mut counts = Vec::new();
        if report.namespace_rewrites > 0 {
            counts.push(format!("{} namespace", report.namespace_rewrites));
        }
        if report.named_rewrites > 0 {
            counts.push(format!("{} named", report.named_rewrites));
        }

        writeln!(
            writer,
            "{}  {} ({})",
            prefix.dimmed(),
            display_path(&result.root, report).blue(),
            counts.join(", ")
        )?;
    }

    writeln!(writer)?;
    print_summary(writer, result)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, result: &FixResult) -> io::Result<()> {
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Files scanned: {}", result.files_scanned.to_string().cyan())?;
    writeln!(writer, "  Files changed: {}", result.files_changed().to_string().yellow().bold())?;
    writeln!(
        writer,
        "  Namespace specifiers: {}",
        result.namespace_rewrites().to_string().yellow()
    )?;
    writeln!(writer, "  Named specifiers: {}", result.named_rewrites().to_string().yellow())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn result(dry_run: bool) -> FixResult {
        FixResult {
            root: PathBuf::from("/project/typechain-types"),
            reports: vec![
                FileReport {
                    path: PathBuf::from("/project/typechain-types/index.ts"),
                    namespace_rewrites: 2,
                    named_rewrites: 5,
                },
                FileReport {
                    path: PathBuf::from("/project/typechain-types/factories/index.ts"),
                    namespace_rewrites: 0,
                    named_rewrites: 1,
                },
            ],
            files_scanned: 12,
            dry_run,
            threads: 4,
        }
    }

    #[test]
    fn test_report_lists_files_sorted_and_relative() {
        let out = render(|w| print_fix_report(w, &result(false)));
        let factories = out.find("├──  factories/index.ts (1 named)").unwrap();
        let index = out.find("└──  index.ts (2 namespace, 5 named)").unwrap();
        assert!(factories < index);
        assert!(!out.contains("/project"));
    }

    #[test]
    fn test_report_header_and_summary() {
        let out = render(|w| print_fix_report(w, &result(false)));
        assert!(out.starts_with("✎ Rewrote specifiers in 2 files"));
        assert!(out.contains("Files scanned: 12"));
        assert!(out.contains("Files changed: 2"));
        assert!(out.contains("Namespace specifiers: 2"));
        assert!(out.contains("Named specifiers: 6"));
    }

    #[test]
    fn test_dry_run_header() {
        let out = render(|w| print_fix_report(w, &result(true)));
        assert!(out.starts_with("⚠ Dry run: 2 files would be rewritten"));
    }

    #[test]
    fn test_no_changes_message() {
        let out = render(|w| print_no_changes_message(w, 1));
        assert_eq!(out, "✓ No specifiers needed rewriting. Scanned 1 file\n");
    }
}
