use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use esmfix_rewrite::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "esmfix")]
#[command(about = "Make generated module bindings resolvable under strict ESM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Append explicit index.js and .js suffixes to relative specifiers
    Fix(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Fix(cfg) => {
            info!("Running ESM specifier fix (dry run: {})", cfg.dry_run);
            debug!("Config: root={:?}, extensions={:?}", cfg.root, cfg.extensions);

            let result = esmfix_rewrite::run_esm_fix(cfg)?;
            debug!("{} files changed", result.files_changed());

            let elapsed_ms = start.elapsed().as_millis();

            if result.reports.is_empty() {
                info!("No specifiers needed rewriting");
                esmfix_rewrite::print_no_changes_message(&mut stdout, result.files_scanned)?;
            } else {
                esmfix_rewrite::print_fix_report(&mut stdout, &result)?;
            }

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files (using {} threads).",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                result.files_scanned.to_string().cyan(),
                result.threads.to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}
