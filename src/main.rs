//! Main entry point for the zipcount CLI application.
//!
//! Reads each archive given on the command line fully into memory and
//! prints the entry count recorded in its End of Central Directory.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::process::ExitCode;

use zipcount::{Cli, entry_count};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // With a single archive print the bare count; with several, prefix
    // each line with the file name so the output stays attributable.
    let labeled = cli.files.len() > 1;
    let mut missing = false;

    for path in &cli.files {
        let data =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

        match entry_count(&data) {
            Some(count) => {
                if labeled {
                    println!("{}: {}", path.display(), count);
                } else {
                    println!("{count}");
                }
            }
            None => {
                missing = true;
                if !cli.quiet {
                    eprintln!(
                        "{}: no end of central directory record found",
                        path.display()
                    );
                }
            }
        }
    }

    // "Not found" is a per-file answer, not a fatal error; keep going
    // through the remaining files and report it in the exit status.
    Ok(if missing {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
