use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zipcount")]
#[command(version)]
#[command(about = "Report the number of entries in ZIP archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipcount data1.zip             print the entry count of data1.zip\n  \
  zipcount a.zip b.zip c.zip     print one 'file: count' line per archive")]
pub struct Cli {
    /// ZIP files to inspect
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Suppress diagnostics for files without an EOCD record
    #[arg(short = 'q')]
    pub quiet: bool,
}
