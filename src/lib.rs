//! # zipcount
//!
//! Reports the number of entries in a ZIP archive.
//!
//! This library locates the End of Central Directory (EOCD) record in the
//! tail of an in-memory ZIP file and decodes its entry-count field. It is
//! resilient against malformed zip files: any input that carries no EOCD
//! signature, from an empty buffer to random bytes, yields `None` rather
//! than an error. Take any result with a pinch of salt, since the count
//! is self-reported metadata and trivial to spoof (which often breaks
//! unzipping).
//!
//! The file must match the format as specified by:
//! <https://en.wikipedia.org/wiki/Zip_(file_format)>
//! <https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT>
//!
//! The following zip variants are not supported:
//! - ZIP64 (the saturated 16-bit count 65535 is returned verbatim)
//! - Encrypted zip files
//!
//! ## Example
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     let data = std::fs::read("archive.zip")?;
//!
//!     match zipcount::entry_count(&data) {
//!         Some(n) => println!("{n} entries"),
//!         None => println!("not a ZIP archive"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod zip;

pub use cli::Cli;
pub use zip::{EndOfCentralDirectory, entry_count, find_eocd};
