//! ZIP archive tail parsing.
//!
//! This module reads just enough of a ZIP file to answer one question:
//! how many entries does the archive claim to contain?
//!
//! ## Architecture
//!
//! The module is organized into two components:
//!
//! - [`eocd`]: the End of Central Directory record and its binary decoding
//! - [`locator`]: the backward signature scan and the entry-count API
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end, optionally
//!    followed by an archive comment of up to 65535 bytes
//!
//! Only the EOCD is read here. The count it carries is metadata written
//! by the archiver; nothing reconciles it against the actual central
//! directory contents.
//!
//! ## Limitations
//!
//! - No ZIP64 support: counts of 65536 and above saturate to 65535
//! - No encryption detection (the EOCD is normally unencrypted anyway)
//! - No multi-disk archive support: the per-disk count is read as-is

mod eocd;
mod locator;

pub use eocd::EndOfCentralDirectory;
pub use locator::{entry_count, find_eocd};
