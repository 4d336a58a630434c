//! End of Central Directory location and entry counting.
//!
//! ZIP files are designed to be read from the end: the EOCD record sits
//! in the file's tail, optionally followed by an archive comment. This
//! module scans backwards from the end for the EOCD signature and decodes
//! the record it finds, without touching the central directory itself.
//!
//! The scan runs from the last possible record start down through the
//! comment window, so the match closest to the end of the buffer wins.
//! Real archives are overwhelmingly comment-free, which makes the common
//! case a single comparison, and a signature-like byte sequence embedded
//! earlier in file content never shadows the genuine trailing record.

use super::eocd::EndOfCentralDirectory;

/// Maximum ZIP comment size allowed by the format (65535 bytes).
///
/// This limits the search area when looking for EOCD with a comment.
const MAX_COMMENT_SIZE: usize = 65535;

/// Find the End of Central Directory record in an in-memory archive.
///
/// Scans candidate offsets from `len - 22` down to
/// `max(0, len - 22 - 65535)` for the EOCD signature (PK\x05\x06) and
/// decodes the record at the first match. Returns the record together
/// with its byte offset in the buffer, or `None` if no signature is
/// found in the search window (including any buffer shorter than 22
/// bytes).
///
/// A match is purely a signature match: comment-length consistency and
/// central-directory structure are not verified, so bytes that happen
/// to contain the signature decode like a real record. That ambiguity
/// is inherent to the format.
pub fn find_eocd(data: &[u8]) -> Option<(EndOfCentralDirectory, usize)> {
    let ceiling = data.len().checked_sub(EndOfCentralDirectory::SIZE)?;
    let floor = ceiling.saturating_sub(MAX_COMMENT_SIZE);

    // Search backwards for EOCD signature (PK\x05\x06)
    for i in (floor..=ceiling).rev() {
        if &data[i..i + 4] == EndOfCentralDirectory::SIGNATURE {
            // The window is signature-checked and 22 bytes long, so the
            // decode cannot fail here.
            let eocd = EndOfCentralDirectory::from_bytes(
                &data[i..i + EndOfCentralDirectory::SIZE],
            )
            .ok()?;
            return Some((eocd, i));
        }
    }

    None
}

/// Report the number of entries in a ZIP archive.
///
/// `data` must be the entire archive file, held in memory; any type that
/// views as bytes (`&[u8]`, `Vec<u8>`, arrays, ...) is accepted. Returns
/// the entry count recorded in the EOCD for the current disk, or `None`
/// if no EOCD signature is found - which is the normal outcome for
/// non-ZIP data or truncated archives, not an error.
///
/// Never panics, regardless of input. The count is self-reported
/// metadata and trivial to spoof, so take the result with a pinch of
/// salt. ZIP64 archives are not handled: an archive with 65536 or more
/// entries saturates the field and yields `Some(65535)` verbatim.
pub fn entry_count(data: impl AsRef<[u8]>) -> Option<u16> {
    find_eocd(data.as_ref()).map(|(eocd, _)| eocd.disk_entries)
}
