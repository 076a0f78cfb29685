//! Binary codec for the checklist file format.
//!
//! # Responsibility
//! - Decode a whole in-memory byte buffer into a document tree, and encode
//!   a tree back into the byte-exact on-disk layout.
//! - Keep wire details (tokens, enum codes, checksum) inside this boundary.
//!
//! # Invariants
//! - Loading is atomic: a corrupt buffer yields an error, never a partial
//!   tree. The checksum is validated before any structural parsing.
//! - Child-block parsers fail without consuming, so a parent's footer token
//!   is never swallowed by a failed child parse.
//! - Saving appends the checksum last, over every preceding byte.

pub mod checksum;
pub mod cursor;

mod checklist;
mod entry;
mod field;
mod file;
mod group;

use crate::model::file::ChecklistFile;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Two-byte line terminator separating every wire field.
pub(crate) const LINE_TERMINATOR: [u8; 2] = [0x0D, 0x0A];

/// Errors from decoding a checklist file buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The whole-buffer CRC residue check failed.
    ChecksumMismatch,
    /// A mandatory token (magic, terminator, footer) was absent or the
    /// buffer carried trailing garbage.
    CorruptFile,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChecksumMismatch => write!(f, "checksum validation failed"),
            Self::CorruptFile => write!(f, "corrupt checklist file"),
        }
    }
}

impl Error for LoadError {}

impl LoadError {
    fn log_code(self) -> &'static str {
        match self {
            Self::ChecksumMismatch => "checksum_mismatch",
            Self::CorruptFile => "corrupt_file",
        }
    }
}

/// Errors from encoding a document tree into file bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    /// A text field contains a 0x0D or 0x0A byte, which would corrupt the
    /// structural parse on the next load.
    EmbeddedLineBreak { context: &'static str },
    /// A challenge text contains the `~` separator, which would shift the
    /// challenge/response split on the next load.
    EmbeddedSeparator { context: &'static str },
}

impl Display for SaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmbeddedLineBreak { context } => {
                write!(f, "cannot encode {context}: embedded line break")
            }
            Self::EmbeddedSeparator { context } => {
                write!(f, "cannot encode {context}: embedded `~` separator")
            }
        }
    }
}

impl Error for SaveError {}

impl SaveError {
    fn log_code(self) -> &'static str {
        match self {
            Self::EmbeddedLineBreak { .. } => "embedded_line_break",
            Self::EmbeddedSeparator { .. } => "embedded_separator",
        }
    }
}

/// Decodes a whole file buffer into a document tree.
///
/// # Errors
/// - `LoadError::ChecksumMismatch` when the buffer fails the CRC residue
///   check; reported before any structural parsing.
/// - `LoadError::CorruptFile` when any mandatory token is absent. No
///   partial tree is ever returned.
pub fn load(bytes: &[u8]) -> Result<ChecklistFile, LoadError> {
    match file::parse_file(bytes) {
        Ok(parsed) => {
            info!(
                "event=file_load module=codec status=ok bytes={} groups={}",
                bytes.len(),
                parsed.groups().len()
            );
            Ok(parsed)
        }
        Err(err) => {
            warn!(
                "event=file_load module=codec status=error reason={} bytes={}",
                err.log_code(),
                bytes.len()
            );
            Err(err)
        }
    }
}

/// Encodes a document tree into file bytes, checksum included.
///
/// # Errors
/// - `SaveError` when a text field cannot be represented in the wire
///   format; nothing is written for a failed save.
pub fn save(checklist_file: &ChecklistFile) -> Result<Vec<u8>, SaveError> {
    match file::write_file(checklist_file) {
        Ok(bytes) => {
            info!(
                "event=file_save module=codec status=ok bytes={} groups={}",
                bytes.len(),
                checklist_file.groups().len()
            );
            Ok(bytes)
        }
        Err(err) => {
            warn!(
                "event=file_save module=codec status=error reason={}",
                err.log_code()
            );
            Err(err)
        }
    }
}
