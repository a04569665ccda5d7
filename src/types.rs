use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Why a file encountered during the walk was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The base name matched an exclude glob.
    Excluded,
    /// An include set was given and the base name matched none of its globs.
    NotIncluded,
    /// An include-dir allow list was given and the file's directory is not under it.
    OutsideIncludeDirs,
    /// The file's size in bytes exceeded the configured limit.
    TooLarge(u64),
    /// Detected as binary, or not decodable by any candidate encoding.
    Unreadable,
    /// A stat or read failed at the OS level; the message is kept verbatim.
    Io(String),
}

/// One skipped file, with its path relative to the walk root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// The complete result of a combine run.
///
/// `skipped_count` always equals `skipped.len()`; it is kept as a field so the
/// serialized report carries the count directly. Walk-level errors (an unreadable
/// directory, a dangling symlink) are collected separately and do not count as
/// skipped files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CombineReport {
    pub file_count: usize,
    pub skipped_count: usize,
    pub skipped: Vec<SkippedFile>,
    pub walk_errors: Vec<String>,
}

impl CombineReport {
    pub(crate) fn record_skip(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped_count += 1;
        self.skipped.push(SkippedFile { path, reason });
    }
}
