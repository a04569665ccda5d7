//! # Codecat
//!
//! `codecat` walks a directory tree and concatenates every matching text file into a
//! single annotated output file: a header naming the root, one delimited section per
//! file, and a trailing summary with the combined and skipped counts.
//!
//! Filtering happens at three levels: directory base names can be pruned from the walk
//! entirely, an allow list can restrict which subtrees contribute files, and glob
//! patterns include or exclude files by base name. Files over a size limit are skipped,
//! and content is read through an ordered list of candidate encodings (UTF-8, then
//! windows-1252) so that legacy single-byte files still make it into the output.
//!
//! Per-file problems never abort a run: each one is recorded in the returned
//! [`CombineReport`] as a skip with a reason. Only failing to create the output file
//! (or a write error on it) is fatal.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use codecat::{CombineBuilder, combine};
//!
//! let options = CombineBuilder::new("./src")
//!     .exclude_patterns(vec!["*.log".into()])
//!     .include_patterns(vec!["*.rs".into()])
//!     .max_file_size(Some(10 * 1024 * 1024)) // 10 MB
//!     .build();
//!
//! let report = combine(options, "combined.txt").expect("combine failed");
//! println!("Combined {} files (skipped {})", report.file_count, report.skipped_count);
//! ```

mod engine;
mod error;
mod filter;
mod options;
mod output;
mod types;

pub use engine::combine;
pub use error::CombineError;
pub use options::{
    BinaryDetection, CombineBuilder, CombineOptions, DEFAULT_EXCLUDE_DIRS,
    DEFAULT_EXCLUDE_PATTERNS,
};
pub use types::{CombineReport, SkipReason, SkippedFile};
