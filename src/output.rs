//! The combined-file writer.
//!
//! Owns the single output handle for a run and produces the artifact layout: a
//! two-line header naming the absolute root and the generation time, one delimited
//! section per included file, and a trailing summary with both counters. Delimiter
//! lines are exactly 80 `=` characters.

use crate::error::CombineError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const RULE: &str =
    "================================================================================";

pub(crate) struct CombinedWriter {
    out: BufWriter<File>,
    path: PathBuf,
}

impl CombinedWriter {
    /// Creates (or truncates) the output file and writes the run header.
    ///
    /// Failure here is the one fatal error of a run.
    pub(crate) fn create(path: &Path, abs_root: &Path) -> Result<Self, CombineError> {
        let file = File::create(path).map_err(|e| CombineError::io(path, e))?;
        let mut writer = Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
        };
        writer.write_str(&format!(
            "# COMBINED CODE FILES FROM {}\n# Generated on {}\n\n",
            abs_root.display(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ))?;
        Ok(writer)
    }

    /// Appends one delimited file section: rules around a `# FILE:` header line,
    /// then the verbatim content and a blank-line separator.
    pub(crate) fn write_file(&mut self, rel_path: &Path, content: &str) -> Result<(), CombineError> {
        self.write_str(&format!(
            "\n{RULE}\n# FILE: {}\n{RULE}\n\n",
            rel_path.display()
        ))?;
        self.write_str(content)?;
        self.write_str("\n\n")
    }

    /// Appends the closing summary section and flushes the handle.
    pub(crate) fn finish(mut self, file_count: usize, skipped_count: usize) -> Result<(), CombineError> {
        self.write_str(&format!(
            "\n{RULE}\n# SUMMARY: Combined {} files (skipped {})\n{RULE}\n",
            file_count, skipped_count
        ))?;
        self.out
            .flush()
            .map_err(|e| CombineError::io(&self.path, e))
    }

    fn write_str(&mut self, s: &str) -> Result<(), CombineError> {
        self.out
            .write_all(s.as_bytes())
            .map_err(|e| CombineError::io(&self.path, e))
    }
}
