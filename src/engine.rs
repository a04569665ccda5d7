use crate::error::CombineError;
use crate::filter::{FileFilter, FileVerdict, normalize};
use crate::options::{BinaryDetection, CombineOptions};
use crate::output::CombinedWriter;
use crate::types::{CombineReport, SkipReason};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Candidate encodings tried in order; the first clean decode wins.
const ENCODING_CANDIDATES: &[&encoding_rs::Encoding] =
    &[encoding_rs::UTF_8, encoding_rs::WINDOWS_1252];

fn build_walker(options: &CombineOptions, filter: &FileFilter) -> ignore::Walk {
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .hidden(!options.include_hidden)
        .max_depth(options.max_depth)
        .follow_links(options.follow_links)
        .ignore(false);
    let pruned = filter.pruned_dir_names();
    if !pruned.is_empty() {
        // Prune excluded directories before descent; files pass through untouched.
        builder.filter_entry(move |entry| {
            entry
                .file_type()
                .is_none_or(|file_type| !file_type.is_dir())
                || !pruned.contains(entry.file_name())
        });
    }
    builder.build()
}

fn decode_text(bytes: &[u8]) -> Option<String> {
    for encoding in ENCODING_CANDIDATES {
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if !had_errors {
            return Some(text.into_owned());
        }
    }
    None
}

fn is_binary(bytes: &[u8], detection: BinaryDetection) -> bool {
    let sample = &bytes[..bytes.len().min(4096)];
    match detection {
        BinaryDetection::Simple => sample.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(sample).is_binary(),
        BinaryDetection::None => false,
    }
}

/// Walks `options.root` and appends every surviving file to `output_file`.
///
/// Per-file failures (stat, read, decode) become skip records in the returned
/// report and never abort the run. Creating or writing the output file is the
/// only fatal path.
pub fn combine(
    options: CombineOptions,
    output_file: impl AsRef<Path>,
) -> Result<CombineReport, CombineError> {
    let output_file = output_file.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("Starting combine with root: {}", options.root.display());
    if !options.root.is_dir() {
        return Err(CombineError::InvalidPath(format!(
            "root is not a directory: {}",
            options.root.display()
        )));
    }
    let filter = FileFilter::new(&options)?;
    let abs_root =
        std::path::absolute(&options.root).map_err(|e| CombineError::io(&options.root, e))?;
    let abs_output = std::path::absolute(output_file).map_err(|e| CombineError::io(output_file, e))?;
    let mut writer = CombinedWriter::create(output_file, &abs_root)?;
    let mut report = CombineReport::default();

    for result in build_walker(&options, &filter) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Walk error: {}", err);
                report.walk_errors.push(err.to_string());
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let rel_path = path
            .strip_prefix(&options.root)
            .unwrap_or(path)
            .to_path_buf();
        // Never fold the partially written output into itself.
        if normalize(&abs_root.join(&rel_path)) == normalize(&abs_output) {
            continue;
        }

        if !filter.dir_selected(path.parent().unwrap_or(Path::new(""))) {
            report.record_skip(rel_path, SkipReason::OutsideIncludeDirs);
            continue;
        }
        match filter.verdict(entry.file_name()) {
            FileVerdict::Excluded => {
                report.record_skip(rel_path, SkipReason::Excluded);
                continue;
            }
            FileVerdict::NotIncluded => {
                report.record_skip(rel_path, SkipReason::NotIncluded);
                continue;
            }
            FileVerdict::Keep => {}
        }
        match read_file_content(path, &options) {
            Ok(content) => {
                writer.write_file(&rel_path, &content)?;
                report.file_count += 1;
            }
            Err(reason) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping {}: {:?}", rel_path.display(), reason);
                report.record_skip(rel_path, reason);
            }
        }
    }

    writer.finish(report.file_count, report.skipped_count)?;
    Ok(report)
}

/// Reads one candidate file, applying the size limit, optional binary
/// detection, and the encoding fallback chain. Every failure mode maps to a
/// [`SkipReason`] so the caller records a skip instead of aborting.
fn read_file_content(path: &Path, options: &CombineOptions) -> Result<String, SkipReason> {
    let metadata = fs::metadata(path).map_err(|e| SkipReason::Io(e.to_string()))?;
    if let Some(limit) = options.max_file_size {
        if metadata.len() > limit {
            return Err(SkipReason::TooLarge(metadata.len()));
        }
    }
    let bytes = fs::read(path).map_err(|e| SkipReason::Io(e.to_string()))?;
    if is_binary(&bytes, options.binary_detection) {
        return Err(SkipReason::Unreadable);
    }
    decode_text(&bytes).ok_or(SkipReason::Unreadable)
}
