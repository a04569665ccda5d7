//! Command-line interface for codecat.
//!
//! This binary combines the text files under a root directory into a single
//! annotated output file, printing per-file skip diagnostics to stderr and a
//! final count line to stdout.

use clap::Parser;
use codecat::{
    BinaryDetection, CombineBuilder, CombineOptions, CombineReport, DEFAULT_EXCLUDE_DIRS,
    DEFAULT_EXCLUDE_PATTERNS, SkipReason, combine,
};
use std::path::PathBuf;
use std::process::exit;

/// codecat — combine code files into a single file
#[derive(Parser)]
#[command(name = "codecat", version, about, long_about = None)]
struct Cli {
    /// Root directory to search for code files
    root_dir: PathBuf,

    /// Output file path (overwritten if it exists)
    output_file: PathBuf,

    /// File patterns to exclude
    #[arg(long = "exclude", num_args = 0.., default_values_t = DEFAULT_EXCLUDE_PATTERNS.iter().map(ToString::to_string))]
    exclude: Vec<String>,

    /// File patterns to include (e.g. '*.py' '*.js'); no restriction if empty
    #[arg(long = "include", num_args = 0..)]
    include: Vec<String>,

    /// Directory names to exclude anywhere in the tree
    #[arg(long = "exclude-dirs", num_args = 0.., default_values_t = DEFAULT_EXCLUDE_DIRS.iter().map(ToString::to_string))]
    exclude_dirs: Vec<String>,

    /// Only include these directories (relative to root); no restriction if empty
    #[arg(long = "include-dirs", num_args = 0..)]
    include_dirs: Vec<PathBuf>,

    /// Skip files larger than this size in MB
    #[arg(long = "max-size", default_value_t = 10)]
    max_size: u64,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Skip hidden files and directories
    #[arg(long)]
    skip_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Respect .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Binary detection strategy
    #[arg(long, default_value = "none", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    report_json: bool,

    /// Suppress per-file skip diagnostics
    #[arg(short, long)]
    quiet: bool,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (CombineOptions, PathBuf, bool, bool) {
        let mut builder = CombineBuilder::new(self.root_dir)
            .exclude_patterns(self.exclude)
            .include_patterns(self.include)
            .exclude_dirs(self.exclude_dirs)
            .include_dirs(self.include_dirs)
            .max_file_size(Some(self.max_size * 1024 * 1024))
            .include_hidden(!self.skip_hidden)
            .follow_links(self.follow_links)
            .respect_gitignore(self.gitignore)
            .binary_detection(self.binary_detection);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (
            builder.build(),
            self.output_file,
            self.report_json,
            self.quiet,
        )
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, output_file, report_json, quiet) = cli.into_options();

    let report = match combine(options, &output_file) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if !quiet {
        print_diagnostics(&report);
    }

    if report_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON serialization error: {}", e);
                exit(1);
            }
        }
    } else {
        println!(
            "Combined {} files into {} (skipped {})",
            report.file_count,
            output_file.display(),
            report.skipped_count
        );
    }
}

fn print_diagnostics(report: &CombineReport) {
    for skip in &report.skipped {
        match &skip.reason {
            SkipReason::TooLarge(size) => eprintln!(
                "Skipping large file: {} ({:.2} MB)",
                skip.path.display(),
                *size as f64 / 1024.0 / 1024.0
            ),
            SkipReason::Unreadable => {
                eprintln!("Skipping binary or unreadable file: {}", skip.path.display());
            }
            SkipReason::Io(msg) => {
                eprintln!("Error processing {}: {}", skip.path.display(), msg);
            }
            // Pattern and allow-list skips are routine; only the summary counts them.
            SkipReason::Excluded | SkipReason::NotIncluded | SkipReason::OutsideIncludeDirs => {}
        }
    }
    for err in &report.walk_errors {
        eprintln!("Error during traversal: {}", err);
    }
}
