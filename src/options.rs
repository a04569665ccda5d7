use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File-name globs excluded by the CLI when `--exclude` is not given.
///
/// Covers compiled artifacts, databases, logs, images, and dotenv files.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "*.pyc", "*.pyo", "*.so", "*.o", "*.a", "*.lib", "*.dll", "*.exe", "*.bin", "*.dat", "*.db",
    "*.sqlite", "*.sqlite3", "*.log", "*.jpg", "*.jpeg", "*.png", "*.gif", "*.pdf", ".env",
];

/// Directory base names pruned by the CLI when `--exclude-dirs` is not given.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    ".svn",
    "__pycache__",
    "node_modules",
    "venv",
    "env",
    ".venv",
    ".env",
    "bin",
    "obj",
    "build",
    "dist",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineOptions {
    pub root: PathBuf,
    pub exclude_patterns: Vec<String>,
    pub include_patterns: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub include_dirs: Vec<PathBuf>,
    pub max_file_size: Option<u64>,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub respect_gitignore: bool,
    pub binary_detection: BinaryDetection,
}
impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude_patterns: Vec::new(),
            include_patterns: Vec::new(),
            exclude_dirs: Vec::new(),
            include_dirs: Vec::new(),
            max_file_size: Some(10 * 1024 * 1024),
            max_depth: None,
            // The legacy tool visited dotfiles and never consulted ignore files.
            include_hidden: true,
            follow_links: false,
            respect_gitignore: false,
            binary_detection: BinaryDetection::None,
        }
    }
}
#[derive(Debug, Default)]
pub struct CombineBuilder {
    options: CombineOptions,
}
impl CombineBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CombineOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.options.exclude_dirs = names;
        self
    }
    pub fn include_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.options.include_dirs = dirs;
        self
    }
    pub fn max_file_size(mut self, limit: Option<u64>) -> Self {
        self.options.max_file_size = limit;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> CombineOptions {
        self.options
    }
}
