//! File and directory selection rules for a combine run.
//!
//! Glob patterns are matched against base names only, never full paths. The
//! include-dir allow list is normalized lexically against the root and compared
//! with [`Path::starts_with`], so matching is path-segment-aware: an allow rule
//! for `sub` does not admit a sibling named `sub2`.

use crate::error::CombineError;
use crate::options::CombineOptions;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Outcome of matching a file's base name against the pattern sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileVerdict {
    Keep,
    Excluded,
    NotIncluded,
}

pub(crate) struct FileFilter {
    exclude: GlobSet,
    include: Option<GlobSet>,
    exclude_dirs: HashSet<OsString>,
    include_dirs: Vec<PathBuf>,
}

impl FileFilter {
    pub(crate) fn new(options: &CombineOptions) -> Result<Self, CombineError> {
        let exclude = build_glob_set(&options.exclude_patterns)?;
        let include = if options.include_patterns.is_empty() {
            None
        } else {
            Some(build_glob_set(&options.include_patterns)?)
        };
        let exclude_dirs = options.exclude_dirs.iter().map(OsString::from).collect();
        let include_dirs = options
            .include_dirs
            .iter()
            .map(|dir| normalize(&options.root.join(dir)))
            .collect();
        Ok(Self {
            exclude,
            include,
            exclude_dirs,
            include_dirs,
        })
    }

    /// The set of directory base names pruned from the walk before descent.
    pub(crate) fn pruned_dir_names(&self) -> HashSet<OsString> {
        self.exclude_dirs.clone()
    }

    /// Whether files directly inside `dir` are eligible under the allow list.
    ///
    /// An empty allow list admits everything. Descent is never blocked here;
    /// only `exclude_dirs` prunes subtrees.
    pub(crate) fn dir_selected(&self, dir: &Path) -> bool {
        if self.include_dirs.is_empty() {
            return true;
        }
        let dir = normalize(dir);
        self.include_dirs
            .iter()
            .any(|allowed| dir.starts_with(allowed))
    }

    /// Matches a base name against the exclude and include sets.
    ///
    /// Exclusion always wins: a name matching both sets is excluded.
    pub(crate) fn verdict(&self, file_name: &OsStr) -> FileVerdict {
        let name = Path::new(file_name);
        if self.exclude.is_match(name) {
            return FileVerdict::Excluded;
        }
        match &self.include {
            Some(set) if !set.is_match(name) => FileVerdict::NotIncluded,
            _ => FileVerdict::Keep,
        }
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, CombineError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            CombineError::Pattern(format!("Invalid glob pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| CombineError::Pattern(format!("Failed to build glob set: {}", e)))
}

/// Lexical path cleanup: drops `.` components and resolves `..` against the
/// preceding component without touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
