//! scan/types.rs
//! Scan options and scan errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_IGNORE_FILE, DEFAULT_INCLUDE_EXTS, DEFAULT_REQUIRED_FIELDS,
};

/// Which validator the driver runs per file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Missing-field and date messages only.
    Simple,
    /// Typed schema, every violation reported.
    #[default]
    Strict,
}

/// Where to look and what to require.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// Extensions with leading dot, e.g. `.py`.
    pub include_exts: Vec<String>,
    /// Directory names, or `a/b` segment runs, never descended into.
    pub exclude_dirs: Vec<String>,
    /// Gitignore-syntax file relative to `root`. `None` disables it.
    pub ignore_file: Option<PathBuf>,
    pub required_fields: Vec<String>,
    pub mode: ValidationMode,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_exts: to_owned(DEFAULT_INCLUDE_EXTS),
            exclude_dirs: to_owned(DEFAULT_EXCLUDE_DIRS),
            ignore_file: Some(PathBuf::from(DEFAULT_IGNORE_FILE)),
            required_fields: to_owned(DEFAULT_REQUIRED_FIELDS),
            mode: ValidationMode::default(),
        }
    }
}

impl ScanConfig {
    /// Defaults rooted at `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    /// `true` if `path` has one of the included extensions.
    pub fn includes(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.include_exts
            .iter()
            .any(|want| want.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("scan root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("ignore rules could not be built: {0}")]
    Ignore(#[from] ignore::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
