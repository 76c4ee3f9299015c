//! scan/convert.rs
//! In-place migration of Markdown comment headers to front matter.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::headers::convert_to_front_matter;
use crate::scan::types::{ScanConfig, ScanError};
use crate::scan::walker::discover;

/// A file that could not be read or rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConvertSummary {
    /// Rewritten, or due for rewriting under `dry_run`.
    pub converted: Vec<PathBuf>,
    pub failed: Vec<ConvertFailure>,
}

/// Convert every Markdown file under `root` that still has a `##:`/`#` header.
///
/// A file that fails is recorded and the walk goes on. With `dry_run` nothing
/// is written. Only an unusable root is an error.
pub fn convert_markdown_tree(root: &Path, dry_run: bool) -> Result<ConvertSummary, ScanError> {
    let cfg = ScanConfig {
        include_exts: vec![".md".to_string()],
        ..ScanConfig::at(root)
    };

    let mut summary = ConvertSummary::default();
    for path in discover(&cfg)? {
        match convert_file(&path, dry_run) {
            Ok(true) => summary.converted.push(path),
            Ok(false) => {}
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not convert file");
                summary.failed.push(ConvertFailure { path, reason: err.to_string() });
            }
        }
    }

    info!(
        converted = summary.converted.len(),
        failed = summary.failed.len(),
        dry_run,
        "markdown headers converted"
    );
    Ok(summary)
}

/// Convert one file. `Ok(false)` when it has no comment header.
pub fn convert_file(path: &Path, dry_run: bool) -> Result<bool, ScanError> {
    let io_err = |source| ScanError::Io { path: path.to_path_buf(), source };

    let text = fs::read_to_string(path).map_err(io_err)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(rewritten) = convert_to_front_matter(&text, &stem) else {
        return Ok(false);
    };

    if !dry_run {
        fs::write(path, rewritten).map_err(io_err)?;
    }
    Ok(true)
}
