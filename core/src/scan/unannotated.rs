//! scan/unannotated.rs
//! Files that carry no header block yet, with the header style they should use.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;

use crate::headers::{dotted_extension, parse_header_for, HeaderStyle};
use crate::scan::types::{ScanConfig, ScanError};
use crate::scan::walker::discover;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnannotatedFile {
    pub name: String,
    pub file_type: String,
    pub header_style: Option<HeaderStyle>,
    pub path: PathBuf,
}

/// Every discovered file whose header parses to nothing.
///
/// Unreadable files are logged and left out; a broken front-matter block counts
/// as a header and is left to `validate`.
pub fn find_unannotated(cfg: &ScanConfig) -> Result<Vec<UnannotatedFile>, ScanError> {
    let mut out = Vec::new();

    for path in discover(cfg)? {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read file");
                continue;
            }
        };

        let has_header = match parse_header_for(&path, &text) {
            Ok(record) => !record.is_empty(),
            Err(_) => true,
        };
        if has_header {
            continue;
        }

        let file_type = dotted_extension(&path);
        out.push(UnannotatedFile {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            header_style: HeaderStyle::for_extension(&file_type),
            file_type,
            path: path.strip_prefix(&cfg.root).unwrap_or(&path).to_path_buf(),
        });
    }

    Ok(out)
}
