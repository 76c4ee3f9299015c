//! scan/walker.rs
//! File discovery for header scans.
//!
//! A file is scanned when:
//! - no path segment run matches an `exclude_dirs` entry,
//! - the root ignore file does not match it or any ancestor directory,
//! - its extension is in `include_exts`.
//!
//! Output is sorted by path so reports are reproducible.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::scan::types::{ScanConfig, ScanError};

/// Every scannable file under `cfg.root`.
pub fn discover(cfg: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let root = cfg.root.clone();
    if !root.exists() {
        return Err(ScanError::RootNotFound(root));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root));
    }

    let gitignore = Arc::new(load_ignore(cfg)?);
    let exclude = Arc::new(cfg.exclude_dirs.clone());

    let filter_root = root.clone();
    let mut builder = WalkBuilder::new(&root);
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let rel = entry.path().strip_prefix(&filter_root).unwrap_or(entry.path());
            if is_excluded(rel, &exclude) {
                debug!(path = %rel.display(), "excluded directory rule");
                return false;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if gitignore.matched(rel, is_dir).is_ignore() {
                debug!(path = %rel.display(), "ignored by ignore file");
                return false;
            }
            true
        });

    let mut files = Vec::new();
    for result in builder.build() {
        match result {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|t| t.is_file());
                if is_file && cfg.includes(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => warn!(error = %err, "skipping unreadable path"),
        }
    }

    debug!(root = %root.display(), files = files.len(), "discovery finished");
    Ok(files)
}

/// Build the ignore matcher from `cfg.ignore_file`. A missing file means no
/// rules; a partially unreadable one keeps the rules that did parse.
pub fn load_ignore(cfg: &ScanConfig) -> Result<Gitignore, ScanError> {
    let Some(name) = cfg.ignore_file.as_ref() else {
        return Ok(Gitignore::empty());
    };

    let path = cfg.root.join(name);
    if !path.is_file() {
        debug!(path = %path.display(), "no ignore file, continuing without it");
        return Ok(Gitignore::empty());
    }

    let mut builder = GitignoreBuilder::new(&cfg.root);
    if let Some(err) = builder.add(&path) {
        warn!(path = %path.display(), error = %err, "could not fully read ignore file");
    }
    Ok(builder.build()?)
}

/// `true` if any entry of `dirs` matches a run of normal components in `rel`.
pub fn is_excluded(rel: &Path, dirs: &[String]) -> bool {
    let parts: Vec<&OsStr> = normal_components(rel).collect();
    dirs.iter().any(|dir| {
        let pattern: Vec<&OsStr> = normal_components(Path::new(dir.trim_matches('/'))).collect();
        !pattern.is_empty()
            && pattern.len() <= parts.len()
            && parts.windows(pattern.len()).any(|w| w == pattern.as_slice())
    })
}

fn normal_components(path: &Path) -> impl Iterator<Item = &OsStr> {
    path.components().filter_map(|c| match c {
        Component::Normal(s) => Some(s),
        _ => None,
    })
}
