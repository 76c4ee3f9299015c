//! scan/docs.rs
//! reStructuredText pages generated from file headers.
//!
//! One page per file that has both `name` and `description`, filed under a
//! directory picked from the header `category`, plus one toctree `index.rst` per
//! directory.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::constants::{CATEGORY_DIRS, MISC_CATEGORY, TOCTREE_MAXDEPTH};
use crate::headers::{read_header, HeaderRecord, MetaValue};
use crate::scan::types::{ScanConfig, ScanError};
use crate::scan::walker::discover;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsSummary {
    pub pages: usize,
    pub indexes: Vec<PathBuf>,
}

/// Documentation sub-directory for a header category.
pub fn category_dir(category: &str) -> &'static str {
    CATEGORY_DIRS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, dir)| *dir)
        .unwrap_or(MISC_CATEGORY)
}

/// Render pages for every documented file under `cfg.root` into `out_dir`.
pub fn generate_docs(cfg: &ScanConfig, out_dir: &Path) -> Result<DocsSummary, ScanError> {
    let files = discover(cfg)?;
    let mut index_map: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();

    for file in files {
        let record = match read_header(&file) {
            Ok(record) => record,
            Err(err) => {
                warn!(path = %file.display(), error = %err, "skipping file");
                continue;
            }
        };

        let (Some(name), Some(_)) = (scalar(&record, "name"), scalar(&record, "description")) else {
            continue;
        };

        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name)
            .to_string();
        let category = scalar(&record, "category").unwrap_or(MISC_CATEGORY);
        let dir = out_dir.join(category_dir(category));
        let ext = file.extension().and_then(|e| e.to_str()).unwrap_or_default();

        let page = dir.join(format!("{stem}.rst"));
        let written = fs::create_dir_all(&dir)
            .and_then(|_| fs::write(&page, render_rst(&record, &stem, ext)));
        match written {
            Ok(()) => index_map.entry(dir).or_default().push(stem),
            Err(err) => warn!(path = %page.display(), error = %err, "could not write page"),
        }
    }

    let mut summary = DocsSummary::default();
    for (dir, mut entries) in index_map {
        entries.sort();
        summary.pages += entries.len();

        let index = dir.join("index.rst");
        let title = dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(capitalize)
            .unwrap_or_default();
        match fs::write(&index, render_index(&title, &entries)) {
            Ok(()) => summary.indexes.push(index),
            Err(err) => warn!(path = %index.display(), error = %err, "could not write index"),
        }
    }

    info!(pages = summary.pages, categories = summary.indexes.len(), "documentation generated");
    Ok(summary)
}

/// Page body for one file.
pub fn render_rst(record: &HeaderRecord, title: &str, ext: &str) -> String {
    let kind = match ext {
        "py" => "Python module",
        "sh" => "Shell script",
        "yml" | "yaml" | "toml" => "Configuration file",
        "md" => "Document",
        _ => "Source file",
    };

    let mut out = String::new();
    let _ = writeln!(out, "{title}\n{}\n", "=".repeat(title.chars().count()));
    if let Some(name) = scalar(record, "name") {
        let _ = writeln!(out, ":File: ``{name}``");
    }
    let _ = writeln!(out, ":Kind: {kind}");
    for (label, key) in [("Category", "category"), ("Author", "author"), ("Last modified", "last_modified")] {
        if let Some(v) = scalar(record, key) {
            let _ = writeln!(out, ":{label}: {v}");
        }
    }
    out.push('\n');

    if let Some(desc) = scalar(record, "description") {
        let _ = writeln!(out, "{desc}\n");
    }

    for (label, key) in [
        ("Usage", "usage"),
        ("Behavior", "behavior"),
        ("Inputs", "inputs"),
        ("Outputs", "outputs"),
        ("Dependencies", "dependencies"),
        ("Tags", "tags"),
        ("Changelog", "changelog"),
    ] {
        let Some(value) = record.get(key) else {
            continue;
        };
        let _ = writeln!(out, "{label}\n{}\n", "-".repeat(label.len()));
        match value {
            MetaValue::Scalar(s) => {
                let _ = writeln!(out, "{s}\n");
            }
            MetaValue::List(items) => {
                for item in items {
                    let _ = writeln!(out, "- {item}");
                }
                out.push('\n');
            }
        }
    }
    out
}

/// Toctree index for one category directory.
pub fn render_index(title: &str, entries: &[String]) -> String {
    let heading = format!("{title} Documentation");
    let mut lines = vec![
        heading.clone(),
        "=".repeat(heading.len()),
        String::new(),
        ".. toctree::".to_string(),
        format!("   :maxdepth: {TOCTREE_MAXDEPTH}"),
        String::new(),
    ];
    lines.extend(entries.iter().map(|e| format!("   {e}")));
    lines.join("\n") + "\n"
}

fn scalar<'a>(record: &'a HeaderRecord, key: &str) -> Option<&'a str> {
    record.get(key).and_then(MetaValue::as_scalar)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_categories_go_to_misc() {
        assert_eq!(category_dir("ci"), "dev");
        assert_eq!(category_dir("security"), "security");
        assert_eq!(category_dir("correctness"), "misc");
    }

    #[test]
    fn index_lists_entries_under_toctree() {
        let text = render_index("Dev", &["a".into(), "b".into()]);
        assert!(text.starts_with(&format!("Dev Documentation\n{}\n", "=".repeat(17))));
        assert!(text.contains("   :maxdepth: 1\n\n   a\n   b\n"));
    }
}
