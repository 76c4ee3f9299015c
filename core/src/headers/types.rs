// ## 📂 File: `src/headers/types.rs`

//! headers/types.rs
//! Parsed header values, header styles and header errors.
//!
//! A header record maps field name to a scalar or a list. Records are built fresh
//! from a file on every run and never mutated after the parse returns.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{LIST_KEYS, VALID_KEYS};

/// One header value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Scalar(String),
    List(Vec<String>),
}

impl MetaValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            MetaValue::Scalar(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetaValue::List(items) => Some(items),
            MetaValue::Scalar(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, MetaValue::List(_))
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Scalar(s) => f.write_str(s),
            MetaValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Scalar(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Scalar(s)
    }
}

impl From<Vec<&str>> for MetaValue {
    fn from(items: Vec<&str>) -> Self {
        MetaValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Field name -> value. Ordered so reports and renders are stable.
pub type HeaderRecord = BTreeMap<String, MetaValue>;

/// `true` if the parser keeps this key.
pub fn is_valid_key(key: &str) -> bool {
    VALID_KEYS.contains(&key)
}

/// `true` if values of this key are split into lists.
pub fn is_list_key(key: &str) -> bool {
    LIST_KEYS.contains(&key)
}

/// Lower-cased extension with its leading dot, or `""`.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_ascii_lowercase()))
        .unwrap_or_default()
}

/// How a file is expected to carry its header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    /// `##: key = value`
    Structured,
    /// `# key = value`
    Comment,
    /// `---` delimited `key: value` block
    FrontMatter,
}

impl HeaderStyle {
    /// Expected style for a file extension (with leading dot).
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext {
            ".py" | ".sh" => Some(HeaderStyle::Structured),
            ".yml" | ".yaml" | ".toml" => Some(HeaderStyle::Comment),
            ".md" => Some(HeaderStyle::FrontMatter),
            _ => None,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            HeaderStyle::Structured => "##:",
            HeaderStyle::Comment => "#",
            HeaderStyle::FrontMatter => "---",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// Front matter opened but never closed.
    #[error("front-matter block opened on line {line} is never closed")]
    UnterminatedFrontMatter { line: usize },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
