//! headers/schema.rs
//! Strict typed view of a header record.
//!
//! Every field is checked in one pass and every violation is returned together,
//! so a report can list all problems with a file at once.

use std::fmt;

use serde::Serialize;

use crate::constants::LAST_MODIFIED;
use crate::headers::types::{HeaderRecord, MetaValue};
use crate::headers::validate::is_valid_date;

/// Typed header. `name` is always required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub usage: Option<String>,
    pub behavior: Option<String>,
    pub author: Option<String>,
    pub last_modified: Option<String>,
    pub changelog: Option<String>,
    pub inputs: Option<Vec<String>>,
    pub outputs: Option<Vec<String>>,
    pub dependencies: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaViolation {
    Missing { field: String },
    ExpectedScalar { field: String },
    ExpectedList { field: String },
    BadDate { value: String },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolation::Missing { field } => write!(f, "{field}: field required"),
            SchemaViolation::ExpectedScalar { field } => write!(f, "{field}: expected a single value, found a list"),
            SchemaViolation::ExpectedList { field } => write!(f, "{field}: expected a list"),
            SchemaViolation::BadDate { value } => write!(f, "{LAST_MODIFIED}: '{value}' is not a YYYY-MM-DD date"),
        }
    }
}

/// All violations found in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub violations: Vec<SchemaViolation>,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "; {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Collects violations while fields are pulled out of a record.
struct Extractor<'a> {
    record: &'a HeaderRecord,
    violations: Vec<SchemaViolation>,
}

impl<'a> Extractor<'a> {
    fn scalar(&mut self, field: &str) -> Option<String> {
        match self.record.get(field)? {
            MetaValue::Scalar(s) => Some(s.clone()),
            MetaValue::List(_) => {
                self.violations.push(SchemaViolation::ExpectedScalar { field: field.to_string() });
                None
            }
        }
    }

    fn list(&mut self, field: &str) -> Option<Vec<String>> {
        match self.record.get(field)? {
            MetaValue::List(items) => Some(items.clone()),
            MetaValue::Scalar(_) => {
                self.violations.push(SchemaViolation::ExpectedList { field: field.to_string() });
                None
            }
        }
    }
}

impl FileMetadata {
    /// Build the typed view, enforcing `required` on top of `name`.
    pub fn from_record<S: AsRef<str>>(record: &HeaderRecord, required: &[S]) -> Result<Self, SchemaError> {
        let mut ex = Extractor { record, violations: Vec::new() };

        let mut missing: Vec<&str> = vec!["name"];
        for field in required.iter().map(AsRef::as_ref) {
            if !missing.contains(&field) {
                missing.push(field);
            }
        }
        missing.retain(|field| !record.contains_key(*field));
        ex.violations.extend(
            missing
                .into_iter()
                .map(|field| SchemaViolation::Missing { field: field.to_string() }),
        );

        let meta = FileMetadata {
            name: ex.scalar("name").unwrap_or_default(),
            title: ex.scalar("title"),
            description: ex.scalar("description"),
            category: ex.scalar("category"),
            usage: ex.scalar("usage"),
            behavior: ex.scalar("behavior"),
            author: ex.scalar("author"),
            last_modified: ex.scalar(LAST_MODIFIED),
            changelog: ex.scalar("changelog"),
            inputs: ex.list("inputs"),
            outputs: ex.list("outputs"),
            dependencies: ex.list("dependencies"),
            tags: ex.list("tags"),
        };

        if let Some(date) = meta.last_modified.as_deref() {
            if !date.is_empty() && !is_valid_date(date) {
                ex.violations.push(SchemaViolation::BadDate { value: date.to_string() });
            }
        }

        if ex.violations.is_empty() {
            Ok(meta)
        } else {
            Err(SchemaError { violations: ex.violations })
        }
    }
}
