//! scan/report.rs
//! Per-file outcomes and the aggregate scan report.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

/// Result of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Passed,
    Failed { reasons: Vec<String> },
    /// No header block at all.
    MissingHeader,
    /// Could not be read; logged and left out of pass/fail.
    Skipped { reason: String },
}

impl FileStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, FileStatus::Failed { .. } | FileStatus::MissingHeader)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Totals over a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub missing_header: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileOutcome>,
}

impl ScanReport {
    pub fn push(&mut self, path: PathBuf, status: FileStatus) {
        self.files.push(FileOutcome { path, status });
    }

    pub fn summary(&self) -> ScanSummary {
        let mut s = ScanSummary { checked: self.files.len(), ..Default::default() };
        for f in &self.files {
            match f.status {
                FileStatus::Passed => s.passed += 1,
                FileStatus::Failed { .. } => s.failed += 1,
                FileStatus::MissingHeader => s.missing_header += 1,
                FileStatus::Skipped { .. } => s.skipped += 1,
            }
        }
        s
    }

    /// Drives the process exit code.
    pub fn has_failures(&self) -> bool {
        self.files.iter().any(|f| f.status.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.status.is_failure())
    }

    /// Console report: one line per problem, then a summary line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for f in &self.files {
            let path = f.path.display();
            match &f.status {
                FileStatus::Passed => {}
                FileStatus::Failed { reasons } => {
                    for reason in reasons {
                        let _ = writeln!(out, "❌ Error in {path}: {reason}");
                    }
                }
                FileStatus::MissingHeader => {
                    let _ = writeln!(out, "⚠️  Warning: {path} is missing header metadata.");
                }
                FileStatus::Skipped { reason } => {
                    let _ = writeln!(out, "⚠️  Warning: could not read {path}: {reason}");
                }
            }
        }

        let s = self.summary();
        let _ = writeln!(
            out,
            "Checked {} file(s): {} passed, {} failed, {} missing header, {} skipped.",
            s.checked, s.passed, s.failed, s.missing_header, s.skipped
        );
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            summary: ScanSummary,
            files: &'a [FileOutcome],
        }
        serde_json::to_string_pretty(&JsonReport { summary: self.summary(), files: &self.files })
    }
}
