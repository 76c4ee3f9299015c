//! scan/runner.rs
//! Scan driver: discover, parse, validate, report.
//!
//! Per-file problems are recorded in the report and never stop the scan. Only a
//! bad root or unbuildable ignore rules fail the whole run.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::headers::{parse_header_for, validate, FileMetadata};
use crate::scan::report::{FileStatus, ScanReport};
use crate::scan::types::{ScanConfig, ScanError, ValidationMode};
use crate::scan::walker::discover;

/// Check every discovered file under `cfg.root`.
pub fn run(cfg: &ScanConfig) -> Result<ScanReport, ScanError> {
    let files = discover(cfg)?;
    let mut report = ScanReport::default();

    for path in files {
        let status = check_file(&path, cfg);
        let shown = path.strip_prefix(&cfg.root).unwrap_or(&path).to_path_buf();
        report.push(shown, status);
    }

    let s = report.summary();
    info!(
        checked = s.checked,
        passed = s.passed,
        failed = s.failed,
        missing_header = s.missing_header,
        skipped = s.skipped,
        "header scan finished"
    );
    Ok(report)
}

/// Check one file. Messages name it relative to `cfg.root`.
pub fn check_file(path: &Path, cfg: &ScanConfig) -> FileStatus {
    let shown = path.strip_prefix(&cfg.root).unwrap_or(path);

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read file");
            return FileStatus::Skipped { reason: err.to_string() };
        }
    };

    let record = match parse_header_for(path, &text) {
        Ok(record) => record,
        Err(err) => return FileStatus::Failed { reasons: vec![err.to_string()] },
    };

    if record.is_empty() {
        debug!(path = %path.display(), "no header block");
        return FileStatus::MissingHeader;
    }

    let reasons = match cfg.mode {
        ValidationMode::Simple => validate(&record, &cfg.required_fields, shown),
        ValidationMode::Strict => match FileMetadata::from_record(&record, &cfg.required_fields) {
            Ok(_) => Vec::new(),
            Err(err) => err.violations.iter().map(ToString::to_string).collect(),
        },
    };

    if reasons.is_empty() {
        FileStatus::Passed
    } else {
        FileStatus::Failed { reasons }
    }
}
