#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use ledgerbase_core::scan::{
        discover, find_unannotated, run, FileStatus, ScanConfig, ScanError, ValidationMode,
    };
    use ledgerbase_core::headers::HeaderStyle;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, ".gitignore", "generated/\n*.tmp.py\n");
        write(root, "tools/good.py", "##: name = good.py\n##: description = Fine\n\nprint()\n");
        write(root, "tools/partial.py", "##: name = partial.py\n");
        write(root, "tools/bare.sh", "echo hi\n");
        write(root, "docs/guide.md", "---\nname: guide.md\ndescription: Guide\n---\n# Guide\n");
        write(root, "ci.yml", "# name = ci.yml\n# description = CI\non: push\n");
        write(root, "generated/out.py", "print()\n");
        write(root, "tools/scratch.tmp.py", "print()\n");
        write(root, "node_modules/pkg/index.py", "print()\n");
        write(root, "docs/build/page.md", "# built\n");
        write(root, "README.txt", "not scanned\n");
        dir
    }

    fn rel_paths(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
        files
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_discover_applies_ignore_exclude_and_extension_rules() {
        let dir = tree();
        let files = discover(&ScanConfig::at(dir.path())).unwrap();
        let mut got = rel_paths(dir.path(), files);
        got.sort();
        assert_eq!(
            got,
            vec!["ci.yml", "docs/guide.md", "tools/bare.sh", "tools/good.py", "tools/partial.py"]
        );
    }

    #[test]
    fn test_ignore_file_can_be_disabled() {
        let dir = tree();
        let cfg = ScanConfig { ignore_file: None, ..ScanConfig::at(dir.path()) };
        let got = rel_paths(dir.path(), discover(&cfg).unwrap());
        assert!(got.iter().any(|p| p == "generated/out.py"));
        assert!(!got.iter().any(|p| p.starts_with("node_modules")));
    }

    #[test]
    fn test_run_reports_failures_and_missing_headers() {
        let dir = tree();
        let report = run(&ScanConfig::at(dir.path())).unwrap();

        let s = report.summary();
        assert_eq!(s.checked, 5);
        assert_eq!(s.passed, 3);
        assert_eq!(s.failed, 1);
        assert_eq!(s.missing_header, 1);
        assert!(report.has_failures());

        let bare = report.files.iter().find(|f| f.path == Path::new("tools/bare.sh")).unwrap();
        assert_eq!(bare.status, FileStatus::MissingHeader);
    }

    #[test]
    fn test_simple_mode_uses_message_format() {
        let dir = tree();
        let cfg = ScanConfig { mode: ValidationMode::Simple, ..ScanConfig::at(dir.path()) };
        let report = run(&cfg).unwrap();
        let partial = report
            .files
            .iter()
            .find(|f| f.path == Path::new("tools/partial.py"))
            .unwrap();
        match &partial.status {
            FileStatus::Failed { reasons } => {
                assert_eq!(reasons, &vec!["Missing 'description' in tools/partial.py".to_string()]);
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_clean_tree_has_no_failures() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.py", "##: name = a.py\n##: description = A\n");
        let report = run(&ScanConfig::at(dir.path())).unwrap();
        assert!(!report.has_failures());
        assert!(report.render_text().contains("Checked 1 file(s): 1 passed"));
    }

    #[test]
    fn test_unterminated_front_matter_fails_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "---\nname: a.md\n");
        let report = run(&ScanConfig::at(dir.path())).unwrap();
        assert!(matches!(report.files[0].status, FileStatus::Failed { .. }));
    }

    #[test]
    fn test_json_report_carries_summary_and_status() {
        let dir = tree();
        let report = run(&ScanConfig::at(dir.path())).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["summary"]["checked"], 5);
        let statuses: Vec<&str> = json["files"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["status"].as_str().unwrap())
            .collect();
        assert!(statuses.contains(&"missing_header"));
        assert!(statuses.contains(&"failed"));
    }

    #[test]
    fn test_simple_mode_text_names_file_once() {
        let dir = tree();
        let cfg = ScanConfig { mode: ValidationMode::Simple, ..ScanConfig::at(dir.path()) };
        let text = run(&cfg).unwrap().render_text();
        assert!(text.contains("❌ Error in tools/partial.py: Missing 'description' in tools/partial.py\n"));
        assert!(!text.contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_unreadable_file_is_skipped_without_failing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.py", "##: name = a.py\n##: description = A\n");
        fs::write(dir.path().join("b.py"), [0xff, 0xfe, 0x00, b'\n']).unwrap();

        let report = run(&ScanConfig::at(dir.path())).unwrap();
        let b = report.files.iter().find(|f| f.path == Path::new("b.py")).unwrap();
        assert!(matches!(b.status, FileStatus::Skipped { .. }));
        assert!(!report.has_failures());
        assert_eq!(report.summary().skipped, 1);
        assert!(report.render_text().contains("could not read b.py"));
    }

    #[test]
    fn test_yaml_document_start_is_missing_header() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "deploy.yml", "---\nname: deploy\non: push\njobs: {}\n");

        let report = run(&ScanConfig::at(dir.path())).unwrap();
        assert_eq!(report.files[0].status, FileStatus::MissingHeader);

        let files = find_unannotated(&ScanConfig::at(dir.path())).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "deploy.yml");
        assert_eq!(files[0].header_style, Some(HeaderStyle::Comment));
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&ScanConfig::at(dir.path().join("nope"))).unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound(_)));
    }

    #[test]
    fn test_unannotated_lists_files_without_headers() {
        let dir = tree();
        let files = find_unannotated(&ScanConfig::at(dir.path())).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "bare.sh");
        assert_eq!(files[0].file_type, ".sh");
        assert_eq!(files[0].header_style, Some(HeaderStyle::Structured));
        assert_eq!(files[0].path, Path::new("tools/bare.sh"));
    }
}
