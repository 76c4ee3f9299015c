#[cfg(test)]
mod tests {
    use std::path::Path;

    use proptest::prelude::*;
    use ledgerbase_core::constants::DEFAULT_REQUIRED_FIELDS;
    use ledgerbase_core::headers::{
        is_valid_date, parse_header, validate, FileMetadata, SchemaViolation,
    };

    const PATH: &str = "scripts/foo.py";

    #[test]
    fn test_missing_description_is_reported() {
        let record = parse_header("##: name = foo.py\n").unwrap();
        let errors = validate(&record, DEFAULT_REQUIRED_FIELDS, Path::new(PATH));
        assert_eq!(errors, vec!["Missing 'description' in scripts/foo.py".to_string()]);
    }

    #[test]
    fn test_complete_header_passes() {
        let record = parse_header(
            "##: name = foo.py\n##: description = Tool\n##: last_modified = 2025-04-12\n",
        )
        .unwrap();
        assert!(validate(&record, DEFAULT_REQUIRED_FIELDS, Path::new(PATH)).is_empty());
    }

    #[test]
    fn test_impossible_date_is_reported() {
        let record = parse_header(
            "##: name = foo.py\n##: description = Tool\n##: last_modified = 2025-13-40\n",
        )
        .unwrap();
        let errors = validate(&record, DEFAULT_REQUIRED_FIELDS, Path::new(PATH));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Bad date format in scripts/foo.py"));
        assert!(errors[0].contains("2025-13-40"));
    }

    #[test]
    fn test_custom_required_fields() {
        let record = parse_header("##: name = foo.py\n").unwrap();
        let errors = validate(&record, &["name", "author", "category"], Path::new(PATH));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("'author'"));
        assert!(errors[1].contains("'category'"));
    }

    #[test]
    fn test_date_rules() {
        assert!(is_valid_date("2025-04-12"));
        assert!(!is_valid_date("2025-4-12"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("12-04-2025"));
    }

    #[test]
    fn test_schema_accepts_full_record() {
        let record = parse_header(
            "##: name = foo.py\n##: description = Tool\n##: tags = a, b\n##: last_modified = 2025-04-12\n",
        )
        .unwrap();
        let meta = FileMetadata::from_record(&record, DEFAULT_REQUIRED_FIELDS).unwrap();
        assert_eq!(meta.name, "foo.py");
        assert_eq!(meta.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(meta.author, None);
    }

    #[test]
    fn test_schema_collects_every_violation() {
        let record = parse_header("##: category = ci\n##: last_modified = 2025-13-40\n").unwrap();
        let err = FileMetadata::from_record(&record, DEFAULT_REQUIRED_FIELDS).unwrap_err();
        assert!(err.violations.contains(&SchemaViolation::Missing { field: "name".into() }));
        assert!(err.violations.contains(&SchemaViolation::Missing { field: "description".into() }));
        assert!(err.violations.contains(&SchemaViolation::BadDate { value: "2025-13-40".into() }));
        assert_eq!(err.violations.len(), 3);
    }

    #[test]
    fn test_schema_always_requires_name() {
        let record = parse_header("##: description = Tool\n").unwrap();
        let none: [&str; 0] = [];
        let err = FileMetadata::from_record(&record, &none).unwrap_err();
        assert_eq!(err.violations, vec![SchemaViolation::Missing { field: "name".into() }]);
    }

    proptest! {
        #[test]
        fn prop_real_calendar_dates_are_valid(y in 1900i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let date = format!("{y:04}-{m:02}-{d:02}");
            prop_assert!(is_valid_date(&date));
        }

        #[test]
        fn prop_months_past_twelve_are_invalid(y in 1900i32..2100, m in 13u32..=99, d in 1u32..=28) {
            let date = format!("{y:04}-{m:02}-{d:02}");
            prop_assert!(!is_valid_date(&date));
        }
    }
}
