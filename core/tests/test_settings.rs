#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    use ledgerbase_core::crypto::{CipherSuite, Encryptor, SecretKey};
    use ledgerbase_core::scan::ValidationMode;
    use ledgerbase_core::settings::{AppConfig, LogFormat, SettingsError};

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn test_defaults_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let cfg = AppConfig::load_with_env(Some(&path), env(&[])).unwrap();
        assert!(cfg.secret_keys.is_empty());
        assert_eq!(cfg.cipher, CipherSuite::Aes256Gcm);
        assert_eq!(cfg.scan.mode, ValidationMode::Strict);
        assert_eq!(cfg.scan.required_fields, vec!["name", "description"]);
        assert_eq!(cfg.log.level, "info");
        assert_eq!(cfg.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledgerbase.toml");
        fs::write(
            &path,
            r#"
cipher = "chacha20-poly1305"

[scan]
root = "src"
mode = "simple"
required_fields = ["name", "author"]

[log]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let cfg = AppConfig::load_with_env(Some(&path), env(&[])).unwrap();
        assert_eq!(cfg.cipher, CipherSuite::Chacha20Poly1305);
        assert_eq!(cfg.scan.root, PathBuf::from("src"));
        assert_eq!(cfg.scan.mode, ValidationMode::Simple);
        assert_eq!(cfg.scan.required_fields, vec!["name", "author"]);
        assert_eq!(cfg.log.format, LogFormat::Json);
        // Unset scan fields keep their defaults.
        assert!(cfg.scan.include_exts.contains(&".py".to_string()));
    }

    #[test]
    fn test_env_overrides_file_and_splits_key_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledgerbase.toml");
        fs::write(&path, "secret_keys = [\"from-file\"]\n[log]\nlevel = \"warn\"\n").unwrap();

        let (k1, k2) = (SecretKey::generate().encode(), SecretKey::generate().encode());
        let keys = format!("{k1},{k2}");
        let cfg = AppConfig::load_with_env(
            Some(&path),
            env(&[("LEDGERBASE_SECRET_KEYS", &keys), ("LEDGERBASE_LOG__LEVEL", "trace")]),
        )
        .unwrap();

        assert_eq!(cfg.secret_keys, vec![k1, k2]);
        assert_eq!(cfg.log.level, "trace");

        let enc = Encryptor::from_config(&cfg.encryption()).unwrap();
        assert_eq!(enc.key_count(), 2);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_with_env(Some(&dir.path().join("absent.toml")), env(&[])).unwrap_err();
        assert!(matches!(err, SettingsError::Load(_)));
    }

    #[test]
    fn test_empty_extension_list_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledgerbase.toml");
        fs::write(&path, "[scan]\ninclude_exts = []\n").unwrap();

        let err = AppConfig::load_with_env(Some(&path), env(&[])).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { key: "scan.include_exts", .. }));
    }
}
