//! constants.rs
//! Wire identifiers for the token envelope and the canonical header rule set.
//!
//! The header key sets are process-wide: every parser and validator in the crate
//! reads them from here, so the allow-list and the list-valued set can never drift.

/// Token envelope version byte.
pub const TOKEN_V1: u8 = 0x01;

/// Cipher suite identifiers (second byte of every token).
pub mod cipher_ids {
    pub const AES256_GCM: u8        = 0x01;
    pub const CHACHA20_POLY1305: u8 = 0x02;
}

/// Name of the settings key holding the ordered key sequence.
pub const SECRET_KEYS_SETTING: &str = "secret_keys";

/// Header line markers.
pub const MARKER_STRUCTURED: &str = "##:";
pub const MARKER_COMMENT: &str = "# ";
pub const SHEBANG: &str = "#!";

/// Front-matter fences.
pub const FRONT_MATTER_FENCE: &str = "---";
pub const FRONT_MATTER_DOCSTRING_FENCE: &str = "\"\"\"---";

/// Header keys whose value is a comma-separated list.
pub const LIST_KEYS: &[&str] = &["inputs", "outputs", "dependencies", "tags"];

/// Every key the parser keeps. Anything else is dropped silently.
pub const VALID_KEYS: &[&str] = &[
    "title",
    "name",
    "description",
    "category",
    "usage",
    "behavior",
    "inputs",
    "outputs",
    "dependencies",
    "author",
    "last_modified",
    "changelog",
    "tags",
];

/// Fields the scan driver requires unless settings override them.
pub const DEFAULT_REQUIRED_FIELDS: &[&str] = &["name", "description"];

/// Keys a converted front-matter block always carries.
pub const FRONT_MATTER_REQUIRED: &[&str] = &[
    "title",
    "name",
    "description",
    "category",
    "author",
    "last_modified",
    "changelog",
];

/// Field holding the ISO date of the last edit.
pub const LAST_MODIFIED: &str = "last_modified";

/// Literal shape of `last_modified`.
pub const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Extensions the scan driver looks at.
pub const DEFAULT_INCLUDE_EXTS: &[&str] = &[".py", ".sh", ".yml", ".yaml", ".toml", ".md"];

/// Directories never descended into. Entries with a `/` match a path segment run.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    ".git.bak",
    ".venv",
    "venv",
    ".nox",
    "__pycache__",
    "node_modules",
    "build",
    "dist",
    "target",
    "docs/build",
];

/// Gitignore-syntax file read from the scan root.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Category directory used when a header names no known category.
pub const MISC_CATEGORY: &str = "misc";

/// Header category -> documentation sub-directory.
pub const CATEGORY_DIRS: &[(&str, &str)] = &[
    ("etl", "etl"),
    ("budget", "budget"),
    ("api", "api"),
    ("ci", "dev"),
    ("setup", "dev"),
    ("dev", "dev"),
    ("usage", "usage"),
    ("docs", "docs"),
    ("security", "security"),
    ("misc", "misc"),
];

/// Toctree depth for generated category indexes.
pub const TOCTREE_MAXDEPTH: usize = 1;
