// ## 📂 File: `src/headers/decode.rs`
//! src/headers/decode.rs
//!
//! Header block parsing.
//!
//! Design notes:
//! - Only the top of the file is read. The first line that is not a header line
//!   ends the block; nothing below it is consulted.
//! - Comment headers (`##: k = v`, `# k = v`) split on the first `=`.
//! - Front matter (`---` ... `---`) splits on the first `:`. It is only
//!   recognised where the file type allows it: `---` in Markdown, `"""---` in
//!   Python. A YAML document-start `---` is not a header.
//! - Unknown keys are dropped, not reported.

use std::fs;
use std::path::Path;

use crate::constants::{
    FRONT_MATTER_DOCSTRING_FENCE, FRONT_MATTER_FENCE, MARKER_COMMENT, MARKER_STRUCTURED, SHEBANG,
};
use crate::headers::types::{
    dotted_extension, is_list_key, is_valid_key, HeaderError, HeaderRecord, HeaderStyle, MetaValue,
};

const ANY_FENCE: &[&str] = &[FRONT_MATTER_FENCE, FRONT_MATTER_DOCSTRING_FENCE];
const DOCSTRING_FENCE: &[&str] = &[FRONT_MATTER_DOCSTRING_FENCE];

/// Characters trimmed from both ends of a value.
#[inline]
fn is_value_pad(c: char) -> bool {
    c.is_whitespace() || c == '\'' || c == '"'
}

/// Parse the header block at the top of `text` without knowing the file type.
/// Either front-matter fence is accepted.
///
/// # Returns
/// - `Ok(record)`, empty when the file has no header.
/// - `Err(HeaderError::UnterminatedFrontMatter)` when a front-matter fence is
///   never closed.
pub fn parse_header(text: &str) -> Result<HeaderRecord, HeaderError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_header_lines(&lines)
}

/// Same as [`parse_header`] over pre-split lines.
pub fn parse_header_lines(lines: &[&str]) -> Result<HeaderRecord, HeaderError> {
    parse_lines_with_fences(lines, ANY_FENCE)
}

/// Parse `text` with the header rules of the file at `path`.
pub fn parse_header_for(path: &Path, text: &str) -> Result<HeaderRecord, HeaderError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines_with_fences(&lines, front_matter_fences(&dotted_extension(path)))
}

/// Read and parse one file.
pub fn read_header(path: &Path) -> Result<HeaderRecord, HeaderError> {
    let text = fs::read_to_string(path).map_err(|source| HeaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_header_for(path, &text)
}

/// Fences that may open front matter in a file with extension `ext`.
fn front_matter_fences(ext: &str) -> &'static [&'static str] {
    match HeaderStyle::for_extension(ext) {
        Some(HeaderStyle::FrontMatter) | None => ANY_FENCE,
        Some(HeaderStyle::Structured) if ext == ".py" => DOCSTRING_FENCE,
        Some(_) => &[],
    }
}

fn parse_lines_with_fences(lines: &[&str], fences: &[&str]) -> Result<HeaderRecord, HeaderError> {
    let start = skip_shebang(lines);
    let body = &lines[start..];

    match body.first() {
        Some(first) if fences.iter().any(|f| *f == first.trim()) => parse_front_matter(body, start),
        _ => Ok(parse_comment_block(body)),
    }
}

/// Index of the first line after an optional shebang.
fn skip_shebang(lines: &[&str]) -> usize {
    match lines.first() {
        Some(first) if first.starts_with(SHEBANG) => 1,
        _ => 0,
    }
}

/// Strip a header marker, returning the content after it.
fn header_content(line: &str) -> Option<&str> {
    let stripped = line.trim_start();
    stripped
        .strip_prefix(MARKER_STRUCTURED)
        .or_else(|| stripped.strip_prefix(MARKER_COMMENT))
}

/// One `key = value` line of a leading comment block. Unknown keys included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentField<'a> {
    /// Index into the lines the block was scanned from.
    pub line: usize,
    pub key: &'a str,
    pub value: &'a str,
}

/// Every field line of the contiguous comment block at the top of `lines`.
///
/// A marked line is a field only when the text before its first `=` is a
/// single word; anything else (`# Budget Guide`, `# a + b = c`) is prose.
pub fn comment_fields<'a>(lines: &[&'a str]) -> Vec<CommentField<'a>> {
    let mut fields = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(content) = header_content(line) else {
            break;
        };
        let Some((key, value)) = content.trim().split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
            continue;
        }
        fields.push(CommentField { line: idx, key, value: value.trim_matches(is_value_pad) });
    }

    fields
}

/// Parse a contiguous comment header into a record of allowed keys.
pub fn parse_comment_block(lines: &[&str]) -> HeaderRecord {
    let mut record = HeaderRecord::new();
    for field in comment_fields(lines) {
        insert_field(&mut record, field.key, field.value);
    }
    record
}

/// Parse a front-matter block. `body[0]` is the opening fence; `offset` is its
/// position in the file for error reporting.
fn parse_front_matter(body: &[&str], offset: usize) -> Result<HeaderRecord, HeaderError> {
    let mut record = HeaderRecord::new();
    // Key the next indented line belongs to.
    let mut open_key: Option<String> = None;

    for line in &body[1..] {
        if line.trim() == FRONT_MATTER_FENCE {
            return Ok(record);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indented = line.starts_with(char::is_whitespace) || trimmed.starts_with("- ");
        if indented {
            if let Some(key) = open_key.as_deref() {
                extend_field(&mut record, key, trimmed);
            }
            continue;
        }

        open_key = None;
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        // Block scalar indicators: the text follows on indented lines.
        let value = match value.trim() {
            ">" | ">-" | "|" | "|-" => "",
            _ => value,
        };
        if insert_field(&mut record, key, value) {
            open_key = Some(key.to_string());
        }
    }

    Err(HeaderError::UnterminatedFrontMatter { line: offset + 1 })
}

/// Insert one `key`/`value` pair. Returns `false` if the key was dropped.
fn insert_field(record: &mut HeaderRecord, key: &str, value: &str) -> bool {
    let key = key.trim();
    if !is_valid_key(key) {
        return false;
    }

    let value = strip_annotation(value).trim_matches(is_value_pad);
    let parsed = if is_list_key(key) {
        MetaValue::List(split_list(value))
    } else {
        MetaValue::Scalar(value.to_string())
    };
    record.insert(key.to_string(), parsed);
    true
}

/// Apply an indented front-matter continuation line to `key`.
fn extend_field(record: &mut HeaderRecord, key: &str, line: &str) {
    let Some(current) = record.get_mut(key) else {
        return;
    };

    match current {
        MetaValue::List(items) => {
            let item = line.strip_prefix("- ").unwrap_or(line);
            items.extend(split_list(item));
        }
        MetaValue::Scalar(text) => {
            let piece = line.trim_matches(|c| c == '\'' || c == '"');
            let piece = piece.trim_end();
            if piece.trim().is_empty() {
                return;
            }
            if text.is_empty() {
                text.push_str(piece.trim_start());
            } else if piece.starts_with(char::is_whitespace) {
                text.push_str(piece);
            } else {
                text.push(' ');
                text.push_str(piece);
            }
        }
    }
}

/// Split a list value on commas. Accepts an inline `[a, b]` form.
fn split_list(value: &str) -> Vec<String> {
    let value = value.trim();
    let value = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    value
        .split(',')
        .map(|item| item.trim_matches(is_value_pad))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop a trailing lint suppression such as `# noqa: E501`.
fn strip_annotation(value: &str) -> &str {
    match value.find("# noqa") {
        Some(idx) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_is_stripped() {
        assert_eq!(strip_annotation("Flask utility  # noqa: E501"), "Flask utility  ");
        assert_eq!(strip_annotation("plain"), "plain");
    }

    #[test]
    fn inline_list_brackets_removed() {
        assert_eq!(split_list("[validation, front-matter]"), vec!["validation", "front-matter"]);
    }

    #[test]
    fn empty_list_items_dropped() {
        assert_eq!(split_list("a, , b,"), vec!["a", "b"]);
    }

    #[test]
    fn comment_fields_skip_prose_and_keep_unknown_keys() {
        let lines = ["# Budget Guide", "##: name = a.py", "# a + b = c", "##: owner = ops", "", "##: tags = x"];
        let fields = comment_fields(&lines);
        let found: Vec<(usize, &str, &str)> = fields.iter().map(|f| (f.line, f.key, f.value)).collect();
        assert_eq!(found, vec![(1, "name", "a.py"), (3, "owner", "ops")]);
        assert_eq!(parse_comment_block(&lines).len(), 1);
    }

    #[test]
    fn yaml_document_start_is_not_front_matter() {
        let text = "---\nname: deploy\non: push\n";
        assert!(parse_header_for(Path::new("deploy.yml"), text).unwrap().is_empty());
        assert!(parse_header_for(Path::new("notes.md"), text).is_err());
        assert!(parse_header_for(Path::new("tool.py"), "---\nname: a\n").unwrap().is_empty());
        assert_eq!(parse_header_for(Path::new("tool.py"), "\"\"\"---\nname: a.py\n---\n").unwrap().len(), 1);
    }
}
