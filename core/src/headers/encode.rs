// ## 📂 File: `src/headers/encode.rs`
//! src/headers/encode.rs
//!
//! Header rendering.
//!
//! Design notes:
//! - Keys are written in canonical `VALID_KEYS` order so output is stable.
//! - A rendered record of allowed keys parses back through `decode.rs` to the
//!   same record. Extra keys carried by `convert_to_front_matter` are written
//!   but dropped again on parse.

use crate::constants::{FRONT_MATTER_FENCE, FRONT_MATTER_REQUIRED, VALID_KEYS};
use crate::headers::decode::{comment_fields, parse_comment_block};
use crate::headers::types::{is_valid_key, HeaderRecord, HeaderStyle, MetaValue};

/// Render a `---` fenced front-matter block, one line per entry.
pub fn render_front_matter(record: &HeaderRecord) -> Vec<String> {
    let mut out = vec![FRONT_MATTER_FENCE.to_string()];
    for (key, value) in ordered(record) {
        let rendered = match value {
            MetaValue::Scalar(s) => quote_yaml_scalar(s),
            MetaValue::List(items) => format!("[{}]", items.join(", ")),
        };
        out.push(format!("{key}: {rendered}"));
    }
    out.push(FRONT_MATTER_FENCE.to_string());
    out
}

/// Render `##: key = value` or `# key = value` lines.
pub fn render_comment_header(record: &HeaderRecord, style: HeaderStyle) -> Vec<String> {
    let marker = match style {
        HeaderStyle::Structured => "##:",
        HeaderStyle::Comment | HeaderStyle::FrontMatter => "#",
    };
    ordered(record)
        .map(|(key, value)| format!("{marker} {key} = {value}"))
        .collect()
}

/// Rewrite a leading comment header as a front-matter block.
///
/// Returns `None` when the text has no `key = value` comment lines. A missing
/// `title` is derived from `stem`; other required front-matter keys default to
/// `""`. Keys outside the allowed set are carried over after the known ones.
/// Only field lines are removed; prose comment lines stay in the body.
pub fn convert_to_front_matter(text: &str, stem: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let fields = comment_fields(&lines);
    if fields.is_empty() {
        return None;
    }

    let mut record = parse_comment_block(&lines);
    record
        .entry("title".to_string())
        .or_insert_with(|| MetaValue::Scalar(title_from_stem(stem)));
    for key in FRONT_MATTER_REQUIRED {
        record
            .entry((*key).to_string())
            .or_insert_with(|| MetaValue::Scalar(String::new()));
    }

    // Unknown keys, first appearance order, last value wins.
    let mut extra: Vec<(&str, &str)> = Vec::new();
    for field in fields.iter().filter(|f| !is_valid_key(f.key)) {
        match extra.iter_mut().find(|(k, _)| *k == field.key) {
            Some(slot) => slot.1 = field.value,
            None => extra.push((field.key, field.value)),
        }
    }

    let mut out = render_front_matter(&record);
    let close = out.pop().unwrap_or_else(|| FRONT_MATTER_FENCE.to_string());
    out.extend(extra.iter().map(|(k, v)| format!("{k}: {}", quote_yaml_scalar(v))));
    out.push(close);
    out.push(String::new());

    let field_lines: Vec<usize> = fields.iter().map(|f| f.line).collect();
    let mut body = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| !field_lines.contains(idx))
        .map(|(_, line)| *line)
        .peekable();
    // The new block already ends with a blank separator.
    if body.peek().is_some_and(|l| l.trim().is_empty()) {
        body.next();
    }
    out.extend(body.map(str::to_string));

    let mut joined = out.join("\n");
    if text.ends_with('\n') {
        joined.push('\n');
    }
    Some(joined)
}

/// `cash_flow_report` -> `Cash Flow Report`.
pub fn title_from_stem(stem: &str) -> String {
    stem.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn ordered(record: &HeaderRecord) -> impl Iterator<Item = (&str, &MetaValue)> {
    VALID_KEYS
        .iter()
        .filter_map(move |key| record.get(*key).map(|v| (*key, v)))
}

/// Quote a scalar when plain YAML would misread it.
fn quote_yaml_scalar(s: &str) -> String {
    let needs_quotes = s.is_empty()
        || s.contains(": ")
        || s.contains(" #")
        || s.starts_with(|c: char| "[]{}&*!|>'\"%@`#,?-".contains(c));
    if !needs_quotes {
        return s.to_string();
    }
    if s.contains('"') {
        format!("'{s}'")
    } else {
        format!("\"{s}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_from_stem() {
        assert_eq!(title_from_stem("cash_flow_report"), "Cash Flow Report");
        assert_eq!(title_from_stem("README"), "Readme");
    }

    #[test]
    fn scalars_quoted_only_when_needed() {
        assert_eq!(quote_yaml_scalar("plain text"), "plain text");
        assert_eq!(quote_yaml_scalar(""), "\"\"");
        assert_eq!(quote_yaml_scalar("usage: run"), "\"usage: run\"");
        assert_eq!(quote_yaml_scalar("say \"hi\": now"), "'say \"hi\": now'");
    }

    #[test]
    fn rendered_front_matter_parses_back() {
        let mut record = HeaderRecord::new();
        record.insert("name".into(), MetaValue::from("a.md"));
        record.insert("description".into(), MetaValue::from("usage: run it"));
        record.insert("author".into(), MetaValue::from(""));
        record.insert("tags".into(), MetaValue::from(vec!["x", "y"]));

        let text = render_front_matter(&record).join("\n") + "\n";
        assert_eq!(crate::headers::decode::parse_header(&text).unwrap(), record);
    }
}
