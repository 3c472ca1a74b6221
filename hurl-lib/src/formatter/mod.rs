//! Display text for the three captured artifacts.
//!
//! Every function here is fail-soft: input that cannot be reformatted comes
//! back unchanged.

mod xml;

use crate::core::json;
use crate::model::OutboundBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Xml,
    Script,
    Other,
}

impl BodyKind {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let media_type = content_type
            .and_then(|value| value.split(';').next())
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if media_type.contains("json") {
            BodyKind::Json
        } else if media_type == "js"
            || media_type.contains("javascript")
            || media_type.contains("ecmascript")
        {
            BodyKind::Script
        } else if media_type.contains("xml") {
            BodyKind::Xml
        } else {
            BodyKind::Other
        }
    }
}

/// Aligns `Name: value` lines within each header block. Nothing is dropped or reordered.
pub fn format_headers(raw: &str) -> String {
    let mut formatted = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            formatted.extend(align_block(&block));
            block.clear();
            formatted.push(String::new());
        } else {
            block.push(line);
        }
    }
    formatted.extend(align_block(&block));

    while formatted.last().is_some_and(|line| line.is_empty()) {
        formatted.pop();
    }
    formatted.join("\n")
}

fn align_block(block: &[&str]) -> Vec<String> {
    let width = block
        .iter()
        .filter_map(|line| split_header(line))
        .map(|(name, _)| name.len() + 1)
        .max()
        .unwrap_or(0);

    block
        .iter()
        .map(|line| match split_header(line) {
            Some((name, value)) => format!("{:<width$} {value}", format!("{name}:"))
                .trim_end()
                .to_string(),
            None => line.trim_end().to_string(),
        })
        .collect()
}

fn split_header(line: &str) -> Option<(&str, &str)> {
    if line.starts_with("HTTP/") || line.starts_with([' ', '\t']) {
        return None;
    }
    let (name, value) = line.split_once(':')?;
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some((name, value.trim()))
}

pub fn format_body(content_type: Option<&str>, raw: &str) -> String {
    let formatted = match BodyKind::from_content_type(content_type) {
        BodyKind::Json | BodyKind::Script => json::pretty(raw),
        BodyKind::Xml => xml::indent(raw),
        BodyKind::Other => None,
    };
    formatted.unwrap_or_else(|| raw.to_string())
}

/// Sent header lines in transmission order, then the body echo after a blank line.
pub fn format_request(sent_header_lines: &[String], body: &OutboundBody) -> String {
    let mut formatted = sent_header_lines
        .iter()
        .flat_map(|chunk| chunk.lines())
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let echo = body.echo();
    if !echo.is_empty() {
        formatted.push_str("\n\n");
        formatted.push_str(&echo);
    }
    formatted
}
