//! Rendering a successful analysis into a display model.
//!
//! The display model is an ordered list of label/value rows, decoupled from
//! the raw payload so presentation layers (plain text, JSON, HTML) can share
//! one deterministic structure. Rendering is pure: the same result always
//! yields the same rows.

mod headings;

use crate::model::AnalysisResult;
use serde::Serialize;

/// Literal shown when the page had no (or an empty) title.
pub const NO_TITLE: &str = "No title found";

/// Literal shown when the heading map is empty.
pub const NO_HEADINGS: &str = "No headings found";

/// One presentation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: &'static str,
    pub value: Value,
}

/// Row content: plain text, or a set of short tags (heading counts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Tags(Vec<String>),
}

/// Ordered display rows for one analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayModel {
    pub rows: Vec<Row>,
}

impl DisplayModel {
    /// JSON array of rows, for machine-readable sinks.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.rows).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Produces the display rows in their fixed order.
pub fn render(result: &AnalysisResult) -> DisplayModel {
    let title = match result.title.as_deref() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => NO_TITLE.to_string(),
    };

    let rows = vec![
        text_row("URL", result.url.clone()),
        text_row("HTML Version", result.html_version.clone()),
        text_row("Page Title", title),
        Row {
            label: "Headings",
            value: headings::format_headings(&result.headings),
        },
        text_row("Internal Links", result.internal_links.to_string()),
        text_row("External Links", result.external_links.to_string()),
        text_row("Inaccessible Links", result.inaccessible_links.to_string()),
        text_row(
            "Login Form",
            if result.has_login_form { "Yes" } else { "No" }.to_string(),
        ),
        text_row("Analysis Time", format_analysis_time(&result.analysis_time)),
    ];

    DisplayModel { rows }
}

fn text_row(label: &'static str, value: String) -> Row {
    Row {
        label,
        value: Value::Text(value),
    }
}

/// Formats the server's timestamp in the viewer's local convention.
/// An unparseable timestamp is shown verbatim rather than failing the render.
fn format_analysis_time(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Escapes text for sinks that embed the display model in HTML markup.
/// Every value that did not originate as a fixed literal must pass through
/// this before being written into markup; plain-text sinks need no escaping.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
