//! Console implementation of the session's UI handle.
//!
//! The result panel becomes stdout in one of three formats; the error panel
//! and the busy/validity annotations go to stderr. "Hiding" panels is a
//! no-op on a terminal where nothing persists between writes.

use clap::ValueEnum;
use wpac_core::render::{escape_html, DisplayModel, Value};
use wpac_core::session::UiHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned label/value lines.
    Text,
    /// JSON array of display rows.
    Json,
    /// HTML fragment with values escaped.
    Html,
}

pub struct ConsoleUi {
    format: OutputFormat,
}

impl ConsoleUi {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn format_model(&self, model: &DisplayModel) -> String {
        match self.format {
            OutputFormat::Text => format_text(model),
            OutputFormat::Json => model.to_json(),
            OutputFormat::Html => format_html(model),
        }
    }
}

impl UiHandle for ConsoleUi {
    fn set_validity(&mut self, message: Option<&'static str>) {
        if let Some(message) = message {
            eprintln!("{message}");
        }
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            eprintln!("Analyzing...");
        }
    }

    fn hide_panels(&mut self) {}

    fn show_result(&mut self, model: &DisplayModel) {
        println!("{}", self.format_model(model));
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}

fn format_text(model: &DisplayModel) -> String {
    let mut out = String::new();
    for row in &model.rows {
        let value = match &row.value {
            Value::Text(text) => text.clone(),
            Value::Tags(tags) => tags.join("  "),
        };
        out.push_str(&format!("{:<20} {}\n", format!("{}:", row.label), value));
    }
    out.trim_end().to_string()
}

/// HTML fragment mirroring the analyzer's result panel markup. Labels are
/// fixed literals; every value passes through `escape_html`.
fn format_html(model: &DisplayModel) -> String {
    let mut out = String::from("<div class=\"results\">\n");
    for row in &model.rows {
        let value = match &row.value {
            Value::Text(text) => escape_html(text),
            Value::Tags(tags) => {
                let items: String = tags
                    .iter()
                    .map(|tag| format!("<span class=\"heading-item\">{}</span>", escape_html(tag)))
                    .collect();
                format!("<div class=\"headings-grid\">{items}</div>")
            }
        };
        out.push_str(&format!(
            "  <div class=\"result-item\"><span class=\"result-label\">{}:</span> <span class=\"result-value\">{}</span></div>\n",
            row.label, value
        ));
    }
    out.push_str("</div>");
    out
}
