//! Wire payloads for the analyzer service.
//!
//! Shapes mirror the server's JSON exactly; extra fields the server may add
//! are ignored on decode, and a missing `headings` map decodes as empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The single outbound payload: a candidate URL for analysis.
///
/// Invariant: `url` is the trimmed, non-empty raw user input. It is not
/// required to be a syntactically valid URL from the server's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub url: String,
}

impl AnalysisRequest {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim().to_string(),
        }
    }

    /// Form-urlencoded request body (`url=<percent-encoded url>`).
    pub fn form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("url", &self.url)
            .finish()
    }
}

/// Structured summary of an analyzed page, as returned on a 2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub url: String,
    pub html_version: String,
    /// Page title; empty or absent means the page had none.
    #[serde(default)]
    pub title: Option<String>,
    /// Heading-level label -> count (e.g. "h1" -> 2). May be empty.
    #[serde(default)]
    pub headings: BTreeMap<String, u64>,
    pub internal_links: u64,
    pub external_links: u64,
    pub inaccessible_links: u64,
    pub has_login_form: bool,
    /// Timestamp string; parsed only at render time.
    pub analysis_time: String,
}

/// Body of a non-2xx response. The server emits either a structured shape
/// carrying the upstream status code or a bare error message; presence of
/// `status_code` selects the structured shape (the server includes an
/// `error` key alongside it, so the untagged decode must try Upstream first).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Upstream { status_code: u16, description: String },
    Generic { error: String },
}
