//! URL validation with an `https://` prefix fallback.
//!
//! A candidate is accepted if, after trimming, it parses as an absolute
//! http(s) URL with a host either as-is or once `https://` is prefixed.
//! The fallback makes scheme-less inputs like `example.com` acceptable.

/// Fixed message surfaced by the live validity check on the input field.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Returns true if `raw` is acceptable as an analysis target.
/// Empty-after-trim input is invalid; the submit path reports that case
/// with its own distinct message.
pub fn validate(raw: &str) -> bool {
    normalize(raw).is_some()
}

/// Trims and validates `raw`, returning the form that parsed (scheme-prefixed
/// when the fallback was applied). For display and diagnostics only; the
/// dispatcher sends the trimmed raw input unchanged.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // As-is first, so explicit http:// is preserved rather than rewritten.
    match url::Url::parse(trimmed) {
        Ok(parsed) => {
            if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() {
                return Some(trimmed.to_string());
            }
            // Any other explicit scheme is rejected outright; prefixing it
            // would smuggle the scheme into the host or userinfo
            // (`https://ftp://example.com`, `https://mailto:a@example.com`).
            // The one ambiguity is a bare host with a port: `example.com:8080`
            // also parses, with the host read as a scheme. Only a purely
            // numeric remainder may fall through to the prefix fallback.
            let rest = &trimmed[parsed.scheme().len() + 1..];
            let port = rest.split(['/', '?', '#']).next().unwrap_or("");
            if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
        }
        Err(_) => {}
    }
    let prefixed = format!("https://{trimmed}");
    parse_absolute(&prefixed).then_some(prefixed)
}

/// Live-check hook, called on every input change. `None` when the field is
/// empty or valid; advisory only, the submit handler re-checks emptiness.
pub fn validity_message(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || validate(trimmed) {
        None
    } else {
        Some(INVALID_URL_MESSAGE)
    }
}

fn parse_absolute(candidate: &str) -> bool {
    match url::Url::parse(candidate) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_and_http() {
        assert!(validate("https://example.com"));
        assert!(validate("http://example.com"));
    }

    #[test]
    fn accepts_schemeless_via_fallback() {
        assert!(validate("example.com"));
        assert_eq!(
            normalize("example.com").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn normalize_preserves_explicit_scheme() {
        assert_eq!(
            normalize("http://example.com").as_deref(),
            Some("http://example.com")
        );
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(
            normalize("  example.com/a?b=1  ").as_deref(),
            Some("https://example.com/a?b=1")
        );
    }

    #[test]
    fn accepts_subdomain_path_query_and_port() {
        assert!(validate("https://test.example.com/sample/path/"));
        assert!(validate("example.com/query?q1=test&q2=1"));
        assert!(validate("example.com:8080"));
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(!validate(""));
        assert!(!validate("   "));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(!validate("ftp://example.com"));
        assert!(!validate("mailto:a@example.com"));
    }

    #[test]
    fn fallback_does_not_rescue_explicit_schemes() {
        // Prefixing these would still parse (`https://ftp://example.com` has
        // host "ftp"); the explicit scheme must be judged on its own.
        assert_eq!(normalize("ftp://example.com"), None);
        assert_eq!(normalize("mailto:a@example.com"), None);
        assert_eq!(normalize("file:///etc/passwd"), None);
    }

    #[test]
    fn host_with_port_still_gets_prefix() {
        // `example.com:8080` parses as-is with the host read as a scheme;
        // a numeric remainder means a port, not a scheme.
        assert_eq!(
            normalize("example.com:8080").as_deref(),
            Some("https://example.com:8080")
        );
        assert_eq!(
            normalize("example.com:8080/path?q=1").as_deref(),
            Some("https://example.com:8080/path?q=1")
        );
    }

    #[test]
    fn rejects_text_that_is_not_a_url() {
        assert!(!validate("not a url at all!!!"));
    }

    #[test]
    fn validity_message_empty_and_valid_are_clear() {
        assert_eq!(validity_message(""), None);
        assert_eq!(validity_message("   "), None);
        assert_eq!(validity_message("example.com"), None);
    }

    #[test]
    fn validity_message_invalid_is_fixed_text() {
        assert_eq!(validity_message("no spaces allowed"), Some(INVALID_URL_MESSAGE));
    }
}
