//! URL validation for analyze requests.

use crate::config::constants::MAX_URL_LENGTH;

/// Validates a URL submitted for analysis.
///
/// The URL must be syntactically valid, use an explicit `http://` or
/// `https://` scheme (no silent prefixing; the client is expected to submit
/// a full URL), and stay under [`MAX_URL_LENGTH`] to prevent DoS via
/// extremely long URLs.
///
/// # Returns
///
/// `Ok(())` when the URL is acceptable, otherwise the list of validation
/// issues for the 400 response body.
pub fn validate_analyze_url(url: &str) -> Result<(), Vec<String>> {
    let mut issues = Vec::new();

    if url.is_empty() {
        issues.push("URL must not be empty".to_string());
        return Err(issues);
    }

    if url.len() > MAX_URL_LENGTH {
        issues.push(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        ));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        issues.push("URL must begin with http:// or https://".to_string());
    }

    if url::Url::parse(url).is_err() {
        issues.push("Invalid URL format".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        log::warn!("Rejected analyze URL '{}': {:?}", truncate(url), issues);
        Err(issues)
    }
}

fn truncate(url: &str) -> &str {
    // Byte slicing can split a UTF-8 boundary; fall back to the full URL
    url.get(..80).unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_analyze_url("https://example.com").is_ok());
        assert!(validate_analyze_url("http://example.com/page?q=1").is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let issues = validate_analyze_url("example.com").unwrap_err();
        assert!(issues.iter().any(|i| i.contains("http://")));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(validate_analyze_url("ftp://example.com").is_err());
        assert!(validate_analyze_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert!(validate_analyze_url("").is_err());
        assert!(validate_analyze_url("http://").is_err());
    }

    #[test]
    fn test_rejects_overlong_url() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let issues = validate_analyze_url(&url).unwrap_err();
        assert!(issues.iter().any(|i| i.contains("maximum length")));
    }
}
