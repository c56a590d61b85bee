//! Page retrieval.
//!
//! The fetcher turns a URL into raw HTML text. It is the only networked
//! collaborator of the analyzer: fetch failures abort the analysis before
//! the core ever runs, and are surfaced as user-visible [`FetchError`]
//! messages by the request layer.

use std::sync::Arc;

use crate::config::constants::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::FetchError;

/// Fetches page markup over HTTP.
///
/// Holds a shared `reqwest::Client` (timeout, redirect cap, and headers are
/// configured at client construction, see `initialization::init_client`).
/// Independently instantiable; no process-wide state.
pub struct HtmlFetcher {
    client: Arc<reqwest::Client>,
}

impl HtmlFetcher {
    /// Creates a fetcher around a configured HTTP client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Retrieves the body of `url` as text.
    ///
    /// Follows redirects up to the client's cap, then requires a success
    /// status on the final response. Bodies larger than
    /// [`MAX_RESPONSE_BODY_SIZE`] are rejected.
    ///
    /// # Errors
    ///
    /// [`FetchError`] classifying timeout, DNS failure, non-success HTTP
    /// status, oversized body, or any other request failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("Fetching {}", url);
        let response = self.client.get(url).send().await.map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Fetch of {} returned HTTP {}", url, status.as_u16());
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        if let Some(length) = response.content_length() {
            if length > MAX_RESPONSE_BODY_SIZE as u64 {
                return Err(FetchError::BodyTooLarge(MAX_RESPONSE_BODY_SIZE));
            }
        }

        let body = response.text().await.map_err(FetchError::from)?;
        // Content-Length is optional; enforce the cap on the decoded body too
        if body.len() > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(MAX_RESPONSE_BODY_SIZE));
        }

        log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;

    async fn serve_fixture() -> String {
        let app = Router::new()
            .route(
                "/page",
                get(|| async { axum::response::Html("<html><head><title>Fixture</title></head></html>") }),
            )
            .route(
                "/missing",
                get(|| async { (axum::http::StatusCode::NOT_FOUND, "gone") }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn test_fetcher() -> HtmlFetcher {
        HtmlFetcher::new(Arc::new(reqwest::Client::new()))
    }

    #[tokio::test]
    async fn test_fetch_html_returns_body() {
        let base = serve_fixture().await;
        let html = test_fetcher()
            .fetch_html(&format!("{}/page", base))
            .await
            .unwrap();
        assert!(html.contains("<title>Fixture</title>"));
    }

    #[tokio::test]
    async fn test_fetch_html_maps_error_status() {
        let base = serve_fixture().await;
        let err = test_fetcher()
            .fetch_html(&format!("{}/missing", base))
            .await
            .unwrap_err();
        match &err {
            FetchError::HttpStatus(404) => {}
            other => panic!("expected HTTP 404 error, got {:?}", other),
        }
        assert_eq!(err.to_string(), "Failed to fetch URL: HTTP 404");
    }

    #[tokio::test]
    async fn test_fetch_html_connection_refused_is_request_error() {
        // Port 1 on localhost should refuse connections
        let err = test_fetcher()
            .fetch_html("http://127.0.0.1:1/")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request(_) | FetchError::Timeout(_)));
    }
}
