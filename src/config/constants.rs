//! Configuration constants.
//!
//! Fixed operational parameters for fetching, persistence, and the API.

/// Default SQLite database path.
pub const DB_PATH: &str = "./a11y_status.db";

/// Page fetch timeout in seconds.
///
/// Generous because the point of the tool is auditing arbitrary third-party
/// pages, some of which are slow; the request layer surfaces a timeout as a
/// user-visible message rather than retrying.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirect hops followed during a fetch.
pub const MAX_REDIRECTS: usize = 5;

/// Maximum response body size in bytes (2MB).
/// Larger responses are rejected to prevent memory exhaustion.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length (2048 characters) to prevent DoS via extremely long
/// URLs. Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// A browser-like value; some sites serve reduced or blocked markup to
/// obvious bot user agents. Override via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accept header sent with page fetches.
pub const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Accept-Language header sent with page fetches.
pub const ACCEPT_LANGUAGE_HEADER: &str = "en-US,en;q=0.5";

/// Default page size for `GET /history`.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Maximum page size for `GET /history`.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Request header carrying the client's progress correlation token.
pub const CLIENT_ID_HEADER: &str = "x-client-id";
