//! Application-level helpers.

pub mod url;

pub use url::validate_analyze_url;
