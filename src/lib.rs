//! a11y_status library: web page accessibility auditing service.
//!
//! Fetches a web page by URL, scans its markup for a small fixed set of
//! accessibility defects (missing/empty page title, images without
//! alternative text, form inputs without associated labels), computes a
//! pass/fail score, and persists the result in SQLite for later retrieval.
//! An HTTP API exposes the analysis, history, and a live-progress stream.
//!
//! # Example
//!
//! ```no_run
//! use a11y_status::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 3001,
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The analyzer itself is a pure function and usable without the service:
//!
//! ```
//! use a11y_status::analyzer::analyze;
//! use scraper::Html;
//!
//! let document = Html::parse_document("<title>Hi</title><img src='x.png'>");
//! let result = analyze(&document, None);
//! // Title passes, the image check fails, the input check passes vacuously
//! assert_eq!(result.score, 67);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod progress;
pub mod server;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use models::{AccessibilityResult, ProgressEvent, ProgressStep};
pub use run::run_server;

// Internal run module (service wiring)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};

    use crate::config::Config;
    use crate::fetch::HtmlFetcher;
    use crate::initialization::init_client;
    use crate::progress::ProgressRegistry;
    use crate::server::{start_server, AppState};
    use crate::storage::{init_db_pool_with_path, run_migrations};

    /// Initializes all collaborators and serves the API until shutdown.
    ///
    /// This is the main entry point for the library: it opens (or creates)
    /// the SQLite database, runs migrations, builds the shared HTTP client,
    /// and binds the server to the configured address.
    ///
    /// # Errors
    ///
    /// Fails if the database cannot be opened or migrated, the HTTP client
    /// cannot be built, or the listener cannot bind.
    pub async fn run_server(config: Config) -> Result<()> {
        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to initialize database pool")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let state = AppState {
            pool,
            fetcher: Arc::new(HtmlFetcher::new(client)),
            progress: Arc::new(ProgressRegistry::new()),
        };

        start_server(&config.host, config.port, state).await
    }
}
