//! SQLite persistence for analysis records.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod repository;

pub use migrations::run_migrations;
pub use models::AnalysisRecord;
pub use pool::init_db_pool_with_path;
pub use repository::{find_analysis_by_id, find_analysis_page, insert_analysis};
