//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::storage::AnalysisRecord;

/// Body of `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The URL to fetch and analyze
    pub url: String,
}

/// Query parameters of `GET /history`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// 1-based page number (default 1)
    pub page: Option<u32>,
    /// Page size (default 10, max 100)
    pub limit: Option<u32>,
}

/// Response of `GET /history`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    /// The requested page of records, newest first
    pub data: Vec<AnalysisRecord>,
    /// Total number of stored analyses
    pub total: u64,
    /// Echoed page number
    pub page: u32,
    /// Echoed page size
    pub limit: u32,
    /// Total number of pages at this page size
    pub total_pages: u64,
}
