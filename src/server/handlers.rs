//! API request handlers.

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use scraper::Html;

use crate::analyzer;
use crate::app::validate_analyze_url;
use crate::config::constants::{CLIENT_ID_HEADER, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::models::{ProgressEvent, ProgressStep};
use crate::progress::ProgressSink;
use crate::storage::{self, AnalysisRecord};

use super::error::ApiError;
use super::types::{AnalyzeRequest, HistoryQuery, HistoryResponse};
use super::AppState;

/// `POST /analyze` - fetch a URL, run the accessibility scan, persist the
/// result, and return the stored record.
///
/// Live progress is delivered to the client whose correlation token arrives
/// in the `x-client-id` header, provided that client already holds an open
/// progress stream. No token, or no open stream, silently disables delivery
/// without affecting the response.
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    let start = Instant::now();

    validate_analyze_url(&body.url).map_err(ApiError::Validation)?;

    let sink = headers
        .get(CLIENT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|token| state.progress.sink(token));
    let progress = sink.as_ref().map(|s| s as &dyn ProgressSink);

    if let Some(p) = progress {
        p.emit(ProgressEvent::new(
            ProgressStep::Fetching,
            10,
            "Fetching URL content...",
        ));
    }

    let html = state.fetcher.fetch_html(&body.url).await?;

    // The parsed document is dropped before the next await point; scraper
    // documents are not Send and must not be held across one.
    let result = {
        let document = Html::parse_document(&html);
        analyzer::analyze(&document, progress)
    };

    let duration_ms = start.elapsed().as_millis() as i64;
    let record = storage::insert_analysis(&state.pool, &body.url, &result, duration_ms).await?;

    if let Some(p) = progress {
        p.emit(ProgressEvent::new(ProgressStep::Done, 100, "Analysis saved!"));
    }

    Ok(Json(record))
}

/// `GET /history` - paginated list of stored analyses, newest first.
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);

    let mut issues = Vec::new();
    if page == 0 {
        issues.push("page must be greater than 0".to_string());
    }
    if limit == 0 || limit > MAX_PAGE_LIMIT {
        issues.push(format!("limit must be between 1 and {}", MAX_PAGE_LIMIT));
    }
    if !issues.is_empty() {
        return Err(ApiError::Validation(issues));
    }

    let (data, total) = storage::find_analysis_page(&state.pool, page, limit).await?;
    let total_pages = total.div_ceil(u64::from(limit));

    Ok(Json(HistoryResponse {
        data,
        total,
        page,
        limit,
        total_pages,
    }))
}

/// `GET /analysis/:id` - a single stored analysis, or 404.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    storage::find_analysis_by_id(&state.pool, &id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}
