//! Repository operations over the `analyses` table.
//!
//! All inserts use parameterized queries. Writes are independent per
//! analysis: concurrent scans of the same URL each store their own record,
//! with no deduplication or cross-request locking.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error_handling::DatabaseError;
use crate::models::AccessibilityResult;

use super::models::{AnalysisRecord, AnalysisRow};

const SELECT_COLUMNS: &str = "id, url, result, analyzed_at, duration_ms";

/// Persists a completed analysis and returns the stored record.
///
/// The record identity (UUID v4 id, UTC timestamp) is assigned here; the
/// analyzer result is stored as JSON alongside a denormalized `score` column
/// for querying.
pub async fn insert_analysis(
    pool: &SqlitePool,
    url: &str,
    result: &AccessibilityResult,
    duration_ms: i64,
) -> Result<AnalysisRecord, DatabaseError> {
    let record = AnalysisRecord {
        id: Uuid::new_v4().to_string(),
        url: url.to_string(),
        result: result.clone(),
        analyzed_at: Utc::now(),
        duration_ms,
    };

    let result_json = serde_json::to_string(&record.result)?;
    sqlx::query(
        "INSERT INTO analyses (id, url, result, score, analyzed_at, duration_ms) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.id)
    .bind(&record.url)
    .bind(&result_json)
    .bind(i64::from(record.result.score))
    .bind(record.analyzed_at.to_rfc3339())
    .bind(record.duration_ms)
    .execute(pool)
    .await?;

    log::info!(
        "Stored analysis {} for {} (score {})",
        record.id,
        record.url,
        record.result.score
    );
    Ok(record)
}

/// Looks up a stored analysis by id.
pub async fn find_analysis_by_id(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<AnalysisRecord>, DatabaseError> {
    let row: Option<AnalysisRow> = sqlx::query_as(&format!(
        "SELECT {} FROM analyses WHERE id = ?",
        SELECT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(AnalysisRow::into_record).transpose()
}

/// Returns one page of stored analyses, newest first, plus the total count.
///
/// `page` is 1-based; offset pagination. Ties on `analyzed_at` fall back to
/// insertion order so pages are stable.
pub async fn find_analysis_page(
    pool: &SqlitePool,
    page: u32,
    limit: u32,
) -> Result<(Vec<AnalysisRecord>, u64), DatabaseError> {
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM analyses")
        .fetch_one(pool)
        .await?;

    let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);
    let rows: Vec<AnalysisRow> = sqlx::query_as(&format!(
        "SELECT {} FROM analyses ORDER BY analyzed_at DESC, rowid DESC LIMIT ? OFFSET ?",
        SELECT_COLUMNS
    ))
    .bind(i64::from(limit))
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let records = rows
        .into_iter()
        .map(AnalysisRow::into_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((records, total as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageReport, InputReport, TitleReport};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::storage::run_migrations(&pool).await.unwrap();
        pool
    }

    fn sample_result(score: u8) -> AccessibilityResult {
        AccessibilityResult {
            title: TitleReport {
                exists: true,
                content: Some("Sample".into()),
                is_empty: false,
            },
            images: ImageReport {
                total: 0,
                without_alt: 0,
                missing_alt_images: vec![],
            },
            inputs: InputReport {
                total: 0,
                without_label: 0,
                inputs_without_label: vec![],
            },
            score,
            passed_checks: 3,
            total_checks: 3,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_round_trip() {
        let pool = test_pool().await;
        let result = sample_result(100);

        let stored = insert_analysis(&pool, "https://example.com", &result, 42)
            .await
            .unwrap();
        let found = find_analysis_by_id(&pool, &stored.id).await.unwrap().unwrap();

        assert_eq!(found.id, stored.id);
        assert_eq!(found.url, "https://example.com");
        assert_eq!(found.result, result);
        assert_eq!(found.duration_ms, 42);
    }

    #[tokio::test]
    async fn test_find_by_unknown_id_returns_none() {
        let pool = test_pool().await;
        let found = find_analysis_by_id(&pool, "no-such-id").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_same_url_stores_independent_records() {
        let pool = test_pool().await;
        let result = sample_result(67);

        let first = insert_analysis(&pool, "https://example.com", &result, 1)
            .await
            .unwrap();
        let second = insert_analysis(&pool, "https://example.com", &result, 2)
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        let (_, total) = find_analysis_page(&pool, 1, 10).await.unwrap();
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn test_pagination_newest_first() {
        let pool = test_pool().await;
        for i in 0..5 {
            insert_analysis(&pool, &format!("https://example.com/{}", i), &sample_result(0), i)
                .await
                .unwrap();
        }

        let (page1, total) = find_analysis_page(&pool, 1, 2).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(page1.len(), 2);
        assert_eq!(page1[0].url, "https://example.com/4");
        assert_eq!(page1[1].url, "https://example.com/3");

        let (page3, _) = find_analysis_page(&pool, 3, 2).await.unwrap();
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].url, "https://example.com/0");

        let (beyond, _) = find_analysis_page(&pool, 4, 2).await.unwrap();
        assert!(beyond.is_empty());
    }
}
