//! Stored analysis records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error_handling::DatabaseError;
use crate::models::AccessibilityResult;

/// A persisted analysis: the analyzer's result plus record identity.
///
/// The id, timestamp, and duration are assigned by the persistence layer
/// when the record is created; the analyzer's result is stored as JSON in
/// the `result` column. Serializes to the API's camelCase wire format
/// (`analyzedAt`, `duration`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// UUID v4 record identifier
    pub id: String,
    /// The analyzed URL as submitted
    pub url: String,
    /// The analyzer's output
    pub result: AccessibilityResult,
    /// UTC time the analysis completed
    pub analyzed_at: DateTime<Utc>,
    /// End-to-end analysis duration in milliseconds
    #[serde(rename = "duration")]
    pub duration_ms: i64,
}

/// Raw row shape of the `analyses` table.
#[derive(sqlx::FromRow)]
pub(crate) struct AnalysisRow {
    pub id: String,
    pub url: String,
    pub result: String,
    pub analyzed_at: String,
    pub duration_ms: i64,
}

impl AnalysisRow {
    /// Decodes the JSON result column and the RFC 3339 timestamp.
    pub(crate) fn into_record(self) -> Result<AnalysisRecord, DatabaseError> {
        let result: AccessibilityResult = serde_json::from_str(&self.result)?;
        let analyzed_at = DateTime::parse_from_rfc3339(&self.analyzed_at)
            .map_err(|e| {
                DatabaseError::CorruptRecord(format!(
                    "invalid analyzed_at '{}': {}",
                    self.analyzed_at, e
                ))
            })?
            .with_timezone(&Utc);
        Ok(AnalysisRecord {
            id: self.id,
            url: self.url,
            result,
            analyzed_at,
            duration_ms: self.duration_ms,
        })
    }
}
