//! Error types for the insight layer.

use thiserror::Error;

/// Errors from report assembly and prompt rendering.
#[derive(Debug, Error)]
pub enum InsightError {
    /// Both the current and the comparison data sets are empty; there is
    /// nothing worth sending to the AI client.
    #[error("no data to summarize")]
    NoData,
}

/// Convenience type alias for insight results.
pub type InsightResult<T> = Result<T, InsightError>;
