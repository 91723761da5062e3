// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record has no backing storage to view into")]
    NoBacking,
    #[error("backing line {line} out of range ({lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },
    #[error("span {start}..{end} out of bounds for line of {len} bytes")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
    #[error("span {start}..{end} does not fall on char boundaries")]
    NotCharBoundary { start: usize, end: usize },
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("corrupt field list: {reason}")]
    Corrupt { reason: &'static str },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
