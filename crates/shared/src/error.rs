use thiserror::Error;

/// Why a single protocol line was dropped.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("empty line")]
    Empty,
    #[error("malformed command: {0}")]
    Json(#[from] serde_json::Error),
}
