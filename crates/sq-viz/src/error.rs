use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to bind visualization server on {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VizResult<T> = Result<T, VizError>;
