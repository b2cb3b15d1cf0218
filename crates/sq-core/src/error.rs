//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `SqError`
//! via `From` impls, or keep them separate and wrap `SqError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::ids::{AgentId, QueueId};

/// The top-level error type for `sq-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SqError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("queue {0} out of range")]
    QueueOutOfRange(QueueId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sq-*` crates.
pub type SqResult<T> = Result<T, SqError>;
