use sq_core::SqError;
use sq_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Core(#[from] SqError),
}

pub type ModelResult<T> = Result<T, ModelError>;
