use sq_core::{AgentId, Cell};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {cell} outside {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u16, height: u16 },

    #[error("agent {0} is already placed")]
    AlreadyPlaced(AgentId),

    #[error("agent {0} is not on the grid")]
    NotPlaced(AgentId),
}

pub type GridResult<T> = Result<T, GridError>;
