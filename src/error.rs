use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid has no rows")]
    Empty,

    #[error("Grid row {row} has no cells")]
    EmptyRow { row: usize },

    #[error("Cell ({row}, {col}) is not a single-byte ASCII character")]
    NonAscii { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

#[derive(Error, Debug)]
pub enum BoggleError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Grid Error: {0}")]
    Grid(#[from] GridError),
}

pub type BoggleResult<T> = Result<T, BoggleError>;
