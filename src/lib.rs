pub mod api;
pub mod config;
pub mod error;
pub mod grid;
pub mod loader;
pub mod scoring;
pub mod search;

pub use api::{load_board, BoggleBoard};
pub use error::{BoggleError, BoggleResult, GridError};
pub use grid::Grid;
pub use search::PathSearch;
