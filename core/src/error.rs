use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Coord, Coordinates};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be positive, but was {0}")]
    InvalidSize(Coord),
    #[error("Mine count ({requested}) cannot exceed the total number of cells ({capacity})")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Mine count exceeds maximum allowed ({max}).")]
    MineDensityExceeded { requested: CellCount, max: CellCount },
    #[error("Placer put down {placed} mines but {requested} were requested")]
    PlacementMismatch {
        requested: CellCount,
        placed: CellCount,
    },
    #[error("Grid is already initialized")]
    AlreadyInitialized,
    #[error("Grid must be initialized before cells are revealed")]
    NotInitialized,
    #[error("Coordinates out of bounds: {coords} for grid size {size}")]
    InvalidCoords { coords: Coordinates, size: Coord },
    #[error("Input cancelled")]
    Cancelled,
    #[error("Input failed: {0}")]
    Input(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
