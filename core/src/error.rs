use thiserror::Error;

use crate::{CellCount, Coord2};

/// Why a board configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must be at least one cell wide and one cell tall")]
    EmptyBoard,
    #[error("Too many mines, requested {mines} but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Mine at {0:?} was placed more than once")]
    DuplicateMine(Coord2),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Coordinates {0:?} are outside the board")]
    InvalidCoords(Coord2),
    #[error("Game already ended, no new moves are accepted")]
    SessionClosed,
}

impl GameError {
    /// Whether the error was raised while building a board, as opposed to during play.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
