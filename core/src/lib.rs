#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Board dimensions and mine count for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Builds a validated config, values are never clamped.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }
        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                cells,
            }
            .into());
        }
        Ok(())
    }

    /// Grid shape as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

const fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row as usize, col as usize]
}

/// Generated board: every cell's content plus the fixed set of mine coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mines: BTreeSet<Coord2>,
}

impl Board {
    /// Computes the adjacency numbers for every non-mine cell of `config`'s rectangle.
    ///
    /// Callers guarantee `mines` lies inside the rectangle.
    pub(crate) fn from_mine_set(config: GameConfig, mines: BTreeSet<Coord2>) -> Self {
        let size = config.size();
        let cells = Array2::from_shape_fn(nd_index(size), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            let content = if mines.contains(&coords) {
                CellContent::Mine
            } else {
                let adjacent = neighbors(coords, size)
                    .filter(|pos| mines.contains(pos))
                    .count();
                CellContent::Number(adjacent as u8)
            };
            Cell::new(content)
        });

        Self { cells, mines }
    }

    pub fn config(&self) -> GameConfig {
        let (height, width) = self.size();
        GameConfig::new_unchecked(width, height, self.mine_count())
    }

    /// Grid shape as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords(coords))
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn mine_coords(&self) -> &BTreeSet<Coord2> {
        &self.mines
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mines.contains(&coords)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    /// Every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[nd_index(coords)]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}

/// Where the game stands after an action.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a reveal: every cell whose visible state changed, in the order it changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    pub changes: Vec<CellView>,
    pub outcome: Outcome,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub fn has_update(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Result of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagOutcome {
    pub coords: Coord2,
    pub state: CellState,
    pub flag_budget: isize,
    pub changed: bool,
}

impl FlagOutcome {
    pub const fn has_update(&self) -> bool {
        self.changed
    }
}
