use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What a cell holds, fixed when the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    /// Number of mines among the neighbors, `Number(0)` is a blank cell.
    Number(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Number(0))
    }
}

/// Player-visible state of a cell.
///
/// Valid transitions:
/// - Hidden -> Flagged
/// - Flagged -> Hidden
/// - Hidden | Flagged -> Revealed (number cells)
/// - Hidden | Flagged -> Exploded (mine cells)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed,
    Exploded,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    /// Revealed and exploded cells never change again.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Revealed | Self::Exploded)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    content: CellContent,
    pub(crate) state: CellState,
}

impl Cell {
    pub(crate) const fn new(content: CellContent) -> Self {
        Self {
            content,
            state: CellState::Hidden,
        }
    }

    pub const fn content(&self) -> CellContent {
        self.content
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    /// The content as the player is allowed to see it.
    pub const fn visible_value(&self) -> Option<CellContent> {
        if self.state.is_final() {
            Some(self.content)
        } else {
            None
        }
    }
}

/// A cell as shown to the front end: where it is, its state and, once opened, its content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub coords: Coord2,
    pub state: CellState,
    pub value: Option<CellContent>,
}

impl CellView {
    pub(crate) const fn of(coords: Coord2, cell: &Cell) -> Self {
        Self {
            coords,
            state: cell.state,
            value: cell.visible_value(),
        }
    }
}
