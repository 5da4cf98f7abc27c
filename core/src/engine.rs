use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use serde::Serialize;

use crate::*;

/// A single game from the first move to a win or a loss.
///
/// Every mutating call validates its coordinates first, then refuses to run on a finished game,
/// and otherwise reports every cell whose visible state changed.
///
/// Sessions serialize for front ends but never deserialize, the counters are always derived
/// from a generated board:
///
/// ```compile_fail
/// let game: kaboom_core::GameSession = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSession {
    board: Board,
    remaining_to_reveal: CellCount,
    flag_budget: isize,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            remaining_to_reveal: board.safe_cell_count(),
            flag_budget: board.mine_count() as isize,
            board,
            outcome: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn generate(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        Ok(Self::new(generator.generate(config)?))
    }

    /// Starts a game on a randomly generated board, reproducible from `seed`.
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::generate(config, RandomBoardGenerator::seeded(seed))
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    /// Grid shape as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Number of safe cells still to open before the game is won.
    pub fn remaining_to_reveal(&self) -> CellCount {
        self.remaining_to_reveal
    }

    /// Mines minus placed flags, negative when the player over-flags.
    pub fn flag_budget(&self) -> isize {
        self.flag_budget
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// All mine positions, only disclosed once the game is over.
    pub fn mine_coords(&self) -> Option<&BTreeSet<Coord2>> {
        if self.is_finished() {
            Some(self.board.mine_coords())
        } else {
            None
        }
    }

    pub fn state_at(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords].state())
    }

    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        Ok(CellView::of(coords, &self.board[coords]))
    }

    /// Player-visible view of every cell in row-major order.
    pub fn views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.board
            .iter()
            .map(|(coords, cell)| CellView::of(coords, cell))
    }

    /// Flags a hidden cell or unflags a flagged one, anything else is left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use CellState::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = self.board.cell_mut(coords);
        let changed = match cell.state {
            Hidden => {
                cell.state = Flagged;
                self.flag_budget -= 1;
                true
            }
            Flagged => {
                cell.state = Hidden;
                self.flag_budget += 1;
                true
            }
            Revealed | Exploded => false,
        };
        let state = cell.state;
        log::debug!("Toggle flag at {:?}: {:?}, budget {}", coords, state, self.flag_budget);

        Ok(FlagOutcome {
            coords,
            state,
            flag_budget: self.flag_budget,
            changed,
        })
    }

    /// Reveals a hidden cell, flagged cells stay closed until unflagged or force revealed.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let mut changes = Vec::new();
        if self.board[coords].state() == CellState::Hidden {
            self.open_cell(coords, &mut changes);
        }
        Ok(self.outcome_with(changes))
    }

    /// Reveals a cell whether or not it carries a flag, the flag is given back to the budget.
    pub fn force_reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let mut changes = Vec::new();
        if self.board[coords].state().is_unrevealed() {
            self.open_cell(coords, &mut changes);
        }
        Ok(self.outcome_with(changes))
    }

    fn outcome_with(&self, changes: Vec<CellView>) -> RevealOutcome {
        RevealOutcome {
            changes,
            outcome: self.outcome,
        }
    }

    fn open_cell(&mut self, coords: Coord2, changes: &mut Vec<CellView>) {
        if let Some(content) = self.reveal_single_cell(coords, changes) {
            log::debug!("Open cell at {:?}: {:?}", coords, content);
            if content.is_blank() {
                self.flood_fill(coords, changes);
            }
        }

        if self.remaining_to_reveal == 0 {
            self.end_game(true);
        }
    }

    /// Opens every cell connected to the blank cell at `start`, plus the numbered border.
    fn flood_fill(&mut self, start: Coord2, changes: &mut Vec<CellView>) {
        let mut queued = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            log::trace!("Flood fill expanding {:?}", visit_coords);

            for pos in self.board.iter_neighbors(visit_coords) {
                let Some(content) = self.reveal_single_cell(pos, changes) else {
                    continue;
                };
                log::trace!("Flood opened cell at {:?}: {:?}", pos, content);

                if content.is_blank() && queued.insert(pos) {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    /// Opens one hidden or flagged cell, returning its content when it changed.
    fn reveal_single_cell(
        &mut self,
        coords: Coord2,
        changes: &mut Vec<CellView>,
    ) -> Option<CellContent> {
        let cell = self.board.cell_mut(coords);
        if !cell.state.is_unrevealed() {
            return None;
        }
        if cell.state == CellState::Flagged {
            self.flag_budget += 1;
        }

        let content = cell.content();
        cell.state = match content {
            CellContent::Mine => CellState::Exploded,
            CellContent::Number(_) => CellState::Revealed,
        };
        changes.push(CellView::of(coords, cell));

        if content.is_mine() {
            self.triggered_mine = Some(coords);
            self.end_game(false);
        } else {
            self.remaining_to_reveal -= 1;
        }
        Some(content)
    }

    fn end_game(&mut self, won: bool) {
        if self.outcome.is_finished() {
            return;
        }

        self.outcome = if won { Outcome::Won } else { Outcome::Lost };
        log::debug!("Game ended: {:?}", self.outcome);
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::SessionClosed)
        } else {
            Ok(())
        }
    }
}
