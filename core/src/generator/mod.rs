use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// Places `config.mines` mines uniformly at random using `rng`.
///
/// The same rng stream always yields the same board.
pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Board> {
    config.validate()?;

    let (rows, cols) = config.size();
    let mut coords: Vec<Coord2> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .collect();
    coords.shuffle(rng);

    let mines: BTreeSet<Coord2> = coords
        .into_iter()
        .take(config.mines.into())
        .collect();
    log::debug!(
        "Generated {}x{} board with {} mines",
        config.width,
        config.height,
        mines.len()
    );

    Ok(Board::from_mine_set(config, mines))
}
