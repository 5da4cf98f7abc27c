use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random mine placement driven by an injected rng.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBoardGenerator<SmallRng> {
    /// Reproducible generator, the same seed always places the same mines.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Result<Board> {
        generate(config, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_count(board: &Board, coords: Coord2) -> u8 {
        let (rows, cols) = board.size();
        let (row, col) = (coords.0 as i16, coords.1 as i16);
        let mut count = 0;
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let (r, c) = (row + d_row, col + d_col);
                if r >= 0
                    && c >= 0
                    && r < rows as i16
                    && c < cols as i16
                    && board.contains_mine((r as Coord, c as Coord))
                {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn numbers_match_neighboring_mines() {
        for seed in 0..50 {
            let config = GameConfig::new(9, 7, 12).unwrap();
            let board = RandomBoardGenerator::seeded(seed).generate(config).unwrap();

            for (coords, cell) in board.iter() {
                match cell.content() {
                    CellContent::Mine => assert!(board.contains_mine(coords)),
                    CellContent::Number(n) => {
                        assert!(!board.contains_mine(coords));
                        assert_eq!(n, expected_count(&board, coords), "seed {seed} at {coords:?}");
                    }
                }
                assert_eq!(cell.state(), CellState::Hidden);
            }
        }
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for (width, height, mines) in [(1, 1, 0), (1, 2, 1), (12, 10, 15), (5, 5, 24), (30, 16, 99)] {
            let config = GameConfig::new(width, height, mines).unwrap();
            let board = RandomBoardGenerator::seeded(7).generate(config).unwrap();

            assert_eq!(board.mine_count(), mines);
            assert_eq!(board.mine_coords().len(), usize::from(mines));
            let mine_cells = board.iter().filter(|(_, cell)| cell.content().is_mine()).count();
            assert_eq!(mine_cells, usize::from(mines));
            assert_eq!(board.total_cells(), config.total_cells());
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::new(16, 16, 40).unwrap();
        let a = RandomBoardGenerator::seeded(1234).generate(config).unwrap();
        let b = RandomBoardGenerator::seeded(1234).generate(config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_config() {
        let full = GameConfig::new_unchecked(3, 3, 9);
        assert_eq!(
            RandomBoardGenerator::seeded(0).generate(full),
            Err(GameError::Config(ConfigError::TooManyMines { mines: 9, cells: 9 }))
        );

        let empty = GameConfig::new_unchecked(0, 3, 0);
        assert_eq!(
            RandomBoardGenerator::seeded(0).generate(empty),
            Err(GameError::Config(ConfigError::EmptyBoard))
        );
    }

    #[test]
    fn generate_accepts_borrowed_rng() {
        let mut rng = SmallRng::seed_from_u64(99);
        let config = GameConfig::new(4, 4, 3).unwrap();
        let first = generate(config, &mut rng).unwrap();
        let second = generate(config, &mut rng).unwrap();

        assert_eq!(first.mine_count(), 3);
        assert_eq!(second.mine_count(), 3);
    }
}
