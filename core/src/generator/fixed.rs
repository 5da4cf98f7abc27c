use super::*;

/// Builds a board from explicit mine coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    mines: Vec<Coord2>,
}

impl FixedBoardGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    /// Only `config.width` and `config.height` are used, the mine count comes from the layout.
    fn generate(self, config: GameConfig) -> Result<Board> {
        let mine_count = CellCount::try_from(self.mines.len()).unwrap_or(CellCount::MAX);
        let config = GameConfig::new(config.width, config.height, mine_count)?;

        let (rows, cols) = config.size();
        let mut mines = BTreeSet::new();
        for coords in self.mines {
            if coords.0 >= rows || coords.1 >= cols {
                return Err(GameError::InvalidCoords(coords));
            }
            if !mines.insert(coords) {
                return Err(ConfigError::DuplicateMine(coords).into());
            }
        }

        Ok(Board::from_mine_set(config, mines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: Coord, height: Coord) -> GameConfig {
        GameConfig::new_unchecked(width, height, 0)
    }

    #[test]
    fn places_given_mines() {
        let board = FixedBoardGenerator::new([(0, 0)]).generate(config(2, 2)).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(0, 0)].content(), CellContent::Mine);
        for coords in [(0, 1), (1, 0), (1, 1)] {
            assert_eq!(board[coords].content(), CellContent::Number(1));
        }
    }

    #[test]
    fn rejects_mine_outside_board() {
        assert_eq!(
            FixedBoardGenerator::new([(0, 3)]).generate(config(3, 2)),
            Err(GameError::InvalidCoords((0, 3)))
        );
    }

    #[test]
    fn rejects_duplicate_mine() {
        assert_eq!(
            FixedBoardGenerator::new([(1, 1), (1, 1)]).generate(config(3, 3)),
            Err(GameError::Config(ConfigError::DuplicateMine((1, 1))))
        );
    }

    #[test]
    fn rejects_full_layout() {
        let err = FixedBoardGenerator::new([(0, 0), (0, 1)])
            .generate(config(2, 1))
            .unwrap_err();
        assert!(err.is_config());
    }
}
