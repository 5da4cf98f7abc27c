use core::fmt;
use kaboom_core::{CellContent, CellState, CellView, GameSession, Outcome};

/// Character drawn for a cell, mines that are still closed only show once the game is lost.
fn glyph(view: &CellView, mine_shown: bool) -> char {
    match (view.state, view.value) {
        (CellState::Exploded, _) => 'X',
        (_, _) if mine_shown => '*',
        (CellState::Hidden, _) => '#',
        (CellState::Flagged, _) => 'F',
        (CellState::Revealed, Some(CellContent::Number(0))) => '.',
        (CellState::Revealed, Some(CellContent::Number(count))) => {
            char::from_digit(count.into(), 10).unwrap_or('?')
        }
        (CellState::Revealed, _) => '?',
    }
}

/// The board with row and column indices followed by the flag counter.
pub struct BoardView<'a>(pub &'a GameSession);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        let (_, cols) = game.size();
        let mines = match game.outcome() {
            Outcome::Lost => game.mine_coords(),
            Outcome::InProgress | Outcome::Won => None,
        };

        write!(f, "   ")?;
        for col in 0..cols {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;

        for view in game.views() {
            let (row, col) = view.coords;
            if col == 0 {
                write!(f, "{row:>3}")?;
            }
            let mine_shown = mines.is_some_and(|mines| mines.contains(&view.coords));
            write!(f, "{:>3}", glyph(&view, mine_shown))?;
            if col + 1 == cols {
                writeln!(f)?;
            }
        }

        writeln!(f, "Flags left: {}", game.flag_budget())
    }
}

pub fn render_board(game: &GameSession) -> String {
    BoardView(game).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaboom_core::{FixedBoardGenerator, GameConfig};

    fn game(width: u8, height: u8, mines: &[(u8, u8)]) -> GameSession {
        let config = GameConfig::new_unchecked(width, height, 0);
        GameSession::generate(config, FixedBoardGenerator::new(mines.iter().copied())).unwrap()
    }

    #[test]
    fn fresh_board_is_hidden() {
        let game = game(3, 2, &[(0, 0)]);

        assert_eq!(
            render_board(&game),
            "     0  1  2\n  0  #  #  #\n  1  #  #  #\nFlags left: 1\n"
        );
    }

    #[test]
    fn shows_numbers_blanks_and_flags() {
        let mut game = game(4, 2, &[(0, 3), (1, 3)]);
        game.toggle_flag((1, 3)).unwrap();
        game.reveal((0, 0)).unwrap();

        assert_eq!(
            render_board(&game),
            "     0  1  2  3\n  0  .  .  2  #\n  1  .  .  2  F\nFlags left: 1\n"
        );
    }

    #[test]
    fn board_view_formats_inline() {
        let game = game(2, 1, &[]);

        assert_eq!(
            format!("[{}]", BoardView(&game)),
            "[     0  1\n  0  #  #\nFlags left: 0\n]"
        );
    }

    #[test]
    fn lost_board_shows_every_mine() {
        let mut game = game(3, 1, &[(0, 0), (0, 2)]);
        game.toggle_flag((0, 2)).unwrap();
        game.reveal((0, 0)).unwrap();

        assert_eq!(
            render_board(&game),
            "     0  1  2\n  0  X  #  *\nFlags left: 1\n"
        );
    }
}
