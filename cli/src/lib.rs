//! Line-oriented terminal front end for the kaboom rules engine.
//!
//! The engine owns every rule, this crate only turns input lines into engine calls and draws
//! what comes back.

use std::io::{BufRead, Write};

use anyhow::Context;
use kaboom_core::{CellState, Coord2, FlagOutcome, GameError, GameSession, Outcome, RevealOutcome};
use serde::Serialize;

pub use command::*;
pub use render::*;

mod command;
mod render;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Redraw the board after every move
    #[default]
    Text,
    /// One JSON event per line
    Json,
}

/// What a single command did to the game.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Reveal(&'a RevealOutcome),
    Flag(&'a FlagOutcome),
    Help { text: &'static str },
    Error { message: String },
    Finished {
        outcome: Outcome,
        triggered_mine: Option<Coord2>,
        mines: Vec<Coord2>,
    },
}

enum Action {
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
}

/// Runs commands from `input` against `game` until the game ends, the player quits or input
/// runs out.
pub fn play<R: BufRead, W: Write>(
    game: &mut GameSession,
    input: R,
    output: W,
    format: Format,
) -> anyhow::Result<Outcome> {
    let mut frontend = Frontend { output, format };
    if format == Format::Text {
        frontend.board(game)?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::debug!("Rejected input {:?}: {}", line, err);
                frontend.error(&err)?;
                continue;
            }
        };
        log::debug!("Command: {:?}", command);

        match apply(game, command) {
            Ok(Some(action)) => frontend.action(game, &action)?,
            Ok(None) if command == Command::Quit => break,
            Ok(None) => frontend.help()?,
            Err(err) => frontend.error(&err)?,
        }

        if game.is_finished() {
            frontend.finished(game)?;
            break;
        }
    }

    Ok(game.outcome())
}

fn apply(game: &mut GameSession, command: Command) -> Result<Option<Action>, GameError> {
    Ok(Some(match command {
        Command::Reveal(coords) => Action::Reveal(game.reveal(coords)?),
        Command::ToggleFlag(coords) => Action::Flag(game.toggle_flag(coords)?),
        Command::ForceReveal(coords) => Action::Reveal(game.force_reveal(coords)?),
        Command::Mark(coords) => match game.state_at(coords)? {
            CellState::Flagged => Action::Reveal(game.force_reveal(coords)?),
            _ => Action::Flag(game.toggle_flag(coords)?),
        },
        Command::Help | Command::Quit => return Ok(None),
    }))
}

struct Frontend<W> {
    output: W,
    format: Format,
}

impl<W: Write> Frontend<W> {
    fn emit(&mut self, event: &Event) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.output, event).context("Failed to encode event")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn board(&mut self, game: &GameSession) -> anyhow::Result<()> {
        write!(self.output, "{}", BoardView(game))?;
        Ok(())
    }

    fn help(&mut self) -> anyhow::Result<()> {
        match self.format {
            Format::Json => self.emit(&Event::Help { text: HELP }),
            Format::Text => {
                writeln!(self.output, "{HELP}")?;
                Ok(())
            }
        }
    }

    fn action(&mut self, game: &GameSession, action: &Action) -> anyhow::Result<()> {
        match (self.format, action) {
            (Format::Json, Action::Reveal(outcome)) => self.emit(&Event::Reveal(outcome)),
            (Format::Json, Action::Flag(outcome)) => self.emit(&Event::Flag(outcome)),
            // the final board is drawn once the game is over
            (Format::Text, _) if game.is_finished() => Ok(()),
            (Format::Text, _) => self.board(game),
        }
    }

    fn error(&mut self, err: &dyn std::error::Error) -> anyhow::Result<()> {
        match self.format {
            Format::Json => self.emit(&Event::Error {
                message: err.to_string(),
            }),
            Format::Text => {
                writeln!(self.output, "error: {err}")?;
                Ok(())
            }
        }
    }

    fn finished(&mut self, game: &GameSession) -> anyhow::Result<()> {
        log::info!("Game over: {:?}", game.outcome());
        match self.format {
            Format::Json => self.emit(&Event::Finished {
                outcome: game.outcome(),
                triggered_mine: game.triggered_mine(),
                mines: game
                    .mine_coords()
                    .map(|mines| mines.iter().copied().collect())
                    .unwrap_or_default(),
            }),
            Format::Text => {
                self.board(game)?;
                let message = match game.outcome() {
                    Outcome::Won => "Congratulations -- you won!",
                    Outcome::Lost => "Kaboom! You lose.",
                    Outcome::InProgress => return Ok(()),
                };
                writeln!(self.output, "{message}")?;
                Ok(())
            }
        }
    }
}
