use core::str::FromStr;
use kaboom_core::{Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r ROW COL   reveal a cell
  f ROW COL   flag or unflag a cell
  x ROW COL   reveal a cell even if it is flagged
  m ROW COL   secondary click: flag a hidden cell, reveal a flagged one
  h           show this help
  q           quit";

/// A single line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    ForceReveal(Coord2),
    /// The right-click gesture: flags first, a second click on the flag opens the cell.
    Mark(Coord2),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("Command {0:?} expects ROW and COL")]
    MissingCoords(String),
    #[error("Invalid coordinate {0:?}")]
    InvalidNumber(String),
    #[error("Unexpected trailing input {0:?}")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let name = name.to_ascii_lowercase();

        let build: fn(Coord2) -> Command = match name.as_str() {
            "q" | "quit" => return no_args(Command::Quit, words),
            "h" | "help" | "?" => return no_args(Command::Help, words),
            "r" | "reveal" => Command::Reveal,
            "f" | "flag" => Command::ToggleFlag,
            "x" | "force" => Command::ForceReveal,
            "m" | "mark" => Command::Mark,
            _ => return Err(CommandError::Unknown(name)),
        };

        let (Some(row), Some(col)) = (words.next(), words.next()) else {
            return Err(CommandError::MissingCoords(name));
        };
        let coords = (parse_coord(row)?, parse_coord(col)?);
        no_args(build(coords), words)
    }
}

fn parse_coord(word: &str) -> Result<Coord, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_owned()))
}

fn no_args<'a>(
    command: Command,
    mut rest: impl Iterator<Item = &'a str>,
) -> Result<Command, CommandError> {
    match rest.next() {
        None => Ok(command),
        Some(word) => Err(CommandError::Trailing(word.to_owned())),
    }
}
