use std::fmt::Display;
use std::io::BufRead;

use sweeper_core::{
    CellCount, Coord, Coordinates, GameConfiguration, GameError, MoveSource, Notice, Presenter,
    max_mines,
};
use thiserror::Error;

use crate::{MAX_GRID_SIZE, row_label};

/// Typed at any setup or move prompt to leave the game.
const QUIT_KEYWORD: &str = "quit";

const GRID_SIZE_PROMPT: &str = "Enter the size of the grid (e.g. 4 for a 4x4 grid): ";
const PLAY_AGAIN_HINT: &str = " (Press Enter to play again, or type 'n' to quit)\n";

/// Why a typed move was rejected, displayed verbatim to the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Invalid format. Use format like 'A1'.")]
    Format,
    #[error("Invalid column number format.")]
    Column,
    #[error(
        "Coordinates out of bounds for grid size {size}. Row (A-{last_row}), Column (1-{size})."
    )]
    OutOfBounds { size: Coord, last_row: char },
}

/// Why a typed grid size or mine count was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigInputError {
    #[error("Input must be a valid integer.")]
    NotAnInteger,
    #[error("Grid size must be positive.")]
    SizeNotPositive,
    #[error("Grid size cannot exceed 26 rows (A-Z).")]
    SizeTooLarge,
    #[error("Mine count cannot be negative.")]
    NegativeMineCount,
    #[error(transparent)]
    Rejected(#[from] GameError),
}

/// Parses a move such as `C4`: an uppercase row letter followed by a 1-based column number.
pub fn parse_move(input: &str, grid_size: Coord) -> Result<Coordinates, MoveParseError> {
    let Some((&letter, digits)) = input.as_bytes().split_first() else {
        return Err(MoveParseError::Format);
    };
    if !letter.is_ascii_uppercase() || digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(MoveParseError::Format);
    }

    // the leading letter is a single byte
    let column: i32 = input[1..].parse().map_err(|_| MoveParseError::Column)?;
    let row = i32::from(letter - b'A');

    let size = i32::from(grid_size);
    if row >= size || column <= 0 || column > size {
        return Err(MoveParseError::OutOfBounds {
            size: grid_size,
            last_row: row_label(grid_size.saturating_sub(1)),
        });
    }

    Ok(Coordinates::new(row as Coord, (column - 1) as Coord))
}

/// Reads a decimal integer no wider than 32 bits, anything larger is not an integer to the player.
fn parse_integer(input: &str) -> Result<i32, ConfigInputError> {
    input.parse().map_err(|_| ConfigInputError::NotAnInteger)
}

pub fn parse_grid_size(input: &str) -> Result<Coord, ConfigInputError> {
    let value = parse_integer(input)?;
    if value <= 0 {
        return Err(ConfigInputError::SizeNotPositive);
    }
    if value > i32::from(MAX_GRID_SIZE) {
        return Err(ConfigInputError::SizeTooLarge);
    }
    Ok(value as Coord)
}

/// Parses the mine count for an already accepted grid size, applying the density cap.
pub fn parse_configuration(
    grid_size: Coord,
    input: &str,
) -> Result<GameConfiguration, ConfigInputError> {
    let value = parse_integer(input)?;
    let mines = CellCount::try_from(value).map_err(|_| ConfigInputError::NegativeMineCount)?;
    Ok(GameConfiguration::new(grid_size, mines)?)
}

/// Line-oriented [`MoveSource`] reading from any buffered reader.
///
/// The quit keyword or the end of input cancels the game.
#[derive(Debug)]
pub struct ConsoleInput<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Next trimmed line, `None` at the end of input.
    fn read_line(&mut self) -> sweeper_core::Result<Option<&str>> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .map_err(|err| GameError::Input(err.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim()))
    }

    fn read_answer(&mut self) -> sweeper_core::Result<String> {
        match self.read_line()? {
            None => {
                log::debug!("End of input reached");
                Err(GameError::Cancelled)
            }
            Some(line) if line.eq_ignore_ascii_case(QUIT_KEYWORD) => Err(GameError::Cancelled),
            Some(line) => Ok(line.to_owned()),
        }
    }

    /// Prompts until `parse` accepts an answer, reporting every rejection.
    fn ask<T, E: Display>(
        &mut self,
        out: &mut dyn Presenter,
        prompt: Notice<'_>,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> sweeper_core::Result<T> {
        loop {
            out.present(prompt);
            let raw = self.read_answer()?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    let reason = reason.to_string();
                    log::debug!("Rejected input {:?}: {}", raw, reason);
                    out.present(Notice::InvalidInput {
                        input: &raw,
                        reason: &reason,
                    });
                }
            }
        }
    }
}

impl<R: BufRead> MoveSource for ConsoleInput<R> {
    fn game_configuration(
        &mut self,
        out: &mut dyn Presenter,
    ) -> sweeper_core::Result<GameConfiguration> {
        let size = self.ask(out, Notice::Prompt(GRID_SIZE_PROMPT), parse_grid_size)?;

        let prompt = format!(
            "Enter the number of mines to place on the grid (maximum is {}): ",
            max_mines(size)
        );
        self.ask(out, Notice::Prompt(&prompt), |raw| {
            parse_configuration(size, raw)
        })
    }

    fn next_move(
        &mut self,
        grid_size: Coord,
        out: &mut dyn Presenter,
    ) -> sweeper_core::Result<Coordinates> {
        self.ask(out, Notice::PromptMove, |raw| parse_move(raw, grid_size))
    }

    fn play_again(&mut self, out: &mut dyn Presenter) -> sweeper_core::Result<bool> {
        out.present(Notice::PromptPlayAgain);
        out.present(Notice::Prompt(PLAY_AGAIN_HINT));

        Ok(match self.read_line() {
            Ok(Some(line)) => {
                !(line.eq_ignore_ascii_case("n") || line.eq_ignore_ascii_case(QUIT_KEYWORD))
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!("Error reading input for play again prompt: {}", err);
                false
            }
        })
    }
}
