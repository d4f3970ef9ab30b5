use std::io::{self, Write};

use sweeper_core::{Cell, Coordinates, Grid, Notice, Presenter};

use crate::row_label;

const HIDDEN_CELL: char = '_';
const MINE_CELL: char = '*';

/// Plain text [`Presenter`] writing to any writer, flushing after each notice so prompts show up before input is
/// read.
#[derive(Debug)]
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_notice(&mut self, notice: Notice<'_>) -> io::Result<()> {
        let w = &mut self.writer;
        match notice {
            Notice::Welcome => writeln!(w, "Welcome to Minesweeper!\n")?,
            Notice::Grid(grid) => write_grid(w, grid)?,
            Notice::Prompt(text) => write!(w, "{}", text)?,
            Notice::PromptMove => write!(w, "Select a square to reveal (e.g. A1): ")?,
            Notice::AlreadyRevealed(_) => writeln!(w, "(Already revealed)")?,
            Notice::InvalidInput { input, reason } => {
                writeln!(w, "Invalid input: '{}'. {}", input, reason)?
            }
            Notice::AdjacentMines(count) => {
                writeln!(w, "This square contains {} adjacent mines.", count)?
            }
            Notice::MineHit => writeln!(w, "Oh no, you detonated a mine! Game over.")?,
            Notice::Won => writeln!(w, "Congratulations, you have won the game!")?,
            Notice::PromptPlayAgain => writeln!(w, "Press any key to play again...")?,
            Notice::Goodbye => writeln!(w, "Goodbye!")?,
        }
        w.flush()
    }
}

impl<W: Write> Presenter for ConsoleOutput<W> {
    fn present(&mut self, notice: Notice<'_>) {
        if let Err(err) = self.write_notice(notice) {
            log::warn!("Failed to write to the console: {}", err);
        }
    }
}

/// Symbol for a single cell: hidden, revealed mine, or the revealed adjacent mine count.
pub fn cell_symbol(cell: Cell) -> char {
    match (cell.is_revealed(), cell.is_mine()) {
        (false, _) => HIDDEN_CELL,
        (true, true) => MINE_CELL,
        (true, false) => char::from_digit(u32::from(cell.adjacent_mine_count()), 10).unwrap_or('?'),
    }
}

/// Writes the grid with 1-based column numbers across the top and row letters down the side.
pub fn write_grid(w: &mut impl Write, grid: &Grid) -> io::Result<()> {
    let size = grid.size();

    write!(w, "  ")?;
    for column in 1..=size {
        write!(w, " {}", column)?;
    }
    writeln!(w)?;

    for row in 0..size {
        write!(w, "{} ", row_label(row))?;
        for column in 0..size {
            write!(w, " {}", cell_symbol(grid[Coordinates::new(row, column)]))?;
        }
        writeln!(w)?;
    }
    writeln!(w)
}
