#![no_std]

extern crate alloc;

pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use interface::*;
pub use types::*;

mod cell;
mod error;
mod game;
mod generator;
mod grid;
mod interface;
mod types;

/// Highest share of cells, in percent, a configuration may fill with mines.
pub const MAX_MINE_DENSITY_PERCENT: CellCount = 35;

/// Largest mine count accepted for a `size`-wide grid, `floor(size² * 0.35)`.
pub const fn max_mines(size: Coord) -> CellCount {
    // widen so the multiplication cannot overflow for the largest grids
    let total = mult(size, size) as u64;
    (total * MAX_MINE_DENSITY_PERCENT as u64 / 100) as CellCount
}

/// Validated settings for one game session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameConfiguration {
    grid_size: Coord,
    mine_count: CellCount,
}

impl GameConfiguration {
    pub fn new(grid_size: Coord, mine_count: CellCount) -> Result<Self> {
        if grid_size == 0 {
            return Err(GameError::InvalidSize(grid_size));
        }

        let max = max_mines(grid_size);
        if mine_count > max {
            return Err(GameError::MineDensityExceeded {
                requested: mine_count,
                max,
            });
        }

        Ok(Self {
            grid_size,
            mine_count,
        })
    }

    pub const fn grid_size(&self) -> Coord {
        self.grid_size
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.grid_size, self.grid_size)
    }
}
