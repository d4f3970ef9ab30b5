use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy that puts exactly `mine_count` distinct mines on a fresh grid.
pub trait MinePlacer {
    fn place_mines(&mut self, grid: &mut Grid, mine_count: CellCount) -> Result<()>;
}

impl<F> MinePlacer for F
where
    F: FnMut(&mut Grid, CellCount) -> Result<()>,
{
    fn place_mines(&mut self, grid: &mut Grid, mine_count: CellCount) -> Result<()> {
        self(grid, mine_count)
    }
}

fn check_capacity(grid: &Grid, mine_count: CellCount) -> Result<()> {
    let capacity = grid.total_cells();
    if mine_count > capacity {
        Err(GameError::TooManyMines {
            requested: mine_count,
            capacity,
        })
    } else {
        Ok(())
    }
}
