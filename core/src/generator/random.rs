use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniformly random placement without replacement.
///
/// Samples a random cell and mines it unless it already holds a mine, until the requested count is reached. The
/// expected number of draws grows with density, which stays low since configurations cap it.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer<R = SmallRng> {
    rng: R,
}

impl RandomMinePlacer<SmallRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMinePlacer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MinePlacer for RandomMinePlacer<R> {
    fn place_mines(&mut self, grid: &mut Grid, mine_count: CellCount) -> Result<()> {
        check_capacity(grid, mine_count)?;
        let size = grid.size();

        // mines placed before this call count towards the total
        let already_placed = grid.mine_count();
        if already_placed > mine_count {
            return Err(GameError::PlacementMismatch {
                requested: mine_count,
                placed: already_placed,
            });
        }
        let missing = mine_count - already_placed;

        // optimize for full boards
        if missing == grid.total_cells() - already_placed {
            log::warn!("Minefield full, every one of the {} cells gets a mine", mine_count);
            for row in 0..size {
                for column in 0..size {
                    grid.place_mine(Coordinates::new(row, column))?;
                }
            }
            return Ok(());
        }

        let mut draws: u64 = 0;
        while grid.mine_count() < mine_count {
            let coords = Coordinates::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            draws += 1;
            grid.place_mine(coords)?;
        }

        log::debug!("Placed {} mines in {} draws", missing, draws);
        Ok(())
    }
}
