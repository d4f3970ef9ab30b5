use alloc::collections::BTreeSet;

use super::*;

/// Placement at a predetermined set of locations, for reproducible boards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedMinePlacer {
    locations: BTreeSet<Coordinates>,
}

impl FixedMinePlacer {
    /// Duplicate locations collapse into one mine.
    pub fn new(locations: impl IntoIterator<Item = Coordinates>) -> Self {
        Self {
            locations: locations.into_iter().collect(),
        }
    }

    pub fn locations(&self) -> impl Iterator<Item = Coordinates> + '_ {
        self.locations.iter().copied()
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place_mines(&mut self, grid: &mut Grid, mine_count: CellCount) -> Result<()> {
        check_capacity(grid, mine_count)?;

        let available = self.locations.len() as CellCount;
        if available != mine_count {
            return Err(GameError::PlacementMismatch {
                requested: mine_count,
                placed: available,
            });
        }

        for &coords in &self.locations {
            grid.place_mine(coords)?;
        }
        Ok(())
    }
}
