use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Square minefield owned by a single game session.
///
/// A grid is built empty, mined exactly once by [`Grid::initialize`], and from then on only changes through
/// [`Grid::reveal_cell`] and [`Grid::reveal_all_mines`].
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
    size: Coord,
    mine_count: CellCount,
    revealed_safe: CellCount,
    initialized: bool,
}

impl Grid {
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize(size));
        }

        let side = usize::from(size);
        Ok(Self {
            cells: Array2::default((side, side)),
            size,
            mine_count: 0,
            revealed_safe: 0,
            initialized: false,
        })
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Number of non-mine cells revealed so far.
    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_valid_coordinate(&self, coords: Coordinates) -> bool {
        coords.row < self.size && coords.column < self.size
    }

    pub fn validate_coords(&self, coords: Coordinates) -> Result<Coordinates> {
        if self.is_valid_coordinate(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords {
                coords,
                size: self.size,
            })
        }
    }

    pub fn cell(&self, coords: Coordinates) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn neighbors(&self, coords: Coordinates) -> Result<NeighborIter> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords))
    }

    /// Valid coordinates of the up to eight cells surrounding `coords`.
    pub fn adjacent_coordinates(&self, coords: Coordinates) -> Result<Vec<Coordinates>> {
        Ok(self.neighbors(coords)?.collect())
    }

    /// Every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coordinates, Cell)> + '_ {
        // the grid side is a `Coord`, so both indices fit
        self.cells
            .indexed_iter()
            .map(|((row, column), &cell)| (Coordinates::new(row as Coord, column as Coord), cell))
    }

    /// Marks a mine at `coords`, returns whether the cell was not mined before.
    ///
    /// Meant for [`MinePlacer`] implementations, only allowed before the grid is initialized.
    pub fn place_mine(&mut self, coords: Coordinates) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        if self.initialized {
            return Err(GameError::AlreadyInitialized);
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            return Ok(false);
        }
        cell.place_mine();
        self.mine_count += 1;
        Ok(true)
    }

    /// Places mines with `placer` and computes the adjacent mine count of every safe cell.
    pub fn initialize<M>(&mut self, placer: &mut M, mine_count: CellCount) -> Result<()>
    where
        M: MinePlacer + ?Sized,
    {
        if self.initialized {
            return Err(GameError::AlreadyInitialized);
        }

        placer.place_mines(self, mine_count)?;
        if self.mine_count != mine_count {
            return Err(GameError::PlacementMismatch {
                requested: mine_count,
                placed: self.mine_count,
            });
        }

        self.compute_adjacent_mine_counts();
        self.initialized = true;
        log::debug!(
            "Initialized {0}x{0} grid with {1} mines",
            self.size,
            self.mine_count
        );
        Ok(())
    }

    fn compute_adjacent_mine_counts(&mut self) {
        for row in 0..self.size {
            for column in 0..self.size {
                let coords = Coordinates::new(row, column);
                if self[coords].is_mine() {
                    continue;
                }

                // at most 8 neighbors
                let count = self
                    .iter_neighbors(coords)
                    .filter(|&pos| self[pos].is_mine())
                    .count() as u8;
                self.cells[coords.to_nd_index()].set_adjacent_mine_count(count);
            }
        }
    }

    /// Reveals the cell at `coords`, flood-filling through zero-count cells.
    ///
    /// Revealing an already revealed cell does nothing. Mine cells are marked revealed when targeted directly but
    /// never expanded from, deciding whether that loses the game is up to the caller.
    pub fn reveal_cell(&mut self, coords: Coordinates) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        if !self.initialized {
            return Err(GameError::NotInitialized);
        }

        if self[coords].is_revealed() {
            log::trace!("Cell at {} already revealed", coords);
            return Ok(());
        }

        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];

            // the revealed flag doubles as the visited marker
            if cell.is_revealed() {
                continue;
            }
            cell.reveal();

            if cell.is_mine() {
                log::debug!("Revealed mine at {}", visit_coords);
                continue;
            }

            let count = cell.adjacent_mine_count();
            self.revealed_safe += 1;
            log::trace!("Revealed cell at {}, mine count: {}", visit_coords, count);

            if count == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| !self[pos].is_revealed()),
                );
            }
        }

        Ok(())
    }

    pub fn are_all_non_mines_revealed(&self) -> bool {
        self.revealed_safe == self.safe_cell_count()
    }

    /// Marks every mine as revealed, safe cells are left alone.
    pub fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine()) {
            cell.reveal();
        }
    }

    fn iter_neighbors(&self, coords: Coordinates) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}

/// Direct access to a cell, panics when `coords` is outside the grid.
impl Index<Coordinates> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coordinates) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
