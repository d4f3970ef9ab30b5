use core::fmt;

/// Single coordinate axis used for grid size and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Position of a cell on the grid, `row` first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    pub row: Coord,
    pub column: Coord,
}

impl Coordinates {
    pub const fn new(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }
}

impl From<(Coord, Coord)> for Coordinates {
    fn from((row, column): (Coord, Coord)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coordinates {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.column.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major 3x3 neighborhood offsets, center excluded.
const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains inside a `size`-wide square.
fn apply_delta(coords: Coordinates, delta: (i16, i16), size: Coord) -> Option<Coordinates> {
    let (dr, dc) = delta;

    let row = coords.row.checked_add_signed(dr)?;
    if row >= size {
        return None;
    }

    let column = coords.column.checked_add_signed(dc)?;
    if column >= size {
        return None;
    }

    Some(Coordinates::new(row, column))
}

/// Lazily walks the in-bounds neighbors of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coordinates,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coordinates, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                DISPLACEMENTS[usize::from(self.index)],
                self.size,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
