/// Single square of the grid as tracked by the engine.
///
/// The adjacent mine count is only meaningful for non-mine cells once the owning grid is initialized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    is_mine: bool,
    is_revealed: bool,
    adjacent_mine_count: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn adjacent_mine_count(self) -> u8 {
        self.adjacent_mine_count
    }

    /// Hidden cell without a mine, i.e. one that still blocks a win.
    pub const fn is_hidden_safe(self) -> bool {
        !self.is_mine && !self.is_revealed
    }

    pub(crate) fn place_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
    }

    pub(crate) fn set_adjacent_mine_count(&mut self, count: u8) {
        self.adjacent_mine_count = count;
    }
}
