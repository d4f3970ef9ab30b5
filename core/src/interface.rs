use crate::*;

/// Everything the game reports to the player.
#[derive(Copy, Clone, Debug)]
pub enum Notice<'a> {
    Welcome,
    Grid(&'a Grid),
    /// Free-form prompt from an input collaborator, shown without a trailing newline.
    Prompt(&'a str),
    PromptMove,
    AlreadyRevealed(Coordinates),
    InvalidInput { input: &'a str, reason: &'a str },
    AdjacentMines(u8),
    MineHit,
    Won,
    PromptPlayAgain,
    Goodbye,
}

/// Output side of the game.
pub trait Presenter {
    fn present(&mut self, notice: Notice<'_>);
}

/// Input side of the game.
///
/// Implementations re-prompt on malformed input themselves, reporting through `out`. Only [`GameError::Cancelled`]
/// or a fatal failure should come back as an error.
pub trait MoveSource {
    fn game_configuration(&mut self, out: &mut dyn Presenter) -> Result<GameConfiguration>;

    /// Next cell to reveal, guaranteed to be inside a `grid_size`-wide grid.
    fn next_move(&mut self, grid_size: Coord, out: &mut dyn Presenter) -> Result<Coordinates>;

    fn play_again(&mut self, out: &mut dyn Presenter) -> Result<bool>;
}
