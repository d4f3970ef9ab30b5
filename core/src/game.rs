use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Initializing,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Tally of the sessions played during one [`Game::run`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sessions: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Drives setup, play, resolution and replay for as many sessions as the player wants.
pub struct Game<S, P, M> {
    source: S,
    presenter: P,
    placer: M,
    grid: Option<Grid>,
    state: GameState,
}

impl<S, P, M> Game<S, P, M>
where
    S: MoveSource,
    P: Presenter,
    M: MinePlacer,
{
    pub fn new(source: S, presenter: P, placer: M) -> Self {
        Self {
            source,
            presenter,
            placer,
            grid: None,
            state: GameState::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Grid of the current or last finished session.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn into_parts(self) -> (S, P, M) {
        (self.source, self.presenter, self.placer)
    }

    /// Plays sessions until the player declines a replay or cancels.
    ///
    /// The goodbye notice is always the last thing presented. Cancellation ends the run normally, any other error is
    /// returned after the goodbye.
    pub fn run(&mut self) -> Result<RunSummary> {
        self.presenter.present(Notice::Welcome);

        let mut summary = RunSummary::default();
        let result = self.run_sessions(&mut summary);

        self.presenter.present(Notice::Goodbye);
        match result {
            Ok(()) => Ok(summary),
            Err(GameError::Cancelled) => {
                log::debug!("Input cancelled, ending run");
                Ok(summary)
            }
            Err(err) => {
                log::error!("An unexpected error occurred: {}", err);
                Err(err)
            }
        }
    }

    fn run_sessions(&mut self, summary: &mut RunSummary) -> Result<()> {
        loop {
            let state = self.play_session()?;
            summary.sessions += 1;
            match state {
                GameState::Won => summary.wins += 1,
                GameState::Lost => summary.losses += 1,
                _ => {}
            }
            log::debug!("Session {} ended: {:?}", summary.sessions, state);

            if !self.source.play_again(&mut self.presenter)? {
                return Ok(());
            }
        }
    }

    fn play_session(&mut self) -> Result<GameState> {
        self.state = GameState::Initializing;
        self.grid = None;
        let mut grid = self.setup()?;

        self.state = GameState::InProgress;
        while self.state.is_in_progress() {
            self.presenter.present(Notice::Grid(&grid));
            let coords = self.source.next_move(grid.size(), &mut self.presenter)?;
            self.state = self.process_move(&mut grid, coords)?;
        }

        self.resolve(&mut grid);
        self.grid = Some(grid);
        Ok(self.state)
    }

    fn setup(&mut self) -> Result<Grid> {
        let config = self.source.game_configuration(&mut self.presenter)?;
        log::debug!("Starting session with {:?}", config);

        let mut grid = Grid::new(config.grid_size())?;
        grid.initialize(&mut self.placer, config.mine_count())?;
        Ok(grid)
    }

    fn process_move(&mut self, grid: &mut Grid, coords: Coordinates) -> Result<GameState> {
        let cell = grid.cell(coords)?;

        if cell.is_revealed() {
            self.presenter.present(Notice::AlreadyRevealed(coords));
            return Ok(GameState::InProgress);
        }

        if cell.is_mine() {
            log::debug!("Mine hit at {}", coords);
            return Ok(GameState::Lost);
        }

        grid.reveal_cell(coords)?;
        self.presenter
            .present(Notice::AdjacentMines(cell.adjacent_mine_count()));

        Ok(if grid.are_all_non_mines_revealed() {
            GameState::Won
        } else {
            GameState::InProgress
        })
    }

    fn resolve(&mut self, grid: &mut Grid) {
        match self.state {
            GameState::Lost => {
                grid.reveal_all_mines();
                self.presenter.present(Notice::Grid(&*grid));
                self.presenter.present(Notice::MineHit);
            }
            GameState::Won => {
                self.presenter.present(Notice::Grid(&*grid));
                self.presenter.present(Notice::Won);
            }
            GameState::Initializing | GameState::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::VecDeque;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum Seen {
        Welcome,
        Grid(CellCount),
        Prompt,
        PromptMove,
        AlreadyRevealed(Coordinates),
        InvalidInput,
        AdjacentMines(u8),
        MineHit,
        Won,
        PromptPlayAgain,
        Goodbye,
    }

    #[derive(Default)]
    struct Recorder {
        seen: Vec<Seen>,
    }

    impl Recorder {
        fn count(&self, seen: &Seen) -> usize {
            self.seen.iter().filter(|&s| s == seen).count()
        }
    }

    impl Presenter for Recorder {
        fn present(&mut self, notice: Notice<'_>) {
            self.seen.push(match notice {
                Notice::Welcome => Seen::Welcome,
                Notice::Grid(grid) => Seen::Grid(grid.revealed_safe_count()),
                Notice::Prompt(_) => Seen::Prompt,
                Notice::PromptMove => Seen::PromptMove,
                Notice::AlreadyRevealed(coords) => Seen::AlreadyRevealed(coords),
                Notice::InvalidInput { .. } => Seen::InvalidInput,
                Notice::AdjacentMines(count) => Seen::AdjacentMines(count),
                Notice::MineHit => Seen::MineHit,
                Notice::Won => Seen::Won,
                Notice::PromptPlayAgain => Seen::PromptPlayAgain,
                Notice::Goodbye => Seen::Goodbye,
            });
        }
    }

    /// Replays canned answers, cancels once the moves run out.
    #[derive(Default)]
    struct Script {
        configs: VecDeque<Result<GameConfiguration>>,
        moves: VecDeque<Coordinates>,
        replays: VecDeque<bool>,
        replay_prompts: usize,
    }

    impl Script {
        fn new(size: Coord, mines: CellCount, moves: &[(Coord, Coord)]) -> Self {
            Self {
                configs: VecDeque::from([GameConfiguration::new(size, mines)]),
                moves: moves.iter().copied().map(Coordinates::from).collect(),
                replays: VecDeque::from([false]),
                ..Default::default()
            }
        }
    }

    impl MoveSource for Script {
        fn game_configuration(&mut self, _: &mut dyn Presenter) -> Result<GameConfiguration> {
            self.configs.pop_front().unwrap_or(Err(GameError::Cancelled))
        }

        fn next_move(&mut self, grid_size: Coord, out: &mut dyn Presenter) -> Result<Coordinates> {
            out.present(Notice::PromptMove);
            let coords = self.moves.pop_front().ok_or(GameError::Cancelled)?;
            assert!(coords.row < grid_size && coords.column < grid_size);
            Ok(coords)
        }

        fn play_again(&mut self, out: &mut dyn Presenter) -> Result<bool> {
            out.present(Notice::PromptPlayAgain);
            self.replay_prompts += 1;
            Ok(self.replays.pop_front().unwrap_or(false))
        }
    }

    fn game(
        script: Script,
        mines: &[(Coord, Coord)],
    ) -> Game<Script, Recorder, FixedMinePlacer> {
        let placer = FixedMinePlacer::new(mines.iter().copied().map(Coordinates::from));
        Game::new(script, Recorder::default(), placer)
    }

    const RING: [(Coord, Coord); 8] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ];

    #[test]
    fn win_by_revealing_every_safe_cell() {
        let mut game = game(Script::new(3, 1, &RING), &[(1, 1)]);

        let summary = game.run().unwrap();

        assert_eq!(
            summary,
            RunSummary {
                sessions: 1,
                wins: 1,
                losses: 0
            }
        );
        assert_eq!(game.state(), GameState::Won);
        let grid = game.grid().unwrap();
        assert!(grid.are_all_non_mines_revealed());
        assert!(!grid[Coordinates::new(1, 1)].is_revealed());

        let (script, recorder, _) = game.into_parts();
        assert_eq!(recorder.seen.first(), Some(&Seen::Welcome));
        assert_eq!(recorder.seen.last(), Some(&Seen::Goodbye));
        assert_eq!(recorder.count(&Seen::AdjacentMines(1)), 8);
        assert_eq!(recorder.count(&Seen::Won), 1);
        assert_eq!(recorder.count(&Seen::MineHit), 0);
        assert_eq!(recorder.count(&Seen::Goodbye), 1);
        assert_eq!(script.replay_prompts, 1);
    }

    #[test]
    fn loss_reveals_only_the_mines() {
        let mut game = game(Script::new(3, 1, &[(1, 1)]), &[(1, 1)]);

        let summary = game.run().unwrap();

        assert_eq!(summary.losses, 1);
        assert_eq!(game.state(), GameState::Lost);
        let grid = game.grid().unwrap();
        let revealed: Vec<_> = grid
            .iter_cells()
            .filter(|(_, cell)| cell.is_revealed())
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(revealed, [Coordinates::new(1, 1)]);

        let (_, recorder, _) = game.into_parts();
        let tail = &recorder.seen[recorder.seen.len() - 4..];
        assert_eq!(
            tail,
            [
                Seen::Grid(0),
                Seen::MineHit,
                Seen::PromptPlayAgain,
                Seen::Goodbye
            ]
        );
        assert_eq!(recorder.count(&Seen::Won), 0);
    }

    #[test]
    fn zero_cell_cascades_to_a_win() {
        let mut game = game(Script::new(4, 1, &[(0, 0)]), &[(3, 3)]);

        game.run().unwrap();

        assert_eq!(game.state(), GameState::Won);
        let (_, recorder, _) = game.into_parts();
        assert_eq!(recorder.count(&Seen::AdjacentMines(0)), 1);
        assert_eq!(recorder.count(&Seen::Grid(15)), 1);
    }

    #[test]
    fn partial_cascade_keeps_game_going() {
        let mut game = game(Script::new(4, 1, &[(0, 0)]), &[(2, 2)]);

        game.run().unwrap();

        // three numbered cells behind the mine stay hidden
        assert_eq!(game.state(), GameState::InProgress);
        let (script, recorder, _) = game.into_parts();
        assert_eq!(recorder.count(&Seen::Grid(12)), 1);
        assert_eq!(recorder.count(&Seen::Won), 0);
        assert_eq!(script.replay_prompts, 0);
    }

    #[test]
    fn already_revealed_move_changes_nothing() {
        let mut game = game(Script::new(3, 1, &[(0, 0), (0, 0)]), &[(1, 1)]);

        game.run().unwrap();

        // moves ran out, the session was cancelled mid-game
        assert_eq!(game.state(), GameState::InProgress);
        let (script, recorder, _) = game.into_parts();
        assert_eq!(
            recorder.count(&Seen::AlreadyRevealed(Coordinates::new(0, 0))),
            1
        );
        assert_eq!(recorder.count(&Seen::AdjacentMines(1)), 1);
        assert_eq!(recorder.count(&Seen::Grid(1)), 2);
        assert_eq!(script.replay_prompts, 0);
    }

    #[test]
    fn cancel_skips_replay_and_says_goodbye_once() {
        let mut script = Script::new(3, 1, &[]);
        script.configs = VecDeque::from([Err(GameError::Cancelled)]);
        let mut game = game(script, &[(1, 1)]);

        let summary = game.run().unwrap();

        assert_eq!(summary, RunSummary::default());
        assert!(game.grid().is_none());
        let (script, recorder, _) = game.into_parts();
        assert_eq!(recorder.seen, [Seen::Welcome, Seen::Goodbye]);
        assert_eq!(script.replay_prompts, 0);
    }

    #[test]
    fn replay_builds_a_fresh_grid() {
        let config = GameConfiguration::new(1, 0);
        let script = Script {
            configs: VecDeque::from([config.clone(), config]),
            moves: VecDeque::from([Coordinates::new(0, 0), Coordinates::new(0, 0)]),
            replays: VecDeque::from([true, false]),
            ..Default::default()
        };
        let mut game = game(script, &[]);

        let summary = game.run().unwrap();

        assert_eq!(
            summary,
            RunSummary {
                sessions: 2,
                wins: 2,
                losses: 0
            }
        );
        let (script, recorder, _) = game.into_parts();
        assert_eq!(script.replay_prompts, 2);
        // the second session starts hidden again, so the move is not "already revealed"
        assert_eq!(recorder.count(&Seen::AdjacentMines(0)), 2);
        assert_eq!(recorder.count(&Seen::Goodbye), 1);
    }

    #[test]
    fn fatal_error_is_returned_after_goodbye() {
        let mut script = Script::new(3, 1, &[]);
        script.configs = VecDeque::from([Err(GameError::Input("stdin closed".to_string()))]);
        let mut game = game(script, &[(1, 1)]);

        let result = game.run();

        assert_eq!(result, Err(GameError::Input("stdin closed".to_string())));
        let (script, recorder, _) = game.into_parts();
        assert_eq!(recorder.seen.last(), Some(&Seen::Goodbye));
        assert_eq!(recorder.count(&Seen::Goodbye), 1);
        assert_eq!(script.replay_prompts, 0);
    }

    #[test]
    fn broken_placer_is_fatal() {
        let script = Script::new(3, 2, &[(0, 0)]);
        let mut game = Game::new(
            script,
            Recorder::default(),
            FixedMinePlacer::new([Coordinates::new(1, 1)]),
        );

        assert!(matches!(
            game.run(),
            Err(GameError::PlacementMismatch { .. })
        ));
    }

    #[test]
    fn game_state_predicates() {
        assert!(GameState::InProgress.is_in_progress());
        assert!(!GameState::Initializing.is_finished());
        assert!(GameState::Won.is_finished());
        assert!(GameState::Lost.is_finished());
    }
}
