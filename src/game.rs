use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::config::{ConfigError, GameConfig, ResetDirection};
use crate::food::{Food, PlacementError};
use crate::input::{Direction, GameInput};
use crate::snake::Snake;

/// Direction every fresh snake starts with.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    /// The snake covers every cell; ticking stops.
    Won,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Moved,
    Grew,
    /// The snake ran into itself and respawned.
    Reset,
    /// The snake grew to cover the whole board.
    Won,
    /// Nothing happened because the round is over.
    Idle,
}

/// Rules that stay fixed for a whole session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Rules {
    pub reset_direction: ResetDirection,
    pub reroll_food_on_reset: bool,
}

impl From<&GameConfig> for Rules {
    fn from(config: &GameConfig) -> Self {
        Self {
            reset_direction: config.reset_direction,
            reroll_food_on_reset: config.reroll_food_on_reset,
        }
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub status: GameStatus,
    pub tick_count: u64,
    pub resets: u32,
    pub best_length: usize,
    pub last_outcome: Option<TickOutcome>,
    board: Board,
    rules: Rules,
    rng: StdRng,
}

impl GameState {
    /// Builds a session from validated configuration.
    ///
    /// Uses the configured seed when present, OS entropy otherwise.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self::with_rng(board, Rules::from(config), rng))
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(board: Board, rules: Rules, seed: u64) -> Self {
        Self::with_rng(board, rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, rules: Rules, mut rng: StdRng) -> Self {
        let snake = Snake::new(board.center(), INITIAL_DIRECTION);
        let food = Self::initial_food(&mut rng, &board, &snake);

        log::info!(
            "new round on a {}x{} grid, snake at ({}, {})",
            board.grid_width(),
            board.grid_height(),
            snake.head().x,
            snake.head().y
        );

        Self {
            snake,
            food,
            status: GameStatus::Playing,
            tick_count: 0,
            resets: 0,
            best_length: 1,
            last_outcome: None,
            board,
            rules,
            rng,
        }
    }

    fn initial_food(rng: &mut StdRng, board: &Board, snake: &Snake) -> Food {
        // Board validation guarantees at least one cell besides the spawn cell.
        match Food::spawn(rng, board, snake.segments()) {
            Ok(food) => food,
            Err(PlacementError::BoardFull { .. }) => unreachable!("board has a free cell"),
        }
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.step();
        self.last_outcome = Some(outcome);
        outcome
    }

    fn step(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        self.snake.apply_pending_direction();
        let next = self.snake.next_cell(&self.board);

        let mut outcome = TickOutcome::Moved;
        if next == self.food.position {
            self.snake.grow(next);
            self.best_length = self.best_length.max(self.snake.len());
            log::debug!("snake grew to {} at tick {}", self.snake.len(), self.tick_count);

            if let Err(PlacementError::BoardFull { cells }) =
                self.food
                    .randomize_position(&mut self.rng, &self.board, self.snake.segments())
            {
                log::info!("snake filled all {cells} cells after {} ticks", self.tick_count);
                self.status = GameStatus::Won;
                return TickOutcome::Won;
            }
            outcome = TickOutcome::Grew;
        } else {
            self.snake.move_to(next);
        }

        if self.snake.has_self_collision() {
            self.reset_snake();
            return TickOutcome::Reset;
        }

        outcome
    }

    fn reset_snake(&mut self) {
        let direction = match self.rules.reset_direction {
            ResetDirection::Fixed => INITIAL_DIRECTION,
            ResetDirection::Random => Direction::random(&mut self.rng),
        };

        log::info!(
            "self-collision at length {} after {} ticks, respawning facing {direction:?}",
            self.snake.len(),
            self.tick_count
        );
        self.snake.reset(self.board.center(), direction);
        self.resets += 1;

        if self.rules.reroll_food_on_reset && self.food.position == self.snake.head() {
            if let Err(error) =
                self.food
                    .randomize_position(&mut self.rng, &self.board, self.snake.segments())
            {
                log::warn!("food left under the respawned snake: {error}");
            }
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.set_pending_direction(direction);
                }
            }
            GameInput::Restart => {
                if self.status == GameStatus::Won {
                    self.restart();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Starts a fresh round on the same board, rules, and RNG stream.
    pub fn restart(&mut self) {
        self.snake = Snake::new(self.board.center(), INITIAL_DIRECTION);
        self.food = Self::initial_food(&mut self.rng, &self.board, &self.snake);
        self.status = GameStatus::Playing;
        self.tick_count = 0;
        self.resets = 0;
        self.last_outcome = None;
        log::info!("round restarted");
    }
}
