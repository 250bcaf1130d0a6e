use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{EngineConfig, GridSize, INITIAL_SNAKE_LEN};
use crate::food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// What a single [`GameEngine::step`] call did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The session was not running; nothing changed.
    Idle,
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto food, grew, and scored.
    AteFood,
    /// The snake ran into itself; the session is over.
    Collided,
}

/// Deterministic state machine for one snake session.
///
/// The engine advances only when [`step`](Self::step) is called and never
/// performs I/O or timing itself; a host loop measures elapsed time against
/// [`speed`](Self::speed) and steps at that cadence. All public operations are
/// plain synchronous calls, so a single owning caller drives the whole game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    /// Body segments, head first. Empty exactly while `NotStarted`.
    pub snake: Snake,
    /// Current food cell; `None` before the first start and after reset.
    pub food: Option<Position>,
    pub score: u32,
    /// Best score of any completed session this process has seen.
    pub high_score: u32,
    /// Time the host should wait between steps.
    pub speed: Duration,
    pub status: GameStatus,
    config: EngineConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an idle engine with OS-seeded food placement.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates an idle engine with reproducible food placement.
    #[must_use]
    pub fn new_with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        debug_assert!(config.grid.width > 0 && config.grid.height > 0);

        Self {
            snake: Snake::empty(),
            food: None,
            score: 0,
            high_score: 0,
            speed: config.base_step_interval,
            status: GameStatus::NotStarted,
            config,
            rng,
        }
    }

    /// Returns the immutable grid dimensions of this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    /// Begins a fresh session from `NotStarted` or `GameOver`.
    ///
    /// Spawns the snake centered and heading right, places the first food,
    /// zeroes the score, and restores the baseline speed. Starting over a
    /// finished session commits its score to the high score first.
    pub fn start(&mut self) {
        if !matches!(self.status, GameStatus::NotStarted | GameStatus::GameOver) {
            return;
        }

        self.commit_high_score();

        let grid = self.config.grid;
        let center = Position {
            x: i32::from(grid.width / 2),
            y: i32::from(grid.height / 2),
        };
        self.snake = Snake::spawn(center, INITIAL_SNAKE_LEN, Direction::Right);
        self.food = food::place(&mut self.rng, grid, &self.snake);
        self.score = 0;
        self.speed = self.config.base_step_interval;
        self.status = GameStatus::Running;
    }

    /// Tears the session down to `NotStarted` from any state.
    ///
    /// Commits the session score to the high score, empties the snake (the
    /// canonical not-started signal), and restores direction and speed
    /// defaults. Safe to call repeatedly; it doubles as the abort path.
    pub fn reset(&mut self) {
        self.commit_high_score();

        self.snake.clear();
        self.food = None;
        self.score = 0;
        self.speed = self.config.base_step_interval;
        self.status = GameStatus::NotStarted;
    }

    /// Flips between `Running` and `Paused`; no-op in any other state.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Requests a heading change to apply on the next step.
    ///
    /// Reversals of the current heading are dropped. Requests are accepted
    /// while paused so a queued turn is ready the moment play resumes; they
    /// are ignored before the first start and after game over.
    pub fn request_direction(&mut self, direction: Direction) {
        if matches!(self.status, GameStatus::Running | GameStatus::Paused) {
            self.snake.steer(direction);
        }
    }

    /// Advances the world by one discrete tick.
    ///
    /// A no-op unless running, so the host can call it unconditionally on
    /// every timer expiry. One call commits the pending heading, moves the
    /// head one cell with toroidal wrapping, and resolves collision, food,
    /// and tail bookkeeping before returning, so observers never see a
    /// half-applied tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Running {
            return StepOutcome::Idle;
        }

        let grid = self.config.grid;
        let next = self.snake.next_head(grid);

        if self.snake.occupies(next) {
            // The heading is committed but the pre-collision body stays
            // intact, so the final frame shows the snake facing the segment
            // it ran into.
            self.snake.commit_heading();
            self.status = GameStatus::GameOver;
            return StepOutcome::Collided;
        }

        let ate = self.food == Some(next);
        self.snake.advance(grid, ate);

        if !ate {
            return StepOutcome::Moved;
        }

        self.score += 1;
        self.speed = self.decayed_speed();
        match food::place(&mut self.rng, grid, &self.snake) {
            Some(position) => self.food = Some(position),
            None => {
                // Every cell is snake: nothing left to eat, the run ends.
                self.food = None;
                self.status = GameStatus::GameOver;
            }
        }

        StepOutcome::AteFood
    }

    fn decayed_speed(&self) -> Duration {
        let scaled_ms = (self.speed.as_millis() as f64 * self.config.speed_decay).floor() as u64;
        Duration::from_millis(scaled_ms).max(self.config.min_step_interval)
    }

    fn commit_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}
