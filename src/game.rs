use std::cmp::max;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::food::Food;
use crate::grid::{Direction, Grid};
use crate::snake::Snake;

/// Frames per move at the start of a round.
pub const INITIAL_SPEED: u32 = 10;
/// Fastest the snake ever gets, in frames per move.
pub const MIN_SPEED: u32 = 2;
/// Speed shown once the round is lost. Has no effect on play.
pub const GAME_OVER_SPEED: u32 = 10;

/// What the player asked for during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub direction: Option<Direction>,
    /// Edge-triggered, only looked at after a game over.
    pub restart: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Outcome of one call to [`Game::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The frame counter has not reached the speed yet; nothing moved.
    Waiting,
    Moved,
    Ate,
    Crashed(Collision),
    /// Game over, waiting for a restart.
    Halted,
    Restarted,
}

impl Tick {
    /// Whether the snake took a step this frame.
    pub fn is_move(self) -> bool {
        matches!(self, Tick::Moved | Tick::Ate | Tick::Crashed(_))
    }
}

pub struct Game<R = StdRng> {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    game_over: bool,
    speed: u32,
    update_counter: u32,
    moves: u64,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(grid: Grid) -> Self {
        Game::with_rng(grid, StdRng::from_entropy())
    }

    pub fn seeded(grid: Grid, seed: u64) -> Self {
        Game::with_rng(grid, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(grid: Grid, mut rng: R) -> Self {
        let snake = Snake::new(grid.center(), Direction::Right);
        let food = Food::spawn(grid, &mut rng);

        Game {
            grid,
            snake,
            food,
            score: 0,
            game_over: false,
            speed: INITIAL_SPEED,
            update_counter: 0,
            moves: 0,
            rng,
        }
    }

    /// Advances the game by one frame. The snake only moves every `speed` frames.
    pub fn update(&mut self, input: Input) -> Tick {
        if self.game_over {
            if input.restart {
                self.restart();
                return Tick::Restarted;
            }
            return Tick::Halted;
        }

        self.update_counter += 1;
        if self.update_counter < self.speed {
            return Tick::Waiting;
        }
        self.update_counter = 0;
        self.moves += 1;

        self.snake.move_step();

        // Steering applies to the next step, not the one just taken
        if let Some(dir) = input.direction {
            self.steer(dir);
        }

        // Collisions go first: crashing onto the food tile scores nothing
        if let Some(collision) = self.collision() {
            self.game_over = true;
            self.speed = GAME_OVER_SPEED;
            info!("Crashed ({:?}) after {} moves with score {}", collision, self.moves, self.score);
            return Tick::Crashed(collision);
        }

        if self.snake.head() == self.food.position() {
            self.eat();
            return Tick::Ate;
        }

        Tick::Moved
    }

    pub fn restart(&mut self) {
        self.snake = Snake::new(self.grid.center(), Direction::Right);
        self.food = Food::spawn(self.grid, &mut self.rng);
        self.score = 0;
        self.game_over = false;
        self.speed = INITIAL_SPEED;
        self.update_counter = 0;
        self.moves = 0;
        info!("Restarted, food at ({}, {})", self.food.position().x, self.food.position().y);
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Turns are only allowed onto the other axis, which also rules out reversing.
    fn steer(&mut self, dir: Direction) -> bool {
        if dir.axis() == self.snake.direction().axis() {
            return false;
        }
        self.snake.set_direction(dir);
        true
    }

    fn collision(&self) -> Option<Collision> {
        if !self.grid.contains(self.snake.head()) {
            Some(Collision::Wall)
        } else if self.snake.bites_itself() {
            Some(Collision::SelfBite)
        } else {
            None
        }
    }

    fn eat(&mut self) {
        self.score += 1;
        self.snake.grow();
        self.food = Food::spawn(self.grid, &mut self.rng);
        self.speed = max(self.speed.saturating_sub(1), MIN_SPEED);

        let next = self.food.position();
        debug!("Score {}, speed {}, next food at ({}, {})", self.score, self.speed, next.x, next.y);
    }
}
