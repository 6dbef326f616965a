//! Grid Snake: the per-frame game state behind a classic Snake.
//!
//! The library holds no terminal code. A front-end calls [`Game::update`] once
//! per frame with the player's [`Input`] and draws whatever the accessors report.

pub mod food;
pub mod game;
pub mod grid;
pub mod snake;

pub use food::Food;
pub use game::{Collision, Game, Input, Tick};
pub use grid::{Axis, Direction, Grid, GridConfig, Point};
pub use snake::Snake;
