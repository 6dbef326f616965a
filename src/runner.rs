use std::{thread::sleep, time::{Duration, Instant}};

use crate::{Coords, TermInt};
use crate::term::TermManager;
use grid_snake::{Direction::{self, *}, Game, Grid, Input, Point, Tick};

use crossterm::Result;
use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use log::{debug, info};

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: TermInt = 2;

const SNAKE_BODY_CHAR: char = '█';
const APPLE_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

enum Flow {
    Continue,
    Quit,
}

pub struct Runner {
    game: Game,
    frame: Duration,
    paused: bool,
    term: TermManager,
    origin: Coords,
    board_size: Coords,
    pending_turn: Option<Direction>,
}

impl Runner {
    pub fn new(grid: Grid, seed: Option<u64>, frame: Duration) -> Result<Self> {
        let seed = seed.unwrap_or_else(rand::random);
        info!("Food seed {}, {:?} per frame", seed, frame);

        let term = TermManager::new()?;
        let board_size = (
            to_term(grid.columns() as u32 * CELL_WIDTH as u32 + 2),
            to_term(grid.rows() as u32 + 2),
        );
        // One extra row for the score line
        term.ensure_fits((board_size.0, board_size.1.saturating_add(1)))?;

        let (w, h) = term.get_terminal_size();
        let origin = ((w - board_size.0) / 2, (h - board_size.1 - 1) / 2);

        Ok(Runner {
            game: Game::seeded(grid, seed),
            frame,
            paused: false,
            term,
            origin,
            board_size,
            pending_turn: None,
        })
    }

    /// Plays until the user quits. The terminal is restored on every way out.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let played = self.play();
        let restored = self.term.restore();
        played.and(restored)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<()> {
        self.term.clear()?;
        self.term.draw_borders(self.origin, self.board_size)?;
        self.render()?;

        if let Flow::Quit = self.show_intro()? {
            return Ok(());
        }

        loop {
            let started = Instant::now();

            let mut restart = false;
            for key_ev in self.term.read_key_events_queue()? {
                match key_ev {
                    ev if is_quit(&ev) => return Ok(()),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => self.pending_turn = Some(Up),
                        KeyCode::Char('a') | KeyCode::Left => self.pending_turn = Some(Left),
                        KeyCode::Char('s') | KeyCode::Down => self.pending_turn = Some(Down),
                        KeyCode::Char('d') | KeyCode::Right => self.pending_turn = Some(Right),
                        KeyCode::Char('r') | KeyCode::Char('R') => restart = true,
                        KeyCode::Esc => self.toggle_pause()?,
                        _ => {}
                    },
                }
            }

            if !self.paused {
                let tick = self.game.update(Input { direction: self.pending_turn, restart });
                if tick.is_move() {
                    // The game read the turn on this step
                    self.pending_turn = None;
                }
                self.on_tick(tick)?;
            }

            sleep(self.frame.saturating_sub(started.elapsed()));
        }
    }

    fn show_intro(&mut self) -> Result<Flow> {
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin",
        ])?;

        if is_quit(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }

        self.term.hide_message()?;
        Ok(Flow::Continue)
    }

    fn on_tick(&mut self, tick: Tick) -> Result<()> {
        match tick {
            Tick::Waiting | Tick::Halted => Ok(()),
            Tick::Moved | Tick::Ate => self.render(),
            Tick::Crashed(_) => {
                self.render()?;
                self.show_game_over()
            }
            Tick::Restarted => {
                self.pending_turn = None;
                self.term.hide_message()?;
                self.render()
            }
        }
    }

    fn show_game_over(&mut self) -> Result<()> {
        self.term.show_message(&[
            "Game over!",
            &*format!("Score: {}", self.game.score()),
            "",
            "Press R to play again,",
            "or Q to quit.",
        ])
    }

    /// Redraws every cell; the terminal buffer only emits the ones that changed.
    fn render(&mut self) -> Result<()> {
        let grid = self.game.grid();
        let columns = grid.columns() as usize;
        let mut cells = vec![' '; columns * grid.rows() as usize];
        let cell_index = |p: Point| p.y as usize * columns + p.x as usize;

        cells[cell_index(self.game.food().position())] = APPLE_CHAR;

        let snake = self.game.snake();
        let (body_char, head_char) = if self.game.is_over() {
            (DEAD_SNAKE_CHAR, DEAD_SNAKE_CHAR)
        } else {
            (SNAKE_BODY_CHAR, head_char(snake.direction()))
        };

        for (i, &pos) in snake.body().enumerate() {
            if grid.contains(pos) {
                cells[cell_index(pos)] = if i == 0 { head_char } else { body_char };
            }
        }

        for (i, &ch) in cells.iter().enumerate() {
            let (x, y) = ((i % columns) as TermInt, (i / columns) as TermInt);
            let screen_x = self.origin.0 + 1 + x * CELL_WIDTH;
            let screen_y = self.origin.1 + 1 + y;
            for dx in 0..CELL_WIDTH {
                self.term.print_at((screen_x + dx, screen_y), ch)?;
            }
        }

        let status = format!("Score: {:<8}", self.game.score());
        self.term.print_str_at((self.origin.0, self.origin.1 + self.board_size.1), &status)?;
        self.term.flush()
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if self.game.is_over() {
            return Ok(());
        }

        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Q to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        debug!("Paused: {}", self.paused);
        Ok(())
    }
}

fn head_char(direction: Direction) -> char {
    match direction {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
    }
}

fn to_term(n: u32) -> TermInt {
    n.min(TermInt::MAX as u32) as TermInt
}

fn is_quit(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }
            | KeyEvent { code: KeyCode::Char('q'), .. }
    )
}
