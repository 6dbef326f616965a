use std::collections::VecDeque;

use crate::grid::{Direction, Point};

pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    grow_counter: u32,
}

impl Snake {
    pub fn new(start: Point, direction: Direction) -> Self {
        Snake::with_body(vec![start], direction)
    }

    /// Builds a snake from explicit cells, head first.
    pub fn with_body(cells: Vec<Point>, direction: Direction) -> Self {
        assert!(!cells.is_empty(), "a snake needs at least its head");
        Snake { body: cells.into(), direction, grow_counter: 0 }
    }

    pub fn body(&self) -> impl Iterator<Item = &Point> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grow_counter(&self) -> u32 {
        self.grow_counter
    }

    /// Steps the head one cell along the current direction. Bounds are the caller's problem.
    pub fn move_step(&mut self) {
        let new_head = self.head() + self.direction.offset();
        self.body.push_front(new_head);

        if self.grow_counter > 0 {
            self.grow_counter -= 1;
        } else {
            self.body.pop_back();
        }
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        self.direction = new_direction;
    }

    pub fn grow(&mut self) {
        self.grow_counter += 1;
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&part| part == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction::*;

    #[test]
    fn move_keeps_length_without_pending_growth() {
        let mut snake = Snake::with_body(vec![Point::new(3, 3), Point::new(2, 3), Point::new(1, 3)], Right);
        snake.move_step();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(4, 3));
        assert_eq!(snake.body().last(), Some(&Point::new(2, 3)));
    }

    #[test]
    fn move_consumes_one_pending_segment() {
        let mut snake = Snake::new(Point::new(5, 5), Down);
        snake.grow();
        snake.grow();

        snake.move_step();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.grow_counter(), 1);

        snake.move_step();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.grow_counter(), 0);

        snake.move_step();
        assert_eq!(snake.len(), 3);
        let cells: Vec<Point> = snake.body().copied().collect();
        assert_eq!(cells, vec![Point::new(5, 8), Point::new(5, 7), Point::new(5, 6)]);
    }

    #[test]
    fn head_follows_direction_offset() {
        for dir in [Up, Down, Left, Right] {
            let mut snake = Snake::new(Point::new(0, 0), dir);
            let previous = snake.head();
            snake.move_step();
            assert_eq!(snake.head(), previous + dir.offset());
        }
    }

    #[test]
    fn head_may_leave_the_board() {
        let mut snake = Snake::new(Point::new(0, 5), Left);
        snake.move_step();
        assert_eq!(snake.head(), Point::new(-1, 5));
    }

    #[test]
    fn detects_self_bite() {
        let mut snake = Snake::with_body(
            vec![Point::new(5, 5), Point::new(5, 6), Point::new(4, 6), Point::new(4, 5), Point::new(3, 5)],
            Left,
        );
        assert!(!snake.bites_itself());

        snake.move_step();
        assert!(snake.bites_itself());
    }

    #[test]
    fn chasing_the_tail_is_not_a_bite() {
        let mut snake = Snake::with_body(
            vec![Point::new(5, 5), Point::new(5, 6), Point::new(4, 6), Point::new(4, 5)],
            Left,
        );
        snake.move_step();
        assert!(!snake.bites_itself());
    }
}
