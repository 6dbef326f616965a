use rand::Rng;

use crate::grid::{Grid, Point};

pub struct Food {
    position: Point,
}

impl Food {
    /// Drops food on any cell of the grid, the snake's cells included.
    pub fn spawn<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let position = Point::new(rng.gen_range(0..grid.columns()), rng.gen_range(0..grid.rows()));
        Food { position }
    }

    pub fn at(position: Point) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn spawn_stays_inside_grid() {
        let grid = Grid::new(7, 3);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            assert!(grid.contains(Food::spawn(grid, &mut rng).position()));
        }
    }

    #[test]
    fn spawn_reaches_every_cell() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..2000 {
            seen.insert(Food::spawn(grid, &mut rng).position());
        }

        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn single_cell_grid_always_yields_origin() {
        let grid = Grid::new(1, 1);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Food::spawn(grid, &mut rng).position(), Point::new(0, 0));
    }
}
