use std::ops::Add;

/// A cell on the grid. Signed so a head that left the board can still be represented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step on the grid. Y grows downwards.
    pub fn offset(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

/// Screen size and tile size the grid is cut from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub tile_size: u32,
}

impl GridConfig {
    /// 320x240 at tile 5, i.e. 64x48 cells.
    pub const CLASSIC: GridConfig = GridConfig { screen_width: 320, screen_height: 240, tile_size: 5 };

    /// 160x120 at tile 3, i.e. 53x40 cells.
    pub const COMPACT: GridConfig = GridConfig { screen_width: 160, screen_height: 120, tile_size: 3 };

    pub fn validate(&self) -> Result<(), String> {
        if self.tile_size == 0 {
            return Err("Tile size must be at least 1".to_string());
        }
        if self.screen_width < self.tile_size || self.screen_height < self.tile_size {
            return Err(format!(
                "A {}x{} screen holds no {}-unit tile",
                self.screen_width, self.screen_height, self.tile_size
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(
            (self.screen_width / self.tile_size) as i32,
            (self.screen_height / self.tile_size) as i32,
        )
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig::COMPACT
    }
}

/// The playing field, in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: i32,
    rows: i32,
}

impl Grid {
    pub fn new(columns: i32, rows: i32) -> Self {
        debug_assert!(columns > 0 && rows > 0, "grid must hold at least one cell");
        Grid { columns, rows }
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn center(&self) -> Point {
        Point::new(self.columns / 2, self.rows / 2)
    }

    pub fn contains(&self, p: Point) -> bool {
        (0..self.columns).contains(&p.x) && (0..self.rows).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_known_cell_counts() {
        assert_eq!(GridConfig::CLASSIC.grid(), Grid::new(64, 48));
        assert_eq!(GridConfig::COMPACT.grid(), Grid::new(53, 40));
    }

    #[test]
    fn validate_rejects_zero_tile() {
        let config = GridConfig { tile_size: 0, ..GridConfig::CLASSIC };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_tile_larger_than_screen() {
        let config = GridConfig { screen_width: 4, screen_height: 4, tile_size: 5 };
        assert!(config.validate().is_err());
        assert!(GridConfig::COMPACT.validate().is_ok());
    }

    #[test]
    fn contains_is_half_open() {
        let grid = Grid::new(10, 8);
        assert!(grid.contains(Point::new(0, 0)));
        assert!(grid.contains(Point::new(9, 7)));
        assert!(!grid.contains(Point::new(-1, 3)));
        assert!(!grid.contains(Point::new(10, 3)));
        assert!(!grid.contains(Point::new(3, -1)));
        assert!(!grid.contains(Point::new(3, 8)));
    }

    #[test]
    fn opposite_directions_share_an_axis() {
        assert_eq!(Direction::Left.axis(), Direction::Right.axis());
        assert_eq!(Direction::Up.axis(), Direction::Down.axis());
        assert_ne!(Direction::Up.axis(), Direction::Left.axis());
        assert_eq!(Point::new(5, 5) + Direction::Up.offset(), Point::new(5, 4));
    }
}
