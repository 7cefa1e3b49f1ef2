//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the rules (`core`), the tick driver (`engine`) and any drawing
//! backend that implements [`Surface`].
//!
//! # Board Geometry
//!
//! The board is measured in logical units, not cells:
//!
//! - **Width**: 720 units (72 cells)
//! - **Height**: 480 units (48 cells)
//! - **Cell**: 10×10 units; every game coordinate is a multiple of 10
//! - **Snake start**: head at (100, 50), tail extending towards -x
//!
//! # Difficulty
//!
//! Difficulty is the tick rate in ticks per second:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIFFICULTY` | 1 | Slowest allowed tick rate |
//! | `MAX_DIFFICULTY` | 120 | Fastest allowed tick rate |
//!
//! # Examples
//!
//! ```
//! use snake_eater_types::{Direction, Point, CELL_SIZE};
//!
//! let head = Point::new(100, 50);
//! assert_eq!(head.step(Direction::Right), Point::new(110, 50));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(CELL_SIZE, 10);
//! ```

pub mod surface;

pub use surface::{Anchor, FrameClock, Rect, Surface, TextSurface};

/// Board width in logical units (72 cells)
pub const BOARD_WIDTH: i32 = 720;

/// Board height in logical units (48 cells)
pub const BOARD_HEIGHT: i32 = 480;

/// Side length of one grid cell in logical units
pub const CELL_SIZE: i32 = 10;

/// Slowest tick rate accepted at the difficulty prompt
pub const MIN_DIFFICULTY: u32 = 1;

/// Fastest tick rate accepted at the difficulty prompt
pub const MAX_DIFFICULTY: u32 = 120;

/// Head position of a freshly spawned snake
pub const SNAKE_START: Point = Point::new(100, 50);

/// Number of segments in a freshly spawned snake
pub const SNAKE_START_LEN: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_a_whole_number_of_cells() {
        assert_eq!(BOARD_WIDTH % CELL_SIZE, 0);
        assert_eq!(BOARD_HEIGHT % CELL_SIZE, 0);
        assert_eq!(BOARD_WIDTH / CELL_SIZE, 72);
        assert_eq!(BOARD_HEIGHT / CELL_SIZE, 48);
    }

    #[test]
    fn opposite_table_is_symmetric() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }
}

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that would reverse the snake onto itself
    ///
    /// # Examples
    ///
    /// ```
    /// use snake_eater_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// One-cell displacement in logical units (screen y grows downward)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -CELL_SIZE),
            Direction::Down => (0, CELL_SIZE),
            Direction::Left => (-CELL_SIZE, 0),
            Direction::Right => (CELL_SIZE, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A position on the board in logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_grid_aligned(&self) -> bool {
        self.x % CELL_SIZE == 0 && self.y % CELL_SIZE == 0
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed game palette
pub mod palette {
    use super::Rgb;

    /// Background
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Food and in-game score
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Game-over title, quit prompt and final score
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    /// Snake body and play-again prompt
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
}

/// Logical font roles
///
/// - **Title**: the large "YOU DIED" banner
/// - **Prompt**: game-over instructions
/// - **Score**: in-game score overlay
/// - **FinalScore**: score shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Prompt,
    Score,
    FinalScore,
}

impl FontRole {
    /// Family name requested from the backend (cosmetic, may be substituted)
    pub fn family(&self) -> &'static str {
        match self {
            FontRole::Score => "consolas",
            FontRole::Title | FontRole::Prompt | FontRole::FinalScore => "times new roman",
        }
    }

    /// Requested point size. Backends may render at their own fixed glyph size
    /// and report the measured height in [`TextSurface`].
    pub fn size(&self) -> u16 {
        match self {
            FontRole::Title => 90,
            FontRole::Prompt => 30,
            FontRole::Score | FontRole::FinalScore => 20,
        }
    }
}

/// Keys the game reacts to
///
/// Backends translate their native key codes into this set; everything else
/// becomes [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// A printable character, case preserved
    Char(char),
    Space,
    Escape,
    Other,
}

/// An event taken from the backend's input queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / interrupt request
    Quit,
    KeyDown(Key),
}
