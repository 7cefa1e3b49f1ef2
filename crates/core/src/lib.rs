//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else. It performs no I/O
//! and knows nothing about timing or drawing, which makes it:
//!
//! - **Deterministic**: a seeded [`GameState`] replays the same food sequence
//! - **Testable**: every rule is a plain method on owned state
//! - **Portable**: drive it from a terminal, a window, or a benchmark
//!
//! # Module Structure
//!
//! - [`snake`]: body segments, heading, reversal guard and edge wrapping
//! - [`food`]: food pellet and its random placement
//! - [`game_state`]: one round (snake, food, score) and the per-step rules
//!
//! # Rules
//!
//! - The snake moves exactly one 10-unit cell per step
//! - A requested heading that would reverse the snake is ignored
//! - Landing on food scores one point and grows the snake by one segment
//! - Leaving the board re-enters from the opposite edge
//! - The round ends when the head lands on its own body
//!
//! # Example
//!
//! ```
//! use snake_eater_core::GameState;
//! use snake_eater_core::types::{Direction, Point};
//!
//! let mut game = GameState::seeded(12345);
//! game.place_food(Point::new(110, 50));
//!
//! let outcome = game.step();
//! assert!(outcome.ate_food);
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.snake().len(), 4);
//!
//! game.request_direction(Direction::Left); // reversal, ignored
//! game.step();
//! assert_eq!(game.snake().direction(), Direction::Right);
//! ```

pub mod food;
pub mod game_state;
pub mod snake;

pub use snake_eater_types as types;

pub use food::{FoodSpawner, FoodState};
pub use game_state::{GameState, StepOutcome};
pub use snake::{wrap_point, SnakeState};
