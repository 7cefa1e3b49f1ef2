//! Tick-driven game engine.
//!
//! [`GameEngine`] owns a [`GameState`](snake_eater_core::GameState) and the
//! current [`RoundState`], translates input events into commands and, once per
//! tick, updates the round, draws it on a [`Surface`](snake_eater_types::Surface)
//! and waits on a [`FrameClock`](snake_eater_types::FrameClock).
//!
//! ```
//! use snake_eater_engine::{Difficulty, GameEngine, RoundState};
//! use snake_eater_engine::types::{InputEvent, Key};
//!
//! let mut engine = GameEngine::with_seed(Difficulty::new(15).unwrap(), 7);
//! engine.handle_input(InputEvent::KeyDown(Key::Down));
//! assert_eq!(engine.round(), RoundState::Running);
//! ```

pub mod command;
pub mod difficulty;
pub mod game;
pub mod scene;

pub use snake_eater_core as core;
pub use snake_eater_types as types;

pub use command::{translate, Command};
pub use difficulty::{parse_difficulty, Clamp, Difficulty, DifficultyError, DIFFICULTY_PROMPT};
pub use game::{GameEngine, RoundState};
