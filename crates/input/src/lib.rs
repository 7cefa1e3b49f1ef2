//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`] and buffers them
//! per tick without allocating. Deciding what a key *means* is left to the
//! engine.

pub mod map;
pub mod queue;

pub use snake_eater_types as types;

pub use map::{map_event, map_key_event, should_quit};
pub use queue::{read_ready, EventQueue, MAX_EVENTS_PER_TICK};
