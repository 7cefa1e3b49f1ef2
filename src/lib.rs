//! Snake Eater (workspace facade crate).
//!
//! Re-exports the workspace crates as `snake_eater::{core,engine,input,term,types}`
//! and hosts the startup difficulty prompt used by the binary.

pub mod prompt;

pub use snake_eater_core as core;
pub use snake_eater_engine as engine;
pub use snake_eater_input as input;
pub use snake_eater_term as term;
pub use snake_eater_types as types;
