//! Translation from raw input events to game commands.

use crate::types::{Direction, InputEvent, Key};

/// What a single input event asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Space: start over from the game-over screen
    PlayAgain,
    /// Escape: quit (deferred by one tick while playing)
    Escape,
    /// Window close / interrupt
    Quit,
}

/// Map an input event to a command. Unbound keys yield `None`.
pub fn translate(event: InputEvent) -> Option<Command> {
    let key = match event {
        InputEvent::Quit => return Some(Command::Quit),
        InputEvent::KeyDown(key) => key,
    };

    match key {
        Key::Up | Key::Char('w') | Key::Char('W') => Some(Command::Turn(Direction::Up)),
        Key::Down | Key::Char('s') | Key::Char('S') => Some(Command::Turn(Direction::Down)),
        Key::Left | Key::Char('a') | Key::Char('A') => Some(Command::Turn(Direction::Left)),
        Key::Right | Key::Char('d') | Key::Char('D') => Some(Command::Turn(Direction::Right)),
        Key::Space | Key::Char(' ') => Some(Command::PlayAgain),
        Key::Escape => Some(Command::Escape),
        _ => None,
    }
}
