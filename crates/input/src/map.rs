//! Key mapping from terminal events to game input events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{InputEvent, Key};

/// Map a terminal event to a game input event.
///
/// Only key presses are forwarded; releases, auto-repeats and mouse events
/// are dropped. Resizes are picked up by the queue before mapping.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key_event(key),
        _ => None,
    }
}

/// Map keyboard input to a game input event.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    let mapped = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(InputEvent::KeyDown(mapped))
}

/// Ctrl+C plays the role of closing the window.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
