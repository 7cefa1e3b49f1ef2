//! Per-tick input queue fed from the terminal.
//!
//! All events available at the start of a drain are taken in one snapshot;
//! anything arriving while the game processes them waits for the next tick.
//! Resize events are not game input; they only raise a flag the renderer
//! checks before presenting.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::map_event;
use crate::types::InputEvent;

/// Events taken per snapshot. Anything beyond stays unread in the terminal
/// and is picked up by the next tick's snapshot.
pub const MAX_EVENTS_PER_TICK: usize = 64;

/// FIFO of game input events, stack-only.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: ArrayVec<InputEvent, MAX_EVENTS_PER_TICK>,
    next: usize,
    /// A snapshot was already taken this frame.
    snapshotted: bool,
    resized: bool,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Returns `false` if the queue is full.
    pub fn push(&mut self, event: InputEvent) -> bool {
        self.pending.try_push(event).is_ok()
    }

    /// Take the oldest event.
    pub fn pop(&mut self) -> Option<InputEvent> {
        let event = self.pending.get(self.next).copied();
        match event {
            Some(_) => self.next += 1,
            None => self.clear(),
        }
        event
    }

    pub fn len(&self) -> usize {
        self.pending.len() - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.next = 0;
    }

    /// Pull events from `source` until it runs dry or the queue is full.
    ///
    /// Returns the number of game events queued.
    pub fn fill_from<F>(&mut self, mut source: F) -> io::Result<usize>
    where
        F: FnMut() -> io::Result<Option<Event>>,
    {
        if self.is_empty() {
            self.clear();
        }
        let mut added = 0;
        while !self.pending.is_full() {
            let Some(raw) = source()? else {
                break;
            };
            if let Event::Resize(..) = raw {
                self.resized = true;
                continue;
            }
            if let Some(ev) = map_event(raw) {
                self.pending.push(ev);
                added += 1;
            }
        }
        Ok(added)
    }

    /// Next event of the current frame, snapshotting `source` on first use.
    pub fn poll_frame<F>(&mut self, source: F) -> io::Result<Option<InputEvent>>
    where
        F: FnMut() -> io::Result<Option<Event>>,
    {
        if !self.snapshotted {
            self.fill_from(source)?;
            self.snapshotted = true;
        }
        Ok(self.pop())
    }

    /// Allow the next [`EventQueue::poll_frame`] to read the terminal again.
    pub fn end_frame(&mut self) {
        self.snapshotted = false;
    }

    /// Whether the terminal was resized since the last call.
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }
}

/// One ready terminal event, or `None` if reading would block.
pub fn read_ready() -> io::Result<Option<Event>> {
    if event::poll(Duration::ZERO)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Key;
    use crossterm::event::{KeyCode, KeyEvent};

    /// Source that yields `events` in order, then reports nothing ready.
    fn scripted(events: Vec<Event>) -> impl FnMut() -> io::Result<Option<Event>> {
        let mut events = events.into_iter();
        move || Ok(events.next())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_fifo_order() {
        let mut q = EventQueue::new();
        q.push(InputEvent::KeyDown(Key::Up));
        q.push(InputEvent::KeyDown(Key::Left));
        q.push(InputEvent::Quit);

        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(InputEvent::KeyDown(Key::Up)));
        assert_eq!(q.pop(), Some(InputEvent::KeyDown(Key::Left)));
        assert_eq!(q.pop(), Some(InputEvent::Quit));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn test_full_queue_rejects() {
        let mut q = EventQueue::new();
        for _ in 0..MAX_EVENTS_PER_TICK {
            assert!(q.push(InputEvent::KeyDown(Key::Space)));
        }
        assert!(!q.push(InputEvent::Quit));
        assert_eq!(q.len(), MAX_EVENTS_PER_TICK);
    }

    #[test]
    fn test_reuse_after_drain() {
        let mut q = EventQueue::new();
        q.push(InputEvent::Quit);
        assert_eq!(q.pop(), Some(InputEvent::Quit));
        assert_eq!(q.pop(), None);
        q.push(InputEvent::KeyDown(Key::Down));
        assert_eq!(q.pop(), Some(InputEvent::KeyDown(Key::Down)));
    }

    #[test]
    fn test_resize_sets_flag_without_queuing() {
        let mut q = EventQueue::new();
        let added = q
            .fill_from(scripted(vec![key(KeyCode::Up), Event::Resize(100, 40)]))
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(q.pop(), Some(InputEvent::KeyDown(Key::Up)));
        assert_eq!(q.pop(), None);
        assert!(q.take_resized());
        assert!(!q.take_resized());
    }

    #[test]
    fn test_snapshot_is_taken_once_per_frame() {
        let mut q = EventQueue::new();
        // Every other read finds nothing ready.
        let reads = std::cell::Cell::new(0);
        let mut source = || -> io::Result<Option<Event>> {
            reads.set(reads.get() + 1);
            Ok((reads.get() % 2 == 1).then(|| key(KeyCode::Left)))
        };

        assert_eq!(
            q.poll_frame(&mut source).unwrap(),
            Some(InputEvent::KeyDown(Key::Left))
        );
        assert_eq!(q.poll_frame(&mut source).unwrap(), None);
        assert_eq!(q.poll_frame(&mut source).unwrap(), None);
        assert_eq!(reads.get(), 2);

        q.end_frame();
        assert_eq!(
            q.poll_frame(&mut source).unwrap(),
            Some(InputEvent::KeyDown(Key::Left))
        );
        assert_eq!(reads.get(), 4);
    }

    #[test]
    fn test_overflow_waits_for_next_snapshot() {
        let mut q = EventQueue::new();
        let mut events: Vec<Event> = (0..MAX_EVENTS_PER_TICK).map(|_| key(KeyCode::Up)).collect();
        events.push(key(KeyCode::Down));
        let mut source = scripted(events);

        assert_eq!(q.fill_from(&mut source).unwrap(), MAX_EVENTS_PER_TICK);
        while q.pop().is_some() {}
        assert_eq!(q.fill_from(&mut source).unwrap(), 1);
        assert_eq!(q.pop(), Some(InputEvent::KeyDown(Key::Down)));
    }
}
