//! Snake module - body segments and heading
//!
//! The body is stored head-first. Each step prepends a new head; the tail is
//! popped unless the snake is growing this step.

use std::collections::VecDeque;

use crate::types::{Direction, Point, CELL_SIZE, SNAKE_START, SNAKE_START_LEN};

/// The player's snake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    head: Point,
    /// Segments ordered head to tail; `body[0] == head` after every step.
    body: VecDeque<Point>,
    direction: Direction,
    /// Latest requested heading, applied by [`SnakeState::resolve_direction`].
    pending_direction: Direction,
}

impl SnakeState {
    /// Snake at the standard start: head at (100, 50) facing right, three
    /// segments trailing towards -x.
    pub fn new() -> Self {
        Self::with_body(SNAKE_START, Direction::Right, SNAKE_START_LEN)
    }

    /// Straight snake of `len` segments with its tail trailing behind `head`.
    pub fn with_body(head: Point, direction: Direction, len: usize) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(len.max(1) + 16);
        body.push_back(head);
        for i in 1..len {
            body.push_back(body[i - 1].step(back));
        }
        Self {
            head,
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Point>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        let head = *body.front()?;
        Some(Self {
            head,
            body,
            direction,
            pending_direction: direction,
        })
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Record a requested heading. Later requests overwrite earlier ones.
    pub fn request_direction(&mut self, direction: Direction) {
        self.pending_direction = direction;
    }

    /// Apply the pending heading unless it would reverse the snake.
    ///
    /// Returns `true` if the heading changed.
    pub fn resolve_direction(&mut self) -> bool {
        if self.pending_direction == self.direction.opposite() {
            return false;
        }
        let changed = self.pending_direction != self.direction;
        self.direction = self.pending_direction;
        changed
    }

    /// Move the head one cell and prepend it. The tail is dropped unless
    /// `grow` is set.
    pub fn advance(&mut self, grow: bool) {
        self.head = self.head.step(self.direction);
        self.body.push_front(self.head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Cell the head would enter on the next [`SnakeState::advance`].
    pub fn next_head(&self) -> Point {
        self.head.step(self.direction)
    }

    /// Wrap the head across the board edges (torus).
    ///
    /// Returns `true` if the head was moved.
    pub fn wrap(&mut self, width: i32, height: i32) -> bool {
        let wrapped = wrap_point(self.head, width, height);
        if wrapped == self.head {
            return false;
        }
        self.head = wrapped;
        if let Some(front) = self.body.front_mut() {
            *front = wrapped;
        }
        true
    }

    /// Whether the head sits on any segment behind it.
    pub fn head_hits_body(&self) -> bool {
        self.body.iter().skip(1).any(|&p| p == self.head)
    }
}

impl Default for SnakeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a position that stepped off the board onto the opposite edge.
///
/// Positions already on the board are returned unchanged.
///
/// # Examples
///
/// ```
/// use snake_eater_core::snake::wrap_point;
/// use snake_eater_core::types::Point;
///
/// assert_eq!(wrap_point(Point::new(-10, 50), 720, 480), Point::new(710, 50));
/// assert_eq!(wrap_point(Point::new(720, 50), 720, 480), Point::new(0, 50));
/// assert_eq!(wrap_point(Point::new(40, -10), 720, 480), Point::new(40, 470));
/// assert_eq!(wrap_point(Point::new(40, 480), 720, 480), Point::new(40, 0));
/// ```
pub fn wrap_point(p: Point, width: i32, height: i32) -> Point {
    let mut out = p;
    if out.x < 0 {
        out.x = width - CELL_SIZE;
    } else if out.x > width - CELL_SIZE {
        out.x = 0;
    }
    if out.y < 0 {
        out.y = height - CELL_SIZE;
    } else if out.y > height - CELL_SIZE {
        out.y = 0;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    #[test]
    fn test_initial_snake() {
        let snake = SnakeState::new();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(100, 50));
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Point::new(100, 50), Point::new(90, 50), Point::new(80, 50)]
        );
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_resolve_accepts_perpendicular_turn() {
        let mut snake = SnakeState::new();
        snake.request_direction(Direction::Up);
        assert!(snake.resolve_direction());
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_resolve_blocks_reversal() {
        for d in Direction::ALL {
            let mut snake = SnakeState::with_body(Point::new(300, 200), d, 3);
            snake.request_direction(d.opposite());
            assert!(!snake.resolve_direction());
            assert_eq!(snake.direction(), d);
        }
    }

    #[test]
    fn test_resolve_without_input_keeps_heading() {
        let mut snake = SnakeState::new();
        assert!(!snake.resolve_direction());
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = SnakeState::new();
        snake.advance(false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(110, 50));
        assert_eq!(snake.body().back(), Some(&Point::new(90, 50)));
    }

    #[test]
    fn test_advance_with_growth() {
        let mut snake = SnakeState::new();
        snake.advance(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body().back(), Some(&Point::new(80, 50)));
    }

    #[test]
    fn test_wrap_each_edge() {
        let w = BOARD_WIDTH;
        let h = BOARD_HEIGHT;
        assert_eq!(wrap_point(Point::new(-10, 50), w, h), Point::new(710, 50));
        assert_eq!(wrap_point(Point::new(720, 50), w, h), Point::new(0, 50));
        assert_eq!(wrap_point(Point::new(50, -10), w, h), Point::new(50, 470));
        assert_eq!(wrap_point(Point::new(50, 480), w, h), Point::new(50, 0));
        assert_eq!(wrap_point(Point::new(710, 470), w, h), Point::new(710, 470));
    }

    #[test]
    fn test_wrap_updates_first_segment() {
        let mut snake = SnakeState::with_body(Point::new(0, 50), Direction::Left, 3);
        snake.advance(false);
        assert_eq!(snake.head(), Point::new(-10, 50));
        assert!(snake.wrap(BOARD_WIDTH, BOARD_HEIGHT));
        assert_eq!(snake.head(), Point::new(710, 50));
        assert_eq!(snake.body()[0], snake.head());
    }

    #[test]
    fn test_head_hits_body() {
        let snake = SnakeState::from_segments(
            [
                Point::new(100, 100),
                Point::new(110, 100),
                Point::new(110, 110),
                Point::new(100, 110),
                Point::new(100, 100),
            ],
            Direction::Up,
        )
        .unwrap();
        assert!(snake.head_hits_body());
        assert!(!SnakeState::new().head_hits_body());
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(SnakeState::from_segments([], Direction::Right).is_none());
    }
}
