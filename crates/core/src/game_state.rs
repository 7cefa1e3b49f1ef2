//! Game state module - snake, food and score for one round
//!
//! The per-step rules are exposed individually so the engine can run them in
//! its fixed order, and bundled in [`GameState::step`] for callers that only
//! need the outcome.

use crate::food::{FoodSpawner, FoodState};
use crate::snake::SnakeState;
use crate::types::{Direction, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// What happened during one [`GameState::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub turned: bool,
    pub ate_food: bool,
    pub wrapped: bool,
    pub self_collision: bool,
}

/// Complete state of a round
#[derive(Debug, Clone)]
pub struct GameState {
    snake: SnakeState,
    food: FoodState,
    score: u32,
    width: i32,
    height: i32,
    spawner: FoodSpawner,
}

impl GameState {
    /// New round on the standard 720x480 board with entropy-seeded food.
    pub fn new() -> Self {
        Self::with_spawner(FoodSpawner::from_entropy(BOARD_WIDTH, BOARD_HEIGHT))
    }

    /// New round whose food sequence is fixed by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_spawner(FoodSpawner::seeded(seed, BOARD_WIDTH, BOARD_HEIGHT))
    }

    pub fn with_spawner(mut spawner: FoodSpawner) -> Self {
        let food = spawner.spawn();
        Self {
            snake: SnakeState::new(),
            food,
            score: 0,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawner,
        }
    }

    /// Back to the starting snake, zero score and a freshly placed food.
    pub fn reset(&mut self) {
        self.snake = SnakeState::new();
        self.food = self.spawner.spawn();
        self.score = 0;
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    /// Direct access for tests and scripted setups.
    pub fn snake_mut(&mut self) -> &mut SnakeState {
        &mut self.snake
    }

    pub fn food(&self) -> FoodState {
        self.food
    }

    /// Place the food at `position` (marked as spawned).
    pub fn place_food(&mut self, position: Point) {
        self.food = FoodState::at(position);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    pub fn resolve_direction(&mut self) -> bool {
        self.snake.resolve_direction()
    }

    /// Move one cell. Landing on the food scores a point, marks the food as
    /// eaten and keeps the tail for this step.
    ///
    /// Returns `true` if food was eaten.
    pub fn advance_snake(&mut self) -> bool {
        let ate = self.snake.next_head() == self.food.position;
        self.snake.advance(ate);
        if ate {
            self.score += 1;
            self.food.spawned = false;
        }
        ate
    }

    /// Place new food if the last one was eaten. Food always ends up spawned.
    ///
    /// Returns `true` if a new position was chosen.
    pub fn respawn_food(&mut self) -> bool {
        let moved = !self.food.spawned;
        if moved {
            self.food.position = self.spawner.next_position();
        }
        self.food.spawned = true;
        moved
    }

    pub fn wrap_bounds(&mut self) -> bool {
        self.snake.wrap(self.width, self.height)
    }

    pub fn detect_self_collision(&self) -> bool {
        self.snake.head_hits_body()
    }

    /// Run one full simulation step in order: resolve, advance, respawn,
    /// wrap, collide.
    pub fn step(&mut self) -> StepOutcome {
        let turned = self.resolve_direction();
        let ate_food = self.advance_snake();
        self.respawn_food();
        let wrapped = self.wrap_bounds();
        let self_collision = self.detect_self_collision();
        StepOutcome {
            turned,
            ate_food,
            wrapped,
            self_collision,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(state: &GameState) -> Vec<(i32, i32)> {
        state.snake().body().iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_new_round() {
        let state = GameState::seeded(1);
        assert_eq!(state.score(), 0);
        assert_eq!(body(&state), vec![(100, 50), (90, 50), (80, 50)]);
        assert!(state.food().spawned);
        assert!(state.food().position.is_grid_aligned());
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut state = GameState::seeded(1);
        state.place_food(Point::new(110, 50));

        assert!(state.advance_snake());
        assert_eq!(state.snake().head(), Point::new(110, 50));
        assert_eq!(body(&state), vec![(110, 50), (100, 50), (90, 50), (80, 50)]);
        assert_eq!(state.score(), 1);
        assert!(!state.food().spawned);
    }

    #[test]
    fn test_respawn_after_eating() {
        let mut state = GameState::seeded(1);
        state.place_food(Point::new(110, 50));
        state.advance_snake();

        assert!(state.respawn_food());
        assert!(state.food().spawned);
        assert!(state.food().position.is_grid_aligned());
    }

    #[test]
    fn test_respawn_is_noop_while_food_present() {
        let mut state = GameState::seeded(1);
        state.place_food(Point::new(400, 400));
        assert!(!state.respawn_food());
        assert_eq!(state.food().position, Point::new(400, 400));
        assert!(state.food().spawned);
    }

    #[test]
    fn test_missing_food_keeps_length() {
        let mut state = GameState::seeded(1);
        state.place_food(Point::new(400, 400));
        for _ in 0..10 {
            let before = state.snake().len();
            let score = state.score();
            state.step();
            assert_eq!(state.snake().len(), before);
            assert_eq!(state.score(), score);
        }
    }

    #[test]
    fn test_step_wraps_left_edge() {
        let mut state = GameState::seeded(1);
        state.place_food(Point::new(400, 400));
        *state.snake_mut() = SnakeState::with_body(Point::new(0, 50), Direction::Left, 3);

        let outcome = state.step();
        assert!(outcome.wrapped);
        assert_eq!(state.snake().head(), Point::new(710, 50));
        assert_eq!(state.snake().body()[0], Point::new(710, 50));
    }

    #[test]
    fn test_food_is_checked_before_wrapping() {
        let mut state = GameState::seeded(1);
        state.place_food(Point::new(710, 50));
        *state.snake_mut() = SnakeState::with_body(Point::new(0, 50), Direction::Left, 3);

        let outcome = state.step();
        assert!(outcome.wrapped);
        assert!(!outcome.ate_food);
        assert_eq!(state.score(), 0);
        assert_eq!(state.snake().len(), 3);
        assert_eq!(state.snake().head(), Point::new(710, 50));
        assert_eq!(state.food().position, Point::new(710, 50));
    }

    #[test]
    fn test_step_reports_turn_once() {
        let mut state = GameState::seeded(1);
        state.place_food(Point::new(400, 400));
        state.request_direction(Direction::Up);

        assert!(state.step().turned);
        assert!(!state.step().turned);
        assert_eq!(state.snake().direction(), Direction::Up);
    }

    #[test]
    fn test_step_reports_self_collision() {
        let mut state = GameState::seeded(1);
        state.place_food(Point::new(400, 400));
        // Hook shape: moving Down from (100,100) enters (100,110), which is part of the body.
        *state.snake_mut() = SnakeState::from_segments(
            [
                Point::new(100, 100),
                Point::new(110, 100),
                Point::new(110, 110),
                Point::new(100, 110),
                Point::new(90, 110),
            ],
            Direction::Down,
        )
        .unwrap();

        let outcome = state.step();
        assert!(outcome.self_collision);
        assert_eq!(state.snake().head(), Point::new(100, 110));
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = GameState::seeded(5);
        state.place_food(Point::new(110, 50));
        state.step();
        state.place_food(Point::new(400, 400));
        state.request_direction(Direction::Down);
        state.step();
        assert_eq!(state.score(), 1);

        state.reset();
        assert_eq!(state.score(), 0);
        assert_eq!(body(&state), vec![(100, 50), (90, 50), (80, 50)]);
        assert_eq!(state.snake().direction(), Direction::Right);
        assert_eq!(state.snake().pending_direction(), Direction::Right);
        assert!(state.food().spawned);
    }
}
