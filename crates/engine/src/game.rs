//! GameEngine: owns the round and advances it once per tick.
//!
//! A tick is: drain input, update, draw, present, wait. The game-over screen
//! is just another [`RoundState`] driven by the same loop and the same frame
//! clock, so there is only one place where time is spent.

use tracing::{debug, info};

use crate::command::{translate, Command};
use crate::core::GameState;
use crate::difficulty::Difficulty;
use crate::scene;
use crate::types::{FrameClock, InputEvent, Surface};

/// Which screen the engine is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    Running,
    GameOver,
    /// Absorbing; the caller should release the surface and exit.
    Terminated,
}

impl RoundState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::Running => "running",
            RoundState::GameOver => "game_over",
            RoundState::Terminated => "terminated",
        }
    }
}

/// Single owner of all game state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    round: RoundState,
    difficulty: Difficulty,
    /// Escape pressed while running; honoured at the start of the next drain.
    quit_posted: bool,
    ticks: u64,
}

impl GameEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_state(GameState::new(), difficulty)
    }

    /// Engine with a deterministic food sequence.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_state(GameState::seeded(seed), difficulty)
    }

    fn from_state(state: GameState, difficulty: Difficulty) -> Self {
        info!(difficulty = difficulty.ticks_per_second(), "round started");
        Self {
            state,
            round: RoundState::Running,
            difficulty,
            quit_posted: false,
            ticks: 0,
        }
    }

    /// Start a new round. Difficulty is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.round = RoundState::Running;
        self.quit_posted = false;
        info!("round reset");
    }

    pub fn round(&self) -> RoundState {
        self.round
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// Ticks processed since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn quit_posted(&self) -> bool {
        self.quit_posted
    }

    /// Apply one input event to the current round.
    pub fn handle_input(&mut self, event: InputEvent) {
        let Some(command) = translate(event) else {
            return;
        };

        match (self.round, command) {
            (RoundState::Running, Command::Turn(direction)) => {
                self.state.request_direction(direction);
            }
            (RoundState::Running, Command::Escape) => {
                self.quit_posted = true;
            }
            (RoundState::Running, Command::Quit) => {
                self.terminate("quit");
            }
            (RoundState::GameOver, Command::PlayAgain) => {
                self.reset();
            }
            (RoundState::GameOver, Command::Escape) => {
                self.terminate("escape on game over");
            }
            // The game-over screen only listens to Space and Escape.
            _ => {}
        }
    }

    /// Advance by exactly one tick and block until its time budget is spent.
    ///
    /// Returns the round state after the tick. Once `Terminated`, further
    /// calls return immediately without drawing or waiting.
    pub fn tick<S, C>(&mut self, surface: &mut S, clock: &mut C) -> Result<RoundState, S::Error>
    where
        S: Surface,
        C: FrameClock,
    {
        if self.round == RoundState::Terminated {
            return Ok(self.round);
        }

        let round_before = self.round;
        self.drain_events(surface)?;

        match (round_before, self.round) {
            (_, RoundState::Terminated) => return Ok(self.round),
            (RoundState::Running, RoundState::Running) => {
                self.update();
                if self.round == RoundState::GameOver {
                    scene::draw_game_over(surface, self.state.score());
                } else {
                    scene::draw_playfield(surface, &self.state);
                    scene::draw_score(surface, self.state.score());
                }
            }
            (_, RoundState::Running) => {
                // Fresh round after "play again": show it before the first move.
                scene::draw_playfield(surface, &self.state);
                scene::draw_score(surface, self.state.score());
            }
            (_, RoundState::GameOver) => {
                scene::draw_game_over(surface, self.state.score());
            }
        }

        surface.present()?;
        clock.tick(self.difficulty.ticks_per_second());
        self.ticks += 1;
        Ok(self.round)
    }

    /// Tick until the round is terminated.
    pub fn run<S, C>(&mut self, surface: &mut S, clock: &mut C) -> Result<(), S::Error>
    where
        S: Surface,
        C: FrameClock,
    {
        while self.tick(surface, clock)? != RoundState::Terminated {}
        Ok(())
    }

    fn drain_events<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if self.quit_posted {
            self.quit_posted = false;
            // A quit posted in the tick that ended the round is swallowed by the
            // game-over screen, which does not listen for it.
            if self.round == RoundState::Running {
                self.terminate("escape");
                return Ok(());
            }
        }

        while let Some(event) = surface.poll_event()? {
            self.handle_input(event);
        }
        Ok(())
    }

    fn update(&mut self) {
        let outcome = self.state.step();
        if outcome.turned {
            debug!(direction = self.state.snake().direction().as_str(), "turned");
        }
        if outcome.ate_food {
            debug!(
                score = self.state.score(),
                len = self.state.snake().len(),
                food_x = self.state.food().position.x,
                food_y = self.state.food().position.y,
                "food eaten, respawned"
            );
        }
        if outcome.self_collision {
            self.round = RoundState::GameOver;
            info!(score = self.state.score(), ticks = self.ticks, "game over");
        }
    }

    fn terminate(&mut self, reason: &'static str) {
        info!(reason, from = self.round.as_str(), score = self.state.score(), "terminated");
        self.round = RoundState::Terminated;
    }
}
