//! Difficulty (tick rate) parsing and clamping.
//!
//! Out-of-range values are not errors: they are clamped into
//! [`MIN_DIFFICULTY`, `MAX_DIFFICULTY`] and the caller is told so it can warn
//! the player. Only input that is not an integer at all is rejected.

use std::fmt;

use thiserror::Error;

use crate::types::{MAX_DIFFICULTY, MIN_DIFFICULTY};

/// Text shown when asking for the difficulty.
pub const DIFFICULTY_PROMPT: &str = "Enter DIFFICULTY (1-120): ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    #[error("no DIFFICULTY entered")]
    Empty,
    #[error("DIFFICULTY must be an integer, got {0:?}")]
    NotAnInteger(String),
}

/// Which bound a requested difficulty was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    TooHigh,
    TooLow,
}

impl Clamp {
    pub fn message(self) -> &'static str {
        match self {
            Clamp::TooHigh => "DIFFICULTY too high, setting to 120",
            Clamp::TooLow => "DIFFICULTY too low, setting to 1",
        }
    }
}

/// Ticks per second, always within [1, 120].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Difficulty(u32);

impl Difficulty {
    /// `None` if `ticks_per_second` is out of range.
    pub fn new(ticks_per_second: u32) -> Option<Self> {
        (MIN_DIFFICULTY..=MAX_DIFFICULTY)
            .contains(&ticks_per_second)
            .then_some(Self(ticks_per_second))
    }

    /// Clamp any integer into range, reporting which bound was hit.
    pub fn clamped(raw: i64) -> (Self, Option<Clamp>) {
        if raw > MAX_DIFFICULTY as i64 {
            (Self(MAX_DIFFICULTY), Some(Clamp::TooHigh))
        } else if raw < MIN_DIFFICULTY as i64 {
            (Self(MIN_DIFFICULTY), Some(Clamp::TooLow))
        } else {
            (Self(raw as u32), None)
        }
    }

    pub fn ticks_per_second(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse one line of prompt input.
///
/// Surrounding whitespace and a leading sign are accepted. Integers too large
/// for `i64` saturate before clamping.
///
/// # Examples
///
/// ```
/// use snake_eater_engine::difficulty::{parse_difficulty, Clamp};
///
/// let (d, clamp) = parse_difficulty(" 25\n").unwrap();
/// assert_eq!(d.ticks_per_second(), 25);
/// assert_eq!(clamp, None);
///
/// let (d, clamp) = parse_difficulty("500").unwrap();
/// assert_eq!(d.ticks_per_second(), 120);
/// assert_eq!(clamp, Some(Clamp::TooHigh));
///
/// assert!(parse_difficulty("fast").is_err());
/// ```
pub fn parse_difficulty(input: &str) -> Result<(Difficulty, Option<Clamp>), DifficultyError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DifficultyError::Empty);
    }

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DifficultyError::NotAnInteger(trimmed.to_string()));
    }

    let raw = match digits.parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Ok(Difficulty::clamped(raw))
}
