//! Startup difficulty prompt.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::engine::{parse_difficulty, Difficulty, DIFFICULTY_PROMPT};

/// Ask for the difficulty on `output` and read one line from `input`.
///
/// Out-of-range values are clamped with a notice on `output`; anything that
/// is not an integer is an error.
pub fn read_difficulty<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Difficulty> {
    output.write_all(DIFFICULTY_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read DIFFICULTY from stdin")?;

    let (difficulty, clamp) = parse_difficulty(&line)?;
    if let Some(clamp) = clamp {
        writeln!(output, "{}", clamp.message())?;
        warn!(requested = line.trim(), applied = difficulty.ticks_per_second(), "difficulty clamped");
    }
    Ok(difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<Difficulty>, String) {
        let mut out = Vec::new();
        let res = read_difficulty(&mut Cursor::new(input.as_bytes()), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_in_range_value_silently() {
        let (res, out) = run("30\n");
        assert_eq!(res.unwrap().ticks_per_second(), 30);
        assert_eq!(out, "Enter DIFFICULTY (1-120): ");
    }

    #[test]
    fn warns_when_too_high() {
        let (res, out) = run("300\n");
        assert_eq!(res.unwrap().ticks_per_second(), 120);
        assert!(out.ends_with("DIFFICULTY too high, setting to 120\n"));
    }

    #[test]
    fn warns_when_too_low() {
        let (res, out) = run("0\n");
        assert_eq!(res.unwrap().ticks_per_second(), 1);
        assert!(out.ends_with("DIFFICULTY too low, setting to 1\n"));
    }

    #[test]
    fn rejects_garbage() {
        let (res, _) = run("hard\n");
        let err = res.unwrap_err();
        assert!(err.to_string().contains("integer"), "{err}");
    }

    #[test]
    fn rejects_eof() {
        let (res, _) = run("");
        assert!(res.is_err());
    }
}
