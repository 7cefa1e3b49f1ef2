//! Screen composition on top of a [`Surface`].
//!
//! Pure drawing: these functions read state and issue draw calls, they never
//! mutate the game.

use crate::core::GameState;
use crate::types::{palette, Anchor, FontRole, Rect, Surface, CELL_SIZE};

/// Board background, every snake segment, then the food.
pub fn draw_playfield<S: Surface>(surface: &mut S, state: &GameState) {
    surface.fill(palette::BLACK);
    for seg in state.snake().body() {
        surface.fill_rect(Rect::new(seg.x, seg.y, CELL_SIZE, CELL_SIZE), palette::GREEN);
    }
    let food = state.food().position;
    surface.fill_rect(Rect::new(food.x, food.y, CELL_SIZE, CELL_SIZE), palette::WHITE);
}

/// In-game score, top-left area.
pub fn draw_score<S: Surface>(surface: &mut S, score: u32) {
    let (w, _) = surface.size();
    let text = surface.render_text(&score_label(score), FontRole::Score, palette::WHITE);
    surface.blit_text(&text, Anchor::MidTop(w / 10, 15));
}

/// Full game-over screen with the final score.
pub fn draw_game_over<S: Surface>(surface: &mut S, score: u32) {
    let (w, h) = surface.size();
    let mid = w / 2;

    surface.fill(palette::BLACK);

    let title = surface.render_text("YOU DIED", FontRole::Title, palette::RED);
    surface.blit_text(&title, Anchor::MidTop(mid, h / 4));

    let quit = surface.render_text("Press ESC to quit", FontRole::Prompt, palette::RED);
    surface.blit_text(&quit, Anchor::MidTop(mid, scaled(h, 1.8)));

    let again = surface.render_text("Press Space to play again", FontRole::Prompt, palette::GREEN);
    surface.blit_text(&again, Anchor::MidTop(mid, scaled(h, 1.5)));

    let final_score = surface.render_text(&score_label(score), FontRole::FinalScore, palette::RED);
    surface.blit_text(&final_score, Anchor::MidTop(mid, scaled(h, 1.25)));
}

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

fn scaled(extent: i32, divisor: f32) -> i32 {
    (extent as f32 / divisor) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_ratios() {
        assert_eq!(scaled(480, 1.8), 266);
        assert_eq!(scaled(480, 1.5), 320);
        assert_eq!(scaled(480, 1.25), 384);
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(0), "Score: 0");
        assert_eq!(score_label(42), "Score: 42");
    }
}
