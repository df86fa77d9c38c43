//! Game scene drawing

use glam::IVec2;

use super::colors;
use crate::error::Result;
use crate::platform::Surface;
use crate::sim::{Entity, EntityKind, GameState};

pub const GAME_OVER_TEXT: &str = "Game Over !!!!";

/// Score HUD position
const SCORE_POS: IVec2 = IVec2::new(10, 10);

/// Anything that knows how to put itself on a surface
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface) -> Result<()>;
}

impl Drawable for Entity {
    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let color = match self.kind {
            EntityKind::Player => colors::PLAYER,
            EntityKind::Obstacle => colors::OBSTACLE,
        };
        surface.fill_rect(self.pos, IVec2::splat(self.size), color)
    }
}

pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

/// Draw a full frame (without presenting it)
pub fn draw_game(state: &GameState, surface: &mut dyn Surface) -> Result<()> {
    surface.clear(colors::BACKGROUND)?;

    state.player.draw(surface)?;
    for obstacle in &state.obstacles {
        obstacle.draw(surface)?;
    }

    surface.draw_text(SCORE_POS, &score_text(state.score), colors::TEXT)?;

    if state.is_over() {
        let extent = surface.text_extent(GAME_OVER_TEXT);
        let center = surface.size() / 2;
        surface.draw_text(center - extent / 2, GAME_OVER_TEXT, colors::TEXT)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawCommand, HeadlessPlatform};
    use crate::renderer::Color;
    use crate::settings::Settings;
    use crate::sim::{TickInput, tick};

    fn screen() -> HeadlessPlatform {
        HeadlessPlatform::new(IVec2::new(1280, 720))
    }

    #[test]
    fn test_running_frame() {
        let mut state = GameState::with_settings(
            &Settings {
                spawn_chance: 0.0,
                ..Settings::default()
            },
            1,
        );
        state.push_obstacle_at(IVec2::new(100, 200));
        state.score = 4;

        let mut surface = screen();
        draw_game(&state, &mut surface).unwrap();
        surface.present().unwrap();
        let frame = surface.last_frame().unwrap();

        assert_eq!(frame[0], DrawCommand::Clear(Color::BLACK));
        assert_eq!(
            frame[1],
            DrawCommand::Rect {
                pos: IVec2::new(610, 660),
                size: IVec2::splat(60),
                color: Color::WHITE,
            }
        );
        assert_eq!(
            frame[2],
            DrawCommand::Rect {
                pos: IVec2::new(100, 200),
                size: IVec2::splat(60),
                color: Color::RED,
            }
        );
        assert_eq!(HeadlessPlatform::texts(frame), vec!["Score: 4"]);
    }

    #[test]
    fn test_game_over_text_centered() {
        let mut state = GameState::with_settings(
            &Settings {
                spawn_chance: 0.0,
                ..Settings::default()
            },
            1,
        );
        state.push_obstacle_at(IVec2::new(600, 626));
        tick(&mut state, &TickInput::default());
        assert!(state.is_over());

        let mut surface = screen();
        draw_game(&state, &mut surface).unwrap();
        surface.present().unwrap();
        let frame = surface.last_frame().unwrap();

        let extent = surface.text_extent(GAME_OVER_TEXT);
        let expected = IVec2::new(640, 360) - extent / 2;
        assert!(frame.contains(&DrawCommand::Text {
            pos: expected,
            text: GAME_OVER_TEXT.to_owned(),
            color: Color::WHITE,
        }));
    }
}
