//! Scene rendering
//!
//! Turns simulation state into `Surface` calls. Knows nothing about the
//! backend beyond the trait.

pub mod scene;

pub use scene::{Drawable, GAME_OVER_TEXT, draw_game, score_text};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const PURPLE: Color = Color::rgb(160, 32, 240);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const PLAYER: Color = Color::WHITE;
    pub const OBSTACLE: Color = Color::RED;
    pub const TEXT: Color = Color::WHITE;
    pub const TUTORIAL_BACKGROUND: Color = Color::PURPLE;
    pub const TUTORIAL_PLAYER: Color = Color::RED;
}
