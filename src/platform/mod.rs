//! Platform abstraction layer
//!
//! The game only talks to the outside world through three traits:
//! - `InputSource`: key state and the close signal
//! - `Surface`: clear, filled shapes, text, present
//! - `FrameClock`: rate limiting and fixed delays
//!
//! `terminal` implements them on top of crossterm; `headless` records
//! everything for tests.

use std::time::Duration;

use glam::{IVec2, Vec2};

use crate::error::Result;
use crate::renderer::Color;

pub mod clock;
pub mod headless;
pub mod terminal;

pub use clock::FixedRateClock;
pub use headless::{DrawCommand, HeadlessPlatform, ManualClock};
pub use terminal::Terminal;

/// Keys the game and tutorials care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    Left,
    Right,
    Up,
    Down,
}

/// Queryable key state plus the window-close signal
pub trait InputSource {
    /// Pump pending events; call once at the top of every tick
    fn poll(&mut self) -> Result<()>;

    /// Whether `key` is currently held
    fn is_held(&self, key: Key) -> bool;

    /// Whether the user asked to quit
    fn close_requested(&self) -> bool;
}

/// Drawing target in logical (game) coordinates
pub trait Surface {
    /// Logical size of the drawable area
    fn size(&self) -> IVec2;

    fn clear(&mut self, color: Color) -> Result<()>;

    fn fill_rect(&mut self, pos: IVec2, size: IVec2, color: Color) -> Result<()>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<()>;

    /// Logical size a line of text would occupy
    fn text_extent(&self, text: &str) -> IVec2;

    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, pos: IVec2, text: &str, color: Color) -> Result<()>;

    /// Show the finished frame
    fn present(&mut self) -> Result<()>;
}

/// Frame pacing
pub trait FrameClock {
    /// Sleep as needed to cap the loop at `rate` ticks per second.
    /// Returns the time since the previous call.
    fn tick(&mut self, rate: u32) -> Duration;

    /// Block for a fixed delay
    fn wait(&mut self, delay: Duration);
}
