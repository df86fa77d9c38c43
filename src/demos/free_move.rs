//! Circle steered with WASD
//!
//! Unlike the game, movement here is scaled by the measured frame time, so
//! the circle covers the same distance per second at any frame rate.

use glam::{IVec2, Vec2};

use crate::consts::{TUTORIAL_RADIUS, TUTORIAL_SPEED, TUTORIAL_TICK_RATE};
use crate::error::Result;
use crate::platform::{FrameClock, InputSource, Key, Surface};
use crate::renderer::{Drawable, colors};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeMove {
    pub pos: Vec2,
}

impl FreeMove {
    /// Start in the middle of the screen
    pub fn new(screen: IVec2) -> Self {
        Self {
            pos: screen.as_vec2() / 2.0,
        }
    }

    /// Move by `TUTORIAL_SPEED * dt` along each held axis. Not clamped to the screen.
    pub fn update(&mut self, input: &dyn InputSource, dt: f32) {
        let step = TUTORIAL_SPEED * dt;
        if input.is_held(Key::W) {
            self.pos.y -= step;
        }
        if input.is_held(Key::S) {
            self.pos.y += step;
        }
        if input.is_held(Key::A) {
            self.pos.x -= step;
        }
        if input.is_held(Key::D) {
            self.pos.x += step;
        }
    }
}

impl Drawable for FreeMove {
    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        surface.fill_circle(self.pos, TUTORIAL_RADIUS, colors::TUTORIAL_PLAYER)
    }
}

/// Run the free-move tutorial until close. Returns the final position.
pub fn run_free_move<P, C>(platform: &mut P, clock: &mut C) -> Result<Vec2>
where
    P: InputSource + Surface,
    C: FrameClock,
{
    let mut circle = FreeMove::new(platform.size());
    // Nothing measured before the first frame
    let mut dt = 0.0;
    loop {
        platform.poll()?;
        if platform.close_requested() {
            break;
        }

        platform.clear(colors::TUTORIAL_BACKGROUND)?;
        circle.draw(&mut *platform)?;
        circle.update(&*platform, dt);
        platform.present()?;

        dt = clock.tick(TUTORIAL_TICK_RATE).as_secs_f32();
    }
    log::info!("Free-move loop closed at ({:.1}, {:.1})", circle.pos.x, circle.pos.y);
    Ok(circle.pos)
}
