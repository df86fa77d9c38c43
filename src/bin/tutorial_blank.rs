//! Tutorial 1: an empty screen redrawn at 60 ticks/s. Esc or q quits.

use avoid_collision::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use avoid_collision::demos::run_blank;
use avoid_collision::platform::{FixedRateClock, Terminal};
use glam::IVec2;

fn main() -> avoid_collision::Result<()> {
    env_logger::init();

    let mut terminal = Terminal::enter(IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT))?;
    let mut clock = FixedRateClock::new();
    run_blank(&mut terminal, &mut clock)?;
    Ok(())
}
