//! Tutorial 2: steer a circle with WASD, movement scaled by frame time.

use avoid_collision::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use avoid_collision::demos::run_free_move;
use avoid_collision::platform::{FixedRateClock, Terminal};
use glam::IVec2;

fn main() -> avoid_collision::Result<()> {
    env_logger::init();

    let pos = {
        let mut terminal = Terminal::enter(IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT))?;
        let mut clock = FixedRateClock::new();
        run_free_move(&mut terminal, &mut clock)?
    };
    log::info!("Final position: {:?}", pos);
    Ok(())
}
