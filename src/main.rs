//! Avoid Collision entry point
//!
//! Loads settings, takes over the terminal and plays one game.

use avoid_collision::platform::{FixedRateClock, Terminal};
use avoid_collision::{RunOutcome, Settings};
use glam::IVec2;

fn main() -> avoid_collision::Result<()> {
    env_logger::init();
    log::info!("Avoid Collision starting...");

    let settings = Settings::from_env()?;
    let seed = settings.seed.unwrap_or_else(rand::random);

    let summary = {
        let mut terminal =
            Terminal::enter(IVec2::new(settings.screen_width, settings.screen_height))?;
        let mut clock = FixedRateClock::new();
        avoid_collision::run(&settings, seed, &mut terminal, &mut clock)?
        // terminal restored here
    };

    match summary.outcome {
        RunOutcome::GameOver => println!("Game over! Score: {}", summary.score),
        RunOutcome::Quit => println!("Quit. Score: {}", summary.score),
    }
    Ok(())
}
