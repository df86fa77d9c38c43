//! Fixed-rate run loop
//!
//! Each frame: check for quit, sample keys, tick the simulation, draw,
//! present, then wait for the next frame. On game over the final frame
//! stays up for the configured delay and the loop returns.

use crate::error::Result;
use crate::platform::{FrameClock, InputSource, Key, Surface};
use crate::renderer::draw_game;
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// An obstacle hit the player
    GameOver,
    /// The close signal arrived first
    Quit,
}

/// Result of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub score: u64,
    pub ticks: u64,
    pub seed: u64,
}

impl TickInput {
    /// Both WASD and arrow bindings steer the player
    pub fn from_keys(input: &dyn InputSource) -> Self {
        Self {
            left: input.is_held(Key::A) || input.is_held(Key::Left),
            right: input.is_held(Key::D) || input.is_held(Key::Right),
        }
    }
}

/// Play one game from a fresh state
pub fn run<P, C>(
    settings: &Settings,
    seed: u64,
    platform: &mut P,
    clock: &mut C,
) -> Result<RunSummary>
where
    P: InputSource + Surface,
    C: FrameClock,
{
    settings.validate()?;
    log::info!("Starting game with seed {}", seed);
    run_state(GameState::with_settings(settings, seed), settings, platform, clock)
}

/// Play from an existing state until game over or quit
pub fn run_state<P, C>(
    mut state: GameState,
    settings: &Settings,
    platform: &mut P,
    clock: &mut C,
) -> Result<RunSummary>
where
    P: InputSource + Surface,
    C: FrameClock,
{
    let outcome = loop {
        platform.poll()?;
        if platform.close_requested() {
            log::info!("Quit requested at tick {}", state.time_ticks);
            break RunOutcome::Quit;
        }

        let input = TickInput::from_keys(&*platform);
        tick(&mut state, &input);

        draw_game(&state, &mut *platform)?;
        platform.present()?;

        if state.is_over() {
            clock.wait(settings.game_over_delay());
            break RunOutcome::GameOver;
        }

        clock.tick(settings.tick_rate);
    };

    let summary = RunSummary {
        outcome,
        score: state.score,
        ticks: state.time_ticks,
        seed: state.seed,
    };
    log::info!(
        "Run finished: {:?}, score {} after {} ticks",
        summary.outcome,
        summary.score,
        summary.ticks
    );
    Ok(summary)
}
