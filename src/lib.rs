//! Avoid Collision - dodge the falling blocks for as long as you can
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, scoring, overlap)
//! - `game`: The fixed-rate run loop tying the simulation to a platform
//! - `renderer`: Scene drawing on top of an abstract `Surface`
//! - `platform`: Input/drawing/timing traits plus terminal and headless backends
//! - `demos`: The two tutorial loops (blank screen, free-moving circle)
//! - `settings`: JSON-loadable game configuration

pub mod demos;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::{RunOutcome, RunSummary, run};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen size
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 720;

    /// Player square side and per-tick horizontal step
    pub const PLAYER_SIZE: i32 = 60;
    pub const PLAYER_STEP: i32 = 24;

    /// Obstacle square side and per-tick fall step
    pub const OBSTACLE_SIZE: i32 = 60;
    pub const OBSTACLE_STEP: i32 = 24;

    /// Maximum simultaneous obstacles
    pub const OBSTACLE_CAP: usize = 10;
    /// Per-tick chance of spawning an obstacle while below the cap
    pub const SPAWN_CHANCE: f64 = 0.1;

    /// Game tick rate (steps are tuned for this, not scaled by elapsed time)
    pub const GAME_TICK_RATE: u32 = 12;
    /// Tutorial tick rate
    pub const TUTORIAL_TICK_RATE: u32 = 60;

    /// How long the game-over frame stays up before the loop exits
    pub const GAME_OVER_DELAY_MS: u64 = 2000;

    /// Tutorial circle radius and speed (units/second)
    pub const TUTORIAL_RADIUS: f32 = 40.0;
    pub const TUTORIAL_SPEED: f32 = 300.0;
}
