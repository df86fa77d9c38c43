//! Fixed step simulation tick
//!
//! One call advances the game by exactly one frame. Step sizes are per tick,
//! so the caller is responsible for running at the configured tick rate.

use super::state::{Direction, GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (A or Left arrow held)
    pub left: bool,
    /// Move right (D or Right arrow held)
    pub right: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;
    let arena = state.arena;

    if input.left {
        state.player.move_in(Direction::Left, arena);
    }
    if input.right {
        state.player.move_in(Direction::Right, arena);
    }

    // Only roll while below the cap
    if state.obstacles.len() < state.obstacle_cap && state.roll() < state.spawn_chance {
        let id = state.spawn_obstacle();
        log::debug!("Spawned obstacle {} ({} active)", id, state.obstacles.len());
    }

    for obstacle in &mut state.obstacles {
        obstacle.move_in(Direction::Down, arena);
    }

    let mut exited = Vec::new();
    state.obstacles.retain(|obstacle| {
        let gone = obstacle.pos.y >= arena.height;
        if gone {
            exited.push(obstacle.id);
        }
        !gone
    });
    for id in exited {
        state.score += 1;
        state.events.push(GameEvent::Exited { id });
        log::debug!("Obstacle {} left the screen, score {}", id, state.score);
    }

    let player = state.player.bounds();
    if let Some(hit) = state
        .obstacles
        .iter()
        .find(|obstacle| obstacle.bounds().overlaps(&player))
    {
        let id = hit.id;
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Collided { id });
        log::info!(
            "Obstacle {} hit the player at tick {}, final score {}",
            id,
            state.time_ticks,
            state.score
        );
    }
}
