//! Game state and core simulation types

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use super::collision::Aabb;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// An obstacle hit the player (terminal)
    GameOver,
}

/// Movement directive handed to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Which rules an entity moves by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Horizontal only, kept inside the arena margins
    Player,
    /// Falls when told to move down, ignores everything else
    Obstacle,
}

/// Playfield dimensions in logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// A square entity: the player or a falling obstacle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: IVec2,
    /// Side length
    pub size: i32,
    /// Distance covered per move
    pub step: i32,
}

impl Entity {
    /// Player centred horizontally, resting on the bottom edge
    pub fn player(id: u32, arena: Arena) -> Self {
        Self {
            id,
            kind: EntityKind::Player,
            pos: IVec2::new(arena.width / 2 - PLAYER_SIZE / 2, arena.height - PLAYER_SIZE),
            size: PLAYER_SIZE,
            step: PLAYER_STEP,
        }
    }

    /// Obstacle at the top edge
    pub fn obstacle(id: u32, x: i32) -> Self {
        Self {
            id,
            kind: EntityKind::Obstacle,
            pos: IVec2::new(x, 0),
            size: OBSTACLE_SIZE,
            step: OBSTACLE_STEP,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    /// Apply one movement directive. Returns whether the entity moved.
    pub fn move_in(&mut self, direction: Direction, arena: Arena) -> bool {
        match (self.kind, direction) {
            // Player x stays within [size, width - size]
            (EntityKind::Player, Direction::Left) if self.pos.x - self.step >= self.size => {
                self.pos.x -= self.step;
                true
            }
            (EntityKind::Player, Direction::Right)
                if self.pos.x + self.step <= arena.width - self.size =>
            {
                self.pos.x += self.step;
                true
            }
            // No bottom clamp: obstacles fall off the screen and get collected
            (EntityKind::Obstacle, Direction::Down) => {
                self.pos.y = self.pos.y.saturating_add(self.step);
                true
            }
            _ => false,
        }
    }
}

/// Something that happened during a tick (for logging and frontends)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { id: u32, x: i32 },
    Exited { id: u32 },
    Collided { id: u32 },
}

/// Complete game state, owned by the run loop and passed to `tick`
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub arena: Arena,
    /// Maximum simultaneous obstacles
    pub obstacle_cap: usize,
    /// Per-tick spawn chance
    pub spawn_chance: f64,
    /// Obstacles that fell off the bottom
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Entity,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Entity>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// New game with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings::default(), seed)
    }

    pub fn with_settings(settings: &Settings, seed: u64) -> Self {
        let arena = Arena {
            width: settings.screen_width,
            height: settings.screen_height,
        };
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            obstacle_cap: settings.obstacle_cap,
            spawn_chance: settings.spawn_chance,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            player: Entity::player(0, arena),
            obstacles: Vec::new(),
            events: Vec::new(),
            next_id: 0,
        };
        let id = state.next_entity_id();
        state.player.id = id;
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform draw in [0, 1)
    pub(crate) fn roll(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Spawn an obstacle at a random x along the top edge
    pub fn spawn_obstacle(&mut self) -> u32 {
        let max_x = (self.arena.width - OBSTACLE_SIZE).max(0);
        let x = self.rng.random_range(0..=max_x);
        let id = self.next_entity_id();
        self.obstacles.push(Entity::obstacle(id, x));
        self.events.push(GameEvent::Spawned { id, x });
        id
    }

    /// Place an obstacle at an exact position (scenarios and tests)
    pub fn push_obstacle_at(&mut self, pos: IVec2) -> u32 {
        let id = self.next_entity_id();
        let mut obstacle = Entity::obstacle(id, pos.x);
        obstacle.pos = pos;
        self.obstacles.push(obstacle);
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
