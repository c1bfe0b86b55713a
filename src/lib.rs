//! Harbor Guard - a side-scrolling harbor defense shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, world state, phases)
//! - `settings`: User-editable configuration loaded from JSON
//! - `tuning`: Validated game balance the simulation runs on
//! - `autopilot`: Scripted pilot that drives headless sessions

pub mod autopilot;
pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, Result};
pub use settings::Settings;
pub use tuning::{Field, Tuning};

/// Game configuration constants
pub mod consts {
    /// Reference field dimensions
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;
    /// Margin kept between the player and the field edges
    pub const PADDING: f32 = 25.0;

    /// Enemies alive at the end of every playing tick
    pub const MAX_ENEMIES: usize = 4;

    /// Per-tick speeds (units per tick)
    pub const ENEMY_SPEED: f32 = 1.5;
    pub const MISSILE_SPEED: f32 = 3.5;
    /// Enemy missiles travel this much faster than player missiles
    pub const ENEMY_MISSILE_SPEED_FACTOR: f32 = 1.5;
    pub const PLAYER_SPEED: f32 = 3.0;

    /// Sprites are drawn at this fraction of their source size
    pub const SPRITE_SCALE: f32 = 0.065;
    /// Source sprite sizes in pixels (width, height)
    pub const PLAYER_SPRITE: (f32, f32) = (1000.0, 700.0);
    pub const ENEMY_SPRITE: (f32, f32) = (1000.0, 700.0);
    pub const MISSILE_SPRITE: (f32, f32) = (400.0, 200.0);

    /// Each enemy rolls `0..ENEMY_FIRE_ROLL` per tick and fires on `< ENEMY_FIRE_THRESHOLD`
    pub const ENEMY_FIRE_ROLL: u32 = 10_000;
    pub const ENEMY_FIRE_THRESHOLD: u32 = 26;

    /// Default session seed
    pub const DEFAULT_SEED: u64 = 0x5EA_F047;
}
