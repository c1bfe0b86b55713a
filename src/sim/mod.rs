//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order within a tick)
//! - No rendering or platform dependencies

pub mod entity;
pub mod lifecycle;
pub mod movement;
pub mod spatial;
pub mod spawner;
pub mod state;
pub mod tick;

pub use entity::{Entity, EntityKind, SpriteSize};
pub use lifecycle::{filter_dead_enemies, filter_dead_missiles, is_off_field};
pub use spatial::{OverlapRule, Rect, any_overlap, bounds_of, overlaps};
pub use spawner::{spawn_enemy, top_up};
pub use state::{Game, GamePhase, Round, WorldState};
pub use tick::{RenderSink, RenderSnapshot, TickInput};
