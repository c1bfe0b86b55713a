//! Fixed per-kind velocities
//!
//! Everything but the player scrolls horizontally at a constant rate.
//! Enemies and enemy missiles travel left toward the harbor, player
//! missiles travel right.

use glam::Vec2;

use super::entity::{Entity, EntityKind};
use crate::tuning::{Field, Tuning};

/// Per-tick displacement for an entity of `kind`
pub fn velocity_of(kind: EntityKind, tuning: &Tuning) -> Vec2 {
    match kind {
        EntityKind::Player => Vec2::ZERO,
        EntityKind::Enemy => Vec2::new(-tuning.enemy_speed, 0.0),
        EntityKind::PlayerMissile => Vec2::new(tuning.missile_speed, 0.0),
        EntityKind::EnemyMissile => Vec2::new(-tuning.enemy_missile_speed(), 0.0),
    }
}

/// Move every entity in `entities` by one tick of its kind's velocity
pub fn advance(entities: &mut [Entity], tuning: &Tuning) {
    for entity in entities.iter_mut() {
        entity.pos += velocity_of(entity.kind, tuning);
    }
}

/// Move the player by `control * speed` and keep it inside the padded field
///
/// `control` is the normalized input direction, one unit per pressed axis.
pub fn steer_player(player: &mut Entity, control: Vec2, speed: f32, field: &Field) {
    let control = if control.is_finite() { control } else { Vec2::ZERO };
    player.pos = field.clamp(player.pos + control * speed);
}
