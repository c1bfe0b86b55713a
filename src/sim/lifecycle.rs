//! Lifecycle filter
//!
//! Decides which entities live on into the next world state. Survivors are
//! always collected into fresh vectors; the input state is never mutated
//! while it is being scanned.

use super::entity::{Entity, EntityKind};
use super::spatial::{OverlapRule, any_overlap};
use super::state::WorldState;
use crate::tuning::Field;

/// Whether an entity of `kind` at horizontal position `x` has left the field
///
/// Enemies leave through the left edge, player missiles through the right.
/// Enemy missiles are pruned separately by [`filter_spent_enemy_missiles`].
pub fn is_off_field(kind: EntityKind, x: f32, field: &Field) -> bool {
    match kind {
        EntityKind::Enemy => x < 0.0,
        EntityKind::PlayerMissile => x > field.width(),
        EntityKind::Player | EntityKind::EnemyMissile => false,
    }
}

/// Enemies that survive this tick, and how many were shot down
///
/// An enemy survives if it is still on the field and touches no missile.
/// Each enemy touching at least one missile counts as exactly one hit,
/// whether or not it had also left the field.
pub fn filter_dead_enemies(
    world: &WorldState,
    field: &Field,
    rule: OverlapRule,
) -> (Vec<Entity>, u64) {
    let mut survivors = Vec::with_capacity(world.enemies.len());
    let mut hits = 0;
    for enemy in &world.enemies {
        let shot = any_overlap(enemy, &world.missiles, rule);
        if shot {
            hits += 1;
        } else if !is_off_field(enemy.kind, enemy.pos.x, field) {
            survivors.push(*enemy);
        }
    }
    (survivors, hits)
}

/// Player missiles that survive this tick
///
/// A missile is spent once it leaves the field or touches any enemy.
/// Spent missiles score nothing; scoring is counted on the enemy side.
pub fn filter_dead_missiles(world: &WorldState, field: &Field, rule: OverlapRule) -> Vec<Entity> {
    world
        .missiles
        .iter()
        .filter(|m| {
            !is_off_field(m.kind, m.pos.x, field) && !any_overlap(m, &world.enemies, rule)
        })
        .copied()
        .collect()
}

/// Enemy missiles that can still reach the player
///
/// Enemy missiles only travel left, so once a missile's right edge is past
/// `reach` (the leftmost edge the player can ever occupy) it is harmless.
pub fn filter_spent_enemy_missiles(missiles: &[Entity], reach: f32) -> Vec<Entity> {
    missiles
        .iter()
        .filter(|m| m.bounds().max.x >= reach)
        .copied()
        .collect()
}
