//! Enemy placement
//!
//! Enemies appear in a staging band just past the right edge of the field
//! and scroll in from there, so a fresh spawn is never visible on its
//! first frame.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, EntityKind};
use super::state::WorldState;
use crate::tuning::Field;

/// Uniform draw in `[min, max)`
///
/// `Field` guarantees every range handed to this is non-empty.
#[inline]
pub fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// Create one enemy at a random point of the staging band
pub fn spawn_enemy<R: Rng>(rng: &mut R, field: &Field, half_extent: Vec2) -> Entity {
    let ((x_min, x_max), (y_min, y_max)) = field.staging_band();
    let x = uniform(rng, x_min, x_max);
    let y = uniform(rng, y_min, y_max);
    Entity::new(EntityKind::Enemy, Vec2::new(x, y), half_extent)
}

/// Append enemies until `world` holds `target` of them
///
/// Never removes enemies when already at or above `target`. Returns the
/// number spawned.
pub fn top_up<R: Rng>(
    world: &mut WorldState,
    target: usize,
    rng: &mut R,
    field: &Field,
    half_extent: Vec2,
) -> usize {
    let missing = target.saturating_sub(world.enemies.len());
    for _ in 0..missing {
        let enemy = spawn_enemy(rng, field, half_extent);
        log::debug!("spawned enemy at ({:.1}, {:.1})", enemy.pos.x, enemy.pos.y);
        world.enemies.push(enemy);
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const HALF: Vec2 = Vec2::new(10.0, 8.0);

    #[test]
    fn test_spawn_lands_in_staging_band() {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let enemy = spawn_enemy(&mut rng, &field, HALF);
            assert_eq!(enemy.kind, EntityKind::Enemy);
            assert_eq!(enemy.half_extent, HALF);
            assert!(enemy.pos.x >= 1049.0 && enemy.pos.x < 2023.0, "x = {}", enemy.pos.x);
            assert!(enemy.pos.y >= 25.0 && enemy.pos.y < 743.0, "y = {}", enemy.pos.y);
        }
    }

    #[test]
    fn test_spawn_is_reproducible_from_seed() {
        let field = Field::default();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                spawn_enemy(&mut a, &field, HALF),
                spawn_enemy(&mut b, &field, HALF)
            );
        }
    }

    #[test]
    fn test_top_up_fills_to_target() {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut world = WorldState::default();

        assert_eq!(top_up(&mut world, 4, &mut rng, &field, HALF), 4);
        assert_eq!(world.enemies.len(), 4);

        world.enemies.truncate(1);
        assert_eq!(top_up(&mut world, 4, &mut rng, &field, HALF), 3);
        assert_eq!(world.enemies.len(), 4);

        // Already full: nothing spawned, nothing removed
        assert_eq!(top_up(&mut world, 4, &mut rng, &field, HALF), 0);
        assert_eq!(top_up(&mut world, 2, &mut rng, &field, HALF), 0);
        assert_eq!(world.enemies.len(), 4);
    }

    #[test]
    fn test_top_up_keeps_existing_order() {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let survivor = Entity::new(EntityKind::Enemy, Vec2::new(300.0, 300.0), HALF);
        let mut world = WorldState {
            enemies: vec![survivor],
            missiles: Vec::new(),
        };
        top_up(&mut world, 4, &mut rng, &field, HALF);
        assert_eq!(world.enemies[0], survivor);
    }
}
