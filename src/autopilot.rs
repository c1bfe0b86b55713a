//! Scripted pilot for headless sessions and soak tests
//!
//! Reads the same snapshot a renderer would and answers with the input a
//! player would give: line up with the closest incoming ship, shoot it,
//! and sidestep enemy fire. Fully deterministic.

use glam::Vec2;

use crate::sim::{Entity, GamePhase, RenderSnapshot, TickInput};
use crate::tuning::Field;

/// How far ahead of the player enemy fire is considered a threat
const THREAT_LOOKAHEAD: f32 = 160.0;
/// Extra vertical clearance kept from enemy fire
const DODGE_MARGIN: f32 = 8.0;
/// Ships closer than this are dodged instead of engaged
const RAM_DISTANCE: f32 = 90.0;
/// Vertical error tolerated before steering
const DEADZONE: f32 = 2.0;
/// Fraction of the field width the pilot patrols at
const HOME_X_FRACTION: f32 = 0.15;

/// Deterministic demo pilot
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks between shots
    pub fire_interval: u32,
    cooldown: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(12)
    }
}

impl Autopilot {
    pub fn new(fire_interval: u32) -> Self {
        Self {
            fire_interval,
            cooldown: 0,
        }
    }

    /// Forget the fire cooldown (call on a new round)
    pub fn reset(&mut self) {
        self.cooldown = 0;
    }

    /// Decide the input for the next frame
    pub fn next_input(&mut self, snapshot: &RenderSnapshot, field: &Field) -> TickInput {
        if snapshot.phase != GamePhase::Playing {
            self.reset();
            return TickInput {
                confirm: true,
                ..Default::default()
            };
        }

        let player = &snapshot.player;
        self.cooldown = self.cooldown.saturating_sub(1);

        let target = nearest_incoming(player, &snapshot.enemies);
        let threat = snapshot
            .enemy_missiles
            .iter()
            .chain(target.filter(|e| e.pos.x - player.pos.x < RAM_DISTANCE))
            .filter(|e| on_collision_course(player, e))
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

        let mut control = Vec2::ZERO;
        control.x = steer_axis(player.pos.x, field.width() * HOME_X_FRACTION);
        if let Some(threat) = threat {
            control.y = dodge_direction(player, threat, field);
        } else if let Some(target) = target {
            control.y = steer_axis(player.pos.y, target.pos.y);
        }

        let mut fire = false;
        if let Some(target) = target {
            let lined_up = (target.pos.y - player.pos.y).abs() < target.half_extent.y;
            let visible = target.pos.x - target.half_extent.x < field.width();
            if lined_up && visible && self.cooldown == 0 {
                fire = true;
                self.cooldown = self.fire_interval;
            }
        }

        TickInput {
            control,
            fire,
            ..Default::default()
        }
    }
}

/// Closest enemy still in front of the player
fn nearest_incoming<'a>(player: &Entity, enemies: &'a [Entity]) -> Option<&'a Entity> {
    enemies
        .iter()
        .filter(|e| e.pos.x > player.pos.x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
}

fn on_collision_course(player: &Entity, other: &Entity) -> bool {
    let ahead = other.pos.x - other.half_extent.x - (player.pos.x + player.half_extent.x);
    let clearance = player.half_extent.y + other.half_extent.y + DODGE_MARGIN;
    (-other.half_extent.x..THREAT_LOOKAHEAD).contains(&ahead)
        && (other.pos.y - player.pos.y).abs() < clearance
}

/// Move away from `threat`, toward whichever side has room
fn dodge_direction(player: &Entity, threat: &Entity, field: &Field) -> f32 {
    let preferred = if threat.pos.y >= player.pos.y { -1.0 } else { 1.0 };
    let at_bottom = player.pos.y <= field.min_player_pos().y;
    let at_top = player.pos.y >= field.max_player_pos().y;
    match preferred {
        d if d < 0.0 && at_bottom => 1.0,
        d if d > 0.0 && at_top => -1.0,
        d => d,
    }
}

fn steer_axis(current: f32, desired: f32) -> f32 {
    let delta = desired - current;
    if delta.abs() <= DEADZONE {
        0.0
    } else {
        delta.signum()
    }
}
