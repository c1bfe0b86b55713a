//! One simulation step
//!
//! Input is applied between ticks; `tick` then runs the fixed pipeline:
//! hazard check, lifecycle filter, score, buffer swap, respawn, movement,
//! enemy fire. The order matters and must not change.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::lifecycle::{filter_dead_enemies, filter_dead_missiles, filter_spent_enemy_missiles};
use super::movement::{advance, steer_player};
use super::spatial::any_overlap;
use super::spawner::top_up;
use super::state::{Game, GamePhase};
use crate::tuning::Field;

/// Input for a single tick, already translated from raw device state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Movement direction, one unit per pressed axis
    pub control: Vec2,
    /// Fire key went down this frame
    pub fire: bool,
    /// Quit key went down this frame
    pub quit: bool,
    /// Start/restart key went down this frame
    pub confirm: bool,
}

/// Immutable view of a tick's outcome for the render collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks simulated in the current round
    pub tick: u64,
    pub player: Entity,
    pub enemies: Vec<Entity>,
    pub missiles: Vec<Entity>,
    pub enemy_missiles: Vec<Entity>,
}

impl RenderSnapshot {
    /// HUD score text
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Anything that can present a snapshot (window, terminal, log)
pub trait RenderSink {
    fn present(&mut self, snapshot: &RenderSnapshot);
}

impl<R: Rng> Game<R> {
    /// Apply one frame of input
    ///
    /// Outside `Playing` only `confirm` and `quit` do anything. While
    /// playing, the player moves and `fire` launches a missile into the
    /// current world state, to be filtered on the next tick.
    pub fn input(&mut self, input: &TickInput) {
        if input.quit {
            self.quit_requested = true;
        }
        if !self.phase.is_active() {
            if input.confirm {
                self.confirm();
            }
            return;
        }

        steer_player(
            &mut self.round.player,
            input.control,
            self.tuning.player_speed,
            &self.field,
        );
        if input.fire {
            self.fire();
        }
    }

    /// Launch a player missile from the player's position
    pub fn fire(&mut self) {
        if !self.phase.is_active() {
            return;
        }
        let missile = Entity::new(
            EntityKind::PlayerMissile,
            self.round.player.pos,
            self.tuning.missile_extent,
        );
        log::debug!("player fired at ({:.1}, {:.1})", missile.pos.x, missile.pos.y);
        self.round.current.missiles.push(missile);
    }

    /// Advance the simulation by one frame on `field`
    ///
    /// A no-op outside `Playing`; the snapshot still describes what to draw.
    pub fn tick(&mut self, field: &Field) -> RenderSnapshot {
        self.field = *field;
        if self.phase.is_active() {
            self.step();
        }
        self.snapshot()
    }

    fn step(&mut self) {
        let rule = self.tuning.overlap;
        let field = self.field;
        let round = &mut self.round;

        // The field may have shrunk since the player last moved
        round.player.pos = field.clamp(round.player.pos);
        round.ticks += 1;

        // Hazard check: the frame of the collision is the last one drawn
        if any_overlap(&round.player, &round.current.enemies, rule)
            || any_overlap(&round.player, &round.enemy_missiles, rule)
        {
            self.phase = GamePhase::GameOver;
            log::info!(
                "round {} over after {} ticks, score {}",
                self.rounds_started,
                round.ticks,
                round.score
            );
            return;
        }

        let (enemies, hits) = filter_dead_enemies(&round.current, &field, rule);
        round.next.enemies = enemies;
        round.next.missiles = filter_dead_missiles(&round.current, &field, rule);
        if hits > 0 {
            log::debug!("{hits} enemies shot down");
        }
        round.score += hits;

        round.swap_states();

        top_up(
            &mut round.current,
            self.tuning.enemy_target,
            &mut self.rng,
            &field,
            self.tuning.enemy_extent,
        );

        advance(&mut round.current.enemies, &self.tuning);
        advance(&mut round.current.missiles, &self.tuning);
        advance(&mut round.enemy_missiles, &self.tuning);

        let reach = (field.padding() - round.player.half_extent.x).min(0.0);
        round.enemy_missiles = filter_spent_enemy_missiles(&round.enemy_missiles, reach);

        for enemy in &round.current.enemies {
            let roll = self.rng.random_range(0..self.tuning.enemy_fire_roll);
            if roll < self.tuning.enemy_fire_threshold {
                log::debug!("enemy fired at ({:.1}, {:.1})", enemy.pos.x, enemy.pos.y);
                round.enemy_missiles.push(Entity::new(
                    EntityKind::EnemyMissile,
                    enemy.pos,
                    self.tuning.missile_extent,
                ));
            }
        }

        log::trace!(
            "tick {}: {} enemies, {} missiles, {} enemy missiles",
            round.ticks,
            round.current.enemies.len(),
            round.current.missiles.len(),
            round.enemy_missiles.len()
        );
    }

    /// Current drawable state
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            phase: self.phase,
            score: self.round.score,
            tick: self.round.ticks,
            player: self.round.player,
            enemies: self.round.current.enemies.clone(),
            missiles: self.round.current.missiles.clone(),
            enemy_missiles: self.round.enemy_missiles.clone(),
        }
    }
}
