//! Game state and core simulation types
//!
//! A `Game` owns everything the simulation touches: the phase, the seeded
//! RNG and the current `Round`. Nothing here is shared across threads.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use crate::error::Result;
use crate::tuning::{Field, Tuning};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start key
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Round ended by a hazard collision, waiting for the restart key
    GameOver,
}

impl GamePhase {
    /// Whether the simulation advances in this phase
    pub fn is_active(self) -> bool {
        self == GamePhase::Playing
    }

    /// Text the render collaborator shows full screen for this phase
    pub fn banner(self) -> &'static [&'static str] {
        match self {
            GamePhase::Start => &[
                "Pirates have arrived in your harbor.",
                "Keep out enemy ships and avoid missiles.",
                "Press Enter to Start",
            ],
            GamePhase::Playing => &[],
            GamePhase::GameOver => &[
                "GAME OVER",
                "You have failed your people.",
                "Press Enter to Start Again",
            ],
        }
    }
}

/// Live enemies and player missiles valid for one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub enemies: Vec<Entity>,
    pub missiles: Vec<Entity>,
}

impl WorldState {
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty() && self.missiles.is_empty()
    }
}

/// Everything that is reset when a new round begins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Enemies shot down this round
    pub score: u64,
    /// Ticks simulated this round
    pub ticks: u64,
    /// The one player entity
    pub player: Entity,
    /// World state being simulated and drawn
    pub current: WorldState,
    /// World state under construction for the next tick
    pub next: WorldState,
    /// Enemy fire lives outside the double buffer
    pub enemy_missiles: Vec<Entity>,
}

impl Round {
    /// Fresh round: zero score, empty world, player at the lower-left corner
    pub fn new(tuning: &Tuning, field: &Field) -> Self {
        let start = field.clamp(tuning.player_extent + Vec2::splat(field.padding()));
        Self {
            score: 0,
            ticks: 0,
            player: Entity::new(EntityKind::Player, start, tuning.player_extent),
            current: WorldState::default(),
            next: WorldState::default(),
            enemy_missiles: Vec::new(),
        }
    }

    /// Promote the next world state and start an empty one
    pub fn swap_states(&mut self) {
        self.current = std::mem::take(&mut self.next);
    }
}

/// A play session: phase machine plus the round in progress
#[derive(Debug, Clone)]
pub struct Game<R = Pcg32> {
    pub(crate) phase: GamePhase,
    pub(crate) round: Round,
    pub(crate) tuning: Tuning,
    pub(crate) field: Field,
    pub(crate) rng: R,
    pub(crate) rounds_started: u32,
    pub(crate) quit_requested: bool,
}

impl Game<Pcg32> {
    /// Create a session on the title screen with the given seed
    pub fn new(tuning: Tuning, field: Field, seed: u64) -> Result<Self> {
        Self::with_rng(tuning, field, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a session drawing spawns and enemy fire from `rng`
    ///
    /// Fails if `tuning` does not pass [`Tuning::validate`].
    pub fn with_rng(tuning: Tuning, field: Field, rng: R) -> Result<Self> {
        tuning.validate()?;
        let round = Round::new(&tuning, &field);
        Ok(Self {
            phase: GamePhase::Start,
            round,
            tuning,
            field,
            rng,
            rounds_started: 0,
            quit_requested: false,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.round.score
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Mutable access for collaborators that stage scenarios
    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    pub fn player(&self) -> &Entity {
        &self.round.player
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Rounds begun since the session started
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Whether input asked the driver to stop between ticks
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Handle the start/restart key
    ///
    /// `Start -> Playing`, and `GameOver -> Playing` with a brand new round.
    /// Ignored while already playing.
    pub fn confirm(&mut self) {
        match self.phase {
            GamePhase::Start => {
                self.begin_round();
            }
            GamePhase::GameOver => {
                log::info!(
                    "restarting after round {} (score {})",
                    self.rounds_started,
                    self.round.score
                );
                self.round = Round::new(&self.tuning, &self.field);
                self.begin_round();
            }
            GamePhase::Playing => {}
        }
    }

    fn begin_round(&mut self) {
        self.rounds_started += 1;
        self.phase = GamePhase::Playing;
        log::info!("round {} started", self.rounds_started);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_game_waits_on_title() {
        let game = Game::new(Tuning::default(), Field::default(), 1).unwrap();
        assert_eq!(game.phase(), GamePhase::Start);
        assert_eq!(game.score(), 0);
        assert!(game.round().current.is_empty());
        assert!(game.round().next.is_empty());
        assert_eq!(game.player().kind, EntityKind::Player);
        assert_eq!(game.rounds_started(), 0);
    }

    #[test]
    fn test_player_starts_lower_left() {
        let tuning = Tuning::default();
        let game = Game::new(tuning.clone(), Field::default(), 1).unwrap();
        let expected = tuning.player_extent + Vec2::splat(25.0);
        assert_eq!(game.player().pos, expected);
        assert_eq!(game.player().half_extent, tuning.player_extent);
    }

    #[test]
    fn test_confirm_transitions() {
        let mut game = Game::new(Tuning::default(), Field::default(), 1).unwrap();
        game.confirm();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.rounds_started(), 1);

        // Confirm while playing changes nothing
        game.round_mut().score = 7;
        game.confirm();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.score(), 7);
        assert_eq!(game.rounds_started(), 1);
    }

    #[test]
    fn test_restart_discards_round() {
        let mut game = Game::new(Tuning::default(), Field::default(), 1).unwrap();
        game.confirm();
        let start = game.player().pos;
        {
            let round = game.round_mut();
            round.score = 12;
            round.player.pos = Vec2::new(600.0, 600.0);
            round.current.enemies.push(Entity::new(
                EntityKind::Enemy,
                Vec2::new(300.0, 300.0),
                Vec2::ONE,
            ));
            round
                .enemy_missiles
                .push(Entity::new(EntityKind::EnemyMissile, Vec2::ZERO, Vec2::ONE));
        }
        game.phase = GamePhase::GameOver;

        game.confirm();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.player().pos, start);
        assert!(game.round().current.enemies.is_empty());
        assert!(game.round().enemy_missiles.is_empty());
        assert_eq!(game.rounds_started(), 2);
    }

    #[test]
    fn test_swap_states_empties_next() {
        let mut round = Round::new(&Tuning::default(), &Field::default());
        round.next.enemies.push(Entity::new(EntityKind::Enemy, Vec2::ZERO, Vec2::ONE));
        round.swap_states();
        assert_eq!(round.current.enemies.len(), 1);
        assert!(round.next.is_empty());
    }

    #[test]
    fn test_bad_tuning_is_rejected_on_construction() {
        let no_roll = Tuning {
            enemy_fire_roll: 0,
            ..Tuning::default()
        };
        assert!(matches!(
            Game::new(no_roll, Field::default(), 1),
            Err(ConfigError::NoFireRoll)
        ));

        let frozen = Tuning {
            enemy_speed: f32::NAN,
            ..Tuning::default()
        };
        assert!(matches!(
            Game::with_rng(frozen, Field::default(), Pcg32::seed_from_u64(1)),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_banners() {
        assert_eq!(GamePhase::Start.banner().len(), 3);
        assert!(GamePhase::Playing.banner().is_empty());
        assert_eq!(GamePhase::GameOver.banner()[0], "GAME OVER");
    }
}
