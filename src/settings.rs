//! Game settings
//!
//! User-editable JSON, validated into `Field` + `Tuning` before a game is
//! created. Missing keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;
use crate::sim::{OverlapRule, SpriteSize};
use crate::tuning::{Field, Tuning, check_positive};

/// Game settings as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Session seed for spawns and enemy fire
    pub seed: u64,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub padding: f32,

    // === Balance ===
    /// Enemies kept on the field at once
    pub enemy_count: usize,
    pub enemy_speed: f32,
    pub missile_speed: f32,
    pub enemy_missile_speed_factor: f32,
    pub player_speed: f32,
    /// Enemy fire chance per tick, in units of 1/10000 (0 disables enemy fire)
    pub enemy_fire_threshold: u32,

    // === Sprites ===
    pub sprite_scale: f32,
    pub player_sprite: SpriteSize,
    pub enemy_sprite: SpriteSize,
    pub missile_sprite: SpriteSize,

    // === Collisions ===
    pub overlap_rule: OverlapRule,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            padding: PADDING,

            enemy_count: MAX_ENEMIES,
            enemy_speed: ENEMY_SPEED,
            missile_speed: MISSILE_SPEED,
            enemy_missile_speed_factor: ENEMY_MISSILE_SPEED_FACTOR,
            player_speed: PLAYER_SPEED,
            enemy_fire_threshold: ENEMY_FIRE_THRESHOLD,

            sprite_scale: SPRITE_SCALE,
            player_sprite: PLAYER_SPRITE.into(),
            enemy_sprite: ENEMY_SPRITE.into(),
            missile_sprite: MISSILE_SPRITE.into(),

            overlap_rule: OverlapRule::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value and build what the simulation runs on
    pub fn validate(&self) -> Result<(Tuning, Field)> {
        let field = Field::new(self.field_width, self.field_height, self.padding)?;

        check_positive("sprite scale", self.sprite_scale)?;
        for (name, sprite) in [
            ("player sprite", self.player_sprite),
            ("enemy sprite", self.enemy_sprite),
            ("missile sprite", self.missile_sprite),
        ] {
            check_positive(name, sprite.width)?;
            check_positive(name, sprite.height)?;
        }

        let tuning = Tuning {
            enemy_target: self.enemy_count,
            enemy_speed: self.enemy_speed,
            missile_speed: self.missile_speed,
            enemy_missile_speed_factor: self.enemy_missile_speed_factor,
            player_speed: self.player_speed,
            player_extent: self.player_sprite.half_extent(self.sprite_scale),
            enemy_extent: self.enemy_sprite.half_extent(self.sprite_scale),
            missile_extent: self.missile_sprite.half_extent(self.sprite_scale),
            overlap: self.overlap_rule,
            enemy_fire_roll: ENEMY_FIRE_ROLL,
            enemy_fire_threshold: self.enemy_fire_threshold,
        };
        tuning.validate()?;
        Ok((tuning, field))
    }
}
