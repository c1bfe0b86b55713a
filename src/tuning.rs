//! Data-driven game balance
//!
//! `Field` and `Tuning` are what the simulation runs on. `Field` can only be
//! built through its checks; `Tuning` is checked by `Game` on construction,
//! so nothing inside a tick re-checks either.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::error::{ConfigError, Result};
use crate::sim::{OverlapRule, SpriteSize};

/// Play field bounds, with the padding kept clear around the edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Field {
    width: f32,
    height: f32,
    padding: f32,
}

impl Field {
    /// Validate field dimensions
    ///
    /// The field must be finite and leave a non-empty band inside the padding
    /// on both axes, otherwise spawn ranges and the player clamp collapse.
    pub fn new(width: f32, height: f32, padding: f32) -> Result<Self> {
        check_finite("field width", width)?;
        check_finite("field height", height)?;
        check_finite("padding", padding)?;
        if padding < 0.0 {
            return Err(ConfigError::NegativePadding(padding));
        }
        if width <= 2.0 * padding || height <= 2.0 * padding {
            return Err(ConfigError::FieldTooSmall {
                width,
                height,
                padding,
            });
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Lowest position the player may occupy
    pub fn min_player_pos(&self) -> Vec2 {
        Vec2::splat(self.padding)
    }

    /// Highest position the player may occupy
    pub fn max_player_pos(&self) -> Vec2 {
        Vec2::new(self.width - self.padding, self.height - self.padding)
    }

    /// Clamp a point into the padded field
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(self.min_player_pos(), self.max_player_pos())
    }

    /// Spawn band just past the right edge: `(x range, y range)`
    pub fn staging_band(&self) -> ((f32, f32), (f32, f32)) {
        (
            (self.width + self.padding, 2.0 * self.width - self.padding),
            (self.padding, self.height - self.padding),
        )
    }
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            padding: PADDING,
        }
    }
}

/// Per-tick rules of the game, checked by [`Tuning::validate`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tuning {
    /// Enemies kept alive each tick
    pub enemy_target: usize,
    pub enemy_speed: f32,
    pub missile_speed: f32,
    pub enemy_missile_speed_factor: f32,
    pub player_speed: f32,
    pub player_extent: Vec2,
    pub enemy_extent: Vec2,
    pub missile_extent: Vec2,
    pub overlap: OverlapRule,
    pub enemy_fire_roll: u32,
    pub enemy_fire_threshold: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_target: MAX_ENEMIES,
            enemy_speed: ENEMY_SPEED,
            missile_speed: MISSILE_SPEED,
            enemy_missile_speed_factor: ENEMY_MISSILE_SPEED_FACTOR,
            player_speed: PLAYER_SPEED,
            player_extent: SpriteSize::from(PLAYER_SPRITE).half_extent(SPRITE_SCALE),
            enemy_extent: SpriteSize::from(ENEMY_SPRITE).half_extent(SPRITE_SCALE),
            missile_extent: SpriteSize::from(MISSILE_SPRITE).half_extent(SPRITE_SCALE),
            overlap: OverlapRule::default(),
            enemy_fire_roll: ENEMY_FIRE_ROLL,
            enemy_fire_threshold: ENEMY_FIRE_THRESHOLD,
        }
    }
}

impl Tuning {
    /// Velocity applied each tick to an enemy missile
    pub fn enemy_missile_speed(&self) -> f32 {
        self.missile_speed * self.enemy_missile_speed_factor
    }

    /// Reject values that would stall, panic or poison positions mid-round
    ///
    /// A player speed of zero is allowed (stationary turret).
    pub fn validate(&self) -> Result<()> {
        if self.enemy_target == 0 {
            return Err(ConfigError::NoEnemies);
        }
        check_positive("enemy speed", self.enemy_speed)?;
        check_positive("missile speed", self.missile_speed)?;
        check_positive("enemy missile speed factor", self.enemy_missile_speed_factor)?;
        check_finite("player speed", self.player_speed)?;
        if self.player_speed < 0.0 {
            return Err(ConfigError::NotPositive {
                name: "player speed",
                value: self.player_speed,
            });
        }
        for (name, extent) in [
            ("player extent", self.player_extent),
            ("enemy extent", self.enemy_extent),
            ("missile extent", self.missile_extent),
        ] {
            check_positive(name, extent.x)?;
            check_positive(name, extent.y)?;
        }
        if self.enemy_fire_roll == 0 {
            return Err(ConfigError::NoFireRoll);
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<()> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
