//! Passive entity data
//!
//! Entities know nothing about the collections that own them. Removing an
//! entity means leaving it out of the next world state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spatial::Rect;

/// What an entity is, which decides how it moves and what it collides with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    PlayerMissile,
    EnemyMissile,
}

impl EntityKind {
    pub fn is_missile(self) -> bool {
        matches!(self, EntityKind::PlayerMissile | EntityKind::EnemyMissile)
    }
}

/// A sprite-backed entity in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Center position
    pub pos: Vec2,
    /// Half the drawn sprite size, fixed at creation
    pub half_extent: Vec2,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(kind: EntityKind, pos: Vec2, half_extent: Vec2) -> Self {
        Self {
            pos,
            half_extent,
            kind,
        }
    }

    /// Axis-aligned bounds centered on `pos`
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.half_extent)
    }
}

/// Source sprite size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: f32,
    pub height: f32,
}

impl SpriteSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half extent of the sprite once drawn at `scale`
    pub fn half_extent(&self, scale: f32) -> Vec2 {
        Vec2::new(self.width, self.height) * scale * 0.5
    }
}

impl From<(f32, f32)> for SpriteSize {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}
