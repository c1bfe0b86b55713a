//! Collision primitives for axis-aligned sprite bounds
//!
//! Every entity collides as the rectangle its sprite covers. The only subtle
//! part is how edge contact is classified, which is controlled by
//! [`OverlapRule`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Raw intersection of two rectangles
    ///
    /// Not clamped: a negative width or height means the rectangles are
    /// separated along that axis by that distance.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}

/// How an intersection is classified as a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapRule {
    /// Any contact except a bare corner counts: rectangles sharing an edge
    /// segment collide even though the shared area is zero.
    #[default]
    Permissive,
    /// Only an intersection with positive width and height counts
    Strict,
}

impl OverlapRule {
    /// Classify an intersection of the given (unclamped) extent
    #[inline]
    pub fn is_hit(self, width: f32, height: f32) -> bool {
        match self {
            OverlapRule::Permissive => {
                if width < 0.0 || height < 0.0 {
                    return false;
                }
                !(width == 0.0 && height == 0.0)
            }
            OverlapRule::Strict => width > 0.0 && height > 0.0,
        }
    }
}

/// Bounds of an entity: centered on its position, `2 * half_extent` in size
#[inline]
pub fn bounds_of(entity: &Entity) -> Rect {
    entity.bounds()
}

/// Whether two entities collide under `rule`
pub fn overlaps(a: &Entity, b: &Entity, rule: OverlapRule) -> bool {
    let hit = bounds_of(a).intersect(&bounds_of(b));
    rule.is_hit(hit.width(), hit.height())
}

/// Whether `entity` collides with at least one of `others`
pub fn any_overlap(entity: &Entity, others: &[Entity], rule: OverlapRule) -> bool {
    others.iter().any(|other| overlaps(other, entity, rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EntityKind;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, hw: f32, hh: f32) -> Entity {
        Entity::new(EntityKind::Enemy, Vec2::new(x, y), Vec2::new(hw, hh))
    }

    #[test]
    fn test_overlapping_area_hits_under_both_rules() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(15.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b, OverlapRule::Permissive));
        assert!(overlaps(&a, &b, OverlapRule::Strict));
    }

    #[test]
    fn test_separated_boxes_miss() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        // Apart on x, aligned on y
        let b = boxed(30.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b, OverlapRule::Permissive));
        assert!(!overlaps(&a, &b, OverlapRule::Strict));
    }

    #[test]
    fn test_shared_edge_is_hit_only_when_permissive() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(20.0, 0.0, 10.0, 10.0);
        let hit = a.bounds().intersect(&b.bounds());
        assert_eq!(hit.width(), 0.0);
        assert_eq!(hit.height(), 20.0);

        assert!(overlaps(&a, &b, OverlapRule::Permissive));
        assert!(!overlaps(&a, &b, OverlapRule::Strict));
    }

    #[test]
    fn test_shared_corner_is_never_a_hit() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(20.0, 20.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b, OverlapRule::Permissive));
        assert!(!overlaps(&a, &b, OverlapRule::Strict));
    }

    #[test]
    fn test_contained_box_hits() {
        let outer = boxed(0.0, 0.0, 50.0, 50.0);
        let inner = boxed(5.0, -5.0, 2.0, 2.0);
        assert!(overlaps(&outer, &inner, OverlapRule::Strict));
    }

    #[test]
    fn test_any_overlap() {
        let ship = boxed(100.0, 100.0, 5.0, 5.0);
        let far = boxed(0.0, 0.0, 5.0, 5.0);
        let near = boxed(104.0, 98.0, 5.0, 5.0);
        assert!(!any_overlap(&ship, &[], OverlapRule::Permissive));
        assert!(!any_overlap(&ship, &[far], OverlapRule::Permissive));
        assert!(any_overlap(&ship, &[far, near], OverlapRule::Permissive));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.5f32..80.0, ah in 0.5f32..80.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.5f32..80.0, bh in 0.5f32..80.0,
            strict in any::<bool>(),
        ) {
            let rule = if strict { OverlapRule::Strict } else { OverlapRule::Permissive };
            let a = boxed(ax, ay, aw, ah);
            let b = boxed(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b, rule), overlaps(&b, &a, rule));
        }

        #[test]
        fn strict_hit_implies_permissive_hit(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
        ) {
            let a = boxed(ax, ay, 20.0, 10.0);
            let b = boxed(bx, by, 15.0, 25.0);
            if overlaps(&a, &b, OverlapRule::Strict) {
                prop_assert!(overlaps(&a, &b, OverlapRule::Permissive));
            }
        }
    }
}
