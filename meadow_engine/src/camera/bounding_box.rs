/// Axis-aligned bounding box in world space.
///
/// Tiles carry two of them: the exact partition cell used to assign
/// instances, and a padded copy used for conservative frustum culling.

use glam::Vec3;

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The 8 corners, min corner first, max corner last.
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Culling box for a ground tile.
    ///
    /// Grows by `padding.x` on both sides in X and in Y, and by `padding.z`
    /// on the Z-max side only (vegetation grows up from the ground plane).
    /// `padding.y` is not read.
    pub fn padded(&self, padding: Vec3) -> BoundingBox {
        BoundingBox {
            min: Vec3::new(self.min.x - padding.x, self.min.y - padding.x, self.min.z),
            max: Vec3::new(self.max.x + padding.x, self.max.y + padding.x, self.max.z + padding.z),
        }
    }

    /// Strict inclusion of a ground position: points on an edge are outside.
    pub fn contains_xy_strict(&self, x: f32, y: f32) -> bool {
        x > self.min.x && x < self.max.x && y > self.min.y && y < self.max.y
    }

    /// Test if this box fully contains another box.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this box intersects (overlaps or touches) another box.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
