/// One ground cell of a tiled instance set.

use std::ops::Range;
use crate::camera::BoundingBox;

/// A spatial grid cell and the contiguous run of instances it owns in the
/// reordered instance buffer. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Grid coordinates (tile_x, tile_y)
    pub grid: (u32, u32),
    /// Exact partition cell (z in [0, 0])
    pub bounding_box_internal: BoundingBox,
    /// Cell padded for conservative culling
    pub bounding_box: BoundingBox,
    /// First instance of this tile in the reordered buffer
    pub instances_offset: u32,
    /// Instances strictly inside `bounding_box_internal`
    pub instances_count: u32,
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        self.instances_count == 0
    }

    /// Instance index range owned by this tile.
    pub fn instance_range(&self) -> Range<u32> {
        self.instances_offset..self.instances_offset + self.instances_count
    }

    /// Instances drawn at `density`: `round(instances_count * density)`,
    /// with `density` clamped to [0, 1]. The drawn instances are always a
    /// prefix of `instance_range()`.
    pub fn drawn_instance_count(&self, density: f32) -> u32 {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        (self.instances_count as f32 * density).round() as u32
    }
}

#[cfg(test)]
#[path = "tile_tests.rs"]
mod tests;
