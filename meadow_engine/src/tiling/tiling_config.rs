/// Tile grid parameters shared by every species of a field.

use glam::Vec3;
use crate::error::{Error, Result};

/// Tile grid configuration
///
/// The grid is `tesselation × tesselation` square cells covering a
/// `world_size × world_size` field centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingConfig {
    /// Grid side count (tiles = tesselation²)
    pub tesselation: u32,
    /// Side length of the whole square field
    pub world_size: f32,
    /// Culling box margins: `x` on both sides in X and Y, `z` above the ground
    pub padding: Vec3,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            tesselation: 4,
            world_size: 400.0,
            padding: Vec3::new(5.0, 5.0, 2.0),
        }
    }
}

impl TilingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tesselation == 0 {
            return Err(Error::InvalidConfig("tesselation must be at least 1".to_string()));
        }
        if !(self.world_size > 0.0 && self.world_size.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "world size must be positive, got {}",
                self.world_size
            )));
        }
        if !self.padding.is_finite() {
            return Err(Error::InvalidConfig("padding must be finite".to_string()));
        }
        Ok(())
    }

    /// Side length of one tile.
    pub fn tile_size(&self) -> f32 {
        self.world_size / self.tesselation as f32
    }

    pub fn half_size(&self) -> f32 {
        self.world_size / 2.0
    }

    /// Total number of tiles (tesselation²).
    pub fn tile_count(&self) -> usize {
        (self.tesselation as usize) * (self.tesselation as usize)
    }

    /// Row-major tile index (`tile_x` outer).
    pub fn tile_index(&self, tile_x: u32, tile_y: u32) -> usize {
        tile_x as usize * self.tesselation as usize + tile_y as usize
    }
}

#[cfg(test)]
#[path = "tiling_config_tests.rs"]
mod tests;
