/// Per-instance attribute texture, the GPU upload format of a tiled set.
///
/// `width = instance_count`, `height = 2`, one RGB32F texel per instance
/// per row:
/// - row 0: `(x, y, scale)`
/// - row 1: `(sin θ, cos θ, 0)`
///
/// Texel column `i` is instance `i` of the reordered buffer, so a tile's
/// `instances_offset` is directly the column a draw starts reading at.

use crate::tiling::{TiledInstanceSet, FLOATS_PER_TRIPLET};

/// Components per texel (RGB32F)
pub const INSTANCE_TEXEL_COMPONENTS: usize = FLOATS_PER_TRIPLET;

/// Rows of the instance texture
pub const INSTANCE_TEXTURE_ROWS: u32 = 2;

/// CPU copy of a read-only instance texture, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceTexture {
    name: String,
    width: u32,
    texels: Vec<f32>,
}

impl InstanceTexture {
    /// Build the texture for `set`. Uploaded once at load time.
    pub fn from_set(name: impl Into<String>, set: &TiledInstanceSet) -> Self {
        Self {
            name: name.into(),
            width: set.instance_count() as u32,
            // Row-major rows match the position-half / rotation-half layout
            texels: set.instances().as_slice().to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        INSTANCE_TEXTURE_ROWS
    }

    /// Texel at column `x`, row `y`.
    pub fn texel(&self, x: u32, y: u32) -> [f32; 3] {
        let base = (y as usize * self.width as usize + x as usize) * INSTANCE_TEXEL_COMPONENTS;
        [self.texels[base], self.texels[base + 1], self.texels[base + 2]]
    }

    pub fn texels(&self) -> &[f32] {
        &self.texels
    }

    /// Raw upload bytes, rows tightly packed.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Bytes per row.
    pub fn row_pitch(&self) -> usize {
        self.width as usize * INSTANCE_TEXEL_COMPONENTS * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
#[path = "instance_texture_tests.rs"]
mod tests;
