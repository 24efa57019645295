/// Flat per-instance attribute arrays.
///
/// Layout for `n` instances (`6 * n` floats):
/// - `[0, 3n)`: `(x, y, scale)` triplets
/// - `[3n, 6n)`: `(sin θ, cos θ, 0)` triplets, index aligned with the first half
///
/// This is also the texel layout uploaded to the GPU (see `InstanceTexture`).

use crate::error::{Error, Result};

/// Floats in one position or rotation triplet
pub const FLOATS_PER_TRIPLET: usize = 3;
/// Floats per instance across both halves
pub const FLOATS_PER_INSTANCE: usize = 2 * FLOATS_PER_TRIPLET;

/// One instance before packing: ground position, scale and heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstancePlacement {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Heading around the up axis, radians
    pub angle: f32,
}

/// Instance attribute array in position-half / rotation-half layout.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceData {
    values: Vec<f32>,
}

impl InstanceData {
    /// Wrap an already packed array.
    pub fn new(values: Vec<f32>) -> Result<Self> {
        if values.len() % FLOATS_PER_INSTANCE != 0 {
            return Err(Error::InvalidInstanceData(format!(
                "length {} is not a multiple of {}",
                values.len(),
                FLOATS_PER_INSTANCE
            )));
        }
        Ok(Self { values })
    }

    /// Pack placements, precomputing the rotation half.
    pub fn from_placements(placements: &[InstancePlacement]) -> Self {
        let count = placements.len();
        let mut values = vec![0.0; count * FLOATS_PER_INSTANCE];
        let (positions, rotations) = values.split_at_mut(count * FLOATS_PER_TRIPLET);

        for (i, p) in placements.iter().enumerate() {
            let base = i * FLOATS_PER_TRIPLET;
            positions[base..base + FLOATS_PER_TRIPLET].copy_from_slice(&[p.x, p.y, p.scale]);
            rotations[base..base + FLOATS_PER_TRIPLET].copy_from_slice(&[p.angle.sin(), p.angle.cos(), 0.0]);
        }

        Self { values }
    }

    /// All-zero array for `count` instances.
    pub(crate) fn zeroed(count: usize) -> Self {
        Self { values: vec![0.0; count * FLOATS_PER_INSTANCE] }
    }

    pub fn instance_count(&self) -> usize {
        self.values.len() / FLOATS_PER_INSTANCE
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(x, y, scale)` of instance `index`.
    pub fn position(&self, index: usize) -> [f32; 3] {
        let base = index * FLOATS_PER_TRIPLET;
        [self.values[base], self.values[base + 1], self.values[base + 2]]
    }

    /// `(sin θ, cos θ, 0)` of instance `index`.
    pub fn rotation(&self, index: usize) -> [f32; 3] {
        let base = self.rotation_base() + index * FLOATS_PER_TRIPLET;
        [self.values[base], self.values[base + 1], self.values[base + 2]]
    }

    /// Copy both triplets of `source[from]` into slot `to`.
    pub(crate) fn copy_instance(&mut self, to: usize, source: &InstanceData, from: usize) {
        let dst = to * FLOATS_PER_TRIPLET;
        let src = from * FLOATS_PER_TRIPLET;
        self.values[dst..dst + FLOATS_PER_TRIPLET]
            .copy_from_slice(&source.values[src..src + FLOATS_PER_TRIPLET]);

        let dst = self.rotation_base() + dst;
        let src = source.rotation_base() + src;
        self.values[dst..dst + FLOATS_PER_TRIPLET]
            .copy_from_slice(&source.values[src..src + FLOATS_PER_TRIPLET]);
    }

    /// Position half.
    pub fn positions(&self) -> &[f32] {
        &self.values[..self.rotation_base()]
    }

    /// Rotation half.
    pub fn rotations(&self) -> &[f32] {
        &self.values[self.rotation_base()..]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }

    fn rotation_base(&self) -> usize {
        self.values.len() / 2
    }
}

#[cfg(test)]
#[path = "instance_data_tests.rs"]
mod tests;
