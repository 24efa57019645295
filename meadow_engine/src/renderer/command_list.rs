/// CommandList trait - for recording instanced draw commands

use std::ops::AddAssign;
use crate::error::Result;
use super::instanced_model::InstancedModel;
use super::instance_texture::InstanceTexture;

/// Command list for recording instanced vegetation draws
///
/// Implemented by graphics backends. Every method may fail with
/// `Error::BackendError`, which the tiling core propagates as-is.
pub trait CommandList: Send + Sync {
    /// Bind the GPU-resident geometry of an instanced model
    fn bind_model(&mut self, model: &InstancedModel) -> Result<()>;

    /// Bind the per-instance attribute texture uploaded at load time
    fn bind_instance_texture(&mut self, texture: &InstanceTexture) -> Result<()>;

    /// Push constants to the bound pipeline
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset in bytes into the push constant range
    /// * `data` - Data to push
    fn push_constants(&mut self, offset: u32, data: &[u8]) -> Result<()>;

    /// Set the "position offset" uniform: the first texel column read by
    /// the next instanced draw
    fn set_instance_offset(&mut self, offset: u32) -> Result<()>;

    /// Draw `instance_count` instances of the bound model
    ///
    /// # Arguments
    ///
    /// * `index_count` - Number of indices per instance
    /// * `instance_count` - Number of instances, read from the instance
    ///   texture starting at the current instance offset
    fn draw_indexed_instanced(&mut self, index_count: u32, instance_count: u32) -> Result<()>;
}

/// Draw statistics for one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Instanced draw calls issued
    pub draw_calls: u32,
    /// Instances drawn over all calls
    pub instances: u32,
    /// Non-empty tiles skipped because they were culled
    pub culled_tiles: u32,
}

impl AddAssign for DrawStats {
    fn add_assign(&mut self, other: DrawStats) {
        self.draw_calls += other.draw_calls;
        self.instances += other.instances;
        self.culled_tiles += other.culled_tiles;
    }
}
