/// Instanced draw strategies.
///
/// The tiling core only needs one capability from a shader: draw a
/// contiguous range of instances of a model. Concrete shader variants
/// (grass, flowers, insects...) implement `InstancedShader` and decide
/// what they bind and push around the draw.

use glam::Mat4;
use crate::camera::Camera;
use crate::error::Result;
use super::command_list::CommandList;
use super::instanced_model::InstancedModel;

/// Byte offset of the view-projection matrix in the push constant range
pub const PUSH_VIEW_PROJECTION_OFFSET: u32 = 0;
/// Byte offset of the model matrix in the push constant range
pub const PUSH_MODEL_OFFSET: u32 = 64;

/// Capability to draw ranges of instances, one draw call each.
///
/// `begin` records the per-species state (model, matrices) once; each
/// `draw_instanced` then only changes the instance range. `&self` because
/// drawing is stateless: the same shader can be reused across species and
/// frames.
pub trait InstancedShader: Send + Sync {
    /// Bind `model` and everything constant across its tiles for `camera`.
    fn begin(&self, cmd: &mut dyn CommandList, model: &InstancedModel, camera: &Camera) -> Result<()>;

    /// Draw instances `[instance_offset, instance_offset + instance_count)`
    /// of the bound instance texture. Requires a prior `begin` with `model`.
    fn draw_instanced(
        &self,
        cmd: &mut dyn CommandList,
        model: &InstancedModel,
        instance_offset: u32,
        instance_count: u32,
    ) -> Result<()>;
}

/// Default vegetation shader: `begin` binds the model and pushes the
/// View-Projection + Model matrices; each draw sets the instance offset
/// and issues one indexed instanced draw.
#[derive(Debug, Clone)]
pub struct VegetationShader {
    model_matrix: Mat4,
}

impl VegetationShader {
    pub fn new() -> Self {
        Self { model_matrix: Mat4::IDENTITY }
    }

    /// Field placement in the world (identity by default).
    pub fn with_model_matrix(mut self, model_matrix: Mat4) -> Self {
        self.model_matrix = model_matrix;
        self
    }

    pub fn model_matrix(&self) -> &Mat4 {
        &self.model_matrix
    }
}

impl Default for VegetationShader {
    fn default() -> Self {
        Self::new()
    }
}

impl InstancedShader for VegetationShader {
    fn begin(&self, cmd: &mut dyn CommandList, model: &InstancedModel, camera: &Camera) -> Result<()> {
        let view_proj = camera.view_projection_matrix();

        cmd.bind_model(model)?;
        cmd.push_constants(PUSH_VIEW_PROJECTION_OFFSET, bytemuck::bytes_of(&view_proj))?;
        cmd.push_constants(PUSH_MODEL_OFFSET, bytemuck::bytes_of(&self.model_matrix))
    }

    fn draw_instanced(
        &self,
        cmd: &mut dyn CommandList,
        model: &InstancedModel,
        instance_offset: u32,
        instance_count: u32,
    ) -> Result<()> {
        cmd.set_instance_offset(instance_offset)?;
        cmd.draw_indexed_instanced(model.index_count, instance_count)
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
