/// Runtime side of a tiled species: per-frame culling and drawing.

use crate::camera::{Camera, FrustumVisibilityTester};
use crate::error::Result;
use crate::renderer::{CommandList, DrawStats, InstancedModel, InstancedShader};
use super::culling_state::CullingState;
use super::instance_data::InstanceData;
use super::tile::Tile;
use super::tiling_config::TilingConfig;

/// Reordered instance buffer plus its tile table.
///
/// Built once by `InstanceTileBuilder`, read-only afterwards.
#[derive(Debug, Clone)]
pub struct TiledInstanceSet {
    config: TilingConfig,
    tiles: Vec<Tile>,
    instances: InstanceData,
    dropped: usize,
}

impl TiledInstanceSet {
    pub(crate) fn new(
        config: TilingConfig,
        tiles: Vec<Tile>,
        instances: InstanceData,
        dropped: usize,
    ) -> Self {
        Self { config, tiles, instances, dropped }
    }

    /// Run one visibility pass: `culled[i]` becomes whether tile `i`'s
    /// padded box is entirely outside the camera frustum.
    ///
    /// Overwrites every flag of `culling`. Call once per frame per camera,
    /// before `draw_visible`.
    pub fn mark_culling(
        &self,
        tester: &mut FrustumVisibilityTester,
        camera: &Camera,
        culling: &mut CullingState,
    ) -> Result<()> {
        culling.ensure_compatible(&self.config)?;

        for (flag, tile) in culling.flags_mut().iter_mut().zip(&self.tiles) {
            *flag = tester.is_box_culled(&tile.bounding_box, camera);
        }
        Ok(())
    }

    /// Issue one instanced draw per visible, non-empty tile.
    ///
    /// A tile draws the first `round(instances_count * density)` instances
    /// of its range; tiles where that count is 0 are skipped without a
    /// draw call, as are culled tiles. `shader.begin` runs once, before
    /// the first draw, and not at all when nothing is drawn.
    pub fn draw_visible(
        &self,
        culling: &CullingState,
        shader: &dyn InstancedShader,
        model: &InstancedModel,
        cmd: &mut dyn CommandList,
        camera: &Camera,
        density: f32,
    ) -> Result<DrawStats> {
        culling.ensure_compatible(&self.config)?;

        let mut stats = DrawStats::default();
        let mut begun = false;
        for (index, tile) in self.tiles.iter().enumerate() {
            let count = tile.drawn_instance_count(density);
            if count == 0 {
                continue;
            }
            if culling.is_culled(index) {
                stats.culled_tiles += 1;
                continue;
            }

            // Per-species state only once something is actually drawn
            if !begun {
                shader.begin(cmd, model, camera)?;
                begun = true;
            }
            shader.draw_instanced(cmd, model, tile.instances_offset, count)?;
            stats.draw_calls += 1;
            stats.instances += count;
        }

        crate::engine_trace!(
            "meadow::TiledInstanceSet",
            "{}: {} draws, {} instances, {} culled tiles",
            model.name,
            stats.draw_calls,
            stats.instances,
            stats.culled_tiles
        );
        Ok(stats)
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Reordered buffer, grouped by tile.
    pub fn instances(&self) -> &InstanceData {
        &self.instances
    }

    /// Length of the buffer, equal to the source instance count.
    pub fn instance_count(&self) -> usize {
        self.instances.instance_count()
    }

    /// Instances that belong to a tile.
    pub fn placed_instance_count(&self) -> usize {
        self.instance_count() - self.dropped
    }

    /// Instances on a tile edge or outside the field.
    pub fn dropped_instance_count(&self) -> usize {
        self.dropped
    }
}

#[cfg(test)]
#[path = "tiled_instance_set_tests.rs"]
mod tests;
