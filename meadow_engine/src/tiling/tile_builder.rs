/// Load-time partitioning of instance arrays into ground tiles.
///
/// Tiles are visited in row-major order (`tile_x` outer, `tile_y` inner).
/// For each tile every not-yet-assigned source instance whose ground
/// position lies strictly inside the tile cell is appended to the output
/// buffer, so the output ends up grouped by tile while every instance keeps
/// its own position/rotation pair.
///
/// Instances exactly on a cell edge (or outside the field) belong to no
/// tile and are not drawn. Their output slots stay zeroed at the end of
/// the buffer.
///
/// Cost is O(tesselation² × instances), paid once per species at load.

use glam::Vec3;
use crate::camera::BoundingBox;
use crate::error::{log_and_return_error, Result};
use super::instance_data::InstanceData;
use super::tile::Tile;
use super::tiled_instance_set::TiledInstanceSet;
use super::tiling_config::TilingConfig;

const LOG_SOURCE: &str = "meadow::TileBuilder";

/// Builds `TiledInstanceSet`s for one tile grid.
#[derive(Debug, Clone)]
pub struct InstanceTileBuilder {
    config: TilingConfig,
}

impl InstanceTileBuilder {
    pub fn new(config: TilingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// Partition `source` into tiles. Deterministic; `source` is not modified.
    pub fn build(&self, source: &InstanceData) -> Result<TiledInstanceSet> {
        self.config
            .validate()
            .map_err(|e| log_and_return_error(LOG_SOURCE, e))?;

        let tile_size = self.config.tile_size();
        let half_size = self.config.half_size();
        let instance_count = source.instance_count();

        let mut reordered = InstanceData::zeroed(instance_count);
        let mut assigned = vec![false; instance_count];
        let mut tiles = Vec::with_capacity(self.config.tile_count());
        let mut cursor = 0usize;

        for tile_x in 0..self.config.tesselation {
            for tile_y in 0..self.config.tesselation {
                let min = Vec3::new(
                    tile_x as f32 * tile_size - half_size,
                    tile_y as f32 * tile_size - half_size,
                    0.0,
                );
                let internal = BoundingBox::new(min, min + Vec3::new(tile_size, tile_size, 0.0));
                let offset = cursor;

                for (index, taken) in assigned.iter_mut().enumerate() {
                    if *taken {
                        continue;
                    }
                    let [x, y, _] = source.position(index);
                    if internal.contains_xy_strict(x, y) {
                        reordered.copy_instance(cursor, source, index);
                        *taken = true;
                        cursor += 1;
                    }
                }

                tiles.push(Tile {
                    grid: (tile_x, tile_y),
                    bounding_box_internal: internal,
                    bounding_box: internal.padded(self.config.padding),
                    instances_offset: offset as u32,
                    instances_count: (cursor - offset) as u32,
                });
            }
        }

        let dropped = instance_count - cursor;
        crate::engine_debug!(
            LOG_SOURCE,
            "Tiled {} instances into {} tiles ({}x{}, tile size {:.2})",
            cursor,
            tiles.len(),
            self.config.tesselation,
            self.config.tesselation,
            tile_size
        );
        if dropped > 0 {
            crate::engine_warn!(
                LOG_SOURCE,
                "{} of {} instances lie on a tile edge or outside the field and will not be drawn",
                dropped,
                instance_count
            );
        }

        Ok(TiledInstanceSet::new(self.config, tiles, reordered, dropped))
    }
}

#[cfg(test)]
#[path = "tile_builder_tests.rs"]
mod tests;
