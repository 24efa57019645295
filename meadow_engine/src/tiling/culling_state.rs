/// Per-tile culled flags shared by tile sets of identical geometry.

use crate::error::{Error, Result};
use super::tiling_config::TilingConfig;

/// Culled flag per tile, overwritten in full by each visibility pass.
///
/// One state can serve several species as long as they were tiled with
/// the same `TilingConfig`: tile geometry, not content, decides
/// visibility. The geometry is recorded so a mismatched set is rejected
/// instead of silently reading another grid's flags.
#[derive(Debug, Clone, PartialEq)]
pub struct CullingState {
    config: TilingConfig,
    culled: Vec<bool>,
}

impl CullingState {
    /// All tiles start visible.
    pub fn new(config: &TilingConfig) -> Self {
        Self {
            config: *config,
            culled: vec![false; config.tile_count()],
        }
    }

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.culled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.culled.is_empty()
    }

    pub fn is_culled(&self, tile_index: usize) -> bool {
        self.culled[tile_index]
    }

    pub fn culled(&self) -> &[bool] {
        &self.culled
    }

    pub fn visible_count(&self) -> usize {
        self.culled.iter().filter(|&&c| !c).count()
    }

    pub fn culled_count(&self) -> usize {
        self.culled.len() - self.visible_count()
    }

    /// Fail unless this state was made for `config`'s tile grid.
    pub fn ensure_compatible(&self, config: &TilingConfig) -> Result<()> {
        if self.config != *config {
            return Err(Error::IncompatibleTileGeometry(format!(
                "culling state is for {}x{} tiles over {} units (padding {:?}), tile set is {}x{} over {} units (padding {:?})",
                self.config.tesselation, self.config.tesselation, self.config.world_size, self.config.padding,
                config.tesselation, config.tesselation, config.world_size, config.padding,
            )));
        }
        Ok(())
    }

    pub(crate) fn flags_mut(&mut self) -> &mut [bool] {
        &mut self.culled
    }
}

#[cfg(test)]
#[path = "culling_state_tests.rs"]
mod tests;
