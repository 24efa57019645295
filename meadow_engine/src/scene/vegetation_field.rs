/// Vegetation field: every tiled species of one ground area.
///
/// Built during the application's load phase and owned by the caller
/// (no process-wide tile tables). All species share one tile grid, so a
/// single culling pass per frame serves every species.

use rustc_hash::FxHashMap;
use crate::camera::{Camera, FrustumVisibilityTester};
use crate::error::{log_and_return_error, Error, Result};
use crate::renderer::{CommandList, DrawStats, InstanceTexture, InstancedModel, InstancedShader};
use crate::tiling::{CullingState, InstanceData, InstanceTileBuilder, TiledInstanceSet, TilingConfig};

const LOG_SOURCE: &str = "meadow::Field";

/// Field configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Tile grid shared by every species
    pub tiling: TilingConfig,
    /// Fraction of each tile's instances drawn, in [0, 1]
    pub density: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            tiling: TilingConfig::default(),
            density: 1.0,
        }
    }
}

/// One vegetation species: its tiled instances, their GPU upload and the
/// model drawn for each instance.
#[derive(Debug, Clone)]
pub struct Species {
    name: String,
    set: TiledInstanceSet,
    texture: InstanceTexture,
    model: InstancedModel,
}

impl Species {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&self) -> &TiledInstanceSet {
        &self.set
    }

    pub fn texture(&self) -> &InstanceTexture {
        &self.texture
    }

    pub fn model(&self) -> &InstancedModel {
        &self.model
    }
}

/// Tiled species sharing one grid and one culling state.
pub struct VegetationField {
    builder: InstanceTileBuilder,
    density: f32,
    species: Vec<Species>,
    species_by_name: FxHashMap<String, usize>,
    culling: CullingState,
    tester: FrustumVisibilityTester,
}

impl VegetationField {
    pub fn new(config: FieldConfig) -> Result<Self> {
        config
            .tiling
            .validate()
            .map_err(|e| log_and_return_error(LOG_SOURCE, e))?;

        Ok(Self {
            builder: InstanceTileBuilder::new(config.tiling),
            density: clamp_density(config.density),
            species: Vec::new(),
            species_by_name: FxHashMap::default(),
            culling: CullingState::new(&config.tiling),
            tester: FrustumVisibilityTester::new(),
        })
    }

    /// Tile `data` and register it under `name`.
    pub fn add_species(&mut self, name: &str, data: &InstanceData, model: InstancedModel) -> Result<()> {
        if self.species_by_name.contains_key(name) {
            return Err(log_and_return_error(
                LOG_SOURCE,
                Error::InvalidConfig(format!("species '{}' already exists", name)),
            ));
        }

        let set = self.builder.build(data)?;
        let texture = InstanceTexture::from_set(name, &set);

        crate::engine_info!(
            LOG_SOURCE,
            "Species '{}' loaded: {} instances, {} drawable, texture {}x{}",
            name,
            set.instance_count(),
            set.placed_instance_count(),
            texture.width(),
            texture.height()
        );

        self.species_by_name.insert(name.to_string(), self.species.len());
        self.species.push(Species {
            name: name.to_string(),
            set,
            texture,
            model,
        });
        Ok(())
    }

    /// Cull once, then draw every species.
    ///
    /// For each species the instance texture is bound, then one instanced
    /// draw is issued per visible, non-empty tile.
    pub fn render_frame(
        &mut self,
        camera: &Camera,
        shader: &dyn InstancedShader,
        cmd: &mut dyn CommandList,
    ) -> Result<DrawStats> {
        let mut stats = DrawStats::default();
        let Some(first) = self.species.first() else {
            return Ok(stats);
        };

        // Every set shares the builder's grid, so one pass covers all
        first.set.mark_culling(&mut self.tester, camera, &mut self.culling)?;

        for species in &self.species {
            cmd.bind_instance_texture(&species.texture)?;
            stats += species.set.draw_visible(
                &self.culling,
                shader,
                &species.model,
                cmd,
                camera,
                self.density,
            )?;
        }
        Ok(stats)
    }

    // ===== GETTERS / SETTERS =====

    pub fn tiling(&self) -> &TilingConfig {
        self.builder.config()
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Set the draw density, clamped to [0, 1].
    pub fn set_density(&mut self, density: f32) {
        self.density = clamp_density(density);
    }

    pub fn species(&self, name: &str) -> Option<&Species> {
        self.species_by_name.get(name).map(|&index| &self.species[index])
    }

    pub fn species_list(&self) -> &[Species] {
        &self.species
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Culled flags from the last `render_frame`.
    pub fn culling(&self) -> &CullingState {
        &self.culling
    }
}

fn clamp_density(density: f32) -> f32 {
    if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "vegetation_field_tests.rs"]
mod tests;
