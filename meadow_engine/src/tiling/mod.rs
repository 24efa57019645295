//! Instance tiling module
//!
//! Partitions a species' flat per-instance attribute array into a grid of
//! ground tiles at load time, then culls and draws it tile by tile.

mod tiling_config;
mod instance_data;
mod tile;
mod culling_state;
mod tile_builder;
mod tiled_instance_set;

pub use tiling_config::TilingConfig;
pub use instance_data::{InstanceData, InstancePlacement, FLOATS_PER_INSTANCE, FLOATS_PER_TRIPLET};
pub use tile::Tile;
pub use culling_state::CullingState;
pub use tile_builder::InstanceTileBuilder;
pub use tiled_instance_set::TiledInstanceSet;
