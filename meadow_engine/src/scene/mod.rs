//! Scene management module
//!
//! Groups the tiled vegetation species of a field and runs their
//! per-frame culling and drawing.

mod vegetation_field;

pub use vegetation_field::{FieldConfig, Species, VegetationField};
