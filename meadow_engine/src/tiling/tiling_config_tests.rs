use glam::Vec3;
use super::*;

// ============================================================================
// Defaults and derived sizes
// ============================================================================

#[test]
fn test_default_config() {
    let config = TilingConfig::default();
    assert_eq!(config.tesselation, 4);
    assert_eq!(config.world_size, 400.0);
    assert_eq!(config.padding, Vec3::new(5.0, 5.0, 2.0));
    assert!(config.validate().is_ok());
}

#[test]
fn test_derived_sizes() {
    let config = TilingConfig { tesselation: 8, world_size: 200.0, ..Default::default() };
    assert_eq!(config.tile_size(), 25.0);
    assert_eq!(config.half_size(), 100.0);
    assert_eq!(config.tile_count(), 64);
}

#[test]
fn test_tile_index_is_row_major_x_outer() {
    let config = TilingConfig::default();
    assert_eq!(config.tile_index(0, 0), 0);
    assert_eq!(config.tile_index(0, 3), 3);
    assert_eq!(config.tile_index(1, 0), 4);
    assert_eq!(config.tile_index(3, 3), 15);
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_zero_tesselation_rejected() {
    let config = TilingConfig { tesselation: 0, ..Default::default() };
    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_non_positive_world_size_rejected() {
    for world_size in [0.0, -10.0, f32::NAN, f32::INFINITY] {
        let config = TilingConfig { world_size, ..Default::default() };
        assert!(config.validate().is_err(), "world_size {} accepted", world_size);
    }
}

#[test]
fn test_non_finite_padding_rejected() {
    let config = TilingConfig { padding: Vec3::new(f32::NAN, 0.0, 0.0), ..Default::default() };
    assert!(config.validate().is_err());
}
