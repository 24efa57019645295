use glam::Vec3;
use super::*;

fn create_test_tile(offset: u32, count: u32) -> Tile {
    let internal = BoundingBox::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(100.0, 100.0, 0.0));
    Tile {
        grid: (2, 2),
        bounding_box_internal: internal,
        bounding_box: internal.padded(Vec3::new(5.0, 5.0, 2.0)),
        instances_offset: offset,
        instances_count: count,
    }
}

// ============================================================================
// Ranges
// ============================================================================

#[test]
fn test_instance_range() {
    let tile = create_test_tile(12, 5);
    assert_eq!(tile.instance_range(), 12..17);
    assert!(!tile.is_empty());
}

#[test]
fn test_empty_tile() {
    let tile = create_test_tile(40, 0);
    assert!(tile.is_empty());
    assert!(tile.instance_range().is_empty());
}

// ============================================================================
// drawn_instance_count
// ============================================================================

#[test]
fn test_density_endpoints() {
    let tile = create_test_tile(0, 37);
    assert_eq!(tile.drawn_instance_count(0.0), 0);
    assert_eq!(tile.drawn_instance_count(1.0), 37);
}

#[test]
fn test_density_rounds_to_nearest() {
    let tile = create_test_tile(0, 10);
    assert_eq!(tile.drawn_instance_count(0.24), 2);
    assert_eq!(tile.drawn_instance_count(0.26), 3);
    assert_eq!(tile.drawn_instance_count(0.5), 5);
}

#[test]
fn test_density_is_monotonic() {
    let tile = create_test_tile(0, 339);
    let mut previous = 0;
    for step in 0..=100 {
        let count = tile.drawn_instance_count(step as f32 / 100.0);
        assert!(count >= previous, "count decreased at density {}", step);
        assert!(count <= tile.instances_count);
        previous = count;
    }
}

#[test]
fn test_density_out_of_range_is_clamped() {
    let tile = create_test_tile(0, 8);
    assert_eq!(tile.drawn_instance_count(-1.0), 0);
    assert_eq!(tile.drawn_instance_count(3.0), 8);
    assert_eq!(tile.drawn_instance_count(f32::NAN), 0);
}

#[test]
fn test_small_density_on_small_tile_rounds_to_zero() {
    let tile = create_test_tile(0, 1);
    assert_eq!(tile.drawn_instance_count(0.4), 0);
    assert_eq!(tile.drawn_instance_count(0.5), 1);
}
