use glam::{Mat4, Vec3};
use crate::error::Error;
use crate::renderer::VegetationShader;
use crate::renderer::mock_command_list::{MockCommandList, RecordedCommand};
use crate::tiling::{InstancePlacement, InstanceTileBuilder};
use super::*;

/// `per_tile` instances in every tile of the default 4x4 grid.
fn create_test_set(per_tile: usize) -> TiledInstanceSet {
    let mut placements = Vec::new();
    for tile_x in 0..4 {
        for tile_y in 0..4 {
            for k in 0..per_tile {
                placements.push(InstancePlacement {
                    x: -190.0 + tile_x as f32 * 100.0 + k as f32 * 3.0,
                    y: -180.0 + tile_y as f32 * 100.0 + k as f32 * 2.0,
                    scale: 1.0,
                    angle: 0.0,
                });
            }
        }
    }
    InstanceTileBuilder::new(TilingConfig::default())
        .build(&InstanceData::from_placements(&placements))
        .unwrap()
}

/// Straight down on the field center, narrow FOV: only the 4 center tiles.
fn create_top_down_camera() -> Camera {
    Camera::new(
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, 300.0), Vec3::ZERO, Vec3::Y),
        Mat4::perspective_rh(20f32.to_radians(), 1.0, 0.1, 1000.0),
    )
}

/// Far away, looking away from the field: everything culled.
fn create_away_camera() -> Camera {
    Camera::new(
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, 300.0), Vec3::new(0.0, 0.0, 600.0), Vec3::Y),
        Mat4::perspective_rh(20f32.to_radians(), 1.0, 0.1, 1000.0),
    )
}

const CENTER_TILES: [usize; 4] = [5, 6, 9, 10];

// ============================================================================
// mark_culling
// ============================================================================

#[test]
fn test_mark_culling_top_down() {
    let set = create_test_set(1);
    let mut tester = FrustumVisibilityTester::new();
    let mut culling = CullingState::new(set.config());

    set.mark_culling(&mut tester, &create_top_down_camera(), &mut culling).unwrap();

    for index in 0..16 {
        assert_eq!(
            culling.is_culled(index),
            !CENTER_TILES.contains(&index),
            "tile {} has wrong culled flag",
            index
        );
    }
}

#[test]
fn test_mark_culling_overwrites_previous_pass() {
    let set = create_test_set(1);
    let mut tester = FrustumVisibilityTester::new();
    let mut culling = CullingState::new(set.config());

    set.mark_culling(&mut tester, &create_away_camera(), &mut culling).unwrap();
    assert_eq!(culling.culled_count(), 16);

    set.mark_culling(&mut tester, &create_top_down_camera(), &mut culling).unwrap();
    assert_eq!(culling.visible_count(), 4);
}

#[test]
fn test_mark_culling_rejects_foreign_state() {
    let set = create_test_set(1);
    let mut tester = FrustumVisibilityTester::new();
    let mut culling = CullingState::new(&TilingConfig { tesselation: 2, ..Default::default() });

    let result = set.mark_culling(&mut tester, &create_top_down_camera(), &mut culling);
    assert!(matches!(result, Err(Error::IncompatibleTileGeometry(_))));
}

// ============================================================================
// draw_visible
// ============================================================================

#[test]
fn test_draw_visible_one_draw_per_visible_tile() {
    let set = create_test_set(3);
    let mut tester = FrustumVisibilityTester::new();
    let mut culling = CullingState::new(set.config());
    let camera = create_top_down_camera();
    let mut cmd = MockCommandList::new();
    let model = InstancedModel::new("grass", 36, 24);

    set.mark_culling(&mut tester, &camera, &mut culling).unwrap();
    let stats = set
        .draw_visible(&culling, &VegetationShader::new(), &model, &mut cmd, &camera, 1.0)
        .unwrap();

    let expected: Vec<(u32, u32)> = CENTER_TILES
        .iter()
        .map(|&i| (set.tiles()[i].instances_offset, 3))
        .collect();
    assert_eq!(cmd.draw_ranges(), expected);
    assert_eq!(stats.draw_calls, 4);
    assert_eq!(stats.instances, 12);
    assert_eq!(stats.culled_tiles, 12);
}

#[test]
fn test_draw_visible_all_tiles_without_culling_pass() {
    let set = create_test_set(2);
    let culling = CullingState::new(set.config());
    let mut cmd = MockCommandList::new();

    let stats = set
        .draw_visible(&culling, &VegetationShader::new(), &InstancedModel::new("grass", 36, 24),
            &mut cmd, &create_top_down_camera(), 1.0)
        .unwrap();

    assert_eq!(stats.draw_calls, 16);
    assert_eq!(stats.instances as usize, set.placed_instance_count());
}

#[test]
fn test_draw_visible_begins_species_once() {
    let set = create_test_set(2);
    let culling = CullingState::new(set.config());
    let mut cmd = MockCommandList::new();

    set.draw_visible(&culling, &VegetationShader::new(), &InstancedModel::new("grass", 36, 24),
        &mut cmd, &create_top_down_camera(), 1.0)
        .unwrap();

    let binds = cmd.commands.iter().filter(|c| matches!(c, RecordedCommand::BindModel(_))).count();
    let pushes = cmd.commands.iter().filter(|c| matches!(c, RecordedCommand::PushConstants { .. })).count();
    assert_eq!(binds, 1);
    assert_eq!(pushes, 2);
    assert_eq!(cmd.commands[0], RecordedCommand::BindModel("grass".to_string()));
    // bind + 2 pushes, then offset + draw per tile
    assert_eq!(cmd.commands.len(), 3 + 16 * 2);
}

#[test]
fn test_density_shrinks_prefix_of_each_tile() {
    let set = create_test_set(4);
    let culling = CullingState::new(set.config());
    let mut cmd = MockCommandList::new();

    set.draw_visible(&culling, &VegetationShader::new(), &InstancedModel::new("grass", 36, 24),
        &mut cmd, &create_top_down_camera(), 0.5)
        .unwrap();

    for ((offset, count), tile) in cmd.draw_ranges().into_iter().zip(set.tiles()) {
        assert_eq!(offset, tile.instances_offset);
        assert_eq!(count, 2);
        assert!(offset + count <= tile.instance_range().end);
    }
}

#[test]
fn test_zero_density_issues_no_draw() {
    let set = create_test_set(4);
    let culling = CullingState::new(set.config());
    let mut cmd = MockCommandList::new();

    let stats = set
        .draw_visible(&culling, &VegetationShader::new(), &InstancedModel::new("grass", 36, 24),
            &mut cmd, &create_top_down_camera(), 0.0)
        .unwrap();

    assert_eq!(stats, DrawStats::default());
    assert!(cmd.commands.is_empty());
}

#[test]
fn test_empty_tiles_issue_no_draw() {
    let placements = [InstancePlacement { x: 50.0, y: 50.0, scale: 1.0, angle: 0.0 }];
    let set = InstanceTileBuilder::new(TilingConfig::default())
        .build(&InstanceData::from_placements(&placements))
        .unwrap();
    let culling = CullingState::new(set.config());
    let mut cmd = MockCommandList::new();

    set.draw_visible(&culling, &VegetationShader::new(), &InstancedModel::new("grass", 36, 24),
        &mut cmd, &create_top_down_camera(), 1.0)
        .unwrap();

    assert_eq!(cmd.draw_ranges(), vec![(0, 1)]);
}

#[test]
fn test_backend_failure_stops_the_pass() {
    let set = create_test_set(1);
    let culling = CullingState::new(set.config());
    let mut cmd = MockCommandList::failing_after(2);

    let result = set.draw_visible(&culling, &VegetationShader::new(),
        &InstancedModel::new("grass", 36, 24), &mut cmd, &create_top_down_camera(), 1.0);

    assert!(matches!(result, Err(Error::BackendError(_))));
    assert_eq!(cmd.draw_count(), 2);
}

#[test]
fn test_draw_visible_rejects_foreign_state() {
    let set = create_test_set(1);
    let culling = CullingState::new(&TilingConfig { world_size: 100.0, ..Default::default() });
    let mut cmd = MockCommandList::new();

    let result = set.draw_visible(&culling, &VegetationShader::new(),
        &InstancedModel::new("grass", 36, 24), &mut cmd, &create_top_down_camera(), 1.0);
    assert!(result.is_err());
    assert!(cmd.commands.is_empty());
}
