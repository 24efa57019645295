/// Frustum visibility test for axis-aligned boxes.
///
/// Boxes are tested in clip space: the 8 corners are transformed by the
/// view-projection matrix and compared against five half-spaces
/// (near, left, right, top, bottom). A box is culled only when all 8
/// corners lie outside the same half-space, so the test is conservative:
/// a box straddling a frustum corner may be reported visible, never the
/// reverse.
///
/// There is no far-plane test. Geometry past the far distance is left to
/// the projection and depth test.
///
/// Clip-space convention: depth in [0, w] (glam `perspective_rh` and
/// friends), so the near half-space is `z < 0`.

use glam::{Mat4, Vec4};
use super::bounding_box::BoundingBox;
use super::camera::Camera;

/// Tested half-space indices, in test order
pub const PLANE_NEAR: usize = 0;
pub const PLANE_LEFT: usize = 1;
pub const PLANE_RIGHT: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_BOTTOM: usize = 4;

/// Number of half-spaces tested per box.
pub const TESTED_PLANE_COUNT: usize = 5;

/// Conservative box-vs-frustum tester.
///
/// Keeps scratch storage for the 8 transformed corners and an identity
/// model matrix (tile boxes are already in world space), so testing a box
/// never allocates.
#[derive(Debug, Clone)]
pub struct FrustumVisibilityTester {
    corners: [Vec4; 8],
    model: Mat4,
}

impl FrustumVisibilityTester {
    pub fn new() -> Self {
        Self {
            corners: [Vec4::ZERO; 8],
            model: Mat4::IDENTITY,
        }
    }

    /// Returns `true` only if `bbox` is provably entirely outside the
    /// camera frustum.
    ///
    /// `projection * view * model` is recomputed on every call.
    pub fn is_box_culled(&mut self, bbox: &BoundingBox, camera: &Camera) -> bool {
        let mvp = *camera.projection_matrix() * *camera.view_matrix() * self.model;
        self.is_box_culled_clip(bbox, &mvp)
    }

    /// Same as `is_box_culled`, with an already combined matrix.
    pub fn is_box_culled_clip(&mut self, bbox: &BoundingBox, view_projection: &Mat4) -> bool {
        self.culling_plane(bbox, view_projection).is_some()
    }

    /// Index of the first half-space (`PLANE_*`) that has every corner of
    /// `bbox` outside it, or `None` if the box may be visible.
    pub fn culling_plane(&mut self, bbox: &BoundingBox, view_projection: &Mat4) -> Option<usize> {
        for (slot, corner) in self.corners.iter_mut().zip(bbox.corners()) {
            *slot = *view_projection * corner.extend(1.0);
        }
        let corners = &self.corners;

        // `all` stops at the first corner on the inner side
        if corners.iter().all(|p| p.z < 0.0) {
            return Some(PLANE_NEAR);
        }
        if corners.iter().all(|p| p.x < -p.w) {
            return Some(PLANE_LEFT);
        }
        if corners.iter().all(|p| p.x > p.w) {
            return Some(PLANE_RIGHT);
        }
        if corners.iter().all(|p| p.y < -p.w) {
            return Some(PLANE_TOP);
        }
        if corners.iter().all(|p| p.y > p.w) {
            return Some(PLANE_BOTTOM);
        }
        None
    }
}

impl Default for FrustumVisibilityTester {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
