/// Camera - low-level passive data container.
///
/// Holds the view and projection matrices a frame is rendered with.
/// The Camera computes nothing beyond their product; the caller (free-fly
/// controller, `CameraPathInterpolator`, scripted cut...) sets them.

use glam::Mat4;

/// Low-level camera. A passive data container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a new camera from a view and a projection matrix.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== SETTERS (store, compute nothing) =====

    /// Set the view matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
