//! Camera module - camera matrices, bounding boxes, frustum culling and
//! scripted camera paths.
//!
//! The engine does NOT store or manage cameras. They are tools provided
//! by the engine, owned and driven by the caller.

mod bounding_box;
mod camera;
mod camera_path;
mod frustum;

pub use bounding_box::BoundingBox;
pub use camera::Camera;
pub use camera_path::{CameraPath, CameraPathConfig, CameraPathInterpolator, CameraPose, PathState};
pub use frustum::{
    FrustumVisibilityTester,
    PLANE_NEAR, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM, TESTED_PLANE_COUNT,
};
