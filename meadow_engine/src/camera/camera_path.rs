/// Scripted camera moves between two poses.
///
/// A `CameraPathInterpolator` advances a normalized timer over a wall-clock
/// duration derived from the path length and the configured speed, and
/// rebuilds the view matrix from the interpolated pose on every step.

use std::f32::consts::FRAC_PI_2;
use glam::{Mat4, Vec3};
use crate::error::{log_and_return_error, Error, Result};
use super::camera::Camera;

const LOG_SOURCE: &str = "meadow::CameraPath";

/// Camera position plus Euler rotation (radians).
///
/// With Z up, `rotation.x` is the pitch (0 looks along +Y at the horizon,
/// π/2 looks straight down), `rotation.y` turns around Z and `rotation.z`
/// around Y, in the order used by `CameraPathInterpolator::compose_view`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }
}

/// Immutable start/end poses of a camera move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPath {
    pub start: CameraPose,
    pub end: CameraPose,
    /// Multiplies `CameraPathConfig::speed` for this path only
    pub speed_multiplier: f32,
}

impl CameraPath {
    pub fn new(start: CameraPose, end: CameraPose) -> Self {
        Self { start, end, speed_multiplier: 1.0 }
    }

    pub fn with_speed_multiplier(mut self, multiplier: f32) -> Self {
        self.speed_multiplier = multiplier;
        self
    }

    /// Distance between the start and end positions.
    pub fn length(&self) -> f32 {
        self.start.position.distance(self.end.position)
    }
}

/// Camera path timing configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPathConfig {
    /// Travel speed in world units per millisecond
    pub speed: f32,
    /// Lower bound of a move's duration, in milliseconds
    pub min_duration_ms: f32,
}

impl Default for CameraPathConfig {
    fn default() -> Self {
        Self {
            speed: 0.05,
            min_duration_ms: 1000.0,
        }
    }
}

/// Progress of the active move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    /// timer == 0
    Idle,
    /// 0 < timer < 1
    Running,
    /// timer == 1
    Finished,
}

/// Timed interpolation between the two poses of a `CameraPath`.
#[derive(Debug, Clone)]
pub struct CameraPathInterpolator {
    config: CameraPathConfig,
    path: Option<CameraPath>,
    reverse: bool,
    timer: f32,
    duration_ms: f32,
    last_time_ms: Option<f64>,
    position: Vec3,
    rotation: Vec3,
    view_matrix: Mat4,
}

impl CameraPathInterpolator {
    pub fn new(config: CameraPathConfig) -> Self {
        Self {
            config,
            path: None,
            reverse: false,
            timer: 0.0,
            duration_ms: config.min_duration_ms,
            last_time_ms: None,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            view_matrix: Mat4::IDENTITY,
        }
    }

    /// Make `path` the active move and recompute its duration.
    ///
    /// The timer is left untouched; call `reset` to restart from the
    /// beginning. Fails (and keeps the previous path) when the effective
    /// speed is not a positive finite number.
    pub fn set_path(&mut self, path: CameraPath) -> Result<()> {
        let speed = self.config.speed * path.speed_multiplier;
        if !(speed > 0.0 && speed.is_finite()) {
            return Err(log_and_return_error(
                LOG_SOURCE,
                Error::InvalidConfig(format!(
                    "camera speed must be positive, got {} (config {} x path {})",
                    speed, self.config.speed, path.speed_multiplier
                )),
            ));
        }

        self.duration_ms = (path.length() / speed).max(self.config.min_duration_ms);
        self.path = Some(path);

        crate::engine_debug!(
            LOG_SOURCE,
            "Path set: length {:.2}, duration {:.0} ms",
            path.length(),
            self.duration_ms
        );
        Ok(())
    }

    /// Restart the move: timer back to 0, transform at the start pose.
    ///
    /// The reference time is kept, so the next `iterate` already advances
    /// by the time elapsed since the previous one. Use `suspend` to skip a
    /// gap instead.
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.update_transform();
    }

    /// Forget the reference time without touching the timer, e.g. while
    /// the application is paused. The next `iterate` resynchronizes.
    pub fn suspend(&mut self) {
        self.last_time_ms = None;
    }

    /// Advance the timer to wall-clock time `now_ms`.
    pub fn iterate(&mut self, now_ms: f64) {
        if self.path.is_none() {
            return;
        }

        if let Some(last) = self.last_time_ms {
            let elapsed = (now_ms - last).max(0.0);
            self.timer = (self.timer + (elapsed / self.duration_ms as f64) as f32).min(1.0);
            self.update_transform();
        }
        self.last_time_ms = Some(now_ms);
    }

    /// Travel from `end` to `start` instead. The stored path is unchanged;
    /// the transform is recomputed at the current timer.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
        self.update_transform();
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &CameraPathConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&CameraPath> {
        self.path.as_ref()
    }

    /// Normalized progress in [0, 1].
    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn state(&self) -> PathState {
        if self.timer <= 0.0 {
            PathState::Idle
        } else if self.timer >= 1.0 {
            PathState::Finished
        } else {
            PathState::Running
        }
    }

    /// Interpolated camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Interpolated Euler rotation.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Camera for the current step, with the caller's projection.
    pub fn camera(&self, projection: Mat4) -> Camera {
        Camera::new(self.view_matrix, projection)
    }

    fn update_transform(&mut self) {
        let Some(path) = self.path else {
            return;
        };
        let (from, to) = if self.reverse {
            (path.end, path.start)
        } else {
            (path.start, path.end)
        };

        self.position = mix(from.position, to.position, self.timer);
        self.rotation = mix(from.rotation, to.rotation, self.timer);
        self.view_matrix = Self::compose_view(self.position, self.rotation);
    }

    /// Rx(rotation.x − 90°) · Rz(rotation.y) · Ry(rotation.z) · T(−position).
    /// Not commutative: the order is part of the camera model.
    pub fn compose_view(position: Vec3, rotation: Vec3) -> Mat4 {
        Mat4::from_rotation_x(rotation.x - FRAC_PI_2)
            * Mat4::from_rotation_z(rotation.y)
            * Mat4::from_rotation_y(rotation.z)
            * Mat4::from_translation(-position)
    }
}

impl Default for CameraPathInterpolator {
    fn default() -> Self {
        Self::new(CameraPathConfig::default())
    }
}

// Exact at t = 0 and t = 1.
fn mix(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
#[path = "camera_path_tests.rs"]
mod tests;
