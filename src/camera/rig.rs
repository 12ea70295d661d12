use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::frustum::{Frustum, ProjectionMode};
use super::xform::ScreenPort;
use crate::error::RigError;
use crate::geometry::unitize;
use crate::options::{GestureOptions, RigOptions};

/// World vertical axis. Orbiting left/right turns about it and the gimbal
/// guard measures the view direction against it.
pub const WORLD_UP: DVec3 = DVec3::Z;

/// Below this sine of the angle between a candidate up vector and the view
/// direction, the pair is treated as parallel.
const MIN_UP_SIN: f64 = 1.0e-6;

/// Largest per-component deviation a deserialized basis may have from the
/// orthonormal basis rebuilt from its up and backward axes.
const FRAME_TOLERANCE: f64 = 1.0e-6;

/// Right-handed orthonormal camera basis.
///
/// `x` is right, `y` is up and `z` points from the target back toward the
/// camera, so the viewing direction is `-z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrameAxes")]
pub struct CameraFrame {
    x: DVec3,
    y: DVec3,
    z: DVec3,
}

#[derive(Deserialize)]
struct FrameAxes {
    x: DVec3,
    y: DVec3,
    z: DVec3,
}

impl TryFrom<FrameAxes> for CameraFrame {
    type Error = RigError;

    /// Rebuilds the basis from `z` and `y` and accepts the saved axes only
    /// if they already match it. The rebuilt (renormalized) basis is kept.
    fn try_from(axes: FrameAxes) -> Result<Self, Self::Error> {
        let frame = Self::from_direction_up(-axes.z, axes.y)
            .ok_or(RigError::InvalidState("degenerate camera basis"))?;
        let matches = frame.x.abs_diff_eq(axes.x, FRAME_TOLERANCE)
            && frame.y.abs_diff_eq(axes.y, FRAME_TOLERANCE)
            && frame.z.abs_diff_eq(axes.z, FRAME_TOLERANCE);
        if !matches {
            return Err(RigError::InvalidState(
                "camera basis is not right-handed orthonormal",
            ));
        }
        Ok(frame)
    }
}

impl CameraFrame {
    /// Build a frame looking along `direction` with `up` as the up hint.
    ///
    /// `up` only needs to be non-parallel to `direction`; it is
    /// orthogonalized against it. Returns `None` for a zero direction or an
    /// up hint that is (nearly) parallel to it.
    #[must_use]
    pub fn from_direction_up(direction: DVec3, up: DVec3) -> Option<Self> {
        let z = -unitize(direction)?;
        let up = unitize(up)?;
        let perp = up - up.dot(z) * z;
        if perp.length() < MIN_UP_SIN {
            return None;
        }
        // Second pass removes what the first normalize left behind.
        let y = unitize(perp)?;
        let y = unitize(y - y.dot(z) * z)?;
        let x = y.cross(z);
        Some(Self { x, y, z })
    }

    /// Right axis.
    #[inline]
    #[must_use]
    pub fn x(&self) -> DVec3 {
        self.x
    }

    /// Up axis.
    #[inline]
    #[must_use]
    pub fn y(&self) -> DVec3 {
        self.y
    }

    /// Backward axis (target toward camera).
    #[inline]
    #[must_use]
    pub fn z(&self) -> DVec3 {
        self.z
    }

    /// Viewing direction, `-z`.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> DVec3 {
        -self.z
    }
}

/// Camera state for one viewport: location, target, basis, frustum and the
/// knobs the gesture operations read.
///
/// Every gesture either commits a complete new state or leaves the rig
/// untouched. The rig is `Copy` so a render layer can take a snapshot per
/// frame while the input layer keeps the exclusive `&mut`.
///
/// A deserialized rig is checked like one built by [`CameraRig::new`]: the
/// basis and frustum validate themselves, and the points, view scale and
/// screen port are checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RigSnapshot")]
pub struct CameraRig {
    pub(super) location: DVec3,
    pub(super) target: DVec3,
    pub(super) frame: CameraFrame,
    pub(super) frustum: Frustum,
    pub(super) projection: ProjectionMode,
    pub(super) view_scale: DVec2,
    pub(super) screen_port: ScreenPort,
    pub(super) location_locked: bool,
    pub(super) gestures: GestureOptions,
}

#[derive(Deserialize)]
struct RigSnapshot {
    location: DVec3,
    target: DVec3,
    frame: CameraFrame,
    frustum: Frustum,
    projection: ProjectionMode,
    view_scale: DVec2,
    screen_port: ScreenPort,
    location_locked: bool,
    #[serde(default)]
    gestures: GestureOptions,
}

impl TryFrom<RigSnapshot> for CameraRig {
    type Error = RigError;

    fn try_from(raw: RigSnapshot) -> Result<Self, Self::Error> {
        let finite = raw.location.is_finite() && raw.target.is_finite();
        if !finite {
            return Err(RigError::InvalidState("non-finite location or target"));
        }
        let scale = raw.view_scale;
        let positive = scale.x > 0.0 && scale.y > 0.0 && scale.is_finite();
        if !positive {
            return Err(RigError::InvalidState("view scale must be positive"));
        }
        if raw.screen_port.is_empty() {
            return Err(RigError::InvalidState("empty screen port"));
        }
        Ok(Self {
            location: raw.location,
            target: raw.target,
            frame: raw.frame,
            frustum: raw.frustum,
            projection: raw.projection,
            view_scale: scale,
            screen_port: raw.screen_port,
            location_locked: raw.location_locked,
            gestures: raw.gestures,
        })
    }
}

impl CameraRig {
    /// Create a rig looking from `location` toward `target`.
    ///
    /// Returns `None` if the view direction is degenerate, `up` is parallel
    /// to it, the frustum is invalid or the screen port is empty.
    #[must_use]
    pub fn new(
        location: DVec3,
        target: DVec3,
        up: DVec3,
        frustum: Frustum,
        projection: ProjectionMode,
        screen_port: ScreenPort,
    ) -> Option<Self> {
        if !frustum.is_valid() || screen_port.is_empty() {
            return None;
        }
        let frame = CameraFrame::from_direction_up(target - location, up)?;
        Some(Self {
            location,
            target,
            frame,
            frustum,
            projection,
            view_scale: DVec2::ONE,
            screen_port,
            location_locked: false,
            gestures: GestureOptions::default(),
        })
    }

    /// Create a rig from configured options for a viewport of the given
    /// pixel size. The frustum is symmetric, sized from the configured
    /// vertical field of view and the port's aspect ratio.
    #[must_use]
    pub fn from_options(
        options: &RigOptions,
        screen_port: ScreenPort,
    ) -> Option<Self> {
        let camera = &options.camera;
        let frustum = Frustum::symmetric(
            camera.fovy.to_radians(),
            screen_port.aspect(),
            camera.znear,
            camera.zfar,
        );
        let Some(frustum) = frustum else {
            log::warn!(
                "rejecting camera options: invalid frustum (fovy {}, near \
                 {}, far {})",
                camera.fovy,
                camera.znear,
                camera.zfar
            );
            return None;
        };
        let mut rig = Self::new(
            DVec3::from_array(camera.location),
            DVec3::from_array(camera.target),
            WORLD_UP,
            frustum,
            camera.projection,
            screen_port,
        )?;
        rig.gestures = options.gestures;
        Some(rig)
    }

    // ── Read access ─────────────────────────────────────────────────

    /// Camera position in world space.
    #[must_use]
    pub fn location(&self) -> DVec3 {
        self.location
    }

    /// Look-at point in world space.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Orthonormal camera basis.
    #[must_use]
    pub fn frame(&self) -> CameraFrame {
        self.frame
    }

    /// Right axis.
    #[must_use]
    pub fn camera_x(&self) -> DVec3 {
        self.frame.x
    }

    /// Up axis.
    #[must_use]
    pub fn camera_y(&self) -> DVec3 {
        self.frame.y
    }

    /// Backward axis.
    #[must_use]
    pub fn camera_z(&self) -> DVec3 {
        self.frame.z
    }

    /// Viewing direction (`-camera_z`).
    #[must_use]
    pub fn direction(&self) -> DVec3 {
        self.frame.direction()
    }

    /// Signed distance from the camera to the target along the view axis.
    /// Negative when the target is behind the camera.
    #[must_use]
    pub fn target_distance(&self) -> f64 {
        (self.location - self.target).dot(self.frame.z)
    }

    /// View volume bounds.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        self.frustum
    }

    /// Projection mode.
    #[must_use]
    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }

    /// Whether the projection is perspective.
    #[must_use]
    pub fn is_perspective(&self) -> bool {
        self.projection == ProjectionMode::Perspective
    }

    /// Lateral scale applied to the frustum's effective width and height.
    #[must_use]
    pub fn view_scale(&self) -> DVec2 {
        self.view_scale
    }

    /// Pixel size of the viewport this rig is displayed in.
    #[must_use]
    pub fn screen_port(&self) -> ScreenPort {
        self.screen_port
    }

    /// Whether operations are forbidden from moving the camera location.
    #[must_use]
    pub fn is_location_locked(&self) -> bool {
        self.location_locked
    }

    /// Gesture tuning in effect.
    #[must_use]
    pub fn gestures(&self) -> &GestureOptions {
        &self.gestures
    }

    // ── Validated setters ───────────────────────────────────────────

    /// Move the camera without touching the target or basis.
    /// Rejected when the location is locked.
    pub fn set_camera_location(&mut self, location: DVec3) -> bool {
        if self.location_locked && location != self.location {
            log::debug!("set_camera_location rejected: location locked");
            return false;
        }
        if !location.is_finite() {
            return false;
        }
        self.location = location;
        true
    }

    /// Replace the look-at point without re-orienting the camera.
    pub fn set_target_point(&mut self, target: DVec3) -> bool {
        if !target.is_finite() {
            return false;
        }
        self.target = target;
        true
    }

    /// Re-orient the camera. Rejected (basis unchanged) when `up` is
    /// parallel to `direction` or either is degenerate.
    pub fn set_frame(&mut self, direction: DVec3, up: DVec3) -> bool {
        match CameraFrame::from_direction_up(direction, up) {
            Some(frame) => {
                self.frame = frame;
                true
            }
            None => {
                log::debug!("set_frame rejected: degenerate basis");
                false
            }
        }
    }

    /// Replace the frustum. Rejected when the bounds are invalid.
    pub fn set_frustum(&mut self, frustum: Frustum) -> bool {
        if !frustum.is_valid() {
            log::debug!("set_frustum rejected: {frustum:?}");
            return false;
        }
        self.frustum = frustum;
        true
    }

    /// Switch between perspective and parallel projection.
    pub fn set_projection(&mut self, projection: ProjectionMode) {
        self.projection = projection;
    }

    /// Set the lateral view scale. Both components must be positive.
    pub fn set_view_scale(&mut self, scale: DVec2) -> bool {
        let positive = scale.x > 0.0 && scale.y > 0.0 && scale.is_finite();
        if !positive {
            return false;
        }
        self.view_scale = scale;
        true
    }

    /// Resize the viewport. Rejected for an empty port.
    pub fn set_screen_port(&mut self, screen_port: ScreenPort) -> bool {
        if screen_port.is_empty() {
            return false;
        }
        self.screen_port = screen_port;
        true
    }

    /// Lock or unlock the camera location.
    pub fn set_location_locked(&mut self, locked: bool) {
        self.location_locked = locked;
    }

    /// Replace the gesture tuning.
    pub fn set_gestures(&mut self, gestures: GestureOptions) {
        self.gestures = gestures;
    }

    /// Move target and location together, ignoring the lock flag.
    pub(super) fn shift(&mut self, offset: DVec3) {
        self.target += offset;
        self.location += offset;
    }
}
