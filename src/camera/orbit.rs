//! Rotations: the general `rotate_view` primitive, the turntable steps built
//! on it, drag-to-orbit, and the target-preserving `rotate_camera_around`.

use std::f64::consts::PI;

use glam::{DVec2, DVec3};

use super::rig::{CameraFrame, CameraRig, WORLD_UP};
use super::xform::ScreenPort;
use crate::geometry::rotation;

/// Relative drift below which a rotation is considered to leave the camera
/// location in place.
const LOCK_TOLERANCE: f64 = 1.0e-12;

/// Whether moving the view direction's vertical component from `before` to
/// `after` leaves the `[-limit, limit]` band and heads further from it.
fn crosses_gimbal_band(before: f64, after: f64, limit: f64) -> bool {
    after.abs() > limit && after.abs() >= before.abs()
}

/// Whether tilting `direction` toward `up` by `angle` sweeps through a
/// vertical extreme outside `[-limit, limit]`.
///
/// The tilted direction is `cos(t) * direction + sin(t) * up`, so its
/// vertical component is `reach * cos(t - phase)`. Its extremes sit at
/// `t = phase + k * PI`; any of them strictly inside the swept range with
/// `reach > limit` means the path passes over a pole.
fn sweeps_past_pole(
    direction: DVec3,
    up: DVec3,
    angle: f64,
    limit: f64,
) -> bool {
    let reach = direction.z.hypot(up.z);
    if reach <= limit || angle == 0.0 {
        return false;
    }
    let phase = up.z.atan2(direction.z);
    let (lo, hi) = if angle > 0.0 { (0.0, angle) } else { (angle, 0.0) };
    let first = phase + (((lo - phase) / PI).floor() + 1.0) * PI;
    first < hi
}

impl CameraRig {
    /// Rotate location, up and view direction by `angle` radians about
    /// `axis` through `center`. The target is left where it is.
    ///
    /// Returns `false` (no change) for a degenerate axis, or when the
    /// rotation would move a locked camera.
    pub fn rotate_view(
        &mut self,
        axis: DVec3,
        center: DVec3,
        angle: f64,
    ) -> bool {
        let Some(rot) = rotation(angle, axis, center) else {
            log::debug!("rotate_view rejected: degenerate axis {axis}");
            return false;
        };
        let mut location = rot.transform_point3(self.location);
        let tolerance = LOCK_TOLERANCE * (1.0 + self.location.length());
        if location.abs_diff_eq(self.location, tolerance) {
            location = self.location;
        } else if self.location_locked {
            log::debug!("rotate_view rejected: camera location locked");
            return false;
        }
        let up = rot.transform_vector3(self.frame.y());
        let direction = -rot.transform_vector3(self.frame.z());
        let Some(frame) = CameraFrame::from_direction_up(direction, up) else {
            return false;
        };
        self.location = location;
        self.frame = frame;
        true
    }

    /// Turn about the world vertical axis through the target.
    pub fn rotate_left_right(&mut self, angle: f64) -> bool {
        self.rotate_view(WORLD_UP, self.target, angle)
    }

    /// Tilt about the camera's right axis through the target.
    pub fn rotate_up_down(&mut self, angle: f64) -> bool {
        self.rotate_view(self.frame.x(), self.target, angle)
    }

    /// Orbit the target by a drag from `anchor` to `current` (pixels).
    ///
    /// One viewport width of drag is `orbit_span` radians (a half turn by
    /// default), horizontally and vertically alike. The left/right turn is
    /// applied first, then the up/down tilt. A tilt that would push the view
    /// direction further into the gimbal band, or carry it over a pole, is
    /// dropped; the turn still applies.
    ///
    /// Returns `false` (no change) for an empty viewport or a locked camera.
    pub fn orbit(
        &mut self,
        viewport: ScreenPort,
        anchor: DVec2,
        current: DVec2,
    ) -> bool {
        if self.location_locked {
            log::debug!("orbit rejected: camera location locked");
            return false;
        }
        if viewport.width < 1 {
            log::debug!("orbit rejected: zero-width viewport");
            return false;
        }
        let per_pixel = self.gestures.orbit_span / f64::from(viewport.width);
        let angles = (anchor - current) * per_pixel;

        let mut draft = *self;
        if !draft.rotate_left_right(angles.x) {
            return false;
        }

        let mut tilted = draft;
        let limit = self.gestures.gimbal_limit;
        let over_pole = sweeps_past_pole(
            draft.direction(),
            draft.camera_y(),
            angles.y,
            limit,
        );
        if !over_pole
            && tilted.rotate_up_down(angles.y)
            && !crosses_gimbal_band(
                draft.direction().z,
                tilted.direction().z,
                limit,
            )
        {
            draft = tilted;
        } else {
            log::debug!("orbit tilt skipped");
        }

        *self = draft;
        true
    }

    /// Rotate the view direction about `axis` through the camera, keeping
    /// the camera in place and carrying the target along at the same
    /// distance. The up vector is reset to world vertical.
    ///
    /// Rejected (no change) when the new view direction's vertical
    /// component would leave `[-gimbal_limit, gimbal_limit]`.
    pub fn rotate_camera_around(&mut self, axis: DVec3, angle: f64) -> bool {
        let distance = self.target_distance();
        let Some(rot) = rotation(angle, axis, self.location) else {
            log::debug!("rotate_camera_around rejected: degenerate axis");
            return false;
        };
        let direction = -rot.transform_vector3(self.frame.z());
        let limit = self.gestures.gimbal_limit;
        if !(-limit..=limit).contains(&direction.z) {
            log::debug!(
                "rotate_camera_around rejected: direction z {} outside \
                 gimbal band",
                direction.z
            );
            return false;
        }
        let Some(frame) = CameraFrame::from_direction_up(direction, WORLD_UP)
        else {
            return false;
        };
        self.target = self.location + distance * frame.direction();
        self.frame = frame;
        true
    }
}
