//! Re-pointing the camera at a new target.

use glam::DVec3;

use super::rig::{CameraFrame, CameraRig};
use crate::geometry::{is_tiny, rotation, rotation_sin_cos, unitize};

/// Tilt angles at or below this magnitude (radians) are ignored.
const MIN_TILT: f64 = 1.0e-6;

impl CameraRig {
    /// Move the camera to `location` looking at `target`, with `up` as the
    /// preferred up vector. Uses the configured default tilt.
    ///
    /// See [`CameraRig::set_target_with_tilt`].
    pub fn set_target(
        &mut self,
        target: DVec3,
        location: DVec3,
        up: DVec3,
    ) -> bool {
        let tilt = self.gestures.tilt_angle;
        self.set_target_with_tilt(target, location, up, tilt)
    }

    /// Move the camera to `location` looking at `target`.
    ///
    /// The up vector is chosen from, in order: `up`; the current up vector;
    /// the current up vector carried along by the rotation that takes the
    /// old view direction to the new one. A non-zero `tilt_angle` then
    /// rolls the chosen up vector about the old view direction.
    ///
    /// If `target` and `location` coincide the current view direction is
    /// kept. Returns `false` and leaves the rig untouched when no valid
    /// basis can be built, or when a locked camera would have to move.
    pub fn set_target_with_tilt(
        &mut self,
        target: DVec3,
        location: DVec3,
        up: DVec3,
        tilt_angle: f64,
    ) -> bool {
        let old_direction = self.direction();
        if is_tiny(old_direction) {
            log::debug!("set_target rejected: current direction degenerate");
            return false;
        }
        if self.location_locked && location != self.location {
            log::debug!("set_target rejected: camera location locked");
            return false;
        }
        if !(target.is_finite() && location.is_finite()) {
            return false;
        }

        let direction = unitize(target - location).unwrap_or(old_direction);
        let Some(mut frame) = self.fallback_frame(old_direction, direction, up)
        else {
            log::debug!("set_target rejected: no usable up vector");
            return false;
        };

        if tilt_angle.abs() > MIN_TILT {
            let tilted = rotation(tilt_angle, -old_direction, location)
                .map(|rot| rot.transform_vector3(frame.y()))
                .and_then(|up| CameraFrame::from_direction_up(direction, up));
            let Some(tilted) = tilted else {
                log::debug!("set_target rejected: tilted basis degenerate");
                return false;
            };
            frame = tilted;
        }

        self.location = location;
        self.frame = frame;
        self.target = target;
        true
    }

    fn fallback_frame(
        &self,
        old_direction: DVec3,
        direction: DVec3,
        up: DVec3,
    ) -> Option<CameraFrame> {
        let old_up = self.frame.y();
        CameraFrame::from_direction_up(direction, up)
            .or_else(|| CameraFrame::from_direction_up(direction, old_up))
            .or_else(|| {
                let axis = old_direction.cross(direction);
                let rot = rotation_sin_cos(
                    axis.length(),
                    old_direction.dot(direction),
                    axis,
                    DVec3::ZERO,
                )?;
                let carried = rot.transform_vector3(old_up);
                CameraFrame::from_direction_up(direction, carried)
            })
    }
}
