//! The rig's complete interactive vocabulary.
//!
//! Every gesture a viewport can apply, whether it came from a mouse drag, a
//! scroll wheel, a toolbar button or a recorded script, is represented as a
//! [`RigCommand`]. Hosts construct commands and pass them to
//! [`CameraRig::execute`].
//!
//! Commands serialize with an `op` tag so gesture logs can be replayed:
//!
//! ```json
//! {"op": "magnify", "viewport": {"width": 800, "height": 600},
//!  "factor": 1.25, "method": "lens", "anchor": [400.0, 300.0]}
//! ```

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraRig, ScreenPort, ZoomMethod};

/// A single gesture applied to a [`CameraRig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RigCommand {
    /// Drag the scene so the point under `from` ends up under `to`.
    Pan {
        /// Drag start, in pixels.
        from: DVec2,
        /// Drag end, in pixels.
        to: DVec2,
    },
    /// Zoom by `factor`, holding the scene under `anchor` in place.
    Magnify {
        /// Viewport the anchor is measured in.
        viewport: ScreenPort,
        /// Magnification (> 1 zooms in).
        factor: f64,
        /// Dolly or lens.
        #[serde(default)]
        method: ZoomMethod,
        /// Pixel to hold fixed, if any.
        #[serde(default)]
        anchor: Option<DVec2>,
    },
    /// Orbit the target by a drag from `anchor` to `current`.
    Orbit {
        /// Viewport the drag is measured in.
        viewport: ScreenPort,
        /// Previous cursor position, in pixels.
        anchor: DVec2,
        /// Current cursor position, in pixels.
        current: DVec2,
    },
    /// Rotate about an arbitrary axis through `center`.
    RotateView {
        /// Rotation axis (need not be unit length).
        axis: DVec3,
        /// Point the axis passes through.
        center: DVec3,
        /// Angle in radians.
        angle: f64,
    },
    /// Turn about the world vertical through the target.
    RotateLeftRight {
        /// Angle in radians.
        angle: f64,
    },
    /// Tilt about the camera's right axis through the target.
    RotateUpDown {
        /// Angle in radians.
        angle: f64,
    },
    /// Turn the view in place, carrying the target along.
    RotateCameraAround {
        /// Rotation axis through the camera.
        axis: DVec3,
        /// Angle in radians.
        angle: f64,
    },
    /// Move the camera and re-point it at a new target.
    SetTarget {
        /// New look-at point.
        target: DVec3,
        /// New camera location.
        location: DVec3,
        /// Preferred up vector.
        up: DVec3,
        /// Roll override; the configured tilt is used when absent.
        #[serde(default)]
        tilt_angle: Option<f64>,
    },
}

impl CameraRig {
    /// Apply `command` to the rig.
    ///
    /// Returns what the underlying gesture returns; `Pan` has no failure
    /// mode and always reports `true`.
    pub fn execute(&mut self, command: &RigCommand) -> bool {
        match *command {
            RigCommand::Pan { from, to } => {
                self.pan(from, to);
                true
            }
            RigCommand::Magnify {
                viewport,
                factor,
                method,
                anchor,
            } => self.magnify(viewport, factor, method, anchor),
            RigCommand::Orbit {
                viewport,
                anchor,
                current,
            } => self.orbit(viewport, anchor, current),
            RigCommand::RotateView {
                axis,
                center,
                angle,
            } => self.rotate_view(axis, center, angle),
            RigCommand::RotateLeftRight { angle } => {
                self.rotate_left_right(angle)
            }
            RigCommand::RotateUpDown { angle } => self.rotate_up_down(angle),
            RigCommand::RotateCameraAround { axis, angle } => {
                self.rotate_camera_around(axis, angle)
            }
            RigCommand::SetTarget {
                target,
                location,
                up,
                tilt_angle: Some(tilt),
            } => self.set_target_with_tilt(target, location, up, tilt),
            RigCommand::SetTarget {
                target,
                location,
                up,
                tilt_angle: None,
            } => self.set_target(target, location, up),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::camera::{Frustum, ProjectionMode};

    const PORT: ScreenPort = ScreenPort::new(800, 600);

    fn rig() -> CameraRig {
        let frustum =
            Frustum::new(-0.4, 0.4, -0.3, 0.3, 1.0, 1000.0).unwrap();
        CameraRig::new(
            DVec3::new(0.0, -10.0, 0.0),
            DVec3::ZERO,
            DVec3::Z,
            frustum,
            ProjectionMode::Perspective,
            PORT,
        )
        .unwrap()
    }

    #[test]
    fn execute_matches_direct_calls() {
        let mut direct = rig();
        let mut scripted = rig();

        let from = DVec2::new(100.0, 100.0);
        let to = DVec2::new(140.0, 90.0);
        direct.pan(from, to);
        assert!(scripted.execute(&RigCommand::Pan { from, to }));

        let anchor = Some(DVec2::new(300.0, 200.0));
        assert!(direct.magnify(PORT, 1.5, ZoomMethod::Dolly, anchor));
        assert!(scripted.execute(&RigCommand::Magnify {
            viewport: PORT,
            factor: 1.5,
            method: ZoomMethod::Dolly,
            anchor,
        }));

        assert!(direct.orbit(PORT, from, to));
        assert!(scripted.execute(&RigCommand::Orbit {
            viewport: PORT,
            anchor: from,
            current: to,
        }));

        assert_eq!(direct, scripted);
    }

    #[test]
    fn execute_reports_rejection() {
        let mut rig = rig();
        rig.set_location_locked(true);
        let before = rig;
        assert!(!rig.execute(&RigCommand::RotateLeftRight { angle: 0.2 }));
        assert!(!rig.execute(&RigCommand::Magnify {
            viewport: PORT,
            factor: 2.0,
            method: ZoomMethod::Lens,
            anchor: None,
        }));
        assert_eq!(rig, before);
    }

    #[test]
    fn set_target_without_tilt_uses_configured_tilt() {
        let mut configured = rig();
        let mut gestures = *configured.gestures();
        gestures.tilt_angle = FRAC_PI_2;
        configured.set_gestures(gestures);
        let location = configured.location();

        let mut explicit = configured;
        assert!(configured.execute(&RigCommand::SetTarget {
            target: DVec3::ZERO,
            location,
            up: DVec3::Z,
            tilt_angle: None,
        }));
        assert!(explicit.execute(&RigCommand::SetTarget {
            target: DVec3::ZERO,
            location,
            up: DVec3::Z,
            tilt_angle: Some(FRAC_PI_2),
        }));
        assert_eq!(configured, explicit);
        assert!(configured.camera_y().abs_diff_eq(-DVec3::X, 1e-12));
    }

    #[test]
    fn replays_json_gesture_log() {
        let log = r#"[
            {"op": "rotate_left_right", "angle": 1.5707963267948966},
            {"op": "magnify", "viewport": {"width": 800, "height": 600},
             "factor": 2.0},
            {"op": "rotate_camera_around", "axis": [0.0, 0.0, 1.0],
             "angle": 0.0}
        ]"#;
        let commands: Vec<RigCommand> = serde_json::from_str(log).unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[1],
            RigCommand::Magnify {
                viewport: PORT,
                factor: 2.0,
                method: ZoomMethod::Dolly,
                anchor: None,
            }
        );

        let mut rig = rig();
        for command in &commands {
            assert!(rig.execute(command));
        }
        // Quarter turn to +X, then a 2x dolly halves the distance
        assert!(rig.location().abs_diff_eq(DVec3::new(5.0, 0.0, 0.0), 1e-9));
        assert!(rig.direction().abs_diff_eq(-DVec3::X, 1e-9));
    }

    #[test]
    fn commands_serialize_with_op_tag() {
        let json = serde_json::to_value(RigCommand::RotateUpDown {
            angle: 0.25,
        })
        .unwrap();
        assert_eq!(json["op"], "rotate_up_down");
        assert_eq!(json["angle"], 0.25);
    }
}
