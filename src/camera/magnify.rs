//! Zoom by dolly or lens, keeping an anchor pixel fixed on screen.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::rig::CameraRig;
use super::xform::ScreenPort;

/// How [`CameraRig::magnify`] changes what the viewport shows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMethod {
    /// Move the camera along its view axis (perspective only).
    #[default]
    Dolly,
    /// Narrow or widen the frustum without moving the camera.
    Lens,
}

/// Outcome of the zoom step, carried into the anchor correction.
struct ZoomStep {
    /// Post/pre magnification ratio.
    ratio: f64,
    /// Frustum extent at the depth the anchor is held at, before zooming.
    width: f64,
    height: f64,
}

impl CameraRig {
    /// Zoom by `factor` (> 1 magnifies) using `method`.
    ///
    /// When `anchor` is given, a lateral correction keeps the scene point
    /// under that pixel in place. Anchors outside the viewport snap to the
    /// viewport origin.
    ///
    /// The point is held at the depth the zoom step is measured at: the
    /// target's depth for a dolly, the near plane for a lens zoom. Under
    /// perspective a lens zoom therefore pins only near-plane points to the
    /// anchor; deeper points under it slide across the screen. Parallel
    /// projection has no such depth dependence.
    ///
    /// Returns `false` without touching the rig when the location is locked
    /// or the viewport is empty. A non-positive factor, a dolly that would
    /// reach the target, or a dolly under parallel projection change nothing
    /// but still return `true`.
    pub fn magnify(
        &mut self,
        viewport: ScreenPort,
        factor: f64,
        method: ZoomMethod,
        anchor: Option<DVec2>,
    ) -> bool {
        if self.location_locked {
            log::debug!("magnify rejected: camera location locked");
            return false;
        }
        if viewport.is_empty() {
            log::debug!("magnify rejected: empty viewport {viewport:?}");
            return false;
        }
        let usable = factor > 0.0 && factor.is_finite();
        if !usable {
            log::debug!("magnify skipped: factor {factor}");
            return true;
        }

        let anchor = anchor.map(|p| {
            if viewport.contains(p) {
                p
            } else {
                DVec2::ZERO
            }
        });

        let mut draft = *self;
        let step = match method {
            ZoomMethod::Dolly => draft.dolly_toward_target(factor),
            ZoomMethod::Lens => draft.lens_zoom(factor),
        };
        let Some(step) = step else {
            return true;
        };

        if let Some(anchor) = anchor {
            let correction = draft.anchor_correction(viewport, anchor, &step);
            draft.shift(-correction);
        }
        *self = draft;
        true
    }

    /// Move the camera along `camera_z` so the target distance shrinks by
    /// `factor`. Returns `None` when nothing moved.
    fn dolly_toward_target(&mut self, factor: f64) -> Option<ZoomStep> {
        if !self.is_perspective() {
            log::debug!("dolly skipped: parallel projection");
            return None;
        }
        let target_distance = self.target_distance();
        if target_distance < 0.0 {
            log::debug!("dolly skipped: target behind camera");
            return None;
        }
        let delta = (1.0 - 1.0 / factor) * target_distance;
        let remaining = target_distance - delta;
        if remaining <= self.gestures.min_target_distance {
            log::debug!(
                "dolly skipped: remaining distance {remaining} below floor"
            );
            return None;
        }

        self.location -= delta * self.frame.z();

        let depth_scale = target_distance / self.frustum.near;
        Some(ZoomStep {
            ratio: remaining / target_distance,
            width: self.frustum.width() * depth_scale,
            height: self.frustum.height() * depth_scale,
        })
    }

    /// Scale the lateral frustum bounds by `1 / factor`.
    fn lens_zoom(&mut self, factor: f64) -> Option<ZoomStep> {
        let ratio = 1.0 / factor;
        let Some(zoomed) = self.frustum.scaled_lateral(ratio) else {
            log::debug!("lens zoom skipped: degenerate frustum");
            return None;
        };
        let step = ZoomStep {
            ratio,
            width: self.frustum.width(),
            height: self.frustum.height(),
        };
        self.frustum = zoomed;
        Some(step)
    }

    /// World-space offset that, subtracted from camera and target, puts the
    /// anchor's scene point back under the anchor pixel.
    fn anchor_correction(
        &self,
        viewport: ScreenPort,
        anchor: DVec2,
        step: &ZoomStep,
    ) -> DVec3 {
        let fx = anchor.x / f64::from(viewport.width);
        let fy = anchor.y / f64::from(viewport.height);
        let shrink = 1.0 - step.ratio;
        let dx = (0.5 - fx) * shrink * step.width / self.view_scale.x;
        let dy = (fy - 0.5) * shrink * step.height / self.view_scale.y;
        dx * self.frame.x() + dy * self.frame.y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::frustum::ProjectionMode;
    use crate::camera::rig::fixtures::{basis_error, rig};

    const PORT: ScreenPort = ScreenPort::new(800, 600);

    /// Scene point seen under `pixel`, at the depth of the target.
    fn point_under(rig: &CameraRig, pixel: DVec2) -> DVec3 {
        point_at_depth(rig, pixel, rig.target_distance())
    }

    /// Scene point seen under `pixel`, `depth` in front of the camera.
    fn point_at_depth(rig: &CameraRig, pixel: DVec2, depth: f64) -> DVec3 {
        let f = rig.frustum();
        let fx = pixel.x / f64::from(PORT.width);
        let fy = pixel.y / f64::from(PORT.height);
        let scale = if rig.is_perspective() {
            depth / f.near
        } else {
            1.0
        };
        let x = (f.left + fx * f.width()) * scale / rig.view_scale().x;
        let y = (f.top - fy * f.height()) * scale / rig.view_scale().y;
        rig.location() + x * rig.camera_x() + y * rig.camera_y()
            - depth * rig.camera_z()
    }

    #[test]
    fn locked_camera_is_untouched() {
        for method in [ZoomMethod::Dolly, ZoomMethod::Lens] {
            let mut rig = rig(ProjectionMode::Perspective);
            rig.set_location_locked(true);
            let before = rig;
            let anchor = Some(DVec2::new(100.0, 100.0));
            assert!(!rig.magnify(PORT, 2.0, method, anchor));
            assert_eq!(rig, before);
        }
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let mut rig = rig(ProjectionMode::Perspective);
        let before = rig;
        let empty = ScreenPort::new(0, 600);
        assert!(!rig.magnify(empty, 2.0, ZoomMethod::Lens, None));
        assert_eq!(rig, before);
    }

    #[test]
    fn non_positive_factor_changes_nothing() {
        let mut rig = rig(ProjectionMode::Perspective);
        let before = rig;
        for factor in [0.0, -2.0, f64::NAN] {
            assert!(rig.magnify(PORT, factor, ZoomMethod::Lens, None));
            assert!(rig.magnify(PORT, factor, ZoomMethod::Dolly, None));
        }
        assert_eq!(rig, before);
    }

    #[test]
    fn dolly_halves_target_distance() {
        let mut rig = rig(ProjectionMode::Perspective);
        assert!(rig.magnify(PORT, 2.0, ZoomMethod::Dolly, None));
        assert!((rig.target_distance() - 5.0).abs() < 1e-12);
        assert!(rig.location().abs_diff_eq(DVec3::new(0.0, -5.0, 0.0), 1e-12));
        assert!(rig.target().abs_diff_eq(DVec3::ZERO, 1e-12));
    }

    #[test]
    fn dolly_never_reaches_target() {
        let mut rig = rig(ProjectionMode::Perspective);
        let floor = rig.gestures().min_target_distance;
        for factor in [1e3, 1e9, 1e12, f64::MAX] {
            assert!(rig.magnify(PORT, factor, ZoomMethod::Dolly, None));
            assert!(rig.target_distance() > floor);
        }
        // A factor that would land inside the floor is refused outright.
        let before = rig;
        assert!(rig.magnify(PORT, 1e20, ZoomMethod::Dolly, None));
        assert_eq!(rig, before);
    }

    #[test]
    fn dolly_with_target_behind_camera_is_skipped() {
        let mut rig = rig(ProjectionMode::Perspective);
        assert!(rig.set_target_point(DVec3::new(0.0, -20.0, 0.0)));
        let before = rig;
        let anchor = Some(DVec2::new(10.0, 10.0));
        assert!(rig.magnify(PORT, 2.0, ZoomMethod::Dolly, anchor));
        assert_eq!(rig, before);
    }

    #[test]
    fn dolly_under_parallel_projection_is_skipped() {
        let mut rig = rig(ProjectionMode::Parallel);
        let before = rig;
        let anchor = Some(DVec2::new(10.0, 10.0));
        assert!(rig.magnify(PORT, 2.0, ZoomMethod::Dolly, anchor));
        assert_eq!(rig, before);
    }

    #[test]
    fn lens_zoom_inverse_restores_frustum() {
        for factor in [0.1, 0.5, 1.7, 4.0, 10.0] {
            let mut rig = rig(ProjectionMode::Perspective);
            let start = rig.frustum();
            let anchor = Some(DVec2::new(250.0, 410.0));
            assert!(rig.magnify(PORT, factor, ZoomMethod::Lens, anchor));
            assert!(rig.magnify(PORT, 1.0 / factor, ZoomMethod::Lens, anchor));
            let end = rig.frustum();
            assert!((end.left - start.left).abs() < 1e-12);
            assert!((end.right - start.right).abs() < 1e-12);
            assert!((end.bottom - start.bottom).abs() < 1e-12);
            assert!((end.top - start.top).abs() < 1e-12);
            assert_eq!(end.near, start.near);
            assert_eq!(end.far, start.far);
        }
    }

    #[test]
    fn lens_zoom_keeps_anchor_pixel() {
        for factor in [0.1, 0.25, 0.9, 1.5, 3.0, 10.0] {
            let mut rig = rig(ProjectionMode::Parallel);
            let anchor = DVec2::new(173.0, 422.0);
            let world = point_under(&rig, anchor);
            assert!(rig
                .world_to_screen(world)
                .unwrap()
                .abs_diff_eq(anchor, 1e-6));

            assert!(rig.magnify(PORT, factor, ZoomMethod::Lens, Some(anchor)));
            let seen = rig.world_to_screen(world).unwrap();
            assert!(seen.distance(anchor) < 1.0, "factor {factor}: {seen}");
        }
    }

    #[test]
    fn perspective_lens_zoom_holds_anchor_at_near_plane() {
        let mut rig = rig(ProjectionMode::Perspective);
        let anchor = DVec2::new(173.0, 422.0);
        let near = point_at_depth(&rig, anchor, rig.frustum().near);
        let deep = point_at_depth(&rig, anchor, rig.target_distance());
        assert!(rig.magnify(PORT, 3.0, ZoomMethod::Lens, Some(anchor)));

        let seen = rig.world_to_screen(near).unwrap();
        assert!(seen.distance(anchor) < 1.0, "{seen}");
        // The correction is sized at the near plane, not the target
        let drifted = rig.world_to_screen(deep).unwrap();
        assert!(drifted.distance(anchor) > 100.0, "{drifted}");
    }

    #[test]
    fn dolly_zoom_keeps_anchor_pixel() {
        for factor in [0.5, 1.25, 2.0, 8.0] {
            let mut rig = rig(ProjectionMode::Perspective);
            let anchor = DVec2::new(620.0, 95.0);
            let world = point_under(&rig, anchor);
            assert!(rig.magnify(PORT, factor, ZoomMethod::Dolly, Some(anchor)));
            let seen = rig.world_to_screen(world).unwrap();
            assert!(seen.distance(anchor) < 1.0, "factor {factor}: {seen}");
        }
    }

    #[test]
    fn view_scale_is_honored_by_anchor() {
        let mut rig = rig(ProjectionMode::Parallel);
        assert!(rig.set_view_scale(DVec2::new(2.0, 0.5)));
        let anchor = DVec2::new(700.0, 50.0);
        let world = point_under(&rig, anchor);
        assert!(rig.magnify(PORT, 3.0, ZoomMethod::Lens, Some(anchor)));
        let seen = rig.world_to_screen(world).unwrap();
        assert!(seen.distance(anchor) < 1.0, "{seen}");
    }

    #[test]
    fn offscreen_anchor_snaps_to_origin() {
        let mut snapped = rig(ProjectionMode::Parallel);
        let mut origin = snapped;
        let outside = Some(DVec2::new(-40.0, 9000.0));
        assert!(snapped.magnify(PORT, 2.0, ZoomMethod::Lens, outside));
        assert!(origin.magnify(PORT, 2.0, ZoomMethod::Lens, Some(DVec2::ZERO)));
        assert_eq!(snapped, origin);

        // Origin anchor still corrects: the view shifts toward the corner.
        let plain = {
            let mut r = rig(ProjectionMode::Parallel);
            assert!(r.magnify(PORT, 2.0, ZoomMethod::Lens, None));
            r
        };
        assert_ne!(snapped.location(), plain.location());
    }

    #[test]
    fn centered_anchor_needs_no_correction() {
        let mut rig = rig(ProjectionMode::Perspective);
        let start = rig.location();
        let center = Some(DVec2::new(400.0, 300.0));
        assert!(rig.magnify(PORT, 2.0, ZoomMethod::Lens, center));
        assert!(rig.location().abs_diff_eq(start, 1e-12));
    }

    #[test]
    fn zoom_preserves_basis() {
        let mut rig = rig(ProjectionMode::Perspective);
        let anchor = Some(DVec2::new(33.0, 570.0));
        assert!(rig.magnify(PORT, 3.0, ZoomMethod::Dolly, anchor));
        assert!(rig.magnify(PORT, 0.4, ZoomMethod::Lens, anchor));
        assert!(basis_error(&rig) < 1e-9);
    }
}
