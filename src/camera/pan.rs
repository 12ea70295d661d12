//! Lateral pan.

use glam::{DVec2, DVec3};

use super::rig::CameraRig;

impl CameraRig {
    /// Slide camera and target sideways so the point under `from` ends up
    /// under `to`.
    ///
    /// Under perspective the pan is measured at the target's depth. The lock
    /// flag is not consulted: a location-locked camera can still be panned.
    pub fn pan(&mut self, from: DVec2, to: DVec2) {
        let s2c = self.screen_port.screen_to_clip();
        let clip0 = s2c.transform_point3(from.extend(0.0));
        let clip1 = s2c.transform_point3(to.extend(0.0));

        let mut delta_x = 0.5 * (clip1.x - clip0.x) * self.frustum.width();
        let mut delta_y = 0.5 * (clip1.y - clip0.y) * self.frustum.height();
        if self.is_perspective() {
            let s = self.target.distance(self.location) / self.frustum.near;
            delta_x *= s;
            delta_y *= s;
        }

        let dolly: DVec3 = delta_x * self.frame.x() + delta_y * self.frame.y();
        if !dolly.is_finite() {
            log::debug!("pan skipped: non-finite offset {dolly}");
            return;
        }
        self.shift(-dolly);
    }
}
