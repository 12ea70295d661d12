//! Transforms between world, camera, clip and screen coordinates.
//!
//! Clip space follows the GL convention (x, y, z in `[-1, 1]`, camera looks
//! down `-z`). Screen space is in pixels with the origin at the top-left
//! corner and y growing downward.

use glam::{DMat4, DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use super::frustum::ProjectionMode;
use super::rig::CameraRig;

/// Pixel size of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPort {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScreenPort {
    /// Create a port of `width` × `height` pixels.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Either dimension is below one pixel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width < 1 || self.height < 1
    }

    /// Width / height. Zero-height ports report an aspect of 1.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }

    /// Whether `point` lies on a pixel of the port, i.e. inside
    /// `[0, width-1] × [0, height-1]`.
    #[must_use]
    pub fn contains(&self, point: DVec2) -> bool {
        let max_x = f64::from(self.width) - 1.0;
        let max_y = f64::from(self.height) - 1.0;
        (0.0..=max_x).contains(&point.x) && (0.0..=max_y).contains(&point.y)
    }

    /// Map pixel coordinates to clip space. Depth passes through.
    #[must_use]
    pub fn screen_to_clip(&self) -> DMat4 {
        let w = f64::from(self.width.max(1));
        let h = f64::from(self.height.max(1));
        DMat4::from_cols(
            DVec4::new(2.0 / w, 0.0, 0.0, 0.0),
            DVec4::new(0.0, -2.0 / h, 0.0, 0.0),
            DVec4::Z,
            DVec4::new(-1.0, 1.0, 0.0, 1.0),
        )
    }

    /// Map clip space to pixel coordinates. Depth passes through.
    #[must_use]
    pub fn clip_to_screen(&self) -> DMat4 {
        let half_w = 0.5 * f64::from(self.width);
        let half_h = 0.5 * f64::from(self.height);
        DMat4::from_cols(
            DVec4::new(half_w, 0.0, 0.0, 0.0),
            DVec4::new(0.0, -half_h, 0.0, 0.0),
            DVec4::Z,
            DVec4::new(half_w, half_h, 0.0, 1.0),
        )
    }
}

/// Coordinate systems a point can be expressed in, ordered from world to
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoordinateSystem {
    /// World space.
    World,
    /// Camera space: origin at the camera, axes are the camera basis.
    Camera,
    /// Homogeneous clip space.
    Clip,
    /// Pixel coordinates.
    Screen,
}

const CHAIN: [CoordinateSystem; 4] = [
    CoordinateSystem::World,
    CoordinateSystem::Camera,
    CoordinateSystem::Clip,
    CoordinateSystem::Screen,
];

impl CoordinateSystem {
    const fn index(self) -> usize {
        match self {
            Self::World => 0,
            Self::Camera => 1,
            Self::Clip => 2,
            Self::Screen => 3,
        }
    }
}

impl CameraRig {
    /// World → camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        let (x, y, z) = (self.frame.x(), self.frame.y(), self.frame.z());
        let eye = self.location;
        DMat4::from_cols(
            DVec4::new(x.x, y.x, z.x, 0.0),
            DVec4::new(x.y, y.y, z.y, 0.0),
            DVec4::new(x.z, y.z, z.z, 0.0),
            DVec4::new(-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0),
        )
    }

    /// Camera → clip transform, including the lateral view scale.
    #[must_use]
    pub fn projection_matrix(&self) -> DMat4 {
        let f = self.frustum;
        let proj = match self.projection {
            ProjectionMode::Perspective => {
                let (w, h, d) = (f.width(), f.height(), f.far - f.near);
                DMat4::from_cols(
                    DVec4::new(2.0 * f.near / w, 0.0, 0.0, 0.0),
                    DVec4::new(0.0, 2.0 * f.near / h, 0.0, 0.0),
                    DVec4::new(
                        (f.right + f.left) / w,
                        (f.top + f.bottom) / h,
                        -(f.far + f.near) / d,
                        -1.0,
                    ),
                    DVec4::new(0.0, 0.0, -2.0 * f.far * f.near / d, 0.0),
                )
            }
            ProjectionMode::Parallel => DMat4::orthographic_rh_gl(
                f.left, f.right, f.bottom, f.top, f.near, f.far,
            ),
        };
        DMat4::from_scale(self.view_scale.extend(1.0)) * proj
    }

    fn forward_step(&self, from: CoordinateSystem) -> DMat4 {
        match from {
            CoordinateSystem::World => self.view_matrix(),
            CoordinateSystem::Camera => self.projection_matrix(),
            CoordinateSystem::Clip => self.screen_port.clip_to_screen(),
            CoordinateSystem::Screen => DMat4::IDENTITY,
        }
    }

    fn backward_step(&self, from: CoordinateSystem) -> DMat4 {
        match from {
            CoordinateSystem::World => DMat4::IDENTITY,
            CoordinateSystem::Camera => self.view_matrix().inverse(),
            CoordinateSystem::Clip => self.projection_matrix().inverse(),
            CoordinateSystem::Screen => self.screen_port.screen_to_clip(),
        }
    }

    /// Transform taking points expressed in `from` to `to`.
    ///
    /// Going toward clip space is a projective map; apply it with
    /// [`DMat4::project_point3`] to get the perspective divide.
    #[must_use]
    pub fn xform(
        &self,
        from: CoordinateSystem,
        to: CoordinateSystem,
    ) -> DMat4 {
        let (a, b) = (from.index(), to.index());
        if a <= b {
            CHAIN[a..b]
                .iter()
                .fold(DMat4::IDENTITY, |m, sys| self.forward_step(*sys) * m)
        } else {
            CHAIN[b + 1..=a]
                .iter()
                .rev()
                .fold(DMat4::IDENTITY, |m, sys| self.backward_step(*sys) * m)
        }
    }

    /// Pixel position of a world point, or `None` when it sits at or behind
    /// the eye of a perspective camera.
    #[must_use]
    pub fn world_to_screen(&self, point: DVec3) -> Option<DVec2> {
        let clip = self.xform(CoordinateSystem::World, CoordinateSystem::Clip)
            * point.extend(1.0);
        if clip.w <= f64::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let screen = self.screen_port.clip_to_screen().transform_point3(ndc);
        Some(screen.truncate())
    }
}
