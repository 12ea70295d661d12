//! View frustum bounds and projection mode.
//!
//! Bounds are in camera space: `left`/`right`/`bottom`/`top` are measured on
//! the near plane, `near`/`far` are positive distances along the view
//! direction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// How camera space is projected to clip space.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Perspective projection; lateral extents grow with depth.
    #[default]
    Perspective,
    /// Parallel (orthographic) projection.
    Parallel,
}

/// Six-sided view volume.
///
/// Deserialization goes through [`Frustum::new`], so saved bounds that do
/// not enclose a volume are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrustumBounds")]
pub struct Frustum {
    /// Left bound on the near plane.
    pub left: f64,
    /// Right bound on the near plane.
    pub right: f64,
    /// Bottom bound on the near plane.
    pub bottom: f64,
    /// Top bound on the near plane.
    pub top: f64,
    /// Near clipping distance.
    pub near: f64,
    /// Far clipping distance.
    pub far: f64,
}

/// Unchecked wire form of [`Frustum`].
#[derive(Deserialize)]
struct FrustumBounds {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
}

impl TryFrom<FrustumBounds> for Frustum {
    type Error = RigError;

    fn try_from(b: FrustumBounds) -> Result<Self, Self::Error> {
        Self::new(b.left, b.right, b.bottom, b.top, b.near, b.far).ok_or(
            RigError::InvalidState("frustum bounds do not enclose a volume"),
        )
    }
}

impl Frustum {
    /// Build a frustum, rejecting bounds that do not enclose a volume.
    #[must_use]
    pub fn new(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Option<Self> {
        let frustum = Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        };
        frustum.is_valid().then_some(frustum)
    }

    /// Frustum centered on the view axis from a vertical field of view
    /// (radians) and a width/height aspect ratio.
    #[must_use]
    pub fn symmetric(
        fovy: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Option<Self> {
        let usable = fovy > 0.0 && fovy < std::f64::consts::PI && aspect > 0.0;
        if !usable {
            return None;
        }
        let half_height = near * (0.5 * fovy).tan();
        let half_width = half_height * aspect;
        Self::new(-half_width, half_width, -half_height, half_height, near, far)
    }

    /// `left < right`, `bottom < top`, `0 < near < far`, all finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let finite = [
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        ]
        .iter()
        .all(|v| v.is_finite());
        finite
            && self.left < self.right
            && self.bottom < self.top
            && 0.0 < self.near
            && self.near < self.far
    }

    /// `right - left`.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `top - bottom`.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Scale the four lateral bounds by `scale`, leaving near/far alone.
    ///
    /// This is lens zoom: the field of view changes, the camera does not
    /// move. Returns `None` when the result would be invalid.
    #[must_use]
    pub fn scaled_lateral(&self, scale: f64) -> Option<Self> {
        Self::new(
            self.left * scale,
            self.right * scale,
            self.bottom * scale,
            self.top * scale,
            self.near,
            self.far,
        )
    }
}
