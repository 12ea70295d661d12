use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::ProjectionMode;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial projection and placement of a new rig.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f64,
    /// Perspective or parallel projection.
    #[schemars(title = "Projection")]
    pub projection: ProjectionMode,
    /// Initial camera location.
    #[schemars(skip)]
    pub location: [f64; 3],
    /// Initial look-at point.
    #[schemars(skip)]
    pub target: [f64; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 1000.0,
            projection: ProjectionMode::Perspective,
            location: [0.0, -10.0, 0.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}
