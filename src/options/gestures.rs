use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Limits and scales read by the gesture operations.
pub struct GestureOptions {
    /// Closest a dolly zoom may bring the camera to its target.
    #[schemars(skip)]
    pub min_target_distance: f64,
    /// Largest allowed |z| of the view direction when rotating toward the
    /// world vertical.
    #[schemars(title = "Gimbal Limit", range(min = 0.5, max = 0.999), extend("step" = 0.001))]
    pub gimbal_limit: f64,
    /// Orbit angle in radians for a drag across the full viewport width.
    #[schemars(title = "Orbit Span", range(min = 0.5, max = 6.3), extend("step" = 0.05))]
    pub orbit_span: f64,
    /// Roll applied by `set_target`, in radians.
    #[schemars(skip)]
    pub tilt_angle: f64,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            min_target_distance: 1.0e-6,
            gimbal_limit: 0.99,
            orbit_span: std::f64::consts::PI,
            tilt_angle: 0.0,
        }
    }
}
