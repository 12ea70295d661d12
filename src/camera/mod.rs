//! Interactive viewport camera.
//!
//! A [`CameraRig`] holds the camera location, look-at target, orthonormal
//! basis, frustum and projection mode, and implements the gestures a
//! viewport drives it with: pan, magnify (dolly or lens), orbit, free
//! rotation and retargeting. Every gesture either commits a complete new
//! state or leaves the rig untouched.

/// View frustum bounds and projection mode.
pub mod frustum;
mod magnify;
mod orbit;
mod pan;
mod rig;
mod target;
/// Coordinate systems, screen ports and the matrices between them.
pub mod xform;

pub use frustum::{Frustum, ProjectionMode};
pub use magnify::ZoomMethod;
pub use rig::{CameraFrame, CameraRig, WORLD_UP};
pub use xform::{CoordinateSystem, ScreenPort};
