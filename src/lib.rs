// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Viewport camera rig driven by screen-space gestures.
//!
//! A [`CameraRig`] is the camera of one interactive 3D viewport: location,
//! look-at target, an orthonormal basis, a frustum and a projection mode.
//! Hosts feed it pixel-space input and read back view and projection
//! matrices. Gestures never leave the rig half-updated; each one either
//! commits a complete new state or reports rejection and changes nothing.
//!
//! # Key entry points
//!
//! - [`CameraRig`] - camera state and every gesture
//! - [`RigCommand`] - serializable gesture vocabulary, applied with
//!   [`CameraRig::execute`]
//! - [`RigOptions`] - initial placement and gesture limits, loadable from
//!   TOML presets
//!
//! # Coordinate conventions
//!
//! World vertical is +Z. The camera looks down its own `-z` axis. Clip
//! space follows the GL convention and screen space has its origin at the
//! top-left pixel with y growing downward.
//!
//! ```
//! use camrig::{CameraRig, RigOptions, ScreenPort, ZoomMethod};
//! use glam::DVec2;
//!
//! let port = ScreenPort::new(800, 600);
//! let mut rig =
//!     CameraRig::from_options(&RigOptions::default(), port).unwrap();
//! rig.pan(DVec2::new(400.0, 300.0), DVec2::new(420.0, 300.0));
//! assert!(rig.magnify(port, 1.2, ZoomMethod::Dolly, None));
//! assert!(rig.orbit(port, DVec2::new(400.0, 300.0), DVec2::new(380.0, 290.0)));
//! ```

pub mod camera;
pub mod command;
pub mod error;
pub mod geometry;
pub mod options;

pub use camera::{
    CameraFrame, CameraRig, CoordinateSystem, Frustum, ProjectionMode,
    ScreenPort, ZoomMethod, WORLD_UP,
};
pub use command::RigCommand;
pub use error::RigError;
pub use options::{CameraOptions, GestureOptions, RigOptions};
