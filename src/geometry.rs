//! Rotation transforms and small vector helpers shared by the gesture code.
//!
//! Points go through [`DAffine3::transform_point3`]; basis vectors go through
//! [`DAffine3::transform_vector3`], which ignores the center translation.

use glam::{DAffine3, DVec3};

/// Vectors at or below this length cannot define a direction.
pub const TINY_LENGTH: f64 = 1.0e-12;

/// Whether `v` is too short to define a direction.
#[inline]
#[must_use]
pub fn is_tiny(v: DVec3) -> bool {
    v.length_squared() <= TINY_LENGTH * TINY_LENGTH
}

/// Unit-length copy of `v`, or `None` when `v` is tiny or not finite.
#[inline]
#[must_use]
pub fn unitize(v: DVec3) -> Option<DVec3> {
    if is_tiny(v) {
        None
    } else {
        v.try_normalize()
    }
}

/// Rotation by `angle` radians about `axis` through `center`.
///
/// Returns `None` when `axis` is degenerate.
#[must_use]
pub fn rotation(angle: f64, axis: DVec3, center: DVec3) -> Option<DAffine3> {
    let axis = unitize(axis)?;
    Some(about_center(DAffine3::from_axis_angle(axis, angle), center))
}

/// Rotation given the sine and cosine of its angle. Neither needs to be
/// normalized; only their ratio and signs matter.
#[must_use]
pub fn rotation_sin_cos(
    sin: f64,
    cos: f64,
    axis: DVec3,
    center: DVec3,
) -> Option<DAffine3> {
    if sin == 0.0 && cos == 0.0 {
        return None;
    }
    rotation(sin.atan2(cos), axis, center)
}

fn about_center(rotation: DAffine3, center: DVec3) -> DAffine3 {
    DAffine3::from_translation(center)
        * rotation
        * DAffine3::from_translation(-center)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn quarter_turn_about_z() {
        let rot = rotation(FRAC_PI_2, DVec3::Z, DVec3::ZERO).unwrap();
        let v = rot.transform_vector3(DVec3::X);
        assert!(v.abs_diff_eq(DVec3::Y, EPS));
    }

    #[test]
    fn center_is_a_fixed_point() {
        let center = DVec3::new(3.0, -2.0, 5.0);
        let rot = rotation(1.234, DVec3::new(1.0, 1.0, 0.0), center).unwrap();
        assert!(rot.transform_point3(center).abs_diff_eq(center, EPS));

        // Vectors are unaffected by the center offset
        let v = rot.transform_vector3(DVec3::new(1.0, -1.0, 0.0).normalize());
        assert!((v.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn sin_cos_matches_angle() {
        let axis = DVec3::new(0.2, -0.7, 0.4);
        let angle: f64 = 0.8;
        let a = rotation(angle, axis, DVec3::ONE).unwrap();
        // Unnormalized sin/cos pair with the same ratio
        let b = rotation_sin_cos(3.0 * angle.sin(), 3.0 * angle.cos(), axis, DVec3::ONE)
            .unwrap();
        assert!(a.abs_diff_eq(b, EPS));
    }

    #[test]
    fn degenerate_axis_has_no_rotation() {
        assert!(rotation(1.0, DVec3::ZERO, DVec3::ZERO).is_none());
        assert!(rotation(1.0, DVec3::splat(1e-14), DVec3::ZERO).is_none());
        assert!(rotation_sin_cos(0.0, 0.0, DVec3::Z, DVec3::ZERO).is_none());
    }

    #[test]
    fn unitize_rejects_tiny_vectors() {
        assert!(unitize(DVec3::ZERO).is_none());
        assert!(unitize(DVec3::new(f64::NAN, 0.0, 1.0)).is_none());
        let u = unitize(DVec3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((u.length() - 1.0).abs() < EPS);
    }
}
