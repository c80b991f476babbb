use nalgebra::{Unit, UnitQuaternion};

use crate::error::{GeometryError, Result};

use super::{Vector3, TOLERANCE};

/// Normalizes `v`, failing on a zero-length vector instead of producing NaNs.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` has no length.
pub fn unit(v: &Vector3) -> Result<Unit<Vector3>> {
    Unit::try_new(*v, TOLERANCE).ok_or_else(|| GeometryError::ZeroVector.into())
}

/// Rotates `v` by `angle` radians around `axis` (right-hand rule).
#[must_use]
pub fn rotate_about_axis(v: &Vector3, axis: &Unit<Vector3>, angle: f64) -> Vector3 {
    UnitQuaternion::from_axis_angle(axis, angle) * v
}

/// Picks a unit vector perpendicular to `dir`.
///
/// Crosses with world up (+Y), falling back to +X when `dir` is (nearly)
/// vertical, so the choice is stable for a given direction.
#[must_use]
pub fn perpendicular(dir: &Unit<Vector3>) -> Unit<Vector3> {
    let candidate = dir.cross(&Vector3::y());
    if candidate.norm() > 1e-6 {
        Unit::new_normalize(candidate)
    } else {
        Unit::new_normalize(dir.cross(&Vector3::x()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn unit_of_zero_vector_fails() {
        assert!(unit(&Vector3::zeros()).is_err());
    }

    #[test]
    fn quarter_turn_about_y() {
        let axis = unit(&Vector3::y()).unwrap();
        let r = rotate_about_axis(&Vector3::x(), &axis, FRAC_PI_2);
        assert_abs_diff_eq!(r, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        for d in [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -3.0, 0.0),
            Vector3::new(1.0, 2.0, 3.0),
        ] {
            let dir = unit(&d).unwrap();
            let p = perpendicular(&dir);
            assert_abs_diff_eq!(p.dot(&dir), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(p.norm(), 1.0, epsilon = 1e-12);
        }
    }
}
