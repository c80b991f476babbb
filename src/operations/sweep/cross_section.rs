use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::math::rotate::{perpendicular, rotate_about_axis, unit};
use crate::math::{Point3, Vector3};

/// Minimum number of sides for a cross-section ring.
pub const MIN_SIDES: usize = 3;

/// Samples `sides` points on a circle of `radius` around `center`, in the
/// plane perpendicular to `direction`.
///
/// Points are in angular order, each rotated `2π / sides` further around
/// `direction` than the previous one.
///
/// # Errors
///
/// Returns an error if `direction` is zero-length or `sides` is below
/// [`MIN_SIDES`].
#[allow(clippy::cast_precision_loss)]
pub fn sample_ring(
    center: &Point3,
    direction: &Vector3,
    radius: f64,
    sides: usize,
) -> Result<Vec<Point3>> {
    check_sides(sides)?;
    let axis = unit(direction)?;
    let spoke = perpendicular(&axis).into_inner() * radius;
    let step = TAU / sides as f64;

    Ok((0..sides)
        .map(|k| center + rotate_about_axis(&spoke, &axis, step * k as f64))
        .collect())
}

/// Validates a ring side count.
///
/// # Errors
///
/// Returns an error if `sides` is below [`MIN_SIDES`].
pub fn check_sides(sides: usize) -> Result<()> {
    if sides < MIN_SIDES {
        return Err(OperationError::InvalidInput(format!(
            "a ring needs at least {MIN_SIDES} sides, got {sides}"
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn ring_points_lie_at_radius() {
        let center = Point3::new(1.0, -2.0, 3.0);
        let ring = sample_ring(&center, &Vector3::new(1.0, 1.0, 0.5), 2.5, 32).unwrap();
        assert_eq!(ring.len(), 32);
        for p in &ring {
            assert_abs_diff_eq!((p - center).norm(), 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn ring_is_perpendicular_to_direction() {
        let center = Point3::origin();
        let dir = Vector3::new(0.0, 0.0, 4.0);
        let ring = sample_ring(&center, &dir, 1.0, 16).unwrap();
        for p in &ring {
            assert_abs_diff_eq!((p - center).dot(&dir), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn ring_points_evenly_spaced() {
        let sides = 12;
        let center = Point3::new(0.0, 5.0, 0.0);
        let ring = sample_ring(&center, &Vector3::new(0.3, 0.2, -1.0), 2.0, sides).unwrap();
        let expected = TAU / sides as f64;
        for k in 0..sides {
            let a = ring[k] - center;
            let b = ring[(k + 1) % sides] - center;
            assert_abs_diff_eq!(a.angle(&b), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn vertical_direction_uses_fallback_axis() {
        let ring = sample_ring(&Point3::origin(), &Vector3::new(0.0, -1.0, 0.0), 1.0, 8).unwrap();
        for p in &ring {
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(p.coords.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let center = Point3::new(2.0, 2.0, 2.0);
        let ring = sample_ring(&center, &Vector3::x(), 0.0, 8).unwrap();
        assert!(ring.iter().all(|p| *p == center));
    }

    #[test]
    fn zero_direction_fails() {
        assert!(sample_ring(&Point3::origin(), &Vector3::zeros(), 1.0, 8).is_err());
    }

    #[test]
    fn too_few_sides_fails() {
        assert!(sample_ring(&Point3::origin(), &Vector3::x(), 1.0, 2).is_err());
    }

    #[test]
    fn sampling_is_deterministic() {
        let dir = Vector3::new(0.7, -0.1, 0.2);
        let a = sample_ring(&Point3::origin(), &dir, 1.5, 64).unwrap();
        let b = sample_ring(&Point3::origin(), &dir, 1.5, 64).unwrap();
        assert_eq!(a, b);
    }
}
