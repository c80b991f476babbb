use crate::error::{OperationError, Result};
use crate::math::Point3;

use super::{Path, RadiusProfile};

/// An ordered chain of pipe samples, each a position with its radius.
///
/// Segments describe pieces of a pipe (a tapered tip, a gradient transition,
/// a cylindrical body) that are chained with [`PipeSegment::then`] before a
/// single pipe build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipeSegment {
    positions: Vec<Point3>,
    radii: Vec<f64>,
}

impl PipeSegment {
    /// Creates a segment from parallel position and radius lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the two lists differ in length.
    pub fn new(positions: Vec<Point3>, radii: Vec<f64>) -> Result<Self> {
        if positions.len() != radii.len() {
            return Err(OperationError::InvalidInput(format!(
                "pipe segment has {} positions but {} radii",
                positions.len(),
                radii.len()
            ))
            .into());
        }
        Ok(Self { positions, radii })
    }

    /// Creates a segment from `(position, radius)` samples.
    #[must_use]
    pub fn from_samples(samples: impl IntoIterator<Item = (Point3, f64)>) -> Self {
        let (positions, radii) = samples.into_iter().unzip();
        Self { positions, radii }
    }

    /// Appends `other` after this segment.
    ///
    /// Not commutative: the last sample of `self` directly precedes the first
    /// sample of `other`, following the direction of flow.
    #[must_use]
    pub fn then(mut self, other: PipeSegment) -> Self {
        self.positions.extend(other.positions);
        self.radii.extend(other.radii);
        self
    }

    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    #[must_use]
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the first sample.
    #[must_use]
    pub fn first(&self) -> Option<(Point3, f64)> {
        Some((*self.positions.first()?, *self.radii.first()?))
    }

    /// Returns the last sample.
    #[must_use]
    pub fn last(&self) -> Option<(Point3, f64)> {
        Some((*self.positions.last()?, *self.radii.last()?))
    }

    /// Splits the segment into a path and its varying radius profile.
    #[must_use]
    pub fn into_parts(self) -> (Path, RadiusProfile) {
        (Path::new(self.positions), RadiusProfile::Varying(self.radii))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn seg(ys: &[f64], r: f64) -> PipeSegment {
        PipeSegment::from_samples(ys.iter().map(|&y| (Point3::new(0.0, y, 0.0), r)))
    }

    #[test]
    fn mismatched_lengths_fail() {
        let result = PipeSegment::new(vec![Point3::origin()], vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn then_preserves_flow_order() {
        let a = seg(&[0.0, 1.0], 0.5);
        let b = seg(&[2.0, 3.0], 0.25);

        let ab = a.clone().then(b.clone());
        let ba = b.then(a);

        assert_eq!(ab.len(), 4);
        assert_ne!(ab, ba);
        let ys: Vec<f64> = ab.positions().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(ab.radii(), &[0.5, 0.5, 0.25, 0.25]);
    }

    #[test]
    fn first_and_last_samples() {
        let s = seg(&[1.0, 2.0, 3.0], 0.1);
        assert_eq!(s.first().unwrap().0, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(s.last().unwrap().0, Point3::new(0.0, 3.0, 0.0));
        assert!(PipeSegment::default().last().is_none());
        assert!(PipeSegment::default().is_empty());
    }

    #[test]
    fn into_parts_produces_varying_profile() {
        let (path, radii) = seg(&[0.0, 1.0, 2.0], 0.3).into_parts();
        assert_eq!(path.len(), 3);
        assert!(radii.check_len(path.len()).is_ok());
    }
}
