use crate::error::{OperationError, Result};
use crate::math::Point3;

/// An ordered sequence of 3D waypoints.
///
/// Order defines the direction of travel, which in turn orients every
/// cross-section swept along the path.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point3>,
}

impl Path {
    /// Creates a path from its points.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Returns the waypoints in travel order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the path has no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the path, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

impl From<Vec<Point3>> for Path {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}

/// Radius of a pipe along its path.
#[derive(Debug, Clone, PartialEq)]
pub enum RadiusProfile {
    /// The same radius at every vertex.
    Uniform(f64),
    /// One radius per path vertex.
    Varying(Vec<f64>),
}

impl RadiusProfile {
    /// Returns the radius at vertex `index`.
    ///
    /// Callers must have checked the profile against the path with
    /// [`RadiusProfile::check_len`].
    #[must_use]
    pub fn at(&self, index: usize) -> f64 {
        match self {
            Self::Uniform(r) => *r,
            Self::Varying(radii) => radii[index],
        }
    }

    /// Verifies that a varying profile carries exactly one radius per vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is varying and its length differs from
    /// `path_len`.
    pub fn check_len(&self, path_len: usize) -> Result<()> {
        match self {
            Self::Uniform(_) => Ok(()),
            Self::Varying(radii) if radii.len() == path_len => Ok(()),
            Self::Varying(radii) => Err(OperationError::InvalidInput(format!(
                "need a radius per path point: got {} radii for {path_len} points",
                radii.len()
            ))
            .into()),
        }
    }
}
