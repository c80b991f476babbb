use crate::error::{OperationError, Result};
use crate::geometry::{Path, PipeSegment, RadiusProfile};
use crate::mesh::Model;

use super::cross_section::{check_sides, sample_ring};
use super::stitch::stitch_rings;

/// Parameters for pipe sweeping.
#[derive(Debug, Clone, Copy)]
pub struct PipeParams {
    /// Number of points on each cross-section ring.
    pub sides: usize,
}

impl Default for PipeParams {
    fn default() -> Self {
        Self { sides: 32 }
    }
}

/// Sweeps a circular cross-section along a path to build a tube.
///
/// A ring is sampled at every path vertex and consecutive rings are stitched
/// together. The first vertex faces the next one; every other vertex faces
/// away from its predecessor, so interior rings lag one segment behind the
/// turn rather than bisecting it. Ends are left open: drive the radius to 0 at
/// the terminal samples to close them.
#[derive(Debug)]
pub struct BuildPipe {
    path: Path,
    radii: RadiusProfile,
    params: PipeParams,
}

impl BuildPipe {
    /// Creates a new `BuildPipe` operation.
    #[must_use]
    pub fn new(path: Path, radii: RadiusProfile, params: PipeParams) -> Self {
        Self {
            path,
            radii,
            params,
        }
    }

    /// Creates a pipe operation with the same radius at every vertex.
    #[must_use]
    pub fn uniform(path: Path, radius: f64, params: PipeParams) -> Self {
        Self::new(path, RadiusProfile::Uniform(radius), params)
    }

    /// Creates a pipe operation following a chain of pipe samples.
    #[must_use]
    pub fn from_segment(segment: PipeSegment, params: PipeParams) -> Self {
        let (path, radii) = segment.into_parts();
        Self::new(path, radii, params)
    }

    /// Executes the sweep.
    ///
    /// The resulting model holds `2 * sides * (points - 1)` triangles in path
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has fewer than 2 points, a varying radius
    /// profile does not match the path length, the side count is below 3, or
    /// two consecutive points coincide.
    pub fn execute(&self) -> Result<Model> {
        let points = self.path.points();
        let n = points.len();
        if n < 2 {
            return Err(OperationError::InvalidInput(
                "unable to create a pipe with less than 2 points".to_owned(),
            )
            .into());
        }
        self.radii.check_len(n)?;
        check_sides(self.params.sides)?;

        let rings = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let dir = if i == 0 {
                    points[1] - points[0]
                } else {
                    points[i] - points[i - 1]
                };
                sample_ring(p, &dir, self.radii.at(i), self.params.sides)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut polygons = Vec::with_capacity(2 * self.params.sides * (n - 1));
        for pair in rings.windows(2) {
            polygons.extend(stitch_rings(&pair[0], &pair[1])?);
        }

        tracing::debug!(
            points = n,
            sides = self.params.sides,
            polygons = polygons.len(),
            "built pipe"
        );
        Ok(Model::new(polygons))
    }
}
