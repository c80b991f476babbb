use crate::error::{OperationError, Result};
use crate::geometry::{Path, Segment3};
use crate::math::rotate::unit;
use crate::math::{up, Vector3};
use crate::mesh::{make_square, Model};

use super::railing::{posts, rail};
use super::{AlignSegments, PlatformParams};

/// Builds a closed walkway around a centerline, with railings and posts.
///
/// The centerline is treated as a loop: its last point connects back to the
/// first. Each centerline edge is offset half the width to either side, both
/// offset loops are mitered with [`AlignSegments`], and a flat ribbon is laid
/// between them. Every edge gets a top and a lower railing on both sides and
/// evenly spaced support posts.
#[derive(Debug)]
pub struct BuildLoopingPlatform {
    centerline: Path,
    params: PlatformParams,
}

impl BuildLoopingPlatform {
    /// Creates a new `BuildLoopingPlatform` operation.
    #[must_use]
    pub fn new(centerline: Path, params: PlatformParams) -> Self {
        Self { centerline, params }
    }

    /// Returns the raw `(left, right)` offset edges, one per centerline edge.
    ///
    /// Edge `i` runs from centerline point `i - 1` (wrapping to the last
    /// point) to point `i`; "right" is `direction × up`.
    ///
    /// # Errors
    ///
    /// Returns an error if the centerline has fewer than 3 points or an edge
    /// is vertical or zero-length.
    pub fn offset_edges(&self) -> Result<(Vec<Segment3>, Vec<Segment3>)> {
        let points = self.centerline.points();
        let n = points.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(
                "unable to create a looping platform with less than 3 points".to_owned(),
            )
            .into());
        }

        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        for i in 0..n {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            let dir = points[i] - points[prev];
            let side: Vector3 = unit(&dir.cross(&up()))?.into_inner() * self.params.half_width();

            left.push(Segment3::new(points[prev] - side, points[i] - side));
            right.push(Segment3::new(points[prev] + side, points[i] + side));
        }
        Ok((left, right))
    }

    /// Returns the mitered `(left, right)` walkway edges.
    ///
    /// # Errors
    ///
    /// Returns an error if [`Self::offset_edges`] fails or either edge loop
    /// cannot be mitered.
    pub fn aligned_edges(&self) -> Result<(Vec<Segment3>, Vec<Segment3>)> {
        let (left, right) = self.offset_edges()?;
        let left = AlignSegments::new(left).execute()?;
        let right = AlignSegments::new(right).execute()?;
        Ok((left, right))
    }

    /// Executes the build.
    ///
    /// The model holds the walkway ribbon first, then per edge: left and
    /// right top railings, left and right lower railings, left posts, right
    /// posts.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the centerline has
    /// fewer than 3 points, or the edges cannot be mitered. No partial model
    /// is returned.
    pub fn execute(&self) -> Result<Model> {
        self.params.validate()?;
        let (left, right) = self.aligned_edges()?;

        let rise = up() * self.params.railing_height;
        let drop = up() * -self.params.lower_railing_drop;

        let mut walkway = Model::default();
        let mut railing = Model::default();
        for (l, r) in left.iter().zip(&right) {
            walkway.extend(make_square(l.start, l.end, r.end, r.start));

            let left_rail = rail(l.start + rise, l.end + rise, &self.params)?;
            let right_rail = rail(r.start + rise, r.end + rise, &self.params)?;
            let left_lower = left_rail.translate(&drop);
            let right_lower = right_rail.translate(&drop);

            railing = railing
                .merge(left_rail)
                .merge(right_rail)
                .merge(left_lower)
                .merge(right_lower)
                .merge(posts(&l.start, &l.end, &self.params)?)
                .merge(posts(&r.start, &r.end, &self.params)?);
        }

        tracing::debug!(
            edges = left.len(),
            polygons = walkway.polygon_count() + railing.polygon_count(),
            "built looping platform"
        );
        Ok(walkway.merge(railing))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Point3;
    use crate::operations::platform::railing::post_count;

    fn triangle(side: f64) -> Path {
        Path::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(side, 0.0, 0.0),
            Point3::new(side / 2.0, 0.0, side * 3.0_f64.sqrt() / 2.0),
        ])
    }

    fn bridge() -> Path {
        Path::new(vec![
            Point3::new(1.0, 0.0, -2.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(5.0, 1.0, 2.0),
            Point3::new(10.0, 1.0, 2.0),
            Point3::new(14.0, 0.0, 2.0),
            Point3::new(14.0, 0.0, -2.0),
        ])
    }

    #[test]
    fn offsets_sit_half_width_from_centerline() {
        let op = BuildLoopingPlatform::new(triangle(10.0), PlatformParams::new(1.0).unwrap());
        let (left, right) = op.offset_edges().unwrap();
        assert_eq!(left.len(), 3);
        for (l, r) in left.iter().zip(&right) {
            assert_abs_diff_eq!((l.start - r.start).norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!((l.end - r.end).norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn triangle_edges_get_at_least_five_posts() {
        let params = PlatformParams::new(1.0).unwrap();
        let op = BuildLoopingPlatform::new(triangle(10.0), params);
        let (left, right) = op.aligned_edges().unwrap();
        for edge in left.iter().chain(&right) {
            let count = post_count(edge.length(), params.max_post_spacing).unwrap();
            assert!(count >= 5, "edge of length {} got {count} posts", edge.length());
        }
    }

    #[test]
    fn triangle_polygon_count() {
        let params = PlatformParams {
            railing_sides: 8,
            ..PlatformParams::new(1.0).unwrap()
        };
        let op = BuildLoopingPlatform::new(triangle(10.0), params);
        let (left, right) = op.aligned_edges().unwrap();
        let pipe = 2 * params.railing_sides;
        let expected: usize = left
            .iter()
            .zip(&right)
            .map(|(l, r)| {
                let posts = post_count(l.length(), params.max_post_spacing).unwrap()
                    + post_count(r.length(), params.max_post_spacing).unwrap();
                2 + 4 * pipe + posts * pipe
            })
            .sum();
        let model = op.execute().unwrap();
        assert_eq!(model.polygon_count(), expected);
    }

    #[test]
    fn walkway_comes_first() {
        let params = PlatformParams {
            railing_sides: 4,
            ..PlatformParams::default()
        };
        let op = BuildLoopingPlatform::new(triangle(6.0), params);
        let (left, right) = op.aligned_edges().unwrap();
        let model = op.execute().unwrap();
        let first = model.polygons()[0].vertices();
        assert_abs_diff_eq!(first[0], left[0].start);
        assert_abs_diff_eq!(first[1], left[0].end);
        assert_abs_diff_eq!(first[2], right[0].end);
    }

    #[test]
    fn flat_walkway_stays_on_the_ground() {
        let op = BuildLoopingPlatform::new(triangle(10.0), PlatformParams::default());
        let (left, right) = op.aligned_edges().unwrap();
        for edge in left.iter().chain(&right) {
            assert_abs_diff_eq!(edge.start.y, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(edge.end.y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn bridge_with_collinear_edges_builds() {
        let op = BuildLoopingPlatform::new(bridge(), PlatformParams::default());
        let (left, right) = op.aligned_edges().unwrap();
        assert_eq!(left.len(), 6);
        assert_eq!(right.len(), 6);
        // The ramp (edge 2) and the deck (edge 3) head the same way, so they
        // share the ramp's top corner.
        assert_abs_diff_eq!(left[2].end, left[3].start, epsilon = 1e-9);
        assert!(op.execute().unwrap().polygon_count() > 0);
    }

    #[test]
    fn too_few_points_fail() {
        let path = Path::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        let op = BuildLoopingPlatform::new(path, PlatformParams::default());
        assert!(op.execute().is_err());
    }

    #[test]
    fn repeated_point_fails() {
        let path = Path::new(vec![
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]);
        let op = BuildLoopingPlatform::new(path, PlatformParams::default());
        assert!(op.execute().is_err());
    }
}
