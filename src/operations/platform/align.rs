use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Segment3;
use crate::math::intersect_2d::{direction_2d, segment_segment_intersect_2d};
use crate::math::{Point3, Vector2};

/// Factor by which segments are stretched before intersecting, so that short
/// segments behave like the infinite lines supporting them.
pub const SCALE_OUTWARDS: f64 = 100_000.0;

/// Miters the edges of a closed offset polyline so neighbours meet exactly.
///
/// Edge `i` gets its start from the corner it forms with edge `i - 1` and its
/// end from the corner it forms with edge `i + 1`, wrapping around the loop.
/// Corners are found in the horizontal (X/Z) plane; the height of a corner is
/// the lower of the two lines' heights above it, which keeps convex corners
/// from lifting off their supports.
///
/// Each corner is computed independently for the two edges sharing it, so
/// `aligned[i].end` and `aligned[i + 1].start` may differ by floating-point
/// noise.
#[derive(Debug)]
pub struct AlignSegments {
    segments: Vec<Segment3>,
}

impl AlignSegments {
    /// Creates a new `AlignSegments` operation over the edges of a closed loop,
    /// in loop order.
    #[must_use]
    pub fn new(segments: Vec<Segment3>) -> Self {
        Self { segments }
    }

    /// Executes the alignment, returning one corrected edge per input edge.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 edges are given, an edge has no
    /// horizontal extent, or two neighbouring edges do not intersect in the
    /// horizontal plane. Nothing is returned on failure.
    pub fn execute(&self) -> Result<Vec<Segment3>> {
        let n = self.segments.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "a closed loop needs at least 3 segments, got {n}"
            ))
            .into());
        }

        let mut aligned = Vec::with_capacity(n);
        for i in 0..n {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            let next = (i + 1) % n;

            let start = self.corner(prev, i)?;
            let end = self.corner(i, next)?;
            aligned.push(Segment3::new(start, end));
        }
        Ok(aligned)
    }

    /// Finds where edge `before` (arriving) and edge `after` (leaving) meet.
    fn corner(&self, before: usize, after: usize) -> Result<Point3> {
        let a = &self.segments[before];
        let b = &self.segments[after];

        if horizontal_direction(a, before)? == horizontal_direction(b, after)? {
            // Same heading: no intersection to speak of, keep the shared corner.
            return Ok(Point3::new(a.end.x, a.end.y.min(b.start.y), a.end.z));
        }

        let (a0, a1) = a.scale_outwards(SCALE_OUTWARDS).horizontal();
        let (b0, b1) = b.scale_outwards(SCALE_OUTWARDS).horizontal();
        let (hit, _, _) =
            segment_segment_intersect_2d(&a0, &a1, &b0, &b1).ok_or(GeometryError::NoIntersection {
                segment: before,
                neighbor: after,
            })?;

        let (x, z) = (hit.x, hit.y);
        let y = a.height_at(x, z)?.min(b.height_at(x, z)?);
        Ok(Point3::new(x, y, z))
    }
}

fn horizontal_direction(segment: &Segment3, index: usize) -> Result<Vector2> {
    let (start, end) = segment.horizontal();
    direction_2d(&start, &end).ok_or_else(|| {
        GeometryError::Degenerate(format!("segment {index} has no horizontal extent")).into()
    })
}
