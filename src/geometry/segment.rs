use crate::error::{GeometryError, Result};
use crate::math::{horizontal, Point2, Point3, TOLERANCE};

/// A straight segment between two 3D points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3 {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl Segment3 {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Extends the segment about its midpoint so that it becomes `amount`
    /// times as long.
    ///
    /// The result runs from `mid + half * amount` to `mid - half * amount`,
    /// i.e. it is reversed relative to `self`; only the supporting line
    /// matters to callers.
    #[must_use]
    pub fn scale_outwards(&self, amount: f64) -> Self {
        let half = (self.end - self.start) / 2.0;
        let center = self.start + half;
        Self {
            start: center + half * amount,
            end: center - half * amount,
        }
    }

    /// Projects both endpoints onto the horizontal (X/Z) plane.
    #[must_use]
    pub fn horizontal(&self) -> (Point2, Point2) {
        (horizontal(&self.start), horizontal(&self.end))
    }

    /// Returns the height (Y) of the supporting line above the horizontal
    /// point `(x, z)`.
    ///
    /// Uses the line's X parametric equation, or its Z equation when the line
    /// has no X extent.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when the line has neither X nor
    /// Z extent, so no height can be recovered.
    pub fn height_at(&self, x: f64, z: f64) -> Result<f64> {
        let v = self.end - self.start;
        let t = if v.x.abs() > TOLERANCE {
            (x - self.start.x) / v.x
        } else if v.z.abs() > TOLERANCE {
            (z - self.start.z) / v.z
        } else {
            tracing::warn!(
                start = ?self.start,
                end = ?self.end,
                "segment is vertical, no height at ({x}, {z})"
            );
            return Err(GeometryError::Degenerate(
                "segment has no horizontal extent to parameterize height".to_owned(),
            )
            .into());
        };
        Ok(self.start.y + v.y * t)
    }
}
