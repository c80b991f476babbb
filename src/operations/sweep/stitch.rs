use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::mesh::{make_square, Polygon};

/// Connects two consecutive rings with a band of quads, two triangles each.
///
/// Quad `p` spans `prev[p], next[p], next[p + 1], prev[p + 1]`, with the last
/// quad wrapping back to index 0 to close the seam.
///
/// # Errors
///
/// Returns an error if the rings differ in size.
pub fn stitch_rings(prev: &[Point3], next: &[Point3]) -> Result<Vec<Polygon>> {
    if prev.len() != next.len() {
        return Err(OperationError::InvalidInput(format!(
            "cannot stitch a ring of {} points to a ring of {}",
            prev.len(),
            next.len()
        ))
        .into());
    }

    let k = prev.len();
    let mut polygons = Vec::with_capacity(k * 2);
    for p in 0..k {
        let q = (p + 1) % k;
        polygons.extend(make_square(prev[p], next[p], next[q], prev[q]));
    }
    Ok(polygons)
}
