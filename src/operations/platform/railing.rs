use crate::error::{OperationError, Result};
use crate::geometry::Path;
use crate::math::{up, Point3};
use crate::mesh::Model;
use crate::operations::sweep::{BuildPipe, PipeParams};

use super::PlatformParams;

/// Returns the smallest post count, at least 2, whose spacing over
/// `distance` does not exceed `max_spacing`.
///
/// # Errors
///
/// Returns an error if `max_spacing` is not positive or `distance` is not
/// finite.
#[allow(clippy::cast_precision_loss)]
pub fn post_count(distance: f64, max_spacing: f64) -> Result<usize> {
    if !(max_spacing.is_finite() && max_spacing > 0.0) || !distance.is_finite() {
        return Err(OperationError::InvalidInput(format!(
            "cannot space posts {max_spacing} apart over a distance of {distance}"
        ))
        .into());
    }
    let mut count = 2;
    while distance / (count - 1) as f64 > max_spacing {
        count += 1;
    }
    Ok(count)
}

/// Evenly spaced post positions from `start` to `end`, both included.
///
/// # Errors
///
/// See [`post_count`].
#[allow(clippy::cast_precision_loss)]
pub fn post_positions(start: &Point3, end: &Point3, max_spacing: f64) -> Result<Vec<Point3>> {
    let count = post_count((end - start).norm(), max_spacing)?;
    let step = (end - start) / (count - 1) as f64;
    Ok((0..count).map(|i| start + step * i as f64).collect())
}

/// A straight railing pipe from `start` to `end`.
///
/// # Errors
///
/// Returns an error if `start` and `end` coincide.
pub fn rail(start: Point3, end: Point3, params: &PlatformParams) -> Result<Model> {
    BuildPipe::uniform(
        Path::new(vec![start, end]),
        params.railing_radius,
        PipeParams {
            sides: params.railing_sides,
        },
    )
    .execute()
}

/// Vertical support posts along the walkway edge from `start` to `end`.
///
/// # Errors
///
/// Returns an error if the post spacing is invalid or the post height is 0.
pub fn posts(start: &Point3, end: &Point3, params: &PlatformParams) -> Result<Model> {
    let mut model = Model::default();
    for base in post_positions(start, end, params.max_post_spacing)? {
        model = model.merge(rail(base, base + up() * params.post_height, params)?);
    }
    Ok(model)
}
