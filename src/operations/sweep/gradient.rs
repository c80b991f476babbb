use crate::error::{OperationError, Result};
use crate::geometry::PipeSegment;
use crate::math::Point3;

/// Linear interpolation from `start` to `end`.
#[must_use]
pub fn linear(t: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * t
}

/// Cubic ease-in: changes slowly near `start`, quickly near `end`.
#[must_use]
pub fn ease_in_cubic(t: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * t.powi(3)
}

/// Cubic ease-out: changes quickly near `start`, slowly near `end`.
#[must_use]
pub fn ease_out_cubic(t: f64, start: f64, end: f64) -> f64 {
    start + (end - start) * ((t - 1.0).powi(3) + 1.0)
}

/// Builds the interior samples of a tapered transition between two pipe
/// samples.
///
/// Sample `i` (for `i` in `1..=steps - 2`) sits at fraction `t = i / steps`
/// of the way from `start` to `end`, with radius `ease(t, start_radius,
/// end_radius)`. The endpoints themselves are not emitted, so the result can
/// be chained between two segments that already hold them.
pub struct GradientSegment<F> {
    start: Point3,
    end: Point3,
    start_radius: f64,
    end_radius: f64,
    steps: usize,
    ease: F,
}

impl<F> GradientSegment<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    /// Creates a new `GradientSegment` operation.
    #[must_use]
    pub fn new(
        start: Point3,
        end: Point3,
        start_radius: f64,
        end_radius: f64,
        steps: usize,
        ease: F,
    ) -> Self {
        Self {
            start,
            end,
            start_radius,
            end_radius,
            steps,
            ease,
        }
    }

    /// Executes the operation, returning `steps - 2` samples.
    ///
    /// The eased radius is not validated; an easing that overshoots can
    /// produce negative radii.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is less than 3.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<PipeSegment> {
        if self.steps < 3 {
            return Err(OperationError::InvalidInput(format!(
                "a gradient needs at least 3 steps, got {}",
                self.steps
            ))
            .into());
        }

        let dir = self.end - self.start;
        let steps = self.steps as f64;
        Ok(PipeSegment::from_samples((1..self.steps - 1).map(|i| {
            let t = i as f64 / steps;
            (
                self.start + dir * t,
                (self.ease)(t, self.start_radius, self.end_radius),
            )
        })))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn unit_rise<F: Fn(f64, f64, f64) -> f64>(steps: usize, ease: F) -> GradientSegment<F> {
        GradientSegment::new(
            Point3::origin(),
            Point3::new(0.0, 1.0, 0.0),
            1.0,
            0.0,
            steps,
            ease,
        )
    }

    #[test]
    fn linear_taper_strictly_decreases() {
        let seg = unit_rise(10, linear).execute().unwrap();
        assert_eq!(seg.len(), 8);
        for pair in seg.radii().windows(2) {
            assert!(pair[1] < pair[0], "{pair:?}");
        }
    }

    #[test]
    fn endpoints_are_excluded() {
        let seg = unit_rise(10, linear).execute().unwrap();
        let (first, r_first) = seg.first().unwrap();
        let (last, r_last) = seg.last().unwrap();
        assert_abs_diff_eq!(first.y, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(r_first, 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(last.y, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(r_last, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn positions_follow_the_line() {
        let seg = GradientSegment::new(
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(3.0, 5.0, -1.0),
            0.5,
            0.5,
            4,
            linear,
        )
        .execute()
        .unwrap();
        assert_eq!(seg.len(), 2);
        assert_abs_diff_eq!(seg.positions()[0], Point3::new(1.5, 2.0, 0.5), epsilon = 1e-12);
        assert_abs_diff_eq!(seg.positions()[1], Point3::new(2.0, 3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn easing_is_injected() {
        let eased_in = unit_rise(5, ease_in_cubic).execute().unwrap();
        let eased_out = unit_rise(5, ease_out_cubic).execute().unwrap();
        // t = 0.2: ease-in barely moves, ease-out has already covered most of the way.
        assert_abs_diff_eq!(eased_in.radii()[0], 1.0 - 0.008, epsilon = 1e-12);
        assert_abs_diff_eq!(eased_out.radii()[0], 1.0 - 0.488, epsilon = 1e-12);
    }

    #[test]
    fn closures_work_as_easing() {
        let seg = unit_rise(6, |t, _, _| t * 2.0).execute().unwrap();
        assert_abs_diff_eq!(seg.radii()[3], 4.0 / 6.0 * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn minimum_steps_yield_single_sample() {
        let seg = unit_rise(3, linear).execute().unwrap();
        assert_eq!(seg.len(), 1);
    }

    #[test]
    fn too_few_steps_fail() {
        assert!(unit_rise(2, linear).execute().is_err());
        assert!(unit_rise(0, linear).execute().is_err());
    }
}
