mod hopper;

pub use hopper::{Hopper, SPOUT_OPENING};

use crate::math::{Point3, Vector3};

/// A point where a hose connects to a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spout {
    /// Direction material leaves through the spout.
    pub out_direction: Vector3,
    /// Centre of the spout opening.
    pub entrance: Point3,
    /// Opening size.
    pub opening: f64,
}
