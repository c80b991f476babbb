pub mod intersect_2d;
pub mod rotate;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// World up direction (+Y). Heights are measured along this axis and the
/// horizontal plane is X/Z.
#[must_use]
pub fn up() -> Vector3 {
    Vector3::y()
}

/// Drops the vertical component of a point, mapping `(x, y, z)` to `(x, z)`.
#[must_use]
pub fn horizontal(p: &Point3) -> Point2 {
    Point2::new(p.x, p.z)
}
