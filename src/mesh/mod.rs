mod obj;

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};

/// A planar face given by three or more vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
}

impl Polygon {
    /// Creates a polygon from its vertices in winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "a polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        Ok(Self { vertices })
    }

    /// Creates a triangle.
    #[must_use]
    pub fn triangle(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            vertices: vec![a, b, c],
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Per-vertex normals. Flat shading uses the positions themselves.
    #[must_use]
    pub fn normals(&self) -> Vec<Vector3> {
        self.vertices.iter().map(|p| p.coords).collect()
    }

    fn translated(&self, displacement: &Vector3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| p + displacement).collect(),
        }
    }
}

/// Splits the quad `a, b, c, d` into the triangles `(a, b, c)` and `(a, c, d)`.
#[must_use]
pub fn make_square(a: Point3, b: Point3, c: Point3, d: Point3) -> [Polygon; 2] {
    [Polygon::triangle(a, b, c), Polygon::triangle(a, c, d)]
}

/// An ordered, mergeable collection of polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    polygons: Vec<Polygon>,
}

impl Model {
    /// Creates a model from polygons.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Appends the polygons of `other` after this model's own.
    #[must_use]
    pub fn merge(mut self, other: Model) -> Self {
        self.polygons.extend(other.polygons);
        self
    }

    /// Returns a copy of the model moved by `displacement`.
    #[must_use]
    pub fn translate(&self, displacement: &Vector3) -> Self {
        Self {
            polygons: self
                .polygons
                .iter()
                .map(|p| p.translated(displacement))
                .collect(),
        }
    }
}

impl Extend<Polygon> for Model {
    fn extend<I: IntoIterator<Item = Polygon>>(&mut self, iter: I) {
        self.polygons.extend(iter);
    }
}

impl FromIterator<Polygon> for Model {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self {
            polygons: iter.into_iter().collect(),
        }
    }
}
