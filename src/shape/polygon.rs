use crate::math::{Isometry2, Point2, Real, Vector2};
use crate::query::{SatError, VertexCount};
use alloc::vec::Vec;

/// A convex planar polygon.
///
/// The vertices form an ordered loop: `vertices[0], vertices[1]` is an edge,
/// `vertices[1], vertices[2]` is the next one, and the last edge closes the loop with
/// `vertices[vertices.len() - 1], vertices[0]`. Either winding is accepted as long as it is
/// consistent. Convexity is not checked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point2<Real>>,
}

impl Polygon {
    /// The minimum number of vertices of a polygon.
    pub const MIN_VERTICES: usize = 3;

    /// Builds a new polygon from its ordered vertex loop.
    ///
    /// Fails with [`SatError::InvalidGeometry`] if less than three vertices are given.
    pub fn new(vertices: Vec<Point2<Real>>) -> Result<Self, SatError> {
        Self::check_vertices(&vertices)?;
        Ok(Self { vertices })
    }

    /// Builds a new polygon from a flat `[x0, y0, x1, y1, ...]` coordinate buffer.
    pub fn from_flat(coords: &[Real]) -> Result<Self, SatError> {
        if coords.len() % 2 != 0 {
            return Err(SatError::InvalidGeometry {
                shape: "polygon",
                expected: VertexCount::Even,
                found: coords.len(),
            });
        }

        let vertices = coords
            .chunks_exact(2)
            .map(|xy| Point2::new(xy[0], xy[1]))
            .collect();
        Self::new(vertices)
    }

    /// Checks that `vertices` describes enough points to form a polygon.
    pub fn check_vertices(vertices: &[Point2<Real>]) -> Result<(), SatError> {
        if vertices.len() < Self::MIN_VERTICES {
            Err(SatError::InvalidGeometry {
                shape: "polygon",
                expected: VertexCount::AtLeast(Self::MIN_VERTICES),
                found: vertices.len(),
            })
        } else {
            Ok(())
        }
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    /// Translates every vertex of this polygon by `shift`.
    pub fn translate_by(&mut self, shift: &Vector2<Real>) {
        for pt in &mut self.vertices {
            *pt += shift;
        }
    }

    /// Applies the isometry `m` to the vertices of this polygon and returns the result.
    pub fn transformed(&self, m: &Isometry2<Real>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|pt| m * pt).collect(),
        }
    }
}
