//! Vertex-based cuboid shape.

use crate::math::{Isometry3, Point3, Real, Vector3};
use crate::query::{SatError, VertexCount};

/// Shape of an arbitrarily oriented box, described by its 8 vertices.
///
/// The separating-axis tests rely on a fixed vertex layout:
///
/// ```text
///     1------0        front face: 0, 1, 2, 3
///     |\     |\       rear face:  4, 5, 6, 7
///     | 5------4      vertex `i` of the front face is joined to
///     2-|----3 |      vertex `i + 4` of the rear face.
///      \|     \|
///       6------7
/// ```
///
/// [`Cuboid::new`] always produces this layout. Vertices given through
/// [`Cuboid::from_vertices`] or `TryFrom<&[Point3]>` are trusted to follow it: a
/// cuboid with scrambled vertices yields meaningless axes and this is not detected.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    vertices: [Point3<Real>; 8],
}

impl Cuboid {
    /// The number of vertices of a cuboid.
    pub const NUM_VERTICES: usize = 8;

    /// The twelve edges of a cuboid, as pairs of vertex indices.
    ///
    /// Edges 0 to 3 loop around the front face, 4 to 7 around the rear face,
    /// and 8 to 11 join both faces.
    pub const EDGES: [[usize; 2]; 12] = [
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ];

    /// One edge index per edge direction. Every other edge is parallel to one of these.
    pub const INDEPENDENT_EDGES: [usize; 3] = [0, 1, 9];

    /// For each pair of opposite faces, the two edges spanning them.
    ///
    /// Face 0 is the front/rear pair, face 1 the top/bottom pair and face 2 the left/right pair.
    pub const FACE_EDGES: [[usize; 2]; 3] = [[0, 1], [0, 9], [1, 9]];

    /// Creates a new cuboid from its pose and half-extents.
    ///
    /// The front face lies on the local `+z` side. Half-extents are the box
    /// half-width along each local axis.
    pub fn new(pos: &Isometry3<Real>, half_extents: Vector3<Real>) -> Self {
        let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);
        let local = [
            Point3::new(hx, hy, hz),
            Point3::new(-hx, hy, hz),
            Point3::new(-hx, -hy, hz),
            Point3::new(hx, -hy, hz),
            Point3::new(hx, hy, -hz),
            Point3::new(-hx, hy, -hz),
            Point3::new(-hx, -hy, -hz),
            Point3::new(hx, -hy, -hz),
        ];

        Self {
            vertices: local.map(|pt| pos * pt),
        }
    }

    /// Creates a cuboid from vertices already following the layout described on [`Cuboid`].
    #[inline]
    pub fn from_vertices(vertices: [Point3<Real>; 8]) -> Self {
        Self { vertices }
    }

    /// The vertices of this cuboid.
    #[inline]
    pub fn vertices(&self) -> &[Point3<Real>; 8] {
        &self.vertices
    }

    /// The endpoints of the `i`-th edge, see [`Cuboid::EDGES`].
    #[inline]
    pub fn edge(&self, i: usize) -> (Point3<Real>, Point3<Real>) {
        let [a, b] = Self::EDGES[i];
        (self.vertices[a], self.vertices[b])
    }

    /// The center of this cuboid.
    pub fn center(&self) -> Point3<Real> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, pt| acc + pt.coords);
        Point3::from(sum / Self::NUM_VERTICES as Real)
    }

    /// Translates every vertex of this cuboid by `shift`.
    pub fn translate_by(&mut self, shift: &Vector3<Real>) {
        for pt in &mut self.vertices {
            *pt += shift;
        }
    }

    /// Applies the isometry `m` to the vertices of this cuboid and returns the result.
    pub fn transformed(&self, m: &Isometry3<Real>) -> Self {
        Self {
            vertices: self.vertices.map(|pt| m * pt),
        }
    }
}

impl TryFrom<&[Point3<Real>]> for Cuboid {
    type Error = SatError;

    fn try_from(vertices: &[Point3<Real>]) -> Result<Self, SatError> {
        let vertices: [Point3<Real>; 8] =
            vertices
                .try_into()
                .map_err(|_| SatError::InvalidGeometry {
                    shape: "cuboid",
                    expected: VertexCount::Exactly(Self::NUM_VERTICES),
                    found: vertices.len(),
                })?;
        Ok(Self::from_vertices(vertices))
    }
}
