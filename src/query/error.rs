use core::fmt;

/// The number of vertices a shape is required to have.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VertexCount {
    /// At least this many vertices.
    AtLeast(usize),
    /// Exactly this many vertices.
    Exactly(usize),
    /// An even number of coordinates, as required by flat `[x0, y0, x1, y1, ...]` buffers.
    Even,
}

impl fmt::Display for VertexCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexCount::AtLeast(n) => write!(f, "at least {n} vertices"),
            VertexCount::Exactly(n) => write!(f, "exactly {n} vertices"),
            VertexCount::Even => f.pad("an even number of coordinates"),
        }
    }
}

/// Errors raised by the separating-axis queries when their input geometry is unusable.
///
/// Both variants are precondition violations detected before any projection happens.
/// Numerical degeneracies that have a well-defined fallback, like the zero axis
/// obtained by crossing two parallel cuboid edges, are not reported as errors.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SatError {
    /// The shape does not have the number of vertices it requires.
    #[error("invalid {shape}: expected {expected}, found {found}")]
    InvalidGeometry {
        /// The kind of shape that was being built.
        shape: &'static str,
        /// The required vertex count.
        expected: VertexCount,
        /// The number of vertices (or coordinates) actually given.
        found: usize,
    },
    /// An edge of a polygon has coincident endpoints so no axis can be derived from it.
    #[error("the edge {edge} of shape {shape} has zero length")]
    DegenerateGeometry {
        /// The index of the shape (0 or 1) in the query.
        shape: usize,
        /// The index of the degenerate edge, i.e., the edge starting at vertex `edge`.
        edge: usize,
    },
}
