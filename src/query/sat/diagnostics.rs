use super::ProjectionInterval;
use crate::math::Vector;
use alloc::vec::Vec;

/// Where a candidate axis comes from.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// The normal of the edge starting at vertex `edge` of the polygon `shape`.
    PolygonEdge {
        /// The index of the polygon (0 or 1) in the query.
        shape: usize,
        /// The index of the edge in that polygon.
        edge: usize,
    },
    /// The normal of a pair of opposite faces of the cuboid `shape`.
    ///
    /// See [`Cuboid::FACE_EDGES`](crate::shape::Cuboid::FACE_EDGES) for the face numbering.
    FaceNormal {
        /// The index of the cuboid (0 or 1) in the query.
        shape: usize,
        /// The index of the face pair.
        face: usize,
    },
    /// The cross product of an edge of each cuboid.
    ///
    /// Edge indices refer to [`Cuboid::EDGES`](crate::shape::Cuboid::EDGES).
    EdgeCross {
        /// The edge of the first cuboid.
        edge1: usize,
        /// The edge of the second cuboid.
        edge2: usize,
    },
}

/// The projections of two shapes onto one candidate axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisProjection<const D: usize> {
    /// Where the axis comes from.
    pub kind: AxisKind,
    /// The axis itself. It is not normalized.
    pub axis: Vector<D>,
    /// The projection intervals of the first and second shape.
    ///
    /// `None` if the axis is zero, in which case nothing was projected.
    pub intervals: Option<[ProjectionInterval; 2]>,
}

impl<const D: usize> AxisProjection<D> {
    /// Returns `true` if this axis does not separate the shapes.
    ///
    /// Zero axes never separate anything.
    pub fn overlaps(&self) -> bool {
        self.intervals.map_or(true, |[i1, i2]| i1.overlaps(&i2))
    }

    /// Returns `true` if this axis was skipped because it is the zero vector.
    pub fn is_degenerate(&self) -> bool {
        self.intervals.is_none()
    }
}

/// A record of every projection computed by a separating-axis query.
///
/// This is meant for debug visualization of the axes and intervals. Passing a
/// diagnostics sink to a query makes it evaluate every axis, see [`SatOptions::exhaustive`].
///
/// [`SatOptions::exhaustive`]: super::SatOptions::exhaustive
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct SatDiagnostics<const D: usize> {
    projections: Vec<AxisProjection<D>>,
}

impl<const D: usize> SatDiagnostics<D> {
    /// Creates an empty diagnostics record.
    pub fn new() -> Self {
        Self {
            projections: Vec::new(),
        }
    }

    /// Removes every recorded projection, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.projections.clear();
    }

    /// Every projection recorded since the last [`SatDiagnostics::clear`], in evaluation order.
    pub fn projections(&self) -> &[AxisProjection<D>] {
        &self.projections
    }

    /// The recorded projections whose intervals do not overlap.
    pub fn separating_axes(&self) -> impl Iterator<Item = &AxisProjection<D>> {
        self.projections.iter().filter(|proj| !proj.overlaps())
    }

    pub(crate) fn push(&mut self, projection: AxisProjection<D>) {
        self.projections.push(projection)
    }
}
