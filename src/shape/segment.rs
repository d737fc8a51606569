//! Definition of the segment record used while deriving separating axes.

use crate::math::{Point, Vector};

/// A directed segment joining two adjacent vertices of a shape.
///
/// Segments are transient: they only live between the moment a shape is split into
/// edges and the moment its candidate axes are derived. See
/// [`SegmentPool`](crate::query::sat::SegmentPool) for how they are recycled.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment<const D: usize> {
    /// The segment first point.
    pub a: Point<D>,
    /// The segment second point.
    pub b: Point<D>,
}

impl<const D: usize> Segment<D> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<D>, b: Point<D>) -> Self {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<D> {
        self.b - self.a
    }
}
