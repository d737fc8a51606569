use super::axes2d::edge_normal;
use super::axes3d::cross_axis;
use super::{
    cuboid_cuboid_mtv, polygon_polygon_intersection, polygon_polygon_mtv, AxisKind, SatOptions,
};
use crate::math::{Point, Point2, Point3, Real, Vector2, Vector3};
use crate::query::SatError;
use crate::shape::{Cuboid, Segment};
use alloc::vec::Vec;
use arrayvec::ArrayVec;

/// The number of candidate axes between two cuboids: 3 face normals per cuboid and
/// 3 × 3 edge cross products.
pub const CUBOID_CUBOID_NUM_AXES: usize = 15;

/// A free-list of segment records.
///
/// Segments are acquired while a shape is split into edges and all released once its
/// axes are derived. After the first few queries every request is served from the free
/// list. A pool is not meant to be shared between threads: give each thread its own
/// [`SatWorkspace`].
#[derive(Clone, Debug, Default)]
pub struct SegmentPool<const D: usize> {
    free: Vec<Segment<D>>,
    num_created: usize,
}

impl<const D: usize> SegmentPool<D> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self {
            free: Vec::new(),
            num_created: 0,
        }
    }

    /// Hands out a segment joining `a` to `b`, reusing a released record if possible.
    pub fn acquire(&mut self, a: Point<D>, b: Point<D>) -> Segment<D> {
        match self.free.pop() {
            Some(mut segment) => {
                segment.a = a;
                segment.b = b;
                segment
            }
            None => {
                self.num_created += 1;
                Segment::new(a, b)
            }
        }
    }

    /// Returns a segment to the pool.
    pub fn release(&mut self, segment: Segment<D>) {
        self.free.push(segment);
    }

    /// Returns every segment of `segments` to the pool, leaving it empty.
    pub fn release_all(&mut self, segments: &mut Vec<Segment<D>>) {
        self.free.append(segments);
    }

    /// The number of segment records this pool ever had to create.
    pub fn num_created(&self) -> usize {
        self.num_created
    }

    /// The number of segment records currently available for reuse.
    pub fn num_free(&self) -> usize {
        self.free.len()
    }
}

/// Scratch storage reused by the separating-axis queries.
///
/// This is all temporary data that can be freed at any time without affecting results.
/// The reason to reuse the same instance across queries, e.g. once per frame, is to avoid
/// internal allocations. A workspace holds no collision state between two queries.
///
/// A workspace is not thread-safe by design: queries take it by `&mut`, so concurrent
/// queries each need their own instance.
#[derive(Clone, Debug, Default)]
pub struct SatWorkspace {
    pub(crate) pool2: SegmentPool<2>,
    pub(crate) pool3: SegmentPool<3>,
    pub(crate) edges2: [Vec<Segment<2>>; 2],
    pub(crate) edges3: [Vec<Segment<3>>; 2],
    pub(crate) axes2: Vec<(AxisKind, Vector2<Real>)>,
    pub(crate) axes3: ArrayVec<(AxisKind, Vector3<Real>), CUBOID_CUBOID_NUM_AXES>,
}

impl SatWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// The segment pool used by the 2D queries.
    pub fn segment_pool_2d(&self) -> &SegmentPool<2> {
        &self.pool2
    }

    /// The segment pool used by the 3D queries.
    pub fn segment_pool_3d(&self) -> &SegmentPool<3> {
        &self.pool3
    }

    /// The candidate axes derived by the last 2D query.
    pub fn polygon_axes(&self) -> &[(AxisKind, Vector2<Real>)] {
        &self.axes2
    }

    /// The candidate axes derived by the last 3D query.
    pub fn cuboid_axes(&self) -> &[(AxisKind, Vector3<Real>)] {
        &self.axes3
    }

    /// Tests whether two convex polygons intersect, with default options.
    ///
    /// See [`polygon_polygon_intersection`].
    pub fn collide_2d(
        &mut self,
        poly1: &[Point2<Real>],
        poly2: &[Point2<Real>],
    ) -> Result<bool, SatError> {
        polygon_polygon_intersection(self, &SatOptions::default(), poly1, poly2, None)
    }

    /// Tests whether two convex polygons intersect and computes the translation removing
    /// their overlap, with default options.
    ///
    /// See [`polygon_polygon_mtv`].
    pub fn collide_2d_with_mtv(
        &mut self,
        poly1: &[Point2<Real>],
        poly2: &[Point2<Real>],
    ) -> Result<(bool, Vector2<Real>), SatError> {
        polygon_polygon_mtv(self, &SatOptions::default(), poly1, poly2, None)
    }

    /// Tests whether two cuboids given as raw vertex arrays intersect and computes the
    /// translation removing their overlap, with default options.
    ///
    /// Both slices must contain exactly 8 vertices laid out as described on [`Cuboid`].
    /// The returned vector moves the first cuboid out of collision; negate it to move the
    /// second one instead.
    pub fn collide_3d_with_mtv(
        &mut self,
        cuboid1: &[Point3<Real>],
        cuboid2: &[Point3<Real>],
    ) -> Result<(bool, Vector3<Real>), SatError> {
        let cuboid1 = Cuboid::try_from(cuboid1)?;
        let cuboid2 = Cuboid::try_from(cuboid2)?;
        Ok(cuboid_cuboid_mtv(
            self,
            &SatOptions::default(),
            &cuboid1,
            &cuboid2,
            None,
        ))
    }

    /// Derives one axis per edge of both polygons into `self.axes2`.
    ///
    /// Fails on the first edge with coincident endpoints.
    pub(crate) fn build_polygon_axes(
        &mut self,
        poly1: &[Point2<Real>],
        poly2: &[Point2<Real>],
    ) -> Result<(), SatError> {
        self.axes2.clear();

        for (shape, poly) in [poly1, poly2].into_iter().enumerate() {
            let edges = &mut self.edges2[shape];

            for (i, a) in poly.iter().enumerate() {
                let b = poly[(i + 1) % poly.len()];
                edges.push(self.pool2.acquire(*a, b));
            }
        }

        let result = self.polygon_edges_to_axes();
        self.recycle();
        result
    }

    fn polygon_edges_to_axes(&mut self) -> Result<(), SatError> {
        for (shape, edges) in self.edges2.iter().enumerate() {
            for (edge, segment) in edges.iter().enumerate() {
                let axis = edge_normal(&segment.scaled_direction())
                    .ok_or(SatError::DegenerateGeometry { shape, edge })?;
                self.axes2.push((AxisKind::PolygonEdge { shape, edge }, axis));
            }
        }

        Ok(())
    }

    /// Derives the 15 candidate axes of two cuboids into `self.axes3`.
    ///
    /// Axes 0 to 2 are the face normals of `cuboid1`, 3 to 5 those of `cuboid2`, and
    /// 6 to 14 the cross products of their independent edges.
    pub(crate) fn build_cuboid_axes(
        &mut self,
        cuboid1: &Cuboid,
        cuboid2: &Cuboid,
        parallel_tolerance: Real,
    ) {
        self.axes3.clear();

        for (shape, cuboid) in [cuboid1, cuboid2].into_iter().enumerate() {
            let edges = &mut self.edges3[shape];

            for i in 0..Cuboid::EDGES.len() {
                let (a, b) = cuboid.edge(i);
                edges.push(self.pool3.acquire(a, b));
            }
        }

        let [edges1, edges2] = &self.edges3;

        for (shape, edges) in [edges1, edges2].into_iter().enumerate() {
            for (face, [i, j]) in Cuboid::FACE_EDGES.into_iter().enumerate() {
                let normal = cross_axis(
                    &edges[i].scaled_direction(),
                    &edges[j].scaled_direction(),
                    parallel_tolerance,
                );
                self.axes3
                    .push((AxisKind::FaceNormal { shape, face }, normal));
            }
        }

        for edge1 in Cuboid::INDEPENDENT_EDGES {
            for edge2 in Cuboid::INDEPENDENT_EDGES {
                let axis = cross_axis(
                    &edges1[edge1].scaled_direction(),
                    &edges2[edge2].scaled_direction(),
                    parallel_tolerance,
                );
                self.axes3.push((AxisKind::EdgeCross { edge1, edge2 }, axis));
            }
        }

        self.recycle();
    }

    /// Returns every segment acquired by the current query to the pools.
    fn recycle(&mut self) {
        for edges in &mut self.edges2 {
            self.pool2.release_all(edges);
        }
        for edges in &mut self.edges3 {
            self.pool3.release_all(edges);
        }
    }
}
