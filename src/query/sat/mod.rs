//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! the projections of the two shapes do not overlap. If you can find a direction where the
//! "shadows" cast by both shapes are disjoint, the shapes are not colliding.
//!
//! For polygons and polyhedra, only a finite set of candidate axes needs to be tested:
//!
//! - **2D convex polygons**: the normal of every edge of both polygons.
//! - **3D cuboids**: the 3 face normals of each cuboid, plus the 9 cross products of an edge
//!   direction of the first cuboid with an edge direction of the second one.
//!
//! # How are the projections computed?
//!
//! Every vertex `p` of a shape is projected onto an axis `v` as the coefficient
//! `c = p·v / v·v`, and the shape covers the [`ProjectionInterval`] `[min c, max c]`.
//! Axes are never normalized: the coefficients are expressed in multiples of the axis,
//! so `c * v` is a true displacement whatever the length of `v`.
//!
//! # Minimum translation vector
//!
//! When all the axes overlap, the `*_mtv` queries also compute, for every axis, the
//! translation of the first shape removing the overlap along it (see
//! [`corrective_coefficient`]), and return the shortest one. The translation is pushed
//! slightly past the overlap boundary by [`SatOptions::mtv_nudge`].
//!
//! # Example: Cuboid-Cuboid Collision
//!
//! ```rust
//! use sataxis::math::{Isometry3, Vector3};
//! use sataxis::query::sat::*;
//! use sataxis::shape::Cuboid;
//!
//! let mut workspace = SatWorkspace::new();
//! let mut diagnostics = SatDiagnostics::new();
//!
//! let box1 = Cuboid::new(&Isometry3::identity(), Vector3::new(1.0, 1.0, 1.0));
//! let box2 = Cuboid::new(&Isometry3::translation(3.0, 0.0, 0.0), Vector3::new(0.5, 0.5, 0.5));
//!
//! let hit = cuboid_cuboid_intersection(
//!     &mut workspace,
//!     &SatOptions::default(),
//!     &box1,
//!     &box2,
//!     Some(&mut diagnostics),
//! );
//! assert!(!hit);
//!
//! for proj in diagnostics.separating_axes() {
//!     println!("Boxes are separated along {:?}", proj.kind);
//! }
//! ```
//!
//! # Module Organization
//!
//! - **Polygon-Polygon**: [`polygon_polygon_intersection`], [`polygon_polygon_mtv`].
//! - **Cuboid-Cuboid**: [`cuboid_cuboid_intersection`], [`cuboid_cuboid_mtv`].
//! - **Axis derivation**: [`edge_normal`] in 2D, [`cross_axis`] in 3D.
//! - **Scratch memory**: [`SatWorkspace`], reused across queries to avoid allocations.

pub use self::axes2d::edge_normal;
pub use self::axes3d::cross_axis;
pub use self::diagnostics::{AxisKind, AxisProjection, SatDiagnostics};
pub use self::mtv::{corrective_coefficient, MtvResolver};
pub use self::options::SatOptions;
pub use self::projection::{
    project_point_sets, project_points, OverlapKind, ProjectionInterval,
};
pub use self::sat_cuboid_cuboid::*;
pub use self::sat_polygon_polygon::*;
pub use self::workspace::{SatWorkspace, SegmentPool, CUBOID_CUBOID_NUM_AXES};

mod axes2d;
mod axes3d;
mod diagnostics;
mod mtv;
mod options;
mod projection;
mod sat_cuboid_cuboid;
mod sat_polygon_polygon;
mod separating_axis;
mod workspace;
