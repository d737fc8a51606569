//! Non-persistent collision queries.
//!
//! # General cases
//! The simplest entry points provided by this module are:
//!
//! * [`query::collide_2d()`] to determine if two convex polygons are intersecting or not.
//! * [`query::collide_3d_with_mtv()`] to determine if two cuboids are intersecting, and compute
//!   the minimum translation vector separating them.
//!
//! Both allocate a fresh [`SatWorkspace`] on every call. Applications running many queries,
//! e.g., once per frame, should keep one workspace around and call its methods instead.
//!
//! # Specific cases
//! The functions exported by the [`sat`] submodule are more configurable versions of the
//! ones described above. They take [`SatOptions`] and an optional [`SatDiagnostics`] sink
//! recording every projection, and have the form `[shape1]_[shape2]_[operation]()` where
//! `[operation]` is either `intersection` or `mtv`.
//!
//! [`query::collide_2d()`]: crate::query::collide_2d
//! [`query::collide_3d_with_mtv()`]: crate::query::collide_3d_with_mtv
//! [`SatWorkspace`]: crate::query::sat::SatWorkspace
//! [`SatOptions`]: crate::query::sat::SatOptions
//! [`SatDiagnostics`]: crate::query::sat::SatDiagnostics

pub use self::error::{SatError, VertexCount};

use self::sat::SatWorkspace;
use crate::math::{Point2, Point3, Real, Vector3};

mod error;
pub mod sat;

/// Tests whether two convex polygons intersect.
///
/// Each polygon is given by its vertices in order, clockwise or counterclockwise.
/// Touching polygons intersect.
///
/// # Errors
///
/// - [`SatError::InvalidGeometry`] if a polygon has less than 3 vertices.
/// - [`SatError::DegenerateGeometry`] if a polygon has two consecutive equal vertices.
pub fn collide_2d(poly1: &[Point2<Real>], poly2: &[Point2<Real>]) -> Result<bool, SatError> {
    SatWorkspace::new().collide_2d(poly1, poly2)
}

/// Tests whether two cuboids intersect and computes the minimum translation vector removing
/// their overlap.
///
/// Each cuboid is given by its 8 vertices laid out as described on
/// [`Cuboid`](crate::shape::Cuboid). Returns `(true, mtv)` if they intersect, where `mtv` is
/// the translation to apply to the first cuboid (or `-mtv` to the second one), and
/// `(false, 0)` otherwise.
///
/// # Errors
///
/// [`SatError::InvalidGeometry`] if a slice does not contain exactly 8 vertices.
pub fn collide_3d_with_mtv(
    cuboid1: &[Point3<Real>],
    cuboid2: &[Point3<Real>],
) -> Result<(bool, Vector3<Real>), SatError> {
    SatWorkspace::new().collide_3d_with_mtv(cuboid1, cuboid2)
}
