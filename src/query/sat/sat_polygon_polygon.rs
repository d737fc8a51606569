use super::separating_axis::find_separating_axis;
use super::{MtvResolver, SatDiagnostics, SatOptions, SatWorkspace};
use crate::math::{Point2, Real, Vector2};
use crate::query::SatError;
use crate::shape::Polygon;

/// Tests whether two convex polygons intersect.
///
/// The candidate axes are the normals of every edge of both polygons. The polygons
/// intersect iff their projections overlap on all of them; touching polygons intersect.
/// Parallel edges yield redundant axes, which cost a projection but cannot change the result.
///
/// # Errors
///
/// - [`SatError::InvalidGeometry`] if a polygon has less than 3 vertices.
/// - [`SatError::DegenerateGeometry`] if a polygon has two consecutive equal vertices.
///
/// # Example
///
/// ```
/// use sataxis::math::Point2;
/// use sataxis::query::sat::{polygon_polygon_intersection, SatOptions, SatWorkspace};
///
/// let mut workspace = SatWorkspace::new();
/// let square = [
///     Point2::new(5.0, 5.0),
///     Point2::new(10.0, 5.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(5.0, 0.0),
/// ];
/// let triangle = [
///     Point2::new(50.0, 50.0),
///     Point2::new(55.0, 55.0),
///     Point2::new(60.0, 50.0),
/// ];
///
/// let hit = polygon_polygon_intersection(
///     &mut workspace,
///     &SatOptions::default(),
///     &square,
///     &triangle,
///     None,
/// );
/// assert_eq!(hit, Ok(false));
/// ```
pub fn polygon_polygon_intersection(
    workspace: &mut SatWorkspace,
    options: &SatOptions,
    poly1: &[Point2<Real>],
    poly2: &[Point2<Real>],
    diagnostics: Option<&mut SatDiagnostics<2>>,
) -> Result<bool, SatError> {
    Polygon::check_vertices(poly1)?;
    Polygon::check_vertices(poly2)?;
    workspace.build_polygon_axes(poly1, poly2)?;

    let exhaustive = options.exhaustive || diagnostics.is_some();
    let separating_axis = find_separating_axis(
        &workspace.axes2,
        poly1,
        poly2,
        exhaustive,
        diagnostics,
        None,
    );

    Ok(separating_axis.is_none())
}

/// Tests whether two convex polygons intersect and computes the minimum translation
/// vector removing their overlap.
///
/// Returns `(true, mtv)` if they intersect, where `mtv` is the smallest of the per-axis
/// corrective translations for `poly1`. Moving `poly1` by `mtv`, or `poly2` by `-mtv`,
/// separates the polygons along that axis. Returns `(false, 0)` otherwise.
///
/// # Errors
///
/// Same as [`polygon_polygon_intersection`].
pub fn polygon_polygon_mtv(
    workspace: &mut SatWorkspace,
    options: &SatOptions,
    poly1: &[Point2<Real>],
    poly2: &[Point2<Real>],
    diagnostics: Option<&mut SatDiagnostics<2>>,
) -> Result<(bool, Vector2<Real>), SatError> {
    Polygon::check_vertices(poly1)?;
    Polygon::check_vertices(poly2)?;
    workspace.build_polygon_axes(poly1, poly2)?;

    let exhaustive = options.exhaustive || diagnostics.is_some();
    let mut resolver = MtvResolver::new(options.mtv_nudge);
    let separating_axis = find_separating_axis(
        &workspace.axes2,
        poly1,
        poly2,
        exhaustive,
        diagnostics,
        Some(&mut resolver),
    );

    if separating_axis.is_some() {
        Ok((false, Vector2::zeros()))
    } else {
        Ok((true, resolver.finalize()))
    }
}
