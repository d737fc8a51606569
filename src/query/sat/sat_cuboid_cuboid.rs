use super::separating_axis::find_separating_axis;
use super::{MtvResolver, SatDiagnostics, SatOptions, SatWorkspace};
use crate::math::{Real, Vector3};
use crate::shape::Cuboid;

/// Tests whether two cuboids intersect.
///
/// Fifteen candidate axes are tested: the three face normals of each cuboid (opposite faces
/// share their normal), and the cross products of each of the three edge directions of
/// `cuboid1` with each of the three edge directions of `cuboid2`.
///
/// The edge cross products are needed for configurations where two cuboids touch edge
/// against edge: their projections may overlap on all six face normals while a plane
/// containing both edges still separates them. Cross products of parallel edges are zero
/// and are skipped.
pub fn cuboid_cuboid_intersection(
    workspace: &mut SatWorkspace,
    options: &SatOptions,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    diagnostics: Option<&mut SatDiagnostics<3>>,
) -> bool {
    workspace.build_cuboid_axes(cuboid1, cuboid2, options.parallel_tolerance);

    let exhaustive = options.exhaustive || diagnostics.is_some();
    find_separating_axis(
        &workspace.axes3,
        cuboid1.vertices(),
        cuboid2.vertices(),
        exhaustive,
        diagnostics,
        None,
    )
    .is_none()
}

/// Tests whether two cuboids intersect and computes the minimum translation vector
/// removing their overlap.
///
/// For every overlapping axis, the translation of `cuboid1` along that axis that removes the
/// overlap is computed (see [`corrective_coefficient`](super::corrective_coefficient)),
/// and the shortest one is kept.
///
/// Returns `(true, mtv)` if the cuboids intersect, `mtv` being the translation to apply to
/// `cuboid1` (apply `-mtv` to `cuboid2` to move it instead). As soon as one axis separates
/// the cuboids, the evaluation stops and `(false, 0)` is returned.
///
/// # Example
///
/// ```
/// use sataxis::math::{Isometry3, Vector3};
/// use sataxis::query::sat::{cuboid_cuboid_mtv, SatOptions, SatWorkspace};
/// use sataxis::shape::Cuboid;
///
/// let mut workspace = SatWorkspace::new();
/// let options = SatOptions::default();
/// let mut cube1 = Cuboid::new(&Isometry3::identity(), Vector3::repeat(1.0));
/// let cube2 = Cuboid::new(&Isometry3::translation(1.0, 0.0, 0.0), Vector3::repeat(1.0));
///
/// let (collided, mtv) = cuboid_cuboid_mtv(&mut workspace, &options, &cube1, &cube2, None);
/// assert!(collided);
///
/// cube1.translate_by(&mtv);
/// let (collided, _) = cuboid_cuboid_mtv(&mut workspace, &options, &cube1, &cube2, None);
/// assert!(!collided);
/// ```
pub fn cuboid_cuboid_mtv(
    workspace: &mut SatWorkspace,
    options: &SatOptions,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    diagnostics: Option<&mut SatDiagnostics<3>>,
) -> (bool, Vector3<Real>) {
    workspace.build_cuboid_axes(cuboid1, cuboid2, options.parallel_tolerance);

    let exhaustive = options.exhaustive || diagnostics.is_some();
    let mut resolver = MtvResolver::new(options.mtv_nudge);
    let separating_axis = find_separating_axis(
        &workspace.axes3,
        cuboid1.vertices(),
        cuboid2.vertices(),
        exhaustive,
        diagnostics,
        Some(&mut resolver),
    );

    if separating_axis.is_some() {
        (false, Vector3::zeros())
    } else {
        (true, resolver.finalize())
    }
}
