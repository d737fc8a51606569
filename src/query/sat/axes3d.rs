use crate::math::{Real, Vector3};

/// The axis orthogonal to both `edge1` and `edge2`.
///
/// Returns the zero vector if the edges are parallel, that is, if the norm of their
/// cross product is below `parallel_tolerance * |edge1| * |edge2|`. Zero axes are skipped
/// by the projections.
#[inline]
pub fn cross_axis(
    edge1: &Vector3<Real>,
    edge2: &Vector3<Real>,
    parallel_tolerance: Real,
) -> Vector3<Real> {
    let axis = edge1.cross(edge2);
    let threshold = parallel_tolerance * edge1.norm() * edge2.norm();

    if axis.norm_squared() <= threshold * threshold {
        Vector3::zeros()
    } else {
        axis
    }
}
