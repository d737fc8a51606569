use crate::math::{Real, Vector2};

/// Computes a vector orthogonal to `edge`.
///
/// The normal `n` is found by solving `n · edge = 0` with one of its components set to 1.
/// The other component is divided by the largest component of `edge`, so the result stays
/// finite for any non-zero edge. Because only the direction of an axis matters to the
/// projections, `n` is neither normalized nor oriented outward.
///
/// Returns `None` if `edge` is the zero vector.
#[inline]
pub fn edge_normal(edge: &Vector2<Real>) -> Option<Vector2<Real>> {
    let (ex, ey) = (edge.x, edge.y);

    if ex == 0.0 && ey == 0.0 {
        None
    } else if ey.abs() >= ex.abs() {
        Some(Vector2::new(1.0, -ex / ey))
    } else {
        Some(Vector2::new(-ey / ex, 1.0))
    }
}
