use super::{OverlapKind, ProjectionInterval};
use crate::math::{Real, Vector};

/// Computes the signed coefficient along an axis that moves the first shape out of overlap.
///
/// `interval1` and `interval2` are the projections of the first and second shape, and
/// `kind` how they overlap. The result is expressed in multiples of the projection
/// axis, like the interval bounds. Its magnitude is increased by `nudge`.
///
/// When `kind` is a containment variant, the axis alone does not say which way the
/// first shape came from. It is pushed out through whichever side needs the shortest
/// translation, through the second shape's min on ties. The queries never pass those
/// variants since [`ProjectionInterval::classify_overlap`] reports containment as a
/// partial overlap: a contained interval then exits past the bound it was classified by.
pub fn corrective_coefficient(
    kind: OverlapKind,
    interval1: &ProjectionInterval,
    interval2: &ProjectionInterval,
    nudge: Real,
) -> Real {
    let (min1, max1) = (interval1.min, interval1.max);
    let (min2, max2) = (interval2.min, interval2.max);

    let c = match kind {
        OverlapKind::FirstMaxOverlapsSecondMin => min2 - max1,
        OverlapKind::SecondMaxOverlapsFirstMin => max2 - min1,
        OverlapKind::FirstContainsSecond | OverlapKind::SecondContainsFirst => {
            let up = max2 - min1;
            let down = min2 - max1;

            if up.abs() < down.abs() {
                up
            } else {
                down
            }
        }
    };

    if c > 0.0 {
        c + nudge
    } else {
        c - nudge
    }
}

/// Accumulates MTV candidates and keeps the one with the smallest magnitude.
///
/// Feed it every overlapping axis with [`MtvResolver::accumulate`], then read the result
/// with [`MtvResolver::finalize`]. As soon as one axis separates the shapes, the
/// resolver must be dropped: there is no translation to compute.
#[derive(Copy, Clone, Debug)]
pub struct MtvResolver<const D: usize> {
    nudge: Real,
    best: Vector<D>,
    best_norm_squared: Real,
}

impl<const D: usize> MtvResolver<D> {
    /// Creates a resolver with no candidate yet.
    pub fn new(nudge: Real) -> Self {
        Self {
            nudge,
            best: Vector::repeat(Real::INFINITY),
            best_norm_squared: Real::INFINITY,
        }
    }

    /// Registers the translation that removes the overlap along `axis`.
    ///
    /// Returns `true` if it became the best candidate.
    pub fn accumulate(
        &mut self,
        axis: &Vector<D>,
        kind: OverlapKind,
        interval1: &ProjectionInterval,
        interval2: &ProjectionInterval,
    ) -> bool {
        let c = corrective_coefficient(kind, interval1, interval2, self.nudge);
        let candidate = axis * c;
        let norm_squared = candidate.norm_squared();

        if norm_squared < self.best_norm_squared {
            self.best = candidate;
            self.best_norm_squared = norm_squared;
            true
        } else {
            false
        }
    }

    /// Returns `true` if at least one candidate was registered.
    pub fn has_candidate(&self) -> bool {
        self.best_norm_squared.is_finite()
    }

    /// The smallest translation registered so far.
    ///
    /// Returns the zero vector if no candidate was registered, which only happens
    /// when every candidate axis was degenerate.
    pub fn finalize(&self) -> Vector<D> {
        if self.has_candidate() {
            self.best
        } else {
            Vector::zeros()
        }
    }
}
