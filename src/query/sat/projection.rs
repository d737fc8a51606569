use crate::math::{Point, Real, Vector};
use approx::{AbsDiffEq, RelativeEq};

/// The range of projection coefficients of a set of points onto an axis.
///
/// A point `p` projected onto the axis `v` lands on `c * v` with `c = p·v / v·v`.
/// The interval stores the smallest and largest such `c`. Because the coefficient is
/// expressed in multiples of the axis, `v` does not need to be normalized, and
/// `(max - min) * v` is a vector with the actual extent of the points along `v`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionInterval {
    /// The smallest projection coefficient.
    pub min: Real,
    /// The largest projection coefficient.
    pub max: Real,
}

/// How two overlapping projection intervals are arranged relative to each other.
///
/// The variants are tested in declaration order and the first match wins. Any two
/// overlapping intervals already match one of the first two variants, so
/// [`ProjectionInterval::classify_overlap`] never returns the containment variants: a
/// contained interval is reported by which bound of the other one it reaches past.
/// The containment variants only reach [`corrective_coefficient`](super::corrective_coefficient)
/// when a caller builds them directly.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OverlapKind {
    /// `max1 >= min2 && min1 <= min2`: the first interval reaches into the second from below.
    FirstMaxOverlapsSecondMin,
    /// `max2 >= min1 && min2 <= min1`: the second interval reaches into the first from below.
    SecondMaxOverlapsFirstMin,
    /// `max1 >= max2 && min2 >= min1`: the first interval contains the second.
    FirstContainsSecond,
    /// `max2 >= max1 && min1 >= min2`: the second interval contains the first.
    SecondContainsFirst,
}

impl ProjectionInterval {
    /// Creates a new interval.
    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    /// The interval containing no coefficient at all.
    ///
    /// Its bounds are inverted so that including any value yields a valid interval.
    pub const EMPTY: Self = Self {
        min: Real::INFINITY,
        max: Real::NEG_INFINITY,
    };

    /// Enlarges this interval so that it contains `c`.
    #[inline]
    pub fn include(&mut self, c: Real) {
        if c < self.min {
            self.min = c;
        }
        if c > self.max {
            self.max = c;
        }
    }

    /// The width `max - min` of this interval.
    #[inline]
    pub fn width(&self) -> Real {
        self.max - self.min
    }

    /// Classifies how `self` (the first interval) and `other` (the second) overlap.
    ///
    /// Returns `None` if they are disjoint. Touching intervals overlap.
    pub fn classify_overlap(&self, other: &Self) -> Option<OverlapKind> {
        let (min1, max1) = (self.min, self.max);
        let (min2, max2) = (other.min, other.max);

        if max1 >= min2 && min1 <= min2 {
            Some(OverlapKind::FirstMaxOverlapsSecondMin)
        } else if max2 >= min1 && min2 <= min1 {
            Some(OverlapKind::SecondMaxOverlapsFirstMin)
        } else if max1 >= max2 && min2 >= min1 {
            Some(OverlapKind::FirstContainsSecond)
        } else if max2 >= max1 && min1 >= min2 {
            Some(OverlapKind::SecondContainsFirst)
        } else {
            None
        }
    }

    /// Returns `true` if `self` and `other` share at least one coefficient.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.classify_overlap(other).is_some()
    }
}

impl AbsDiffEq for ProjectionInterval {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

impl RelativeEq for ProjectionInterval {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.min.relative_eq(&other.min, epsilon, max_relative)
            && self.max.relative_eq(&other.max, epsilon, max_relative)
    }
}

/// Projects `points` onto `axis`.
///
/// Returns `None` if `axis` is the zero vector: no direction can be projected onto, and
/// callers must treat such an axis as non-separating.
pub fn project_points<const D: usize>(
    points: &[Point<D>],
    axis: &Vector<D>,
) -> Option<ProjectionInterval> {
    let axis_sq = axis.norm_squared();

    if axis_sq == 0.0 {
        return None;
    }

    let mut interval = ProjectionInterval::EMPTY;

    for pt in points {
        interval.include(pt.coords.dot(axis) / axis_sq);
    }

    Some(interval)
}

/// Projects two point sets onto `axis`, see [`project_points`].
#[inline]
pub fn project_point_sets<const D: usize>(
    points1: &[Point<D>],
    points2: &[Point<D>],
    axis: &Vector<D>,
) -> Option<[ProjectionInterval; 2]> {
    Some([
        project_points(points1, axis)?,
        project_points(points2, axis)?,
    ])
}
