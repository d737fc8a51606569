use crate::math::{Real, DEFAULT_EPSILON};

/// Options controlling the separating-axis queries.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SatOptions {
    /// Project onto every candidate axis even after a separating one was found.
    ///
    /// This never changes the result of a query. It only matters to a
    /// [`SatDiagnostics`](super::SatDiagnostics) consumer that wants to display every
    /// projection. Attaching a diagnostics sink to a query enables it automatically.
    pub exhaustive: bool,
    /// Amount added to the magnitude of the corrective coefficient of every MTV candidate.
    ///
    /// Pushing shapes slightly past the boundary of the overlap keeps them from being
    /// reported as touching on the next frame.
    pub mtv_nudge: Real,
    /// Relative threshold under which two edges are considered parallel.
    ///
    /// The cross product of two edges `e1`, `e2` is replaced by the zero axis if its
    /// norm is smaller than `parallel_tolerance * |e1| * |e2|`, i.e., if the sine of
    /// their angle is below this threshold.
    pub parallel_tolerance: Real,
}

impl SatOptions {
    /// The default value of [`SatOptions::mtv_nudge`].
    pub const DEFAULT_MTV_NUDGE: Real = 0.001;
}

impl Default for SatOptions {
    fn default() -> Self {
        Self {
            exhaustive: false,
            mtv_nudge: Self::DEFAULT_MTV_NUDGE,
            parallel_tolerance: DEFAULT_EPSILON,
        }
    }
}
