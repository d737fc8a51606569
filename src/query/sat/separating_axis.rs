use super::{project_point_sets, AxisKind, AxisProjection, MtvResolver, SatDiagnostics};
use crate::math::{Point, Vector};

/// Projects both point sets onto every axis and reports the first separating one.
///
/// Overlapping axes are fed to `resolver` until a separation is found. Unless
/// `exhaustive` is set, the evaluation stops there. Every evaluated axis is recorded
/// into `diagnostics`.
///
/// Returns the index of the first separating axis, or `None` if every axis overlaps.
pub(crate) fn find_separating_axis<const D: usize>(
    axes: &[(AxisKind, Vector<D>)],
    points1: &[Point<D>],
    points2: &[Point<D>],
    exhaustive: bool,
    mut diagnostics: Option<&mut SatDiagnostics<D>>,
    mut resolver: Option<&mut MtvResolver<D>>,
) -> Option<usize> {
    let mut separating_axis = None;

    for (i, (kind, axis)) in axes.iter().enumerate() {
        let intervals = project_point_sets(points1, points2, axis);

        if let Some(diagnostics) = diagnostics.as_deref_mut() {
            diagnostics.push(AxisProjection {
                kind: *kind,
                axis: *axis,
                intervals,
            });
        }

        let Some([interval1, interval2]) = intervals else {
            log::debug!("Skipping zero-length separating axis candidate {kind:?}.");
            continue;
        };

        match interval1.classify_overlap(&interval2) {
            Some(overlap) => {
                if separating_axis.is_none() {
                    if let Some(resolver) = resolver.as_deref_mut() {
                        let _ = resolver.accumulate(axis, overlap, &interval1, &interval2);
                    }
                }
            }
            None => {
                if separating_axis.is_none() {
                    log::trace!("Shapes separated along {kind:?}.");
                    separating_axis = Some(i);
                }

                if !exhaustive {
                    break;
                }
            }
        }
    }

    separating_axis
}
