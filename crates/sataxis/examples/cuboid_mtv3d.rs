extern crate nalgebra as na;

use na::{Isometry3, UnitQuaternion, Vector3};
use sataxis::query;
use sataxis::query::sat::{cuboid_cuboid_mtv, SatDiagnostics, SatOptions, SatWorkspace};
use sataxis::shape::Cuboid;

fn main() {
    let mut workspace = SatWorkspace::new();
    let mut diagnostics = SatDiagnostics::new();
    let options = SatOptions::default();

    let wall = Cuboid::new(&Isometry3::identity(), Vector3::new(0.25, 2.0, 2.0));
    let mut crate_box = Cuboid::new(
        &Isometry3::from_parts(
            Vector3::new(0.8, 0.3, 0.0).into(),
            UnitQuaternion::from_euler_angles(0.2, 0.4, 0.1),
        ),
        Vector3::repeat(0.5),
    );

    // Push the box out of the wall, one correction per frame.
    for frame in 0..5 {
        diagnostics.clear();
        let (hit, mtv) = cuboid_cuboid_mtv(
            &mut workspace,
            &options,
            &crate_box,
            &wall,
            Some(&mut diagnostics),
        );

        if !hit {
            let num_separating = diagnostics.separating_axes().count();
            println!("Frame {frame}: resolved, {num_separating} separating axes.");
            break;
        }

        crate_box.translate_by(&mtv);
        println!("Frame {frame}: box moved to {:?}.", crate_box.center());
    }

    // The slice-based entry point works on raw vertex buffers.
    let (hit, _) = query::collide_3d_with_mtv(crate_box.vertices(), wall.vertices()).unwrap();
    assert!(!hit);
}
