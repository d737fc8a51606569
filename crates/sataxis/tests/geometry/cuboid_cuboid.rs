use na::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use sataxis::math::Real;
use sataxis::query::sat::{
    cuboid_cuboid_intersection, cuboid_cuboid_mtv, AxisKind, SatDiagnostics, SatOptions,
    SatWorkspace,
};
use sataxis::query::{self, SatError, VertexCount};
use sataxis::shape::Cuboid;

fn rand_range(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + rng.rand_float() as Real * (max - min)
}

fn random_cuboid(rng: &mut oorandom::Rand32, spread: Real) -> Cuboid {
    let tau = core::f32::consts::TAU as Real;
    let rotation = UnitQuaternion::from_euler_angles(
        rand_range(rng, 0.0, tau),
        rand_range(rng, 0.0, tau),
        rand_range(rng, 0.0, tau),
    );
    let translation = Translation3::new(
        rand_range(rng, -spread, spread),
        rand_range(rng, -spread, spread),
        rand_range(rng, -spread, spread),
    );
    let half_extents = Vector3::new(
        rand_range(rng, 0.5, 2.0),
        rand_range(rng, 0.5, 2.0),
        rand_range(rng, 0.5, 2.0),
    );

    Cuboid::new(&Isometry3::from_parts(translation, rotation), half_extents)
}

// A cube resting on one of its edges, next to an axis-aligned cube at the origin.
fn glancing_cube(x: Real) -> Cuboid {
    let quarter_turn = core::f32::consts::FRAC_PI_4 as Real;
    let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), quarter_turn)
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), quarter_turn);
    let pos = Isometry3::from_parts(Translation3::new(x, x, 0.0), rotation);
    Cuboid::new(&pos, Vector3::repeat(1.0))
}

#[test]
fn distant_cubes_do_not_collide() {
    let cube1 = Cuboid::new(&Isometry3::identity(), Vector3::repeat(1.0));
    let cube2 = Cuboid::new(&Isometry3::translation(3.0, 0.0, 0.0), Vector3::repeat(1.0));

    assert_eq!(
        query::collide_3d_with_mtv(cube1.vertices(), cube2.vertices()),
        Ok((false, Vector3::zeros()))
    );
}

#[test]
fn overlapping_cubes_are_pushed_apart() {
    let cube1 = Cuboid::new(&Isometry3::identity(), Vector3::repeat(1.0));
    let cube2 = Cuboid::new(&Isometry3::translation(1.0, 0.0, 0.0), Vector3::repeat(1.0));

    let (hit, mtv) = query::collide_3d_with_mtv(cube1.vertices(), cube2.vertices()).unwrap();
    assert!(hit);
    approx::assert_relative_eq!(mtv, Vector3::new(-1.004, 0.0, 0.0), epsilon = 1.0e-5);

    let mut moved1 = cube1;
    moved1.translate_by(&mtv);
    let (hit, _) = query::collide_3d_with_mtv(moved1.vertices(), cube2.vertices()).unwrap();
    assert!(!hit);

    let mut moved2 = cube2;
    moved2.translate_by(&-mtv);
    let (hit, _) = query::collide_3d_with_mtv(cube1.vertices(), moved2.vertices()).unwrap();
    assert!(!hit);
}

#[test]
fn wrong_vertex_counts_are_rejected() {
    let cube = Cuboid::new(&Isometry3::identity(), Vector3::repeat(1.0));
    let nine = [Point3::origin(); 9];

    for pts in [&cube.vertices()[..7], &nine[..]] {
        assert_eq!(
            query::collide_3d_with_mtv(pts, cube.vertices()),
            Err(SatError::InvalidGeometry {
                shape: "cuboid",
                expected: VertexCount::Exactly(8),
                found: pts.len(),
            })
        );
        assert!(query::collide_3d_with_mtv(cube.vertices(), pts).is_err());
    }
}

#[test]
fn edge_against_edge_separation() {
    let mut workspace = SatWorkspace::new();
    let mut diagnostics = SatDiagnostics::new();
    let options = SatOptions::default();
    let cube = Cuboid::new(&Isometry3::identity(), Vector3::repeat(1.0));

    let hit = cuboid_cuboid_intersection(
        &mut workspace,
        &options,
        &cube,
        &glancing_cube(2.2),
        Some(&mut diagnostics),
    );
    assert!(!hit);
    assert_eq!(diagnostics.projections().len(), 15);

    // Only an edge cross product can tell these two apart.
    for proj in diagnostics.projections() {
        if let AxisKind::FaceNormal { .. } = proj.kind {
            assert!(proj.overlaps(), "{:?} should overlap", proj.kind);
        }
    }
    assert!(diagnostics
        .separating_axes()
        .any(|proj| proj.kind == AxisKind::EdgeCross { edge1: 9, edge2: 1 }));
    assert!(diagnostics
        .separating_axes()
        .all(|proj| matches!(proj.kind, AxisKind::EdgeCross { .. })));

    // Closer, the edges do touch.
    diagnostics.clear();
    let (hit, _) = cuboid_cuboid_mtv(
        &mut workspace,
        &options,
        &cube,
        &glancing_cube(2.0),
        Some(&mut diagnostics),
    );
    assert!(hit);
    assert_eq!(diagnostics.separating_axes().count(), 0);

    // The edges stop touching right past that distance.
    for (x, expected) in [(1.999, true), (2.001, false)] {
        let other = glancing_cube(x);
        let hit = cuboid_cuboid_intersection(&mut workspace, &options, &cube, &other, None);
        assert_eq!(hit, expected, "glancing cube at {x}");
    }
}

#[test]
fn segment_pool_is_reused_across_queries() {
    let mut workspace = SatWorkspace::new();
    let cube1 = Cuboid::new(&Isometry3::identity(), Vector3::repeat(1.0));
    let cube2 = Cuboid::new(&Isometry3::translation(1.0, 0.5, 0.0), Vector3::repeat(1.0));

    let _ = workspace.collide_3d_with_mtv(cube1.vertices(), cube2.vertices());
    let num_created = workspace.segment_pool_3d().num_created();
    assert_eq!(num_created, 24);

    for _ in 0..10 {
        let _ = workspace.collide_3d_with_mtv(cube1.vertices(), cube2.vertices());
    }
    assert_eq!(workspace.segment_pool_3d().num_created(), num_created);
    assert_eq!(workspace.segment_pool_3d().num_free(), num_created);
}

#[test]
fn random_cuboids_are_consistent() {
    let mut rng = oorandom::Rand32::new(42);
    let mut workspace = SatWorkspace::new();
    let options = SatOptions::default();
    let mut num_hits = 0;

    for _ in 0..1000 {
        let cuboid1 = random_cuboid(&mut rng, 3.0);
        let cuboid2 = random_cuboid(&mut rng, 3.0);

        assert!(cuboid_cuboid_intersection(&mut workspace, &options, &cuboid1, &cuboid1, None));

        let (hit12, mtv) = cuboid_cuboid_mtv(&mut workspace, &options, &cuboid1, &cuboid2, None);
        let (hit21, _) = cuboid_cuboid_mtv(&mut workspace, &options, &cuboid2, &cuboid1, None);
        assert_eq!(hit12, hit21);

        if !hit12 {
            assert_eq!(mtv, Vector3::zeros());
            continue;
        }

        num_hits += 1;
        let moved1 = cuboid1.transformed(&Isometry3::new(mtv, Vector3::zeros()));
        assert!(!cuboid_cuboid_intersection(&mut workspace, &options, &moved1, &cuboid2, None));
    }

    assert!(num_hits > 0 && num_hits < 1000);
}
