use na::{Isometry2, Point2, Vector2};
use sataxis::math::Real;
use sataxis::query::sat::{polygon_polygon_mtv, SatDiagnostics, SatOptions, SatWorkspace};
use sataxis::query::{self, SatError, VertexCount};
use sataxis::shape::Polygon;

fn rand_range(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + rng.rand_float() as Real * (max - min)
}

// A regular polygon with a random number of vertices, radius, orientation and center.
fn random_polygon(rng: &mut oorandom::Rand32, spread: Real) -> Polygon {
    let n = rng.rand_range(3..10) as usize;
    let radius = rand_range(rng, 0.5, 3.0);
    let pos = Isometry2::new(
        Vector2::new(rand_range(rng, -spread, spread), rand_range(rng, -spread, spread)),
        rand_range(rng, 0.0, core::f32::consts::TAU as Real),
    );
    let vertices = (0..n)
        .map(|i| {
            let angle = i as Real * 2.0 / n as Real * core::f32::consts::PI as Real;
            pos * Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    Polygon::new(vertices).unwrap()
}

#[test]
fn polygons_always_intersect_themselves() {
    let mut rng = oorandom::Rand32::new(42);
    let mut workspace = SatWorkspace::new();

    for _ in 0..500 {
        let poly = random_polygon(&mut rng, 10.0);
        assert_eq!(
            workspace.collide_2d(poly.vertices(), poly.vertices()),
            Ok(true)
        );
    }
}

#[test]
fn polygon_intersection_is_symmetric() {
    let mut rng = oorandom::Rand32::new(1234);
    let mut workspace = SatWorkspace::new();
    let mut num_hits = 0;

    for _ in 0..1000 {
        let poly1 = random_polygon(&mut rng, 4.0);
        let poly2 = random_polygon(&mut rng, 4.0);

        let hit12 = workspace.collide_2d(poly1.vertices(), poly2.vertices());
        let hit21 = workspace.collide_2d(poly2.vertices(), poly1.vertices());
        assert_eq!(hit12, hit21);

        if hit12 == Ok(true) {
            num_hits += 1;
        }
    }

    // Make sure both outcomes were exercised.
    assert!(num_hits > 0 && num_hits < 1000);
}

#[test]
fn distant_polygons_never_intersect() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..200 {
        let poly1 = random_polygon(&mut rng, 4.0);
        let mut poly2 = random_polygon(&mut rng, 4.0);
        // Radii are below 3 and centers within 4 of the origin.
        poly2.translate_by(&Vector2::new(0.0, 100.0));

        assert_eq!(
            query::collide_2d(poly1.vertices(), poly2.vertices()),
            Ok(false)
        );
    }
}

#[test]
fn mtv_separates_random_polygons() {
    let mut rng = oorandom::Rand32::new(99);
    let mut workspace = SatWorkspace::new();
    let options = SatOptions::default();

    for _ in 0..1000 {
        let mut poly1 = random_polygon(&mut rng, 3.0);
        let poly2 = random_polygon(&mut rng, 3.0);

        let (hit, mtv) =
            polygon_polygon_mtv(&mut workspace, &options, poly1.vertices(), poly2.vertices(), None)
                .unwrap();

        if !hit {
            assert_eq!(mtv, Vector2::zeros());
            continue;
        }

        // Moving the second polygon by the opposite translation works just as well.
        let mut moved2 = poly2.clone();
        moved2.translate_by(&-mtv);
        assert_eq!(
            workspace.collide_2d(poly1.vertices(), moved2.vertices()),
            Ok(false)
        );

        poly1.translate_by(&mtv);
        assert_eq!(
            workspace.collide_2d(poly1.vertices(), poly2.vertices()),
            Ok(false)
        );
    }
}

#[test]
fn workspace_mtv_moves_first_polygon_out() {
    let mut workspace = SatWorkspace::new();
    let square1 = Polygon::from_flat(&[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0]).unwrap();
    let mut square2 = square1.clone();
    square2.translate_by(&Vector2::new(1.5, 0.25));

    let (hit, mtv) = workspace
        .collide_2d_with_mtv(square1.vertices(), square2.vertices())
        .unwrap();
    assert!(hit);
    approx::assert_relative_eq!(mtv, Vector2::new(-0.501, 0.0), epsilon = 1.0e-5);

    let moved1 = square1.transformed(&Isometry2::new(mtv, 0.0));
    assert_eq!(
        workspace.collide_2d_with_mtv(moved1.vertices(), square2.vertices()),
        Ok((false, Vector2::zeros()))
    );
    // Reused pooled segments, no new record was created.
    assert_eq!(workspace.segment_pool_2d().num_created(), 8);
}

#[test]
fn square_and_distant_triangle() {
    let square = Polygon::from_flat(&[5.0, 5.0, 10.0, 5.0, 10.0, 0.0, 5.0, 0.0]).unwrap();
    let triangle = Polygon::from_flat(&[50.0, 50.0, 55.0, 55.0, 60.0, 50.0]).unwrap();
    let mut diagnostics = SatDiagnostics::new();

    let hit = sataxis::query::sat::polygon_polygon_intersection(
        &mut SatWorkspace::new(),
        &SatOptions::default(),
        square.vertices(),
        triangle.vertices(),
        Some(&mut diagnostics),
    );
    assert_eq!(hit, Ok(false));
    assert_eq!(diagnostics.projections().len(), 7);
    assert!(diagnostics.separating_axes().count() > 0);

    // Sliding the triangle onto the square.
    let triangle = triangle.transformed(&Isometry2::translation(-45.0, -47.0));
    assert_eq!(
        query::collide_2d(square.vertices(), triangle.vertices()),
        Ok(true)
    );
}

#[test]
fn invalid_polygons_are_rejected() {
    let triangle = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ];

    assert_eq!(
        query::collide_2d(&triangle, &triangle[..2]),
        Err(SatError::InvalidGeometry {
            shape: "polygon",
            expected: VertexCount::AtLeast(3),
            found: 2,
        })
    );

    let repeated = [triangle[0], triangle[0], triangle[1], triangle[2]];
    assert_eq!(
        query::collide_2d(&repeated, &triangle),
        Err(SatError::DegenerateGeometry { shape: 0, edge: 0 })
    );
}
