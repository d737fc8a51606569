extern crate nalgebra as na;

use na::{Isometry2, Vector2};
use sataxis::query::sat::{SatDiagnostics, SatOptions, SatWorkspace};
use sataxis::query::sat::{polygon_polygon_intersection, polygon_polygon_mtv};
use sataxis::shape::Polygon;

fn main() {
    let mut workspace = SatWorkspace::new();
    let mut diagnostics = SatDiagnostics::new();
    let options = SatOptions::default();

    let square = Polygon::from_flat(&[5.0, 5.0, 10.0, 5.0, 10.0, 0.0, 5.0, 0.0]).unwrap();
    let mut triangle = Polygon::from_flat(&[50.0, 50.0, 55.0, 55.0, 60.0, 50.0]).unwrap();

    let hit = polygon_polygon_intersection(
        &mut workspace,
        &options,
        square.vertices(),
        triangle.vertices(),
        Some(&mut diagnostics),
    )
    .unwrap();
    assert!(!hit);

    for proj in diagnostics.separating_axes() {
        println!("Separated along {:?} (axis {:?})", proj.kind, proj.axis);
    }

    // Slide the triangle toward the square until they collide.
    let step = Isometry2::new(Vector2::new(-1.0, -1.0), 0.0);
    let mut num_steps = 0;

    while !workspace
        .collide_2d(square.vertices(), triangle.vertices())
        .unwrap()
    {
        triangle = triangle.transformed(&step);
        num_steps += 1;
    }

    let (hit, mtv) =
        polygon_polygon_mtv(&mut workspace, &options, square.vertices(), triangle.vertices(), None)
            .unwrap();
    assert!(hit);
    println!("Collision after {num_steps} steps, push the square by {mtv:?}.");

    // The opposite translation moves the triangle out instead.
    triangle.translate_by(&-mtv);
    assert!(!workspace
        .collide_2d(square.vertices(), triangle.vertices())
        .unwrap());
}
