/*!
sataxis
========

**sataxis** is a Separating Axis Theorem collision-detection library for
convex shapes: arbitrary convex polygons in 2D and arbitrarily oriented
cuboids in 3D, with Minimum Translation Vector (MTV) resolution.

```rust
use sataxis::math::{Isometry3, Point2, Vector3};
use sataxis::query;
use sataxis::shape::Cuboid;

let square = [
    Point2::new(0.0, 0.0),
    Point2::new(2.0, 0.0),
    Point2::new(2.0, 2.0),
    Point2::new(0.0, 2.0),
];
let triangle = [
    Point2::new(1.0, 1.0),
    Point2::new(4.0, 1.0),
    Point2::new(2.5, 3.0),
];
assert!(query::collide_2d(&square, &triangle).unwrap());

let cube1 = Cuboid::new(&Isometry3::identity(), Vector3::repeat(1.0));
let cube2 = Cuboid::new(&Isometry3::translation(1.0, 0.0, 0.0), Vector3::repeat(1.0));
let (collided, mtv) = query::collide_3d_with_mtv(cube1.vertices(), cube2.vertices()).unwrap();
assert!(collided);
assert!(mtv.x < 0.0);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![deny(unused_qualifications)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg_attr(all(test, not(feature = "std")), macro_use)]
extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(not(feature = "f64"))]
    pub use f32 as Real;
}

/// Aliases for the mathematical types used by both the 2D and the 3D engines.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Isometry3, Point2, Point3, Translation2, Translation3, Vector2, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// A point of dimension `D`.
    pub type Point<const D: usize> = na::Point<Real, D>;

    /// A vector of dimension `D`.
    pub type Vector<const D: usize> = na::SVector<Real, D>;
}
