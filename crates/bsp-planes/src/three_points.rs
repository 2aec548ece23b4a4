//! Conversion from a plane to three points lying on it.
//!
//! Map sources (`.map` files) describe brush faces by three points instead of
//! a normal and distance. The points generated here are wound so that
//! [`Plane::from_three_points`] rebuilds a plane facing the same way as the
//! input.

use crate::plane::Plane;
use crate::vector::{Scalar, Vector3d};

/// Spacing used by map editors when writing brush planes.
pub const DEFAULT_THREE_POINT_SCALAR: Scalar = 16.0;

/// Which of the normal's components are exactly zero.
///
/// Each case solves the plane equation along a different axis; the first
/// three are planes parallel to a coordinate plane, the next three are
/// planes parallel to exactly one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreePointCase {
    /// Normal is `(x, 0, 0)`.
    ParallelToYZ,
    /// Normal is `(0, y, 0)`.
    ParallelToXZ,
    /// Normal is `(0, 0, z)`.
    ParallelToXY,
    /// Normal is `(0, y, z)`.
    ParallelToX,
    /// Normal is `(x, 0, z)`.
    ParallelToY,
    /// Normal is `(x, y, 0)`.
    ParallelToZ,
    /// No component is zero.
    General,
}

impl ThreePointCase {
    /// Picks the case for a normal. Checked in declaration order.
    pub fn classify(normal: &Vector3d) -> Self {
        let (x, y, z) = (normal.x == 0.0, normal.y == 0.0, normal.z == 0.0);
        match (x, y, z) {
            (_, true, true) => ThreePointCase::ParallelToYZ,
            (true, _, true) => ThreePointCase::ParallelToXZ,
            (true, true, _) => ThreePointCase::ParallelToXY,
            (true, false, false) => ThreePointCase::ParallelToX,
            (false, true, false) => ThreePointCase::ParallelToY,
            (false, false, true) => ThreePointCase::ParallelToZ,
            (false, false, false) => ThreePointCase::General,
        }
    }

    /// The normal component the points are solved against. The generated
    /// points are reversed when it is positive.
    fn dominant_component(self, normal: &Vector3d) -> Scalar {
        match self {
            ThreePointCase::ParallelToYZ | ThreePointCase::ParallelToY => normal.x,
            ThreePointCase::ParallelToXZ | ThreePointCase::ParallelToZ => normal.y,
            ThreePointCase::ParallelToXY
            | ThreePointCase::ParallelToX
            | ThreePointCase::General => normal.z,
        }
    }
}

/// Generates three distinct, non-collinear points on `plane`, spaced by
/// `scalar` (see [`DEFAULT_THREE_POINT_SCALAR`]).
///
/// `scalar` must be nonzero. The order follows the `.map` winding, so
/// `Plane::from_three_points` gives back a plane facing the same way.
pub fn generate_three_points(plane: &Plane, scalar: Scalar) -> [Vector3d; 3] {
    debug_assert!(scalar != 0.0, "three-point scalar must be nonzero");

    let n = plane.normal();
    let d = plane.distance();
    let s = scalar;
    let s2 = scalar * scalar;

    let case = ThreePointCase::classify(&n);
    let mut points = match case {
        ThreePointCase::ParallelToYZ => {
            let x = d / n.x;
            [
                Vector3d::new(x, -s, s),
                Vector3d::new(x, 0.0, 0.0),
                Vector3d::new(x, s, s),
            ]
        }
        ThreePointCase::ParallelToXZ => {
            let y = d / n.y;
            [
                Vector3d::new(s, y, -s),
                Vector3d::new(0.0, y, 0.0),
                Vector3d::new(s, y, s),
            ]
        }
        ThreePointCase::ParallelToXY => {
            let z = d / n.z;
            [
                Vector3d::new(-s, s, z),
                Vector3d::new(0.0, 0.0, z),
                Vector3d::new(s, s, z),
            ]
        }
        ThreePointCase::ParallelToX => {
            let z = -(s2 * n.y - d) / n.z;
            [
                Vector3d::new(-s, s2, z),
                Vector3d::new(0.0, 0.0, d / n.z),
                Vector3d::new(s, s2, z),
            ]
        }
        ThreePointCase::ParallelToY => {
            let x = -(s2 * n.z - d) / n.x;
            [
                Vector3d::new(x, -s, s2),
                Vector3d::new(d / n.x, 0.0, 0.0),
                Vector3d::new(x, s, s2),
            ]
        }
        ThreePointCase::ParallelToZ => {
            let y = -(s2 * n.x - d) / n.y;
            [
                Vector3d::new(s2, y, -s),
                Vector3d::new(0.0, d / n.y, 0.0),
                Vector3d::new(s2, y, s),
            ]
        }
        ThreePointCase::General => [
            Vector3d::new(-s, s2, -(-s * n.x + s2 * n.y - d) / n.z),
            Vector3d::new(0.0, 0.0, d / n.z),
            Vector3d::new(s, s2, -(s * n.x + s2 * n.y - d) / n.z),
        ],
    };

    if case.dominant_component(&n) > 0.0 {
        points.reverse();
    }
    points
}
