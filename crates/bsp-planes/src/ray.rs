//! Rays, used as intersection queries and as lines of intersection.

use crate::vector::{is_nan_vector, nan_vector, Scalar, Vector3d};

/// A ray (or infinite line) with an origin and a direction.
///
/// The direction is not required to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vector3d,
    direction: Vector3d,
}

impl Ray {
    /// Creates a new ray.
    #[inline]
    pub fn new(origin: Vector3d, direction: Vector3d) -> Self {
        Self { origin, direction }
    }

    /// The degenerate ray: NaN origin and NaN direction.
    #[inline]
    pub fn nan() -> Self {
        Self {
            origin: nan_vector(),
            direction: nan_vector(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vector3d {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector3d {
        self.direction
    }

    /// Returns `true` if the origin or direction contains NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        is_nan_vector(&self.origin) || is_nan_vector(&self.direction)
    }

    /// Returns `origin + t * direction`.
    #[inline]
    pub fn point_at(&self, t: Scalar) -> Vector3d {
        self.origin + self.direction * t
    }
}
