//! Scalar width and vector type shared by every plane operation.

use nalgebra::Vector3;

/// Floating-point type used for all geometry.
///
/// `f32` by default; enable the `f64` feature for double precision.
#[cfg(not(feature = "f64"))]
pub type Scalar = f32;

/// Floating-point type used for all geometry.
///
/// `f32` by default; enable the `f64` feature for double precision.
#[cfg(feature = "f64")]
pub type Scalar = f64;

/// A 3-component vector, used for both points and directions.
pub type Vector3d = Vector3<Scalar>;

/// The sentinel returned by geometric queries that have no unique answer.
#[inline]
pub fn nan_vector() -> Vector3d {
    Vector3d::repeat(Scalar::NAN)
}

/// Returns `true` if any component of `v` is NaN.
#[inline]
pub fn is_nan_vector(v: &Vector3d) -> bool {
    v.iter().any(|c| c.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_vector_is_nan_everywhere() {
        let v = nan_vector();
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
        assert!(is_nan_vector(&v));
    }

    #[test]
    fn finite_vector_is_not_nan() {
        assert!(!is_nan_vector(&Vector3d::new(1.0, -2.0, 0.0)));
    }

    #[test]
    fn single_nan_component_is_detected() {
        assert!(is_nan_vector(&Vector3d::new(0.0, Scalar::NAN, 0.0)));
    }
}
