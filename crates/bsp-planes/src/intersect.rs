//! Intersections between planes and rays.
//!
//! None of these functions fail. When a query has no unique answer (parallel
//! planes, a ray parallel to a plane) the result is filled with NaN; callers
//! test the result with [`is_nan_vector`](crate::is_nan_vector) or
//! [`Ray::is_nan`].

use crate::plane::Plane;
use crate::ray::Ray;
use crate::vector::{nan_vector, Scalar, Vector3d};

/// Largest squared sine of the angle between two normals that still counts
/// as parallel.
pub const PARALLEL_EPSILON: Scalar = 1e-12;

/// Returns `true` if `n1 × n2` vanishes relative to the normals' lengths.
/// A zero normal is parallel to everything.
fn cross_is_negligible(cross: &Vector3d, n1: &Vector3d, n2: &Vector3d) -> bool {
    cross.norm_squared() <= PARALLEL_EPSILON * n1.norm_squared() * n2.norm_squared()
}

/// Finds the single point shared by three planes.
///
/// Solves the 3×3 system with Cramer's rule. Returns the NaN vector when the
/// determinant is exactly zero (the three normals are coplanar) or when any
/// two of the normals are parallel.
pub fn intersect_three_planes(p1: &Plane, p2: &Plane, p3: &Plane) -> Vector3d {
    let (n1, n2, n3) = (p1.normal(), p2.normal(), p3.normal());
    let (n2_cross_n3, n3_cross_n1, n1_cross_n2) = (n2.cross(&n3), n3.cross(&n1), n1.cross(&n2));

    if cross_is_negligible(&n2_cross_n3, &n2, &n3)
        || cross_is_negligible(&n3_cross_n1, &n3, &n1)
        || cross_is_negligible(&n1_cross_n2, &n1, &n2)
    {
        return nan_vector();
    }

    let det = n1.dot(&n2_cross_n3);
    if det == 0.0 {
        return nan_vector();
    }

    (n2_cross_n3 * p1.distance() + n3_cross_n1 * p2.distance() + n1_cross_n2 * p3.distance()) / det
}

/// Finds where a ray hits a plane.
///
/// Returns:
/// - `origin + t * direction` for the hit parameter `t >= 0`
/// - the ray origin if the ray lies inside the plane
/// - the NaN vector if the ray is parallel to the plane but outside it,
///   if the plane is behind the ray (`t < 0`), or if the plane has a zero normal
pub fn intersect_plane_ray(plane: &Plane, ray: &Ray) -> Vector3d {
    let normal = plane.normal();
    let denom = normal.dot(&ray.direction());
    let numer = plane.distance() - normal.dot(&ray.origin());

    if denom == 0.0 {
        let contained = numer == 0.0 && normal != Vector3d::zeros();
        return if contained { ray.origin() } else { nan_vector() };
    }

    let t = numer / denom;
    if t < 0.0 {
        return nan_vector();
    }
    ray.point_at(t)
}

/// Finds the line where two planes meet.
///
/// The direction is `n1 × n2`. If that is negligible next to the normals'
/// lengths (see [`PARALLEL_EPSILON`]) the planes are parallel (or identical)
/// and [`Ray::nan`] is returned. Otherwise the origin is the point
/// on the line where the coordinate along the dominant direction axis is zero.
pub fn intersect_planes(p1: &Plane, p2: &Plane) -> Ray {
    let (n1, n2) = (p1.normal(), p2.normal());
    let (d1, d2) = (p1.distance(), p2.distance());

    let direction = n1.cross(&n2);
    if cross_is_negligible(&direction, &n1, &n2) {
        return Ray::nan();
    }

    // Each 2×2 determinant equals the matching component of `direction`
    // (negated for Y).
    let origin = match Axis::dominant(&direction) {
        Axis::X => Vector3d::new(
            0.0,
            (d1 * n2.z - d2 * n1.z) / direction.x,
            (n1.y * d2 - n2.y * d1) / direction.x,
        ),
        Axis::Y => {
            let det = -direction.y;
            Vector3d::new(
                (d1 * n2.z - d2 * n1.z) / det,
                0.0,
                (n1.x * d2 - n2.x * d1) / det,
            )
        }
        Axis::Z => Vector3d::new(
            (d1 * n2.y - d2 * n1.y) / direction.z,
            (n1.x * d2 - n2.x * d1) / direction.z,
            0.0,
        ),
    };

    Ray::new(origin, direction)
}

/// Coordinate axis chosen to be pinned at zero when solving for a line origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axis with the largest squared component. Ties go to X, then Y.
    fn dominant(v: &Vector3d) -> Self {
        let (x2, y2, z2) = (v.x * v.x, v.y * v.y, v.z * v.z);
        if x2 >= y2 && x2 >= z2 {
            Axis::X
        } else if y2 >= z2 {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::is_nan_vector;

    fn plane(nx: Scalar, ny: Scalar, nz: Scalar, d: Scalar) -> Plane {
        Plane::new(Vector3d::new(nx, ny, nz), d)
    }

    fn assert_near(actual: Vector3d, expected: Vector3d) {
        assert!(
            (actual - expected).norm() < 1e-4,
            "Expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn three_axial_planes() {
        let point = intersect_three_planes(
            &plane(1.0, 0.0, 0.0, 1.0),
            &plane(0.0, 1.0, 0.0, 2.0),
            &plane(0.0, 0.0, 1.0, 3.0),
        );
        assert_eq!(point, Vector3d::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn three_sloped_planes_recover_distances() {
        let expected = Vector3d::new(1.0, 2.0, 3.0);
        let normals = [
            Vector3d::new(1.0, 1.0, 0.0),
            Vector3d::new(0.0, 1.0, 1.0),
            Vector3d::new(1.0, 0.0, 1.0),
        ];
        let planes: Vec<Plane> = normals
            .iter()
            .map(|n| Plane::new(*n, n.dot(&expected)))
            .collect();

        let point = intersect_three_planes(&planes[0], &planes[1], &planes[2]);
        assert_near(point, expected);

        for p in &planes {
            assert!((p.normal().dot(&point) - p.distance()).abs() < 1e-4);
        }
    }

    #[test]
    fn three_planes_with_parallel_pair_is_nan() {
        let point = intersect_three_planes(
            &plane(0.0, 0.0, 1.0, 0.0),
            &plane(0.0, 0.0, 1.0, 64.0),
            &plane(1.0, 0.0, 0.0, 3.0),
        );
        assert!(is_nan_vector(&point));
    }

    #[test]
    fn three_planes_sharing_a_line_is_nan() {
        // All normals lie in the XY plane
        let point = intersect_three_planes(
            &plane(1.0, 0.0, 0.0, 0.0),
            &plane(0.0, 1.0, 0.0, 0.0),
            &plane(1.0, 1.0, 0.0, 0.0),
        );
        assert!(is_nan_vector(&point));
    }

    #[test]
    fn three_planes_with_scaled_parallel_pair_is_nan() {
        // 3x is not a power of two, so the cross product does not cancel exactly
        let point = intersect_three_planes(
            &plane(0.6, 0.8, 0.0, 1.0),
            &plane(1.8, 2.4, 0.0, 5.0),
            &plane(0.0, 0.0, 1.0, 1.0),
        );
        assert!(is_nan_vector(&point));
    }

    #[test]
    fn ray_hits_plane() {
        let floor = plane(0.0, 0.0, 1.0, 64.0);
        let ray = Ray::new(Vector3d::new(8.0, 8.0, 100.0), Vector3d::new(0.0, 0.0, -2.0));
        assert_eq!(intersect_plane_ray(&floor, &ray), Vector3d::new(8.0, 8.0, 64.0));
    }

    #[test]
    fn ray_starting_on_plane_returns_origin() {
        let floor = plane(0.0, 0.0, 1.0, 64.0);
        let ray = Ray::new(Vector3d::new(1.0, 2.0, 64.0), Vector3d::new(0.0, 1.0, 1.0));
        assert_eq!(intersect_plane_ray(&floor, &ray), Vector3d::new(1.0, 2.0, 64.0));
    }

    #[test]
    fn ray_pointing_away_is_nan() {
        let floor = plane(0.0, 0.0, 1.0, 64.0);
        let ray = Ray::new(Vector3d::new(0.0, 0.0, 100.0), Vector3d::new(0.0, 0.0, 1.0));
        assert!(is_nan_vector(&intersect_plane_ray(&floor, &ray)));
    }

    #[test]
    fn parallel_ray_is_nan() {
        let floor = plane(0.0, 0.0, 1.0, 64.0);
        let ray = Ray::new(Vector3d::new(0.0, 0.0, 100.0), Vector3d::new(1.0, 0.0, 0.0));
        assert!(is_nan_vector(&intersect_plane_ray(&floor, &ray)));
    }

    #[test]
    fn zero_normal_plane_ray_is_nan() {
        let degenerate = Plane::new(Vector3d::zeros(), 0.0);
        let ray = Ray::new(Vector3d::new(1.0, 2.0, 3.0), Vector3d::new(0.0, 0.0, 1.0));
        assert!(is_nan_vector(&intersect_plane_ray(&degenerate, &ray)));
    }

    #[test]
    fn ray_inside_plane_returns_origin() {
        let floor = plane(0.0, 0.0, 1.0, 64.0);
        let ray = Ray::new(Vector3d::new(3.0, 4.0, 64.0), Vector3d::new(1.0, 1.0, 0.0));
        assert_eq!(intersect_plane_ray(&floor, &ray), Vector3d::new(3.0, 4.0, 64.0));
    }

    #[test]
    fn two_planes_dominant_z() {
        let line = intersect_planes(&plane(1.0, 0.0, 0.0, 1.0), &plane(0.0, 1.0, 0.0, 2.0));
        assert_eq!(line.direction(), Vector3d::new(0.0, 0.0, 1.0));
        assert_eq!(line.origin(), Vector3d::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn two_planes_dominant_y() {
        let line = intersect_planes(&plane(1.0, 0.0, 0.0, 2.0), &plane(0.0, 0.0, 1.0, 7.0));
        assert_eq!(line.direction(), Vector3d::new(0.0, -1.0, 0.0));
        assert_eq!(line.origin(), Vector3d::new(2.0, 0.0, 7.0));
    }

    #[test]
    fn two_planes_tie_prefers_x() {
        // Direction (1, 1, 0): x and y tie, x is pinned
        let line = intersect_planes(&plane(0.0, 0.0, 1.0, 5.0), &plane(1.0, -1.0, 0.0, 3.0));
        assert_eq!(line.direction(), Vector3d::new(1.0, 1.0, 0.0));
        assert_eq!(line.origin(), Vector3d::new(0.0, -3.0, 5.0));
    }

    #[test]
    fn two_sloped_planes_origin_lies_on_both() {
        let p1 = plane(0.3, -0.5, 0.8, 12.0);
        let p2 = plane(-0.6, 0.2, 0.4, -7.5);
        let line = intersect_planes(&p1, &p2);

        assert!(!line.is_nan());
        for t in [0.0, 1.0, -3.5] {
            let point = line.point_at(t);
            assert!(p1.contains(&point), "{:?} not on p1", point);
            assert!(p2.contains(&point), "{:?} not on p2", point);
        }
    }

    #[test]
    fn parallel_planes_are_nan() {
        let line = intersect_planes(&plane(0.0, 0.0, 1.0, 0.0), &plane(0.0, 0.0, 2.0, 10.0));
        assert!(is_nan_vector(&line.origin()));
        assert!(is_nan_vector(&line.direction()));

        let opposite = intersect_planes(&plane(0.0, 1.0, 0.0, 4.0), &plane(0.0, -1.0, 0.0, 4.0));
        assert!(opposite.is_nan());
    }

    #[test]
    fn scaled_parallel_planes_are_nan() {
        let line = intersect_planes(&plane(0.6, 0.8, 0.0, 1.0), &plane(1.8, 2.4, 0.0, 5.0));
        assert!(line.is_nan());

        let flipped = intersect_planes(&plane(0.6, 0.8, 0.0, 1.0), &plane(-0.3, -0.4, 0.0, 2.0));
        assert!(flipped.is_nan());
    }

    #[test]
    fn nearly_parallel_planes_still_meet() {
        let line = intersect_planes(&plane(1.0, 0.0, 0.0, 0.0), &plane(1.0, 0.01, 0.0, 1.0));
        assert!(!line.is_nan());
        assert_near(line.origin(), Vector3d::new(0.0, 100.0, 0.0));
    }

    #[test]
    fn identical_planes_are_nan() {
        let p = plane(0.6, 0.8, 0.0, 32.0);
        assert!(intersect_planes(&p, &p).is_nan());
    }

    #[test]
    fn dominant_axis_tie_break() {
        assert_eq!(Axis::dominant(&Vector3d::new(1.0, 1.0, 1.0)), Axis::X);
        assert_eq!(Axis::dominant(&Vector3d::new(0.0, -2.0, 2.0)), Axis::Y);
        assert_eq!(Axis::dominant(&Vector3d::new(0.0, 1.0, -3.0)), Axis::Z);
        assert_eq!(Axis::dominant(&Vector3d::new(-4.0, 1.0, 3.0)), Axis::X);
    }
}
