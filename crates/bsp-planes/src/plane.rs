//! Plane representation and distance queries for BSP planes.
//!
//! BSP files store planes as `normal · point = distance` (`Ax + By + Cz = D`),
//! not the `Ax + By + Cz + D = 0` form most math libraries use. Every query in
//! this module follows the file convention, so planes decoded from a lump can
//! be used directly without negating the distance.

use crate::vector::{Scalar, Vector3d};

/// Absolute tolerance for [`Plane::contains`].
/// Points closer than this to the plane are considered "on" it.
pub const CONTAINS_EPSILON: Scalar = 0.001;

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Point is in front of the plane (positive side of normal)
    Front,
    /// Point is behind the plane (negative side of normal)
    Back,
    /// Point lies on the plane (within `CONTAINS_EPSILON`)
    OnPlane,
}

/// Axial classification of a plane, as stored in the trailing field of
/// 20-byte plane records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PlaneType {
    /// Normal is parallel to the X axis.
    X = 0,
    /// Normal is parallel to the Y axis.
    Y = 1,
    /// Normal is parallel to the Z axis.
    Z = 2,
    /// Non-axial, X is the dominant component.
    AnyX = 3,
    /// Non-axial, Y is the dominant component.
    AnyY = 4,
    /// Non-axial, Z is the dominant component.
    AnyZ = 5,
}

impl PlaneType {
    /// Classifies a normal the way Quake-family map compilers do.
    ///
    /// Ties between dominant components go to X, then Y.
    pub fn for_normal(normal: &Vector3d) -> Self {
        if normal.y == 0.0 && normal.z == 0.0 && normal.x != 0.0 {
            return PlaneType::X;
        }
        if normal.x == 0.0 && normal.z == 0.0 && normal.y != 0.0 {
            return PlaneType::Y;
        }
        if normal.x == 0.0 && normal.y == 0.0 && normal.z != 0.0 {
            return PlaneType::Z;
        }

        let ax = normal.x.abs();
        let ay = normal.y.abs();
        let az = normal.z.abs();
        if ax >= ay && ax >= az {
            PlaneType::AnyX
        } else if ay >= ax && ay >= az {
            PlaneType::AnyY
        } else {
            PlaneType::AnyZ
        }
    }

    /// Interprets a raw on-disk type value. Returns `None` outside `0..=5`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(PlaneType::X),
            1 => Some(PlaneType::Y),
            2 => Some(PlaneType::Z),
            3 => Some(PlaneType::AnyX),
            4 => Some(PlaneType::AnyY),
            5 => Some(PlaneType::AnyZ),
            _ => None,
        }
    }

    /// Returns `true` for the three axis-aligned types.
    #[inline]
    pub fn is_axial(self) -> bool {
        matches!(self, PlaneType::X | PlaneType::Y | PlaneType::Z)
    }
}

/// A plane in 3D space, represented as `normal · point = distance`.
///
/// The normal is stored as given and is never normalized, so planes read
/// from a lump keep their exact on-disk values. A zero normal is allowed but
/// meaningless: queries on such a plane produce NaN instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3d,
    distance: Scalar,
}

impl Plane {
    /// Creates a new plane from a normal vector and distance.
    #[inline]
    pub fn new(normal: Vector3d, distance: Scalar) -> Self {
        Self { normal, distance }
    }

    /// Creates a plane through three points using the `.map` brush winding:
    /// the normal points along `(a - b) × (c - b)`.
    ///
    /// The normal is normalized. Collinear points give a NaN plane.
    pub fn from_three_points(points: [Vector3d; 3]) -> Self {
        let [a, b, c] = points;
        let cross = (a - b).cross(&(c - b));
        let normal = cross / cross.norm();
        Self {
            normal,
            distance: normal.dot(&a),
        }
    }

    /// Returns the normal vector of the plane, exactly as stored.
    #[inline]
    pub fn normal(&self) -> Vector3d {
        self.normal
    }

    /// Returns the plane's distance term `D` in `Ax + By + Cz = D`.
    #[inline]
    pub fn distance(&self) -> Scalar {
        self.distance
    }

    /// Computes the signed distance from a point to the plane:
    /// `(normal · point - distance) / |normal|`.
    /// - Positive: point is in front (same side as normal)
    /// - Negative: point is behind (opposite side from normal)
    /// - Zero: point is on the plane
    #[inline]
    pub fn signed_distance(&self, point: &Vector3d) -> Scalar {
        (self.normal.dot(point) - self.distance) / self.normal.norm()
    }

    /// Returns `true` if the point is strictly in front of the plane.
    #[inline]
    pub fn is_positive_side(&self, point: &Vector3d) -> bool {
        self.signed_distance(point) > 0.0
    }

    /// Returns `true` if the point is within `CONTAINS_EPSILON` of the plane.
    #[inline]
    pub fn contains(&self, point: &Vector3d) -> bool {
        self.signed_distance(point).abs() < CONTAINS_EPSILON
    }

    /// Classifies which side of the plane a point lies on.
    pub fn classify_point(&self, point: &Vector3d) -> PlaneSide {
        let dist = self.signed_distance(point);
        if dist.abs() < CONTAINS_EPSILON {
            PlaneSide::OnPlane
        } else if dist > 0.0 {
            PlaneSide::Front
        } else {
            PlaneSide::Back
        }
    }

    /// Returns a new plane with the normal flipped (facing the opposite direction).
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// Returns the axial type a map compiler would store for this plane.
    #[inline]
    pub fn plane_type(&self) -> PlaneType {
        PlaneType::for_normal(&self.normal)
    }
}
