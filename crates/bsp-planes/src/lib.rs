//! Plane geometry and plane-lump decoding for BSP map files.
//!
//! Planes follow the convention used by BSP files, `normal · point = distance`.
//!
//! # Example
//!
//! ```
//! use bsp_planes::{decode_planes, MapType, Vector3d};
//!
//! // One 20-byte Quake record: normal (0, 0, 1), distance 64, type 2
//! let mut lump = Vec::new();
//! for value in [0.0f32, 0.0, 1.0, 64.0] {
//!     lump.extend_from_slice(&value.to_le_bytes());
//! }
//! lump.extend_from_slice(&2i32.to_le_bytes());
//!
//! let planes = decode_planes(Some(&lump), MapType::Quake, 0).unwrap();
//! assert_eq!(planes[0].signed_distance(&Vector3d::new(0.0, 0.0, 100.0)), 36.0);
//! ```
//!
//! # Degenerate geometry
//!
//! Intersection queries never return errors. Parallel planes, or a ray
//! parallel to a plane, produce NaN components; check the result with
//! [`is_nan_vector`] or [`Ray::is_nan`].

mod error;
mod intersect;
mod lump;
mod map_type;
mod plane;
mod ray;
mod three_points;
mod vector;

pub use error::{LumpError, LumpResult};
pub use intersect::{
    intersect_plane_ray, intersect_planes, intersect_three_planes, PARALLEL_EPSILON,
};
pub use lump::{
    decode_plane_records, decode_planes, lump_index, record_size, PlaneLumpFormat, PlaneRecord,
    RecordLayout,
};
pub use map_type::MapType;
pub use plane::{Plane, PlaneSide, PlaneType, CONTAINS_EPSILON};
pub use ray::Ray;
pub use three_points::{generate_three_points, ThreePointCase, DEFAULT_THREE_POINT_SCALAR};
pub use vector::{is_nan_vector, nan_vector, Scalar, Vector3d};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn value_types_are_send_and_sync() {
        assert_send_sync::<Plane>();
        assert_send_sync::<Ray>();
        assert_send_sync::<MapType>();
        assert_send_sync::<PlaneRecord>();
        assert_send_sync::<LumpError>();
    }

    #[test]
    fn concurrent_decoding_agrees() {
        let mut lump = Vec::new();
        for i in 0..64 {
            for value in [0.0f32, 0.0, 1.0, i as f32] {
                lump.extend_from_slice(&value.to_le_bytes());
            }
        }
        let expected = decode_planes(Some(&lump), MapType::Quake3, 0).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| decode_planes(Some(&lump), MapType::Quake3, 0)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }
}
