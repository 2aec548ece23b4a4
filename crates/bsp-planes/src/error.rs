//! Errors raised while decoding plane lumps.

use crate::map_type::MapType;
use thiserror::Error;

/// Result type for lump decoding.
pub type LumpResult<T> = Result<T, LumpError>;

/// Errors that can occur while decoding a plane lump.
///
/// Geometric degeneracy is never reported here; see the NaN conventions in
/// [`intersect_three_planes`](crate::intersect_three_planes).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LumpError {
    /// No lump data was supplied.
    #[error("No plane lump data was provided")]
    NullInput,

    /// The map type has no known plane lump layout.
    #[error("Map type {0} has no supported plane lump layout")]
    UnsupportedFormat(MapType),
}
