//! Decoding of the planes lump.
//!
//! Every supported format stores planes as a flat array of fixed-size
//! little-endian records:
//!
//! | Offset | Field | Bytes |
//! |---|---|---|
//! | 0 | normal.x | 4 |
//! | 4 | normal.y | 4 |
//! | 8 | normal.z | 4 |
//! | 12 | distance | 4 |
//! | 16 | plane type (20-byte layout only) | 4 |
//!
//! Which layout a file uses, and which header slot points at the lump, is
//! looked up from the [`MapType`] in a single table. New formats are added
//! to that table; nothing is inferred from the data.

use crate::error::{LumpError, LumpResult};
use crate::map_type::MapType;
use crate::plane::{Plane, PlaneType};
use crate::vector::{Scalar, Vector3d};

/// On-disk layout of one plane record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordLayout {
    /// Normal and distance only (16 bytes). Quake 3 and its descendants.
    Compact,
    /// Normal, distance and an `i32` plane type (20 bytes). Quake, Quake 2,
    /// Source and their descendants.
    Typed,
}

impl RecordLayout {
    /// Size of one record in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            RecordLayout::Compact => 16,
            RecordLayout::Typed => 20,
        }
    }

    /// Returns `true` if records carry the trailing plane type field.
    #[inline]
    pub const fn has_plane_type(self) -> bool {
        matches!(self, RecordLayout::Typed)
    }
}

/// Where and how a format stores its planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneLumpFormat {
    pub layout: RecordLayout,
    /// Index of the planes lump in the file header's lump directory.
    pub lump_index: usize,
}

const fn typed(lump_index: usize) -> PlaneLumpFormat {
    PlaneLumpFormat {
        layout: RecordLayout::Typed,
        lump_index,
    }
}

const fn compact(lump_index: usize) -> PlaneLumpFormat {
    PlaneLumpFormat {
        layout: RecordLayout::Compact,
        lump_index,
    }
}

/// Plane lump format for every supported map type.
/// `MapType::Undefined` is intentionally absent.
static PLANE_LUMP_FORMATS: &[(MapType, PlaneLumpFormat)] = &[
    (MapType::Quake, typed(1)),
    (MapType::Quake2, typed(1)),
    (MapType::Daikatana, typed(1)),
    (MapType::SiN, typed(1)),
    (MapType::SoF, typed(1)),
    (MapType::Nightfire, typed(1)),
    (MapType::Source17, typed(1)),
    (MapType::Source18, typed(1)),
    (MapType::Source19, typed(1)),
    (MapType::Source20, typed(1)),
    (MapType::Source21, typed(1)),
    (MapType::Source22, typed(1)),
    (MapType::Source23, typed(1)),
    (MapType::Source27, typed(1)),
    (MapType::L4D2, typed(1)),
    (MapType::Vindictus, typed(1)),
    (MapType::TacticalInterventionEncrypted, typed(1)),
    (MapType::DMoMaM, typed(1)),
    // Shaders come first in these Quake 3 offshoots
    (MapType::FAKK, compact(1)),
    (MapType::MOHAA, compact(1)),
    (MapType::STEF2, compact(1)),
    (MapType::STEF2Demo, compact(1)),
    (MapType::Titanfall, compact(1)),
    (MapType::Quake3, compact(2)),
    (MapType::Raven, compact(2)),
    (MapType::CoD, compact(2)),
    (MapType::CoDDemo, compact(2)),
    (MapType::CoD2, compact(4)),
    (MapType::CoD4, compact(4)),
];

impl MapType {
    /// Looks up the plane lump format, or `None` if this map type has none.
    pub fn plane_lump(self) -> Option<PlaneLumpFormat> {
        PLANE_LUMP_FORMATS
            .iter()
            .find(|(map_type, _)| *map_type == self)
            .map(|(_, format)| *format)
    }
}

/// Size in bytes of one plane record for `map_type` (16 or 20).
pub fn record_size(map_type: MapType) -> LumpResult<usize> {
    map_type
        .plane_lump()
        .map(|format| format.layout.size())
        .ok_or(LumpError::UnsupportedFormat(map_type))
}

/// Header slot of the planes lump for `map_type`, or `None` if unsupported.
pub fn lump_index(map_type: MapType) -> Option<usize> {
    map_type.plane_lump().map(|format| format.lump_index)
}

/// A decoded plane together with the raw type field from its record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneRecord {
    pub plane: Plane,
    /// Trailing `i32` of 20-byte records; `None` for 16-byte records.
    pub raw_type: Option<i32>,
}

impl PlaneRecord {
    /// The stored type, if present and in the valid range.
    pub fn plane_type(&self) -> Option<PlaneType> {
        self.raw_type.and_then(PlaneType::from_raw)
    }
}

/// Decodes a planes lump into planes, in file order.
///
/// - `data` is `None` ⇒ [`LumpError::NullInput`]
/// - `map_type` has no plane layout ⇒ [`LumpError::UnsupportedFormat`]
///
/// Trailing bytes that do not fill a whole record are ignored. `version` is
/// the file's format version; no supported format changes its plane layout
/// between versions, so it currently has no effect.
pub fn decode_planes(
    data: Option<&[u8]>,
    map_type: MapType,
    version: i32,
) -> LumpResult<Vec<Plane>> {
    let records = decode_plane_records(data, map_type, version)?;
    Ok(records.into_iter().map(|record| record.plane).collect())
}

/// Like [`decode_planes`], but keeps the plane type field of 20-byte records.
pub fn decode_plane_records(
    data: Option<&[u8]>,
    map_type: MapType,
    _version: i32,
) -> LumpResult<Vec<PlaneRecord>> {
    let data = data.ok_or(LumpError::NullInput)?;
    let layout = map_type
        .plane_lump()
        .ok_or(LumpError::UnsupportedFormat(map_type))?
        .layout;

    let records = data
        .chunks_exact(layout.size())
        .map(|record| PlaneRecord {
            plane: Plane::new(
                Vector3d::new(
                    read_f32_le(record, 0),
                    read_f32_le(record, 4),
                    read_f32_le(record, 8),
                ),
                read_f32_le(record, 12),
            ),
            raw_type: layout
                .has_plane_type()
                .then(|| read_i32_le(record, 16)),
        })
        .collect();

    Ok(records)
}

fn read_f32_le(data: &[u8], offset: usize) -> Scalar {
    Scalar::from(f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]))
}

fn read_i32_le(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
