//! Identifiers for the BSP format variants whose plane lumps can be decoded.

use strum::{Display, EnumCount, EnumIter, EnumString};

/// The engine or format revision that produced a BSP file.
///
/// Names parse case-insensitively (`"quake3".parse::<MapType>()`), which is
/// how tools select a format on the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum MapType {
    /// Unknown format. Has no plane lump mapping.
    #[default]
    Undefined,
    Quake,
    Quake2,
    Daikatana,
    SiN,
    SoF,
    Nightfire,
    Quake3,
    /// Raven Software's Quake 3 derivative (Jedi Outcast, Soldier of Fortune 2).
    Raven,
    /// Heavy Metal: F.A.K.K. 2
    FAKK,
    /// Medal of Honor: Allied Assault
    MOHAA,
    /// Star Trek: Elite Force 2
    STEF2,
    STEF2Demo,
    CoD,
    CoDDemo,
    CoD2,
    CoD4,
    Source17,
    Source18,
    Source19,
    Source20,
    Source21,
    Source22,
    Source23,
    Source27,
    L4D2,
    Vindictus,
    TacticalInterventionEncrypted,
    DMoMaM,
    Titanfall,
}
