//! Sound Absorption Coefficients
//!
//! Random-incidence absorption coefficients (α) for common room finishes
//! across the six octave bands used in room acoustics (125 Hz to 4 kHz).
//! Values are typical published figures for the generic constructions named;
//! product-specific data should be entered as a custom surface when known.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Octave bands used for reverberation calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrequencyBand {
    /// 125 Hz octave band
    Hz125,
    /// 250 Hz octave band
    Hz250,
    /// 500 Hz octave band
    Hz500,
    /// 1 kHz octave band
    Hz1k,
    /// 2 kHz octave band
    Hz2k,
    /// 4 kHz octave band
    Hz4k,
}

impl FrequencyBand {
    /// All bands, ascending
    pub const ALL: [FrequencyBand; 6] = [
        FrequencyBand::Hz125,
        FrequencyBand::Hz250,
        FrequencyBand::Hz500,
        FrequencyBand::Hz1k,
        FrequencyBand::Hz2k,
        FrequencyBand::Hz4k,
    ];

    /// Band center frequency in Hz
    pub fn hz(&self) -> f64 {
        match self {
            FrequencyBand::Hz125 => 125.0,
            FrequencyBand::Hz250 => 250.0,
            FrequencyBand::Hz500 => 500.0,
            FrequencyBand::Hz1k => 1000.0,
            FrequencyBand::Hz2k => 2000.0,
            FrequencyBand::Hz4k => 4000.0,
        }
    }

    /// Index into a `[f64; 6]` coefficient row
    pub fn index(&self) -> usize {
        match self {
            FrequencyBand::Hz125 => 0,
            FrequencyBand::Hz250 => 1,
            FrequencyBand::Hz500 => 2,
            FrequencyBand::Hz1k => 3,
            FrequencyBand::Hz2k => 4,
            FrequencyBand::Hz4k => 5,
        }
    }

    /// Display label (e.g., "500 Hz", "1 kHz")
    pub fn display_name(&self) -> &'static str {
        match self {
            FrequencyBand::Hz125 => "125 Hz",
            FrequencyBand::Hz250 => "250 Hz",
            FrequencyBand::Hz500 => "500 Hz",
            FrequencyBand::Hz1k => "1 kHz",
            FrequencyBand::Hz2k => "2 kHz",
            FrequencyBand::Hz4k => "4 kHz",
        }
    }
}

impl std::fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Room surface finishes with tabulated absorption data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceMaterial {
    /// Unglazed brick
    Brick,
    /// Smooth concrete, sealed or painted
    PaintedConcrete,
    /// Plaster on masonry
    PlasterOnMasonry,
    /// 12.5 mm gypsum board on studs
    GypsumBoard,
    /// Large panes of heavy plate glass
    Glass,
    /// Timber boards on joists
    WoodFloor,
    /// 10 mm plywood paneling over air space
    PlywoodPanel,
    /// Vinyl or linoleum on concrete
    VinylOnConcrete,
    /// Thin carpet glued to concrete
    CarpetOnConcrete,
    /// Heavy carpet on foam underlay
    CarpetOnUnderlay,
    /// Suspended mineral-fiber acoustic tile
    AcousticCeilingTile,
    /// Medium-weight velour curtain, draped to half area
    FabricCurtain,
    /// Unoccupied upholstered seating, per floor area
    UpholsteredSeating,
}

impl SurfaceMaterial {
    /// All materials for UI selection
    pub const ALL: [SurfaceMaterial; 13] = [
        SurfaceMaterial::Brick,
        SurfaceMaterial::PaintedConcrete,
        SurfaceMaterial::PlasterOnMasonry,
        SurfaceMaterial::GypsumBoard,
        SurfaceMaterial::Glass,
        SurfaceMaterial::WoodFloor,
        SurfaceMaterial::PlywoodPanel,
        SurfaceMaterial::VinylOnConcrete,
        SurfaceMaterial::CarpetOnConcrete,
        SurfaceMaterial::CarpetOnUnderlay,
        SurfaceMaterial::AcousticCeilingTile,
        SurfaceMaterial::FabricCurtain,
        SurfaceMaterial::UpholsteredSeating,
    ];

    /// Absorption coefficients for the six bands, 125 Hz first.
    pub fn coefficients(&self) -> [f64; 6] {
        match self {
            SurfaceMaterial::Brick => [0.03, 0.03, 0.03, 0.04, 0.05, 0.07],
            SurfaceMaterial::PaintedConcrete => [0.01, 0.01, 0.02, 0.02, 0.02, 0.03],
            SurfaceMaterial::PlasterOnMasonry => [0.01, 0.02, 0.02, 0.03, 0.04, 0.05],
            SurfaceMaterial::GypsumBoard => [0.29, 0.10, 0.05, 0.04, 0.07, 0.09],
            SurfaceMaterial::Glass => [0.18, 0.06, 0.04, 0.03, 0.02, 0.02],
            SurfaceMaterial::WoodFloor => [0.15, 0.11, 0.10, 0.07, 0.06, 0.07],
            SurfaceMaterial::PlywoodPanel => [0.28, 0.22, 0.17, 0.09, 0.10, 0.11],
            SurfaceMaterial::VinylOnConcrete => [0.02, 0.03, 0.03, 0.03, 0.03, 0.02],
            SurfaceMaterial::CarpetOnConcrete => [0.02, 0.06, 0.14, 0.37, 0.60, 0.65],
            SurfaceMaterial::CarpetOnUnderlay => [0.08, 0.24, 0.57, 0.69, 0.71, 0.73],
            SurfaceMaterial::AcousticCeilingTile => [0.70, 0.66, 0.72, 0.92, 0.88, 0.75],
            SurfaceMaterial::FabricCurtain => [0.07, 0.31, 0.49, 0.75, 0.70, 0.60],
            SurfaceMaterial::UpholsteredSeating => [0.49, 0.66, 0.80, 0.88, 0.82, 0.70],
        }
    }

    /// Absorption coefficient for one band
    pub fn alpha(&self, band: FrequencyBand) -> f64 {
        self.coefficients()[band.index()]
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "brick" => Ok(SurfaceMaterial::Brick),
            "paintedconcrete" | "concrete" => Ok(SurfaceMaterial::PaintedConcrete),
            "plaster" | "plasteronmasonry" => Ok(SurfaceMaterial::PlasterOnMasonry),
            "gypsum" | "gypsumboard" | "drywall" | "plasterboard" => Ok(SurfaceMaterial::GypsumBoard),
            "glass" | "glazing" => Ok(SurfaceMaterial::Glass),
            "woodfloor" | "timberfloor" => Ok(SurfaceMaterial::WoodFloor),
            "plywood" | "plywoodpanel" => Ok(SurfaceMaterial::PlywoodPanel),
            "vinyl" | "linoleum" | "vinylonconcrete" => Ok(SurfaceMaterial::VinylOnConcrete),
            "carpet" | "carpetonconcrete" => Ok(SurfaceMaterial::CarpetOnConcrete),
            "carpetonunderlay" | "heavycarpet" => Ok(SurfaceMaterial::CarpetOnUnderlay),
            "acoustictile" | "acousticceilingtile" | "ceilingtile" => {
                Ok(SurfaceMaterial::AcousticCeilingTile)
            }
            "curtain" | "fabriccurtain" | "drape" | "velour" => Ok(SurfaceMaterial::FabricCurtain),
            "seating" | "upholsteredseating" => Ok(SurfaceMaterial::UpholsteredSeating),
            _ => Err(CalcError::unknown_key("absorption", s)),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SurfaceMaterial::Brick => "Brick (unglazed)",
            SurfaceMaterial::PaintedConcrete => "Painted concrete",
            SurfaceMaterial::PlasterOnMasonry => "Plaster on masonry",
            SurfaceMaterial::GypsumBoard => "Gypsum board on studs",
            SurfaceMaterial::Glass => "Glass (heavy plate)",
            SurfaceMaterial::WoodFloor => "Wood floor on joists",
            SurfaceMaterial::PlywoodPanel => "Plywood paneling",
            SurfaceMaterial::VinylOnConcrete => "Vinyl on concrete",
            SurfaceMaterial::CarpetOnConcrete => "Carpet on concrete",
            SurfaceMaterial::CarpetOnUnderlay => "Carpet on foam underlay",
            SurfaceMaterial::AcousticCeilingTile => "Acoustic ceiling tile",
            SurfaceMaterial::FabricCurtain => "Fabric curtain (draped)",
            SurfaceMaterial::UpholsteredSeating => "Upholstered seating",
        }
    }
}

impl std::fmt::Display for SurfaceMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
