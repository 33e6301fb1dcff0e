//! Loudspeaker Presets
//!
//! Sensitivity, rated power, and nominal dispersion for generic speaker
//! classes used in distributed audio design. Presets cover the usual
//! 100 V-line ceiling and surface units; project-specific drivers can be
//! entered manually in the SPL calculator instead of using a preset.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Preset electro-acoustic data for one speaker class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeakerPreset {
    /// Catalogue code (stable lookup key)
    pub code: &'static str,
    /// On-axis sensitivity at 1 W / 1 m (dB SPL)
    pub sensitivity_db: f64,
    /// Maximum continuous power (W)
    pub max_power_w: f64,
    /// Nominal conical dispersion at 4 kHz (degrees)
    pub dispersion_deg: f64,
}

/// Generic speaker classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpeakerModel {
    /// 6.5" coaxial ceiling speaker
    #[default]
    Ceiling6,
    /// 8" coaxial ceiling speaker
    Ceiling8,
    /// Compact surface-mount cabinet
    SurfaceCabinet,
    /// Pendant sphere for open ceilings
    PendantSphere,
    /// Weatherproof horn projector
    HornProjector,
    /// Column array for reverberant halls
    ColumnArray,
}

impl SpeakerModel {
    /// All models for UI selection
    pub const ALL: [SpeakerModel; 6] = [
        SpeakerModel::Ceiling6,
        SpeakerModel::Ceiling8,
        SpeakerModel::SurfaceCabinet,
        SpeakerModel::PendantSphere,
        SpeakerModel::HornProjector,
        SpeakerModel::ColumnArray,
    ];

    /// Preset data for this model
    pub fn preset(&self) -> SpeakerPreset {
        match self {
            SpeakerModel::Ceiling6 => SpeakerPreset {
                code: "CL-6",
                sensitivity_db: 90.0,
                max_power_w: 30.0,
                dispersion_deg: 120.0,
            },
            SpeakerModel::Ceiling8 => SpeakerPreset {
                code: "CL-8",
                sensitivity_db: 92.0,
                max_power_w: 60.0,
                dispersion_deg: 110.0,
            },
            SpeakerModel::SurfaceCabinet => SpeakerPreset {
                code: "SF-20",
                sensitivity_db: 88.0,
                max_power_w: 20.0,
                dispersion_deg: 100.0,
            },
            SpeakerModel::PendantSphere => SpeakerPreset {
                code: "PD-16",
                sensitivity_db: 86.0,
                max_power_w: 16.0,
                dispersion_deg: 150.0,
            },
            SpeakerModel::HornProjector => SpeakerPreset {
                code: "HN-50",
                sensitivity_db: 105.0,
                max_power_w: 50.0,
                dispersion_deg: 90.0,
            },
            SpeakerModel::ColumnArray => SpeakerPreset {
                code: "CA-80",
                sensitivity_db: 93.0,
                max_power_w: 80.0,
                dispersion_deg: 40.0,
            },
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SpeakerModel::Ceiling6 => "Ceiling 6.5\" (CL-6)",
            SpeakerModel::Ceiling8 => "Ceiling 8\" (CL-8)",
            SpeakerModel::SurfaceCabinet => "Surface cabinet (SF-20)",
            SpeakerModel::PendantSphere => "Pendant sphere (PD-16)",
            SpeakerModel::HornProjector => "Horn projector (HN-50)",
            SpeakerModel::ColumnArray => "Column array (CA-80)",
        }
    }

    /// Look up a model by catalogue code (e.g., "CL-6").
    ///
    /// Unknown codes are a hard error; presets are never silently defaulted.
    pub fn from_code(code: &str) -> CalcResult<Self> {
        PRESET_INDEX
            .get(code.to_uppercase().as_str())
            .copied()
            .ok_or_else(|| CalcError::unknown_key("speaker_presets", code))
    }
}

impl std::fmt::Display for SpeakerModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Catalogue-code index, built once on first use.
static PRESET_INDEX: Lazy<HashMap<&'static str, SpeakerModel>> = Lazy::new(|| {
    SpeakerModel::ALL
        .iter()
        .map(|m| (m.preset().code, *m))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_physical() {
        for model in SpeakerModel::ALL {
            let p = model.preset();
            assert!(p.sensitivity_db > 80.0 && p.sensitivity_db < 115.0);
            assert!(p.max_power_w > 0.0);
            assert!(p.dispersion_deg > 0.0 && p.dispersion_deg < 180.0);
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(SpeakerModel::from_code("CL-6").unwrap(), SpeakerModel::Ceiling6);
        assert_eq!(SpeakerModel::from_code("hn-50").unwrap(), SpeakerModel::HornProjector);
        assert!(SpeakerModel::from_code("ACME-900").is_err());
    }

    #[test]
    fn test_codes_unique() {
        let codes: Vec<&str> = SpeakerModel::ALL.iter().map(|m| m.preset().code).collect();
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(codes.len(), deduped.len());
    }

    #[test]
    fn test_horn_is_loudest() {
        let horn = SpeakerModel::HornProjector.preset();
        for model in SpeakerModel::ALL {
            assert!(model.preset().sensitivity_db <= horn.sensitivity_db);
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = SpeakerModel::ColumnArray;
        let json = serde_json::to_string(&m).unwrap();
        let roundtrip: SpeakerModel = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
