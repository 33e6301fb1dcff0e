//! # Reverberation Time Calculation (Sabine)
//!
//! RT60 across the six octave bands from a room's surface schedule, checked
//! at mid-frequency against the target for the room's use.
//!
//! ## Sabine Formula
//!
//! ```text
//! RT60 = 0.161 × V / A,   A = Σ (surface area × α_material,band)
//! ```
//!
//! Sabine assumes a diffuse field and moderate absorption; it overestimates
//! RT60 in very dead rooms, which is conservative for a compliance check
//! against a maximum target.
//!
//! ## Example
//!
//! ```rust
//! use mep_core::calculations::reverberation::{ReverberationInput, RoomUse, Surface, calculate};
//! use mep_core::tables::absorption::SurfaceMaterial;
//!
//! let input = ReverberationInput {
//!     label: "Meeting Room 3".to_string(),
//!     room_length_m: 10.0,
//!     room_width_m: 7.0,
//!     room_height_m: 3.0,
//!     room_use: RoomUse::ConferenceRoom,
//!     surfaces: vec![
//!         Surface { material: SurfaceMaterial::AcousticCeilingTile, area_m2: 70.0 },
//!         Surface { material: SurfaceMaterial::CarpetOnConcrete, area_m2: 70.0 },
//!         Surface { material: SurfaceMaterial::GypsumBoard, area_m2: 102.0 },
//!     ],
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Mid-frequency RT60: {:?} s", result.mid_frequency_rt60_s);
//! ```

use serde::{Deserialize, Serialize};

use crate::compliance::Compliance;
use crate::errors::{CalcError, CalcResult};
use crate::formulas::acoustics::sabine_rt60;
use crate::tables::absorption::{FrequencyBand, SurfaceMaterial};
use crate::trace::CalcTrace;

/// Room use, fixing the mid-frequency RT60 target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomUse {
    /// Classroom: 0.8 s
    Classroom,
    /// Conference / meeting room: 1.0 s
    #[default]
    ConferenceRoom,
    /// Open-plan office: 0.8 s
    OpenOffice,
    /// Auditorium / lecture theatre: 1.2 s
    Auditorium,
    /// Multi-purpose hall: 1.5 s
    MultiPurposeHall,
    /// Sports hall: 2.0 s
    SportsHall,
}

impl RoomUse {
    /// All room uses for UI selection
    pub const ALL: [RoomUse; 6] = [
        RoomUse::Classroom,
        RoomUse::ConferenceRoom,
        RoomUse::OpenOffice,
        RoomUse::Auditorium,
        RoomUse::MultiPurposeHall,
        RoomUse::SportsHall,
    ];

    /// Maximum mid-frequency RT60 (s)
    pub fn target_rt60_s(&self) -> f64 {
        match self {
            RoomUse::Classroom => 0.8,
            RoomUse::ConferenceRoom => 1.0,
            RoomUse::OpenOffice => 0.8,
            RoomUse::Auditorium => 1.2,
            RoomUse::MultiPurposeHall => 1.5,
            RoomUse::SportsHall => 2.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomUse::Classroom => "Classroom",
            RoomUse::ConferenceRoom => "Conference room",
            RoomUse::OpenOffice => "Open-plan office",
            RoomUse::Auditorium => "Auditorium",
            RoomUse::MultiPurposeHall => "Multi-purpose hall",
            RoomUse::SportsHall => "Sports hall",
        }
    }
}

impl std::fmt::Display for RoomUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One entry in the surface schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Finish material
    pub material: SurfaceMaterial,

    /// Surface area (m²)
    pub area_m2: f64,
}

/// Input parameters for a reverberation check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Meeting Room 3",
///   "room_length_m": 10.0,
///   "room_width_m": 7.0,
///   "room_height_m": 3.0,
///   "room_use": "ConferenceRoom",
///   "surfaces": [
///     { "material": "AcousticCeilingTile", "area_m2": 70.0 },
///     { "material": "CarpetOnConcrete", "area_m2": 70.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverberationInput {
    /// User label for this room
    pub label: String,

    /// Room length (m)
    pub room_length_m: f64,

    /// Room width (m)
    pub room_width_m: f64,

    /// Room height (m)
    pub room_height_m: f64,

    /// Room use, selecting the RT60 target
    pub room_use: RoomUse,

    /// Surface schedule (every acoustically significant finish)
    pub surfaces: Vec<Surface>,
}

impl ReverberationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.room_length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "room_length_m",
                self.room_length_m.to_string(),
                "Room length must be positive",
            ));
        }
        if self.room_width_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "room_width_m",
                self.room_width_m.to_string(),
                "Room width must be positive",
            ));
        }
        if self.room_height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "room_height_m",
                self.room_height_m.to_string(),
                "Room height must be positive",
            ));
        }
        if self.surfaces.is_empty() {
            return Err(CalcError::missing_field("surfaces"));
        }
        for (i, surface) in self.surfaces.iter().enumerate() {
            if surface.area_m2 <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("surfaces[{i}].area_m2"),
                    surface.area_m2.to_string(),
                    "Surface area must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Room volume (m³)
    pub fn volume_m3(&self) -> f64 {
        self.room_length_m * self.room_width_m * self.room_height_m
    }
}

/// Per-band absorption and reverberation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandResult {
    /// Octave band
    pub band: FrequencyBand,

    /// Equivalent absorption area (m²)
    pub absorption_m2: f64,

    /// RT60 (s); `None` when absorption is zero (infinite decay,
    /// not computable)
    pub rt60_s: Option<f64>,
}

/// Results from a reverberation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverberationResult {
    /// Room volume (m³)
    pub volume_m3: f64,

    /// Per-band results, 125 Hz first
    pub bands: Vec<BandResult>,

    /// Mean of the 500 Hz and 1 kHz RT60s (s); `None` if either is
    /// not computable
    pub mid_frequency_rt60_s: Option<f64>,

    /// Check of mid-frequency RT60 against the room-use target
    pub compliance: Compliance,

    /// Ordered calculation steps for audit display
    pub trace: CalcTrace,
}

impl ReverberationResult {
    /// Check if the mid-frequency RT60 meets the target
    pub fn passes(&self) -> bool {
        self.compliance.passes
    }

    /// RT60 for one band, if computable
    pub fn rt60_at(&self, band: FrequencyBand) -> Option<f64> {
        self.bands
            .iter()
            .find(|b| b.band == band)
            .and_then(|b| b.rt60_s)
    }
}

/// Calculate band-by-band RT60 and check the mid-frequency value.
pub fn calculate(input: &ReverberationInput) -> CalcResult<ReverberationResult> {
    input.validate()?;

    let mut trace = CalcTrace::new();

    let volume = input.volume_m3();
    trace.step(
        "Room volume",
        format!(
            "{} × {} × {}",
            input.room_length_m, input.room_width_m, input.room_height_m
        ),
        volume,
        "m³",
    );

    let bands: Vec<BandResult> = FrequencyBand::ALL
        .iter()
        .map(|&band| {
            let absorption: f64 = input
                .surfaces
                .iter()
                .map(|s| s.area_m2 * s.material.alpha(band))
                .sum();
            let rt60 = sabine_rt60(volume, absorption);
            trace.step(
                format!("RT60 at {band}"),
                format!("0.161 × {volume:.0} / {absorption:.2}"),
                rt60,
                "s",
            );
            BandResult {
                band,
                absorption_m2: absorption,
                rt60_s: rt60.is_finite().then_some(rt60),
            }
        })
        .collect();

    let mid_500 = bands[FrequencyBand::Hz500.index()].rt60_s;
    let mid_1k = bands[FrequencyBand::Hz1k.index()].rt60_s;
    let mid = match (mid_500, mid_1k) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        _ => None,
    };

    let compliance = Compliance::at_most(
        "Mid-frequency RT60",
        mid.unwrap_or(f64::INFINITY),
        input.room_use.target_rt60_s(),
        "s",
    );

    Ok(ReverberationResult {
        volume_m3: volume,
        bands,
        mid_frequency_rt60_s: mid,
        compliance,
        trace,
    })
}
