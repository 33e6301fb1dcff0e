//! Copper Conductor Data (IEC 60228 / BS 7671 style)
//!
//! Standard conductor cross-sections with DC resistance at 20 °C and typical
//! current-carrying capacities for clipped-direct installation. Resistance
//! values are the IEC 60228 maxima for class 1/2 plain copper, numerically
//! identical in Ω/km and mΩ/m.
//!
//! Requested sizes that are not standard resolve to the nearest tabulated
//! size (tie to the smaller); see [`nearest_conductor`].

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tables::nearest_index;
use crate::units::MilliohmsPerMeter;

/// Conductor insulation system, fixing the maximum operating temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Insulation {
    /// Thermoplastic (PVC), 70 °C conductor operating temperature
    #[default]
    Pvc,
    /// Thermosetting (XLPE), 90 °C conductor operating temperature
    Xlpe,
}

impl Insulation {
    /// All insulation variants for UI selection
    pub const ALL: [Insulation; 2] = [Insulation::Pvc, Insulation::Xlpe];

    /// Maximum conductor operating temperature (°C)
    pub fn max_operating_temp_c(&self) -> f64 {
        match self {
            Insulation::Pvc => 70.0,
            Insulation::Xlpe => 90.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "").as_str() {
            "PVC" | "THERMOPLASTIC" | "70C" => Ok(Insulation::Pvc),
            "XLPE" | "THERMOSETTING" | "90C" => Ok(Insulation::Xlpe),
            _ => Err(CalcError::unknown_key("insulation", s)),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Insulation::Pvc => "PVC (70 °C)",
            Insulation::Xlpe => "XLPE (90 °C)",
        }
    }
}

impl std::fmt::Display for Insulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supply arrangement, fixing the voltage-drop geometry factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Single-phase: drop over line and neutral (factor 2)
    SinglePhase,
    /// Three-phase balanced: line-to-line drop (factor √3)
    #[default]
    ThreePhase,
}

impl Phase {
    /// All phase variants for UI selection
    pub const ALL: [Phase; 2] = [Phase::SinglePhase, Phase::ThreePhase];

    /// Multiplier applied to one conductor's IR drop
    pub fn drop_factor(&self) -> f64 {
        match self {
            Phase::SinglePhase => 2.0,
            Phase::ThreePhase => 3.0_f64.sqrt(),
        }
    }

    /// Nominal supply voltage (V) for percentage calculations
    pub fn nominal_voltage(&self) -> f64 {
        match self {
            Phase::SinglePhase => 230.0,
            Phase::ThreePhase => 400.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::SinglePhase => "Single-phase 230 V",
            Phase::ThreePhase => "Three-phase 400 V",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of the conductor table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorData {
    /// Nominal cross-sectional area (mm²)
    pub csa_mm2: f64,
    /// DC resistance at 20 °C (mΩ/m), IEC 60228 maximum
    pub resistance_20c_mohm_per_m: f64,
    /// Current rating, PVC insulated, clipped direct (A)
    pub rating_pvc_a: f64,
    /// Current rating, XLPE insulated, clipped direct (A)
    pub rating_xlpe_a: f64,
}

impl ConductorData {
    /// Tabulated current rating for the given insulation (A)
    pub fn rating_a(&self, insulation: Insulation) -> f64 {
        match insulation {
            Insulation::Pvc => self.rating_pvc_a,
            Insulation::Xlpe => self.rating_xlpe_a,
        }
    }

    /// Resistance at an arbitrary conductor temperature (mΩ/m)
    ///
    /// Linear copper model: r(t) = r20 × (230 + t) / (230 + 20).
    pub fn resistance_at(&self, temp_c: f64) -> MilliohmsPerMeter {
        MilliohmsPerMeter(self.resistance_20c_mohm_per_m * (230.0 + temp_c) / 250.0)
    }

    /// Resistance at the insulation's maximum operating temperature (mΩ/m)
    ///
    /// This is the base coefficient that temperature correction adjusts
    /// downward when the conductor runs below its rated temperature.
    pub fn resistance_at_max_temp(&self, insulation: Insulation) -> MilliohmsPerMeter {
        self.resistance_at(insulation.max_operating_temp_c())
    }
}

/// Standard copper conductor sizes, ascending by cross-section.
pub const CONDUCTORS: [ConductorData; 17] = [
    ConductorData { csa_mm2: 1.0, resistance_20c_mohm_per_m: 18.1, rating_pvc_a: 15.0, rating_xlpe_a: 19.0 },
    ConductorData { csa_mm2: 1.5, resistance_20c_mohm_per_m: 12.1, rating_pvc_a: 19.5, rating_xlpe_a: 24.0 },
    ConductorData { csa_mm2: 2.5, resistance_20c_mohm_per_m: 7.41, rating_pvc_a: 27.0, rating_xlpe_a: 33.0 },
    ConductorData { csa_mm2: 4.0, resistance_20c_mohm_per_m: 4.61, rating_pvc_a: 36.0, rating_xlpe_a: 45.0 },
    ConductorData { csa_mm2: 6.0, resistance_20c_mohm_per_m: 3.08, rating_pvc_a: 46.0, rating_xlpe_a: 58.0 },
    ConductorData { csa_mm2: 10.0, resistance_20c_mohm_per_m: 1.83, rating_pvc_a: 63.0, rating_xlpe_a: 80.0 },
    ConductorData { csa_mm2: 16.0, resistance_20c_mohm_per_m: 1.15, rating_pvc_a: 85.0, rating_xlpe_a: 107.0 },
    ConductorData { csa_mm2: 25.0, resistance_20c_mohm_per_m: 0.727, rating_pvc_a: 112.0, rating_xlpe_a: 138.0 },
    ConductorData { csa_mm2: 35.0, resistance_20c_mohm_per_m: 0.524, rating_pvc_a: 138.0, rating_xlpe_a: 171.0 },
    ConductorData { csa_mm2: 50.0, resistance_20c_mohm_per_m: 0.387, rating_pvc_a: 168.0, rating_xlpe_a: 209.0 },
    ConductorData { csa_mm2: 70.0, resistance_20c_mohm_per_m: 0.268, rating_pvc_a: 213.0, rating_xlpe_a: 269.0 },
    ConductorData { csa_mm2: 95.0, resistance_20c_mohm_per_m: 0.193, rating_pvc_a: 258.0, rating_xlpe_a: 328.0 },
    ConductorData { csa_mm2: 120.0, resistance_20c_mohm_per_m: 0.153, rating_pvc_a: 299.0, rating_xlpe_a: 382.0 },
    ConductorData { csa_mm2: 150.0, resistance_20c_mohm_per_m: 0.124, rating_pvc_a: 344.0, rating_xlpe_a: 441.0 },
    ConductorData { csa_mm2: 185.0, resistance_20c_mohm_per_m: 0.0991, rating_pvc_a: 392.0, rating_xlpe_a: 506.0 },
    ConductorData { csa_mm2: 240.0, resistance_20c_mohm_per_m: 0.0754, rating_pvc_a: 461.0, rating_xlpe_a: 599.0 },
    ConductorData { csa_mm2: 300.0, resistance_20c_mohm_per_m: 0.0601, rating_pvc_a: 530.0, rating_xlpe_a: 693.0 },
];

/// Resolve a requested cross-section to the nearest standard conductor.
///
/// Non-standard requests resolve to the closest tabulated size by absolute
/// difference; exactly-between requests resolve to the smaller size. This
/// mirrors field practice of installing the nearest standard cable.
///
/// # Example
///
/// ```rust
/// use mep_core::tables::cable::nearest_conductor;
///
/// assert_eq!(nearest_conductor(2.5).csa_mm2, 2.5);
/// assert_eq!(nearest_conductor(3.0).csa_mm2, 2.5); // 2.5 is closer than 4.0
/// ```
pub fn nearest_conductor(csa_mm2: f64) -> &'static ConductorData {
    // sizes are a fixed ascending table; build the key slice once per call,
    // the table is small enough that this is negligible
    let sizes: Vec<f64> = CONDUCTORS.iter().map(|c| c.csa_mm2).collect();
    &CONDUCTORS[nearest_index(&sizes, csa_mm2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size_returns_exact_row() {
        for row in &CONDUCTORS {
            let found = nearest_conductor(row.csa_mm2);
            assert_eq!(found.csa_mm2, row.csa_mm2);
            assert_eq!(found.resistance_20c_mohm_per_m, row.resistance_20c_mohm_per_m);
        }
    }

    #[test]
    fn test_between_sizes_returns_closest() {
        // 3.0 mm² sits between 2.5 and 4.0; 2.5 is closer
        assert_eq!(nearest_conductor(3.0).csa_mm2, 2.5);
        // 3.5 mm² is closer to 4.0
        assert_eq!(nearest_conductor(3.5).csa_mm2, 4.0);
    }

    #[test]
    fn test_tie_resolves_to_smaller() {
        // 13.0 mm² is equidistant from 10 and 16
        assert_eq!(nearest_conductor(13.0).csa_mm2, 10.0);
        // 3.25 mm² is equidistant from 2.5 and 4.0
        assert_eq!(nearest_conductor(3.25).csa_mm2, 2.5);
    }

    #[test]
    fn test_table_is_ascending() {
        for pair in CONDUCTORS.windows(2) {
            assert!(pair[0].csa_mm2 < pair[1].csa_mm2);
            // resistance decreases with size
            assert!(pair[0].resistance_20c_mohm_per_m > pair[1].resistance_20c_mohm_per_m);
        }
    }

    #[test]
    fn test_resistance_at_temperature() {
        let c = nearest_conductor(25.0);
        // r70 = 0.727 × 300/250 = 0.8724
        let r70 = c.resistance_at(70.0);
        assert!((r70.0 - 0.8724).abs() < 1e-4);
        // at 20 °C the tabulated value comes back unchanged
        let r20 = c.resistance_at(20.0);
        assert!((r20.0 - 0.727).abs() < 1e-12);
    }

    #[test]
    fn test_resistance_at_max_temp_by_insulation() {
        let c = nearest_conductor(1.5);
        let pvc = c.resistance_at_max_temp(Insulation::Pvc);
        let xlpe = c.resistance_at_max_temp(Insulation::Xlpe);
        assert!(xlpe.0 > pvc.0);
    }

    #[test]
    fn test_xlpe_rating_exceeds_pvc() {
        for row in &CONDUCTORS {
            assert!(row.rating_xlpe_a > row.rating_pvc_a);
        }
    }

    #[test]
    fn test_phase_drop_factor() {
        assert_eq!(Phase::SinglePhase.drop_factor(), 2.0);
        assert!((Phase::ThreePhase.drop_factor() - 1.732).abs() < 1e-3);
    }

    #[test]
    fn test_insulation_parsing() {
        assert_eq!(Insulation::from_str_flexible("pvc").unwrap(), Insulation::Pvc);
        assert_eq!(Insulation::from_str_flexible("XLPE").unwrap(), Insulation::Xlpe);
        assert!(Insulation::from_str_flexible("rubber").is_err());
    }

    #[test]
    fn test_serialization() {
        let ins = Insulation::Xlpe;
        let json = serde_json::to_string(&ins).unwrap();
        let roundtrip: Insulation = serde_json::from_str(&json).unwrap();
        assert_eq!(ins, roundtrip);
    }
}
