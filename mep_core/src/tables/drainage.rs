//! Drainage Fixture Units and Pipe Capacities
//!
//! Fixture unit loadings for sanitary appliances and the maximum fixture
//! units a drain of a given diameter can serve, for horizontal branches and
//! vertical stacks. Values follow model plumbing-code loading tables.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Sanitary fixtures with tabulated drainage fixture unit (DFU) loadings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureKind {
    /// Water closet, gravity flush
    WaterCloset,
    /// Wash basin / lavatory
    WashBasin,
    /// Kitchen sink (domestic)
    KitchenSink,
    /// Shower stall
    Shower,
    /// Bathtub
    Bathtub,
    /// Wall-hung urinal
    Urinal,
    /// Domestic dishwasher
    Dishwasher,
    /// Domestic washing machine
    WashingMachine,
    /// Floor drain, 50 mm trap
    FloorDrain,
    /// Drinking fountain
    DrinkingFountain,
}

impl FixtureKind {
    /// All fixture kinds for UI selection
    pub const ALL: [FixtureKind; 10] = [
        FixtureKind::WaterCloset,
        FixtureKind::WashBasin,
        FixtureKind::KitchenSink,
        FixtureKind::Shower,
        FixtureKind::Bathtub,
        FixtureKind::Urinal,
        FixtureKind::Dishwasher,
        FixtureKind::WashingMachine,
        FixtureKind::FloorDrain,
        FixtureKind::DrinkingFountain,
    ];

    /// Drainage fixture units contributed by one fixture
    pub fn dfu(&self) -> f64 {
        match self {
            FixtureKind::WaterCloset => 4.0,
            FixtureKind::WashBasin => 1.0,
            FixtureKind::KitchenSink => 2.0,
            FixtureKind::Shower => 2.0,
            FixtureKind::Bathtub => 2.0,
            FixtureKind::Urinal => 2.0,
            FixtureKind::Dishwasher => 2.0,
            FixtureKind::WashingMachine => 3.0,
            FixtureKind::FloorDrain => 2.0,
            FixtureKind::DrinkingFountain => 0.5,
        }
    }

    /// Smallest trap/connection size acceptable for this fixture (mm)
    pub fn min_trap_mm(&self) -> f64 {
        match self {
            FixtureKind::WaterCloset => 80.0,
            FixtureKind::WashBasin => 32.0,
            FixtureKind::KitchenSink => 40.0,
            FixtureKind::Shower => 50.0,
            FixtureKind::Bathtub => 40.0,
            FixtureKind::Urinal => 40.0,
            FixtureKind::Dishwasher => 40.0,
            FixtureKind::WashingMachine => 50.0,
            FixtureKind::FloorDrain => 50.0,
            FixtureKind::DrinkingFountain => 32.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "wc" | "watercloset" | "toilet" => Ok(FixtureKind::WaterCloset),
            "basin" | "washbasin" | "lavatory" => Ok(FixtureKind::WashBasin),
            "sink" | "kitchensink" => Ok(FixtureKind::KitchenSink),
            "shower" => Ok(FixtureKind::Shower),
            "bath" | "bathtub" | "tub" => Ok(FixtureKind::Bathtub),
            "urinal" => Ok(FixtureKind::Urinal),
            "dishwasher" => Ok(FixtureKind::Dishwasher),
            "washingmachine" | "washer" | "laundry" => Ok(FixtureKind::WashingMachine),
            "floordrain" | "gully" => Ok(FixtureKind::FloorDrain),
            "fountain" | "drinkingfountain" => Ok(FixtureKind::DrinkingFountain),
            _ => Err(CalcError::unknown_key("fixture_units", s)),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FixtureKind::WaterCloset => "Water closet",
            FixtureKind::WashBasin => "Wash basin",
            FixtureKind::KitchenSink => "Kitchen sink",
            FixtureKind::Shower => "Shower",
            FixtureKind::Bathtub => "Bathtub",
            FixtureKind::Urinal => "Urinal",
            FixtureKind::Dishwasher => "Dishwasher",
            FixtureKind::WashingMachine => "Washing machine",
            FixtureKind::FloorDrain => "Floor drain",
            FixtureKind::DrinkingFountain => "Drinking fountain",
        }
    }
}

impl std::fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Drain configuration, selecting which capacity column applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DrainType {
    /// Horizontal fixture branch at nominal fall
    #[default]
    HorizontalBranch,
    /// Vertical soil/waste stack
    Stack,
}

impl DrainType {
    /// All drain types for UI selection
    pub const ALL: [DrainType; 2] = [DrainType::HorizontalBranch, DrainType::Stack];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DrainType::HorizontalBranch => "Horizontal branch",
            DrainType::Stack => "Vertical stack",
        }
    }
}

impl std::fmt::Display for DrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of the drain capacity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeCapacity {
    /// Nominal pipe diameter (mm)
    pub diameter_mm: f64,
    /// Maximum DFU on a horizontal fixture branch
    pub branch_dfu: f64,
    /// Maximum DFU on a vertical stack (one branch interval)
    pub stack_dfu: f64,
}

impl PipeCapacity {
    /// Capacity for the given drain type
    pub fn capacity(&self, drain: DrainType) -> f64 {
        match drain {
            DrainType::HorizontalBranch => self.branch_dfu,
            DrainType::Stack => self.stack_dfu,
        }
    }
}

/// Drain capacities, ascending by diameter.
pub const DRAIN_PIPES: [PipeCapacity; 9] = [
    PipeCapacity { diameter_mm: 32.0, branch_dfu: 1.0, stack_dfu: 2.0 },
    PipeCapacity { diameter_mm: 40.0, branch_dfu: 3.0, stack_dfu: 4.0 },
    PipeCapacity { diameter_mm: 50.0, branch_dfu: 6.0, stack_dfu: 10.0 },
    PipeCapacity { diameter_mm: 65.0, branch_dfu: 12.0, stack_dfu: 20.0 },
    PipeCapacity { diameter_mm: 80.0, branch_dfu: 20.0, stack_dfu: 48.0 },
    PipeCapacity { diameter_mm: 100.0, branch_dfu: 160.0, stack_dfu: 240.0 },
    PipeCapacity { diameter_mm: 125.0, branch_dfu: 360.0, stack_dfu: 540.0 },
    PipeCapacity { diameter_mm: 150.0, branch_dfu: 620.0, stack_dfu: 960.0 },
    PipeCapacity { diameter_mm: 200.0, branch_dfu: 1400.0, stack_dfu: 2200.0 },
];

/// Smallest tabulated pipe that serves the given fixture-unit total.
///
/// A load above the largest tabulated pipe is a hard error (no
/// extrapolation beyond the table).
pub fn minimum_pipe(total_dfu: f64, drain: DrainType) -> CalcResult<&'static PipeCapacity> {
    DRAIN_PIPES
        .iter()
        .find(|p| p.capacity(drain) >= total_dfu)
        .ok_or_else(|| {
            CalcError::calculation_failed(
                "DrainSizing",
                format!(
                    "{total_dfu} fixture units exceeds the largest tabulated {} capacity",
                    drain.display_name().to_lowercase()
                ),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfu_mapping_total_and_positive() {
        for fixture in FixtureKind::ALL {
            assert!(fixture.dfu() > 0.0);
            assert!(fixture.min_trap_mm() >= 32.0);
        }
    }

    #[test]
    fn test_capacity_monotonic() {
        for pair in DRAIN_PIPES.windows(2) {
            assert!(pair[0].diameter_mm < pair[1].diameter_mm);
            assert!(pair[0].branch_dfu < pair[1].branch_dfu);
            assert!(pair[0].stack_dfu < pair[1].stack_dfu);
        }
    }

    #[test]
    fn test_stack_carries_more_than_branch() {
        for pipe in &DRAIN_PIPES {
            assert!(pipe.stack_dfu >= pipe.branch_dfu);
        }
    }

    #[test]
    fn test_minimum_pipe_selects_smallest_adequate() {
        // 4 DFU (one WC) needs 80 mm on a branch: 65 mm carries 12 but a WC
        // alone is sized by capacity here, so 40 mm carries 3 < 4 -> 50 mm
        let pipe = minimum_pipe(4.0, DrainType::HorizontalBranch).unwrap();
        assert_eq!(pipe.diameter_mm, 50.0);

        let pipe = minimum_pipe(21.0, DrainType::HorizontalBranch).unwrap();
        assert_eq!(pipe.diameter_mm, 100.0);

        let pipe = minimum_pipe(21.0, DrainType::Stack).unwrap();
        assert_eq!(pipe.diameter_mm, 80.0);
    }

    #[test]
    fn test_exact_capacity_boundary() {
        let pipe = minimum_pipe(6.0, DrainType::HorizontalBranch).unwrap();
        assert_eq!(pipe.diameter_mm, 50.0);
    }

    #[test]
    fn test_overload_is_hard_error() {
        let err = minimum_pipe(5000.0, DrainType::HorizontalBranch).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_parsing() {
        assert_eq!(
            FixtureKind::from_str_flexible("WC").unwrap(),
            FixtureKind::WaterCloset
        );
        assert!(FixtureKind::from_str_flexible("jacuzzi").is_err());
    }
}
