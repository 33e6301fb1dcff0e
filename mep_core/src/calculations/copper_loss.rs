//! # Feeder Copper Loss Calculation
//!
//! Conductor (I²R) loss for a three-phase feeder: one common trunk segment
//! plus any number of branch segments, with a diversity factor applied to
//! the branches. The total is checked against a loss allowance expressed as
//! a percentage of the power the trunk transmits.
//!
//! ## Assumptions
//!
//! - Balanced three-phase circuits (loss = 3 × I² × R per segment)
//! - Copper conductors at nearest standard size; resistance corrected for
//!   each segment's own loading
//! - Branch currents are derated by the shared diversity factor before
//!   squaring
//!
//! ## Example
//!
//! ```rust
//! use mep_core::calculations::copper_loss::{CopperLossInput, Segment, FeederClass, calculate};
//! use mep_core::tables::cable::Insulation;
//!
//! let input = CopperLossInput {
//!     label: "SMDB-2".to_string(),
//!     trunk: Segment { label: "Riser".to_string(), design_current_a: 100.0, csa_mm2: 35.0, length_m: 50.0 },
//!     branches: vec![
//!         Segment { label: "L1".to_string(), design_current_a: 63.0, csa_mm2: 16.0, length_m: 20.0 },
//!         Segment { label: "L2".to_string(), design_current_a: 63.0, csa_mm2: 16.0, length_m: 35.0 },
//!     ],
//!     insulation: Insulation::Xlpe,
//!     ambient_temp_c: 30.0,
//!     feeder_class: FeederClass::SubMain,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Total loss: {:.0} W ({:.2} %)", result.total_loss_w, result.loss_percent);
//! ```

use serde::{Deserialize, Serialize};

use crate::compliance::Compliance;
use crate::errors::{CalcError, CalcResult};
use crate::formulas::electrical::{
    conductor_loss_three_phase_w, diversity_factor, percent_of, temperature_correction_factor,
};
use crate::tables::cable::{nearest_conductor, Insulation};
use crate::trace::CalcTrace;

/// Feeder class, fixing the loss allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FeederClass {
    /// Main intake to distribution board: 1.5 % of transmitted power
    MainsFeeder,
    /// Sub-main between boards: 2.5 %
    #[default]
    SubMain,
    /// Final circuit: 4 %
    FinalCircuit,
}

impl FeederClass {
    /// All feeder classes for UI selection
    pub const ALL: [FeederClass; 3] = [
        FeederClass::MainsFeeder,
        FeederClass::SubMain,
        FeederClass::FinalCircuit,
    ];

    /// Maximum conductor loss as a percentage of transmitted power
    pub fn limit_percent(&self) -> f64 {
        match self {
            FeederClass::MainsFeeder => 1.5,
            FeederClass::SubMain => 2.5,
            FeederClass::FinalCircuit => 4.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FeederClass::MainsFeeder => "Mains feeder",
            FeederClass::SubMain => "Sub-main",
            FeederClass::FinalCircuit => "Final circuit",
        }
    }
}

impl std::fmt::Display for FeederClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One cable segment (trunk or branch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Segment label (e.g., "Riser", "L1")
    pub label: String,

    /// Design current for the segment (A)
    pub design_current_a: f64,

    /// Requested conductor cross-section (mm²); resolves to nearest standard
    pub csa_mm2: f64,

    /// Segment route length (m)
    pub length_m: f64,
}

impl Segment {
    fn validate(&self, field_prefix: &str, allow_zero_current: bool) -> CalcResult<()> {
        if self.design_current_a < 0.0 || (!allow_zero_current && self.design_current_a == 0.0) {
            return Err(CalcError::invalid_input(
                format!("{field_prefix}.design_current_a"),
                self.design_current_a.to_string(),
                if allow_zero_current {
                    "Branch current must not be negative"
                } else {
                    "Trunk current must be positive"
                },
            ));
        }
        if self.csa_mm2 <= 0.0 {
            return Err(CalcError::invalid_input(
                format!("{field_prefix}.csa_mm2"),
                self.csa_mm2.to_string(),
                "Cross-sectional area must be positive",
            ));
        }
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                format!("{field_prefix}.length_m"),
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        Ok(())
    }
}

/// Input parameters for a feeder loss check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "SMDB-2",
///   "trunk": { "label": "Riser", "design_current_a": 100.0, "csa_mm2": 35.0, "length_m": 50.0 },
///   "branches": [
///     { "label": "L1", "design_current_a": 63.0, "csa_mm2": 16.0, "length_m": 20.0 }
///   ],
///   "insulation": "Xlpe",
///   "ambient_temp_c": 30.0,
///   "feeder_class": "SubMain"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopperLossInput {
    /// User label for this feeder
    pub label: String,

    /// Common (shared) segment
    pub trunk: Segment,

    /// Branch segments fed from the trunk (may be empty)
    pub branches: Vec<Segment>,

    /// Conductor insulation system (all segments)
    pub insulation: Insulation,

    /// Ambient temperature (°C)
    pub ambient_temp_c: f64,

    /// Feeder class, selecting the loss allowance
    pub feeder_class: FeederClass,
}

impl CopperLossInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.trunk.validate("trunk", false)?;
        for (i, branch) in self.branches.iter().enumerate() {
            branch.validate(&format!("branches[{i}]"), true)?;
        }
        if self.ambient_temp_c >= self.insulation.max_operating_temp_c() {
            return Err(CalcError::invalid_input(
                "ambient_temp_c",
                self.ambient_temp_c.to_string(),
                "Ambient temperature must be below the conductor operating limit",
            ));
        }
        Ok(())
    }

    /// Sum of branch design currents (A), before diversity
    pub fn branch_demand_a(&self) -> f64 {
        self.branches.iter().map(|b| b.design_current_a).sum()
    }
}

/// Loss breakdown for one segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentLoss {
    /// Segment label
    pub label: String,

    /// Current used for the loss (A); branch currents include diversity
    pub effective_current_a: f64,

    /// Standard conductor size used (mm²)
    pub resolved_csa_mm2: f64,

    /// Temperature-corrected resistance (mΩ/m)
    pub resistance_mohm_per_m: f64,

    /// Segment loss (W)
    pub loss_w: f64,
}

/// Results from a feeder loss check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopperLossResult {
    /// Diversity factor applied to branch currents, in [0, 1]
    pub diversity_factor: f64,

    /// Per-segment breakdown, trunk first
    pub segments: Vec<SegmentLoss>,

    /// Total conductor loss (W)
    pub total_loss_w: f64,

    /// Power the trunk transmits (W), √3 × 400 V × I_trunk
    pub transmitted_power_w: f64,

    /// Loss as a percentage of transmitted power
    pub loss_percent: f64,

    /// Check against the feeder-class allowance
    pub compliance: Compliance,

    /// Ordered calculation steps for audit display
    pub trace: CalcTrace,
}

impl CopperLossResult {
    /// Check if the loss is within the allowance
    pub fn passes(&self) -> bool {
        self.compliance.passes
    }
}

/// Loss for one segment at a given effective current.
fn segment_loss(
    segment: &Segment,
    effective_current_a: f64,
    insulation: Insulation,
    ambient_temp_c: f64,
    trace: &mut CalcTrace,
) -> SegmentLoss {
    let conductor = nearest_conductor(segment.csa_mm2);
    let max_temp = insulation.max_operating_temp_c();
    let rated = conductor.rating_a(insulation);

    let base = conductor.resistance_at_max_temp(insulation).0;
    let ct = temperature_correction_factor(effective_current_a, rated, ambient_temp_c, max_temp);
    let r_eff = base * ct;

    let loss = conductor_loss_three_phase_w(effective_current_a, r_eff, segment.length_m);
    trace.step(
        format!("Loss in '{}'", segment.label),
        format!(
            "3 × {effective_current_a:.1}² × {r_eff:.4} × {} / 1000",
            segment.length_m
        ),
        loss,
        "W",
    );

    SegmentLoss {
        label: segment.label.clone(),
        effective_current_a,
        resolved_csa_mm2: conductor.csa_mm2,
        resistance_mohm_per_m: r_eff,
        loss_w: loss,
    }
}

/// Calculate feeder copper loss and check it against the class allowance.
///
/// The trunk is evaluated at its own design current; each branch at its
/// design current times the shared diversity factor.
pub fn calculate(input: &CopperLossInput) -> CalcResult<CopperLossResult> {
    input.validate()?;

    let mut trace = CalcTrace::new();

    // Diversity: branches cannot collectively exceed what the trunk carries
    let branch_demand = input.branch_demand_a();
    let diversity = diversity_factor(input.trunk.design_current_a, branch_demand);
    trace.step(
        "Diversity factor",
        format!(
            "min(1, {} / {})",
            input.trunk.design_current_a,
            if branch_demand > 0.0 { branch_demand.to_string() } else { "0 (no branches)".to_string() }
        ),
        diversity,
        "",
    );

    let mut segments = Vec::with_capacity(1 + input.branches.len());
    segments.push(segment_loss(
        &input.trunk,
        input.trunk.design_current_a,
        input.insulation,
        input.ambient_temp_c,
        &mut trace,
    ));
    for branch in &input.branches {
        segments.push(segment_loss(
            branch,
            branch.design_current_a * diversity,
            input.insulation,
            input.ambient_temp_c,
            &mut trace,
        ));
    }

    let total: f64 = segments.iter().map(|s| s.loss_w).sum();
    trace.step("Total conductor loss", "Σ segment losses", total, "W");

    // Allowance is relative to the power the trunk delivers
    let transmitted = 3.0_f64.sqrt() * 400.0 * input.trunk.design_current_a;
    let loss_percent = percent_of(total, transmitted);
    trace.step(
        "Loss fraction",
        format!("{total:.0} / {transmitted:.0} × 100"),
        loss_percent,
        "%",
    );

    let compliance = Compliance::at_most(
        "Conductor loss",
        loss_percent,
        input.feeder_class.limit_percent(),
        "%",
    );

    Ok(CopperLossResult {
        diversity_factor: diversity,
        segments,
        total_loss_w: total,
        transmitted_power_w: transmitted,
        loss_percent,
        compliance,
        trace,
    })
}
