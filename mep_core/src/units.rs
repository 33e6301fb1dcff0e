//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Building services calculations use a consistent SI unit set
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! The suite uses SI units internally, matching IEC/CIBSE reference tables:
//! - Length: meters (m), millimeters (mm)
//! - Electrical: amps (A), volts (V), watts (W), kilowatts (kW)
//! - Resistance per length: milliohms per meter (mΩ/m)
//! - Acoustics: decibels (dB), seconds (s)
//! - Lighting: lumens (lm), lux (lx)
//! - Geometry: square meters (m²), cubic meters (m³), degrees (°)
//!
//! ## Example
//!
//! ```rust
//! use mep_core::units::{Meters, Millimeters, Watts};
//!
//! let run = Meters(45.0);
//! let run_mm: Millimeters = run.into();
//! assert_eq!(run_mm.0, 45000.0);
//!
//! let load = Watts(1500.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Area / Volume Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Conductor cross-sectional area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

// ============================================================================
// Electrical Units
// ============================================================================

/// Current in amps
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amps(pub f64);

/// Potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1000.0)
    }
}

impl From<Kilowatts> for Watts {
    fn from(kw: Kilowatts) -> Self {
        Watts(kw.0 * 1000.0)
    }
}

/// Conductor resistance per unit length in milliohms per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilliohmsPerMeter(pub f64);

// ============================================================================
// Acoustic Units
// ============================================================================

/// Sound pressure level (or level difference) in decibels
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decibels(pub f64);

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

/// Equivalent absorption area in metric sabins (m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sabins(pub f64);

// ============================================================================
// Lighting Units
// ============================================================================

/// Luminous flux in lumens
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lumens(pub f64);

/// Illuminance in lux (lumens per square meter)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lux(pub f64);

// ============================================================================
// Angle / Temperature Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians for trigonometric functions
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(Amps);
impl_arithmetic!(Volts);
impl_arithmetic!(Watts);
impl_arithmetic!(Kilowatts);
impl_arithmetic!(MilliohmsPerMeter);
impl_arithmetic!(Decibels);
impl_arithmetic!(Seconds);
impl_arithmetic!(Sabins);
impl_arithmetic!(Lumens);
impl_arithmetic!(Lux);
impl_arithmetic!(Degrees);
impl_arithmetic!(Celsius);
