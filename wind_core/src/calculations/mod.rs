//! # Wind Pressure Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Results` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Results, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`zone_pressure`] - Corner, perimeter, and field zone pressures
//!
//! Supporting stages:
//!
//! - [`net_pressure`] - External/internal pressure combination
//! - [`aggregate`] - Controlling zone, affected areas, notes

pub mod aggregate;
pub mod net_pressure;
pub mod zone_pressure;

// Re-export commonly used types
pub use aggregate::AffectedArea;
pub use net_pressure::{InternalPressure, InternalPressureMode, PressureBounds};
pub use zone_pressure::{
    calculate as compute_zone_pressures, CalculationSummary, EnclosureSource,
    VelocityPressureSource, ZoneCalculationResults, ZonePressureInput,
};
