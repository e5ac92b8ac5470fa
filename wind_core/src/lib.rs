//! # wind_core - Low-Rise Wind Zone Pressure Engine
//!
//! `wind_core` computes ASCE 7 wind design pressures on the corner, perimeter,
//! and field zones of rectangular low-rise buildings. All inputs and outputs
//! are JSON-serializable, making it easy to drive from an orchestration layer,
//! an RPC boundary, or an AI assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Deterministic**: Identical inputs give bit-identical outputs
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Warnings, not failures**: Only invalid geometry aborts a calculation
//!
//! ## Quick Start
//!
//! ```rust
//! use wind_core::calculations::{compute_zone_pressures, ZonePressureInput};
//! use wind_core::exposure::ExposureCategory;
//!
//! let input = ZonePressureInput::new("Shop", 100.0, 100.0, 30.0, ExposureCategory::B, 115.0);
//! let result = compute_zone_pressures(&input).unwrap();
//!
//! assert!(!result.zone1_prime_required);
//! assert_eq!(result.zone("field").unwrap().area_sqft, 6400.0);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The zone pressure calculation and its final stages
//! - [`exposure`] - Kz and velocity pressure
//! - [`enclosure`] - Enclosure classification and GCpi
//! - [`geometry`] - Aspect/height ratios and shape classification
//! - [`zone1_prime`] - Zone 1' trigger analysis
//! - [`coefficients`] - Effective-area GCp interpolation
//! - [`zones`] - Corner/perimeter/field zone layout
//! - [`settings`] - Request-level options
//! - [`errors`] - Structured error and warning types

pub mod asce_ref;
pub mod calculations;
pub mod coefficients;
pub mod enclosure;
pub mod errors;
pub mod exposure;
pub mod geometry;
pub mod settings;
pub mod zone1_prime;
pub mod zones;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_zone_pressures, ZoneCalculationResults, ZonePressureInput};
pub use errors::{CalcError, CalcResult, CalcWarning, WarningKind};
pub use settings::WindSettings;
