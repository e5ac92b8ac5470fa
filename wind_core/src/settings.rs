//! # Calculation Settings
//!
//! Request-level options that are not building data. Everything here has a
//! sensible default except the reference shape used for baseline
//! coefficients, which lives on the request itself and must be supplied.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "code_edition": "ASCE 7-22",
//!   "internal_pressure_mode": "PositiveOnly"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::asce_ref;
use crate::calculations::net_pressure::InternalPressureMode;

/// Options applied to a single zone pressure calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSettings {
    /// Code edition label echoed in notes
    #[serde(default = "default_code_edition")]
    pub code_edition: String,

    /// How GCpi is combined with external pressure
    #[serde(default)]
    pub internal_pressure_mode: InternalPressureMode,
}

fn default_code_edition() -> String {
    asce_ref::EDITION.to_string()
}

impl Default for WindSettings {
    fn default() -> Self {
        WindSettings {
            code_edition: default_code_edition(),
            internal_pressure_mode: InternalPressureMode::default(),
        }
    }
}

impl WindSettings {
    /// Builder: select the internal pressure combination
    pub fn with_internal_pressure_mode(mut self, mode: InternalPressureMode) -> Self {
        self.internal_pressure_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WindSettings::default();
        assert_eq!(settings.code_edition, "ASCE 7-22");
        assert_eq!(settings.internal_pressure_mode, InternalPressureMode::PositiveOnly);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: WindSettings = serde_json::from_str(r#"{"internal_pressure_mode":"Governing"}"#).unwrap();
        assert_eq!(settings.code_edition, "ASCE 7-22");
        assert_eq!(settings.internal_pressure_mode, InternalPressureMode::Governing);

        let empty: WindSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, WindSettings::default());
    }
}
