//! # Velocity Pressure Exposure Coefficient
//!
//! Derives Kz from mean roof height and terrain exposure, and the velocity
//! pressure qz built on it.
//!
//! ```text
//! Kz = 2.01 × (z / zg)^(2/α)        15 ft ≤ z ≤ zg
//! qz = 0.00256 × Kz × Kzt × Kd × Ke × V²   (psf, V in mph)
//! ```
//!
//! | Exposure | α    | zg (ft) |
//! |----------|------|---------|
//! | B        | 7.0  | 1200    |
//! | C        | 9.5  | 900     |
//! | D        | 11.5 | 700     |
//!
//! ## Example
//!
//! ```rust
//! use wind_core::exposure::{ExposureCategory, exposure_coefficient};
//!
//! let kz = exposure_coefficient(20.0, ExposureCategory::C);
//! assert!((kz.kz - 0.90).abs() < 0.01);
//! assert!(kz.warnings.is_empty());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::asce_ref;
use crate::errors::{CalcError, CalcWarning, WarningKind};

/// Heights below this use the minimum value for Kz (ft)
pub const MIN_KZ_HEIGHT_FT: f64 = 15.0;

/// Mean roof height ceiling of the simplified low-rise procedure (ft)
pub const SIMPLIFIED_HEIGHT_LIMIT_FT: f64 = 60.0;

/// Velocity pressure constant for V in mph, qz in psf
const VELOCITY_PRESSURE_CONSTANT: f64 = 0.00256;

/// Surface roughness / terrain exposure category per ASCE 7 Section 26.7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExposureCategory {
    /// Urban and suburban areas, wooded areas
    B,
    /// Open terrain with scattered obstructions
    C,
    /// Flat, unobstructed areas and water surfaces
    D,
}

impl ExposureCategory {
    /// Power-law exponent α
    pub fn alpha(&self) -> f64 {
        match self {
            ExposureCategory::B => 7.0,
            ExposureCategory::C => 9.5,
            ExposureCategory::D => 11.5,
        }
    }

    /// Gradient height zg in feet
    pub fn gradient_height_ft(&self) -> f64 {
        match self {
            ExposureCategory::B => 1200.0,
            ExposureCategory::C => 900.0,
            ExposureCategory::D => 700.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ExposureCategory::B => "Exposure B (suburban)",
            ExposureCategory::C => "Exposure C (open terrain)",
            ExposureCategory::D => "Exposure D (flat, unobstructed)",
        }
    }
}

impl std::fmt::Display for ExposureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ExposureCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(ExposureCategory::B),
            "C" => Ok(ExposureCategory::C),
            "D" => Ok(ExposureCategory::D),
            _ => Err(CalcError::invalid_geometry(
                "exposure_category",
                s,
                "Exposure category must be B, C, or D",
            )),
        }
    }
}

/// Kz with the height actually used and any advisory warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureCoefficient {
    /// Velocity pressure exposure coefficient
    pub kz: f64,
    /// Height used in the power law after clamping (ft)
    pub effective_height_ft: f64,
    pub exposure: ExposureCategory,
    pub warnings: Vec<CalcWarning>,
}

/// Compute Kz for a mean roof height and exposure category.
///
/// Heights below 15 ft use 15 ft; heights above zg use zg. Heights above the
/// 60 ft simplified ceiling still compute but carry a warning.
pub fn exposure_coefficient(height_ft: f64, exposure: ExposureCategory) -> ExposureCoefficient {
    let zg = exposure.gradient_height_ft();
    let z = height_ft.max(MIN_KZ_HEIGHT_FT).min(zg);
    let kz = 2.01 * (z / zg).powf(2.0 / exposure.alpha());

    let mut warnings = Vec::new();
    if height_ft > SIMPLIFIED_HEIGHT_LIMIT_FT {
        let message = format!(
            "Mean roof height {:.1} ft exceeds the {:.0} ft low-rise limit ({}); \
             specialized analysis may be warranted",
            height_ft,
            SIMPLIFIED_HEIGHT_LIMIT_FT,
            asce_ref::LOW_RISE
        );
        warn!(target: "wind_core", height_ft, "{}", message);
        warnings.push(CalcWarning::new(WarningKind::SimplifiedMethodExceeded, message));
    }

    debug!(target: "wind_core", height_ft, z, kz, ?exposure, "exposure coefficient");

    ExposureCoefficient {
        kz,
        effective_height_ft: z,
        exposure,
        warnings,
    }
}

/// Inputs for deriving qz from a basic wind speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityPressureInputs {
    /// Basic wind speed V (mph, 3-second gust)
    pub wind_speed_mph: f64,

    /// Topographic factor Kzt
    pub topographic_factor: f64,

    /// Wind directionality factor Kd (0.85 for buildings)
    pub directionality_factor: f64,

    /// Ground elevation factor Ke (1.0 is always permitted)
    #[serde(default = "default_ground_elevation_factor")]
    pub ground_elevation_factor: f64,
}

fn default_ground_elevation_factor() -> f64 {
    1.0
}

/// Velocity pressure with the Kz that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityPressure {
    /// qz in psf
    pub qz_psf: f64,
    pub kz: f64,
    pub warnings: Vec<CalcWarning>,
}

/// Compute qz = 0.00256 Kz Kzt Kd Ke V².
///
/// Non-positive or non-finite factors never abort the calculation: each one
/// is replaced (factors by 1.0, wind speed by 0) with a warning. Warnings
/// from the Kz derivation stay on the [`ExposureCoefficient`].
pub fn velocity_pressure(kz: &ExposureCoefficient, inputs: &VelocityPressureInputs) -> VelocityPressure {
    let mut warnings = Vec::new();

    let wind_speed = if inputs.wind_speed_mph.is_finite() && inputs.wind_speed_mph > 0.0 {
        inputs.wind_speed_mph
    } else {
        warnings.push(CalcWarning::new(
            WarningKind::InputAdjusted,
            format!(
                "Wind speed {} mph is not positive; velocity pressure taken as zero",
                inputs.wind_speed_mph
            ),
        ));
        0.0
    };
    let kzt = usable_factor("topographic factor Kzt", inputs.topographic_factor, &mut warnings);
    let kd = usable_factor("directionality factor Kd", inputs.directionality_factor, &mut warnings);
    let ke = usable_factor("ground elevation factor Ke", inputs.ground_elevation_factor, &mut warnings);

    let qz_psf = VELOCITY_PRESSURE_CONSTANT * kz.kz * kzt * kd * ke * wind_speed.powi(2);
    debug!(target: "wind_core", qz_psf, wind_speed, kzt, kd, ke, "velocity pressure ({})", asce_ref::VELOCITY_PRESSURE);

    VelocityPressure {
        qz_psf,
        kz: kz.kz,
        warnings,
    }
}

fn usable_factor(name: &str, value: f64, warnings: &mut Vec<CalcWarning>) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        let message = format!("{} = {} is not positive; using 1.0", name, value);
        warn!(target: "wind_core", "{}", message);
        warnings.push(CalcWarning::new(WarningKind::InputAdjusted, message));
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kz_table_values() {
        // Tabulated Kz at 15 ft: B 0.57, C 0.85, D 1.03
        assert!((exposure_coefficient(15.0, ExposureCategory::B).kz - 0.57).abs() < 0.01);
        assert!((exposure_coefficient(15.0, ExposureCategory::C).kz - 0.85).abs() < 0.01);
        assert!((exposure_coefficient(15.0, ExposureCategory::D).kz - 1.03).abs() < 0.01);
        // B at 30 ft: 0.70
        assert!((exposure_coefficient(30.0, ExposureCategory::B).kz - 0.70).abs() < 0.01);
    }

    #[test]
    fn test_minimum_height_clamp() {
        let low = exposure_coefficient(8.0, ExposureCategory::C);
        let min = exposure_coefficient(15.0, ExposureCategory::C);
        assert_eq!(low.kz, min.kz);
        assert_eq!(low.effective_height_ft, MIN_KZ_HEIGHT_FT);
    }

    #[test]
    fn test_kz_increases_with_height_and_exposure() {
        let b = exposure_coefficient(40.0, ExposureCategory::B).kz;
        let c = exposure_coefficient(40.0, ExposureCategory::C).kz;
        let d = exposure_coefficient(40.0, ExposureCategory::D).kz;
        assert!(b < c && c < d);
        assert!(exposure_coefficient(50.0, ExposureCategory::C).kz > c);
    }

    #[test]
    fn test_tall_building_warns_but_computes() {
        let kz = exposure_coefficient(75.0, ExposureCategory::C);
        assert!(kz.kz > 1.0);
        assert_eq!(kz.warnings.len(), 1);
        assert_eq!(kz.warnings[0].kind, WarningKind::SimplifiedMethodExceeded);
    }

    #[test]
    fn test_velocity_pressure() {
        let inputs = VelocityPressureInputs {
            wind_speed_mph: 115.0,
            topographic_factor: 1.0,
            directionality_factor: 0.85,
            ground_elevation_factor: 1.0,
        };
        let kz = exposure_coefficient(15.0, ExposureCategory::C);
        let qz = velocity_pressure(&kz, &inputs);
        // 0.00256 × 0.849 × 0.85 × 115² ≈ 24.4 psf
        assert!((qz.qz_psf - 24.4).abs() < 0.2);
        assert!(qz.warnings.is_empty());
    }

    #[test]
    fn test_bad_factor_replaced_with_warning() {
        let inputs = VelocityPressureInputs {
            wind_speed_mph: 100.0,
            topographic_factor: 0.0,
            directionality_factor: 0.85,
            ground_elevation_factor: 1.0,
        };
        let qz = velocity_pressure(&exposure_coefficient(20.0, ExposureCategory::B), &inputs);
        assert!(qz.qz_psf > 0.0);
        assert_eq!(qz.warnings.len(), 1);
        assert_eq!(qz.warnings[0].kind, WarningKind::InputAdjusted);
    }

    #[test]
    fn test_exposure_parsing() {
        assert_eq!("c".parse::<ExposureCategory>().unwrap(), ExposureCategory::C);
        assert_eq!(" D ".parse::<ExposureCategory>().unwrap(), ExposureCategory::D);
        let err = "A".parse::<ExposureCategory>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_ground_elevation_defaults_when_absent() {
        let json = r#"{"wind_speed_mph":120.0,"topographic_factor":1.0,"directionality_factor":0.85}"#;
        let inputs: VelocityPressureInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.ground_elevation_factor, 1.0);
    }
}
