//! # External Pressure Coefficients (GCp)
//!
//! Maps a zone kind, effective wind area, and calculation method to an
//! external pressure coefficient by log-linear interpolation between
//! tabulated control points.
//!
//! ```text
//! GCp(A) = GCp₀ + (GCp₁ − GCp₀) × (log A − log A₀) / (log A₁ − log A₀)
//! ```
//!
//! Areas outside a table clamp to the nearest boundary value. Magnitudes are
//! ordered corner ≥ perimeter ≥ field at every tabulated area.
//!
//! Zone 1' kinds have no tables of their own: an enhanced coefficient is the
//! baseline value scaled by the Zone 1' pressure increase, so the reported
//! percentage is exactly the one applied.
//!
//! ## Example
//!
//! ```rust
//! use wind_core::coefficients::{lookup_gcp, CalculationMethod};
//! use wind_core::zones::ZoneKind;
//!
//! let exact = lookup_gcp(ZoneKind::Corner, 10.0, CalculationMethod::ComponentCladding);
//! assert_eq!(exact.gcp, -3.2);
//! assert!(!exact.interpolated);
//!
//! let between = lookup_gcp(ZoneKind::Corner, 50.0, CalculationMethod::ComponentCladding);
//! assert!(between.interpolated);
//! assert!(between.gcp > -3.2 && between.gcp < -2.3);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::asce_ref;
use crate::zones::ZoneKind;

/// Wind load calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Main wind-force-resisting system
    MainForce,
    /// Components and cladding
    #[default]
    ComponentCladding,
}

impl CalculationMethod {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationMethod::MainForce => "MWFRS",
            CalculationMethod::ComponentCladding => "Components & Cladding",
        }
    }

    /// Figure the coefficient tables come from
    pub fn source_reference(&self) -> &'static str {
        match self {
            CalculationMethod::MainForce => asce_ref::MWFRS_GCP,
            CalculationMethod::ComponentCladding => asce_ref::CC_GCP,
        }
    }
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// (effective wind area in sq ft, GCp)
pub type ControlPoint = (f64, f64);

const CC_FIELD: &[ControlPoint] = &[(10.0, -1.7), (100.0, -1.3), (500.0, -1.0)];
const CC_PERIMETER: &[ControlPoint] = &[(10.0, -2.3), (100.0, -1.8), (500.0, -1.4)];
const CC_CORNER: &[ControlPoint] = &[(10.0, -3.2), (100.0, -2.3), (500.0, -1.5)];

const MW_FIELD: &[ControlPoint] = &[(10.0, -0.80), (100.0, -0.69), (1000.0, -0.60)];
const MW_PERIMETER: &[ControlPoint] = &[(10.0, -1.10), (100.0, -0.95), (1000.0, -0.80)];
const MW_CORNER: &[ControlPoint] = &[(10.0, -1.40), (100.0, -1.07), (1000.0, -0.90)];

/// Control points for a zone kind and method, ordered by increasing area.
///
/// Zone 1' kinds share the table of their baseline kind.
pub fn control_points(kind: ZoneKind, method: CalculationMethod) -> &'static [ControlPoint] {
    match (method, kind.baseline()) {
        (CalculationMethod::ComponentCladding, ZoneKind::Perimeter) => CC_PERIMETER,
        (CalculationMethod::ComponentCladding, ZoneKind::Corner) => CC_CORNER,
        (CalculationMethod::ComponentCladding, _) => CC_FIELD,
        (CalculationMethod::MainForce, ZoneKind::Perimeter) => MW_PERIMETER,
        (CalculationMethod::MainForce, ZoneKind::Corner) => MW_CORNER,
        (CalculationMethod::MainForce, _) => MW_FIELD,
    }
}

/// Result of a table lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientLookup {
    pub gcp: f64,
    /// False only on an exact control-point hit
    pub interpolated: bool,
    /// True when the area fell outside the table and was clamped
    pub clamped: bool,
    pub source: String,
}

/// Look up GCp for a zone kind at an effective wind area.
///
/// Non-finite or non-positive areas clamp to the smallest tabulated area.
pub fn lookup_gcp(kind: ZoneKind, area_sqft: f64, method: CalculationMethod) -> CoefficientLookup {
    let points = control_points(kind, method);
    let source = method.source_reference().to_string();
    let (first_area, first_gcp) = points[0];
    let (last_area, last_gcp) = points[points.len() - 1];

    if !area_sqft.is_finite() || area_sqft < first_area {
        return CoefficientLookup { gcp: first_gcp, interpolated: true, clamped: true, source };
    }
    if area_sqft > last_area {
        return CoefficientLookup { gcp: last_gcp, interpolated: true, clamped: true, source };
    }

    if let Some(&(_, gcp)) = points.iter().find(|(a, _)| *a == area_sqft) {
        return CoefficientLookup { gcp, interpolated: false, clamped: false, source };
    }

    let gcp = points
        .windows(2)
        .find(|pair| area_sqft > pair[0].0 && area_sqft < pair[1].0)
        .map(|pair| {
            let (a0, g0) = pair[0];
            let (a1, g1) = pair[1];
            let t = (area_sqft.log10() - a0.log10()) / (a1.log10() - a0.log10());
            g0 + (g1 - g0) * t
        })
        .unwrap_or(last_gcp);

    CoefficientLookup { gcp, interpolated: true, clamped: false, source }
}

/// Plan aspect and height ratios used to scale tabulated coefficients.
///
/// There is intentionally no `Default`: baseline lookups must name the
/// reference shape they assume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeRatios {
    pub aspect_ratio: f64,
    pub height_ratio: f64,
}

impl ShapeRatios {
    /// A square, squat building: amplification of exactly 1.0
    pub const TYPICAL_COMPACT: ShapeRatios = ShapeRatios {
        aspect_ratio: 1.0,
        height_ratio: 0.5,
    };

    pub fn new(aspect_ratio: f64, height_ratio: f64) -> Self {
        ShapeRatios { aspect_ratio, height_ratio }
    }

    /// Multiplier on tabulated GCp: 1 + min(0.25, 0.05(AR−1)⁺ + 0.10(HR−0.5)⁺)
    pub fn amplification(&self) -> f64 {
        let aspect_term = 0.05 * (self.aspect_ratio - 1.0).max(0.0);
        let height_term = 0.10 * (self.height_ratio - 0.5).max(0.0);
        let extra = (aspect_term + height_term).min(0.25);
        if extra.is_finite() {
            1.0 + extra
        } else {
            1.0
        }
    }
}

/// A zone's final coefficient with the lookup trail behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCoefficient {
    /// Tabulated GCp × amplification
    pub gcp: f64,
    pub tabulated_gcp: f64,
    pub amplification: f64,
    pub interpolated: bool,
    pub clamped: bool,
    pub source: String,
}

fn scaled(kind: ZoneKind, area_sqft: f64, method: CalculationMethod, amplification: f64) -> ZoneCoefficient {
    let lookup = lookup_gcp(kind, area_sqft, method);
    let gcp = lookup.gcp * amplification;

    debug!(
        target: "wind_core",
        ?kind, area_sqft, tabulated = lookup.gcp, amplification, gcp,
        "zone coefficient"
    );

    ZoneCoefficient {
        gcp,
        tabulated_gcp: lookup.gcp,
        amplification,
        interpolated: lookup.interpolated,
        clamped: lookup.clamped,
        source: lookup.source,
    }
}

/// Baseline coefficient for a zone, scaled by the shape ratios it is keyed to.
pub fn zone_coefficient(
    kind: ZoneKind,
    area_sqft: f64,
    method: CalculationMethod,
    ratios: ShapeRatios,
) -> ZoneCoefficient {
    scaled(kind, area_sqft, method, ratios.amplification())
}

/// Zone 1' coefficient: the baseline value raised by `increase_pct` percent.
pub fn enhanced_coefficient(
    kind: ZoneKind,
    area_sqft: f64,
    method: CalculationMethod,
    increase_pct: f64,
) -> ZoneCoefficient {
    let increase = if increase_pct.is_finite() { increase_pct.max(0.0) } else { 0.0 };
    scaled(kind, area_sqft, method, 1.0 + increase / 100.0)
}
