//! # Zone Pressure Calculation
//!
//! Computes corner, perimeter, and field design pressures for a rectangular
//! low-rise building per ASCE 7.
//!
//! ## Assumptions
//!
//! - Rectangular footprint, flat or low-slope roof
//! - Design wind normal to the long face for enclosure classification
//! - Velocity pressure evaluated at mean roof height
//! - Only non-positive geometry aborts; every other irregularity becomes a
//!   warning inside a valid result
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use wind_core::calculations::zone_pressure::{calculate, ZonePressureInput};
//! use wind_core::exposure::ExposureCategory;
//!
//! let input = ZonePressureInput::new("Warehouse", 200.0, 50.0, 20.0, ExposureCategory::C, 115.0);
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.zone1_prime_required);
//! println!("Max pressure: {:.1} psf at {}", result.max_pressure_psf, result.controlling_zone);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coefficients::{CalculationMethod, ShapeRatios};
use crate::enclosure::{self, EnclosureClassification, EnclosureInput};
use crate::errors::{CalcResult, CalcWarning, WarningKind};
use crate::exposure::{self, ExposureCategory, VelocityPressureInputs};
use crate::geometry::{self, BuildingGeometry};
use crate::settings::WindSettings;
use crate::zone1_prime::{self, Zone1PrimeAnalysis};
use crate::zones::{self, EffectiveAreas, GoverningDimensions, PressureZone};

use super::aggregate::{self, AffectedArea, Stages};
use super::net_pressure::{self, InternalPressure, InternalPressureMode, PressureBounds};

/// Where the velocity pressure comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VelocityPressureSource {
    /// Derive qz from basic wind speed and factors
    FromWindSpeed(VelocityPressureInputs),
    /// Caller already computed qz (psf)
    Precomputed { qz_psf: f64 },
}

/// Where the enclosure classification comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EnclosureSource {
    /// Classify from an opening inventory
    Openings(EnclosureInput),
    /// Use a classification made elsewhere
    Precomputed(EnclosureClassification),
}

/// Input parameters for a zone pressure calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Warehouse",
///   "length_ft": 200.0,
///   "width_ft": 50.0,
///   "height_ft": 20.0,
///   "exposure": "C",
///   "velocity_pressure": {
///     "type": "FromWindSpeed",
///     "wind_speed_mph": 115.0,
///     "topographic_factor": 1.0,
///     "directionality_factor": 0.85
///   },
///   "method": "ComponentCladding",
///   "enclosure": { "type": "Openings", "openings": [] },
///   "effective_wind_area_sqft": 10.0,
///   "reference_ratios": { "aspect_ratio": 1.0, "height_ratio": 0.5 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePressureInput {
    /// User label (e.g., "Building A roof")
    #[serde(default)]
    pub label: String,

    /// Plan length along x (ft)
    pub length_ft: f64,

    /// Plan width along y (ft)
    pub width_ft: f64,

    /// Mean roof height (ft)
    pub height_ft: f64,

    pub exposure: ExposureCategory,

    pub velocity_pressure: VelocityPressureSource,

    pub method: CalculationMethod,

    pub enclosure: EnclosureSource,

    /// Effective wind area used when a zone has no override (sq ft)
    pub effective_wind_area_sqft: f64,

    /// Per-zone effective wind areas keyed by zone id
    #[serde(default)]
    pub zone_effective_areas: BTreeMap<String, f64>,

    /// Shape that baseline (non-enhanced) coefficients are keyed to
    pub reference_ratios: ShapeRatios,

    #[serde(default)]
    pub settings: WindSettings,
}

impl ZonePressureInput {
    /// Typical enclosed building, C&C, Kzt = 1.0, Kd = 0.85, 10 sq ft
    /// effective area, compact reference ratios.
    pub fn new(
        label: impl Into<String>,
        length_ft: f64,
        width_ft: f64,
        height_ft: f64,
        exposure: ExposureCategory,
        wind_speed_mph: f64,
    ) -> Self {
        ZonePressureInput {
            label: label.into(),
            length_ft,
            width_ft,
            height_ft,
            exposure,
            velocity_pressure: VelocityPressureSource::FromWindSpeed(VelocityPressureInputs {
                wind_speed_mph,
                topographic_factor: 1.0,
                directionality_factor: 0.85,
                ground_elevation_factor: 1.0,
            }),
            method: CalculationMethod::ComponentCladding,
            enclosure: EnclosureSource::Openings(EnclosureInput::default()),
            effective_wind_area_sqft: 10.0,
            zone_effective_areas: BTreeMap::new(),
            reference_ratios: ShapeRatios::TYPICAL_COMPACT,
            settings: WindSettings::default(),
        }
    }

    /// Builder: set the calculation method
    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    /// Builder: set the enclosure source
    pub fn with_enclosure(mut self, enclosure: EnclosureSource) -> Self {
        self.enclosure = enclosure;
        self
    }

    /// Builder: set the settings
    pub fn with_settings(mut self, settings: WindSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Velocity pressure and internal pressure echoed with the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSummary {
    pub velocity_pressure_psf: f64,
    /// Kz, when qz was derived from wind speed
    pub kz: Option<f64>,
    pub internal_pressure: InternalPressure,
    pub internal_pressure_mode: InternalPressureMode,
}

/// Results from a zone pressure calculation.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "zone1_prime_required": true,
///   "max_pressure_psf": 45.3,
///   "controlling_zone": "corner_sw",
///   "affected_area": { "standard_sqft": 8950.0, "zone1_prime_sqft": 1050.0, "total_sqft": 10000.0 },
///   "calculations": { "velocity_pressure_psf": 24.3, "kz": 0.9, "internal_pressure": { ... } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCalculationResults {
    /// Zones in emission order: corners, perimeter strips, field
    pub zones: Vec<PressureZone>,
    pub zone1_prime_required: bool,
    pub zone1_prime_analysis: Zone1PrimeAnalysis,
    /// Largest net pressure magnitude over all zones (psf)
    pub max_pressure_psf: f64,
    /// Id of the first zone reaching `max_pressure_psf`
    pub controlling_zone: String,
    pub affected_area: AffectedArea,
    pub professional_notes: Vec<String>,
    pub calculations: CalculationSummary,
    /// Net pressure range of the controlling zone across GCpi cases
    pub pressure_bounds: PressureBounds,
    pub requires_special_analysis: bool,
    pub governing_dimensions: GoverningDimensions,
    pub geometry: BuildingGeometry,
    pub enclosure: EnclosureClassification,
    pub method: CalculationMethod,
    pub warnings: Vec<CalcWarning>,
    pub assumptions: Vec<String>,
}

impl ZoneCalculationResults {
    /// The controlling zone record
    pub fn controlling(&self) -> Option<&PressureZone> {
        self.zones.iter().find(|z| z.id == self.controlling_zone)
    }

    /// Look up a zone by id
    pub fn zone(&self, id: &str) -> Option<&PressureZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Plain-text zone table for operators.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Zone Pressures ({})\n\
             ================================================\n\
             qz = {:.2} psf    GCpi = {:+.2} / {:+.2}\n\
             a  = {:.2} ft     p = {:.2} ft\n\
             ------------------------------------------------\n",
            self.method.display_name(),
            self.calculations.velocity_pressure_psf,
            self.calculations.internal_pressure.gcpi_positive,
            self.calculations.internal_pressure.gcpi_negative,
            self.governing_dimensions.corner_ft,
            self.governing_dimensions.perimeter_ft,
        );
        for zone in &self.zones {
            out.push_str(&format!(
                "{:<12} {:<20} GCp {:>6.2}  {:>9.1} sq ft  {:>7.2} psf{}\n",
                zone.id,
                zone.zone_type.display_name(),
                zone.gcp,
                zone.area_sqft,
                zone.net_pressure_psf,
                if zone.id == self.controlling_zone { "  <- controls" } else { "" }
            ));
        }
        out.push_str(&format!(
            "------------------------------------------------\n\
             Max pressure = {:.2} psf ({})",
            self.max_pressure_psf, self.controlling_zone
        ));
        out
    }
}

/// Compute zone pressures for one building.
///
/// # Returns
///
/// * `Ok(ZoneCalculationResults)` - zones, pressures, notes, and warnings
/// * `Err(CalcError::InvalidGeometry)` - length, width, or height not positive
pub fn calculate(input: &ZonePressureInput) -> CalcResult<ZoneCalculationResults> {
    let geometry = geometry::analyze(input.length_ft, input.width_ft, input.height_ft)?;
    debug!(target: "wind_core", label = %input.label, "zone pressure calculation");

    let zone1_prime = zone1_prime::analyze(&geometry);

    let kz = exposure::exposure_coefficient(geometry.height_ft, input.exposure);
    let mut warnings = kz.warnings.clone();
    let mut assumptions = vec![
        "Rectangular footprint partitioned into corner, perimeter, and field zones".to_string(),
        "Design wind normal to the long face for enclosure classification".to_string(),
    ];

    let (qz_psf, echoed_kz) = match &input.velocity_pressure {
        VelocityPressureSource::FromWindSpeed(inputs) => {
            let qz = exposure::velocity_pressure(&kz, inputs);
            warnings.extend(qz.warnings);
            assumptions.push(format!(
                "Velocity pressure at mean roof height with Ke = {:.2}",
                inputs.ground_elevation_factor
            ));
            (qz.qz_psf, Some(qz.kz))
        }
        VelocityPressureSource::Precomputed { qz_psf } => {
            let qz = if qz_psf.is_finite() && *qz_psf >= 0.0 {
                *qz_psf
            } else {
                let message = format!("Supplied velocity pressure {} psf is invalid; using 0", qz_psf);
                warn!(target: "wind_core", "{}", message);
                warnings.push(CalcWarning::new(WarningKind::InputAdjusted, message));
                0.0
            };
            assumptions.push("Velocity pressure supplied by caller".to_string());
            (qz, None)
        }
    };

    let enclosure = match &input.enclosure {
        EnclosureSource::Openings(openings) => enclosure::classify(openings, &geometry),
        EnclosureSource::Precomputed(classification) => classification.clone(),
    };
    warnings.extend(enclosure.warnings.iter().cloned());

    if !(input.effective_wind_area_sqft.is_finite() && input.effective_wind_area_sqft > 0.0) {
        warnings.push(CalcWarning::new(
            WarningKind::InputAdjusted,
            format!(
                "Effective wind area {} sq ft is not positive; smallest tabulated area used",
                input.effective_wind_area_sqft
            ),
        ));
    }
    let areas = EffectiveAreas {
        default_sqft: input.effective_wind_area_sqft,
        by_zone: input.zone_effective_areas.clone(),
    };

    let layout = zones::build_zones(
        &geometry,
        &zone1_prime,
        input.method,
        &areas,
        input.reference_ratios,
    );
    warnings.extend(layout.warnings);

    let mode = input.settings.internal_pressure_mode;
    let zones = net_pressure::apply(&layout.zones, qz_psf, &enclosure, mode);

    Ok(aggregate::assemble(Stages {
        geometry,
        zone1_prime,
        dimensions: layout.dimensions,
        zones,
        enclosure,
        method: input.method,
        qz_psf,
        kz: echoed_kz,
        mode,
        reference_ratios: input.reference_ratios,
        code_edition: &input.settings.code_edition,
        warnings,
        assumptions,
    }))
}
