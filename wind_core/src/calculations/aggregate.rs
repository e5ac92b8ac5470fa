//! # Results Aggregation
//!
//! Picks the controlling zone, buckets affected areas, and writes the notes
//! and assumptions an engineer reads alongside the numbers.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::asce_ref;
use crate::coefficients::{CalculationMethod, ShapeRatios};
use crate::enclosure::EnclosureClassification;
use crate::errors::{CalcWarning, WarningKind};
use crate::geometry::BuildingGeometry;
use crate::zone1_prime::Zone1PrimeAnalysis;
use crate::zones::{GoverningDimensions, PressureZone, ZoneKind};

use super::net_pressure::{InternalPressure, InternalPressureMode, PressureBounds};
use super::zone_pressure::{CalculationSummary, ZoneCalculationResults};

/// Zone areas split by Zone 1' treatment (sq ft).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AffectedArea {
    pub standard_sqft: f64,
    pub zone1_prime_sqft: f64,
    pub total_sqft: f64,
}

/// Sum zone areas by `is_zone1_prime`.
pub fn affected_area(zones: &[PressureZone]) -> AffectedArea {
    let (prime, standard): (Vec<&PressureZone>, Vec<&PressureZone>) =
        zones.iter().partition(|z| z.is_zone1_prime);
    let standard_sqft: f64 = standard.iter().map(|z| z.area_sqft).sum();
    let zone1_prime_sqft: f64 = prime.iter().map(|z| z.area_sqft).sum();
    AffectedArea {
        standard_sqft,
        zone1_prime_sqft,
        total_sqft: standard_sqft + zone1_prime_sqft,
    }
}

/// Index and magnitude of the first zone reaching the largest net pressure.
pub fn controlling_zone(zones: &[PressureZone]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, zone) in zones.iter().enumerate() {
        let magnitude = zone.net_pressure_psf.abs();
        match best {
            Some((_, max)) if magnitude <= max => {}
            _ => best = Some((i, magnitude)),
        }
    }
    best
}

/// Everything the aggregator needs from the earlier stages.
pub(crate) struct Stages<'a> {
    pub geometry: BuildingGeometry,
    pub zone1_prime: Zone1PrimeAnalysis,
    pub dimensions: GoverningDimensions,
    pub zones: Vec<PressureZone>,
    pub enclosure: EnclosureClassification,
    pub method: CalculationMethod,
    pub qz_psf: f64,
    pub kz: Option<f64>,
    pub mode: InternalPressureMode,
    pub reference_ratios: ShapeRatios,
    pub code_edition: &'a str,
    pub warnings: Vec<CalcWarning>,
    pub assumptions: Vec<String>,
}

/// Assemble the final result record.
pub(crate) fn assemble(stages: Stages<'_>) -> ZoneCalculationResults {
    let Stages {
        geometry,
        zone1_prime,
        dimensions,
        zones,
        enclosure,
        method,
        qz_psf,
        kz,
        mode,
        reference_ratios,
        code_edition,
        mut warnings,
        mut assumptions,
    } = stages;

    if geometry.height_ft > geometry.least_dimension_ft() {
        let message = format!(
            "Mean roof height {:.1} ft exceeds least horizontal dimension {:.1} ft; \
             building is outside the low-rise definition of {}",
            geometry.height_ft,
            geometry.least_dimension_ft(),
            asce_ref::LOW_RISE
        );
        warn!(target: "wind_core", "{}", message);
        warnings.push(CalcWarning::new(WarningKind::SimplifiedMethodExceeded, message));
    }
    let requires_special_analysis = warnings
        .iter()
        .any(|w| w.kind == WarningKind::SimplifiedMethodExceeded);

    let (max_pressure_psf, controlling) = match controlling_zone(&zones) {
        Some((i, max)) => (max, Some(&zones[i])),
        None => (0.0, None),
    };
    let controlling_id = controlling.map(|z| z.id.clone()).unwrap_or_default();
    let pressure_bounds = controlling
        .map(|z| PressureBounds::for_zone(qz_psf, z.gcp, enclosure.gcpi_positive, enclosure.gcpi_negative))
        .unwrap_or(PressureBounds { lower_psf: 0.0, upper_psf: 0.0 });
    let affected_area = affected_area(&zones);

    let mut notes = vec![
        format!(
            "{} {} zone pressures, {} building ({:.1} × {:.1} × {:.1} ft).",
            code_edition,
            method.display_name(),
            geometry.classification.display_name().to_lowercase(),
            geometry.length_ft,
            geometry.width_ft,
            geometry.height_ft
        ),
        format!(
            "Corner zone dimension {:.2} ft; perimeter strip width {:.2} ft ({}).",
            dimensions.corner_ft,
            dimensions.perimeter_ft,
            asce_ref::ZONE_DIMENSION
        ),
        zone1_prime.explanation.clone(),
    ];
    if zone1_prime.is_required {
        let prime_strip = zones.iter().find(|z| z.zone_type == ZoneKind::PerimeterPrime);
        if let Some(strip) = prime_strip {
            notes.push(format!(
                "Enhanced perimeter coefficient applied to {} only (aspect ratio {:.2} ≥ 3.0).",
                strip.id, geometry.aspect_ratio
            ));
        }
        notes.push(format!(
            "Zone 1' area {:.1} sq ft of {:.1} sq ft total.",
            affected_area.zone1_prime_sqft, affected_area.total_sqft
        ));
    }
    notes.push(format!(
        "Baseline coefficients keyed to reference aspect ratio {:.2} and height ratio {:.2}.",
        reference_ratios.aspect_ratio, reference_ratios.height_ratio
    ));
    notes.push(format!(
        "Enclosure: {} (GCpi = {:+.2} / {:+.2}); net pressure uses {}.",
        enclosure.enclosure_type,
        enclosure.gcpi_positive,
        enclosure.gcpi_negative,
        mode.display_name()
    ));
    notes.push(match kz {
        Some(kz) => format!("Velocity pressure qz = {:.2} psf (Kz = {:.3}).", qz_psf, kz),
        None => format!("Velocity pressure qz = {:.2} psf (supplied).", qz_psf),
    });
    if let Some(zone) = controlling {
        notes.push(format!(
            "Controlling zone: {} ({}) at {:.2} psf; range {:.2}-{:.2} psf across GCpi cases.",
            zone.id,
            zone.zone_type.display_name(),
            max_pressure_psf,
            pressure_bounds.lower_psf,
            pressure_bounds.upper_psf
        ));
    }
    notes.extend(
        geometry
            .classification
            .design_considerations()
            .iter()
            .map(|s| s.to_string()),
    );
    if requires_special_analysis {
        notes.push(
            "Requires special analysis: simplified low-rise procedure limits exceeded.".to_string(),
        );
    }

    if mode == InternalPressureMode::PositiveOnly {
        assumptions.push(
            "Net pressure subtracts positive internal pressure only; negative GCpi case not evaluated"
                .to_string(),
        );
    }

    debug!(
        target: "wind_core",
        max_pressure_psf,
        controlling = %controlling_id,
        zones = zones.len(),
        "aggregated results"
    );

    ZoneCalculationResults {
        zone1_prime_required: zone1_prime.is_required,
        zone1_prime_analysis: zone1_prime,
        max_pressure_psf,
        controlling_zone: controlling_id,
        affected_area,
        professional_notes: notes,
        calculations: CalculationSummary {
            velocity_pressure_psf: qz_psf,
            kz,
            internal_pressure: InternalPressure::new(qz_psf, &enclosure),
            internal_pressure_mode: mode,
        },
        pressure_bounds,
        requires_special_analysis,
        governing_dimensions: dimensions,
        geometry,
        enclosure,
        method,
        zones,
        warnings,
        assumptions,
    }
}
