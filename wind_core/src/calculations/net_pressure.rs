//! # Net Pressure
//!
//! Combines external and internal pressure for each zone.
//!
//! ```text
//! p⁺ = |qz·GCp − qz·GCpi⁺|
//! p⁻ = |qz·GCp − qz·GCpi⁻|
//! ```
//!
//! `PositiveOnly` reports p⁺ alone, matching the long-standing behavior of
//! this engine. `Governing` reports max(p⁺, p⁻). Both are non-negative.

use serde::{Deserialize, Serialize};

use crate::enclosure::EnclosureClassification;
use crate::zones::PressureZone;

/// How internal pressure is combined with external pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InternalPressureMode {
    /// Subtract GCpi⁺ only
    #[default]
    PositiveOnly,
    /// Evaluate GCpi⁺ and GCpi⁻, report the larger magnitude
    Governing,
}

impl InternalPressureMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            InternalPressureMode::PositiveOnly => "positive GCpi only",
            InternalPressureMode::Governing => "governing of +GCpi and -GCpi",
        }
    }
}

/// Internal pressure coefficients and the pressures they produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InternalPressure {
    pub gcpi_positive: f64,
    pub gcpi_negative: f64,
    /// qz × GCpi⁺ (psf)
    pub positive_psf: f64,
    /// qz × GCpi⁻ (psf)
    pub negative_psf: f64,
}

impl InternalPressure {
    pub fn new(qz_psf: f64, enclosure: &EnclosureClassification) -> Self {
        InternalPressure {
            gcpi_positive: enclosure.gcpi_positive,
            gcpi_negative: enclosure.gcpi_negative,
            positive_psf: qz_psf * enclosure.gcpi_positive,
            negative_psf: qz_psf * enclosure.gcpi_negative,
        }
    }
}

/// Smaller and larger of the two internal pressure combinations (psf).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureBounds {
    pub lower_psf: f64,
    pub upper_psf: f64,
}

impl PressureBounds {
    pub fn for_zone(qz_psf: f64, gcp: f64, gcpi_positive: f64, gcpi_negative: f64) -> Self {
        let with_positive = combine(qz_psf, gcp, gcpi_positive);
        let with_negative = combine(qz_psf, gcp, gcpi_negative);
        PressureBounds {
            lower_psf: with_positive.min(with_negative),
            upper_psf: with_positive.max(with_negative),
        }
    }
}

fn combine(qz_psf: f64, gcp: f64, gcpi: f64) -> f64 {
    (qz_psf * gcp - qz_psf * gcpi).abs()
}

/// Net pressure magnitude for one zone coefficient.
pub fn net_pressure(
    qz_psf: f64,
    gcp: f64,
    gcpi_positive: f64,
    gcpi_negative: f64,
    mode: InternalPressureMode,
) -> f64 {
    match mode {
        InternalPressureMode::PositiveOnly => combine(qz_psf, gcp, gcpi_positive),
        InternalPressureMode::Governing => {
            combine(qz_psf, gcp, gcpi_positive).max(combine(qz_psf, gcp, gcpi_negative))
        }
    }
}

/// Fresh zones with net pressures filled in.
pub fn apply(
    zones: &[PressureZone],
    qz_psf: f64,
    enclosure: &EnclosureClassification,
    mode: InternalPressureMode,
) -> Vec<PressureZone> {
    zones
        .iter()
        .map(|zone| PressureZone {
            net_pressure_psf: net_pressure(
                qz_psf,
                zone.gcp,
                enclosure.gcpi_positive,
                enclosure.gcpi_negative,
                mode,
            ),
            ..zone.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enclosure::EnclosureType;

    #[test]
    fn test_positive_only() {
        // |25 × -1.7 - 25 × 0.18| = 47.0
        let p = net_pressure(25.0, -1.7, 0.18, -0.18, InternalPressureMode::PositiveOnly);
        assert!((p - 47.0).abs() < 1e-9);
    }

    #[test]
    fn test_governing_picks_larger() {
        // Positive external pressure: negative GCpi governs
        let one_sided = net_pressure(20.0, 0.5, 0.55, -0.55, InternalPressureMode::PositiveOnly);
        let governing = net_pressure(20.0, 0.5, 0.55, -0.55, InternalPressureMode::Governing);
        assert!((one_sided - 1.0).abs() < 1e-9);
        assert!((governing - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_never_negative() {
        for gcp in [-3.6, -1.0, 0.0, 0.3, 0.9] {
            for gcpi in [-0.55, -0.18, 0.0, 0.18, 0.55] {
                for mode in [InternalPressureMode::PositiveOnly, InternalPressureMode::Governing] {
                    assert!(net_pressure(30.0, gcp, gcpi, -gcpi, mode) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_bounds() {
        let bounds = PressureBounds::for_zone(20.0, -2.0, 0.18, -0.18);
        assert!((bounds.lower_psf - 36.4).abs() < 1e-9);
        assert!((bounds.upper_psf - 43.6).abs() < 1e-9);
    }

    #[test]
    fn test_internal_pressure_echo() {
        let enclosure = EnclosureClassification::of_type(EnclosureType::PartiallyEnclosed);
        let internal = InternalPressure::new(20.0, &enclosure);
        assert!((internal.positive_psf - 11.0).abs() < 1e-9);
        assert!((internal.negative_psf + 11.0).abs() < 1e-9);
    }
}
