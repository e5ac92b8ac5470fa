//! # Zone 1' Analysis
//!
//! Decides whether enhanced corner/perimeter pressures apply to an elongated
//! or relatively tall low-rise building.
//!
//! Two independent triggers, both inclusive:
//!
//! | Trigger      | Fires when            |
//! |--------------|-----------------------|
//! | Aspect ratio | aspect_ratio ≥ 2.0    |
//! | Height ratio | height_ratio ≥ 1.0    |
//!
//! Each fired trigger contributes `10% + 20% × (value / threshold − 1)`; the
//! governing (largest) contribution, capped at 40%, is the factor applied to
//! every enhanced zone coefficient.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::asce_ref;
use crate::geometry::BuildingGeometry;

/// Aspect ratio at which Zone 1' becomes mandatory (inclusive)
pub const ASPECT_RATIO_THRESHOLD: f64 = 2.0;
/// Height ratio at which Zone 1' becomes mandatory (inclusive)
pub const HEIGHT_RATIO_THRESHOLD: f64 = 1.0;
/// Increase applied the moment a trigger fires (%)
const BASE_INCREASE_PCT: f64 = 10.0;
/// Additional increase per unit of relative exceedance (%)
const INCREASE_SLOPE_PCT: f64 = 20.0;
/// Ceiling on the reported pressure increase (%)
pub const MAX_PRESSURE_INCREASE_PCT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerType {
    AspectRatio,
    HeightRatio,
}

impl TriggerType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TriggerType::AspectRatio => "aspect ratio",
            TriggerType::HeightRatio => "height-to-width ratio",
        }
    }
}

/// Outcome of one threshold test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone1PrimeTrigger {
    pub trigger_type: TriggerType,
    pub triggered: bool,
    pub value: f64,
    pub threshold: f64,
    pub description: String,
    pub impact: String,
}

/// Immutable Zone 1' decision record.
///
/// `is_required` is true exactly when at least one trigger fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone1PrimeAnalysis {
    pub is_required: bool,
    pub aspect_ratio: f64,
    pub height_ratio: f64,
    /// Governing pressure increase in percent (0 when not required)
    pub pressure_increase_pct: f64,
    pub explanation: String,
    pub asce_reference: String,
    pub triggers: Vec<Zone1PrimeTrigger>,
}

impl Zone1PrimeAnalysis {
    /// Triggers that fired, in evaluation order
    pub fn fired(&self) -> impl Iterator<Item = &Zone1PrimeTrigger> {
        self.triggers.iter().filter(|t| t.triggered)
    }
}

fn increase_for(value: f64, threshold: f64) -> f64 {
    let exceedance = (value / threshold - 1.0).max(0.0);
    (BASE_INCREASE_PCT + INCREASE_SLOPE_PCT * exceedance).min(MAX_PRESSURE_INCREASE_PCT)
}

fn evaluate(trigger_type: TriggerType, value: f64, threshold: f64) -> Zone1PrimeTrigger {
    let triggered = value >= threshold;
    let description = format!(
        "{} {:.2} {} threshold {:.2}",
        capitalize(trigger_type.display_name()),
        value,
        if triggered { "meets or exceeds" } else { "is below" },
        threshold
    );
    let impact = if triggered {
        format!(
            "Enhanced corner pressures required (+{:.1}%)",
            increase_for(value, threshold)
        )
    } else {
        "No enhancement from this factor".to_string()
    };

    Zone1PrimeTrigger {
        trigger_type,
        triggered,
        value,
        threshold,
        description,
        impact,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Evaluate the Zone 1' triggers for a building.
pub fn analyze(geometry: &BuildingGeometry) -> Zone1PrimeAnalysis {
    let triggers = vec![
        evaluate(TriggerType::AspectRatio, geometry.aspect_ratio, ASPECT_RATIO_THRESHOLD),
        evaluate(TriggerType::HeightRatio, geometry.height_ratio, HEIGHT_RATIO_THRESHOLD),
    ];

    let is_required = triggers.iter().any(|t| t.triggered);
    let pressure_increase_pct = triggers
        .iter()
        .filter(|t| t.triggered)
        .map(|t| increase_for(t.value, t.threshold))
        .fold(0.0_f64, f64::max);

    let explanation = if is_required {
        let factors: Vec<String> = triggers
            .iter()
            .filter(|t| t.triggered)
            .map(|t| format!("{} {:.2} ≥ {:.1}", t.trigger_type.display_name(), t.value, t.threshold))
            .collect();
        format!(
            "Zone 1' required: {}. Enhanced zone coefficients are {:.1}% above baseline per {}.",
            factors.join(" and "),
            pressure_increase_pct,
            asce_ref::ZONE1_PRIME
        )
    } else {
        format!(
            "Zone 1' not required: aspect ratio {:.2} < {:.1} and height ratio {:.2} < {:.1}.",
            geometry.aspect_ratio,
            ASPECT_RATIO_THRESHOLD,
            geometry.height_ratio,
            HEIGHT_RATIO_THRESHOLD
        )
    };

    debug!(target: "wind_core", is_required, pressure_increase_pct, "zone 1' analysis");

    Zone1PrimeAnalysis {
        is_required,
        aspect_ratio: geometry.aspect_ratio,
        height_ratio: geometry.height_ratio,
        pressure_increase_pct,
        explanation,
        asce_reference: asce_ref::ZONE1_PRIME.to_string(),
        triggers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;

    #[test]
    fn test_aspect_trigger_inclusive() {
        let geom = geometry::analyze(100.0, 50.0, 10.0).unwrap();
        let analysis = analyze(&geom);
        assert!(analysis.is_required);
        assert!(analysis.triggers[0].triggered);
        assert!(!analysis.triggers[1].triggered);
        assert!((analysis.pressure_increase_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_just_below_threshold() {
        let geom = geometry::analyze(1.999999, 1.0, 0.5).unwrap();
        let analysis = analyze(&geom);
        assert!(!analysis.triggers[0].triggered);
        assert!(!analysis.is_required);
        assert_eq!(analysis.pressure_increase_pct, 0.0);
    }

    #[test]
    fn test_height_trigger() {
        let geom = geometry::analyze(30.0, 30.0, 30.0).unwrap();
        let analysis = analyze(&geom);
        assert!(analysis.is_required);
        assert!(!analysis.triggers[0].triggered);
        assert!(analysis.triggers[1].triggered);
    }

    #[test]
    fn test_increase_monotonic_and_capped() {
        let a = analyze(&geometry::analyze(250.0, 100.0, 10.0).unwrap());
        let b = analyze(&geometry::analyze(300.0, 100.0, 10.0).unwrap());
        let c = analyze(&geometry::analyze(1000.0, 50.0, 10.0).unwrap());
        assert!(a.pressure_increase_pct < b.pressure_increase_pct);
        assert_eq!(c.pressure_increase_pct, MAX_PRESSURE_INCREASE_PCT);
    }

    #[test]
    fn test_governing_factor_is_larger() {
        // aspect 4.0 → 30%; height ratio 1.2 → 14%
        let geom = geometry::analyze(200.0, 50.0, 60.0).unwrap();
        let analysis = analyze(&geom);
        assert_eq!(analysis.fired().count(), 2);
        assert!((analysis.pressure_increase_pct - 30.0).abs() < 1e-9);
        assert!(analysis.explanation.contains("aspect ratio"));
        assert!(analysis.explanation.contains("height-to-width ratio"));
    }

    #[test]
    fn test_required_iff_any_trigger() {
        for (l, w, h) in [(100.0, 100.0, 30.0), (200.0, 50.0, 20.0), (40.0, 40.0, 45.0)] {
            let analysis = analyze(&geometry::analyze(l, w, h).unwrap());
            assert_eq!(analysis.is_required, analysis.triggers.iter().any(|t| t.triggered));
        }
    }
}
