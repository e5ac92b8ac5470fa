//! # Enclosure Classification
//!
//! Classifies the building envelope from its opening inventory and assigns
//! internal pressure coefficients.
//!
//! ## Rules
//!
//! - **Open**: total opening area > 80% of the gross wall area
//! - **Partially enclosed**: the windward openings dominate, i.e. all of
//!   - Ao > 1.10 × Aoi
//!   - Ao > min(4 sq ft, 0.01 × Ag)
//!   - Aoi / Agi ≤ 0.20
//! - **Enclosed**: everything else, and any inventory whose openings exceed
//!   the gross wall area
//!
//! where Ao is the windward opening area, Ag the windward wall gross area
//! (long face, max(L, W) × H), and Aoi / Agi the openings and gross area of
//! the remaining walls.
//!
//! | Enclosure          | GCpi   |
//! |--------------------|--------|
//! | Enclosed           | ±0.18  |
//! | Partially enclosed | ±0.55  |
//! | Open               | 0.00   |

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::asce_ref;
use crate::errors::{CalcWarning, WarningKind};
use crate::geometry::BuildingGeometry;

/// Opening ratio above which the building is open
pub const OPEN_RATIO_THRESHOLD: f64 = 0.8;
/// Windward openings must exceed the rest by this factor
pub const DOMINANCE_FACTOR: f64 = 1.10;
/// Absolute floor on a dominant opening (sq ft)
pub const MIN_DOMINANT_AREA_SQFT: f64 = 4.0;
/// Fraction of the windward wall a dominant opening must exceed
pub const MIN_DOMINANT_FRACTION: f64 = 0.01;
/// Largest porosity of the remaining envelope for a dominant opening
pub const MAX_BACKGROUND_POROSITY: f64 = 0.20;

/// Facade an opening sits on relative to the design wind direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacadeLocation {
    Windward,
    Leeward,
    Side,
}

/// Glazing in an opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlazingType {
    /// Permanently open (vents, open bays)
    Unglazed,
    /// Ordinary glazing, not rated for windborne debris
    #[default]
    Standard,
    /// Impact-resistant glazing or protected opening
    ImpactRated,
}

/// One opening in the building envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub area_sqft: f64,
    pub location: FacadeLocation,
    #[serde(default)]
    pub glazing: GlazingType,
    /// Whether the opening can be breached (glazing failure, door blow-in)
    #[serde(default)]
    pub can_fail: bool,
}

impl Opening {
    pub fn new(area_sqft: f64, location: FacadeLocation) -> Self {
        Opening {
            area_sqft,
            location,
            glazing: GlazingType::default(),
            can_fail: false,
        }
    }

    /// Builder: set glazing and failure susceptibility
    pub fn with_glazing(mut self, glazing: GlazingType, can_fail: bool) -> Self {
        self.glazing = glazing;
        self.can_fail = can_fail;
        self
    }

    fn is_breach_candidate(&self) -> bool {
        self.location == FacadeLocation::Windward
            && self.can_fail
            && self.glazing == GlazingType::Standard
    }
}

/// Opening inventory and options for classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnclosureInput {
    #[serde(default)]
    pub openings: Vec<Opening>,

    /// Site lies in a windborne debris region
    #[serde(default)]
    pub windborne_debris_region: bool,

    /// Treat a breached windward opening as a dominant opening
    #[serde(default)]
    pub apply_failure_scenario: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnclosureType {
    Enclosed,
    PartiallyEnclosed,
    Open,
}

impl EnclosureType {
    /// Magnitude of GCpi
    pub fn gcpi_magnitude(&self) -> f64 {
        match self {
            EnclosureType::Enclosed => 0.18,
            EnclosureType::PartiallyEnclosed => 0.55,
            EnclosureType::Open => 0.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EnclosureType::Enclosed => "Enclosed",
            EnclosureType::PartiallyEnclosed => "Partially enclosed",
            EnclosureType::Open => "Open",
        }
    }
}

impl std::fmt::Display for EnclosureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable enclosure decision for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosureClassification {
    pub enclosure_type: EnclosureType,
    pub gcpi_positive: f64,
    pub gcpi_negative: f64,
    pub opening_ratio: f64,
    pub has_dominant_opening: bool,
    pub failure_scenario_considered: bool,
    pub windward_opening_area_sqft: f64,
    pub total_opening_area_sqft: f64,
    #[serde(default)]
    pub warnings: Vec<CalcWarning>,
}

impl EnclosureClassification {
    /// Classification of a given type with its standard GCpi pair and no
    /// opening data.
    pub fn of_type(enclosure_type: EnclosureType) -> Self {
        let (gcpi_positive, gcpi_negative) = gcpi_pair(enclosure_type);
        EnclosureClassification {
            enclosure_type,
            gcpi_positive,
            gcpi_negative,
            opening_ratio: 0.0,
            has_dominant_opening: enclosure_type == EnclosureType::PartiallyEnclosed,
            failure_scenario_considered: false,
            windward_opening_area_sqft: 0.0,
            total_opening_area_sqft: 0.0,
            warnings: Vec::new(),
        }
    }
}

fn gcpi_pair(enclosure_type: EnclosureType) -> (f64, f64) {
    match enclosure_type {
        EnclosureType::Open => (0.0, 0.0),
        other => {
            let m = other.gcpi_magnitude();
            (m, -m)
        }
    }
}

/// Classify the envelope of a building from its openings.
pub fn classify(input: &EnclosureInput, geometry: &BuildingGeometry) -> EnclosureClassification {
    let mut warnings = Vec::new();

    let total_wall_sqft = 2.0 * geometry.height_ft * (geometry.length_ft + geometry.width_ft);
    let windward_wall_sqft = geometry.greatest_dimension_ft() * geometry.height_ft;
    let other_wall_sqft = total_wall_sqft - windward_wall_sqft;

    let mut windward_sqft = 0.0;
    let mut other_sqft = 0.0;
    let mut skipped = 0usize;
    for opening in &input.openings {
        if !opening.area_sqft.is_finite() || opening.area_sqft <= 0.0 {
            skipped += 1;
            continue;
        }
        match opening.location {
            FacadeLocation::Windward => windward_sqft += opening.area_sqft,
            FacadeLocation::Leeward | FacadeLocation::Side => other_sqft += opening.area_sqft,
        }
    }
    if skipped > 0 {
        warnings.push(CalcWarning::new(
            WarningKind::InputAdjusted,
            format!("{} opening(s) with non-positive area were ignored", skipped),
        ));
    }

    let usable = input.openings.len() - skipped;
    if usable == 0 {
        let reason = if input.openings.is_empty() {
            "No opening inventory supplied"
        } else {
            "Opening inventory contains no usable openings"
        };
        warnings.push(CalcWarning::new(
            WarningKind::LowConfidenceClassification,
            format!(
                "{}; building assumed enclosed (GCpi = ±0.18). Verify openings per {}",
                reason,
                asce_ref::ENCLOSURE
            ),
        ));
    }

    let total_sqft = windward_sqft + other_sqft;
    let inconsistent = total_sqft > total_wall_sqft;
    let opening_ratio = (total_sqft / total_wall_sqft).min(1.0);
    if inconsistent {
        warnings.push(CalcWarning::new(
            WarningKind::LowConfidenceClassification,
            format!(
                "Opening area {:.1} sq ft exceeds gross wall area {:.1} sq ft; inventory is \
                 inconsistent and the building is assumed enclosed (GCpi = ±0.18)",
                total_sqft, total_wall_sqft
            ),
        ));
    }

    let dominant_floor = MIN_DOMINANT_AREA_SQFT.min(MIN_DOMINANT_FRACTION * windward_wall_sqft);
    let background_ok = other_wall_sqft <= 0.0 || other_sqft / other_wall_sqft <= MAX_BACKGROUND_POROSITY;
    let has_dominant_opening = !inconsistent
        && windward_sqft > DOMINANCE_FACTOR * other_sqft
        && windward_sqft > dominant_floor
        && background_ok;

    let mut enclosure_type = if inconsistent {
        EnclosureType::Enclosed
    } else if opening_ratio > OPEN_RATIO_THRESHOLD {
        EnclosureType::Open
    } else if has_dominant_opening {
        EnclosureType::PartiallyEnclosed
    } else {
        EnclosureType::Enclosed
    };

    let failure_scenario_considered =
        input.windborne_debris_region && input.openings.iter().any(Opening::is_breach_candidate);
    if failure_scenario_considered {
        warnings.push(CalcWarning::new(
            WarningKind::FailureScenario,
            format!(
                "Windward glazing is not impact rated in a windborne debris region; \
                 consider the dominant-opening failure scenario per {}",
                asce_ref::WINDBORNE_DEBRIS
            ),
        ));
        if input.apply_failure_scenario && enclosure_type == EnclosureType::Enclosed {
            enclosure_type = EnclosureType::PartiallyEnclosed;
            warnings.push(CalcWarning::new(
                WarningKind::FailureScenario,
                "Failure scenario applied: breached windward glazing treated as a dominant opening",
            ));
        }
    }

    for warning in &warnings {
        warn!(target: "wind_core", "{}", warning);
    }

    let (gcpi_positive, gcpi_negative) = gcpi_pair(enclosure_type);
    debug!(target: "wind_core", ?enclosure_type, opening_ratio, gcpi_positive, "enclosure classification");

    EnclosureClassification {
        enclosure_type,
        gcpi_positive,
        gcpi_negative,
        opening_ratio,
        has_dominant_opening: has_dominant_opening
            || enclosure_type == EnclosureType::PartiallyEnclosed,
        failure_scenario_considered,
        windward_opening_area_sqft: windward_sqft,
        total_opening_area_sqft: total_sqft,
        warnings,
    }
}
