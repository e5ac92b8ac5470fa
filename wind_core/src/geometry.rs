//! # Building Geometry Analysis
//!
//! Derives plan aspect ratio, height ratio, and a shape classification from
//! the rectangular footprint and mean roof height.
//!
//! ```text
//! aspect_ratio = max(L/W, W/L)          (≥ 1)
//! height_ratio = H / min(L, W)
//! ```
//!
//! | Classification   | Rule                                     |
//! |------------------|------------------------------------------|
//! | Tower            | height_ratio ≥ 5.0 or H ≥ 300 ft         |
//! | HighlyElongated  | aspect_ratio ≥ 4.0                       |
//! | Elongated        | aspect_ratio ≥ 2.0                       |
//! | Compact          | otherwise                                |
//!
//! ## Example
//!
//! ```rust
//! use wind_core::geometry::{analyze, BuildingClassification};
//!
//! let geom = analyze(200.0, 50.0, 20.0).unwrap();
//! assert_eq!(geom.aspect_ratio, 4.0);
//! assert_eq!(geom.classification, BuildingClassification::HighlyElongated);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_positive, CalcResult};

/// Height ratio at or above which a building is treated as a tower
pub const TOWER_HEIGHT_RATIO: f64 = 5.0;
/// Absolute height at or above which a building is treated as a tower (ft)
pub const TOWER_HEIGHT_FT: f64 = 300.0;
/// Aspect ratio at or above which a building is highly elongated
pub const HIGHLY_ELONGATED_ASPECT: f64 = 4.0;
/// Aspect ratio at or above which a building is elongated
pub const ELONGATED_ASPECT: f64 = 2.0;

/// Shape classification of a rectangular building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingClassification {
    Compact,
    Elongated,
    HighlyElongated,
    Tower,
}

impl BuildingClassification {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingClassification::Compact => "Compact",
            BuildingClassification::Elongated => "Elongated",
            BuildingClassification::HighlyElongated => "Highly elongated",
            BuildingClassification::Tower => "Tower",
        }
    }

    /// How wind behaves around this shape
    pub fn wind_implications(&self) -> &'static [&'static str] {
        match self {
            BuildingClassification::Compact => &[
                "Flow separation is roughly symmetric about both plan axes",
                "Corner vortices dominate peak suction at roof corners",
            ],
            BuildingClassification::Elongated => &[
                "Long-wall flow reattaches late, extending high suction along the eave",
                "End-wall corners see stronger conical vortices than a compact plan",
            ],
            BuildingClassification::HighlyElongated => &[
                "Separated flow persists along most of the long side",
                "Perimeter suction approaches corner levels away from the corners",
                "Directional sensitivity is high for winds normal to the long face",
            ],
            BuildingClassification::Tower => &[
                "Vortex shedding and across-wind response may govern",
                "Velocity pressure varies significantly over the height",
            ],
        }
    }

    /// What the designer should check for this shape
    pub fn design_considerations(&self) -> &'static [&'static str] {
        match self {
            BuildingClassification::Compact => &[
                "Standard corner, perimeter, and field zones are adequate",
            ],
            BuildingClassification::Elongated => &[
                "Check Zone 1' requirements for corner and perimeter zones",
                "Verify roof deck attachment along the long eave",
            ],
            BuildingClassification::HighlyElongated => &[
                "Zone 1' enhanced zones are mandatory",
                "Consider enhanced perimeter fastening on the long side",
                "Review MWFRS drift and diaphragm chord forces",
            ],
            BuildingClassification::Tower => &[
                "Simplified low-rise procedures do not apply",
                "Use the directional procedure or wind tunnel testing",
            ],
        }
    }

    /// Governing code references
    pub fn code_references(&self) -> &'static [&'static str] {
        match self {
            BuildingClassification::Compact => &["ASCE 7-22 Chapter 30 Part 1"],
            BuildingClassification::Elongated | BuildingClassification::HighlyElongated => {
                &["ASCE 7-22 Chapter 30 Part 1", "ASCE 7-22 Figure 30.3-2A Note 5"]
            }
            BuildingClassification::Tower => &["ASCE 7-22 Chapter 27", "ASCE 7-22 Chapter 31"],
        }
    }
}

impl std::fmt::Display for BuildingClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable building geometry with derived ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingGeometry {
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,
    /// max(L/W, W/L)
    pub aspect_ratio: f64,
    /// H / min(L, W)
    pub height_ratio: f64,
    pub classification: BuildingClassification,
}

impl BuildingGeometry {
    /// Least horizontal dimension (ft)
    pub fn least_dimension_ft(&self) -> f64 {
        self.length_ft.min(self.width_ft)
    }

    /// Greatest horizontal dimension (ft)
    pub fn greatest_dimension_ft(&self) -> f64 {
        self.length_ft.max(self.width_ft)
    }
}

/// Analyze a rectangular building. Fails only on non-positive dimensions.
pub fn analyze(length_ft: f64, width_ft: f64, height_ft: f64) -> CalcResult<BuildingGeometry> {
    let length_ft = require_positive("length_ft", length_ft)?;
    let width_ft = require_positive("width_ft", width_ft)?;
    let height_ft = require_positive("height_ft", height_ft)?;

    let aspect_ratio = (length_ft / width_ft).max(width_ft / length_ft);
    let height_ratio = height_ft / length_ft.min(width_ft);
    let classification = classify(aspect_ratio, height_ratio, height_ft);

    debug!(target: "wind_core", aspect_ratio, height_ratio, ?classification, "building geometry");

    Ok(BuildingGeometry {
        length_ft,
        width_ft,
        height_ft,
        aspect_ratio,
        height_ratio,
        classification,
    })
}

fn classify(aspect_ratio: f64, height_ratio: f64, height_ft: f64) -> BuildingClassification {
    if height_ratio >= TOWER_HEIGHT_RATIO || height_ft >= TOWER_HEIGHT_FT {
        BuildingClassification::Tower
    } else if aspect_ratio >= HIGHLY_ELONGATED_ASPECT {
        BuildingClassification::HighlyElongated
    } else if aspect_ratio >= ELONGATED_ASPECT {
        BuildingClassification::Elongated
    } else {
        BuildingClassification::Compact
    }
}
