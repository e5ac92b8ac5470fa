//! # Pressure Zone Geometry
//!
//! Partitions a rectangular footprint into corner, perimeter, and field
//! zones and assigns each zone its external pressure coefficient.
//!
//! ## Governing Dimensions
//!
//! ```text
//! corner    c = max(3 ft, min(0.1L, 0.1W, 3H, L/10, W/10))
//! perimeter p = min(0.1L, 0.1W, 2H, 10 ft)
//! ```
//!
//! ## Layout (x along length, y along width)
//!
//! ```text
//!  (0,W) ┌────┬────────────────┬────┐ (L,W)
//!        │ NW │   perimeter N  │ NE │
//!        ├────┴────────────────┴────┤
//!        │ W  │     field      │ E  │
//!        ├────┬────────────────┬────┤
//!        │ SW │   perimeter S  │ SE │
//!  (0,0) └────┴────────────────┴────┘ (L,0)
//! ```
//!
//! Corners are c × c squares. Strips run between corners (length L − 2c or
//! W − 2c) with width p. The field is the interior (L − 2p) × (W − 2p) and is
//! omitted when either side is not positive; strips with no length between
//! corners are omitted the same way.
//!
//! When Zone 1' applies, corners take their baseline coefficient raised by
//! the Zone 1' pressure increase (itself derived from the building's own
//! ratios), and for aspect ratio ≥ 3.0 a single strip (the first one running
//! along the long side) is enhanced the same way. Every other zone uses its
//! baseline table scaled by the caller's reference ratios.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::asce_ref;
use crate::coefficients::{enhanced_coefficient, zone_coefficient, CalculationMethod, ShapeRatios};
use crate::errors::{CalcWarning, WarningKind};
use crate::geometry::BuildingGeometry;
use crate::zone1_prime::Zone1PrimeAnalysis;

/// Smallest permitted corner dimension (ft)
pub const MIN_CORNER_DIMENSION_FT: f64 = 3.0;
/// Largest perimeter strip width (ft)
pub const MAX_PERIMETER_WIDTH_FT: f64 = 10.0;
/// Aspect ratio at which one perimeter strip is also enhanced
pub const ENHANCED_PERIMETER_ASPECT: f64 = 3.0;

/// Closed set of zone types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    Field,
    Perimeter,
    Corner,
    FieldPrime,
    PerimeterPrime,
    CornerPrime,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 6] = [
        ZoneKind::Field,
        ZoneKind::Perimeter,
        ZoneKind::Corner,
        ZoneKind::FieldPrime,
        ZoneKind::PerimeterPrime,
        ZoneKind::CornerPrime,
    ];

    pub fn is_prime(&self) -> bool {
        matches!(
            self,
            ZoneKind::FieldPrime | ZoneKind::PerimeterPrime | ZoneKind::CornerPrime
        )
    }

    /// The baseline kind an enhanced kind is derived from
    pub fn baseline(&self) -> ZoneKind {
        match self {
            ZoneKind::Field | ZoneKind::FieldPrime => ZoneKind::Field,
            ZoneKind::Perimeter | ZoneKind::PerimeterPrime => ZoneKind::Perimeter,
            ZoneKind::Corner | ZoneKind::CornerPrime => ZoneKind::Corner,
        }
    }

    /// The enhanced counterpart of a baseline kind
    pub fn enhanced(&self) -> ZoneKind {
        match self {
            ZoneKind::Field | ZoneKind::FieldPrime => ZoneKind::FieldPrime,
            ZoneKind::Perimeter | ZoneKind::PerimeterPrime => ZoneKind::PerimeterPrime,
            ZoneKind::Corner | ZoneKind::CornerPrime => ZoneKind::CornerPrime,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ZoneKind::Field => "Field (Zone 1)",
            ZoneKind::Perimeter => "Perimeter (Zone 2)",
            ZoneKind::Corner => "Corner (Zone 3)",
            ZoneKind::FieldPrime => "Field (Zone 1')",
            ZoneKind::PerimeterPrime => "Perimeter (Zone 2')",
            ZoneKind::CornerPrime => "Corner (Zone 3')",
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Axis-aligned rectangle in footprint coordinates (ft).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    pub x_ft: f64,
    pub y_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,
}

impl ZoneRect {
    pub fn new(x_ft: f64, y_ft: f64, width_ft: f64, height_ft: f64) -> Self {
        ZoneRect { x_ft, y_ft, width_ft, height_ft }
    }

    pub fn area_sqft(&self) -> f64 {
        self.width_ft * self.height_ft
    }

    /// True when the rectangle lies inside a length × width footprint
    pub fn within(&self, length_ft: f64, width_ft: f64) -> bool {
        const TOL: f64 = 1e-9;
        self.x_ft >= -TOL
            && self.y_ft >= -TOL
            && self.x_ft + self.width_ft <= length_ft + TOL
            && self.y_ft + self.height_ft <= width_ft + TOL
    }
}

/// One pressure zone. Produced fresh by every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureZone {
    pub id: String,
    pub zone_type: ZoneKind,
    /// Signed external pressure coefficient
    pub gcp: f64,
    pub area_sqft: f64,
    /// Magnitude of the net design pressure (psf)
    pub net_pressure_psf: f64,
    pub location: ZoneRect,
    pub is_zone1_prime: bool,
    pub description: String,
    pub asce_reference: String,
    /// Effective wind area used for the GCp lookup (sq ft)
    pub effective_area_sqft: f64,
    pub interpolated: bool,
}

/// Effective wind areas for coefficient lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveAreas {
    pub default_sqft: f64,
    /// Overrides keyed by zone id (e.g. "corner_sw")
    #[serde(default)]
    pub by_zone: BTreeMap<String, f64>,
}

impl EffectiveAreas {
    pub fn uniform(default_sqft: f64) -> Self {
        EffectiveAreas {
            default_sqft,
            by_zone: BTreeMap::new(),
        }
    }

    pub fn for_zone(&self, id: &str) -> f64 {
        self.by_zone.get(id).copied().unwrap_or(self.default_sqft)
    }
}

/// Corner and perimeter dimensions governing the layout (ft).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoverningDimensions {
    pub corner_ft: f64,
    pub perimeter_ft: f64,
}

impl GoverningDimensions {
    pub fn for_building(geometry: &BuildingGeometry) -> Self {
        let l = geometry.length_ft;
        let w = geometry.width_ft;
        let h = geometry.height_ft;

        let corner_ft = (0.1 * l)
            .min(0.1 * w)
            .min(3.0 * h)
            .min(l / 10.0)
            .min(w / 10.0)
            .max(MIN_CORNER_DIMENSION_FT);
        let perimeter_ft = (0.1 * l).min(0.1 * w).min(2.0 * h).min(MAX_PERIMETER_WIDTH_FT);

        GoverningDimensions { corner_ft, perimeter_ft }
    }
}

/// Zones for one building with the dimensions that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub dimensions: GoverningDimensions,
    pub zones: Vec<PressureZone>,
    pub warnings: Vec<CalcWarning>,
}

struct ZoneSpec {
    id: &'static str,
    base: ZoneKind,
    rect: ZoneRect,
    description: &'static str,
}

/// Build the zone layout and assign coefficients.
///
/// `reference_ratios` keys every baseline (non-enhanced) coefficient; the
/// caller must choose it explicitly.
pub fn build_zones(
    geometry: &BuildingGeometry,
    zone1_prime: &Zone1PrimeAnalysis,
    method: CalculationMethod,
    areas: &EffectiveAreas,
    reference_ratios: ShapeRatios,
) -> ZoneLayout {
    let dimensions = GoverningDimensions::for_building(geometry);
    let specs = zone_specs(geometry, dimensions);

    let increase_pct = zone1_prime.pressure_increase_pct;
    let enhance_perimeter =
        zone1_prime.is_required && geometry.aspect_ratio >= ENHANCED_PERIMETER_ASPECT;
    let long_side_strip = if geometry.length_ft >= geometry.width_ft {
        "perimeter_s"
    } else {
        "perimeter_e"
    };

    let mut clamped_ids = Vec::new();
    let mut zones = Vec::with_capacity(specs.len());

    for spec in specs {
        let enhanced = match spec.base {
            ZoneKind::Corner => zone1_prime.is_required,
            ZoneKind::Perimeter => enhance_perimeter && spec.id == long_side_strip,
            _ => false,
        };

        let effective_area = areas.for_zone(spec.id);
        let (kind, coefficient) = if enhanced {
            let kind = spec.base.enhanced();
            (kind, enhanced_coefficient(kind, effective_area, method, increase_pct))
        } else {
            (spec.base, zone_coefficient(spec.base, effective_area, method, reference_ratios))
        };
        if coefficient.clamped {
            clamped_ids.push(spec.id);
        }

        let reference = if kind.is_prime() {
            asce_ref::ZONE1_PRIME.to_string()
        } else {
            coefficient.source.clone()
        };

        zones.push(PressureZone {
            id: spec.id.to_string(),
            zone_type: kind,
            gcp: coefficient.gcp,
            area_sqft: spec.rect.area_sqft(),
            net_pressure_psf: 0.0,
            location: spec.rect,
            is_zone1_prime: kind.is_prime(),
            description: format!("{} - {}", kind.display_name(), spec.description),
            asce_reference: reference,
            effective_area_sqft: effective_area,
            interpolated: coefficient.interpolated,
        });
    }

    let mut warnings = Vec::new();
    if !clamped_ids.is_empty() {
        let message = format!(
            "Effective wind area outside tabulated range for {}; GCp clamped to the table boundary",
            clamped_ids.join(", ")
        );
        warn!(target: "wind_core", "{}", message);
        warnings.push(CalcWarning::new(WarningKind::CoefficientOutOfRange, message));
    }

    debug!(
        target: "wind_core",
        corner_ft = dimensions.corner_ft,
        perimeter_ft = dimensions.perimeter_ft,
        zone_count = zones.len(),
        "zone layout"
    );

    ZoneLayout { dimensions, zones, warnings }
}

fn zone_specs(geometry: &BuildingGeometry, dims: GoverningDimensions) -> Vec<ZoneSpec> {
    let l = geometry.length_ft;
    let w = geometry.width_ft;
    let c = dims.corner_ft;
    let p = dims.perimeter_ft;

    // Corner squares never extend past the footprint
    let cx = c.min(l);
    let cy = c.min(w);

    let mut specs = vec![
        ZoneSpec {
            id: "corner_sw",
            base: ZoneKind::Corner,
            rect: ZoneRect::new(0.0, 0.0, cx, cy),
            description: "southwest corner",
        },
        ZoneSpec {
            id: "corner_se",
            base: ZoneKind::Corner,
            rect: ZoneRect::new(l - cx, 0.0, cx, cy),
            description: "southeast corner",
        },
        ZoneSpec {
            id: "corner_ne",
            base: ZoneKind::Corner,
            rect: ZoneRect::new(l - cx, w - cy, cx, cy),
            description: "northeast corner",
        },
        ZoneSpec {
            id: "corner_nw",
            base: ZoneKind::Corner,
            rect: ZoneRect::new(0.0, w - cy, cx, cy),
            description: "northwest corner",
        },
    ];

    let run_x = l - 2.0 * c;
    let run_y = w - 2.0 * c;
    if run_x > 0.0 {
        specs.push(ZoneSpec {
            id: "perimeter_s",
            base: ZoneKind::Perimeter,
            rect: ZoneRect::new(c, 0.0, run_x, p),
            description: "south edge strip",
        });
    }
    if run_y > 0.0 {
        specs.push(ZoneSpec {
            id: "perimeter_e",
            base: ZoneKind::Perimeter,
            rect: ZoneRect::new(l - p, c, p, run_y),
            description: "east edge strip",
        });
    }
    if run_x > 0.0 {
        specs.push(ZoneSpec {
            id: "perimeter_n",
            base: ZoneKind::Perimeter,
            rect: ZoneRect::new(c, w - p, run_x, p),
            description: "north edge strip",
        });
    }
    if run_y > 0.0 {
        specs.push(ZoneSpec {
            id: "perimeter_w",
            base: ZoneKind::Perimeter,
            rect: ZoneRect::new(0.0, c, p, run_y),
            description: "west edge strip",
        });
    }

    let field_x = l - 2.0 * p;
    let field_y = w - 2.0 * p;
    if field_x > 0.0 && field_y > 0.0 {
        specs.push(ZoneSpec {
            id: "field",
            base: ZoneKind::Field,
            rect: ZoneRect::new(p, p, field_x, field_y),
            description: "interior field",
        });
    }

    specs
}
