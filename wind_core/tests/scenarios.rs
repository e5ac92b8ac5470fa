//! End-to-end zone pressure scenarios and properties.

use proptest::prelude::*;

use wind_core::calculations::{
    compute_zone_pressures, EnclosureSource, InternalPressureMode, VelocityPressureSource,
    ZonePressureInput,
};
use wind_core::coefficients::{control_points, lookup_gcp, CalculationMethod, ShapeRatios};
use wind_core::enclosure::{EnclosureClassification, EnclosureType};
use wind_core::exposure::ExposureCategory;
use wind_core::geometry::{self, BuildingClassification};
use wind_core::zone1_prime;
use wind_core::zones::ZoneKind;
use wind_core::{CalcError, CalcWarning, WarningKind, WindSettings};

fn sorted_areas(input: &ZonePressureInput) -> Vec<f64> {
    let result = compute_zone_pressures(input).unwrap();
    let mut areas: Vec<f64> = result.zones.iter().map(|z| z.area_sqft).collect();
    areas.sort_by(|a, b| a.partial_cmp(b).unwrap());
    areas
}

#[test]
fn scenario_a_highly_elongated_warehouse() {
    let input = ZonePressureInput::new("Scenario A", 200.0, 50.0, 20.0, ExposureCategory::C, 115.0);
    let result = compute_zone_pressures(&input).unwrap();

    assert_eq!(result.geometry.aspect_ratio, 4.0);
    assert_eq!(result.geometry.classification, BuildingClassification::HighlyElongated);
    assert!(result.zone1_prime_required);
    assert!(result.zone1_prime_analysis.triggers[0].triggered);
    assert_eq!(result.governing_dimensions.corner_ft, 5.0);
    assert_eq!(result.governing_dimensions.perimeter_ft, 5.0);

    let prime_strips = result
        .zones
        .iter()
        .filter(|z| z.zone_type == ZoneKind::PerimeterPrime)
        .count();
    assert_eq!(prime_strips, 1);

    // Kz at 20 ft in exposure C is 0.90
    let kz = result.calculations.kz.unwrap();
    assert!((kz - 0.90).abs() < 0.01);
}

#[test]
fn scenario_b_compact_building() {
    let input = ZonePressureInput::new("Scenario B", 100.0, 100.0, 30.0, ExposureCategory::B, 115.0);
    let result = compute_zone_pressures(&input).unwrap();

    assert_eq!(result.geometry.aspect_ratio, 1.0);
    assert_eq!(result.geometry.height_ratio, 0.3);
    assert!(!result.zone1_prime_required);
    assert_eq!(result.zone1_prime_analysis.pressure_increase_pct, 0.0);
    assert_eq!(result.governing_dimensions.corner_ft, 10.0);
    assert_eq!(result.governing_dimensions.perimeter_ft, 10.0);
    assert_eq!(result.zone("field").unwrap().area_sqft, 6400.0);
    assert!(result.zones.iter().all(|z| !z.is_zone1_prime));
    assert_eq!(result.affected_area.zone1_prime_sqft, 0.0);
}

#[test]
fn reported_zone1_prime_increase_is_applied() {
    for (l, w, h) in [(100.0, 50.0, 10.0), (30.0, 30.0, 30.0), (200.0, 50.0, 20.0)] {
        let input = ZonePressureInput::new("prime", l, w, h, ExposureCategory::C, 115.0);
        let result = compute_zone_pressures(&input).unwrap();
        let increase = result.zone1_prime_analysis.pressure_increase_pct;
        assert!(result
            .zone1_prime_analysis
            .explanation
            .contains(&format!("{:.1}%", increase)));

        let corner = result.zone("corner_sw").unwrap();
        let baseline = lookup_gcp(ZoneKind::Corner, 10.0, CalculationMethod::ComponentCladding).gcp;
        let applied_pct = (corner.gcp / baseline - 1.0) * 100.0;
        assert!((applied_pct - increase).abs() < 1e-9, "{}x{}x{}: {} vs {}", l, w, h, applied_pct, increase);
    }
}

#[test]
fn reference_ratios_reach_baseline_zones() {
    let compact = ZonePressureInput::new("ref", 200.0, 50.0, 20.0, ExposureCategory::C, 115.0);
    let skewed = ZonePressureInput {
        reference_ratios: ShapeRatios::new(3.0, 1.0),
        ..compact.clone()
    };
    let a = compute_zone_pressures(&compact).unwrap();
    let b = compute_zone_pressures(&skewed).unwrap();

    for (za, zb) in a.zones.iter().zip(&b.zones) {
        if za.is_zone1_prime {
            assert_eq!(za.gcp, zb.gcp);
            assert_eq!(za.net_pressure_psf, zb.net_pressure_psf);
        } else {
            assert!(zb.gcp < za.gcp, "{} not steeper", za.id);
        }
    }
    assert!(b
        .professional_notes
        .iter()
        .any(|n| n.contains("reference aspect ratio 3.00 and height ratio 1.00")));
}

#[test]
fn aspect_trigger_boundary() {
    let at = zone1_prime::analyze(&geometry::analyze(2.0, 1.0, 0.5).unwrap());
    assert!(at.triggers[0].triggered);

    let below = zone1_prime::analyze(&geometry::analyze(1.999999, 1.0, 0.5).unwrap());
    assert!(!below.triggers[0].triggered);
}

#[test]
fn exact_table_areas_are_not_interpolated() {
    for method in [CalculationMethod::MainForce, CalculationMethod::ComponentCladding] {
        for kind in ZoneKind::ALL {
            for &(area, gcp) in control_points(kind, method) {
                let lookup = lookup_gcp(kind, area, method);
                assert!(!lookup.interpolated);
                assert_eq!(lookup.gcp, gcp);
            }
        }
    }
}

#[test]
fn non_positive_geometry_is_fatal() {
    for (l, w, h) in [(0.0, 50.0, 20.0), (100.0, -3.0, 20.0), (100.0, 50.0, 0.0)] {
        let input = ZonePressureInput::new("bad", l, w, h, ExposureCategory::C, 115.0);
        match compute_zone_pressures(&input) {
            Err(CalcError::InvalidGeometry { .. }) => {}
            other => panic!("expected InvalidGeometry, got {:?}", other),
        }
    }
}

#[test]
fn unrecognized_exposure_is_invalid_geometry() {
    let err = "E".parse::<ExposureCategory>().unwrap_err();
    assert!(matches!(err, CalcError::InvalidGeometry { .. }));
}

#[test]
fn precomputed_inputs_pass_through() {
    let mut classification = EnclosureClassification::of_type(EnclosureType::Open);
    classification.warnings.push(CalcWarning::new(
        WarningKind::LowConfidenceClassification,
        "Open canopy per site survey",
    ));

    let input = ZonePressureInput {
        velocity_pressure: VelocityPressureSource::Precomputed { qz_psf: 30.0 },
        enclosure: EnclosureSource::Precomputed(classification),
        ..ZonePressureInput::new("canopy", 80.0, 60.0, 15.0, ExposureCategory::D, 0.0)
    };
    let result = compute_zone_pressures(&input).unwrap();

    assert_eq!(result.calculations.velocity_pressure_psf, 30.0);
    assert_eq!(result.calculations.internal_pressure.gcpi_positive, 0.0);
    // Open building: net pressure is external pressure alone
    let field = result.zone("field").unwrap();
    assert!((field.net_pressure_psf - 30.0 * field.gcp.abs()).abs() < 1e-9);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::LowConfidenceClassification && w.message.contains("canopy")));
}

#[test]
fn mwfrs_pressures_below_cladding() {
    let cc = ZonePressureInput::new("cc", 120.0, 80.0, 24.0, ExposureCategory::C, 130.0);
    let mw = cc.clone().with_method(CalculationMethod::MainForce);
    let cc_result = compute_zone_pressures(&cc).unwrap();
    let mw_result = compute_zone_pressures(&mw).unwrap();
    assert!(mw_result.max_pressure_psf < cc_result.max_pressure_psf);
}

#[test]
fn governing_mode_reports_bounds_upper() {
    let input = ZonePressureInput::new("gov", 120.0, 80.0, 24.0, ExposureCategory::C, 130.0)
        .with_settings(WindSettings::default().with_internal_pressure_mode(InternalPressureMode::Governing));
    let result = compute_zone_pressures(&input).unwrap();
    assert!((result.max_pressure_psf - result.pressure_bounds.upper_psf).abs() < 1e-9);
    assert!(result.pressure_bounds.lower_psf <= result.pressure_bounds.upper_psf);
}

#[test]
fn out_of_range_area_clamps_with_warning() {
    let mut input = ZonePressureInput::new("big", 120.0, 80.0, 24.0, ExposureCategory::C, 130.0);
    input.effective_wind_area_sqft = 5.0;
    let result = compute_zone_pressures(&input).unwrap();
    assert!(result.zones.iter().all(|z| z.interpolated));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::CoefficientOutOfRange));
}

fn dimension() -> impl Strategy<Value = f64> {
    (1u32..=4000).prop_map(|tenths| tenths as f64 / 10.0)
}

proptest! {
    #[test]
    fn square_footprint_aspect_is_one(side in dimension(), height in dimension()) {
        let geom = geometry::analyze(side, side, height).unwrap();
        prop_assert_eq!(geom.aspect_ratio, 1.0);
        prop_assert!(!zone1_prime::analyze(&geom).triggers[0].triggered);
    }

    #[test]
    fn swapping_length_and_width_is_symmetric(
        length in dimension(),
        width in dimension(),
        height in dimension(),
    ) {
        let a = ZonePressureInput::new("a", length, width, height, ExposureCategory::C, 120.0);
        let b = ZonePressureInput::new("b", width, length, height, ExposureCategory::C, 120.0);
        let ra = compute_zone_pressures(&a).unwrap();
        let rb = compute_zone_pressures(&b).unwrap();

        prop_assert_eq!(ra.geometry.aspect_ratio, rb.geometry.aspect_ratio);
        prop_assert_eq!(ra.geometry.height_ratio, rb.geometry.height_ratio);
        prop_assert_eq!(ra.max_pressure_psf, rb.max_pressure_psf);
        prop_assert_eq!(sorted_areas(&a), sorted_areas(&b));
    }

    #[test]
    fn zones_are_valid_for_any_footprint(
        length in dimension(),
        width in dimension(),
        height in dimension(),
    ) {
        let input = ZonePressureInput::new("p", length, width, height, ExposureCategory::B, 110.0);
        let result = compute_zone_pressures(&input).unwrap();
        prop_assert!(!result.zones.is_empty());
        for zone in &result.zones {
            prop_assert!(zone.net_pressure_psf >= 0.0);
            prop_assert!(zone.area_sqft > 0.0);
            prop_assert!(zone.location.within(length, width));
        }
        prop_assert_eq!(
            result.zone1_prime_analysis.is_required,
            result.zone1_prime_analysis.triggers.iter().any(|t| t.triggered)
        );
    }
}
