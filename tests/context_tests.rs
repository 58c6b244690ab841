mod common;

use ballforge::config::{SessionParams, Thresholds};
use ballforge::context::{Context, LaneCondition};
use ballforge::lanes::{get_all_surfaces, FrictionBand, LaneSurface};
use common::{assert_close, context_with};
use rstest::rstest;
use std::str::FromStr;

#[rstest]
#[case(42.0, 23.0, LaneCondition::Medium)]
#[case(45.0, 22.0, LaneCondition::Heavy)]
#[case(40.0, 24.0, LaneCondition::Heavy)]
#[case(35.0, 22.0, LaneCondition::Light)]
#[case(40.0, 20.0, LaneCondition::Light)]
// Heavy wins when both rules match
#[case(47.0, 18.0, LaneCondition::Heavy)]
#[case(30.0, 26.0, LaneCondition::Heavy)]
fn test_lane_condition(#[case] length: f64, #[case] volume: f64, #[case] expected: LaneCondition) {
    assert_eq!(
        LaneCondition::from_oil(length, volume, &Thresholds::default()),
        expected
    );
}

#[test]
fn test_context_carries_session_inputs() {
    let ctx = context_with(|p| {
        p.speed = 18.5;
        p.rev_rate = 410.0;
        p.pin_to_pap = 3.75;
    });
    assert_eq!(ctx.lane_surface, LaneSurface::ProAnvilane);
    assert_eq!(ctx.lane_condition, LaneCondition::Medium);
    assert_close(ctx.oil_length_ft, 42.0);
    assert_close(ctx.oil_volume_ml, 23.0);
    assert_close(ctx.ball_speed_mph, 18.5);
    assert_close(ctx.rev_rate_rpm, 410.0);
    assert_close(ctx.pin_to_pap_in, 3.75);
}

#[test]
fn test_default_session_is_medium_wood() {
    let ctx = Context::from_params(&SessionParams::default(), &Thresholds::default());
    assert_eq!(ctx.lane_surface, LaneSurface::WoodNew);
    assert_eq!(ctx.lane_condition, LaneCondition::Medium);
    assert_close(ctx.lane_friction_index, 1.65);
    assert_eq!(ctx.friction_band(&Thresholds::default()), FrictionBand::High);
}

#[rstest]
#[case(LaneSurface::WoodNew, 1.65)]
#[case(LaneSurface::Murray, 1.575)]
#[case(LaneSurface::AmfHpl, 1.575)]
#[case(LaneSurface::ProAnvilane, 1.575)]
fn test_friction_index(#[case] surface: LaneSurface, #[case] expected: f64) {
    assert_close(surface.friction_index(), expected);
}

#[rstest]
#[case(1.65, FrictionBand::High)]
#[case(1.5, FrictionBand::High)]
#[case(1.3, FrictionBand::MediumHigh)]
#[case(1.2, FrictionBand::MediumHigh)]
#[case(1.1, FrictionBand::Medium)]
#[case(0.9, FrictionBand::Low)]
fn test_friction_bands(#[case] index: f64, #[case] expected: FrictionBand) {
    assert_eq!(FrictionBand::from_index(index, &Thresholds::default()), expected);
}

#[test]
fn test_catalog_is_complete() {
    let surfaces = get_all_surfaces();
    assert_eq!(surfaces.len(), 9);
    assert_eq!(surfaces[0], LaneSurface::WoodNew);
    assert_eq!(*surfaces.last().unwrap(), LaneSurface::ProAnvilane);
    for s in surfaces {
        assert!(s.sr() > s.ra(), "{} has SR below Ra", s);
        assert!(!s.description().is_empty());
        assert!(!s.effect().is_empty());
    }
}

#[rstest]
#[case("pro_anvilane", LaneSurface::ProAnvilane)]
#[case("Pro Anvilane", LaneSurface::ProAnvilane)]
#[case("PRO_ANVILANE", LaneSurface::ProAnvilane)]
#[case("wood_new", LaneSurface::WoodNew)]
#[case("Wood (Old)", LaneSurface::WoodOld)]
#[case("amf_hpl", LaneSurface::AmfHpl)]
fn test_surface_parsing(#[case] text: &str, #[case] expected: LaneSurface) {
    assert_eq!(LaneSurface::from_str(text).unwrap(), expected);
}

#[test]
fn test_unknown_surface_rejected() {
    assert!(LaneSurface::from_str("carpet").is_err());
}

#[test]
fn test_surface_serde_is_snake_case() {
    let json = serde_json::to_string(&LaneSurface::ProAnvilane).unwrap();
    assert_eq!(json, "\"pro_anvilane\"");
    let back: LaneSurface = serde_json::from_str("\"guardian_overlay\"").unwrap();
    assert_eq!(back, LaneSurface::GuardianOverlay);
}

#[test]
fn test_serde_names_parse_on_the_cli() {
    assert_eq!(
        serde_json::to_string(&LaneSurface::Anvilane1).unwrap(),
        "\"anvilane_1\""
    );
    for surface in get_all_surfaces() {
        let json = serde_json::to_string(&surface).unwrap();
        let key = json.trim_matches('"');
        assert_eq!(LaneSurface::from_str(key).unwrap(), surface, "{}", key);
        let back: LaneSurface = serde_json::from_str(&json).unwrap();
        assert_eq!(back, surface);
    }
}
