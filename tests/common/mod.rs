#![allow(dead_code)]

use ballforge::ball::{Ball, Core, Coverstock};
use ballforge::config::{SessionParams, Thresholds};
use ballforge::context::Context;
use ballforge::lanes::LaneSurface;

pub const EPS: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {} (diff {})",
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Pro Anvilane, 42 ft / 23 mL (medium), 16 mph, 300 rpm, 4.5" pin-to-PAP.
pub fn league_params() -> SessionParams {
    SessionParams {
        surface: LaneSurface::ProAnvilane,
        oil_length: 42.0,
        oil_volume: 23.0,
        speed: 16.0,
        rev_rate: 300.0,
        pin_to_pap: 4.5,
    }
}

pub fn league_context() -> Context {
    Context::from_params(&league_params(), &Thresholds::default())
}

pub fn context_with(edit: impl FnOnce(&mut SessionParams)) -> Context {
    let mut params = league_params();
    edit(&mut params);
    Context::from_params(&params, &Thresholds::default())
}

/// Five balls spanning all four chart quadrants.
pub fn quadrant_inventory() -> Vec<Ball> {
    vec![
        // Low RG / High Diff, asymmetric
        Ball::new("Early Hook", 2.46, 0.058)
            .with_core(Core::Asymmetric { int_diff: 0.018 })
            .with_coverstock(Coverstock::Solid),
        // High RG / Low Diff
        Ball::new("Skid Flip", 2.56, 0.035).with_coverstock(Coverstock::Pearl),
        // Center
        Ball::new("Benchmark", 2.50, 0.052).with_coverstock(Coverstock::Hybrid),
        // Low RG / Low Diff
        Ball::new("Control Roll", 2.47, 0.045).with_coverstock(Coverstock::Solid),
        // High RG / High Diff
        Ball::new("Length Angle", 2.53, 0.055).with_coverstock(Coverstock::Pearl),
    ]
}
