use ballforge::config::Thresholds;
use ballforge::quadrant::{classify, on_chart, Band, Symmetry};
use rstest::rstest;

#[rstest]
#[case(2.46, 0.058, "Low RG / High Diff", "Early Roll, Heavy Oil")]
#[case(2.56, 0.035, "High RG / Low Diff", "Later Roll, Light Oil")]
#[case(2.47, 0.045, "Low RG / Low Diff", "Early Roll, Light Oil")]
#[case(2.53, 0.055, "High RG / High Diff", "Later Roll, Heavy Oil")]
// Exactly on the midpoints: RG goes Low, Diff goes High
#[case(2.4875, 0.05125, "Low RG / High Diff", "Early Roll, Heavy Oil")]
#[case(2.4876, 0.05124, "High RG / Low Diff", "Later Roll, Light Oil")]
// Chart corners
#[case(2.55, 0.060, "High RG / High Diff", "Later Roll, Heavy Oil")]
#[case(2.425, 0.0425, "Low RG / Low Diff", "Early Roll, Light Oil")]
fn test_quadrant_labels(
    #[case] rg: f64,
    #[case] diff: f64,
    #[case] label: &str,
    #[case] ideal: &str,
) {
    let q = classify(rg, diff, None, &Thresholds::default());
    assert_eq!(q.label(), label);
    assert_eq!(q.ideal_conditions(), ideal);
    assert_eq!(q.symmetry, Symmetry::Symmetric);
}

#[rstest]
#[case(None, Symmetry::Symmetric)]
#[case(Some(0.005), Symmetry::Symmetric)]
#[case(Some(0.015), Symmetry::Symmetric)]
#[case(Some(0.016), Symmetry::Asymmetric)]
#[case(Some(0.030), Symmetry::Asymmetric)]
fn test_asymmetric_tag(#[case] int_diff: Option<f64>, #[case] expected: Symmetry) {
    let q = classify(2.50, 0.050, int_diff, &Thresholds::default());
    assert_eq!(q.symmetry, expected);
}

#[test]
fn test_display_includes_tag() {
    let q = classify(2.47, 0.056, Some(0.018), &Thresholds::default());
    assert_eq!(q.rg, Band::Low);
    assert_eq!(q.diff, Band::High);
    assert_eq!(
        q.to_string(),
        "Low RG / High Diff (Early Roll, Heavy Oil) [Asymmetric]"
    );
}

#[test]
fn test_off_chart_balls_still_classify() {
    let t = Thresholds::default();
    assert!(!on_chart(2.60, 0.030, &t));
    let q = classify(2.60, 0.030, None, &t);
    assert_eq!(q.label(), "High RG / Low Diff");

    assert!(!on_chart(2.40, 0.070, &t));
    assert_eq!(classify(2.40, 0.070, None, &t).label(), "Low RG / High Diff");
}

#[rstest]
#[case(2.425, 0.0425, true)]
#[case(2.550, 0.0600, true)]
#[case(2.50, 0.050, true)]
#[case(2.424, 0.050, false)]
#[case(2.50, 0.0601, false)]
fn test_chart_window(#[case] rg: f64, #[case] diff: f64, #[case] expected: bool) {
    assert_eq!(on_chart(rg, diff, &Thresholds::default()), expected);
}

#[test]
fn test_custom_midpoints() {
    let t = Thresholds {
        chart_rg_mid: 2.52,
        ..Default::default()
    };
    assert_eq!(classify(2.50, 0.050, None, &t).rg, Band::Low);
    assert_eq!(classify(2.50, 0.050, None, &Thresholds::default()).rg, Band::High);
}
