use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::Display;

use crate::config::Thresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Band {
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Symmetry {
    Symmetric,
    Asymmetric,
}

/// Position of a ball on the RG / Differential chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quadrant {
    pub rg: Band,
    pub diff: Band,
    pub symmetry: Symmetry,
}

impl Quadrant {
    /// Short label, e.g. "Low RG / High Diff".
    pub fn label(&self) -> String {
        format!("{} RG / {} Diff", self.rg, self.diff)
    }

    /// Motion the quadrant is suited to, e.g. "Early Roll, Heavy Oil".
    pub fn ideal_conditions(&self) -> &'static str {
        match (self.rg, self.diff) {
            (Band::High, Band::Low) => "Later Roll, Light Oil",
            (Band::High, Band::High) => "Later Roll, Heavy Oil",
            (Band::Low, Band::Low) => "Early Roll, Light Oil",
            (Band::Low, Band::High) => "Early Roll, Heavy Oil",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}]",
            self.label(),
            self.ideal_conditions(),
            self.symmetry
        )
    }
}

/// Splits the chart at its midpoints. An RG on the midpoint is Low, a
/// Diff on the midpoint is High. Only an intermediate differential above
/// the strong-asymmetry threshold earns the Asymmetric tag.
pub fn classify(rg: f64, diff: f64, int_diff: Option<f64>, t: &Thresholds) -> Quadrant {
    let rg_band = if rg > t.chart_rg_mid {
        Band::High
    } else {
        Band::Low
    };
    let diff_band = if diff >= t.chart_diff_mid {
        Band::High
    } else {
        Band::Low
    };
    let symmetry = match int_diff {
        Some(v) if v > t.strong_asym_int_diff => Symmetry::Asymmetric,
        _ => Symmetry::Symmetric,
    };
    Quadrant {
        rg: rg_band,
        diff: diff_band,
        symmetry,
    }
}

/// Whether the ball falls inside the plotted chart window. Balls outside
/// still classify; the window only bounds the display.
pub fn on_chart(rg: f64, diff: f64, t: &Thresholds) -> bool {
    (t.chart_rg_min..=t.chart_rg_max).contains(&rg)
        && (t.chart_diff_min..=t.chart_diff_max).contains(&diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_chart_wording() {
        let q = classify(2.52, 0.045, None, &Thresholds::default());
        assert_eq!(
            q.to_string(),
            "High RG / Low Diff (Later Roll, Light Oil) [Symmetric]"
        );
    }
}
