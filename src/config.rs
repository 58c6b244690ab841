use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BallForgeError, BfResult};
use crate::lanes::LaneSurface;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub session: SessionParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub thresholds: Thresholds,
}

/// Lane and bowler inputs for one recommendation request.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    #[arg(long, default_value = "wood_new")]
    pub surface: LaneSurface,
    #[arg(long, default_value_t = 40.0)]
    pub oil_length: f64,
    #[arg(long, default_value_t = 22.0)]
    pub oil_volume: f64,
    #[arg(long, default_value_t = 16.0)]
    pub speed: f64,
    #[arg(long, default_value_t = 300.0)]
    pub rev_rate: f64,
    #[arg(long, default_value_t = 4.5)]
    pub pin_to_pap: f64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            surface: LaneSurface::WoodNew,
            oil_length: 40.0,
            oil_volume: 22.0,
            speed: 16.0,
            rev_rate: 300.0,
            pin_to_pap: 4.5,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === LANE FRICTION ===
    #[arg(long, default_value_t = 1.0)]
    pub friction_baseline: f64,
    #[arg(long, default_value_t = 0.2)]
    pub friction_damping: f64,

    // === FRESH ===
    #[arg(long, default_value_t = 2.60)]
    pub fresh_rg_ceiling: f64,
    #[arg(long, default_value_t = 50.0)]
    pub fresh_rg_weight: f64,
    #[arg(long, default_value_t = 300.0)]
    pub fresh_diff_weight: f64,
    #[arg(long, default_value_t = 30.0)]
    pub bonus_fresh_asym: f64,
    #[arg(long, default_value_t = 50.0)]
    pub bonus_fresh_solid_heavy: f64,
    #[arg(long, default_value_t = 50.0)]
    pub penalty_fresh_shiny_light: f64,

    // === TRANSITION ===
    // Peaked preference around the center, not monotonic
    #[arg(long, default_value_t = 2.50)]
    pub transition_rg_center: f64,
    #[arg(long, default_value_t = 2.55)]
    pub transition_rg_ceiling: f64,
    #[arg(long, default_value_t = 40.0)]
    pub transition_rg_weight: f64,
    #[arg(long, default_value_t = 150.0)]
    pub transition_diff_weight: f64,
    #[arg(long, default_value_t = 40.0)]
    pub bonus_transition_medium: f64,

    // === BURNED ===
    #[arg(long, default_value_t = 40.0)]
    pub burned_rg_weight: f64,
    #[arg(long, default_value_t = 0.08)]
    pub burned_diff_ceiling: f64,
    #[arg(long, default_value_t = 300.0)]
    pub burned_diff_weight: f64,
    #[arg(long, default_value_t = 80.0)]
    pub bonus_burned_shiny_light: f64,
    #[arg(long, default_value_t = 50.0)]
    pub penalty_burned_strong_light: f64,

    // === BOWLER ===
    #[arg(long, default_value_t = 17.0)]
    pub speed_fast_threshold: f64,
    #[arg(long, default_value_t = 13.0)]
    pub speed_slow_threshold: f64,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_speed_cover: f64,

    #[arg(long, default_value_t = 100.0)]
    pub rev_rate_scale: f64,
    #[arg(long, default_value_t = 5.0)]
    pub rev_diff_weight: f64,

    #[arg(long, default_value_t = 4.0)]
    pub pap_threshold: f64,
    #[arg(long, default_value_t = 50.0)]
    pub pap_diff_weight: f64,
    #[arg(long, default_value_t = 0.08)]
    pub pap_diff_ceiling: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            friction_baseline: 1.0,
            friction_damping: 0.2,

            fresh_rg_ceiling: 2.60,
            fresh_rg_weight: 50.0,
            fresh_diff_weight: 300.0,
            bonus_fresh_asym: 30.0,
            bonus_fresh_solid_heavy: 50.0,
            penalty_fresh_shiny_light: 50.0,

            transition_rg_center: 2.50,
            transition_rg_ceiling: 2.55,
            transition_rg_weight: 40.0,
            transition_diff_weight: 150.0,
            bonus_transition_medium: 40.0,

            burned_rg_weight: 40.0,
            burned_diff_ceiling: 0.08,
            burned_diff_weight: 300.0,
            bonus_burned_shiny_light: 80.0,
            penalty_burned_strong_light: 50.0,

            speed_fast_threshold: 17.0,
            speed_slow_threshold: 13.0,
            bonus_speed_cover: 10.0,
            rev_rate_scale: 100.0,
            rev_diff_weight: 5.0,
            pap_threshold: 4.0,
            pap_diff_weight: 50.0,
            pap_diff_ceiling: 0.08,
        }
    }
}

/// Classification breakpoints shared by the context, quadrant and explainer.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    // === LANE CONDITION ===
    #[arg(long, default_value_t = 45.0)]
    pub heavy_oil_length: f64,
    #[arg(long, default_value_t = 24.0)]
    pub heavy_oil_volume: f64,
    #[arg(long, default_value_t = 35.0)]
    pub light_oil_length: f64,
    #[arg(long, default_value_t = 20.0)]
    pub light_oil_volume: f64,

    // === QUADRANT CHART ===
    #[arg(long, default_value_t = 2.425)]
    pub chart_rg_min: f64,
    #[arg(long, default_value_t = 2.550)]
    pub chart_rg_max: f64,
    #[arg(long, default_value_t = 0.0425)]
    pub chart_diff_min: f64,
    #[arg(long, default_value_t = 0.0600)]
    pub chart_diff_max: f64,
    // Kept as literals: (min + max) / 2 does not land exactly on these in f64
    #[arg(long, default_value_t = 2.4875)]
    pub chart_rg_mid: f64,
    #[arg(long, default_value_t = 0.05125)]
    pub chart_diff_mid: f64,

    #[arg(long, default_value_t = 0.015)]
    pub strong_asym_int_diff: f64,

    // === EXPLAINER ===
    #[arg(long, default_value_t = 2.50)]
    pub early_roll_rg: f64,
    #[arg(long, default_value_t = 2.55)]
    pub late_roll_rg: f64,
    #[arg(long, default_value_t = 0.050)]
    pub high_flare_diff: f64,
    #[arg(long, default_value_t = 0.035)]
    pub low_flare_diff: f64,

    // === FRICTION BANDS ===
    #[arg(long, default_value_t = 1.5)]
    pub friction_high: f64,
    #[arg(long, default_value_t = 1.2)]
    pub friction_medium_high: f64,
    #[arg(long, default_value_t = 1.0)]
    pub friction_medium: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            heavy_oil_length: 45.0,
            heavy_oil_volume: 24.0,
            light_oil_length: 35.0,
            light_oil_volume: 20.0,
            chart_rg_min: 2.425,
            chart_rg_max: 2.550,
            chart_diff_min: 0.0425,
            chart_diff_max: 0.0600,
            chart_rg_mid: 2.4875,
            chart_diff_mid: 0.05125,
            strong_asym_int_diff: 0.015,
            early_roll_rg: 2.50,
            late_roll_rg: 2.55,
            high_flare_diff: 0.050,
            low_flare_diff: 0.035,
            friction_high: 1.5,
            friction_medium_high: 1.2,
            friction_medium: 1.0,
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BallForgeError::Config(format!(
                "Failed to read weights file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> BfResult<()> {
        if self.rev_rate_scale == 0.0 {
            return Err(BallForgeError::Config(
                "rev_rate_scale must be non-zero".to_string(),
            ));
        }
        if self.speed_slow_threshold >= self.speed_fast_threshold {
            return Err(BallForgeError::Config(format!(
                "speed_slow_threshold ({}) must be below speed_fast_threshold ({})",
                self.speed_slow_threshold, self.speed_fast_threshold
            )));
        }
        Ok(())
    }

    /// Re-applies only the weights the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(friction_baseline);
        update_if_present!(friction_damping);

        update_if_present!(fresh_rg_ceiling);
        update_if_present!(fresh_rg_weight);
        update_if_present!(fresh_diff_weight);
        update_if_present!(bonus_fresh_asym);
        update_if_present!(bonus_fresh_solid_heavy);
        update_if_present!(penalty_fresh_shiny_light);

        update_if_present!(transition_rg_center);
        update_if_present!(transition_rg_ceiling);
        update_if_present!(transition_rg_weight);
        update_if_present!(transition_diff_weight);
        update_if_present!(bonus_transition_medium);

        update_if_present!(burned_rg_weight);
        update_if_present!(burned_diff_ceiling);
        update_if_present!(burned_diff_weight);
        update_if_present!(bonus_burned_shiny_light);
        update_if_present!(penalty_burned_strong_light);

        update_if_present!(speed_fast_threshold);
        update_if_present!(speed_slow_threshold);
        update_if_present!(bonus_speed_cover);
        update_if_present!(rev_rate_scale);
        update_if_present!(rev_diff_weight);
        update_if_present!(pap_threshold);
        update_if_present!(pap_diff_weight);
        update_if_present!(pap_diff_ceiling);
    }
}
