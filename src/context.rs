use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::config::{SessionParams, Thresholds};
use crate::lanes::{FrictionBand, LaneSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LaneCondition {
    Heavy,
    Medium,
    Light,
}

impl LaneCondition {
    /// Heavy is checked first, so a long-but-dry pattern still reads heavy.
    pub fn from_oil(length_ft: f64, volume_ml: f64, t: &Thresholds) -> Self {
        if length_ft >= t.heavy_oil_length || volume_ml >= t.heavy_oil_volume {
            Self::Heavy
        } else if length_ft <= t.light_oil_length || volume_ml <= t.light_oil_volume {
            Self::Light
        } else {
            Self::Medium
        }
    }
}

/// Immutable per-request lane and bowler state. Ranges are not validated;
/// out-of-domain inputs extrapolate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub lane_surface: LaneSurface,
    pub lane_friction_index: f64,
    pub oil_length_ft: f64,
    pub oil_volume_ml: f64,
    pub lane_condition: LaneCondition,
    pub ball_speed_mph: f64,
    pub rev_rate_rpm: f64,
    pub pin_to_pap_in: f64,
}

impl Context {
    pub fn from_params(params: &SessionParams, thresholds: &Thresholds) -> Self {
        Self {
            lane_surface: params.surface,
            lane_friction_index: params.surface.friction_index(),
            oil_length_ft: params.oil_length,
            oil_volume_ml: params.oil_volume,
            lane_condition: LaneCondition::from_oil(
                params.oil_length,
                params.oil_volume,
                thresholds,
            ),
            ball_speed_mph: params.speed,
            rev_rate_rpm: params.rev_rate,
            pin_to_pap_in: params.pin_to_pap,
        }
    }

    pub fn friction_band(&self, thresholds: &Thresholds) -> FrictionBand {
        FrictionBand::from_index(self.lane_friction_index, thresholds)
    }
}
