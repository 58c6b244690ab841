use crate::ball::{Ball, Coverstock};
use crate::config::ScoringWeights;
use crate::context::{Context, LaneCondition};

/// Boolean and derived inputs that drive every scoring term.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BallSignals {
    // Lane
    pub friction_adjustment: f64,
    pub is_heavy: bool,
    pub is_medium: bool,
    pub is_light: bool,

    // Cover
    pub is_solid: bool,
    pub is_hybrid: bool,
    pub is_pearl: bool,
    pub is_shiny: bool, // Pearl or urethane

    // Core
    pub is_asym: bool,

    // Bowler
    pub is_fast: bool,
    pub is_slow: bool,
    pub is_short_pap: bool,
}

/// `1 - (index - baseline) * damping`: damps role preference on grippy lanes.
#[inline]
pub fn friction_adjustment(lane_friction_index: f64, w: &ScoringWeights) -> f64 {
    1.0 - (lane_friction_index - w.friction_baseline) * w.friction_damping
}

pub fn analyze_signals(ball: &Ball, ctx: &Context, w: &ScoringWeights) -> BallSignals {
    BallSignals {
        friction_adjustment: friction_adjustment(ctx.lane_friction_index, w),
        is_heavy: ctx.lane_condition == LaneCondition::Heavy,
        is_medium: ctx.lane_condition == LaneCondition::Medium,
        is_light: ctx.lane_condition == LaneCondition::Light,

        is_solid: ball.coverstock == Coverstock::Solid,
        is_hybrid: ball.coverstock == Coverstock::Hybrid,
        is_pearl: ball.coverstock == Coverstock::Pearl,
        is_shiny: ball.coverstock.is_shiny(),

        is_asym: ball.core.is_asymmetric(),

        is_fast: ctx.ball_speed_mph >= w.speed_fast_threshold,
        is_slow: ctx.ball_speed_mph <= w.speed_slow_threshold,
        is_short_pap: ctx.pin_to_pap_in <= w.pap_threshold,
    }
}
