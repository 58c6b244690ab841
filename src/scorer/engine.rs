use super::signals::{analyze_signals, BallSignals};
use super::types::ScoreDetails;
use super::Role;
use crate::ball::Ball;
use crate::config::ScoringWeights;
use crate::context::Context;

/// Scores one ball for one role. Panics if the ball has a non-finite RG or
/// Diff; callers must only pass balls that survived inventory validation.
pub fn score_debug(w: &ScoringWeights, ball: &Ball, ctx: &Context, role: Role) -> ScoreDetails {
    assert!(
        ball.is_scorable(),
        "ball '{}' is not scorable (rg={}, diff={})",
        ball.name,
        ball.rg,
        ball.diff
    );

    let s = analyze_signals(ball, ctx, w);
    let mut d = ScoreDetails::new(role, s.friction_adjustment);

    match role {
        Role::Fresh => fresh_terms(&mut d, w, ball, &s),
        Role::Transition => transition_terms(&mut d, w, ball, &s),
        Role::Burned => burned_terms(&mut d, w, ball, &s),
    }
    universal_terms(&mut d, w, ball, ctx, &s);

    d.total = d.role_terms() + d.universal_terms();
    d
}

/// Low RG, high Diff, strong cover on heavy oil.
fn fresh_terms(d: &mut ScoreDetails, w: &ScoringWeights, ball: &Ball, s: &BallSignals) {
    d.rg_term = (w.fresh_rg_ceiling - ball.rg) * w.fresh_rg_weight * s.friction_adjustment;
    d.diff_term = ball.diff * w.fresh_diff_weight;
    if s.is_asym {
        d.asym_term = w.bonus_fresh_asym;
    }
    if s.is_heavy && s.is_solid {
        d.condition_term += w.bonus_fresh_solid_heavy;
    }
    if s.is_light && s.is_shiny {
        d.condition_term -= w.penalty_fresh_shiny_light;
    }
}

/// RG near the center in either direction, moderate Diff.
fn transition_terms(d: &mut ScoreDetails, w: &ScoringWeights, ball: &Ball, s: &BallSignals) {
    let distance = (w.transition_rg_center - ball.rg).abs();
    d.rg_term = (w.transition_rg_ceiling - distance) * w.transition_rg_weight * s.friction_adjustment;
    d.diff_term = ball.diff * w.transition_diff_weight;
    if s.is_medium && (s.is_hybrid || s.is_pearl) {
        d.condition_term += w.bonus_transition_medium;
    }
}

/// High RG, low Diff: the inverse of fresh.
fn burned_terms(d: &mut ScoreDetails, w: &ScoringWeights, ball: &Ball, s: &BallSignals) {
    d.rg_term = ball.rg * w.burned_rg_weight;
    d.diff_term = (w.burned_diff_ceiling - ball.diff) * w.burned_diff_weight;
    if s.is_light {
        if s.is_shiny {
            d.condition_term += w.bonus_burned_shiny_light;
        }
        if s.is_solid || s.is_asym {
            d.condition_term -= w.penalty_burned_strong_light;
        }
    }
}

fn universal_terms(
    d: &mut ScoreDetails,
    w: &ScoringWeights,
    ball: &Ball,
    ctx: &Context,
    s: &BallSignals,
) {
    // Speed bands are exclusive; nothing in between
    if s.is_fast && s.is_solid {
        d.speed_term = w.bonus_speed_cover;
    } else if s.is_slow && s.is_shiny {
        d.speed_term = w.bonus_speed_cover;
    }

    d.rev_term = (ctx.rev_rate_rpm / w.rev_rate_scale) * ball.diff * w.rev_diff_weight;

    d.pap_term = if s.is_short_pap {
        ball.diff * w.pap_diff_weight
    } else {
        (w.pap_diff_ceiling - ball.diff) * w.pap_diff_weight
    };
}
