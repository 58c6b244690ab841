use serde::{Deserialize, Serialize};
use tracing::info;

use crate::arsenal::{self, Arsenal};
use crate::ball::Ball;
use crate::config::Config;
use crate::context::{Context, LaneCondition};
use crate::error::BfResult;
use crate::explain::explain;
use crate::inventory::{Inventory, Rejection};
use crate::lanes::FrictionBand;
use crate::quadrant::classify;
use crate::scorer::{Role, RoleScores, Scorer};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LaneSummary {
    pub surface: String,
    pub description: String,
    pub effect: String,
    pub friction_index: f64,
    pub friction_band: FrictionBand,
    pub lane_condition: LaneCondition,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BallReport {
    pub name: String,
    pub rg: f64,
    pub diff: f64,
    pub int_diff: Option<f64>,
    pub coverstock: Option<String>,
    pub coverstock_type: String,
    pub image: Option<String>,
    pub quadrant: String,
    pub ideal_conditions: String,
    pub expected_roll: String,
    pub scores: RoleScores,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PickReport {
    pub role: Role,
    pub label: String,
    pub score: f64,
    pub repeated: bool,
    pub ball: BallReport,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub lane: LaneSummary,
    pub picks: Vec<PickReport>,
    pub also_considered: Vec<BallReport>,
    pub rejected: Vec<Rejection>,
}

/// Runs the whole pipeline: context, scores, greedy arsenal, annotations.
pub fn recommend(inventory: &Inventory, config: &Config) -> BfResult<Recommendation> {
    let ctx = Context::from_params(&config.session, &config.thresholds);
    let scorer = Scorer::new(config.weights.clone());

    info!(
        "Scoring {} balls on {} ({} oil, friction {:.2})",
        inventory.len(),
        ctx.lane_surface,
        ctx.lane_condition,
        ctx.lane_friction_index
    );

    let scores = scorer.score_inventory(&inventory.balls, &ctx);
    let arsenal: Arsenal = arsenal::select(&scores)?;

    let describe = |idx: usize| ball_report(&inventory.balls[idx], scores[idx], &ctx, config);

    let picks = arsenal
        .picks
        .iter()
        .map(|p| PickReport {
            role: p.role,
            label: p.role.label().to_string(),
            score: p.score,
            repeated: p.repeated,
            ball: describe(p.ball),
        })
        .collect();

    let also_considered = arsenal
        .also_considered
        .iter()
        .map(|c| describe(c.ball))
        .collect();

    Ok(Recommendation {
        lane: LaneSummary {
            surface: ctx.lane_surface.to_string(),
            description: ctx.lane_surface.description().to_string(),
            effect: ctx.lane_surface.effect().to_string(),
            friction_index: ctx.lane_friction_index,
            friction_band: ctx.friction_band(&config.thresholds),
            lane_condition: ctx.lane_condition,
        },
        picks,
        also_considered,
        rejected: inventory.rejected.clone(),
    })
}

pub fn ball_report(ball: &Ball, scores: RoleScores, ctx: &Context, config: &Config) -> BallReport {
    let quadrant = classify(ball.rg, ball.diff, ball.core.int_diff(), &config.thresholds);
    BallReport {
        name: ball.name.clone(),
        rg: ball.rg,
        diff: ball.diff,
        int_diff: ball.core.int_diff(),
        coverstock: ball.coverstock_name.clone(),
        coverstock_type: ball.coverstock.to_string(),
        image: ball.image.clone(),
        quadrant: quadrant.to_string(),
        ideal_conditions: quadrant.ideal_conditions().to_string(),
        expected_roll: explain(ball, ctx, &config.thresholds).to_string(),
        scores,
    }
}
