use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ball::{Ball, Core, Coverstock};
use crate::config::Thresholds;
use crate::context::{Context, LaneCondition};
use crate::lanes::FrictionBand;

/// "Expected roll" rationale, one clause per signal that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollExplanation {
    pub clauses: Vec<String>,
}

impl fmt::Display for RollExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.clauses.join("; ");
        let mut chars = joined.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}.", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Clause order is fixed: friction, cover, RG, Diff, core, lane condition.
pub fn explain(ball: &Ball, ctx: &Context, t: &Thresholds) -> RollExplanation {
    let mut clauses = Vec::with_capacity(6);

    let band = ctx.friction_band(t);
    clauses.push(format!(
        "{} (index {:.2}): {}",
        band.to_string().to_lowercase(),
        ctx.lane_friction_index,
        friction_note(band)
    ));

    if let Some(note) = cover_note(ball.coverstock) {
        clauses.push(note.to_string());
    }

    if ball.rg < t.early_roll_rg {
        clauses.push("low RG revs up early".to_string());
    } else if ball.rg > t.late_roll_rg {
        clauses.push("high RG saves energy for a later roll".to_string());
    }

    if ball.diff > t.high_flare_diff {
        clauses.push("high differential gives strong flare".to_string());
    } else if ball.diff < t.low_flare_diff {
        clauses.push("low differential keeps the shape controlled".to_string());
    }

    if let Core::Asymmetric { int_diff } = ball.core {
        if int_diff > t.strong_asym_int_diff {
            clauses.push("strong asymmetric core adds angularity at the breakpoint".to_string());
        } else {
            clauses.push("mildly asymmetric core sharpens the breakpoint".to_string());
        }
    }

    clauses.push(condition_note(ctx.lane_condition).to_string());

    RollExplanation { clauses }
}

fn friction_note(band: FrictionBand) -> &'static str {
    match band {
        FrictionBand::High => "expect an early read",
        FrictionBand::MediumHigh => "expect a steady read",
        FrictionBand::Medium => "balanced skid and hook",
        FrictionBand::Low => "expect extra skid through the fronts",
    }
}

fn cover_note(cover: Coverstock) -> Option<&'static str> {
    match cover {
        Coverstock::Solid => Some("solid cover grabs the fronts for a strong arc"),
        Coverstock::Hybrid => Some("hybrid cover blends midlane traction with backend"),
        Coverstock::Pearl => Some("pearl cover skids clean and snaps off the dry"),
        Coverstock::Urethane => Some("urethane cover gives a smooth, flat arc"),
        Coverstock::Unknown => None,
    }
}

fn condition_note(condition: LaneCondition) -> &'static str {
    match condition {
        LaneCondition::Heavy => "heavy oil pushes the breakpoint downlane",
        LaneCondition::Medium => "medium oil rewards a balanced motion",
        LaneCondition::Light => "light oil calls for a cleaner, weaker reaction",
    }
}
