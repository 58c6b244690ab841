pub mod engine;
pub mod signals;
pub mod types;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::ball::Ball;
use crate::config::ScoringWeights;
use crate::context::Context;
pub use self::types::{RoleScores, ScoreDetails};

/// The three stages of a session, in the order the arsenal is picked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Fresh,
    Transition,
    Burned,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fresh => "Fresh Oil (First Ball)",
            Self::Transition => "Transition (Second Ball)",
            Self::Burned => "Burned Lanes (Third Ball)",
        }
    }
}

pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Relative suitability of `ball` for `role`. Only comparable within one
    /// role and one inventory.
    pub fn score(&self, ball: &Ball, ctx: &Context, role: Role) -> f64 {
        engine::score_debug(&self.weights, ball, ctx, role).total
    }

    /// Term-by-term breakdown of the same score.
    pub fn score_debug(&self, ball: &Ball, ctx: &Context, role: Role) -> ScoreDetails {
        engine::score_debug(&self.weights, ball, ctx, role)
    }

    pub fn score_roles(&self, ball: &Ball, ctx: &Context) -> RoleScores {
        let mut scores = RoleScores::default();
        for role in Role::iter() {
            scores.set(role, self.score(ball, ctx, role));
        }
        scores
    }

    /// Scores every ball for every role. Output index `i` belongs to `balls[i]`.
    pub fn score_inventory(&self, balls: &[Ball], ctx: &Context) -> Vec<RoleScores> {
        balls
            .par_iter()
            .map(|ball| self.score_roles(ball, ctx))
            .collect()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}
