use serde::{Deserialize, Serialize};

use super::Role;

/// Per-term breakdown of one (ball, role) score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub role: Role,
    pub total: f64,

    pub friction_adjustment: f64,

    // Role Terms
    pub rg_term: f64,
    pub diff_term: f64,
    pub asym_term: f64,      // Fresh only
    pub condition_term: f64, // Cover x lane condition bonuses and penalties

    // Universal Terms
    pub speed_term: f64,
    pub rev_term: f64,
    pub pap_term: f64,
}

impl ScoreDetails {
    pub fn new(role: Role, friction_adjustment: f64) -> Self {
        Self {
            role,
            total: 0.0,
            friction_adjustment,
            rg_term: 0.0,
            diff_term: 0.0,
            asym_term: 0.0,
            condition_term: 0.0,
            speed_term: 0.0,
            rev_term: 0.0,
            pap_term: 0.0,
        }
    }

    pub fn role_terms(&self) -> f64 {
        self.rg_term + self.diff_term + self.asym_term + self.condition_term
    }

    pub fn universal_terms(&self) -> f64 {
        self.speed_term + self.rev_term + self.pap_term
    }
}

/// The three role scores of one ball, stored apart from the ball itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleScores {
    pub fresh: f64,
    pub transition: f64,
    pub burned: f64,
}

impl RoleScores {
    pub fn get(&self, role: Role) -> f64 {
        match role {
            Role::Fresh => self.fresh,
            Role::Transition => self.transition,
            Role::Burned => self.burned,
        }
    }

    pub fn set(&mut self, role: Role, score: f64) {
        match role {
            Role::Fresh => self.fresh = score,
            Role::Transition => self.transition = score,
            Role::Burned => self.burned = score,
        }
    }

    /// Highest of the three; used to rank balls that were not picked.
    pub fn best(&self) -> f64 {
        self.fresh.max(self.transition).max(self.burned)
    }
}
