use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::{BallForgeError, BfResult};
use crate::scorer::{Role, RoleScores};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub role: Role,
    /// Index into the scored inventory.
    pub ball: usize,
    pub score: f64,
    /// True when the remaining pool was empty and an earlier pick was reused.
    pub repeated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub ball: usize,
    pub scores: RoleScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arsenal {
    /// Always fresh, transition, burned.
    pub picks: Vec<Pick>,
    /// Balls not picked, best single role score first.
    pub also_considered: Vec<Candidate>,
}

impl Arsenal {
    pub fn pick(&self, role: Role) -> Option<&Pick> {
        self.picks.iter().find(|p| p.role == role)
    }
}

/// Higher first. `-0.0` and `0.0` compare equal so they keep input order.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Indices of `pool` ordered by descending score for `role`. The sort is
/// stable, so equal scores keep inventory order.
pub fn rank_for_role(scores: &[RoleScores], pool: &[usize], role: Role) -> Vec<usize> {
    let mut ranked = pool.to_vec();
    ranked.sort_by(|&a, &b| descending(scores[a].get(role), scores[b].get(role)));
    ranked
}

/// Greedy selection in role order: each role takes its best ball among those
/// not already taken. With fewer than three balls the pool runs dry and the
/// whole inventory is reopened, so a ball may serve several roles.
pub fn select(scores: &[RoleScores]) -> BfResult<Arsenal> {
    if scores.is_empty() {
        return Err(BallForgeError::EmptyInventory);
    }

    let all: Vec<usize> = (0..scores.len()).collect();
    let mut taken: Vec<usize> = Vec::with_capacity(3);
    let mut picks = Vec::with_capacity(3);

    for role in Role::iter() {
        let remaining: Vec<usize> = all.iter().copied().filter(|i| !taken.contains(i)).collect();
        let repeated = remaining.is_empty();
        let pool = if repeated { &all } else { &remaining };

        let ranked = rank_for_role(scores, pool, role);
        let best = ranked[0];
        debug!(
            "{} -> ball #{} ({:.3}){}",
            role,
            best,
            scores[best].get(role),
            if repeated { " [repeat]" } else { "" }
        );

        if !taken.contains(&best) {
            taken.push(best);
        }
        picks.push(Pick {
            role,
            ball: best,
            score: scores[best].get(role),
            repeated,
        });
    }

    let mut also_considered: Vec<Candidate> = all
        .iter()
        .copied()
        .filter(|i| !taken.contains(i))
        .map(|i| Candidate {
            ball: i,
            scores: scores[i],
        })
        .collect();
    also_considered.sort_by(|a, b| descending(a.scores.best(), b.scores.best()));

    Ok(Arsenal {
        picks,
        also_considered,
    })
}
