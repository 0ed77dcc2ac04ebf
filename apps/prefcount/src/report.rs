//! Renders computed results for the command-line tool.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::domain::game_state::FinalScores;
use crate::domain::place::Place;
use crate::error::AppError;

/// Computed results plus the optional money conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub scores: FinalScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money: Option<BTreeMap<Place, f64>>,
}

impl ScoreReport {
    pub fn new(scores: FinalScores, point_cost: Option<f64>) -> Self {
        let money = point_cost.map(|cost| {
            scores
                .players
                .iter()
                .map(|p| (p.place, f64::from(p.final_score) * cost))
                .collect()
        });
        Self {
            scores,
            point_cost,
            money,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::output(e.to_string()))
    }
}

/// Plain-text table, one row per seat.
impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores = &self.scores;
        writeln!(
            f,
            "{} | divisible by N: {} | average mountain {:.2} | min mountain {}",
            scores.pref_type,
            if scores.divisible_by_n { "yes" } else { "no" },
            scores.average_mountain,
            scores.min_mountain
        )?;
        write!(
            f,
            "{:<6} {:<12} {:>8} {:>4} {:>10} {:>7} {:>7}",
            "SEAT", "NAME", "MOUNTAIN", "FIX", "FINAL MTN", "SALDO", "SCORE"
        )?;
        if self.money.is_some() {
            write!(f, " {:>10}", "MONEY")?;
        }
        writeln!(f)?;

        for p in &scores.players {
            let fix = p.mount_fix.map(|v| format!("{v:+}")).unwrap_or_default();
            write!(
                f,
                "{:<6} {:<12} {:>8} {:>4} {:>10} {:>7} {:>7}",
                p.place.name(),
                p.name,
                p.new_mountain,
                fix,
                p.final_mountain,
                p.whist_saldo,
                p.final_score
            )?;
            if let Some(amount) = self.money.as_ref().and_then(|m| m.get(&p.place)) {
                write!(f, " {amount:>10.2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
