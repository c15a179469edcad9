use core::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::actions::PlayerAction;
use crate::simulation::statistics::AggregateStatistics;

/// Итог по одному действию. Проценты в диапазоне 0..100.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActionOutcome {
    pub taken: u64,
    pub won: u64,
    pub lost: u64,
    pub won_pct_of_total: f64,
    pub won_pct_on_action: f64,
    pub lost_pct_of_total: f64,
    pub lost_pct_on_action: f64,
}

impl ActionOutcome {
    fn from_statistics(stats: &AggregateStatistics, action: PlayerAction) -> Self {
        Self {
            taken: stats.total(action),
            won: stats.wins(action),
            lost: stats.losses(action),
            won_pct_of_total: stats.win_rate_overall(action) * 100.0,
            won_pct_on_action: stats.win_rate_given(action) * 100.0,
            lost_pct_of_total: stats.loss_rate_overall(action) * 100.0,
            lost_pct_on_action: stats.loss_rate_given(action) * 100.0,
        }
    }
}

/// Отчёт для вывода: текстом через `Display` или JSON через `to_json`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationReport {
    pub trials: u64,
    pub switch: ActionOutcome,
    pub stay: ActionOutcome,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub elapsed_ms: Option<u64>,
}

impl SimulationReport {
    pub fn from_statistics(stats: &AggregateStatistics) -> Self {
        Self {
            trials: stats.trials,
            switch: ActionOutcome::from_statistics(stats, PlayerAction::Switch),
            stay: ActionOutcome::from_statistics(stats, PlayerAction::Stay),
            elapsed_ms: None,
        }
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = Some(elapsed_ms);
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} DOOR SWITCHES and {} STAYS WITH ORIGINAL DOOR",
            self.switch.taken, self.stay.taken
        )?;

        for (outcome, verb, label) in [
            (&self.switch, "SWITCHING", "SWITCH"),
            (&self.stay, "STAYING on", "STAY"),
        ] {
            writeln!(
                f,
                "{} won by {} original choice ({:.2}% on total, {:.2}% on {})",
                outcome.won, verb, outcome.won_pct_of_total, outcome.won_pct_on_action, label
            )?;
            writeln!(
                f,
                "{} lost by {} original choice ({:.2}% on total, {:.2}% on {})",
                outcome.lost, verb, outcome.lost_pct_of_total, outcome.lost_pct_on_action, label
            )?;
        }

        Ok(())
    }
}
