use serde::{Deserialize, Serialize};

use crate::domain::trial::TrialResult;
use crate::engine::actions::PlayerAction;

/// Счётчики (действие, исход) по всем испытаниям.
/// Считаются один раз после прогона; сами результаты не трогаются.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregateStatistics {
    pub trials: u64,
    pub won_switching: u64,
    pub lost_switching: u64,
    pub won_staying: u64,
    pub lost_staying: u64,
}

impl AggregateStatistics {
    pub fn from_results(results: &[TrialResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            acc.record(r);
            acc
        })
    }

    fn record(&mut self, result: &TrialResult) {
        self.trials += 1;
        let counter = match (result.action, result.win) {
            (PlayerAction::Switch, true) => &mut self.won_switching,
            (PlayerAction::Switch, false) => &mut self.lost_switching,
            (PlayerAction::Stay, true) => &mut self.won_staying,
            (PlayerAction::Stay, false) => &mut self.lost_staying,
        };
        *counter += 1;
    }

    pub fn wins(&self, action: PlayerAction) -> u64 {
        match action {
            PlayerAction::Switch => self.won_switching,
            PlayerAction::Stay => self.won_staying,
        }
    }

    pub fn losses(&self, action: PlayerAction) -> u64 {
        match action {
            PlayerAction::Switch => self.lost_switching,
            PlayerAction::Stay => self.lost_staying,
        }
    }

    /// Сколько раз игрок выбрал это действие.
    pub fn total(&self, action: PlayerAction) -> u64 {
        self.wins(action) + self.losses(action)
    }

    pub fn switches(&self) -> u64 {
        self.total(PlayerAction::Switch)
    }

    pub fn stays(&self) -> u64 {
        self.total(PlayerAction::Stay)
    }

    /// Доля побед с этим действием среди всех испытаний.
    pub fn win_rate_overall(&self, action: PlayerAction) -> f64 {
        ratio(self.wins(action), self.trials)
    }

    /// P(win | action). 0.0, если действие ни разу не выбиралось.
    pub fn win_rate_given(&self, action: PlayerAction) -> f64 {
        ratio(self.wins(action), self.total(action))
    }

    pub fn loss_rate_overall(&self, action: PlayerAction) -> f64 {
        ratio(self.losses(action), self.trials)
    }

    pub fn loss_rate_given(&self, action: PlayerAction) -> f64 {
        ratio(self.losses(action), self.total(action))
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
