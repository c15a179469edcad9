use core::fmt;

use serde::{Deserialize, Serialize};

/// Решение игрока после того, как ведущий открыл дверь.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Остаться на первой двери.
    Stay,
    /// Перейти на оставшуюся закрытую дверь.
    Switch,
}

impl PlayerAction {
    pub const ALL: [PlayerAction; 2] = [PlayerAction::Stay, PlayerAction::Switch];

    /// Противоположное действие (для контрфактических проверок).
    pub fn opposite(self) -> Self {
        match self {
            PlayerAction::Stay => PlayerAction::Switch,
            PlayerAction::Switch => PlayerAction::Stay,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Stay => write!(f, "STAY"),
            PlayerAction::Switch => write!(f, "SWITCH"),
        }
    }
}
