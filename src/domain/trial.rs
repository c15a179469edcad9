use serde::{Deserialize, Serialize};

use crate::engine::actions::PlayerAction;

/// Итог одного испытания. После создания не меняется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrialResult {
    pub action: PlayerAction,
    pub win: bool,
}

impl TrialResult {
    pub const fn new(action: PlayerAction, win: bool) -> Self {
        Self { action, win }
    }
}
