use serde::{Deserialize, Serialize};

use crate::domain::DoorIndex;
use crate::engine::actions::PlayerAction;

/// Тип события в испытании.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TrialEventKind {
    /// Двери созданы, автомобиль поставлен.
    PrizePlaced { door_count: usize, car: DoorIndex },

    /// Первый выбор игрока.
    FirstChoiceMade { door: DoorIndex },

    /// Ведущий открыл дверь с козой.
    HostRevealed { door: DoorIndex },

    /// Игрок решил stay/switch, исход известен.
    Resolved {
        action: PlayerAction,
        final_door: DoorIndex,
        win: bool,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrialEvent {
    pub index: u32,
    pub kind: TrialEventKind,
}

/// Полная история одного испытания.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrialHistory {
    pub events: Vec<TrialEvent>,
}

impl TrialHistory {
    pub fn new() -> Self {
        Self { events: Vec::with_capacity(4) }
    }

    pub fn push(&mut self, kind: TrialEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(TrialEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
