use serde::{Deserialize, Serialize};

use crate::domain::prize::Prize;

/// Снимок одной двери в текущей фазе игры.
///
/// Door не хранится в игре как изменяемый объект: флаги вычисляются
/// из фазы (`Game`, `FirstChoiceSet`, ...), поэтому инварианты
/// "хост не открывает выбор игрока" и "игрок не выбирает открытую дверь"
/// выполняются по построению.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Door {
    pub prize: Prize,
    /// Первый выбор игрока.
    pub is_first_choice: bool,
    /// Дверь, которую открыл ведущий.
    pub is_host_choice: bool,
    /// Окончательный выбор игрока (после stay/switch).
    pub is_final_choice: bool,
}

impl Door {
    pub const fn closed(prize: Prize) -> Self {
        Self {
            prize,
            is_first_choice: false,
            is_host_choice: false,
            is_final_choice: false,
        }
    }
}
