use crate::domain::DoorIndex;

use thiserror::Error;

/// Ошибки игрового движка.
///
/// Переходы между фазами проверяются типами (`Game` → `FirstChoiceSet` →
/// `HostChoiceSet` → `ResolvedGame`), поэтому здесь только ошибки
/// аргументов и нарушения правил открытия/выбора двери.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Пустой диапазон случайных чисел: [{low}, {high})")]
    EmptyRange { low: usize, high: usize },

    #[error("Нужно минимум {min} двери, получено {got}")]
    TooFewDoors { got: usize, min: usize },

    #[error("Двери {index} не существует (всего дверей: {door_count})")]
    DoorOutOfRange { index: DoorIndex, door_count: usize },

    #[error("Ведущий не может открыть дверь {0}: это первый выбор игрока")]
    HostRevealedFirstChoice(DoorIndex),

    #[error("Ведущий не может открыть дверь {0}: за ней автомобиль")]
    HostRevealedCar(DoorIndex),

    #[error("Смена двери неоднозначна: осталось {0} закрытых дверей")]
    AmbiguousSwitch(usize),

    #[error("Ведущему нечего открыть")]
    NoDoorToReveal,
}
