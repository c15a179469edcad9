use serde::Serialize;

use crate::domain::door::Door;
use crate::domain::prize::Prize;
use crate::domain::trial::TrialResult;
use crate::domain::{DoorIndex, DEFAULT_DOOR_COUNT, MIN_DOOR_COUNT};
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;
use crate::engine::trial_history::{TrialEventKind, TrialHistory};
use crate::engine::RandomSource;

/// Раскладка призов: ровно один автомобиль, остальные козы.
/// Создаётся один раз и дальше не меняется.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DoorLayout {
    prizes: Vec<Prize>,
    car: DoorIndex,
}

impl DoorLayout {
    fn with_car_at(door_count: usize, car: DoorIndex) -> Result<Self, EngineError> {
        if door_count < MIN_DOOR_COUNT {
            return Err(EngineError::TooFewDoors {
                got: door_count,
                min: MIN_DOOR_COUNT,
            });
        }
        if car >= door_count {
            return Err(EngineError::DoorOutOfRange {
                index: car,
                door_count,
            });
        }

        let prizes = (0..door_count)
            .map(|i| if i == car { Prize::Car } else { Prize::Goat })
            .collect();

        Ok(Self { prizes, car })
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn car_index(&self) -> DoorIndex {
        self.car
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn prize(&self, index: DoorIndex) -> Result<Prize, EngineError> {
        self.check_index(index)?;
        Ok(self.prizes[index])
    }

    fn check_index(&self, index: DoorIndex) -> Result<(), EngineError> {
        if index < self.prizes.len() {
            Ok(())
        } else {
            Err(EngineError::DoorOutOfRange {
                index,
                door_count: self.prizes.len(),
            })
        }
    }

    /// Собрать вид дверей с отмеченными ролями.
    fn doors(
        &self,
        first: Option<DoorIndex>,
        host: Option<DoorIndex>,
        final_choice: Option<DoorIndex>,
    ) -> Vec<Door> {
        self.prizes
            .iter()
            .enumerate()
            .map(|(i, &prize)| Door {
                prize,
                is_first_choice: first == Some(i),
                is_host_choice: host == Some(i),
                is_final_choice: final_choice == Some(i),
            })
            .collect()
    }
}

/// Фаза 1: двери созданы, приз расставлен.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Game {
    layout: DoorLayout,
    history: TrialHistory,
}

impl Game {
    /// Классическая игра на три двери, автомобиль ставится случайно.
    pub fn new<R: RandomSource>(rng: &mut R) -> Result<Self, EngineError> {
        Self::with_doors(DEFAULT_DOOR_COUNT, rng)
    }

    pub fn with_doors<R: RandomSource>(
        door_count: usize,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        if door_count < MIN_DOOR_COUNT {
            return Err(EngineError::TooFewDoors {
                got: door_count,
                min: MIN_DOOR_COUNT,
            });
        }
        let car = rng.next_int(0, door_count)?;
        Self::with_car_at(door_count, car)
    }

    /// Принудительная расстановка – для сценариев и тестов.
    pub fn with_car_at(door_count: usize, car: DoorIndex) -> Result<Self, EngineError> {
        let layout = DoorLayout::with_car_at(door_count, car)?;

        let mut history = TrialHistory::new();
        history.push(TrialEventKind::PrizePlaced { door_count, car });

        Ok(Self { layout, history })
    }

    pub fn door_count(&self) -> usize {
        self.layout.len()
    }

    pub fn layout(&self) -> &DoorLayout {
        &self.layout
    }

    pub fn history(&self) -> &TrialHistory {
        &self.history
    }

    pub fn doors(&self) -> Vec<Door> {
        self.layout.doors(None, None, None)
    }

    /// Первый выбор игрока.
    pub fn set_first_choice(self, door: DoorIndex) -> Result<FirstChoiceSet, EngineError> {
        self.layout.check_index(door)?;

        let Game {
            layout,
            mut history,
        } = self;
        history.push(TrialEventKind::FirstChoiceMade { door });

        Ok(FirstChoiceSet {
            layout,
            first: door,
            history,
        })
    }
}

/// Фаза 2: игрок выбрал дверь, ведущий ещё ничего не открыл.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FirstChoiceSet {
    layout: DoorLayout,
    first: DoorIndex,
    history: TrialHistory,
}

impl FirstChoiceSet {
    pub fn door_count(&self) -> usize {
        self.layout.len()
    }

    pub fn layout(&self) -> &DoorLayout {
        &self.layout
    }

    pub fn first_choice(&self) -> DoorIndex {
        self.first
    }

    pub fn history(&self) -> &TrialHistory {
        &self.history
    }

    pub fn doors(&self) -> Vec<Door> {
        self.layout.doors(Some(self.first), None, None)
    }

    /// Двери, которые ведущий имеет право открыть:
    /// не выбор игрока и не автомобиль.
    pub fn revealable_doors(&self) -> Vec<DoorIndex> {
        self.layout
            .prizes()
            .iter()
            .enumerate()
            .filter(|&(i, prize)| i != self.first && !prize.is_car())
            .map(|(i, _)| i)
            .collect()
    }

    /// Ведущий открывает дверь.
    pub fn set_host_choice(self, door: DoorIndex) -> Result<HostChoiceSet, EngineError> {
        let prize = self.layout.prize(door)?;
        if door == self.first {
            return Err(EngineError::HostRevealedFirstChoice(door));
        }
        if prize.is_car() {
            return Err(EngineError::HostRevealedCar(door));
        }

        let FirstChoiceSet {
            layout,
            first,
            mut history,
        } = self;
        history.push(TrialEventKind::HostRevealed { door });

        Ok(HostChoiceSet {
            layout,
            first,
            host: door,
            history,
        })
    }
}

/// Фаза 3: коза открыта, игрок решает stay/switch.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct HostChoiceSet {
    layout: DoorLayout,
    first: DoorIndex,
    host: DoorIndex,
    history: TrialHistory,
}

impl HostChoiceSet {
    pub fn door_count(&self) -> usize {
        self.layout.len()
    }

    pub fn layout(&self) -> &DoorLayout {
        &self.layout
    }

    pub fn first_choice(&self) -> DoorIndex {
        self.first
    }

    pub fn host_choice(&self) -> DoorIndex {
        self.host
    }

    pub fn history(&self) -> &TrialHistory {
        &self.history
    }

    pub fn doors(&self) -> Vec<Door> {
        self.layout.doors(Some(self.first), Some(self.host), None)
    }

    /// Куда переходит игрок при switch.
    ///
    /// Определено только когда закрытой и не выбранной осталась ровно одна
    /// дверь (три двери, одно открытие).
    pub fn switch_target(&self) -> Result<DoorIndex, EngineError> {
        let remaining: Vec<DoorIndex> = (0..self.layout.len())
            .filter(|&i| i != self.first && i != self.host)
            .collect();

        match remaining.as_slice() {
            [only] => Ok(*only),
            other => Err(EngineError::AmbiguousSwitch(other.len())),
        }
    }

    /// Финальное решение игрока и исход.
    pub fn resolve(self, action: PlayerAction) -> Result<ResolvedGame, EngineError> {
        let final_choice = match action {
            PlayerAction::Stay => self.first,
            PlayerAction::Switch => self.switch_target()?,
        };
        let win = self.layout.prize(final_choice)?.is_car();

        let HostChoiceSet {
            layout,
            first,
            host,
            mut history,
        } = self;
        history.push(TrialEventKind::Resolved {
            action,
            final_door: final_choice,
            win,
        });

        Ok(ResolvedGame {
            layout,
            first,
            host,
            final_choice,
            action,
            win,
            history,
        })
    }
}

/// Фаза 4 (терминальная): исход известен, дальше вызывать нечего.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ResolvedGame {
    layout: DoorLayout,
    first: DoorIndex,
    host: DoorIndex,
    final_choice: DoorIndex,
    action: PlayerAction,
    win: bool,
    history: TrialHistory,
}

impl ResolvedGame {
    pub fn door_count(&self) -> usize {
        self.layout.len()
    }

    pub fn layout(&self) -> &DoorLayout {
        &self.layout
    }

    pub fn first_choice(&self) -> DoorIndex {
        self.first
    }

    pub fn host_choice(&self) -> DoorIndex {
        self.host
    }

    pub fn final_choice(&self) -> DoorIndex {
        self.final_choice
    }

    pub fn action(&self) -> PlayerAction {
        self.action
    }

    pub fn is_win(&self) -> bool {
        self.win
    }

    pub fn result(&self) -> TrialResult {
        TrialResult::new(self.action, self.win)
    }

    pub fn history(&self) -> &TrialHistory {
        &self.history
    }

    pub fn into_history(self) -> TrialHistory {
        self.history
    }

    pub fn doors(&self) -> Vec<Door> {
        self.layout
            .doors(Some(self.first), Some(self.host), Some(self.final_choice))
    }
}

/// Любая фаза испытания – для кода, которому нужен "текущий стол".
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub enum TrialPhase {
    Constructed(Game),
    FirstChoiceSet(FirstChoiceSet),
    HostChoiceSet(HostChoiceSet),
    Resolved(ResolvedGame),
}

impl TrialPhase {
    pub fn name(&self) -> &'static str {
        match self {
            TrialPhase::Constructed(_) => "constructed",
            TrialPhase::FirstChoiceSet(_) => "first_choice_set",
            TrialPhase::HostChoiceSet(_) => "host_choice_set",
            TrialPhase::Resolved(_) => "resolved",
        }
    }

    pub fn doors(&self) -> Vec<Door> {
        match self {
            TrialPhase::Constructed(g) => g.doors(),
            TrialPhase::FirstChoiceSet(g) => g.doors(),
            TrialPhase::HostChoiceSet(g) => g.doors(),
            TrialPhase::Resolved(g) => g.doors(),
        }
    }

    pub fn history(&self) -> &TrialHistory {
        match self {
            TrialPhase::Constructed(g) => g.history(),
            TrialPhase::FirstChoiceSet(g) => g.history(),
            TrialPhase::HostChoiceSet(g) => g.history(),
            TrialPhase::Resolved(g) => g.history(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TrialPhase::Resolved(_))
    }
}

impl From<Game> for TrialPhase {
    fn from(g: Game) -> Self {
        TrialPhase::Constructed(g)
    }
}

impl From<FirstChoiceSet> for TrialPhase {
    fn from(g: FirstChoiceSet) -> Self {
        TrialPhase::FirstChoiceSet(g)
    }
}

impl From<HostChoiceSet> for TrialPhase {
    fn from(g: HostChoiceSet) -> Self {
        TrialPhase::HostChoiceSet(g)
    }
}

impl From<ResolvedGame> for TrialPhase {
    fn from(g: ResolvedGame) -> Self {
        TrialPhase::Resolved(g)
    }
}
