//! Прогон N независимых испытаний и агрегирование результатов.
//!
//! Одно испытание: `Game` → первый выбор → ведущий открывает козу →
//! stay/switch → `TrialResult`. Между испытаниями общий только RNG.

pub mod report;
pub mod statistics;

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::domain::trial::TrialResult;
use crate::domain::{DoorIndex, DEFAULT_DOOR_COUNT};
use crate::engine::{EngineError, Game, Host, PlayerAction, Player, RandomSource, ResolvedGame};

pub use report::{ActionOutcome, SimulationReport};
pub use statistics::AggregateStatistics;

/// Ошибка прогона: какое испытание сломалось и почему.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Испытание #{trial}: {source}")]
    Trial {
        trial: usize,
        #[source]
        source: EngineError,
    },
}

/// Принудительные решения для одного испытания.
/// `None` – решает RNG, как обычно.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrialOverrides {
    pub car_door: Option<DoorIndex>,
    pub first_door: Option<DoorIndex>,
    pub action: Option<PlayerAction>,
}

impl TrialOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn car_at(mut self, door: DoorIndex) -> Self {
        self.car_door = Some(door);
        self
    }

    pub fn first_choice(mut self, door: DoorIndex) -> Self {
        self.first_door = Some(door);
        self
    }

    pub fn action(mut self, action: PlayerAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Сыграть одно испытание на три двери.
pub fn play_trial<R: RandomSource>(
    rng: &mut R,
    overrides: &TrialOverrides,
) -> Result<ResolvedGame, EngineError> {
    let player = Player::new();
    let host = Host::new();

    let game = match overrides.car_door {
        Some(car) => Game::with_car_at(DEFAULT_DOOR_COUNT, car)?,
        None => Game::new(rng)?,
    };

    let first = match overrides.first_door {
        Some(door) => door,
        None => player.choose_first_door(game.door_count(), rng)?,
    };
    let game = game.set_first_choice(first)?;

    let revealed = host.choose_door_to_reveal(&game, rng)?;
    let game = game.set_host_choice(revealed)?;

    let action = player.choose_action(overrides.action, rng)?;
    game.resolve(action)
}

/// Итог прогона: все результаты по порядку + время цикла.
#[derive(Clone, Debug)]
pub struct SimulationRun {
    results: Vec<TrialResult>,
    elapsed: Duration,
}

impl SimulationRun {
    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn statistics(&self) -> AggregateStatistics {
        AggregateStatistics::from_results(&self.results)
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport::from_statistics(&self.statistics())
            .with_elapsed_ms(self.elapsed.as_millis() as u64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Simulation {
    trials: usize,
}

impl Simulation {
    pub fn new(trials: usize) -> Self {
        Self { trials }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn run<R: RandomSource>(&self, rng: &mut R) -> Result<SimulationRun, SimulationError> {
        info!(trials = self.trials, "starting simulation");

        let started = Instant::now();
        let mut results = Vec::with_capacity(self.trials);
        let overrides = TrialOverrides::default();

        for trial in 0..self.trials {
            let resolved = play_trial(rng, &overrides)
                .map_err(|source| SimulationError::Trial { trial, source })?;

            trace!(
                trial,
                first = resolved.first_choice(),
                host = resolved.host_choice(),
                action = %resolved.action(),
                win = resolved.is_win(),
                "trial resolved"
            );
            results.push(resolved.result());
        }

        let elapsed = started.elapsed();
        info!(
            trials = self.trials,
            elapsed_ms = elapsed.as_millis() as u64,
            "simulation finished"
        );
        debug!(results = results.len(), "results collected");

        Ok(SimulationRun { results, elapsed })
    }
}
