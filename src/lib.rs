//! Симуляция задачи Монти Холла методом Монте-Карло.
//!
//! Игра на три двери повторяется много раз; для каждого испытания
//! записывается, что выбрал игрок (stay/switch) и выиграл ли он.
//! Потом по всем испытаниям считаются доли побед.

pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod simulation;

pub use config::Config;
pub use domain::{Door, DoorIndex, Prize, TrialResult};
pub use engine::{EngineError, Game, Host, Player, PlayerAction, RandomSource};
pub use simulation::{
    play_trial, AggregateStatistics, Simulation, SimulationError, SimulationReport,
    SimulationRun, TrialOverrides,
};
