//! Доменная модель: призы, двери, итог испытания.

pub mod door;
pub mod prize;
pub mod trial;

/// Номер двери (0..door_count-1).
pub type DoorIndex = usize;

/// Классическая задача: три двери.
pub const DEFAULT_DOOR_COUNT: usize = 3;

/// Меньше трёх дверей ведущему нечего открывать.
pub const MIN_DOOR_COUNT: usize = 3;

pub use door::*;
pub use prize::*;
pub use trial::*;
