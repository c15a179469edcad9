//! Инфраструктура вокруг движка:
//! - RNG-реализации (системный, детерминированный, запись/реплей);
//! - инициализация логирования.

pub mod logging;
pub mod rng;

pub use logging::init_tracing;
pub use rng::*;
