//! Игровой движок Монти Холла: фазы испытания, ведущий, игрок.
//!
//! Порядок одного испытания:
//!   - `Game::new` – расставить призы
//!   - `set_first_choice` – первый выбор игрока
//!   - `Host::choose_door_to_reveal` + `set_host_choice` – ведущий открывает козу
//!   - `resolve` – stay/switch и исход

pub mod actions;
pub mod board;
pub mod errors;
pub mod game;
pub mod host;
pub mod player;
pub mod trial_history;

pub use actions::PlayerAction;
pub use board::render_board;
pub use errors::EngineError;
pub use game::{DoorLayout, FirstChoiceSet, Game, HostChoiceSet, ResolvedGame, TrialPhase};
pub use host::Host;
pub use player::Player;
pub use trial_history::{TrialEvent, TrialEventKind, TrialHistory};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`, реплей по скрипту).
pub trait RandomSource {
    /// Равномерное число из `[low, high)`. Вызывающий гарантирует `low < high`.
    fn draw(&mut self, low: usize, high: usize) -> usize;

    /// Равномерное число из `[low, high)` с проверкой диапазона.
    fn next_int(&mut self, low: usize, high: usize) -> Result<usize, EngineError> {
        if high <= low {
            return Err(EngineError::EmptyRange { low, high });
        }
        Ok(self.draw(low, high))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        (**self).draw(low, high)
    }
}
