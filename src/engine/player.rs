use crate::domain::DoorIndex;
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Игрок без стратегии: всё решает монетка.
#[derive(Clone, Copy, Debug, Default)]
pub struct Player;

impl Player {
    pub fn new() -> Self {
        Self
    }

    /// Первый выбор – равномерно по всем дверям.
    pub fn choose_first_door<R: RandomSource>(
        &self,
        door_count: usize,
        rng: &mut R,
    ) -> Result<DoorIndex, EngineError> {
        rng.next_int(0, door_count)
    }

    /// Stay/switch 50 на 50. `forced` возвращается как есть и RNG не трогает.
    pub fn choose_action<R: RandomSource>(
        &self,
        forced: Option<PlayerAction>,
        rng: &mut R,
    ) -> Result<PlayerAction, EngineError> {
        if let Some(action) = forced {
            return Ok(action);
        }

        Ok(if rng.next_int(0, 2)? == 0 {
            PlayerAction::Stay
        } else {
            PlayerAction::Switch
        })
    }
}
