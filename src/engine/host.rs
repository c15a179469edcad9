use crate::domain::DoorIndex;
use crate::engine::errors::EngineError;
use crate::engine::game::FirstChoiceSet;
use crate::engine::RandomSource;

/// Ведущий: всегда открывает козу, и никогда – дверь игрока.
#[derive(Clone, Copy, Debug, Default)]
pub struct Host;

impl Host {
    pub fn new() -> Self {
        Self
    }

    /// Какую дверь открыть.
    ///
    /// Если кандидат один – выбор вынужденный, RNG не трогаем.
    /// Если несколько (игрок сразу попал в автомобиль) – равномерно среди них.
    pub fn choose_door_to_reveal<R: RandomSource>(
        &self,
        game: &FirstChoiceSet,
        rng: &mut R,
    ) -> Result<DoorIndex, EngineError> {
        let candidates = game.revealable_doors();

        match candidates.as_slice() {
            [] => Err(EngineError::NoDoorToReveal),
            [only] => Ok(*only),
            many => {
                let pick = rng.next_int(0, many.len())?;
                Ok(many[pick])
            }
        }
    }
}
