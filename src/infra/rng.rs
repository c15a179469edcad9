use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG: thread-local генератор `rand`, засеянный ОС один раз на поток.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        rand::thread_rng().gen_range(low..high)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed – одинаковая последовательность испытаний.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        self.inner.gen_range(low..high)
    }
}

/// Обёртка, которая запоминает каждый розыгрыш (как смещение от `low`).
/// Записанный скрипт потом проигрывается через `ScriptedRng`.
#[derive(Clone, Debug)]
pub struct RecordingRng<R> {
    inner: R,
    draws: Vec<usize>,
}

impl<R: RandomSource> RecordingRng<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            draws: Vec::new(),
        }
    }

    pub fn draws(&self) -> &[usize] {
        &self.draws
    }

    pub fn into_script(self) -> ScriptedRng {
        ScriptedRng::new(self.draws)
    }
}

impl<R: RandomSource> RandomSource for RecordingRng<R> {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        let value = self.inner.draw(low, high);
        self.draws.push(value - low);
        value
    }
}

/// Проигрывает фиксированную последовательность розыгрышей.
///
/// Каждое значение – смещение от `low`; если оно не влезает в диапазон,
/// берётся по модулю ширины. Когда скрипт кончился, возвращается `low`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new<I: IntoIterator<Item = usize>>(draws: I) -> Self {
        Self {
            script: draws.into_iter().collect(),
        }
    }

    /// Сколько розыгрышей ещё не использовано.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRng {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        let span = high - low;
        match self.script.pop_front() {
            Some(offset) => low + offset % span,
            None => low,
        }
    }
}
