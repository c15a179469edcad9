//! Конфигурация запуска из окружения (и `.env`, если он есть).
//!
//! Переменные:
//!   - `MONTY_HALL_TRIALS` – число испытаний (> 0), по умолчанию 10 000 000
//!   - `MONTY_HALL_SEED` – u64 seed; без него используется системный RNG
//!   - `MONTY_HALL_REPORT` – `text` | `json`
//!   - `LOG_FORMAT` – `text` | `json`

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TRIALS: usize = 10_000_000;

pub const TRIALS_VAR: &str = "MONTY_HALL_TRIALS";
pub const SEED_VAR: &str = "MONTY_HALL_SEED";
pub const REPORT_VAR: &str = "MONTY_HALL_REPORT";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: ожидалось целое число, получено {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{} должно быть больше нуля", TRIALS_VAR)]
    ZeroTrials,

    #[error("{var}: неизвестный формат {value:?} (ожидалось text или json)")]
    UnknownFormat { var: &'static str, value: String },
}

/// Формат итогового отчёта в stdout.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Формат логов в stderr.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn parse_format(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("json") {
        Some(true)
    } else if s.eq_ignore_ascii_case("text") {
        Some(false)
    } else {
        None
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_format(s) {
            Some(true) => Ok(ReportFormat::Json),
            Some(false) => Ok(ReportFormat::Text),
            None => Err(ConfigError::UnknownFormat {
                var: REPORT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_format(s) {
            Some(true) => Ok(LogFormat::Json),
            Some(false) => Ok(LogFormat::Text),
            None => Err(ConfigError::UnknownFormat {
                var: LOG_FORMAT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub trials: usize,
    /// None – системный RNG, Some – воспроизводимый прогон.
    pub seed: Option<u64>,
    pub report_format: ReportFormat,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            report_format: ReportFormat::Text,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Прочитать `.env` (если есть) и переменные окружения.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Разбор из произвольного источника ключей (удобно в тестах).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let trials = match get(TRIALS_VAR) {
            Some(raw) => parse_number::<usize>(TRIALS_VAR, raw)?,
            None => DEFAULT_TRIALS,
        };
        if trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }

        let seed = get(SEED_VAR)
            .map(|raw| parse_number::<u64>(SEED_VAR, raw))
            .transpose()?;

        let report_format = get(REPORT_VAR)
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();

        let log_format = get(LOG_FORMAT_VAR)
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            trials,
            seed,
            report_format,
            log_format,
        })
    }
}

fn parse_number<T: FromStr>(var: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.replace('_', "")
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn parses_all_variables() {
        let cfg = Config::from_lookup(lookup(&[
            (TRIALS_VAR, "1_000"),
            (SEED_VAR, "42"),
            (REPORT_VAR, "JSON"),
            (LOG_FORMAT_VAR, "json"),
        ]))
        .unwrap();

        assert_eq!(cfg.trials, 1000);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.report_format, ReportFormat::Json);
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = Config::from_lookup(lookup(&[(TRIALS_VAR, "  "), (SEED_VAR, "")])).unwrap();
        assert_eq!(cfg.trials, DEFAULT_TRIALS);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn rejects_zero_trials() {
        let err = Config::from_lookup(lookup(&[(TRIALS_VAR, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTrials);
    }

    #[test]
    fn rejects_garbage() {
        let err = Config::from_lookup(lookup(&[(SEED_VAR, "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: SEED_VAR, .. }));

        let err = Config::from_lookup(lookup(&[(REPORT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormat { var: REPORT_VAR, .. }));
    }
}
