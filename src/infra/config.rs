//! Конфигурация движка.
//!
//! Читается из JSON; отсутствующие поля получают значения по умолчанию,
//! так что `{}` — валидный конфиг.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infra::ids::IdMode;

/// Откуда брать случайность для перемешивания.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum RngConfig {
    /// Thread-local системный RNG.
    #[default]
    System,
    /// Детерминированный режим: игра номер n получает seed `seed + n`.
    Seeded { seed: u64 },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub rng: RngConfig,
    pub ids: IdMode,
    /// Сколько карт раздавать, если в запросе amount не указан.
    pub default_deal_amount: u32,
    /// Фильтр для tracing (`RUST_LOG` имеет приоритет).
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rng: RngConfig::System,
            ids: IdMode::Random,
            default_deal_amount: 1,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Детерминированный конфиг: seed для RNG + последовательные id.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RngConfig::Seeded { seed },
            ids: IdMode::Sequential,
            ..Self::default()
        }
    }
}
