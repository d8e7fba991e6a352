//! Инфраструктурный слой вокруг игрового движка:
//! - генерация ID;
//! - RNG-реализации для движка;
//! - конфигурация;
//! - логирование.

pub mod config;
pub mod ids;
pub mod logging;
pub mod rng;

pub use config::{ConfigError, EngineConfig, RngConfig};
pub use ids::*;
pub use logging::init_tracing;
pub use rng::*;
