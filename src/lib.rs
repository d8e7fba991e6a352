//! Движок карточных игр в памяти.
//!
//! Реестр независимых игр; у каждой игры свой шуз и набор игроков.
//! Операции: колоды, перемешивание, игроки, раздача, очки, состав шуза.
//! Все операции — короткие синхронные критические секции под локом одной игры,
//! так что вызывать их можно из многих потоков одновременно.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{handle_json, handle_request, ApiReply, ApiRequest};
pub use engine::{EngineError, GameService};
pub use infra::EngineConfig;
