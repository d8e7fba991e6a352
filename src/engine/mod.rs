//! Игровой движок: реестр игр, операции над шузом и игроками, представления.
//!
//! Высокоуровневый объект: `GameService`
//! Основные операции:
//!   - `create_game` / `delete_game` / `get_all_games` – жизненный цикл игр
//!   - `add_standard_deck` / `shuffle` – шуз
//!   - `add_player` / `remove_player` / `deal_cards` – игроки и раздача
//!   - `get_players_with_scores` / `get_deck_info` – производные представления

pub mod errors;
pub mod registry;
pub mod service;
pub mod shuffle;
pub mod views;

pub use errors::{EngineError, ErrorKind};
pub use registry::{GameRegistry, ManagedGame, SharedGame};
pub use service::GameService;
pub use shuffle::fisher_yates;
pub use views::{AddedPlayer, DeckInfo, GameSummary, GameView, PlayerScore, PlayerView};

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайный индекс из `[0, upper]` включительно.
    fn index_up_to(&mut self, upper: usize) -> usize;
}
