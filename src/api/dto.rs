use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::card::Card;
use crate::engine::views::{AddedPlayer, DeckInfo, GameSummary, GameView, PlayerScore};

/// HTTP-статусы, которые отдаёт адаптер.
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const NO_CONTENT: u16 = 204;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Создана новая игра (201 + полное состояние).
    GameCreated(GameView),

    /// Успешно, тело пустое (200).
    Ok,

    /// Успешно, без контента (204).
    NoContent,

    /// Шуз очищен (200 + сколько карт выброшено).
    ShoeCleared { removed: usize },

    /// Добавлен игрок (201).
    PlayerAdded(AddedPlayer),

    /// Розданы карты (201).
    CardsDealt(Vec<Card>),
}

impl CommandResponse {
    pub fn status(&self) -> u16 {
        match self {
            CommandResponse::GameCreated(_)
            | CommandResponse::PlayerAdded(_)
            | CommandResponse::CardsDealt(_) => status::CREATED,
            CommandResponse::Ok | CommandResponse::ShoeCleared { .. } => status::OK,
            CommandResponse::NoContent => status::NO_CONTENT,
        }
    }

    /// JSON-тело ответа (`Null` — тела нет).
    pub fn body(&self) -> Value {
        match self {
            CommandResponse::GameCreated(view) => to_value(view),
            CommandResponse::Ok | CommandResponse::NoContent => Value::Null,
            CommandResponse::ShoeCleared { removed } => serde_json::json!({ "removed": removed }),
            CommandResponse::PlayerAdded(added) => to_value(added),
            CommandResponse::CardsDealt(cards) => to_value(cards),
        }
    }
}

/// Результат запроса "только чтение". Всегда 200.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Games(Vec<GameSummary>),
    Game(GameView),
    Cards(Vec<Card>),
    Scores(Vec<PlayerScore>),
    Deck(DeckInfo),
}

impl QueryResponse {
    pub fn status(&self) -> u16 {
        status::OK
    }

    pub fn body(&self) -> Value {
        match self {
            QueryResponse::Games(games) => to_value(games),
            QueryResponse::Game(view) => to_value(view),
            QueryResponse::Cards(cards) => to_value(cards),
            QueryResponse::Scores(scores) => to_value(scores),
            QueryResponse::Deck(info) => to_value(info),
        }
    }
}

/// Тело ошибки: `{"error": "..."}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Готовый ответ для транспорта: статус + JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

// Все DTO здесь — обычные структуры с derive(Serialize), их сериализация
// в Value не падает (ключи карт — строки или unit-варианты enum).
fn to_value<T: Serialize>(v: &T) -> Value {
    serde_json::to_value(v).unwrap_or(Value::Null)
}
