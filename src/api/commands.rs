use serde::{Deserialize, Serialize};

use crate::domain::{GameId, PlayerId};

/// Команда — всё, что меняет состояние.
///
/// Внешний адаптер (HTTP и т.п.) превращает запрос в `Command`
/// и отдаёт её в `api::handle_request`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// POST /games
    CreateGame,

    /// DELETE /games/{id}
    DeleteGame(GameRef),

    /// POST /games/{id}/add-deck
    AddDeck(GameRef),

    /// POST /games/{id}/shuffle
    Shuffle(GameRef),

    /// Очистить шуз целиком.
    ClearShoe(GameRef),

    /// POST /games/{id}/players
    AddPlayer(AddPlayerCommand),

    /// DELETE /games/{id}/players/{pid}
    RemovePlayer(PlayerRef),

    /// POST /games/{id}/deal-cards
    DealCards(DealCardsCommand),
}

/// Ссылка на игру.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRef {
    pub game_id: GameId,
}

/// Ссылка на игрока внутри игры.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub game_id: GameId,
    pub player_id: PlayerId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayerCommand {
    pub game_id: GameId,
    pub name: String,
}

/// Раздача карт.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealCardsCommand {
    pub game_id: GameId,
    pub player_id: PlayerId,
    /// Если не указано — берём `default_deal_amount` из конфига.
    /// Ноль и отрицательные значения раздают 0 карт.
    #[serde(default)]
    pub amount: Option<i64>,
}

impl DealCardsCommand {
    /// Количество карт к раздаче с учётом значения по умолчанию.
    pub fn effective_amount(&self, default_amount: u32) -> usize {
        match self.amount {
            Some(n) => usize::try_from(n).unwrap_or(0),
            None => default_amount as usize,
        }
    }
}
