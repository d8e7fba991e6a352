use serde::{Deserialize, Serialize};

use super::commands::{GameRef, PlayerRef};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// GET /games
    ListGames,

    /// GET /games/{id}
    GetGame(GameRef),

    /// GET /games/{id}/players/{pid}/cards
    GetPlayerHand(PlayerRef),

    /// GET /games/{id}/players
    GetPlayersWithScores(GameRef),

    /// GET /games/{id}/deck
    GetDeckInfo(GameRef),
}
