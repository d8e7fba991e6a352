use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::shoe::Shoe;
use crate::domain::{GameId, PlayerId};

/// Агрегат игры: шуз + игроки.
///
/// Игра владеет и шузом, и игроками напрямую (композиция),
/// поэтому удаление игры освобождает всё содержимое.
/// Карта всегда лежит ровно в одном месте: либо в шузе, либо в чьей-то руке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub shoe: Shoe,
    pub players: HashMap<PlayerId, Player>,
}

impl Game {
    /// Пустая игра: ни карт, ни игроков.
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            shoe: Shoe::new(),
            players: HashMap::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(&player_id)
    }

    pub fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&player_id)
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.insert(player.id, player);
    }

    /// Убрать игрока. Его карты в шуз НЕ возвращаются.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        self.players.remove(&player_id)
    }
}
