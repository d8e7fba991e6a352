use crate::domain::{GameId, PlayerId};

use thiserror::Error;

/// Категория ошибки — то, во что её переводит внешний адаптер (404 / 400).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
}

/// Ошибки игрового движка.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Game {0} not found")]
    GameNotFound(GameId),

    #[error("Player {player_id} not found in game {game_id}")]
    PlayerNotFound { game_id: GameId, player_id: PlayerId },

    /// Раздача игроку, которого нет в игре.
    #[error("Player {player_id} is not a member of game {game_id}")]
    PlayerNotInGame { game_id: GameId, player_id: PlayerId },
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::GameNotFound(_) | EngineError::PlayerNotFound { .. } => {
                ErrorKind::NotFound
            }
            EngineError::PlayerNotInGame { .. } => ErrorKind::InvalidArgument,
        }
    }
}
