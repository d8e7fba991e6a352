use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{GameId, PlayerId};

/// Как генерировать идентификаторы.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdMode {
    /// UUID v4 — для боевого режима.
    #[default]
    Random,
    /// Монотонные счётчики, упакованные в UUID. Удобно для тестов и реплея.
    Sequential,
}

/// Генератор ID игр и игроков.
///
/// В режиме `Sequential` у игр и игроков отдельные счётчики,
/// а старшие 64 бита UUID различают тип сущности, поэтому
/// id игры никогда не совпадёт с id игрока.
#[derive(Debug)]
pub struct IdGenerator {
    mode: IdMode,
    game_counter: AtomicU64,
    player_counter: AtomicU64,
}

const GAME_TAG: u128 = 0x6761_6d65 << 64;
const PLAYER_TAG: u128 = 0x706c_6179 << 64;

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new(mode: IdMode) -> Self {
        Self {
            mode,
            game_counter: AtomicU64::new(1),
            player_counter: AtomicU64::new(1),
        }
    }

    pub fn mode(&self) -> IdMode {
        self.mode
    }

    #[inline]
    pub fn next_game_id(&self) -> GameId {
        GameId::from_uuid(self.next_uuid(&self.game_counter, GAME_TAG))
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        PlayerId::from_uuid(self.next_uuid(&self.player_counter, PLAYER_TAG))
    }

    fn next_uuid(&self, counter: &AtomicU64, tag: u128) -> Uuid {
        match self.mode {
            IdMode::Random => Uuid::new_v4(),
            IdMode::Sequential => {
                let n = counter.fetch_add(1, Ordering::Relaxed);
                Uuid::from_u128(tag | u128::from(n))
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdMode::default())
    }
}
