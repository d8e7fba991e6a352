// src/engine/registry.rs

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::domain::game::Game;
use crate::domain::GameId;
use crate::engine::{EngineError, RandomSource};

/// Одна игра + её собственный источник случайности.
///
/// RNG живёт рядом с игрой и под той же блокировкой, поэтому
/// перемешивания разных игр не конкурируют за общий генератор.
pub struct ManagedGame {
    pub game: Game,
    pub rng: Box<dyn RandomSource + Send + Sync>,
}

impl ManagedGame {
    fn new(game: Game, rng: Box<dyn RandomSource + Send + Sync>) -> Self {
        Self { game, rng }
    }
}

/// Разделяемая ссылка на игру. Мутации — под write-локом, чтения — под read-локом.
pub type SharedGame = Arc<RwLock<ManagedGame>>;

/// Реестр игр:
/// - хранит все живые игры по GameId;
/// - шардированная карта (DashMap), без глобального лока на все игры;
/// - у каждой игры свой RwLock, операции над разными играми не блокируют друг друга.
#[derive(Default)]
pub struct GameRegistry {
    games: DashMap<GameId, SharedGame>,
}

impl GameRegistry {
    /// Создать пустой реестр.
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }

    /// Создать новую пустую игру с данным id и положить её в реестр.
    ///
    /// Если игра с таким id уже была — заменяем её
    /// (генератор id гарантирует уникальность, так что на практике не случается).
    pub fn create(&self, id: GameId, rng: Box<dyn RandomSource + Send + Sync>) -> SharedGame {
        let shared = Arc::new(RwLock::new(ManagedGame::new(Game::new(id), rng)));
        self.games.insert(id, Arc::clone(&shared));
        shared
    }

    /// Найти игру.
    pub fn get(&self, id: GameId) -> Result<SharedGame, EngineError> {
        self.games
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(EngineError::GameNotFound(id))
    }

    /// Есть ли игра с таким id.
    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    /// Снимок всех игр на момент вызова (порядок не определён).
    pub fn list(&self) -> Vec<SharedGame> {
        self.games
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Удалить игру вместе со всеми игроками и шузом.
    pub fn delete(&self, id: GameId) -> Result<(), EngineError> {
        self.games
            .remove(&id)
            .map(|_| ())
            .ok_or(EngineError::GameNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
