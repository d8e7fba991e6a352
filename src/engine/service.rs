// src/engine/service.rs

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, instrument};

use crate::domain::card::Card;
use crate::domain::player::Player;
use crate::domain::shoe::Shoe;
use crate::domain::{GameId, PlayerId};
use crate::engine::registry::{GameRegistry, SharedGame};
use crate::engine::shuffle::fisher_yates;
use crate::engine::views::{
    scores_descending, AddedPlayer, DeckInfo, GameSummary, GameView, PlayerScore,
};
use crate::engine::{EngineError, RandomSource};
use crate::infra::config::{EngineConfig, RngConfig};
use crate::infra::ids::IdGenerator;
use crate::infra::rng::{DeterministicRng, SystemRng};

/// Игровой сервис: все доменные операции поверх реестра игр.
///
/// Каждая операция:
/// 1) находит игру в реестре (иначе `GameNotFound`);
/// 2) берёт лок этой игры (write для мутаций, read для представлений);
/// 3) выполняет короткую синхронную критическую секцию.
///
/// Глобального лока нет: операции над разными играми не конкурируют.
pub struct GameService {
    registry: GameRegistry,
    ids: IdGenerator,
    config: EngineConfig,
    /// Сколько игр уже создано — нужен для выведения seed в детерминированном режиме.
    games_created: AtomicU64,
}

impl GameService {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            registry: GameRegistry::new(),
            ids: IdGenerator::new(config.ids),
            config,
            games_created: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    fn new_rng(&self, game_index: u64) -> Box<dyn RandomSource + Send + Sync> {
        match self.config.rng {
            RngConfig::System => Box::new(SystemRng),
            RngConfig::Seeded { seed } => {
                Box::new(DeterministicRng::from_seed(seed.wrapping_add(game_index)))
            }
        }
    }

    fn player_not_found(game_id: GameId, player_id: PlayerId) -> EngineError {
        EngineError::PlayerNotFound { game_id, player_id }
    }

    // -------------------------------------------------------------------------
    // Жизненный цикл игр
    // -------------------------------------------------------------------------

    /// Создать пустую игру. Никогда не падает.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> GameView {
        let id = self.ids.next_game_id();
        let index = self.games_created.fetch_add(1, Ordering::Relaxed);
        let shared = self.registry.create(id, self.new_rng(index));
        info!(game_id = %id, "game created");

        let guard = shared.read();
        GameView::from(&guard.game)
    }

    /// Полное состояние игры.
    #[instrument(skip(self))]
    pub fn get_game(&self, game_id: GameId) -> Result<GameView, EngineError> {
        let shared = self.registry.get(game_id)?;
        let guard = shared.read();
        Ok(GameView::from(&guard.game))
    }

    /// Удалить игру вместе с игроками и шузом.
    #[instrument(skip(self))]
    pub fn delete_game(&self, game_id: GameId) -> Result<(), EngineError> {
        self.registry.delete(game_id)?;
        info!(game_id = %game_id, "game deleted");
        Ok(())
    }

    /// Сводка по всем играм: id + количество игроков на момент вызова.
    #[instrument(skip(self))]
    pub fn get_all_games(&self) -> Vec<GameSummary> {
        // Сначала снимаем список Arc-ов, потом читаем каждую игру:
        // шард DashMap не держим, пока ждём лок игры.
        let games: Vec<SharedGame> = self.registry.list();
        games
            .iter()
            .map(|shared| GameSummary::from(&shared.read().game))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Шуз
    // -------------------------------------------------------------------------

    /// Добавить в конец шуза одну стандартную колоду (52 карты).
    #[instrument(skip(self))]
    pub fn add_standard_deck(&self, game_id: GameId) -> Result<(), EngineError> {
        let shared = self.registry.get(game_id)?;
        let mut guard = shared.write();
        guard.game.shoe.push_many(Shoe::standard_52());
        debug!(shoe_len = guard.game.shoe.len(), "standard deck added");
        Ok(())
    }

    /// Перемешать весь шуз (Фишер–Йетс). Пустой или одно-карточный шуз — no-op.
    #[instrument(skip(self))]
    pub fn shuffle(&self, game_id: GameId) -> Result<(), EngineError> {
        let shared = self.registry.get(game_id)?;
        let mut guard = shared.write();
        let managed = &mut *guard;
        fisher_yates(managed.game.shoe.as_mut_slice(), managed.rng.as_mut());
        debug!(shoe_len = managed.game.shoe.len(), "shoe shuffled");
        Ok(())
    }

    /// Выбросить все карты из шуза. Возвращает сколько карт было.
    #[instrument(skip(self))]
    pub fn clear_shoe(&self, game_id: GameId) -> Result<usize, EngineError> {
        let shared = self.registry.get(game_id)?;
        let removed = shared.write().game.shoe.clear();
        debug!(removed, "shoe cleared");
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Игроки
    // -------------------------------------------------------------------------

    /// Добавить игрока с пустой рукой. Имена могут повторяться.
    #[instrument(skip(self, name))]
    pub fn add_player(&self, game_id: GameId, name: &str) -> Result<AddedPlayer, EngineError> {
        let shared = self.registry.get(game_id)?;
        let player_id = self.ids.next_player_id();
        shared.write().game.add_player(Player::new(player_id, name));
        info!(player_id = %player_id, "player added");

        Ok(AddedPlayer {
            player_id,
            player_name: name.to_string(),
        })
    }

    /// Убрать игрока. Карты из его руки в шуз НЕ возвращаются, шуз не меняется.
    #[instrument(skip(self))]
    pub fn remove_player(&self, game_id: GameId, player_id: PlayerId) -> Result<(), EngineError> {
        let shared = self.registry.get(game_id)?;
        let removed = shared
            .write()
            .game
            .remove_player(player_id)
            .ok_or_else(|| Self::player_not_found(game_id, player_id))?;
        info!(discarded = removed.hand.len(), "player removed");
        Ok(())
    }

    /// Раздать игроку до `amount` карт с верха шуза.
    ///
    /// Если карт меньше — раздаём сколько есть (это не ошибка).
    /// Игрок не из этой игры — `PlayerNotInGame`.
    #[instrument(skip(self))]
    pub fn deal_cards(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        amount: usize,
    ) -> Result<Vec<Card>, EngineError> {
        let shared = self.registry.get(game_id)?;
        let mut guard = shared.write();
        let game = &mut guard.game;

        // Проверяем членство ДО того, как трогаем шуз.
        if game.player(player_id).is_none() {
            return Err(EngineError::PlayerNotInGame { game_id, player_id });
        }

        let dealt = game.shoe.draw_front(amount);
        if let Some(player) = game.player_mut(player_id) {
            player.take_cards(&dealt);
        }

        debug!(
            requested = amount,
            dealt = dealt.len(),
            shoe_left = game.shoe.len(),
            "cards dealt"
        );
        Ok(dealt)
    }

    /// Текущая рука игрока (снимок).
    #[instrument(skip(self))]
    pub fn get_player_hand(
        &self,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<Vec<Card>, EngineError> {
        let shared = self.registry.get(game_id)?;
        let guard = shared.read();
        guard
            .game
            .player(player_id)
            .map(|p| p.hand.clone())
            .ok_or_else(|| Self::player_not_found(game_id, player_id))
    }

    // -------------------------------------------------------------------------
    // Представления
    // -------------------------------------------------------------------------

    /// Игроки с суммой очков, по убыванию.
    #[instrument(skip(self))]
    pub fn get_players_with_scores(&self, game_id: GameId) -> Result<Vec<PlayerScore>, EngineError> {
        let shared = self.registry.get(game_id)?;
        let guard = shared.read();
        Ok(scores_descending(&guard.game))
    }

    /// Состав шуза: всего карт, по мастям, отсортированный список.
    #[instrument(skip(self))]
    pub fn get_deck_info(&self, game_id: GameId) -> Result<DeckInfo, EngineError> {
        let shared = self.registry.get(game_id)?;
        let guard = shared.read();
        Ok(DeckInfo::from(&guard.game))
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
