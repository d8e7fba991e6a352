//! Производные представления состояния игры (read-only снимки).
//!
//! Строятся под read-локом игры, поэтому никогда не видят
//! частично применённую мутацию.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Suit};
use crate::domain::game::Game;
use crate::domain::player::Player;
use crate::domain::{GameId, PlayerId};

/// Краткая сводка по игре для лобби.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: GameId,
    pub player_count: usize,
}

/// Игрок и сумма очков его руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub player_name: String,
    pub total_value: u32,
}

/// Ответ на добавление игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddedPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
}

/// Состояние нерозданной части шуза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeckInfo {
    pub total_cards: usize,
    /// Все четыре масти, даже с нулём.
    pub suit_counts: BTreeMap<Suit, usize>,
    /// По масти, внутри масти — ранг по убыванию.
    pub sorted_cards: Vec<Card>,
}

/// Игрок целиком (для полного представления игры).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
}

/// Полное состояние игры: шуз в текущем порядке и все игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: GameId,
    pub game_deck: Vec<Card>,
    pub players: Vec<PlayerView>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            hand: player.hand.clone(),
        }
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            game_deck: game.shoe.to_vec(),
            players: game.players.values().map(PlayerView::from).collect(),
        }
    }
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id,
            player_count: game.player_count(),
        }
    }
}

impl From<&Game> for DeckInfo {
    fn from(game: &Game) -> Self {
        Self {
            total_cards: game.shoe.len(),
            suit_counts: game.shoe.suit_counts(),
            sorted_cards: game.shoe.sorted_cards(),
        }
    }
}

/// Очки всех игроков, по убыванию суммы.
///
/// Сортировка стабильная; порядок при равных очках не гарантируется,
/// т.к. исходный порядок игроков в HashMap произвольный.
pub fn scores_descending(game: &Game) -> Vec<PlayerScore> {
    let mut scores: Vec<PlayerScore> = game
        .players
        .values()
        .map(|p| PlayerScore {
            player_id: p.id,
            player_name: p.name.clone(),
            total_value: p.score(),
        })
        .collect();
    scores.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    scores
}
