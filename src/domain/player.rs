use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Игрок внутри конкретной игры.
///
/// Принадлежит своей игре целиком: удаляется вместе с ней,
/// а при удалении из игры его рука выбрасывается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Рука в порядке получения карт.
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Сумма очков всех карт в руке.
    pub fn score(&self) -> u32 {
        self.hand.iter().map(Card::value).sum()
    }

    pub fn take_cards(&mut self, cards: &[Card]) {
        self.hand.extend_from_slice(cards);
    }
}
