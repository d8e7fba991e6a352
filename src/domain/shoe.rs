use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Шуз — общая колода игры. В домене это просто упорядоченный список карт:
/// фронт очереди = следующая карта на раздачу.
/// Перемешивание делает engine (через `RandomSource`), НЕ здесь.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Стандартная 52-карточная колода в каноническом порядке:
    /// Hearts A..K, Spades A..K, Clubs A..K, Diamonds A..K.
    pub fn standard_52() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Положить карты в конец шуза (в переданном порядке).
    pub fn push_many<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Взять одну карту с верха шуза.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Взять до `n` карт с верха шуза. Если карт меньше — отдаём сколько есть.
    pub fn draw_front(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        self.cards.drain(..take).collect()
    }

    /// Очистить шуз. Возвращает количество выброшенных карт.
    pub fn clear(&mut self) -> usize {
        let removed = self.cards.len();
        self.cards.clear();
        removed
    }

    /// Непрерывный срез всех карт — для перемешивания на месте.
    pub fn as_mut_slice(&mut self) -> &mut [Card] {
        self.cards.make_contiguous()
    }

    /// Снимок карт в текущем порядке.
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Количество карт по мастям. Все четыре масти присутствуют всегда,
    /// даже с нулём.
    pub fn suit_counts(&self) -> BTreeMap<Suit, usize> {
        let mut counts: BTreeMap<Suit, usize> = Suit::ALL.iter().map(|s| (*s, 0)).collect();
        for card in &self.cards {
            *counts.entry(card.suit).or_default() += 1;
        }
        counts
    }

    /// Карты, отсортированные по масти (канонический порядок),
    /// внутри масти — по рангу по убыванию (KING ... ACE).
    pub fn sorted_cards(&self) -> Vec<Card> {
        let mut sorted = self.to_vec();
        sorted.sort_by(|a, b| a.suit.cmp(&b.suit).then_with(|| b.rank.cmp(&a.rank)));
        sorted
    }
}
