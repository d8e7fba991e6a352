//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use card_game_engine::domain::*;
use uuid::Uuid;

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn test_game_id(n: u128) -> GameId {
    GameId::from_uuid(Uuid::from_u128(n))
}

fn test_player_id(n: u128) -> PlayerId {
    PlayerId::from_uuid(Uuid::from_u128(1_000 + n))
}

/// Очки рангов: ACE=1 ... KING=13.
#[test]
fn rank_values_match_point_table() {
    let values: Vec<u32> = Rank::ALL.iter().map(|r| r.value()).collect();
    assert_eq!(values, (1..=13).collect::<Vec<u32>>());

    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Queen.value(), 12);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(card(Suit::Spades, Rank::Queen).value(), 12);
}

/// Стандартная колода: 52 уникальные карты, декартово произведение мастей и рангов.
#[test]
fn standard_deck_is_full_cartesian_product() {
    let deck = Shoe::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)), "missing {rank:?} of {suit:?}");
        }
    }

    // Канонический порядок: масть-мажорный, внутри масти ACE..KING.
    assert_eq!(deck[0], card(Suit::Hearts, Rank::Ace));
    assert_eq!(deck[12], card(Suit::Hearts, Rank::King));
    assert_eq!(deck[13], card(Suit::Spades, Rank::Ace));
    assert_eq!(deck[51], card(Suit::Diamonds, Rank::King));
}

/// Шуз: добавление в конец, раздача с фронта.
#[test]
fn shoe_push_and_draw_from_front() {
    let mut shoe = Shoe::new();
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw_one(), None);

    shoe.push_many([
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::King),
    ]);
    shoe.push_many([card(Suit::Diamonds, Rank::Five)]);
    assert_eq!(shoe.len(), 4);

    assert_eq!(shoe.draw_one(), Some(card(Suit::Clubs, Rank::Two)));
    assert_eq!(
        shoe.draw_front(2),
        vec![card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::King)]
    );

    // Просим больше, чем есть — получаем сколько есть.
    assert_eq!(shoe.draw_front(10), vec![card(Suit::Diamonds, Rank::Five)]);
    assert!(shoe.draw_front(3).is_empty());
    assert!(shoe.draw_front(0).is_empty());
}

#[test]
fn shoe_clear_reports_removed_count() {
    let mut shoe = Shoe::new();
    shoe.push_many(Shoe::standard_52());
    assert_eq!(shoe.clear(), 52);
    assert!(shoe.is_empty());
    assert_eq!(shoe.clear(), 0);
}

/// suit_counts: все четыре масти, даже с нулём.
#[test]
fn suit_counts_always_has_four_suits() {
    let empty = Shoe::new();
    let counts = empty.suit_counts();
    assert_eq!(counts.len(), 4);
    assert!(counts.values().all(|c| *c == 0));

    let mut shoe = Shoe::new();
    shoe.push_many([
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Jack),
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Ace),
    ]);
    let counts = shoe.suit_counts();
    assert_eq!(counts[&Suit::Hearts], 2);
    assert_eq!(counts[&Suit::Spades], 1);
    assert_eq!(counts[&Suit::Clubs], 1);
    assert_eq!(counts[&Suit::Diamonds], 0);
}

/// sorted_cards: по масти, внутри масти ранг по убыванию; сам шуз не меняется.
#[test]
fn sorted_cards_by_suit_then_rank_descending() {
    let mut shoe = Shoe::new();
    let original = vec![
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Jack),
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Ace),
    ];
    shoe.push_many(original.clone());

    assert_eq!(
        shoe.sorted_cards(),
        vec![
            card(Suit::Hearts, Rank::King),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Jack),
            card(Suit::Clubs, Rank::Two),
        ]
    );
    assert_eq!(shoe.to_vec(), original);
}

#[test]
fn player_score_is_sum_of_rank_values() {
    let mut p = Player::new(test_player_id(1), "Alice");
    assert_eq!(p.score(), 0);

    p.take_cards(&[card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Two)]);
    p.take_cards(&[card(Suit::Spades, Rank::King)]);
    assert_eq!(p.score(), 25);
    assert_eq!(p.hand.len(), 3);
    assert_eq!(p.hand[2], card(Suit::Spades, Rank::King));
}

#[test]
fn game_starts_empty_and_owns_players() {
    let mut game = Game::new(test_game_id(7));
    assert!(game.shoe.is_empty());
    assert_eq!(game.player_count(), 0);

    let pid = test_player_id(1);
    game.add_player(Player::new(pid, "Bob"));
    game.add_player(Player::new(test_player_id(2), "Bob"));
    assert_eq!(game.player_count(), 2);
    assert_eq!(game.player(pid).map(|p| p.name.as_str()), Some("Bob"));

    let removed = game.remove_player(pid).expect("player must exist");
    assert_eq!(removed.id, pid);
    assert!(game.player(pid).is_none());
    assert!(game.remove_player(pid).is_none());
}

/// Card: Display + FromStr.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::King),
    ];

    for c in cards {
        let s = c.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, c);
    }

    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "Ah");
    assert_eq!(card(Suit::Diamonds, Rank::Ten).to_string(), "Td");

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("A".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
}

/// Card сериализуется как {"suit": "HEARTS", "rank": "ACE"}.
#[test]
fn card_json_shape() {
    let json = serde_json::to_value(card(Suit::Hearts, Rank::Ace)).unwrap();
    assert_eq!(json, serde_json::json!({ "suit": "HEARTS", "rank": "ACE" }));

    let parsed: Card =
        serde_json::from_str(r#"{"suit":"DIAMONDS","rank":"QUEEN"}"#).unwrap();
    assert_eq!(parsed, card(Suit::Diamonds, Rank::Queen));
}

#[test]
fn ids_display_and_parse() {
    let gid = test_game_id(42);
    let parsed: GameId = gid.to_string().parse().unwrap();
    assert_eq!(parsed, gid);

    assert!("not-a-uuid".parse::<PlayerId>().is_err());
}
