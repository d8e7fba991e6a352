//! Тесты инфраструктурного слоя: конфиг, генерация ID, RNG-реализации, логирование.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use card_game_engine::engine::{GameService, RandomSource};
use card_game_engine::infra::{
    init_tracing, ConfigError, DeterministicRng, EngineConfig, IdGenerator, IdMode, RngConfig,
};

// -----------------------------
// EngineConfig
// -----------------------------

#[test]
fn empty_json_gives_defaults() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(cfg.rng, RngConfig::System);
    assert_eq!(cfg.ids, IdMode::Random);
    assert_eq!(cfg.default_deal_amount, 1);
    assert_eq!(cfg.log_filter, "info");
}

#[test]
fn full_json_config_parses() {
    let cfg = EngineConfig::from_json_str(
        r#"{
            "rng": { "mode": "seeded", "seed": 42 },
            "ids": "sequential",
            "default_deal_amount": 3,
            "log_filter": "card_game_engine=debug"
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.rng, RngConfig::Seeded { seed: 42 });
    assert_eq!(cfg.ids, IdMode::Sequential);
    assert_eq!(cfg.default_deal_amount, 3);
    assert_eq!(cfg.log_filter, "card_game_engine=debug");
    assert_eq!(EngineConfig::seeded(42).rng, cfg.rng);
}

#[test]
fn bad_config_reports_errors() {
    assert!(matches!(
        EngineConfig::from_json_str(r#"{"ids": "bogus"}"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        EngineConfig::from_json_file("/definitely/not/here.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn config_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("card-game-cfg-{}.json", std::process::id()));
    let cfg = EngineConfig::seeded(5);
    std::fs::write(&path, serde_json::to_string(&cfg).unwrap()).unwrap();

    let loaded = EngineConfig::from_json_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, cfg);
}

#[test]
fn configured_default_deal_amount_reaches_service() {
    let mut cfg = EngineConfig::seeded(1);
    cfg.default_deal_amount = 4;
    let service = GameService::new(cfg);
    assert_eq!(service.config().default_deal_amount, 4);
}

// -----------------------------
// IdGenerator
// -----------------------------

#[test]
fn sequential_ids_are_reproducible_and_typed() {
    let a = IdGenerator::new(IdMode::Sequential);
    let b = IdGenerator::new(IdMode::Sequential);

    let ga: Vec<_> = (0..5).map(|_| a.next_game_id()).collect();
    let gb: Vec<_> = (0..5).map(|_| b.next_game_id()).collect();
    assert_eq!(ga, gb);

    // id игры и id игрока с одним и тем же номером не совпадают.
    let p1 = IdGenerator::new(IdMode::Sequential).next_player_id();
    let g1 = IdGenerator::new(IdMode::Sequential).next_game_id();
    assert_ne!(p1.as_uuid(), g1.as_uuid());
}

#[test]
fn random_ids_are_v4_and_unique() {
    let ids = IdGenerator::default();
    assert_eq!(ids.mode(), IdMode::Random);

    let set: HashSet<_> = (0..1000).map(|_| ids.next_player_id()).collect();
    assert_eq!(set.len(), 1000);
    assert!(set.iter().all(|id| id.as_uuid().get_version_num() == 4));
}

#[test]
fn sequential_ids_unique_across_threads() {
    let ids = Arc::new(IdGenerator::new(IdMode::Sequential));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ids = Arc::clone(&ids);
            thread::spawn(move || (0..250).map(|_| ids.next_game_id()).collect::<Vec<_>>())
        })
        .collect();

    let all: HashSet<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(all.len(), 1000);
}

// -----------------------------
// RNG
// -----------------------------

#[test]
fn deterministic_rng_is_reproducible() {
    let mut a = DeterministicRng::from_seed(77);
    let mut b = DeterministicRng::from_seed(77);
    let xs: Vec<_> = (0..20).map(|_| a.index_up_to(51)).collect();
    let ys: Vec<_> = (0..20).map(|_| b.index_up_to(51)).collect();
    assert_eq!(xs, ys);
    assert!(xs.iter().all(|x| *x <= 51));
    assert_eq!(a.index_up_to(0), 0);
}

/// Разные игры одного сервиса получают разные seed-ы.
#[test]
fn seeded_service_gives_each_game_its_own_stream() {
    let service = GameService::new(EngineConfig::seeded(100));
    let g1 = service.create_game().id;
    let g2 = service.create_game().id;
    for gid in [g1, g2] {
        service.add_standard_deck(gid).unwrap();
        service.shuffle(gid).unwrap();
    }
    assert_ne!(
        service.get_game(g1).unwrap().game_deck,
        service.get_game(g2).unwrap().game_deck
    );
}

// -----------------------------
// Логирование
// -----------------------------

#[test]
fn init_tracing_is_idempotent() {
    init_tracing("debug");
    init_tracing("info");

    let service = GameService::default();
    let gid = service.create_game().id;
    service.add_standard_deck(gid).unwrap();
    assert_eq!(service.get_deck_info(gid).unwrap().total_cards, 52);
}
