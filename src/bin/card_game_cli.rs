// src/bin/card_game_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use card_game_engine::domain::{GameId, PlayerId};
use card_game_engine::engine::{EngineError, GameService};
use card_game_engine::infra::{init_tracing, EngineConfig, IdMode, RngConfig};
use card_game_engine::handle_json;

/// Dev-CLI для движка карточных игр.
#[derive(Parser, Debug)]
#[command(name = "card_game_cli")]
#[command(about = "In-memory card game engine dev CLI")]
#[command(version)]
struct Args {
    /// Путь к JSON-конфигу движка
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Детерминированный режим: seed для RNG (+ последовательные id)
    #[arg(long)]
    seed: Option<u64>,

    /// Уровень логов (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Сценарий: игра, колода, игроки, раздача, очки, состав шуза
    Demo {
        /// Сколько карт раздать каждому игроку
        #[arg(long, default_value = "5")]
        cards: usize,
    },
    /// Читать JSON-запросы из stdin (по одному на строку)
    Repl,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.rng = RngConfig::Seeded { seed };
        config.ids = IdMode::Sequential;
    }
    if let Some(level) = &args.log_level {
        config.log_filter = level.clone();
    }

    init_tracing(&config.log_filter);
    tracing::info!(?config, "engine starting");

    let service = GameService::new(config);

    match args.mode {
        Mode::Demo { cards } => run_demo(&service, cards)?,
        Mode::Repl => run_repl(&service)?,
    }

    Ok(())
}

fn run_demo(service: &GameService, cards: usize) -> Result<(), EngineError> {
    println!("================ CARD GAME DEMO =================");

    let game = service.create_game();
    let game_id = game.id;
    println!("Создана игра {game_id}");

    service.add_standard_deck(game_id)?;
    service.shuffle(game_id)?;
    print_deck_summary(service, game_id)?;

    let mut players: Vec<PlayerId> = Vec::new();
    for name in ["Alice", "Bob", "Carol"] {
        let added = service.add_player(game_id, name)?;
        println!("  + {} ({})", added.player_name, added.player_id);
        players.push(added.player_id);
    }

    println!();
    println!("------ Раздача по {cards} карт ------");
    for pid in &players {
        let dealt = service.deal_cards(game_id, *pid, cards)?;
        let text: Vec<String> = dealt.iter().map(ToString::to_string).collect();
        println!("  {pid}: [{}]", text.join(" "));
    }

    println!();
    println!("------ Очки ------");
    for (place, score) in service.get_players_with_scores(game_id)?.iter().enumerate() {
        println!(
            "  {}. {:<8} {:>3}",
            place + 1,
            score.player_name,
            score.total_value
        );
    }

    println!();
    print_deck_summary(service, game_id)?;

    println!();
    println!("------ Игры в реестре ------");
    for summary in service.get_all_games() {
        println!("  {} players={}", summary.game_id, summary.player_count);
    }

    Ok(())
}

fn print_deck_summary(service: &GameService, game_id: GameId) -> Result<(), EngineError> {
    let info = service.get_deck_info(game_id)?;
    println!("Шуз: {} карт", info.total_cards);
    for (suit, count) in &info.suit_counts {
        println!("  {:<8} {count}", suit.name());
    }
    Ok(())
}

fn run_repl(service: &GameService) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = handle_json(service, &line);
        writeln!(stdout, "{} {}", reply.status, reply.body)?;
    }

    Ok(())
}
