//! Внешний API игрового движка (без транспорта).
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние;
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — ответы со статусом и JSON-телом;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;

use serde::{Deserialize, Serialize};

use crate::engine::GameService;

/// Один входящий запрос: команда или чтение.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ApiRequest {
    Command(Command),
    Query(Query),
}

/// Выполнить команду.
pub fn execute_command(
    service: &GameService,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let response = match command {
        Command::CreateGame => CommandResponse::GameCreated(service.create_game()),
        Command::DeleteGame(GameRef { game_id }) => {
            service.delete_game(game_id)?;
            CommandResponse::NoContent
        }
        Command::AddDeck(GameRef { game_id }) => {
            service.add_standard_deck(game_id)?;
            CommandResponse::Ok
        }
        Command::Shuffle(GameRef { game_id }) => {
            service.shuffle(game_id)?;
            CommandResponse::Ok
        }
        Command::ClearShoe(GameRef { game_id }) => CommandResponse::ShoeCleared {
            removed: service.clear_shoe(game_id)?,
        },
        Command::AddPlayer(AddPlayerCommand { game_id, name }) => {
            CommandResponse::PlayerAdded(service.add_player(game_id, &name)?)
        }
        Command::RemovePlayer(PlayerRef { game_id, player_id }) => {
            service.remove_player(game_id, player_id)?;
            CommandResponse::NoContent
        }
        Command::DealCards(cmd) => {
            let amount = cmd.effective_amount(service.config().default_deal_amount);
            CommandResponse::CardsDealt(service.deal_cards(cmd.game_id, cmd.player_id, amount)?)
        }
    };
    Ok(response)
}

/// Выполнить запрос на чтение.
pub fn run_query(service: &GameService, query: Query) -> Result<QueryResponse, ApiError> {
    let response = match query {
        Query::ListGames => QueryResponse::Games(service.get_all_games()),
        Query::GetGame(GameRef { game_id }) => QueryResponse::Game(service.get_game(game_id)?),
        Query::GetPlayerHand(PlayerRef { game_id, player_id }) => {
            QueryResponse::Cards(service.get_player_hand(game_id, player_id)?)
        }
        Query::GetPlayersWithScores(GameRef { game_id }) => {
            QueryResponse::Scores(service.get_players_with_scores(game_id)?)
        }
        Query::GetDeckInfo(GameRef { game_id }) => {
            QueryResponse::Deck(service.get_deck_info(game_id)?)
        }
    };
    Ok(response)
}

/// Обработать запрос и собрать ответ для транспорта.
pub fn handle_request(service: &GameService, request: ApiRequest) -> ApiReply {
    let result = match request {
        ApiRequest::Command(cmd) => {
            execute_command(service, cmd).map(|r| (r.status(), r.body()))
        }
        ApiRequest::Query(q) => run_query(service, q).map(|r| (r.status(), r.body())),
    };
    into_reply(result)
}

/// То же, но запрос приходит строкой JSON. Битый JSON → 400.
pub fn handle_json(service: &GameService, raw: &str) -> ApiReply {
    match serde_json::from_str::<ApiRequest>(raw) {
        Ok(request) => handle_request(service, request),
        Err(err) => into_reply(Err(ApiError::from(err))),
    }
}

fn into_reply(result: Result<(u16, serde_json::Value), ApiError>) -> ApiReply {
    match result {
        Ok((status, body)) => ApiReply { status, body },
        Err(err) => {
            tracing::debug!(status = err.status(), error = %err, "request failed");
            ApiReply {
                status: err.status(),
                body: serde_json::json!({ "error": err.body().error }),
            }
        }
    }
}
