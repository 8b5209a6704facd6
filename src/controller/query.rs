//! Fixed lookups kept at their historical `/QueryN/` paths.

use crate::model::query::{GameIdQuery, TeamIdQuery};
use crate::service::error::ApiError;
use crate::AppState;
use actix_web::web::{Data, Query};
use actix_web::{get, HttpResponse};

/// Player stats by game id.
#[get("/Query1/")]
pub async fn player_stats_by_game_handler(
    data: Data<AppState>,
    query: Query<GameIdQuery>,
) -> Result<HttpResponse, ApiError> {
    let stats = data.db.find_player_stats_by_game_id(query.game_id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Team stats by game id.
#[get("/Query2/")]
pub async fn team_stats_by_game_handler(
    data: Data<AppState>,
    query: Query<GameIdQuery>,
) -> Result<HttpResponse, ApiError> {
    let stats = data.db.find_team_stats_by_game_id(query.game_id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// All games a team played, home or away.
#[get("/Query3/")]
pub async fn games_by_team_handler(
    data: Data<AppState>,
    query: Query<TeamIdQuery>,
) -> Result<HttpResponse, ApiError> {
    let games = data.db.find_games_by_team_id(query.team_id).await?;
    Ok(HttpResponse::Ok().json(games))
}

/// All players on a team.
#[get("/Query4/")]
pub async fn players_by_team_handler(
    data: Data<AppState>,
    query: Query<TeamIdQuery>,
) -> Result<HttpResponse, ApiError> {
    let players = data.db.find_players_by_team_id(query.team_id).await?;
    Ok(HttpResponse::Ok().json(players))
}

/// All coaches on a team.
#[get("/Query5/")]
pub async fn coaches_by_team_handler(
    data: Data<AppState>,
    query: Query<TeamIdQuery>,
) -> Result<HttpResponse, ApiError> {
    let coaches = data.db.find_coaches_by_team_id(query.team_id).await?;
    Ok(HttpResponse::Ok().json(coaches))
}
