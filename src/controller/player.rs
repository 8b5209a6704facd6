use crate::model::player::PlayerCreateSchema;
use crate::service::error::ApiError;
use crate::service::validation::{validate_bulk, validate_one};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{get, post, HttpResponse};

#[post("/players/")]
pub async fn create_player_handler(
    data: Data<AppState>,
    new_player: Json<PlayerCreateSchema>,
) -> Result<HttpResponse, ApiError> {
    let new_player = validate_one(new_player.into_inner())?;
    let player = data.db.create_player(&new_player).await?;
    Ok(HttpResponse::Created().json(player))
}

#[get("/players/")]
pub async fn list_players_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.db.list_players().await?))
}

#[post("/players/bulk/")]
pub async fn create_players_bulk_handler(
    data: Data<AppState>,
    new_players: Json<Vec<PlayerCreateSchema>>,
) -> Result<HttpResponse, ApiError> {
    let new_players = validate_bulk(new_players.into_inner(), data.config.bulk_insert_max_rows)?;
    let players = data.db.create_players_bulk(&new_players).await?;
    Ok(HttpResponse::Created().json(players))
}
