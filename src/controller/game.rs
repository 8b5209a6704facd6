use crate::model::game::GameCreateSchema;
use crate::service::error::ApiError;
use crate::service::validation::{validate_bulk, validate_one};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{get, post, HttpResponse};

#[post("/games/")]
pub async fn create_game_handler(
    data: Data<AppState>,
    new_game: Json<GameCreateSchema>,
) -> Result<HttpResponse, ApiError> {
    let new_game = validate_one(new_game.into_inner())?;
    let game = data.db.create_game(&new_game).await?;
    Ok(HttpResponse::Created().json(game))
}

#[get("/games/")]
pub async fn list_games_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.db.list_games().await?))
}

#[post("/games/bulk/")]
pub async fn create_games_bulk_handler(
    data: Data<AppState>,
    new_games: Json<Vec<GameCreateSchema>>,
) -> Result<HttpResponse, ApiError> {
    let new_games = validate_bulk(new_games.into_inner(), data.config.bulk_insert_max_rows)?;
    let games = data.db.create_games_bulk(&new_games).await?;
    Ok(HttpResponse::Created().json(games))
}
