use crate::model::stat::{PlayerStatCreateSchema, TeamStatCreateSchema};
use crate::service::error::ApiError;
use crate::service::validation::{validate_bulk, validate_one};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{get, post, HttpResponse};

#[post("/player_stats/")]
pub async fn create_player_stat_handler(
    data: Data<AppState>,
    new_stat: Json<PlayerStatCreateSchema>,
) -> Result<HttpResponse, ApiError> {
    let new_stat = validate_one(new_stat.into_inner())?;
    let stat = data.db.create_player_stat(&new_stat).await?;
    Ok(HttpResponse::Created().json(stat))
}

#[get("/player_stats/")]
pub async fn list_player_stats_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.db.list_player_stats().await?))
}

#[post("/player_stats/bulk/")]
pub async fn create_player_stats_bulk_handler(
    data: Data<AppState>,
    new_stats: Json<Vec<PlayerStatCreateSchema>>,
) -> Result<HttpResponse, ApiError> {
    let new_stats = validate_bulk(new_stats.into_inner(), data.config.bulk_insert_max_rows)?;
    let stats = data.db.create_player_stats_bulk(&new_stats).await?;
    Ok(HttpResponse::Created().json(stats))
}

#[post("/team_stats/")]
pub async fn create_team_stat_handler(
    data: Data<AppState>,
    new_stat: Json<TeamStatCreateSchema>,
) -> Result<HttpResponse, ApiError> {
    let new_stat = validate_one(new_stat.into_inner())?;
    let stat = data.db.create_team_stat(&new_stat).await?;
    Ok(HttpResponse::Created().json(stat))
}

#[get("/team_stats/")]
pub async fn list_team_stats_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.db.list_team_stats().await?))
}

#[post("/team_stats/bulk/")]
pub async fn create_team_stats_bulk_handler(
    data: Data<AppState>,
    new_stats: Json<Vec<TeamStatCreateSchema>>,
) -> Result<HttpResponse, ApiError> {
    let new_stats = validate_bulk(new_stats.into_inner(), data.config.bulk_insert_max_rows)?;
    let stats = data.db.create_team_stats_bulk(&new_stats).await?;
    Ok(HttpResponse::Created().json(stats))
}
