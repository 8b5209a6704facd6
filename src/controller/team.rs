use crate::model::team::TeamCreateSchema;
use crate::service::error::ApiError;
use crate::service::validation::{validate_bulk, validate_one};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{get, post, HttpResponse};

#[post("/teams/")]
pub async fn create_team_handler(
    data: Data<AppState>,
    new_team: Json<TeamCreateSchema>,
) -> Result<HttpResponse, ApiError> {
    let new_team = validate_one(new_team.into_inner())?;
    let team = data.db.create_team(&new_team).await?;
    Ok(HttpResponse::Created().json(team))
}

#[get("/teams/")]
pub async fn list_teams_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.db.list_teams().await?))
}

#[post("/teams/bulk/")]
pub async fn create_teams_bulk_handler(
    data: Data<AppState>,
    new_teams: Json<Vec<TeamCreateSchema>>,
) -> Result<HttpResponse, ApiError> {
    let new_teams = validate_bulk(new_teams.into_inner(), data.config.bulk_insert_max_rows)?;
    let teams = data.db.create_teams_bulk(&new_teams).await?;
    Ok(HttpResponse::Created().json(teams))
}
