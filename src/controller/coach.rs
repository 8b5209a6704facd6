use crate::model::coach::CoachCreateSchema;
use crate::service::error::ApiError;
use crate::service::validation::{validate_bulk, validate_one};
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{get, post, HttpResponse};

#[post("/coaches/")]
pub async fn create_coach_handler(
    data: Data<AppState>,
    new_coach: Json<CoachCreateSchema>,
) -> Result<HttpResponse, ApiError> {
    let new_coach = validate_one(new_coach.into_inner())?;
    let coach = data.db.create_coach(&new_coach).await?;
    Ok(HttpResponse::Created().json(coach))
}

#[get("/coaches/")]
pub async fn list_coaches_handler(data: Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(data.db.list_coaches().await?))
}

#[post("/coaches/bulk/")]
pub async fn create_coaches_bulk_handler(
    data: Data<AppState>,
    new_coaches: Json<Vec<CoachCreateSchema>>,
) -> Result<HttpResponse, ApiError> {
    let new_coaches = validate_bulk(new_coaches.into_inner(), data.config.bulk_insert_max_rows)?;
    let coaches = data.db.create_coaches_bulk(&new_coaches).await?;
    Ok(HttpResponse::Created().json(coaches))
}
