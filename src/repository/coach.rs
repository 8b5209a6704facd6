use crate::model::coach::{Coach, CoachCreateSchema};
use crate::model::schema::coaches;
use crate::repository::database::{Database, Result};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn create_coach(&self, new_coach: &CoachCreateSchema) -> Result<Coach> {
        let mut conn = self.get_db_conn().await?;
        Ok(diesel::insert_into(coaches::table)
            .values(new_coach)
            .get_result::<Coach>(&mut conn)
            .await?)
    }

    pub async fn list_coaches(&self) -> Result<Vec<Coach>> {
        let mut conn = self.get_db_conn().await?;
        Ok(coaches::table.load::<Coach>(&mut conn).await?)
    }

    pub async fn create_coaches_bulk(&self, new_coaches: &[CoachCreateSchema]) -> Result<Vec<Coach>> {
        let mut conn = self.get_db_conn().await?;
        let mut created = diesel::insert_into(coaches::table)
            .values(new_coaches)
            .get_results::<Coach>(&mut conn)
            .await?;
        created.sort_by_key(|coach| coach.coach_id);
        Ok(created)
    }

    pub async fn find_coaches_by_team_id(&self, key: i32) -> Result<Vec<Coach>> {
        let mut conn = self.get_db_conn().await?;
        Ok(coaches::table
            .filter(coaches::team_id.eq(key))
            .load::<Coach>(&mut conn)
            .await?)
    }
}
