use crate::model::schema::teams;
use crate::model::team::{Team, TeamCreateSchema};
use crate::repository::database::{Database, Result};
use diesel_async::RunQueryDsl;
use log::debug;

impl Database {
    pub async fn create_team(&self, new_team: &TeamCreateSchema) -> Result<Team> {
        let mut conn = self.get_db_conn().await?;
        let team = diesel::insert_into(teams::table)
            .values(new_team)
            .get_result::<Team>(&mut conn)
            .await?;
        debug!("created team {}", team.team_id);
        Ok(team)
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let mut conn = self.get_db_conn().await?;
        Ok(teams::table.load::<Team>(&mut conn).await?)
    }

    /// Inserts every team in one statement and returns them with their ids,
    /// in input order. Nothing is inserted if any row fails.
    pub async fn create_teams_bulk(&self, new_teams: &[TeamCreateSchema]) -> Result<Vec<Team>> {
        let mut conn = self.get_db_conn().await?;
        let mut created = diesel::insert_into(teams::table)
            .values(new_teams)
            .get_results::<Team>(&mut conn)
            .await?;
        // Sequence values are drawn in VALUES order within one statement.
        created.sort_by_key(|team| team.team_id);
        debug!("created {} teams", created.len());
        Ok(created)
    }
}
