use crate::model::schema::{player_stats, team_stats};
use crate::model::stat::{PlayerStat, PlayerStatCreateSchema, TeamStat, TeamStatCreateSchema};
use crate::repository::database::{Database, Result};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn create_player_stat(&self, new_stat: &PlayerStatCreateSchema) -> Result<PlayerStat> {
        let mut conn = self.get_db_conn().await?;
        Ok(diesel::insert_into(player_stats::table)
            .values(new_stat)
            .get_result::<PlayerStat>(&mut conn)
            .await?)
    }

    pub async fn list_player_stats(&self) -> Result<Vec<PlayerStat>> {
        let mut conn = self.get_db_conn().await?;
        Ok(player_stats::table.load::<PlayerStat>(&mut conn).await?)
    }

    pub async fn create_player_stats_bulk(
        &self,
        new_stats: &[PlayerStatCreateSchema],
    ) -> Result<Vec<PlayerStat>> {
        let mut conn = self.get_db_conn().await?;
        let mut created = diesel::insert_into(player_stats::table)
            .values(new_stats)
            .get_results::<PlayerStat>(&mut conn)
            .await?;
        created.sort_by_key(|stat| stat.stat_id);
        Ok(created)
    }

    pub async fn find_player_stats_by_game_id(&self, key: i32) -> Result<Vec<PlayerStat>> {
        let mut conn = self.get_db_conn().await?;
        Ok(player_stats::table
            .filter(player_stats::game_id.eq(key))
            .load::<PlayerStat>(&mut conn)
            .await?)
    }

    pub async fn create_team_stat(&self, new_stat: &TeamStatCreateSchema) -> Result<TeamStat> {
        let mut conn = self.get_db_conn().await?;
        Ok(diesel::insert_into(team_stats::table)
            .values(new_stat)
            .get_result::<TeamStat>(&mut conn)
            .await?)
    }

    pub async fn list_team_stats(&self) -> Result<Vec<TeamStat>> {
        let mut conn = self.get_db_conn().await?;
        Ok(team_stats::table.load::<TeamStat>(&mut conn).await?)
    }

    pub async fn create_team_stats_bulk(
        &self,
        new_stats: &[TeamStatCreateSchema],
    ) -> Result<Vec<TeamStat>> {
        let mut conn = self.get_db_conn().await?;
        let mut created = diesel::insert_into(team_stats::table)
            .values(new_stats)
            .get_results::<TeamStat>(&mut conn)
            .await?;
        created.sort_by_key(|stat| stat.team_stat_id);
        Ok(created)
    }

    pub async fn find_team_stats_by_game_id(&self, key: i32) -> Result<Vec<TeamStat>> {
        let mut conn = self.get_db_conn().await?;
        Ok(team_stats::table
            .filter(team_stats::game_id.eq(key))
            .load::<TeamStat>(&mut conn)
            .await?)
    }
}
