use crate::model::player::{Player, PlayerCreateSchema};
use crate::model::schema::players;
use crate::repository::database::{Database, Result};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use log::debug;

impl Database {
    pub async fn create_player(&self, new_player: &PlayerCreateSchema) -> Result<Player> {
        let mut conn = self.get_db_conn().await?;
        let player = diesel::insert_into(players::table)
            .values(new_player)
            .get_result::<Player>(&mut conn)
            .await?;
        debug!("created player {}", player.player_id);
        Ok(player)
    }

    pub async fn list_players(&self) -> Result<Vec<Player>> {
        let mut conn = self.get_db_conn().await?;
        Ok(players::table.load::<Player>(&mut conn).await?)
    }

    pub async fn create_players_bulk(
        &self,
        new_players: &[PlayerCreateSchema],
    ) -> Result<Vec<Player>> {
        let mut conn = self.get_db_conn().await?;
        let mut created = diesel::insert_into(players::table)
            .values(new_players)
            .get_results::<Player>(&mut conn)
            .await?;
        created.sort_by_key(|player| player.player_id);
        Ok(created)
    }

    pub async fn find_players_by_team_id(&self, key: i32) -> Result<Vec<Player>> {
        let mut conn = self.get_db_conn().await?;
        Ok(players::table
            .filter(players::team_id.eq(key))
            .load::<Player>(&mut conn)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::player::PlayerCreateSchema;
    use crate::repository::database::test_support::{sample_team, test_database};
    use crate::repository::database::RepositoryError;

    fn sample_player(last_name: &str, jersey_number: i32, team_id: i32) -> PlayerCreateSchema {
        PlayerCreateSchema {
            first_name: "Bijan".to_string(),
            last_name: last_name.to_string(),
            position: "RB".to_string(),
            jersey_number,
            team_id,
        }
    }

    #[actix_web::test]
    async fn lookup_by_team_only_returns_that_teams_players() {
        let Some(db) = test_database().await else {
            return;
        };
        let falcons = db.create_team(&sample_team("Falcons")).await.unwrap();
        let saints = db.create_team(&sample_team("Saints")).await.unwrap();

        assert!(db
            .find_players_by_team_id(falcons.team_id)
            .await
            .unwrap()
            .is_empty());

        let created = db
            .create_players_bulk(&[
                sample_player("Robinson", 7, falcons.team_id),
                sample_player("Kamara", 41, saints.team_id),
                sample_player("London", 5, falcons.team_id),
            ])
            .await
            .unwrap();
        assert_eq!(created[1].last_name, "Kamara");

        let roster = db.find_players_by_team_id(falcons.team_id).await.unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.iter().all(|p| p.team_id == falcons.team_id));
    }

    #[actix_web::test]
    async fn unknown_team_is_a_foreign_key_violation() {
        let Some(db) = test_database().await else {
            return;
        };

        let err = db
            .create_player(&sample_player("Nobody", 1, i32::MAX))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)));
    }

    #[actix_web::test]
    async fn failed_bulk_create_inserts_nothing() {
        let Some(db) = test_database().await else {
            return;
        };
        let team = db.create_team(&sample_team("Bears")).await.unwrap();

        let err = db
            .create_players_bulk(&[
                sample_player("Fields", 1, team.team_id),
                sample_player("Ghost", 2, i32::MAX),
            ])
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ForeignKeyViolation(_)));
        assert!(db
            .find_players_by_team_id(team.team_id)
            .await
            .unwrap()
            .is_empty());
    }
}
