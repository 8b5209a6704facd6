use crate::model::game::{Game, GameCreateSchema};
use crate::model::schema::games;
use crate::repository::database::{Database, Result};
use diesel::{BoolExpressionMethods, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use log::debug;

impl Database {
    pub async fn create_game(&self, new_game: &GameCreateSchema) -> Result<Game> {
        let mut conn = self.get_db_conn().await?;
        let game = diesel::insert_into(games::table)
            .values(new_game)
            .get_result::<Game>(&mut conn)
            .await?;
        debug!(
            "created game {} ({} vs {})",
            game.game_id, game.home_team_id, game.away_team_id
        );
        Ok(game)
    }

    pub async fn list_games(&self) -> Result<Vec<Game>> {
        let mut conn = self.get_db_conn().await?;
        Ok(games::table.load::<Game>(&mut conn).await?)
    }

    pub async fn create_games_bulk(&self, new_games: &[GameCreateSchema]) -> Result<Vec<Game>> {
        let mut conn = self.get_db_conn().await?;
        let mut created = diesel::insert_into(games::table)
            .values(new_games)
            .get_results::<Game>(&mut conn)
            .await?;
        created.sort_by_key(|game| game.game_id);
        Ok(created)
    }

    /// Games where the team played at home or away.
    pub async fn find_games_by_team_id(&self, key: i32) -> Result<Vec<Game>> {
        let mut conn = self.get_db_conn().await?;
        Ok(games::table
            .filter(games::home_team_id.eq(key).or(games::away_team_id.eq(key)))
            .load::<Game>(&mut conn)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::database::test_support::{sample_game, sample_team, test_database};

    #[actix_web::test]
    async fn games_are_found_for_home_and_away_teams() {
        let Some(db) = test_database().await else {
            return;
        };
        let eagles = db.create_team(&sample_team("Eagles")).await.unwrap();
        let cowboys = db.create_team(&sample_team("Cowboys")).await.unwrap();
        let giants = db.create_team(&sample_team("Giants")).await.unwrap();

        let created = db
            .create_games_bulk(&[
                sample_game(eagles.team_id, cowboys.team_id),
                sample_game(giants.team_id, eagles.team_id),
                sample_game(cowboys.team_id, giants.team_id),
            ])
            .await
            .unwrap();

        let mut found = db.find_games_by_team_id(eagles.team_id).await.unwrap();
        found.sort_by_key(|g| g.game_id);
        assert_eq!(found, vec![created[0].clone(), created[1].clone()]);
        assert_eq!(found[0].game_date, created[0].game_date);
    }
}
