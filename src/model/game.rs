use chrono::{Datelike, NaiveDate};
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable)]
#[diesel(table_name = crate::model::schema::games)]
pub struct Game {
    pub game_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub game_date: NaiveDate,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::games)]
#[validate(schema(function = "validate_distinct_teams"))]
pub struct GameCreateSchema {
    #[validate(range(min = 1, message = "home_team_id must be a positive id"))]
    pub home_team_id: i32,
    #[validate(range(min = 1, message = "away_team_id must be a positive id"))]
    pub away_team_id: i32,
    #[validate(custom = "validate_game_date")]
    pub game_date: NaiveDate,
    #[validate(range(min = 0, message = "home_team_score cannot be negative"))]
    pub home_team_score: i32,
    #[validate(range(min = 0, message = "away_team_score cannot be negative"))]
    pub away_team_score: i32,
}

const FIRST_SEASON: i32 = 1800;
const LAST_SEASON: i32 = 2100;

fn validate_game_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if !(FIRST_SEASON..=LAST_SEASON).contains(&date.year()) {
        let mut err = ValidationError::new("game_date_range");
        err.message = Some(Cow::from("game_date must fall between the years 1800 and 2100"));
        return Err(err);
    }
    Ok(())
}

fn validate_distinct_teams(game: &GameCreateSchema) -> Result<(), ValidationError> {
    if game.home_team_id == game.away_team_id {
        let mut err = ValidationError::new("distinct_teams");
        err.message = Some(Cow::from("home_team_id and away_team_id must differ"));
        return Err(err);
    }
    Ok(())
}
