use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable)]
#[diesel(table_name = crate::model::schema::player_stats)]
pub struct PlayerStat {
    pub stat_id: i32,
    pub player_id: i32,
    pub game_id: i32,
    pub touchdowns: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
}

// Yardage can legitimately be negative (sacks, losses on a run).
#[derive(Serialize, Deserialize, Debug, Clone, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::player_stats)]
pub struct PlayerStatCreateSchema {
    #[validate(range(min = 1, message = "player_id must be a positive id"))]
    pub player_id: i32,
    #[validate(range(min = 1, message = "game_id must be a positive id"))]
    pub game_id: i32,
    #[validate(range(min = 0, message = "touchdowns cannot be negative"))]
    pub touchdowns: i32,
    pub passing_yards: i32,
    pub rushing_yards: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable)]
#[diesel(table_name = crate::model::schema::team_stats)]
pub struct TeamStat {
    pub team_stat_id: i32,
    pub team_id: i32,
    pub game_id: i32,
    pub total_yards: i32,
    pub total_touchdowns: i32,
    pub penalties: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::team_stats)]
pub struct TeamStatCreateSchema {
    #[validate(range(min = 1, message = "team_id must be a positive id"))]
    pub team_id: i32,
    #[validate(range(min = 1, message = "game_id must be a positive id"))]
    pub game_id: i32,
    pub total_yards: i32,
    #[validate(range(min = 0, message = "total_touchdowns cannot be negative"))]
    pub total_touchdowns: i32,
    #[validate(range(min = 0, message = "penalties cannot be negative"))]
    pub penalties: i32,
}
