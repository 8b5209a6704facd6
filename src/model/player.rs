use crate::model::text::reject_nul;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable)]
#[diesel(table_name = crate::model::schema::players)]
pub struct Player {
    pub player_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub jersey_number: i32,
    pub team_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::players)]
pub struct PlayerCreateSchema {
    #[validate(
        length(min = 1, max = 100, message = "first_name must be 1 to 100 characters"),
        custom = "reject_nul"
    )]
    pub first_name: String,
    #[validate(
        length(min = 1, max = 100, message = "last_name must be 1 to 100 characters"),
        custom = "reject_nul"
    )]
    pub last_name: String,
    #[validate(
        length(min = 1, max = 50, message = "position must be 1 to 50 characters"),
        custom = "reject_nul"
    )]
    pub position: String,
    #[validate(range(min = 0, max = 99, message = "jersey_number must be between 0 and 99"))]
    pub jersey_number: i32,
    #[validate(range(min = 1, message = "team_id must be a positive id"))]
    pub team_id: i32,
}
