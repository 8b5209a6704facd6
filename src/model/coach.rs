use crate::model::text::reject_nul;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable)]
#[diesel(table_name = crate::model::schema::coaches)]
pub struct Coach {
    pub coach_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub team_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::coaches)]
pub struct CoachCreateSchema {
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
        length(min = 1, max = 50, message = "role must be 1 to 50 characters"),
        custom = "reject_nul"
    )]
    pub role: String,
    #[validate(range(min = 1, message = "team_id must be a positive id"))]
    pub team_id: i32,
}
