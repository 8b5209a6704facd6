use crate::model::text::reject_nul;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable)]
#[diesel(table_name = crate::model::schema::teams)]
pub struct Team {
    pub team_id: i32,
    pub team_name: String,
    pub city: String,
    pub stadium: String,
    pub founded_year: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Insertable, Validate)]
#[diesel(table_name = crate::model::schema::teams)]
pub struct TeamCreateSchema {
    #[validate(
        length(min = 1, max = 100, message = "team_name must be 1 to 100 characters"),
        custom = "reject_nul"
    )]
    pub team_name: String,
    #[validate(
        length(min = 1, max = 100, message = "city must be 1 to 100 characters"),
        custom = "reject_nul"
    )]
    pub city: String,
    #[validate(
        length(min = 1, max = 100, message = "stadium must be 1 to 100 characters"),
        custom = "reject_nul"
    )]
    pub stadium: String,
    #[validate(range(min = 1800, max = 2100, message = "founded_year must be between 1800 and 2100"))]
    pub founded_year: i32,
}
