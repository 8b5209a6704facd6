use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GameIdQuery {
    pub game_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct TeamIdQuery {
    pub team_id: i32,
}
