pub mod coach;
pub mod game;
pub mod player;
pub mod query;
pub mod response;
pub mod schema;
pub mod stat;
pub mod team;
pub mod text;
