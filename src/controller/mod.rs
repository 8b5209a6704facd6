pub mod coach;
pub mod game;
pub mod handler;
pub mod player;
pub mod query;
pub mod stat;
pub mod team;
