pub mod coach;
pub mod database;
pub mod game;
pub mod player;
pub mod stat;
pub mod team;
