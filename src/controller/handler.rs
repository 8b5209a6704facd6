use crate::controller::{coach, game, player, query, stat, team};
use crate::service::error::{json_error_handler, query_error_handler};
use actix_web::web;

pub fn config(conf: &mut web::ServiceConfig) {
    conf.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    conf.service(team::create_team_handler)
        .service(team::list_teams_handler)
        .service(team::create_teams_bulk_handler)
        .service(player::create_player_handler)
        .service(player::list_players_handler)
        .service(player::create_players_bulk_handler)
        .service(coach::create_coach_handler)
        .service(coach::list_coaches_handler)
        .service(coach::create_coaches_bulk_handler)
        .service(game::create_game_handler)
        .service(game::list_games_handler)
        .service(game::create_games_bulk_handler)
        .service(stat::create_player_stat_handler)
        .service(stat::list_player_stats_handler)
        .service(stat::create_player_stats_bulk_handler)
        .service(stat::create_team_stat_handler)
        .service(stat::list_team_stats_handler)
        .service(stat::create_team_stats_bulk_handler)
        .service(query::player_stats_by_game_handler)
        .service(query::team_stats_by_game_handler)
        .service(query::games_by_team_handler)
        .service(query::players_by_team_handler)
        .service(query::coaches_by_team_handler);
}
