// Mirrors schema.sql at the repository root.

diesel::table! {
    coaches (coach_id) {
        coach_id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        role -> Varchar,
        team_id -> Int4,
    }
}

diesel::table! {
    games (game_id) {
        game_id -> Int4,
        home_team_id -> Int4,
        away_team_id -> Int4,
        game_date -> Date,
        home_team_score -> Int4,
        away_team_score -> Int4,
    }
}

diesel::table! {
    player_stats (stat_id) {
        stat_id -> Int4,
        player_id -> Int4,
        game_id -> Int4,
        touchdowns -> Int4,
        passing_yards -> Int4,
        rushing_yards -> Int4,
    }
}

diesel::table! {
    players (player_id) {
        player_id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        position -> Varchar,
        jersey_number -> Int4,
        team_id -> Int4,
    }
}

diesel::table! {
    team_stats (team_stat_id) {
        team_stat_id -> Int4,
        team_id -> Int4,
        game_id -> Int4,
        total_yards -> Int4,
        total_touchdowns -> Int4,
        penalties -> Int4,
    }
}

diesel::table! {
    teams (team_id) {
        team_id -> Int4,
        team_name -> Varchar,
        city -> Varchar,
        stadium -> Varchar,
        founded_year -> Int4,
    }
}

diesel::joinable!(coaches -> teams (team_id));
diesel::joinable!(player_stats -> games (game_id));
diesel::joinable!(player_stats -> players (player_id));
diesel::joinable!(players -> teams (team_id));
diesel::joinable!(team_stats -> games (game_id));
diesel::joinable!(team_stats -> teams (team_id));

diesel::allow_tables_to_appear_in_same_query!(
    coaches,
    games,
    player_stats,
    players,
    team_stats,
    teams,
);
