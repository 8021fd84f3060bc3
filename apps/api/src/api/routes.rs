use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, players, teams};
use super::state::AppState;

/// Builds the application router
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Player routes
        .route(
            "/api/v1/players",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/api/v1/players/:id",
            get(players::get_player)
                .put(players::update_player)
                .patch(players::patch_player)
                .delete(players::delete_player),
        )
        // Team routes
        .route(
            "/api/v1/teams",
            get(teams::list_teams).post(teams::create_team),
        )
        .route(
            "/api/v1/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .patch(teams::patch_team)
                .delete(teams::delete_team),
        )
        .route("/api/v1/teams/:id/players", get(teams::get_team_players))
        // Market routes
        .route("/api/v1/teams/:id/sign-player", post(teams::sign_player))
        .route("/api/v1/teams/:id/drop-player", post(teams::drop_player))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
