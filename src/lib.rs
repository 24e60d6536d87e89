use axum::{error_handling::HandleErrorLayer, routing::get, BoxError, Router};
use sqlx::sqlite::SqlitePool;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::error::ApiError;

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

/// Answer requests on `router` that run longer than `timeout` with a structured 408.
pub fn with_request_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .timeout(timeout),
    )
}

/// Build the application router over `pool`. Requests running longer than
/// `request_timeout` are answered with 408.
pub fn app(pool: SqlitePool, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        // Root and health
        .route("/", get(|| async { "League API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Lookup endpoints
        .route("/genders", get(routes::lookups::get_genders))
        .route("/game-categories", get(routes::lookups::get_game_categories))
        .route("/game-statuses", get(routes::lookups::get_game_statuses))
        .route("/game-event-types", get(routes::lookups::get_game_event_types))

        // Team endpoints
        .route("/teams", get(routes::teams::get_teams).post(routes::teams::create_team))
        .route(
            "/teams/{team_id}",
            get(routes::teams::get_team_by_id)
                .put(routes::teams::replace_team)
                .delete(routes::teams::delete_team),
        )

        // Player endpoints
        .route("/players", get(routes::players::get_players).post(routes::players::create_player))
        .route(
            "/players/{player_id}",
            get(routes::players::get_player_by_id)
                .put(routes::players::replace_player)
                .delete(routes::players::delete_player),
        )

        // Game endpoints
        .route("/games", get(routes::games::get_games).post(routes::games::create_game))
        .route(
            "/games/{game_id}",
            get(routes::games::get_game_by_id).delete(routes::games::delete_game),
        )

        // Game event endpoints
        .route(
            "/games/{game_id}/events",
            get(routes::events::get_game_events).post(routes::events::create_game_event),
        )
        .route(
            "/games/{game_id}/events/{event_id}",
            get(routes::events::get_game_event).delete(routes::events::delete_game_event),
        );

    with_request_timeout(router, request_timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
