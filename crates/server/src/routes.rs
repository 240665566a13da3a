//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use crate::trace::{TRACE_ID_HEADER, trace_id_middleware};
use axum::Router;
use axum::http::HeaderName;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Cross-origin policy: any origin, method and header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(TRACE_ID_HEADER)])
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let game_routes = Router::new()
        .route(
            "/game",
            get(handlers::get_game_by_name)
                .post(handlers::create_game)
                .put(handlers::update_game),
        )
        .route("/games", get(handlers::list_games))
        .route(
            "/game/{id}",
            get(handlers::get_game).delete(handlers::delete_game),
        );

    let ops_routes = Router::new().route("/health", get(handlers::health_check));

    // Layers run outermost first: TraceLayer -> CORS -> trace ID -> handler
    Router::new()
        .merge(game_routes)
        .merge(ops_routes)
        .layer(middleware::from_fn(trace_id_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
