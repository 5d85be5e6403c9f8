pub mod error;
pub mod routes;
pub mod state;


use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(routes::root))
        .route("/api/reply", post(routes::create_reply))
        .route("/api/replies/recent", get(routes::recent_replies))
        .with_state(state);
    with_middleware(routes)
}

/// Error fallbacks and the shared middleware stack.
fn with_middleware(router: Router) -> Router {
    router
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .layer(CatchPanicLayer::custom(error::internal_error))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
