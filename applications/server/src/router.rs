/// HTTP routing table
use crate::{api, state::AppState};
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router.
///
/// Paths are declared in full rather than nested so that `/api/users/` (empty
/// id segment) matches nothing and falls through to 404.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(api::health::health))
        // Users
        .route(
            "/api/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route(
            "/api/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .patch(api::users::update_user)
                .delete(api::users::delete_user),
        )
        // Location lookup
        .route(
            "/api/users/mapbox/:id",
            get(api::locations::get_user_location),
        )
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
