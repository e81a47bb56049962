use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/submit",
            get(handlers::submit::show).post(handlers::submit::create),
        )
        .route("/complaints", get(handlers::listing::list))
        .route(
            "/admin/login",
            get(handlers::admin::login_form).post(handlers::admin::login),
        )
        .route("/admin/logout", get(handlers::admin::logout))
        .route("/admin", get(handlers::admin::dashboard))
        .route("/admin/update/{id}", post(handlers::admin::update))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
