// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    health_check, render_page, stylesheet, view_tree, STYLESHEET_PATH,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route(STYLESHEET_PATH, get(stylesheet))
        .route("/api/view", get(view_tree))
        .fallback(get(render_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
