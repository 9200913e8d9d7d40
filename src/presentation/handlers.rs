// HTTP request handlers
use crate::domain::document::{HostDocument, MOUNT_ID};
use crate::domain::view::Element;
use crate::infrastructure::html::document_to_html;
use crate::infrastructure::stylesheet::dashboard_css;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

pub const STYLESHEET_PATH: &str = "/pkg/dashboard.css";

#[derive(Deserialize)]
pub struct ViewQuery {
    pub path: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], dashboard_css())
}

/// Rendered view tree as JSON, for the path given in `?path=` (default `/`)
pub async fn view_tree(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Element> {
    let path = query.path.unwrap_or_else(|| "/".to_string());
    Json(state.renderer.render(&path))
}

/// Full dashboard page for any other path
pub async fn render_page(uri: Uri, State(state): State<Arc<AppState>>) -> Response {
    let path = uri.path();
    let mut document = page_shell(&state.renderer.content().heading);

    match state.renderer.mount(&mut document, MOUNT_ID, path) {
        Ok(()) => Html(document_to_html(&document)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render dashboard for {}: {}", path, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "dashboard unavailable").into_response()
        }
    }
}

fn page_shell(title: &str) -> HostDocument {
    HostDocument::shell(title, MOUNT_ID)
        .with_head(
            Element::new("meta")
                .attr("name", "description")
                .attr("content", "Control dashboard for Nexa Gateway"),
        )
        .with_head(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", STYLESHEET_PATH),
        )
}
