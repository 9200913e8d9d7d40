// Application state for HTTP handlers
use crate::application::view_renderer::ViewRenderer;

#[derive(Clone)]
pub struct AppState {
    pub renderer: ViewRenderer,
}
