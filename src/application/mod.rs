// Application layer - Use cases
pub mod view_renderer;
