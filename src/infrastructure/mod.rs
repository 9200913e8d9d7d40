// Infrastructure layer - Configuration and output encodings
pub mod config;
pub mod html;
pub mod stylesheet;
