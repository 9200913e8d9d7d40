// Domain layer - view tree, host document and dashboard content
pub mod dashboard;
pub mod document;
pub mod view;
