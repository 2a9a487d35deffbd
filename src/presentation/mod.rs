// Presentation layer - the rendering seam the pollers drive
pub mod log_view;
pub mod view;
