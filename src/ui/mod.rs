// Dioxus UI module - reactive view layer
pub mod app;
pub mod views;

pub use app::App;
