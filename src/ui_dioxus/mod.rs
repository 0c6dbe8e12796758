// Dioxus UI module - list and detail views over the loaded catalog
pub mod app;
pub mod components;
pub mod router;
pub mod state;
pub mod views;

pub use app::App;
