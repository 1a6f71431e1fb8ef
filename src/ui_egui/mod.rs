mod app;
mod templates;
pub mod theme;
mod views;

pub use app::PlannerApp;
