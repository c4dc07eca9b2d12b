pub mod app;
pub mod disease_form;
pub mod error_modal;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::HealthAssistantApp;
