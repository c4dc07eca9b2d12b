pub mod data;
pub mod server_settings_modal;

pub use data::{
    ServerSettings,
    SettingsData,
};
pub use server_settings_modal::ServerSettingsModal;
