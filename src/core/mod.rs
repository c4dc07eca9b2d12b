pub mod diseases;
pub mod errors;
pub mod form;
pub mod http;
pub mod server_monitor;
pub mod tasks;
pub mod validation;

pub use diseases::Disease;
pub use errors::HealthError;
pub use form::FormController;
