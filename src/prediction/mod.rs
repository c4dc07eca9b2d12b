pub mod api;

pub use api::{
    check_server,
    request_prediction,
    PredictionResponse,
};
