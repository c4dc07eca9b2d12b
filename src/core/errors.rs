use thiserror::Error;

/// The only failure text the user ever sees for a prediction request.
pub const PREDICTION_ERROR_MESSAGE: &str = "Error in prediction.";

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Response has no usable prediction: {0}")]
    MissingPrediction(String),

    #[error("HealthError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for HealthError {
    fn from(error: std::io::Error) -> Self {
        HealthError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for HealthError {
    fn from(error: reqwest::Error) -> Self {
        HealthError::Reqwest(Box::new(error))
    }
}
