use reqwest::Client;
use serde::Deserialize;
use serde_json::{
    Map,
    Value,
};
use url::Url;

use crate::core::{
    http::ensure_success,
    HealthError,
};

#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
    pub prediction: Option<Value>,
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Extracts the display text. Anything other than a scalar `prediction` is a failure.
    pub fn into_prediction(self) -> Result<String, HealthError> {
        match self.prediction {
            Some(Value::String(text)) => Ok(text),
            Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(value.to_string()),
            Some(other) => {
                Err(HealthError::MissingPrediction(format!("unexpected prediction value {other}")))
            }
            None => Err(HealthError::MissingPrediction(
                self.error.unwrap_or_else(|| "response has no prediction field".to_string()),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerMessage {
    pub message: String,
}

pub async fn request_prediction(
    client: &Client,
    endpoint: &Url,
    body: &Map<String, Value>,
) -> Result<String, HealthError> {
    let resp = client.post(endpoint.clone()).json(body).send().await?;
    ensure_success(&resp)?;

    let text = resp.text().await?;
    let parsed: PredictionResponse = serde_json::from_str(&text)?;
    parsed.into_prediction()
}

/// Pings the backend root, which answers with a short status message.
pub async fn check_server(client: &Client, base_url: &Url) -> Result<String, HealthError> {
    let resp = client.get(base_url.clone()).send().await?;
    ensure_success(&resp)?;

    let message: ServerMessage = resp.json().await?;
    Ok(message.message)
}
