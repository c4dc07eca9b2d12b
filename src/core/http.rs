use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    Client,
    Response,
};

use crate::core::HealthError;

pub const CLIENT_USER_AGENT: &str = "health-assistant/0.1 (+reqwest)";

pub fn http_client(timeout: Duration) -> Result<Client, HealthError> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(USER_AGENT, reqwest::header::HeaderValue::from_static(CLIENT_USER_AGENT));

    Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
        .map_err(|e| HealthError::Custom(format!("HTTP client build failed: {e}")))
}

pub fn ensure_success(resp: &Response) -> Result<(), HealthError> {
    if !resp.status().is_success() {
        return Err(HealthError::HttpStatus {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}
