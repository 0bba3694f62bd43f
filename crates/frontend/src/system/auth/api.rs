use contracts::shared::ApiEnvelope;
use contracts::system::auth::{LoginRequest, RegisterRequest, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with university email and password
pub async fn login(email: String, password: String) -> Result<UserInfo, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/user/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        // The error envelope carries a user-readable message when available.
        if let Ok(envelope) = response.json::<ApiEnvelope<serde_json::Value>>().await {
            if let Some(message) = envelope.message {
                return Err(message);
            }
        }
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<UserInfo>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_data()
}

/// Register a new account
pub async fn register(request: RegisterRequest) -> Result<String, String> {
    let response = Request::post(&api_url("/user/register"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        if let Ok(envelope) = response.json::<ApiEnvelope<serde_json::Value>>().await {
            if let Some(message) = envelope.message {
                return Err(message);
            }
        }
        return Err(format!("Registration failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<serde_json::Value>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_message()
}
