use serde::Deserialize;

/// Standard response wrapper used by every API endpoint:
/// `{ "status": "success", "message": "...", "data": ..., "statusCode": 200 }`.
///
/// `data` is absent (or null) on failures and on mutations that only return a
/// confirmation message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub status_code: i32,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Unwrap the payload, folding envelope-level failures into the error
    /// string surfaced to the UI.
    pub fn into_data(self) -> Result<T, String> {
        if !self.is_success() {
            return Err(self
                .message
                .unwrap_or_else(|| format!("Request failed (HTTP {})", self.status_code)));
        }
        self.data
            .ok_or_else(|| "Response carried no data".to_string())
    }

    /// Unwrap a mutation response where only the confirmation message matters.
    pub fn into_message(self) -> Result<String, String> {
        if !self.is_success() {
            return Err(self
                .message
                .unwrap_or_else(|| format!("Request failed (HTTP {})", self.status_code)));
        }
        Ok(self.message.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_data() {
        let env: ApiEnvelope<Vec<String>> = serde_json::from_str(
            r#"{"status":"success","message":"Retrieved","data":["a","b"],"statusCode":200}"#,
        )
        .unwrap();
        assert_eq!(env.into_data().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_success_without_data_is_an_error_for_into_data() {
        let env: ApiEnvelope<String> = serde_json::from_str(
            r#"{"status":"success","message":"Product Saved","data":null,"statusCode":201}"#,
        )
        .unwrap();
        assert!(env.clone().into_message().is_ok());
        assert!(env.into_data().is_err());
    }

    #[test]
    fn test_failure_uses_server_message() {
        let env: ApiEnvelope<String> = serde_json::from_str(
            r#"{"status":"error","message":"Email already registered","statusCode":400}"#,
        )
        .unwrap();
        assert_eq!(env.into_data().unwrap_err(), "Email already registered");
    }
}
