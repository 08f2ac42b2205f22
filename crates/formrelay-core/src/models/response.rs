/// Response returned for every request
use crate::error::FormRelayError;
use serde::{Deserialize, Serialize};

/// Single response shape for success and failure alike
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub message: String,
}

impl ApiResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Success response naming the resolved target address
    pub fn sent_to(target: &str) -> Self {
        Self::new(200, format!("Email successfully sent to {}", target))
    }
}

impl From<&FormRelayError> for ApiResponse {
    fn from(err: &FormRelayError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

impl From<FormRelayError> for ApiResponse {
    fn from(err: FormRelayError) -> Self {
        Self::from(&err)
    }
}
