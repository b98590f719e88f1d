//! JSON envelope shared by every endpoint

use serde::Serialize;

/// `{success, data?, error?, message?}` wrapper around every response body
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Short error title, e.g. "Listing not found"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: Some(message.into()),
        }
    }
}
