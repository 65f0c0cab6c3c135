//! Request and response types for the dashboard endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A selector change sent by the page
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackRequest {
    /// Id of the selector that changed
    pub input: String,
    /// New value; `null` when the selection was cleared
    #[serde(default)]
    pub value: Value,
}

/// Content to place in a page region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackResponse {
    pub output: &'static str,
    pub content: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub finals: usize,
    pub countries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_request_missing_value_is_null() {
        let req: CallbackRequest = serde_json::from_str(r#"{"input":"year-dropdown"}"#).unwrap();
        assert_eq!(req.input, "year-dropdown");
        assert!(req.value.is_null());
    }

    #[test]
    fn test_callback_request_with_number() {
        let req: CallbackRequest =
            serde_json::from_str(r#"{"input":"year-dropdown","value":1970}"#).unwrap();
        assert_eq!(req.value.as_u64(), Some(1970));
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            uptime_secs: 42,
            finals: 21,
            countries: 8,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["uptime_secs"], 42);
        assert_eq!(json["finals"], 21);
        assert_eq!(json["countries"], 8);
    }
}
