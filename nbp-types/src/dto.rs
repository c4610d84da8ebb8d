//! Response envelope shared by the HTTP and CLI surfaces.

use serde::{Deserialize, Serialize};

/// JSend-style envelope: `{"status":"success","data":..}` or
/// `{"status":"error","message":".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success { data: T },
    Error { message: String },
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RateTable;

    #[test]
    fn test_success_envelope_shape() {
        let env = Envelope::success(RateTable::default());
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["status"], "success");
        assert!(json["data"]["currencies"].is_array());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let env: Envelope<RateTable> = Envelope::error("not found");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({"status": "error", "message": "not found"}));
    }
}
