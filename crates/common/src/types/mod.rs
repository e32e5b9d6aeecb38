use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const HEALTH_MESSAGE: &str = "Contact Form API is running";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

impl Health {
    pub fn ok() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            status: "ok".into(),
            message: HEALTH_MESSAGE.into(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Body of every non-validation error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_iso_utc() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let h = Health::at(at);
        assert_eq!(h.timestamp, "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn error_body_shape() {
        let v = serde_json::to_value(ErrorBody::new("Endpoint not found")).unwrap();
        assert_eq!(v, serde_json::json!({"error": "Endpoint not found"}));
    }
}
