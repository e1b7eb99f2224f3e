use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a002_lead_submission::aggregate::SubmissionPayload;
use crate::enums::form_variant::FormVariant;

pub const DEFAULT_LOG_STORAGE_KEY: &str = "webhookLog";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Error,
}

/// Outcome of the latest submission, kept in local storage under a single key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookLogEntry {
    pub timestamp: String,
    pub status: LogStatus,
    pub form_type: FormVariant,
    pub lead_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SubmissionPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl WebhookLogEntry {
    pub fn success(at: DateTime<Utc>, form_type: FormVariant, payload: &SubmissionPayload) -> Self {
        Self {
            timestamp: iso_timestamp(at),
            status: LogStatus::Success,
            form_type,
            lead_source: payload.lead_source.clone(),
            data: Some(payload.clone()),
            error: None,
        }
    }

    pub fn failure(
        at: DateTime<Utc>,
        form_type: FormVariant,
        lead_source: &str,
        error: impl ToString,
    ) -> Self {
        Self {
            timestamp: iso_timestamp(at),
            status: LogStatus::Error,
            form_type,
            lead_source: lead_source.to_string(),
            data: None,
            error: Some(error.to_string()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "123-456-7890".into(),
            message: String::new(),
            lead_source: "Contact Us".into(),
            source: "TradingForexUSA.com".into(),
        }
    }

    #[test]
    fn test_success_entry_carries_payload() {
        let entry = WebhookLogEntry::success(at(), FormVariant::Contact, &payload());
        let value: serde_json::Value = serde_json::from_str(&entry.to_json().unwrap()).unwrap();

        assert_eq!(value["timestamp"], "2024-03-15T14:02:26.000Z");
        assert_eq!(value["status"], "success");
        assert_eq!(value["formType"], "contact");
        assert_eq!(value["leadSource"], "Contact Us");
        assert_eq!(value["data"]["email"], "ada@example.com");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_entry_carries_message() {
        let entry = WebhookLogEntry::failure(at(), FormVariant::Oanda, "Oanda A", "Network error: offline");
        let json = entry.to_json().unwrap();
        let back: WebhookLogEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(back.status, LogStatus::Error);
        assert_eq!(back.error.as_deref(), Some("Network error: offline"));
        assert!(back.data.is_none());
        assert!(!json.contains("\"data\""));
    }
}
