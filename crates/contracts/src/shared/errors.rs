use thiserror::Error;

use crate::domain::a002_lead_submission::aggregate::LeadField;

/// Why a lead did not reach the webhook
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<LeadField>),

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Failed to serialize payload: {0}")]
    Serialize(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),
}

fn join_fields(fields: &[LeadField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SubmitError {
    /// Guard failures are caught before any request is built
    pub fn is_precondition(&self) -> bool {
        matches!(self, SubmitError::MissingFields(_) | SubmitError::InvalidEmail(_))
    }

    /// Text of the blocking alert shown to the visitor
    pub fn alert_text(&self) -> String {
        match self {
            SubmitError::MissingFields(fields) => {
                format!("Error: Missing required fields: {}", join_fields(fields))
            }
            SubmitError::InvalidEmail(_) => {
                "Error: Invalid email address. Please check and try again.".to_string()
            }
            _ => "There was an error submitting your form. Please try again.".to_string(),
        }
    }
}
