use serde::{Deserialize, Serialize};

use crate::shared::errors::SubmitError;

pub const DEFAULT_SOURCE_NAME: &str = "TradingForexUSA.com";

// ============================================================================
// Fields
// ============================================================================

/// Текстовые поля формы, адресуются по CSS-классу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadField {
    Firstname,
    Lastname,
    Email,
    Phone,
    Message,
}

impl LeadField {
    pub fn key(&self) -> &'static str {
        match self {
            LeadField::Firstname => "firstname",
            LeadField::Lastname => "lastname",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Message => "message",
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            LeadField::Firstname => ".firstname",
            LeadField::Lastname => ".lastname",
            LeadField::Email => ".email",
            LeadField::Phone => ".phone",
            LeadField::Message => ".message",
        }
    }

    pub fn all() -> [LeadField; 5] {
        [
            LeadField::Firstname,
            LeadField::Lastname,
            LeadField::Email,
            LeadField::Phone,
            LeadField::Message,
        ]
    }

    /// Обязательные поля в порядке вывода в сообщении об ошибке
    pub fn required() -> [LeadField; 4] {
        [
            LeadField::Firstname,
            LeadField::Lastname,
            LeadField::Email,
            LeadField::Phone,
        ]
    }
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Снимок формы; значения обрезаются при чтении
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub consent: bool,
}

impl LeadFields {
    /// Собрать из функции чтения поля (`None`, если поля нет на странице)
    pub fn capture<F>(mut read: F, consent: bool) -> Self
    where
        F: FnMut(LeadField) -> Option<String>,
    {
        let mut value = |field: LeadField| read(field).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            firstname: value(LeadField::Firstname),
            lastname: value(LeadField::Lastname),
            email: value(LeadField::Email),
            phone: value(LeadField::Phone),
            message: value(LeadField::Message),
            consent,
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Firstname => &self.firstname,
            LeadField::Lastname => &self.lastname,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Message => &self.message,
        }
    }

    pub fn missing_required(&self) -> Vec<LeadField> {
        LeadField::required()
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Последняя проверка перед отправкой
    pub fn ensure_submittable(&self) -> Result<(), SubmitError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }
        if !self.email.contains('@') {
            return Err(SubmitError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Тело запроса к вебхуку, общее для всех трех вариантов формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub lead_source: String,
    pub source: String,
}

impl SubmissionPayload {
    pub fn new(fields: &LeadFields, lead_source: &str, source: &str) -> Self {
        Self {
            firstname: fields.firstname.clone(),
            lastname: fields.lastname.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            message: fields.message.clone(),
            lead_source: lead_source.to_string(),
            source: source.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(self).map_err(|e| SubmitError::Serialize(e.to_string()))
    }
}
