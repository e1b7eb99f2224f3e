use serde::{Deserialize, Serialize};

use crate::enums::form_variant::FormVariant;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Sign-Up for a TastyFX Account";
pub const DEFAULT_CONTENT: &str = "Click below to complete the sign-up process.";
pub const DEFAULT_BUTTON_LABEL: &str = "TAKE ME THERE";
pub const DEFAULT_THANKYOU_PAGE: &str = "thankyou_tastyfx.html";
pub const DEFAULT_LEAD_SOURCE: &str = "Unknown";

// ============================================================================
// Trigger attributes
// ============================================================================

/// Исходные `data-*` атрибуты элемента, открывшего модальное окно.
///
/// `None` и `Some("")` одинаково означают "не задано".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerAttributes {
    pub title: Option<String>,
    pub content: Option<String>,
    pub button_label: Option<String>,
    pub thankyou_page: Option<String>,
    pub lead_source: Option<String>,
}

/// Атрибуты триггера с подставленными значениями по умолчанию
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub content: String,
    pub button_label: String,
    pub thankyou_page: String,
    pub lead_source: String,
}

fn or_default(value: &Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => default.to_string(),
    }
}

impl TriggerAttributes {
    pub fn resolve(&self) -> ModalContent {
        ModalContent {
            title: or_default(&self.title, DEFAULT_TITLE),
            content: or_default(&self.content, DEFAULT_CONTENT),
            button_label: or_default(&self.button_label, DEFAULT_BUTTON_LABEL),
            thankyou_page: or_default(&self.thankyou_page, DEFAULT_THANKYOU_PAGE),
            lead_source: or_default(&self.lead_source, DEFAULT_LEAD_SOURCE),
        }
    }
}

// ============================================================================
// Form config
// ============================================================================

/// Текущая конфигурация формы, заменяется при каждом открытии окна
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub thankyou_page: String,
    pub lead_source: String,
    pub form_type: FormVariant,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            thankyou_page: DEFAULT_THANKYOU_PAGE.to_string(),
            lead_source: DEFAULT_LEAD_SOURCE.to_string(),
            form_type: FormVariant::Tastyfx,
        }
    }
}

impl FormConfig {
    pub fn from_modal(content: &ModalContent) -> Self {
        Self {
            thankyou_page: content.thankyou_page.clone(),
            lead_source: content.lead_source.clone(),
            form_type: FormVariant::from_lead_source(&content.lead_source),
        }
    }

    /// Значение скрытого поля, если страница его задала, иначе из конфигурации
    pub fn effective_thankyou_page(&self, hidden: Option<&str>) -> String {
        pick_non_empty(hidden, &self.thankyou_page)
    }

    pub fn effective_lead_source(&self, hidden: Option<&str>) -> String {
        pick_non_empty(hidden, &self.lead_source)
    }
}

fn pick_non_empty(candidate: Option<&str>, fallback: &str) -> String {
    match candidate {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attributes_fall_back_to_tastyfx() {
        let content = TriggerAttributes::default().resolve();
        assert_eq!(content.title, DEFAULT_TITLE);
        assert_eq!(content.button_label, DEFAULT_BUTTON_LABEL);
        assert_eq!(content.lead_source, DEFAULT_LEAD_SOURCE);

        let config = FormConfig::from_modal(&content);
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_empty_attribute_counts_as_missing() {
        let attrs = TriggerAttributes {
            thankyou_page: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(attrs.resolve().thankyou_page, DEFAULT_THANKYOU_PAGE);
    }

    #[test]
    fn test_config_follows_lead_source() {
        let attrs = TriggerAttributes {
            thankyou_page: Some("thankyou_oanda.html".into()),
            lead_source: Some("Oanda Campaign A".into()),
            ..Default::default()
        };
        let config = FormConfig::from_modal(&attrs.resolve());
        assert_eq!(config.form_type, FormVariant::Oanda);
        assert_eq!(config.thankyou_page, "thankyou_oanda.html");
    }

    #[test]
    fn test_hidden_values_override_config_when_present() {
        let config = FormConfig::default();
        assert_eq!(config.effective_lead_source(Some("Footer")), "Footer");
        assert_eq!(config.effective_lead_source(Some("")), DEFAULT_LEAD_SOURCE);
        assert_eq!(
            config.effective_thankyou_page(None),
            DEFAULT_THANKYOU_PAGE
        );
    }
}
