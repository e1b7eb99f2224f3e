//! Seams between the lead-capture logic and the browser.
//!
//! `shared::dom` implements these against the live page; tests use in-memory
//! fakes. Every setter is a no-op when the page lacks the target element.

use chrono::{DateTime, Utc};
use lead_contracts::domain::a002_lead_submission::aggregate::LeadField;
use lead_contracts::shared::errors::SubmitError;
use lead_contracts::shared::validation::ErrorSlot;

use super::config::TransportMode;

/// Text nodes of the modal that follow the trigger button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalText {
    Title,
    Content,
    SubmitLabel,
}

impl ModalText {
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalText::Title => "modalTitle",
            ModalText::Content => "modalContent",
            ModalText::SubmitLabel => SUBMIT_BUTTON_ID,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiddenField {
    ThankyouPage,
    LeadSource,
}

impl HiddenField {
    pub fn element_id(&self) -> &'static str {
        match self {
            HiddenField::ThankyouPage => "thankyouPage",
            HiddenField::LeadSource => "leadSource",
        }
    }
}

pub const SUBMIT_BUTTON_ID: &str = "submitBtn";
pub const MESSAGE_BOX_ID: &str = "msgBox";
pub const FORM_ID: &str = "tastyfxForm";
pub const CONSENT_SELECTOR: &str = "input[name=\"consent\"]";
pub const TRIGGER_SELECTOR: &str = "[data-bs-toggle='modal']";

/// The modal and its form
pub trait FormSurface {
    /// Raw value of a field, `None` when the element is missing
    fn field_value(&self, field: LeadField) -> Option<String>;
    fn set_field_value(&self, field: LeadField, value: &str);

    fn consent_checked(&self) -> bool;
    fn set_consent_checked(&self, checked: bool);

    fn set_error_text(&self, slot: ErrorSlot, text: &str);
    fn set_modal_text(&self, target: ModalText, text: &str);

    fn hidden_value(&self, field: HiddenField) -> Option<String>;
    fn set_hidden_value(&self, field: HiddenField, value: &str);

    fn set_message_box_visible(&self, visible: bool);

    fn has_submit_button(&self) -> bool;
    fn set_submit_enabled(&self, enabled: bool);
}

/// Window-level side effects
pub trait BrowserHost {
    fn open_in_new_tab(&self, url: &str);
    /// Blocking `alert()`
    fn alert(&self, message: &str);
    fn store_item(&self, key: &str, value: &str);
    fn now(&self) -> DateTime<Utc>;
    fn schedule_reload(&self, delay_ms: u32);
}

#[allow(async_fn_in_trait)]
pub trait WebhookTransport {
    async fn post_json(&self, url: &str, body: &str, mode: TransportMode)
        -> Result<(), SubmitError>;
}
